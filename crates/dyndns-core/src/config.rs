//! Configuration types for the dyndns endpoint
//!
//! [`DyndnsConfig`] is built once at startup and handed to the components
//! that need it. Nothing in this crate reads the environment directly.

use serde::{Deserialize, Serialize};

/// Cloudflare API v4 base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Route the update handler is mounted on
pub const DEFAULT_ROUTE_PATH: &str = "/dyndns/update";

/// Header set by the Cloudflare edge with the original client address
pub const DEFAULT_CLIENT_IP_HEADER: &str = "CF-Connecting-IP";

/// Main dyndns configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct DyndnsConfig {
    /// DNS provider configuration
    pub provider: ProviderConfig,

    /// Shared secret expected in the `code` query parameter
    /// ⚠️ NEVER log this value
    pub auth_code: String,

    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Update mode (live or dry-run)
    #[serde(default)]
    pub mode: UpdateMode,
}

impl DyndnsConfig {
    /// Create a configuration with default server settings in live mode
    pub fn new(api_token: impl Into<String>, auth_code: impl Into<String>) -> Self {
        Self {
            provider: ProviderConfig::new(api_token),
            auth_code: auth_code.into(),
            server: ServerConfig::default(),
            mode: UpdateMode::Live,
        }
    }

    /// Set the update mode
    pub fn with_mode(mut self, mode: UpdateMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.auth_code.is_empty() {
            return Err(crate::Error::config("Auth code cannot be empty"));
        }

        self.provider.validate()?;
        self.server.validate()?;

        Ok(())
    }
}

// Custom Debug implementation that hides the secrets
impl std::fmt::Debug for DyndnsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DyndnsConfig")
            .field("provider", &self.provider)
            .field("auth_code", &"<REDACTED>")
            .field("server", &self.server)
            .field("mode", &self.mode)
            .finish()
    }
}

/// DNS provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API token with Zone:Read and DNS:Edit permissions
    /// ⚠️ NEVER log this value
    pub api_token: String,

    /// Base URL of the provider API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-call HTTP timeout (in seconds)
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl ProviderConfig {
    /// Create a provider configuration pointing at the public Cloudflare API
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            api_base_url: default_api_base_url(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }

    /// Override the base URL (used for tests and API proxies)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Validate the provider configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.api_token.is_empty() {
            return Err(crate::Error::config("API token cannot be empty"));
        }

        if !self.api_base_url.starts_with("https://") && !self.api_base_url.starts_with("http://")
        {
            return Err(crate::Error::config(format!(
                "API base URL must use HTTP or HTTPS scheme. Got: {}",
                self.api_base_url
            )));
        }

        if !(1..=300).contains(&self.http_timeout_secs) {
            return Err(crate::Error::config(format!(
                "HTTP timeout must be between 1 and 300 seconds. Got: {}",
                self.http_timeout_secs
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_token", &"<REDACTED>")
            .field("api_base_url", &self.api_base_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (e.g., "0.0.0.0:8080")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Path of the update route
    #[serde(default = "default_route_path")]
    pub route_path: String,

    /// Request header carrying the caller's address, set by the fronting proxy
    #[serde(default = "default_client_ip_header")]
    pub client_ip_header: String,

    /// Fall back to the TCP peer address when the header is missing
    ///
    /// Only enable this when the endpoint is reached directly. Behind a proxy
    /// the peer address is the proxy's own.
    #[serde(default)]
    pub trust_peer_addr: bool,
}

impl ServerConfig {
    /// Validate the server configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(crate::Error::config(format!(
                "Listen address is not a valid socket address: {}",
                self.listen_addr
            )));
        }

        if !self.route_path.starts_with('/') {
            return Err(crate::Error::config(format!(
                "Route path must start with '/'. Got: {}",
                self.route_path
            )));
        }

        if self.client_ip_header.is_empty() {
            return Err(crate::Error::config("Client IP header cannot be empty"));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            route_path: default_route_path(),
            client_ip_header: default_client_ip_header(),
            trust_peer_addr: false,
        }
    }
}

/// Whether record updates are actually sent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateMode {
    /// Perform lookups and the update
    #[default]
    Live,
    /// Perform lookups, log the intended update and skip it
    DryRun,
}

impl std::str::FromStr for UpdateMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" | "" => Ok(UpdateMode::Live),
            "dry-run" | "dry_run" | "dryrun" => Ok(UpdateMode::DryRun),
            other => Err(crate::Error::config(format!(
                "Update mode '{}' is not valid. Valid modes: live, dry-run",
                other
            ))),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_http_timeout_secs() -> u64 {
    30
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_route_path() -> String {
    DEFAULT_ROUTE_PATH.to_string()
}

fn default_client_ip_header() -> String {
    DEFAULT_CLIENT_IP_HEADER.to_string()
}
