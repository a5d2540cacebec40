//! Environment-based configuration
//!
//! All configuration is done via environment variables:
//!
//! ### Secrets
//! - `DYNDNS_API_TOKEN`: Cloudflare API token (required)
//! - `DYNDNS_AUTH_CODE`: Shared secret expected in the `code` parameter (required)
//!
//! ### Provider
//! - `DYNDNS_API_BASE_URL`: API base URL (default: Cloudflare API v4)
//! - `DYNDNS_HTTP_TIMEOUT_SECS`: Per-call timeout, 1-300 (default: 30)
//!
//! ### Listener
//! - `DYNDNS_LISTEN_ADDR`: Socket address to bind (default: 0.0.0.0:8080)
//! - `DYNDNS_ROUTE_PATH`: Update route (default: /dyndns/update)
//! - `DYNDNS_CLIENT_IP_HEADER`: Header carrying the caller address (default: CF-Connecting-IP)
//! - `DYNDNS_TRUST_PEER_ADDR`: Fall back to the TCP peer address (default: false)
//!
//! ### Daemon
//! - `DYNDNS_MODE`: `live` or `dry-run` (default: live)
//! - `DYNDNS_LOG_LEVEL`: trace, debug, info, warn, error (default: info)

use anyhow::{Context, Result};
use dyndns_core::{DyndnsConfig, UpdateMode};
use tracing::Level;

/// Daemon settings: the core configuration plus process-level options
#[derive(Debug, Clone)]
pub struct Settings {
    /// Configuration handed to the endpoint components
    pub config: DyndnsConfig,

    /// Maximum log level
    pub log_level: Level,
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup("DYNDNS_API_TOKEN").filter(|v| !v.is_empty()).context(
            "DYNDNS_API_TOKEN is required. Set it via: export DYNDNS_API_TOKEN=your_token",
        )?;
        let auth_code = lookup("DYNDNS_AUTH_CODE").filter(|v| !v.is_empty()).context(
            "DYNDNS_AUTH_CODE is required. Set it via: export DYNDNS_AUTH_CODE=your_secret",
        )?;

        let mut config = DyndnsConfig::new(api_token, auth_code);

        if let Some(url) = lookup("DYNDNS_API_BASE_URL") {
            config.provider.api_base_url = url;
        }

        if let Some(timeout) = lookup("DYNDNS_HTTP_TIMEOUT_SECS") {
            config.provider.http_timeout_secs = timeout.parse().with_context(|| {
                format!("DYNDNS_HTTP_TIMEOUT_SECS must be a number of seconds. Got: {}", timeout)
            })?;
        }

        if let Some(addr) = lookup("DYNDNS_LISTEN_ADDR") {
            config.server.listen_addr = addr;
        }

        if let Some(path) = lookup("DYNDNS_ROUTE_PATH") {
            config.server.route_path = path;
        }

        if let Some(header) = lookup("DYNDNS_CLIENT_IP_HEADER") {
            config.server.client_ip_header = header;
        }

        if let Some(trust) = lookup("DYNDNS_TRUST_PEER_ADDR") {
            config.server.trust_peer_addr = parse_bool("DYNDNS_TRUST_PEER_ADDR", &trust)?;
        }

        if let Some(mode) = lookup("DYNDNS_MODE") {
            config.mode = mode.parse::<UpdateMode>()?;
        }

        let log_level = match lookup("DYNDNS_LOG_LEVEL") {
            Some(level) => parse_log_level(&level)?,
            None => Level::INFO,
        };

        Ok(Self { config, log_level })
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;

        validate_route_path(&self.config.server.route_path)?;

        Ok(())
    }
}

/// Reject route paths the router would treat as patterns or refuse outright
fn validate_route_path(path: &str) -> Result<()> {
    let literal = match path.strip_prefix('/') {
        Some(rest) => {
            let segments: Vec<&str> = rest.split('/').collect();
            let last = segments.len() - 1;

            // Only the final segment may be empty ("/" or a trailing slash)
            segments.iter().enumerate().all(|(i, segment)| {
                (i == last || !segment.is_empty())
                    && !segment.starts_with(':')
                    && !segment.contains(['{', '}', '*'])
            })
        }
        None => false,
    };

    if !literal {
        anyhow::bail!(
            "DYNDNS_ROUTE_PATH must be a literal path like /dyndns/update. Got: {}",
            path
        );
    }

    Ok(())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => anyhow::bail!("{} must be true or false. Got: {}", name, value),
    }
}

fn parse_log_level(value: &str) -> Result<Level> {
    match value.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "DYNDNS_LOG_LEVEL '{}' is not valid. \
            Valid levels: trace, debug, info, warn, error",
            value
        ),
    }
}
