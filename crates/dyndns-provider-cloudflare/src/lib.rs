// # Cloudflare API Client
//
// This crate provides the Cloudflare API v4 implementation of `DnsApi`.
//
// ## Behaviour
//
// - ✅ One HTTP request per trait call
// - ✅ Bearer token and JSON content type on every request
// - ✅ Per-call HTTP timeout (default 30 seconds)
// - ✅ Response envelope decoded as-is, whatever the HTTP status
// - ❌ NO interpretation of `success` (owned by UpdateOrchestrator)
// - ❌ NO retry logic
// - ❌ NO caching
//
// ## Security Requirements
//
// - API token NEVER appears in logs or `Debug` output
// - Client MUST fail fast if token is empty
//
// ## API Reference
//
// - Cloudflare API v4: https://developers.cloudflare.com/api/
// - List Zones: GET `/zones`
// - List DNS Records: GET `/zones/:zone_id/dns_records`
// - Update DNS Record: PUT `/zones/:zone_id/dns_records/:record_id`

use async_trait::async_trait;
use dyndns_core::config::ProviderConfig;
use dyndns_core::model::{ApiResponse, DnsRecord, RecordUpdate, Zone};
use dyndns_core::traits::DnsApi;
use dyndns_core::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Content type sent with every API request
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Cloudflare API client
///
/// # Trust Level: Untrusted
///
/// This client is isolated, stateless, and single-shot. Deciding what a
/// `success: false` envelope means is left to the caller.
pub struct CloudflareClient {
    /// Cloudflare API token
    /// ⚠️ NEVER log this value
    api_token: String,

    /// API base URL without trailing slash
    base_url: String,

    /// HTTP client for API requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for CloudflareClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareClient")
            .field("api_token", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl CloudflareClient {
    /// Create a new Cloudflare client
    ///
    /// # Parameters
    ///
    /// - `api_token`: Cloudflare API token with Zone:Read and DNS:Edit permissions
    /// - `base_url`: API base URL (e.g., "https://api.cloudflare.com/client/v4")
    /// - `timeout`: Per-call HTTP timeout
    ///
    /// # Security
    ///
    /// The API token will NEVER be logged or displayed in error messages.
    pub fn new(
        api_token: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_token = api_token.into();

        if api_token.is_empty() {
            return Err(Error::config("Cloudflare API token cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client from provider configuration
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;

        Self::new(
            config.api_token.clone(),
            config.api_base_url.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    /// API base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);

        self.client
            .request(method, url)
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
    }

    /// Send a request and decode the response envelope
    ///
    /// Non-2xx statuses are not errors here: Cloudflare reports failures in
    /// the envelope, which is returned to the caller untouched.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<ApiResponse<T>> {
        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Cloudflare responded with HTTP {}", status);
        }

        response.json::<ApiResponse<T>>().await.map_err(|e| {
            if e.is_decode() {
                Error::network(format!(
                    "Failed to parse Cloudflare response (HTTP {}): {}",
                    status, e
                ))
            } else {
                transport_error(e)
            }
        })
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::timeout(format!("Cloudflare request timed out: {}", e))
    } else {
        Error::network(format!("HTTP request failed: {}", e))
    }
}

#[async_trait]
impl DnsApi for CloudflareClient {
    async fn list_zones(&self) -> Result<ApiResponse<Vec<Zone>>> {
        tracing::debug!("Listing Cloudflare zones");
        self.send(self.request(Method::GET, "/zones")).await
    }

    async fn list_dns_records(&self, zone_id: &str) -> Result<ApiResponse<Vec<DnsRecord>>> {
        tracing::debug!("Listing DNS records of zone {}", zone_id);
        let path = format!("/zones/{}/dns_records", zone_id);
        self.send(self.request(Method::GET, &path)).await
    }

    async fn update_dns_record(
        &self,
        zone_id: &str,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<ApiResponse<serde_json::Value>> {
        tracing::debug!("Updating DNS record {} in zone {}", record_id, zone_id);
        let path = format!("/zones/{}/dns_records/{}", zone_id, record_id);
        self.send(self.request(Method::PUT, &path).json(update)).await
    }

    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }
}
