// # DNS API Trait
//
// Defines the interface to the DNS provider's REST API.
//
// ## Implementations
//
// - Cloudflare API v4: `dyndns-provider-cloudflare` crate
//
// ## Usage
//
// ```rust,ignore
// use dyndns_core::DnsApi;
//
// async fn first_zone(api: &dyn DnsApi) -> dyndns_core::Result<Option<String>> {
//     let zones = api.list_zones().await?;
//     Ok(zones.result.unwrap_or_default().first().map(|z| z.name.clone()))
// }
// ```

use crate::model::{ApiResponse, DnsRecord, RecordUpdate, Zone};
use async_trait::async_trait;

/// Trait for DNS provider API clients
///
/// Each method performs exactly one HTTP exchange and returns the provider's
/// decoded response envelope.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Trust Level: Untrusted
///
/// API clients are **untrusted** components with strict limitations:
///
/// ## Allowed Capabilities
/// - ✅ Perform HTTP/HTTPS API calls to their endpoints only
/// - ✅ Decode provider-specific responses
/// - ✅ Fail with `Error::Network` when the exchange cannot complete
///
/// ## Forbidden Capabilities
/// - ❌ Interpret the `success` flag (owned by `UpdateOrchestrator`)
/// - ❌ Implement retry logic or backoff
/// - ❌ Cache zones or records beyond a single call
/// - ❌ Spawn tasks or threads
///
/// ## Examples
///
/// ✅ **CORRECT**: hand the envelope back untouched
/// ```rust,ignore
/// async fn list_zones(&self) -> Result<ApiResponse<Vec<Zone>>> {
///     let response = self.get("/zones").send().await.map_err(network_error)?;
///     response.json().await.map_err(network_error)
/// }
/// ```
///
/// ❌ **WRONG**: deciding failure inside the client
/// ```rust,ignore
/// async fn list_zones(&self) -> Result<ApiResponse<Vec<Zone>>> {
///     let body: ApiResponse<Vec<Zone>> = /* ... */;
///     if !body.success {
///         return Err(Error::provider("zones unavailable")); // WRONG!
///     }
///     Ok(body)
/// }
/// ```
#[async_trait]
pub trait DnsApi: Send + Sync {
    /// List all zones accessible with the configured token
    ///
    /// # API Call
    ///
    /// ```http
    /// GET /zones
    /// ```
    async fn list_zones(&self) -> Result<ApiResponse<Vec<Zone>>, crate::Error>;

    /// List the DNS records of a zone
    ///
    /// # API Call
    ///
    /// ```http
    /// GET /zones/:zone_id/dns_records
    /// ```
    async fn list_dns_records(
        &self,
        zone_id: &str,
    ) -> Result<ApiResponse<Vec<DnsRecord>>, crate::Error>;

    /// Replace a DNS record's type, name and content
    ///
    /// # API Call
    ///
    /// ```http
    /// PUT /zones/:zone_id/dns_records/:record_id
    /// { "type": "A", "name": "sub.example.com", "content": "10.0.0.5" }
    /// ```
    async fn update_dns_record(
        &self,
        zone_id: &str,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<ApiResponse<serde_json::Value>, crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
