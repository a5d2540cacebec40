//! Update orchestrator
//!
//! The UpdateOrchestrator is responsible for:
//! - Extracting hostname and IP from the request
//! - Validating the IP as IPv4
//! - Resolving the zone and record via the provider API
//! - Issuing the record update
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    query + caller IP    ┌─────────────────────┐
//! │  Handler    │────────────────────────▶│ UpdateOrchestrator  │
//! └─────────────┘                         └─────────────────────┘
//!                                                    │
//!                 ┌──────────────────────────────────┼──────────────────────────┐
//!                 │                                  │                          │
//!                 ▼                                  ▼                          ▼
//!         ┌──────────────┐                 ┌──────────────────┐       ┌──────────────────┐
//!         │ GET /zones   │ ── zone id ──▶  │ GET dns_records  │ ───▶  │ PUT dns_record   │
//!         └──────────────┘                 └──────────────────┘       └──────────────────┘
//! ```
//!
//! ## Request Flow
//!
//! 1. Build an `UpdateRequest` (hostname required, some IP required)
//! 2. Validate the target IP
//! 3. Resolve the zone (see [`crate::resolve`])
//! 4. Resolve the record by exact name
//! 5. Update the record (skipped in dry-run mode)
//!
//! Every step depends on the previous one, so provider calls are strictly
//! sequential. Nothing is retried or cached.

use crate::config::UpdateMode;
use crate::error::{Error, Result};
use crate::model::{DnsRecord, RecordUpdate, Zone};
use crate::request::UpdateRequest;
use crate::resolve::{select_record, select_zone};
use crate::traits::DnsApi;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use tracing::{debug, error, info, warn};

/// Result of a successfully handled update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Record update was accepted by the provider
    Updated {
        hostname: String,
        zone_id: String,
        record_id: String,
        new_ip: Ipv4Addr,
        previous_content: String,
    },

    /// Dry-run mode: lookups succeeded, update was not sent
    DryRun {
        hostname: String,
        zone_id: String,
        record_id: String,
        new_ip: Ipv4Addr,
        previous_content: String,
    },
}

impl UpdateOutcome {
    /// The address the record now points at (or would point at)
    pub fn new_ip(&self) -> Ipv4Addr {
        match self {
            UpdateOutcome::Updated { new_ip, .. } | UpdateOutcome::DryRun { new_ip, .. } => *new_ip,
        }
    }
}

/// Drives a single update request against the provider API
///
/// Holds no per-request state; one instance serves every request.
pub struct UpdateOrchestrator {
    /// Provider API client
    api: Box<dyn DnsApi>,

    /// Live or dry-run
    mode: UpdateMode,
}

impl UpdateOrchestrator {
    /// Create a new orchestrator
    pub fn new(api: Box<dyn DnsApi>, mode: UpdateMode) -> Self {
        if mode == UpdateMode::DryRun {
            warn!("Update orchestrator running in DRY-RUN mode - no records will be changed");
        }

        Self { api, mode }
    }

    /// Handle an (already authorized) update request
    ///
    /// # Parameters
    ///
    /// - `params`: Decoded query parameters
    /// - `caller_ip`: Address the request was observed coming from, if known
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateOutcome)`: The record was updated (or would have been)
    /// - `Err(Error::BadRequest)`: Missing hostname, no IP, or invalid IP
    /// - `Err(Error::Provider)`: Zone/record not found or the provider refused
    /// - `Err(Error::Network)`: The provider could not be reached
    pub async fn handle_update(
        &self,
        params: &HashMap<String, String>,
        caller_ip: Option<&str>,
    ) -> Result<UpdateOutcome> {
        let request = UpdateRequest::from_query(params, caller_ip)?;
        let new_ip = request.target_ip()?;

        debug!(
            "Update requested: {} -> {} (explicit: {})",
            request.hostname,
            new_ip,
            request.desired_ip.is_some()
        );

        self.apply(&request.hostname, new_ip).await
    }

    /// Point the record named `hostname` at `new_ip`
    pub async fn apply(&self, hostname: &str, new_ip: Ipv4Addr) -> Result<UpdateOutcome> {
        let zone = self.resolve_zone(hostname).await?;
        let record = self.resolve_record(&zone, hostname).await?;

        let update = RecordUpdate::for_record(&record, new_ip.to_string());

        if self.mode == UpdateMode::DryRun {
            info!(
                "[DRY-RUN] Would send PUT for zone {} record {} with payload: {}",
                zone.id,
                record.id,
                serde_json::to_string(&update).unwrap_or_default()
            );
            return Ok(UpdateOutcome::DryRun {
                hostname: hostname.to_string(),
                zone_id: zone.id,
                record_id: record.id,
                new_ip,
                previous_content: record.content,
            });
        }

        info!(
            "Updating {} DNS record: {} -> {} (was: {}, type: {})",
            self.api.provider_name(),
            hostname,
            new_ip,
            record.content,
            record.record_type
        );

        let response = self
            .api
            .update_dns_record(&zone.id, &record.id, &update)
            .await?;

        if !response.success {
            let detail = response
                .first_error()
                .unwrap_or_else(|| "no error detail reported".to_string());
            error!(
                "Provider rejected update of {} in zone {}: {}",
                hostname, zone.id, detail
            );
            return Err(Error::provider_with_detail(
                "Unable to set DNS record for given hostname. Check API Token.",
                detail,
            ));
        }

        info!("DNS record updated successfully: {} -> {}", hostname, new_ip);

        Ok(UpdateOutcome::Updated {
            hostname: hostname.to_string(),
            zone_id: zone.id,
            record_id: record.id,
            new_ip,
            previous_content: record.content,
        })
    }

    async fn resolve_zone(&self, hostname: &str) -> Result<Zone> {
        let response = self.api.list_zones().await?;

        if !response.success {
            let detail = response.first_error().unwrap_or_default();
            error!("Failed to list zones: {}", detail);
            return Err(Error::provider_with_detail(
                "Unable to access provider API to retrieve zones. Check API Token.",
                detail,
            ));
        }

        let zones = response.result.unwrap_or_default();
        debug!("Provider returned {} zone(s)", zones.len());

        let zone = select_zone(&zones, hostname).ok_or_else(|| {
            warn!("No active zone found for hostname {}", hostname);
            Error::provider(format!("zone not found for hostname {}", hostname))
        })?;

        debug!("Resolved zone {} ({}) for {}", zone.name, zone.id, hostname);
        Ok(zone.clone())
    }

    async fn resolve_record(&self, zone: &Zone, hostname: &str) -> Result<DnsRecord> {
        let response = self.api.list_dns_records(&zone.id).await?;

        if !response.success {
            let detail = response.first_error().unwrap_or_default();
            error!("Failed to list DNS records of zone {}: {}", zone.id, detail);
            return Err(Error::provider_with_detail(
                "Unable to access provider API to retrieve DNS records of zone. Check API Token.",
                detail,
            ));
        }

        let records = response.result.unwrap_or_default();

        let record = select_record(&records, hostname).ok_or_else(|| {
            warn!("No DNS record named {} in zone {}", hostname, zone.name);
            Error::provider(format!(
                "record not found for hostname {}. Create the DNS record first.",
                hostname
            ))
        })?;

        debug!("Resolved record {} ({}) for {}", record.id, record.record_type, hostname);
        Ok(record.clone())
    }
}
