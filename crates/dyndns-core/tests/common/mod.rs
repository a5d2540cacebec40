//! Test doubles and common utilities for contract tests
//!
//! This module provides a scripted `DnsApi` that records every call so tests
//! can verify ordering and call counts without a real provider.

#![allow(dead_code)]

use dyndns_core::error::{Error, Result};
use dyndns_core::model::{ApiMessage, ApiResponse, DnsRecord, RecordUpdate, Zone};
use dyndns_core::traits::DnsApi;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One call made against the mock API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListZones,
    ListDnsRecords { zone_id: String },
    UpdateDnsRecord {
        zone_id: String,
        record_id: String,
        update: RecordUpdate,
    },
}

/// How the mock answers the update call
#[derive(Debug, Clone)]
pub enum UpdateReply {
    Success,
    Rejected(Vec<ApiMessage>),
    NetworkFailure,
}

/// A mock DnsApi that tracks calls
pub struct MockDnsApi {
    zones: Vec<Zone>,
    records: HashMap<String, Vec<DnsRecord>>,
    update_reply: UpdateReply,
    /// Every call, in order
    calls: Arc<Mutex<Vec<ApiCall>>>,
    /// Call counter across all methods
    call_count: Arc<AtomicUsize>,
}

impl MockDnsApi {
    pub fn new() -> Self {
        Self {
            zones: Vec::new(),
            records: HashMap::new(),
            update_reply: UpdateReply::Success,
            calls: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zones.push(zone);
        self
    }

    pub fn with_record(mut self, zone_id: &str, record: DnsRecord) -> Self {
        self.records
            .entry(zone_id.to_string())
            .or_default()
            .push(record);
        self
    }

    pub fn with_update_reply(mut self, reply: UpdateReply) -> Self {
        self.update_reply = reply;
        self
    }

    /// Get the number of API calls made
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get the recorded calls, in order
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Create a new MockDnsApi that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            zones: other.zones.clone(),
            records: other.records.clone(),
            update_reply: other.update_reply.clone(),
            calls: Arc::clone(&other.calls),
            call_count: Arc::clone(&other.call_count),
        }
    }

    fn record_call(&self, call: ApiCall) {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl DnsApi for MockDnsApi {
    async fn list_zones(&self) -> Result<ApiResponse<Vec<Zone>>> {
        self.record_call(ApiCall::ListZones);
        Ok(ApiResponse::ok(self.zones.clone()))
    }

    async fn list_dns_records(&self, zone_id: &str) -> Result<ApiResponse<Vec<DnsRecord>>> {
        self.record_call(ApiCall::ListDnsRecords {
            zone_id: zone_id.to_string(),
        });
        Ok(ApiResponse::ok(
            self.records.get(zone_id).cloned().unwrap_or_default(),
        ))
    }

    async fn update_dns_record(
        &self,
        zone_id: &str,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<ApiResponse<serde_json::Value>> {
        self.record_call(ApiCall::UpdateDnsRecord {
            zone_id: zone_id.to_string(),
            record_id: record_id.to_string(),
            update: update.clone(),
        });

        match &self.update_reply {
            UpdateReply::Success => Ok(ApiResponse::ok(serde_json::json!({ "id": record_id }))),
            UpdateReply::Rejected(errors) => Ok(ApiResponse::failed(errors.clone())),
            UpdateReply::NetworkFailure => Err(Error::network("connection reset")),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Mock API holding `example.com` and `other.com` with an A record for
/// `sub.example.com`
pub fn example_api() -> MockDnsApi {
    MockDnsApi::new()
        .with_zone(Zone::active("zone-example", "example.com"))
        .with_zone(Zone::active("zone-other", "other.com"))
        .with_record(
            "zone-example",
            DnsRecord::new("rec-sub", "sub.example.com", "A", "192.0.2.1"),
        )
}

/// Build query parameters from pairs
pub fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
