//! Shared helpers for router tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use dyndns_core::{
    ApiMessage, ApiResponse, DnsApi, DnsRecord, DyndnsConfig, Error, RecordUpdate, Result, Zone,
};
use http_body_util::BodyExt;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const AUTH_CODE: &str = "SECRET";

/// Provider double with a fixed zone/record set and a shared call log
#[derive(Clone)]
pub struct RecordingApi {
    zones: Vec<Zone>,
    records: Vec<DnsRecord>,
    reject_update_with: Option<String>,
    zones_time_out: bool,
    calls: Arc<Mutex<Vec<String>>>,
    updates: Arc<Mutex<Vec<RecordUpdate>>>,
}

impl RecordingApi {
    /// `example.com` zone holding an A record for `home.example.com`
    pub fn new() -> Self {
        Self {
            zones: vec![Zone::active("zone-1", "example.com")],
            records: vec![DnsRecord::new(
                "rec-1",
                "home.example.com",
                "A",
                "192.0.2.1",
            )],
            reject_update_with: None,
            zones_time_out: false,
            calls: Arc::new(Mutex::new(Vec::new())),
            updates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn rejecting_updates(mut self, message: &str) -> Self {
        self.reject_update_with = Some(message.to_string());
        self
    }

    pub fn timing_out(mut self) -> Self {
        self.zones_time_out = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<RecordUpdate> {
        self.updates.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl DnsApi for RecordingApi {
    async fn list_zones(&self) -> Result<ApiResponse<Vec<Zone>>> {
        self.record("GET /zones".to_string());
        if self.zones_time_out {
            return Err(Error::timeout("operation timed out"));
        }
        Ok(ApiResponse::ok(self.zones.clone()))
    }

    async fn list_dns_records(&self, zone_id: &str) -> Result<ApiResponse<Vec<DnsRecord>>> {
        self.record(format!("GET /zones/{}/dns_records", zone_id));
        Ok(ApiResponse::ok(self.records.clone()))
    }

    async fn update_dns_record(
        &self,
        zone_id: &str,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<ApiResponse<serde_json::Value>> {
        self.record(format!("PUT /zones/{}/dns_records/{}", zone_id, record_id));
        self.updates.lock().unwrap().push(update.clone());

        match &self.reject_update_with {
            Some(message) => Ok(ApiResponse::failed(vec![ApiMessage::new(message.clone())])),
            None => Ok(ApiResponse::ok(serde_json::json!({ "id": record_id }))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

/// Configuration used by every router test
pub fn test_config() -> DyndnsConfig {
    DyndnsConfig::new("token", AUTH_CODE)
}

/// Router backed by a clone of `api` (the call log is shared)
pub fn router(api: &RecordingApi) -> Router {
    router_with(test_config(), api)
}

pub fn router_with(config: DyndnsConfig, api: &RecordingApi) -> Router {
    dyndnsd::app(&config, Box::new(api.clone())).unwrap()
}

/// Send a GET request and return status and body text
pub async fn get(router: Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, String) {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    send(router, builder.body(Body::empty()).unwrap()).await
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
