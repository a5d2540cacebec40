//! Cloudflare client tests against a mock HTTP server
//!
//! Verifies the wire contract: paths, methods, headers, the update body, and
//! that envelopes are handed back without interpretation.

use dyndns_core::model::{DnsRecord, RecordUpdate, ZoneStatus};
use dyndns_core::traits::DnsApi;
use dyndns_core::Error;
use dyndns_provider_cloudflare::CloudflareClient;
use mockito::Matcher;
use std::time::Duration;

const TOKEN: &str = "test-api-token";

fn client_for(server: &mockito::ServerGuard) -> CloudflareClient {
    CloudflareClient::new(TOKEN, server.url(), Duration::from_secs(5)).expect("client builds")
}

#[tokio::test]
async fn list_zones_sends_auth_and_content_type() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/zones")
        .match_header("authorization", "Bearer test-api-token")
        .match_header("content-type", "application/json;charset=UTF-8")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "success": true,
                "errors": [],
                "messages": [],
                "result": [
                    {"id": "z1", "name": "example.com", "status": "active", "paused": false},
                    {"id": "z2", "name": "other.com", "status": "pending", "paused": false}
                ]
            }"#,
        )
        .expect(1)
        .create_async()
        .await;

    let response = client_for(&server).list_zones().await.expect("call succeeds");

    mock.assert_async().await;
    assert!(response.success);

    let zones = response.result.expect("result present");
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].name, "example.com");
    assert!(zones[0].is_editable());
    assert_eq!(zones[1].status, ZoneStatus::Other("pending".to_string()));
}

#[tokio::test]
async fn list_dns_records_uses_zone_path() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/zones/z1/dns_records")
        .match_header("authorization", "Bearer test-api-token")
        .with_status(200)
        .with_body(
            r#"{
                "success": true,
                "errors": [],
                "result": [
                    {"id": "r1", "zone_id": "z1", "type": "A", "name": "sub.example.com",
                     "content": "192.0.2.1", "ttl": 1, "proxied": false}
                ]
            }"#,
        )
        .expect(1)
        .create_async()
        .await;

    let response = client_for(&server)
        .list_dns_records("z1")
        .await
        .expect("call succeeds");

    mock.assert_async().await;

    let records = response.result.expect("result present");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_type, "A");
    assert_eq!(records[0].zone_id.as_deref(), Some("z1"));
    assert_eq!(records[0].ttl, Some(1));
}

#[tokio::test]
async fn update_dns_record_puts_type_name_content() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("PUT", "/zones/z1/dns_records/r1")
        .match_header("authorization", "Bearer test-api-token")
        .match_header("content-type", "application/json;charset=UTF-8")
        .match_body(Matcher::Json(serde_json::json!({
            "type": "A",
            "name": "sub.example.com",
            "content": "10.0.0.5"
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "errors": [], "result": {"id": "r1"}}"#)
        .expect(1)
        .create_async()
        .await;

    let record = DnsRecord::new("r1", "sub.example.com", "A", "192.0.2.1");
    let update = RecordUpdate::for_record(&record, "10.0.0.5");

    let response = client_for(&server)
        .update_dns_record("z1", "r1", &update)
        .await
        .expect("call succeeds");

    mock.assert_async().await;
    assert!(response.success);
}

#[tokio::test]
async fn failed_envelope_is_returned_not_interpreted() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("PUT", "/zones/z1/dns_records/r1")
        .with_status(429)
        .with_body(
            r#"{"success": false, "errors": [{"code": 971, "message": "rate limited"}], "result": null}"#,
        )
        .create_async()
        .await;

    let record = DnsRecord::new("r1", "sub.example.com", "A", "192.0.2.1");
    let update = RecordUpdate::for_record(&record, "10.0.0.5");

    let response = client_for(&server)
        .update_dns_record("z1", "r1", &update)
        .await
        .expect("envelope decoded despite HTTP 429");

    assert!(!response.success);
    assert_eq!(response.first_error().as_deref(), Some("rate limited (code 971)"));
}

#[tokio::test]
async fn non_json_body_is_network_error() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/zones")
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = client_for(&server).list_zones().await.unwrap_err();
    assert!(matches!(err, Error::Network { timed_out: false, .. }));
}

#[tokio::test]
async fn unreachable_provider_is_network_error() {
    // Nothing listens on port 1
    let client = CloudflareClient::new(TOKEN, "http://127.0.0.1:1", Duration::from_secs(2))
        .expect("client builds");

    let err = client.list_zones().await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
}

#[tokio::test]
async fn slow_provider_is_timed_out_network_error() {
    // Accepts connections but never answers
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener binds");
    let addr = listener.local_addr().expect("local addr");
    let server = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let client = CloudflareClient::new(
        TOKEN,
        format!("http://{}", addr),
        Duration::from_millis(100),
    )
    .expect("client builds");

    let err = client.list_zones().await.unwrap_err();
    assert!(
        matches!(err, Error::Network { timed_out: true, .. }),
        "expected timed out network error, got {err:?}"
    );

    server.abort();
}
