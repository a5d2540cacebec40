//! HTTP routing for the update endpoint
//!
//! One route, any method. Everything else falls through to a 404.

use crate::error::ApiError;
use axum::Router;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::{Extensions, HeaderMap, HeaderName, Request, Uri};
use axum::routing::any;
use dyndns_core::{Authorizer, DnsApi, DyndnsConfig, Error, Result, UpdateOrchestrator};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    authorizer: Arc<Authorizer>,
    orchestrator: Arc<UpdateOrchestrator>,
    client_ip_header: HeaderName,
    trust_peer_addr: bool,
}

impl AppState {
    /// Build the state from configuration and a provider API client
    pub fn new(config: &DyndnsConfig, api: Box<dyn DnsApi>) -> Result<Self> {
        let client_ip_header = HeaderName::from_bytes(config.server.client_ip_header.as_bytes())
            .map_err(|e| {
                Error::config(format!(
                    "Invalid client IP header '{}': {}",
                    config.server.client_ip_header, e
                ))
            })?;

        Ok(Self {
            authorizer: Arc::new(Authorizer::new(config.auth_code.clone())),
            orchestrator: Arc::new(UpdateOrchestrator::new(api, config.mode)),
            client_ip_header,
            trust_peer_addr: config.server.trust_peer_addr,
        })
    }

    /// Address the request came from, as seen by the fronting proxy
    ///
    /// Uses the first entry of the configured header. When the header is
    /// missing or empty and peer addresses are trusted, falls back to the
    /// TCP peer.
    fn caller_ip(&self, headers: &HeaderMap, extensions: &Extensions) -> Option<String> {
        let from_header = headers
            .get(&self.client_ip_header)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        if let Some(ip) = from_header {
            return Some(ip.to_string());
        }

        if !self.trust_peer_addr {
            return None;
        }

        extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_canonical().to_string())
    }
}

/// Build the application router
pub fn build_router(state: AppState, route_path: &str) -> Router {
    Router::new()
        .route(route_path, any(update))
        .fallback(unknown_path)
        .layer(
            // Only the path is recorded: the query carries the shared secret
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .with_state(state)
}

/// Build the router straight from configuration
pub fn app(config: &DyndnsConfig, api: Box<dyn DnsApi>) -> Result<Router> {
    let state = AppState::new(config, api)?;
    Ok(build_router(state, &config.server.route_path))
}

async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    extensions: Extensions,
    Query(pairs): Query<Vec<(String, String)>>,
) -> std::result::Result<&'static str, ApiError> {
    let params = first_values(pairs);
    state.authorizer.authorize(&params)?;

    let caller_ip = state.caller_ip(&headers, &extensions);
    state
        .orchestrator
        .handle_update(&params, caller_ip.as_deref())
        .await?;

    Ok("OK")
}

/// Collapse repeated query keys, keeping the first value of each
fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut params = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        params.entry(key).or_insert(value);
    }
    params
}

async fn unknown_path(uri: Uri) -> ApiError {
    Error::not_found(uri.path()).into()
}
