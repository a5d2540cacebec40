// # dyndns-core
//
// Core library for the dynamic-DNS update endpoint.
//
// ## Architecture Overview
//
// A single update request flows through:
// - **Authorizer**: Checks the shared-secret `code` parameter
// - **UpdateOrchestrator**: Validates hostname/IP, resolves zone and record,
//   issues the update
// - **DnsApi**: Trait for the provider's REST API (list zones, list records,
//   update record)
//
// The HTTP listener and routing live in `dyndnsd`; the Cloudflare client lives
// in `dyndns-provider-cloudflare`.
//
// ## Design Principles
//
// 1. **Stateless**: Zones and records are fetched fresh for every request
// 2. **Explicit configuration**: `DyndnsConfig` is built once and injected
// 3. **Typed errors**: Every failure is an `Error` variant, mapped to an HTTP
//    status at the edge
// 4. **Library-First**: All request logic can be used without the daemon

pub mod traits;
pub mod orchestrator;
pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod request;
pub mod resolve;

// Re-export core types for convenience
pub use traits::DnsApi;
pub use orchestrator::{UpdateOrchestrator, UpdateOutcome};
pub use auth::Authorizer;
pub use config::{DyndnsConfig, ProviderConfig, ServerConfig, UpdateMode};
pub use error::{Error, Result};
pub use model::{ApiMessage, ApiResponse, DnsRecord, RecordUpdate, Zone, ZoneStatus};
pub use request::UpdateRequest;
