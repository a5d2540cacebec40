// # dyndnsd
//
// HTTP layer of the dynamic-DNS endpoint.
//
// This crate is a THIN integration layer: request logic (authorization,
// validation, zone/record resolution) lives in `dyndns-core`. Here we only
// - read configuration from the environment
// - extract query parameters and the caller address from HTTP requests
// - map errors to HTTP responses

pub mod error;
pub mod router;
pub mod settings;

pub use error::ApiError;
pub use router::{AppState, app, build_router};
pub use settings::Settings;
