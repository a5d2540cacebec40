//! Core traits for the dyndns system
//!
//! - [`DnsApi`]: Talk to the DNS provider's REST API

pub mod dns_api;

pub use dns_api::DnsApi;
