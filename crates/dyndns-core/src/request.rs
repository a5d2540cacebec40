//! Update request extraction and validation
//!
//! Turns the raw query parameters plus the observed caller address into an
//! [`UpdateRequest`], and picks the IPv4 address the record should point at.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::net::Ipv4Addr;

/// Query parameter carrying the shared secret
pub const CODE_PARAM: &str = "code";

/// Query parameter carrying the hostname to update
pub const HOSTNAME_PARAM: &str = "hostname";

/// Query parameter carrying an explicit IPv4 address
pub const MY_IP_PARAM: &str = "myip";

/// A validated-on-construction update request
///
/// Invariants: `hostname` is non-empty and at least one of
/// `desired_ip`/`caller_ip` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Fully-qualified name of the record to update
    pub hostname: String,
    /// Address passed explicitly via `myip`
    pub desired_ip: Option<String>,
    /// Address the request was observed coming from
    pub caller_ip: Option<String>,
}

impl UpdateRequest {
    /// Build a request from query parameters and the observed caller address
    ///
    /// An empty caller address counts as absent. An explicit `myip`, even an
    /// empty one, always wins over the caller address.
    pub fn from_query(params: &HashMap<String, String>, caller_ip: Option<&str>) -> Result<Self> {
        let hostname = params
            .get(HOSTNAME_PARAM)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::bad_request("Missing required hostname param"))?;

        let desired_ip = params.get(MY_IP_PARAM).cloned();
        let caller_ip = caller_ip
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .map(str::to_string);

        if desired_ip.is_none() && caller_ip.is_none() {
            return Err(Error::bad_request(
                "Could not determine the IP address to set. \
                 You can pass the desired IP via the myip param.",
            ));
        }

        Ok(Self {
            hostname: hostname.clone(),
            desired_ip,
            caller_ip,
        })
    }

    /// The address to apply, validated as IPv4
    pub fn target_ip(&self) -> Result<Ipv4Addr> {
        let raw = self
            .desired_ip
            .as_deref()
            .or(self.caller_ip.as_deref())
            .unwrap_or_default();

        parse_ipv4(raw)
    }
}

/// Parse a dotted-quad IPv4 address
///
/// Four decimal groups, each 0-255, without leading zeros. IPv6 and anything
/// else is rejected.
pub fn parse_ipv4(raw: &str) -> Result<Ipv4Addr> {
    raw.parse::<Ipv4Addr>().map_err(|_| Error::bad_request("Invalid IP"))
}
