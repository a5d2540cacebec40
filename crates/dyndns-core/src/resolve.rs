//! Zone and record selection
//!
//! Pure functions over the provider's listings, kept apart from the HTTP calls
//! so the selection rules can be tested on their own.
//!
//! ## Zone selection
//!
//! A zone is a candidate for `hostname` when it is active, not paused, and its
//! name is a label-aligned suffix of the hostname: `example.com` covers
//! `example.com` and `sub.example.com`, but not `badexample.com`.
//!
//! When several zones are candidates (e.g. `example.com` and
//! `sub.example.com` are both delegated to the account) the longest name wins.
//! Zones with equally long names keep the provider's order.
//!
//! ## Record selection
//!
//! The first record whose name equals the hostname exactly, byte for byte.

use crate::model::{DnsRecord, Zone};

/// Pick the zone that should hold the record for `hostname`
pub fn select_zone<'a>(zones: &'a [Zone], hostname: &str) -> Option<&'a Zone> {
    zones
        .iter()
        .filter(|zone| zone.is_editable() && zone_covers(&zone.name, hostname))
        .fold(None, |best: Option<&Zone>, zone| match best {
            Some(current) if current.name.len() >= zone.name.len() => Some(current),
            _ => Some(zone),
        })
}

/// Pick the record named exactly `hostname`
pub fn select_record<'a>(records: &'a [DnsRecord], hostname: &str) -> Option<&'a DnsRecord> {
    records.iter().find(|record| record.name == hostname)
}

fn zone_covers(zone_name: &str, hostname: &str) -> bool {
    if zone_name.is_empty() {
        return false;
    }

    match hostname.strip_suffix(zone_name) {
        Some("") => true,
        Some(prefix) => prefix.ends_with('.'),
        None => false,
    }
}
