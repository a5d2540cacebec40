//! Provider-facing data model
//!
//! These types mirror the provider's JSON payloads. They are fetched fresh for
//! every request and dropped afterwards.

use serde::{Deserialize, Serialize};

/// Response envelope returned by every provider call
///
/// The envelope is decoded as-is: callers decide what `success: false` means
/// for them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the provider considers the call successful
    pub success: bool,

    /// Errors reported by the provider
    #[serde(default)]
    pub errors: Vec<ApiMessage>,

    /// Call result (absent or `null` on most failures)
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope wrapping `result`
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Failed envelope carrying the given errors
    pub fn failed(errors: Vec<ApiMessage>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }

    /// First error reported by the provider, formatted for logs
    pub fn first_error(&self) -> Option<String> {
        self.errors.first().map(ToString::to_string)
    }
}

/// A single error or message entry in a provider envelope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiMessage {
    /// Provider error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,

    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

impl ApiMessage {
    /// Message without a code
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

/// Zone status as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ZoneStatus {
    /// Zone is live and its records can be edited
    Active,
    /// Any other status (pending, initializing, moved, ...)
    Other(String),
}

impl Default for ZoneStatus {
    /// A missing status never counts as active
    fn default() -> Self {
        ZoneStatus::Other(String::new())
    }
}

impl From<String> for ZoneStatus {
    fn from(status: String) -> Self {
        if status == "active" {
            ZoneStatus::Active
        } else {
            ZoneStatus::Other(status)
        }
    }
}

impl From<ZoneStatus> for String {
    fn from(status: ZoneStatus) -> Self {
        match status {
            ZoneStatus::Active => "active".to_string(),
            ZoneStatus::Other(other) => other,
        }
    }
}

/// A DNS zone owned by the account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Zone {
    /// Zone ID
    pub id: String,
    /// Zone apex (e.g., "example.com")
    pub name: String,
    /// Zone status
    #[serde(default)]
    pub status: ZoneStatus,
    /// Whether the zone is paused
    #[serde(default)]
    pub paused: bool,
}

impl Zone {
    /// Create an active, unpaused zone
    pub fn active(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: ZoneStatus::Active,
            paused: false,
        }
    }

    /// Whether the zone's records can currently be updated
    pub fn is_editable(&self) -> bool {
        self.status == ZoneStatus::Active && !self.paused
    }
}

/// A DNS record inside a zone
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsRecord {
    /// Record ID
    pub id: String,

    /// Owning zone ID, when the provider includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,

    /// Fully-qualified record name
    pub name: String,

    /// Record type (A, CNAME, ...)
    #[serde(rename = "type")]
    pub record_type: String,

    /// Current record content
    #[serde(default)]
    pub content: String,

    /// TTL in seconds (1 = automatic)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// Whether traffic is proxied through the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
}

impl DnsRecord {
    /// Create a record with the given id, name, type and content
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            zone_id: None,
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl: None,
            proxied: None,
        }
    }
}

/// Body of a record update call
///
/// Keeps the record's type and name, replaces its content, and carries over
/// ttl/proxied when the listing reported them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordUpdate {
    /// Record type (unchanged)
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record name (unchanged)
    pub name: String,
    /// New content
    pub content: String,
    /// TTL carried over from the current record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Proxy flag carried over from the current record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
}

impl RecordUpdate {
    /// Update `record` to point at `content`
    pub fn for_record(record: &DnsRecord, content: impl Into<String>) -> Self {
        Self {
            record_type: record.record_type.clone(),
            name: record.name.clone(),
            content: content.into(),
            ttl: record.ttl,
            proxied: record.proxied,
        }
    }
}
