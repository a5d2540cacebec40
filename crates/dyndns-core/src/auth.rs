//! Shared-secret authorization
//!
//! Every update request must carry the preconfigured secret in the `code`
//! query parameter. The check runs before any validation or provider call.

use crate::error::{Error, Result};
use crate::request::CODE_PARAM;
use std::collections::HashMap;

/// Gate that checks the `code` query parameter
#[derive(Clone)]
pub struct Authorizer {
    /// Expected secret
    /// ⚠️ NEVER log this value
    code: String,
}

impl Authorizer {
    /// Create an authorizer for the given shared secret
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Fail with `Error::Forbidden` unless `params` carries the secret
    pub fn authorize(&self, params: &HashMap<String, String>) -> Result<()> {
        match params.get(CODE_PARAM) {
            Some(candidate) if self.matches(candidate) => Ok(()),
            Some(_) => {
                tracing::warn!("Rejected update request: auth code mismatch");
                Err(Error::Forbidden)
            }
            None => {
                tracing::warn!("Rejected update request: auth code missing");
                Err(Error::Forbidden)
            }
        }
    }

    // Compare without short-circuiting on the first differing byte.
    fn matches(&self, candidate: &str) -> bool {
        let expected = self.code.as_bytes();
        let candidate = candidate.as_bytes();

        if expected.len() != candidate.len() {
            return false;
        }

        expected
            .iter()
            .zip(candidate)
            .fold(0u8, |diff, (a, b)| diff | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authorizer")
            .field("code", &"<REDACTED>")
            .finish()
    }
}
