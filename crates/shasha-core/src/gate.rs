//! Time-boxed playback unlock.
//!
//! The gate compares user input against a static secret shipped with the
//! client and stores a 24-hour expiry locally. It is a UX speed-bump, not
//! an auth boundary: the secret is embedded client-side and the stored
//! expiry is trivially editable, so nothing security-relevant may depend
//! on it.

use chrono::Utc;

use crate::config::GateConfig;
use crate::error::ShashaError;
use crate::storage::Storage;

/// How long a successful unlock lasts.
pub const GRANT_VALIDITY_MS: i64 = 24 * 60 * 60 * 1000;

pub struct AccessGate {
    enabled: bool,
    secret: String,
}

impl AccessGate {
    pub fn new(config: &GateConfig) -> Self {
        Self {
            enabled: config.enabled,
            secret: config.secret.clone(),
        }
    }

    /// Compare a candidate code against the secret, case-insensitively and
    /// ignoring surrounding whitespace. A match persists `now + 24h` and
    /// grants access; a miss returns false with no side effects. Attempts
    /// are unlimited — any retry throttling is the caller's concern.
    pub fn attempt_unlock(
        &self,
        storage: &Storage,
        candidate: &str,
    ) -> Result<bool, ShashaError> {
        if !self.enabled {
            return Ok(true);
        }
        if normalize(candidate) != normalize(&self.secret) {
            tracing::debug!("unlock code rejected");
            return Ok(false);
        }
        storage.set_access_expiry(Utc::now().timestamp_millis() + GRANT_VALIDITY_MS)?;
        Ok(true)
    }

    /// Whether a persisted grant is still valid. Read-only.
    pub fn is_currently_granted(&self, storage: &Storage) -> Result<bool, ShashaError> {
        self.granted_at(storage, Utc::now().timestamp_millis())
    }

    fn granted_at(&self, storage: &Storage, now_ms: i64) -> Result<bool, ShashaError> {
        if !self.enabled {
            return Ok(true);
        }
        Ok(storage.access_expiry()?.is_some_and(|expiry| now_ms < expiry))
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
