// --- File: crates/showroom_api/src/auth.rs ---

// Admin capability check. Authentication itself is an upstream concern;
// the auth layer in front of this service verifies the caller and injects
// the verified address in a trusted header. Here we only decide whether
// that address holds the administrative capability.

use axum::http::HeaderMap;
use showroom_common::ShowroomError;
use showroom_config::AdminConfig;
use std::collections::HashSet;

/// Header carrying the verified caller address, set by the upstream auth
/// proxy. Absent means the caller is not signed in.
pub const VERIFIED_EMAIL_HEADER: &str = "x-verified-email";

/// Lowercases and trims an address for comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// The configured set of administrator addresses.
///
/// Built once from configuration and injected at router construction, so
/// tests can hand in fixture allow-lists.
#[derive(Debug, Clone, Default)]
pub struct AdminDirectory {
    emails: HashSet<String>,
}

impl AdminDirectory {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            emails: emails
                .into_iter()
                .map(|e| normalize_email(e.as_ref()))
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(config.emails.iter())
    }

    /// Case-insensitive, whitespace-trimmed membership test.
    pub fn is_admin(&self, email: &str) -> bool {
        self.emails.contains(&normalize_email(email))
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

/// The verified caller address, if the upstream auth layer supplied one.
pub fn caller_email(headers: &HeaderMap) -> Option<String> {
    headers
        .get(VERIFIED_EMAIL_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Gate for the privileged endpoints: 401 without an identity, 403 for an
/// identity outside the allow-list. Runs before any domain logic.
pub fn require_admin(
    admins: &AdminDirectory,
    headers: &HeaderMap,
) -> Result<String, ShowroomError> {
    let email =
        caller_email(headers).ok_or_else(|| ShowroomError::Unauthorized("Unauthorized".into()))?;
    if !admins.is_admin(&email) {
        return Err(ShowroomError::Forbidden("Forbidden".into()));
    }
    Ok(email)
}
