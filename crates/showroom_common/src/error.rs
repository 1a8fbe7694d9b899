// --- File: crates/showroom_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for the showroom service.
///
/// Every rejection carries a variant that tells the caller which class it
/// falls in: fix your input, pick another slot, authenticate, or try again
/// later. Handlers map variants to HTTP status codes via [`HttpStatusCode`].
#[derive(Error, Debug)]
pub enum ShowroomError {
    /// Malformed or missing required fields, unparseable dates/instants.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A well-formed request the booking rules refuse (outside business
    /// hours, wrong duration, misaligned boundary, past time, cross-day
    /// span, duplicate requested interval).
    #[error("Policy violation: {0}")]
    PolicyViolation(String),

    /// Overlapping reservation at commit time, or a status mismatch on
    /// confirm/decline.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Caller identity missing.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Caller identity present but lacks the required capability.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected failure of the transactional store.
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else that should surface as an opaque server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ShowroomError {
    fn status_code(&self) -> u16 {
        match self {
            ShowroomError::InvalidInput(_) => 400,
            ShowroomError::PolicyViolation(_) => 422,
            ShowroomError::Conflict(_) => 409,
            ShowroomError::Unauthorized(_) => 401,
            ShowroomError::Forbidden(_) => 403,
            ShowroomError::NotFound(_) => 404,
            ShowroomError::Database(_) => 500,
            ShowroomError::Internal(_) => 500,
        }
    }
}

// Utility constructors, mirroring how handlers actually build rejections.
pub fn invalid_input<T: fmt::Display>(message: T) -> ShowroomError {
    ShowroomError::InvalidInput(message.to_string())
}

pub fn policy_violation<T: fmt::Display>(message: T) -> ShowroomError {
    ShowroomError::PolicyViolation(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> ShowroomError {
    ShowroomError::Conflict(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> ShowroomError {
    ShowroomError::NotFound(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> ShowroomError {
    ShowroomError::Internal(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_distinguish_error_classes() {
        assert_eq!(invalid_input("x").status_code(), 400);
        assert_eq!(policy_violation("x").status_code(), 422);
        assert_eq!(conflict("x").status_code(), 409);
        assert_eq!(not_found("x").status_code(), 404);
        assert_eq!(internal_error("x").status_code(), 500);
        assert_eq!(ShowroomError::Unauthorized("x".into()).status_code(), 401);
        assert_eq!(ShowroomError::Forbidden("x".into()).status_code(), 403);
    }

    #[test]
    fn messages_carry_the_reason() {
        let err = policy_violation("appointment must be exactly 30 minutes long");
        assert_eq!(
            err.to_string(),
            "Policy violation: appointment must be exactly 30 minutes long"
        );
    }
}
