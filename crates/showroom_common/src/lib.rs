// --- File: crates/showroom_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error taxonomy shared by every layer
pub mod logging; // Logging utilities
pub mod models; // Shared domain models

// Re-export error types and utilities for easier access
pub use error::{
    conflict, internal_error, invalid_input, not_found, policy_violation, HttpStatusCode,
    ShowroomError,
};

// Re-export the shared models for easier access
pub use models::{NewReservation, Reservation, ReservationStatus};
