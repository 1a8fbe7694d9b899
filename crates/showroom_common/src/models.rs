// --- File: crates/showroom_common/src/models.rs ---

// Shared domain models. The reservation record lives here so the store,
// the API layer, and the scheduling engine agree on one definition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a stored reservation.
///
/// Decline is realized as deletion, so there is no terminal variant here;
/// every stored row is either awaiting admin review or confirmed.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Confirmed => "CONFIRMED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(ReservationStatus::Pending),
            "CONFIRMED" => Some(ReservationStatus::Confirmed),
            _ => None,
        }
    }
}

/// A persisted appointment reservation.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Opaque identity (UUID v4).
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Absolute start instant, UTC.
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub start: DateTime<Utc>,
    /// Absolute end instant, UTC. Invariant: `start < end`.
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub end: DateTime<Utc>,
    pub status: ReservationStatus,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub created_at: DateTime<Utc>,
}

/// The fields a caller supplies when creating a reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: ReservationStatus,
}
