//! Repository for showroom reservations
//!
//! Defines the storage interface for reservation records and the row shape
//! they take in the database.

use crate::error::DbError;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

// Re-export the shared models for convenience
pub use showroom_common::models::{NewReservation, Reservation, ReservationStatus};

/// A reservation as stored. Instants live in integer Unix milliseconds
/// because `DateTime<Utc>` does not decode under the SQLx `Any` driver;
/// the conversion to domain values happens in `TryFrom`.
#[derive(Debug, Clone, FromRow)]
pub struct DbReservationRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub start_time_ms: i64,
    pub end_time_ms: i64,
    pub status: String,
    pub created_at_ms: i64,
}

fn instant_from_millis(ms: i64, column: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| DbError::CorruptRecord(format!("{column} holds invalid millis: {ms}")))
}

impl TryFrom<DbReservationRow> for Reservation {
    type Error = DbError;

    fn try_from(row: DbReservationRow) -> Result<Self, DbError> {
        let status = ReservationStatus::parse(&row.status).ok_or_else(|| {
            DbError::CorruptRecord(format!("unknown reservation status: {}", row.status))
        })?;
        Ok(Reservation {
            start: instant_from_millis(row.start_time_ms, "start_time_ms")?,
            end: instant_from_millis(row.end_time_ms, "end_time_ms")?,
            created_at: instant_from_millis(row.created_at_ms, "created_at_ms")?,
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            status,
        })
    }
}

/// Storage interface for reservations.
///
/// The `create` transaction is the sole enforcement point of the no-overlap
/// invariant: two reservations in the store never overlap, no matter how
/// many writers race.
pub trait ReservationRepository {
    /// Create the reservations table and its indexes if missing.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Atomically insert one or more reservations.
    ///
    /// Every requested interval is checked against all existing rows (any
    /// status blocks) inside one transaction; a single collision aborts the
    /// whole request with `DbError::Conflict` and nothing is written.
    fn create(
        &self,
        requests: &[NewReservation],
    ) -> impl std::future::Future<Output = Result<Vec<Reservation>, DbError>> + Send;

    /// All reservations intersecting `[range_start, range_end)`, ascending
    /// by start instant.
    fn find_intersecting(
        &self,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<Vec<Reservation>, DbError>> + Send;

    /// Look a reservation up by id.
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Reservation>, DbError>> + Send;

    /// PENDING → CONFIRMED, guarded on the status still being PENDING.
    ///
    /// `DbError::NotFound` for an unknown id, `DbError::Conflict` when the
    /// record is no longer pending.
    fn confirm(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Reservation, DbError>> + Send;

    /// Decline a pending reservation by deleting it, guarded the same way
    /// as `confirm`.
    fn decline(&self, id: &str) -> impl std::future::Future<Output = Result<(), DbError>> + Send;
}
