//! Repository modules for database access
//!
//! This module contains the repository trait and implementations for the
//! reservation table.

pub mod reservation;
pub mod reservation_factory;
pub mod reservation_sql;

// Re-export the reservation repository and factory for ease of use
pub use reservation::{NewReservation, Reservation, ReservationRepository, ReservationStatus};
pub use reservation_factory::ReservationRepositoryFactory;
pub use reservation_sql::SqlReservationRepository;
