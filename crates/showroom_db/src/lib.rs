//! Reservation store for the showroom booking service
//!
//! This crate provides a database client that is designed to be database
//! agnostic, using SQLx as the underlying database library, plus the
//! reservation repository built on top of it. SQLite is the default
//! backend; PostgreSQL and MySQL are available through feature flags.
//!
//! The repository's `create` transaction is the system's one mandatory
//! transactional boundary: it checks every requested interval for overlap
//! against all stored reservations and inserts atomically, so two
//! concurrent bookings for the same slot can never both commit.

pub mod client;
pub mod error;
pub mod repositories;
pub mod repository;

// Re-export the client and repository types for ease of use
pub use client::DbClient;
pub use error::DbError;
pub use repository::RepositoryFactory;

pub use repositories::{
    NewReservation, Reservation, ReservationRepository, ReservationRepositoryFactory,
    ReservationStatus, SqlReservationRepository,
};
