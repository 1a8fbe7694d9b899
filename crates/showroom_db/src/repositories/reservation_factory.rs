//! Factory for creating reservation repositories

use crate::repositories::reservation_sql::SqlReservationRepository;
use crate::{DbClient, RepositoryFactory};

/// Factory for creating reservation repositories from a database client
#[derive(Debug, Clone)]
pub struct ReservationRepositoryFactory;

impl ReservationRepositoryFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReservationRepositoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFactory<SqlReservationRepository, DbClient> for ReservationRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlReservationRepository {
        SqlReservationRepository::new(db_client)
    }
}
