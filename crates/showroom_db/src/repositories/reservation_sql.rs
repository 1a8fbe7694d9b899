//! SQL implementation of the reservation repository
//!
//! This module provides a SQL implementation of the ReservationRepository
//! trait. The overlap-checked insert runs inside one transaction; on
//! PostgreSQL the transaction is raised to SERIALIZABLE, on SQLite the
//! single-writer lock already serializes the check-and-insert pair.

use crate::error::DbError;
use crate::repositories::reservation::{
    DbReservationRow, NewReservation, Reservation, ReservationRepository,
};
use crate::DbClient;
use chrono::{DateTime, Utc};
use tracing::{debug, error, info};
use uuid::Uuid;

/// SQL implementation of the reservation repository
#[derive(Debug, Clone)]
pub struct SqlReservationRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlReservationRepository {
    /// Create a new SQL reservation repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

impl ReservationRepository for SqlReservationRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing reservation schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS reservations (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                start_time_ms INTEGER NOT NULL,
                end_time_ms INTEGER NOT NULL,
                status TEXT NOT NULL DEFAULT 'PENDING',
                created_at_ms INTEGER NOT NULL
            )
        "#;
        self.db_client.execute(query).await?;

        self.db_client
            .execute("CREATE INDEX IF NOT EXISTS idx_reservations_start ON reservations (start_time_ms)")
            .await?;

        info!("Reservation schema initialized successfully");
        Ok(())
    }

    async fn create(&self, requests: &[NewReservation]) -> Result<Vec<Reservation>, DbError> {
        if requests.is_empty() {
            return Ok(Vec::new());
        }
        for req in requests {
            if req.start >= req.end {
                return Err(DbError::QueryError(format!(
                    "refusing to store reservation with start {} at or after end {}",
                    req.start, req.end
                )));
            }
        }

        debug!("Creating {} reservation(s)", requests.len());
        let mut tx = self.db_client.begin().await?;

        // The overlap check and the inserts must be serialized as a unit.
        // SQLite's writer lock gives that for free; PostgreSQL needs the
        // isolation level raised.
        if self.db_client.is_postgres() {
            sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
                .execute(&mut *tx)
                .await
                .map_err(|e| DbError::TransactionError(e.to_string()))?;
        }

        let created_at = Utc::now();
        let mut created = Vec::with_capacity(requests.len());
        for req in requests {
            // Check-then-insert per interval so later intervals of the same
            // batch also collide with earlier ones.
            let overlap = sqlx::query(
                r#"
                SELECT id FROM reservations
                WHERE start_time_ms < $1 AND end_time_ms > $2
                LIMIT 1
                "#,
            )
            .bind(req.end.timestamp_millis())
            .bind(req.start.timestamp_millis())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to run overlap check: {}", e);
                DbError::QueryError(e.to_string())
            })?;

            if overlap.is_some() {
                // Dropping the transaction rolls back anything inserted so
                // far: a conflict on any interval voids the whole request.
                return Err(DbError::Conflict(format!(
                    "the time slot starting at {} is no longer available",
                    req.start.to_rfc3339()
                )));
            }

            let id = Uuid::new_v4().to_string();
            sqlx::query(
                r#"
                INSERT INTO reservations
                    (id, name, email, phone, start_time_ms, end_time_ms, status, created_at_ms)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(&id)
            .bind(&req.name)
            .bind(&req.email)
            .bind(&req.phone)
            .bind(req.start.timestamp_millis())
            .bind(req.end.timestamp_millis())
            .bind(req.status.as_str())
            .bind(created_at.timestamp_millis())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to insert reservation: {}", e);
                DbError::QueryError(e.to_string())
            })?;

            created.push(Reservation {
                id,
                name: req.name.clone(),
                email: req.email.clone(),
                phone: req.phone.clone(),
                start: req.start,
                end: req.end,
                status: req.status,
                created_at,
            });
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        info!("Created {} reservation(s)", created.len());
        Ok(created)
    }

    async fn find_intersecting(
        &self,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, DbError> {
        debug!(
            "Finding reservations intersecting [{}, {})",
            range_start, range_end
        );

        let rows: Vec<DbReservationRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, start_time_ms, end_time_ms, status, created_at_ms
            FROM reservations
            WHERE start_time_ms < $1 AND end_time_ms > $2
            ORDER BY start_time_ms ASC
            "#,
        )
        .bind(range_end.timestamp_millis())
        .bind(range_start.timestamp_millis())
        .fetch_all(self.db_client.pool())
        .await
        .map_err(|e| {
            error!("Failed to query reservations: {}", e);
            DbError::QueryError(e.to_string())
        })?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, DbError> {
        let row: Option<DbReservationRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, start_time_ms, end_time_ms, status, created_at_ms
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db_client.pool())
        .await
        .map_err(|e| {
            error!("Failed to query reservation {}: {}", id, e);
            DbError::QueryError(e.to_string())
        })?;

        row.map(Reservation::try_from).transpose()
    }

    async fn confirm(&self, id: &str) -> Result<Reservation, DbError> {
        debug!("Confirming reservation {}", id);

        // Optimistic guard: the update only lands while the record is
        // still PENDING. Losing the race reports a conflict instead of
        // silently overwriting.
        let result = sqlx::query(
            "UPDATE reservations SET status = 'CONFIRMED' WHERE id = $1 AND status = 'PENDING'",
        )
        .bind(id)
        .execute(self.db_client.pool())
        .await
        .map_err(|e| {
            error!("Failed to confirm reservation {}: {}", id, e);
            DbError::QueryError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return match self.find_by_id(id).await? {
                None => Err(DbError::NotFound(format!("reservation {} not found", id))),
                Some(_) => Err(DbError::Conflict(
                    "only pending reservations can be confirmed".to_string(),
                )),
            };
        }

        info!("Reservation {} confirmed", id);
        self.find_by_id(id).await?.ok_or_else(|| {
            DbError::QueryError(format!("reservation {} vanished after confirm", id))
        })
    }

    async fn decline(&self, id: &str) -> Result<(), DbError> {
        debug!("Declining reservation {}", id);

        let result =
            sqlx::query("DELETE FROM reservations WHERE id = $1 AND status = 'PENDING'")
                .bind(id)
                .execute(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to decline reservation {}: {}", id, e);
                    DbError::QueryError(e.to_string())
                })?;

        if result.rows_affected() == 0 {
            return match self.find_by_id(id).await? {
                None => Err(DbError::NotFound(format!("reservation {} not found", id))),
                Some(_) => Err(DbError::Conflict(
                    "only pending reservations can be declined".to_string(),
                )),
            };
        }

        info!("Reservation {} declined and removed", id);
        Ok(())
    }
}
