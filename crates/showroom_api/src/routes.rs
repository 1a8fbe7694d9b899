// --- File: crates/showroom_api/src/routes.rs ---

use crate::auth::AdminDirectory;
use crate::handlers::{
    admin_create_handler, admin_list_handler, confirm_appointment_handler,
    create_booking_handler, decline_appointment_handler, get_slots_handler, is_admin_handler,
    ApiState,
};
use axum::{
    routing::{get, patch, post},
    Router,
};
use showroom_config::AppConfig;
use showroom_db::SqlReservationRepository;
use showroom_scheduling::{BusinessHours, CivilTimeError};
use std::sync::Arc;

/// Creates a router containing all routes of the booking service.
///
/// The business-hours configuration and the admin allow-list are resolved
/// once here and live in shared state for the process lifetime.
pub fn routes(
    config: Arc<AppConfig>,
    repo: SqlReservationRepository,
) -> Result<Router, CivilTimeError> {
    let hours = BusinessHours::from_config(&config.scheduling)?;
    let admins = AdminDirectory::from_config(&config.admin);
    let state = Arc::new(ApiState {
        config,
        hours,
        repo,
        admins,
    });

    Ok(Router::new()
        .route("/slots", get(get_slots_handler))
        .route("/bookings", post(create_booking_handler))
        .route(
            "/admin/appointments",
            get(admin_list_handler).post(admin_create_handler),
        )
        .route(
            "/admin/appointments/{id}",
            patch(confirm_appointment_handler).delete(decline_appointment_handler),
        )
        .route("/is-admin", get(is_admin_handler))
        .with_state(state))
}
