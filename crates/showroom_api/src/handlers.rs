// --- File: crates/showroom_api/src/handlers.rs ---
use crate::auth::{caller_email, require_admin, AdminDirectory};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use showroom_common::{invalid_input, HttpStatusCode, ShowroomError};
use showroom_config::AppConfig;
use showroom_db::{
    DbError, NewReservation, Reservation, ReservationRepository, ReservationStatus,
    SqlReservationRepository,
};
use showroom_scheduling::{civil, day_schedule, validate_booking, BookedSpan, BusinessHours, Slot};
use std::sync::Arc;
use tracing::info;

// Define shared state needed by the booking handlers
#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<AppConfig>,
    pub hours: BusinessHours,
    pub repo: SqlReservationRepository,
    pub admins: AdminDirectory,
}

/// Wire shape of every rejection: a status code plus a reason string the
/// client can show as-is.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

pub(crate) fn reject(err: ShowroomError) -> ApiError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

/// Store failures keep their class: overlap and status-mismatch surface as
/// Conflict, unknown ids as NotFound, the rest as opaque server errors.
pub(crate) fn store_error(err: DbError) -> ShowroomError {
    match err {
        DbError::Conflict(msg) => ShowroomError::Conflict(msg),
        DbError::NotFound(msg) => ShowroomError::NotFound(msg),
        other => ShowroomError::Database(other.to_string()),
    }
}

pub(crate) fn parse_civil_date(s: &str) -> Result<NaiveDate, ShowroomError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| invalid_input("Invalid date format. Use YYYY-MM-DD."))
}

pub(crate) fn parse_instant(s: &str) -> Result<DateTime<Utc>, ShowroomError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| invalid_input(format!("Invalid instant: {s}. Use RFC 3339.")))
}

/// Minimal `local@domain.tld` shape check; anything fancier belongs to the
/// upstream auth layer.
pub(crate) fn valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn booked_spans(existing: &[Reservation]) -> Vec<BookedSpan> {
    existing
        .iter()
        .map(|r| BookedSpan {
            start: r.start,
            end: r.end,
            status: r.status,
        })
        .collect()
}

// --- Slot queries ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct SlotsQuery {
    /// Civil date in YYYY-MM-DD format
    pub date: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotsResponse {
    pub date: String,
    pub slots: Vec<Slot>,
}

/// Handler to get the day's slots with their availability status.
#[axum::debug_handler]
pub async fn get_slots_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, ApiError> {
    let date_str = query
        .date
        .ok_or_else(|| reject(invalid_input("Missing date=YYYY-MM-DD")))?;
    let date = parse_civil_date(&date_str).map_err(reject)?;

    let (day_start, day_end) = civil::day_bounds(state.hours.tz, date)
        .map_err(|e| reject(ShowroomError::Internal(e.to_string())))?;
    let existing = state
        .repo
        .find_intersecting(day_start, day_end)
        .await
        .map_err(|e| reject(store_error(e)))?;

    let slots = day_schedule(&state.hours, date, &booked_spans(&existing), Utc::now())
        .map_err(|e| reject(ShowroomError::Internal(e.to_string())))?;

    Ok(Json(SlotsResponse {
        date: date_str,
        slots,
    }))
}

// --- Booking creation ---

/// One requested slot, either as a pair of RFC 3339 instants or as a civil
/// date plus minutes-from-midnight (resolved server-side).
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum SlotSelection {
    Instants { start: String, end: String },
    Civil { date: String, start_minute: i64 },
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateBookingRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub slots: Vec<SlotSelection>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReservationSummary {
    pub id: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub start: DateTime<Utc>,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub end: DateTime<Utc>,
    pub status: ReservationStatus,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub reservations: Vec<ReservationSummary>,
}

fn resolve_slot(
    hours: &BusinessHours,
    selection: &SlotSelection,
) -> Result<(DateTime<Utc>, DateTime<Utc>), ShowroomError> {
    match selection {
        SlotSelection::Instants { start, end } => Ok((parse_instant(start)?, parse_instant(end)?)),
        SlotSelection::Civil { date, start_minute } => {
            let d = parse_civil_date(date)?;
            let start = civil::civil_to_instant(hours.tz, d, *start_minute)
                .map_err(|e| invalid_input(e.to_string()))?;
            let end =
                civil::civil_to_instant(hours.tz, d, start_minute + i64::from(hours.slot_minutes))
                    .map_err(|e| invalid_input(e.to_string()))?;
            Ok((start, end))
        }
    }
}

/// Handler to create one or more PENDING reservations.
///
/// Shape legality is re-derived here regardless of what the client claims;
/// collision with existing reservations is left to the store transaction,
/// which is the only place it can be decided.
#[axum::debug_handler]
pub async fn create_booking_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(reject(invalid_input("Name is required.")));
    }
    let email = payload.email.trim();
    if !valid_email(email) {
        return Err(reject(invalid_input("A valid email address is required.")));
    }
    if payload.slots.is_empty() {
        return Err(reject(invalid_input("At least one time slot is required.")));
    }

    let mut intervals = Vec::with_capacity(payload.slots.len());
    for selection in &payload.slots {
        intervals.push(resolve_slot(&state.hours, selection).map_err(reject)?);
    }

    validate_booking(&state.hours, &intervals, Utc::now())
        .map_err(|e| reject(ShowroomError::PolicyViolation(e.to_string())))?;

    let phone = payload
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string);
    let requests: Vec<NewReservation> = intervals
        .iter()
        .map(|(start, end)| NewReservation {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.clone(),
            start: *start,
            end: *end,
            status: ReservationStatus::Pending,
        })
        .collect();

    let created = state
        .repo
        .create(&requests)
        .await
        .map_err(|e| reject(store_error(e)))?;

    info!("Created {} pending reservation(s) for {}", created.len(), email);
    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            reservations: created
                .into_iter()
                .map(|r| ReservationSummary {
                    id: r.id,
                    start: r.start,
                    end: r.end,
                    status: r.status,
                })
                .collect(),
        }),
    ))
}

// --- Admin: list a day's reservations ---

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminAppointment {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: ReservationStatus,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub start: DateTime<Utc>,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub end: DateTime<Utc>,
}

impl From<Reservation> for AdminAppointment {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            phone: r.phone,
            status: r.status,
            start: r.start,
            end: r.end,
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminAppointmentsResponse {
    pub appointments: Vec<AdminAppointment>,
}

/// Handler to list the full reservation records of one civil day.
#[axum::debug_handler]
pub async fn admin_list_handler(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<AdminAppointmentsResponse>, ApiError> {
    require_admin(&state.admins, &headers).map_err(reject)?;

    let date_str = query
        .date
        .ok_or_else(|| reject(invalid_input("Missing date")))?;
    let date = parse_civil_date(&date_str).map_err(reject)?;
    let (day_start, day_end) = civil::day_bounds(state.hours.tz, date)
        .map_err(|e| reject(ShowroomError::Internal(e.to_string())))?;

    let appointments = state
        .repo
        .find_intersecting(day_start, day_end)
        .await
        .map_err(|e| reject(store_error(e)))?
        .into_iter()
        .map(AdminAppointment::from)
        .collect();

    Ok(Json(AdminAppointmentsResponse { appointments }))
}

// --- Admin: direct insert ---

/// Privileged direct insert: not routed through the booking validator, so
/// an admin can block arbitrary ranges. The store's overlap check still
/// applies; nothing may double-book the showroom.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminCreateRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub status: Option<ReservationStatus>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminCreateResponse {
    pub appointment: AdminAppointment,
}

#[axum::debug_handler]
pub async fn admin_create_handler(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<AdminCreateRequest>,
) -> Result<(StatusCode, Json<AdminCreateResponse>), ApiError> {
    require_admin(&state.admins, &headers).map_err(reject)?;

    let name = payload.name.trim();
    if name.is_empty() {
        return Err(reject(invalid_input("Name is required.")));
    }
    let email = payload.email.trim();
    if !valid_email(email) {
        return Err(reject(invalid_input("A valid email address is required.")));
    }
    let start = parse_instant(&payload.start).map_err(reject)?;
    let end = parse_instant(&payload.end).map_err(reject)?;
    if start >= end {
        return Err(reject(invalid_input("start must be before end.")));
    }

    let request = NewReservation {
        name: name.to_string(),
        email: email.to_string(),
        phone: payload.phone.clone(),
        start,
        end,
        status: payload.status.unwrap_or(ReservationStatus::Confirmed),
    };
    let mut created = state
        .repo
        .create(&[request])
        .await
        .map_err(|e| reject(store_error(e)))?;

    // create() returns exactly one record for a one-element request.
    let appointment = created
        .pop()
        .ok_or_else(|| reject(ShowroomError::Internal("insert returned no record".into())))?;

    info!("Admin created reservation {}", appointment.id);
    Ok((
        StatusCode::CREATED,
        Json(AdminCreateResponse {
            appointment: appointment.into(),
        }),
    ))
}

// --- Admin: confirm / decline ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateAppointmentRequest {
    pub status: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateAppointmentResponse {
    pub appointment: AdminAppointment,
}

/// Handler to confirm a pending reservation.
#[axum::debug_handler]
pub async fn confirm_appointment_handler(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAppointmentRequest>,
) -> Result<Json<UpdateAppointmentResponse>, ApiError> {
    require_admin(&state.admins, &headers).map_err(reject)?;

    if payload.status.as_deref() != Some("CONFIRMED") {
        return Err(reject(invalid_input(
            "Only status \"CONFIRMED\" is supported here",
        )));
    }

    let updated = state
        .repo
        .confirm(&id)
        .await
        .map_err(|e| reject(store_error(e)))?;

    info!("Reservation {} confirmed by admin", id);
    Ok(Json(UpdateAppointmentResponse {
        appointment: updated.into(),
    }))
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeclineResponse {
    pub ok: bool,
}

/// Handler to decline (permanently remove) a pending reservation.
#[axum::debug_handler]
pub async fn decline_appointment_handler(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<DeclineResponse>, ApiError> {
    require_admin(&state.admins, &headers).map_err(reject)?;

    state
        .repo
        .decline(&id)
        .await
        .map_err(|e| reject(store_error(e)))?;

    info!("Reservation {} declined by admin", id);
    Ok(Json(DeclineResponse { ok: true }))
}

// --- Admin capability probe ---

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

/// Handler reporting whether the caller holds the admin capability. Signed
/// out callers get `false`, never an error.
#[axum::debug_handler]
pub async fn is_admin_handler(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Json<IsAdminResponse> {
    let is_admin = caller_email(&headers)
        .map(|email| state.admins.is_admin(&email))
        .unwrap_or(false);
    Json(IsAdminResponse { is_admin })
}
