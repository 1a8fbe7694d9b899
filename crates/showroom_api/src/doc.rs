// File: crates/showroom_api/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{
    AdminAppointment, AdminAppointmentsResponse, AdminCreateRequest, AdminCreateResponse,
    BookingResponse, CreateBookingRequest, DeclineResponse, ErrorBody, IsAdminResponse,
    ReservationSummary, SlotSelection, SlotsResponse, UpdateAppointmentRequest,
    UpdateAppointmentResponse,
};

#[utoipa::path(
    get,
    path = "/slots",
    params(
        ("date" = String, Query, description = "Civil date in YYYY-MM-DD format", example = "2030-01-15", format = "date")
    ),
    responses(
        (status = 200, description = "The day's slots with availability status", body = SlotsResponse),
        (status = 400, description = "Missing or invalid date", body = ErrorBody,
         example = json!({"error": "Invalid input: Invalid date format. Use YYYY-MM-DD."})
        ),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
fn doc_get_slots_handler() {}

#[utoipa::path(
    post,
    path = "/bookings",
    request_body(content = CreateBookingRequest, example = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "+1 555 0100",
        "slots": [
            {"start": "2030-01-15T18:00:00Z", "end": "2030-01-15T18:30:00Z"}
        ]
    })),
    responses(
        (status = 201, description = "Pending reservations created", body = BookingResponse),
        (status = 400, description = "Missing or malformed fields", body = ErrorBody),
        (status = 409, description = "A requested slot is already reserved", body = ErrorBody,
         example = json!({"error": "Conflict: the time slot starting at 2030-01-15T18:00:00+00:00 is no longer available"})
        ),
        (status = 422, description = "Request violates a booking rule", body = ErrorBody,
         example = json!({"error": "Policy violation: appointment must be exactly 30 minutes long"})
        )
    )
)]
fn doc_create_booking_handler() {}

#[utoipa::path(
    get,
    path = "/admin/appointments",
    params(
        ("date" = String, Query, description = "Civil date in YYYY-MM-DD format", example = "2030-01-15", format = "date")
    ),
    responses(
        (status = 200, description = "Full reservation records for the day", body = AdminAppointmentsResponse),
        (status = 401, description = "No caller identity", body = ErrorBody),
        (status = 403, description = "Caller is not an administrator", body = ErrorBody)
    )
)]
fn doc_admin_list_handler() {}

#[utoipa::path(
    post,
    path = "/admin/appointments",
    request_body = AdminCreateRequest,
    responses(
        (status = 201, description = "Reservation created directly", body = AdminCreateResponse),
        (status = 401, description = "No caller identity", body = ErrorBody),
        (status = 403, description = "Caller is not an administrator", body = ErrorBody),
        (status = 409, description = "The range overlaps an existing reservation", body = ErrorBody)
    )
)]
fn doc_admin_create_handler() {}

#[utoipa::path(
    patch,
    path = "/admin/appointments/{id}",
    params(
        ("id" = String, Path, description = "The reservation to confirm")
    ),
    request_body = UpdateAppointmentRequest,
    responses(
        (status = 200, description = "Reservation confirmed", body = UpdateAppointmentResponse),
        (status = 404, description = "Unknown reservation", body = ErrorBody),
        (status = 409, description = "Reservation is not pending", body = ErrorBody,
         example = json!({"error": "Conflict: only pending reservations can be confirmed"})
        )
    )
)]
fn doc_confirm_appointment_handler() {}

#[utoipa::path(
    delete,
    path = "/admin/appointments/{id}",
    params(
        ("id" = String, Path, description = "The reservation to decline")
    ),
    responses(
        (status = 200, description = "Reservation declined and removed", body = DeclineResponse),
        (status = 404, description = "Unknown reservation", body = ErrorBody),
        (status = 409, description = "Reservation is not pending", body = ErrorBody)
    )
)]
fn doc_decline_appointment_handler() {}

#[utoipa::path(
    get,
    path = "/is-admin",
    responses(
        (status = 200, description = "Whether the caller holds the admin capability", body = IsAdminResponse)
    )
)]
fn doc_is_admin_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_slots_handler,
        doc_create_booking_handler,
        doc_admin_list_handler,
        doc_admin_create_handler,
        doc_confirm_appointment_handler,
        doc_decline_appointment_handler,
        doc_is_admin_handler,
    ),
    components(schemas(
        SlotsResponse,
        CreateBookingRequest,
        SlotSelection,
        BookingResponse,
        ReservationSummary,
        AdminAppointment,
        AdminAppointmentsResponse,
        AdminCreateRequest,
        AdminCreateResponse,
        UpdateAppointmentRequest,
        UpdateAppointmentResponse,
        DeclineResponse,
        IsAdminResponse,
        ErrorBody,
    )),
    tags((name = "Showroom", description = "Appointment booking endpoints"))
)]
pub struct ShowroomApiDoc;
