// --- File: crates/showroom_scheduling/src/validate.rs ---

// Server-side re-derivation of slot legality. Clients send instants; none
// of their claims about those instants are trusted. Collision with existing
// reservations is NOT checked here; only the store transaction can know
// that (see showroom_db).

use crate::slots::BusinessHours;
use chrono::{DateTime, Duration, Timelike, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotPolicyError {
    #[error("appointment must be exactly {expected} minutes long")]
    WrongDuration { expected: u32 },
    #[error("appointment must start in the future")]
    StartNotInFuture,
    #[error("appointment must start on a {granularity}-minute boundary")]
    MisalignedStart { granularity: u32 },
    #[error("appointment must fall within business hours ({start_hour}:00 to {end_hour}:00)")]
    OutsideBusinessHours { start_hour: u32, end_hour: u32 },
    #[error("appointment must not cross midnight")]
    CrossesMidnight,
    #[error("duplicate slot requested at {0}")]
    DuplicateSlot(DateTime<Utc>),
}

/// Checks one requested interval against every booking rule.
pub fn validate_slot(
    hours: &BusinessHours,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), SlotPolicyError> {
    if end - start != Duration::minutes(i64::from(hours.slot_minutes)) {
        return Err(SlotPolicyError::WrongDuration {
            expected: hours.slot_minutes,
        });
    }

    if start <= now {
        return Err(SlotPolicyError::StartNotInFuture);
    }

    let local_start = start.with_timezone(&hours.tz);
    let local_end = end.with_timezone(&hours.tz);

    // Boundary alignment: minute-of-hour on the granularity grid, and no
    // sub-minute offset.
    if local_start.minute() % hours.slot_minutes != 0
        || local_start.second() != 0
        || local_start.nanosecond() != 0
    {
        return Err(SlotPolicyError::MisalignedStart {
            granularity: hours.slot_minutes,
        });
    }

    let start_day = local_start.date_naive();
    let start_minutes = local_start.hour() * 60 + local_start.minute();
    let mut end_day = local_end.date_naive();
    let mut end_minutes = local_end.hour() * 60 + local_end.minute();

    // An end at exactly the following local midnight is the closing
    // boundary of the start day (minute 1440), not a next-day time.
    if end_minutes == 0
        && local_end.second() == 0
        && start_day.succ_opt().map(|d| d == end_day).unwrap_or(false)
    {
        end_day = start_day;
        end_minutes = 24 * 60;
    }

    if start_minutes < hours.open_minute() || end_minutes > hours.close_minute() {
        return Err(SlotPolicyError::OutsideBusinessHours {
            start_hour: hours.start_hour,
            end_hour: hours.end_hour,
        });
    }

    if start_day != end_day {
        return Err(SlotPolicyError::CrossesMidnight);
    }

    Ok(())
}

/// Checks a whole booking request: every interval individually, plus no two
/// requested slots sharing a start instant. Overlap between the requested
/// intervals and the store is left to the commit transaction.
pub fn validate_booking(
    hours: &BusinessHours,
    intervals: &[(DateTime<Utc>, DateTime<Utc>)],
    now: DateTime<Utc>,
) -> Result<(), SlotPolicyError> {
    for (start, end) in intervals {
        validate_slot(hours, *start, *end, now)?;
    }
    for (i, (start, _)) in intervals.iter().enumerate() {
        if intervals[..i].iter().any(|(s, _)| s == start) {
            return Err(SlotPolicyError::DuplicateSlot(*start));
        }
    }
    Ok(())
}
