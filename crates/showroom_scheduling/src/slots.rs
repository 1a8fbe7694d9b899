// --- File: crates/showroom_scheduling/src/slots.rs ---

use crate::civil::{self, CivilTimeError};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use showroom_common::models::ReservationStatus;
use showroom_config::SchedulingConfig;
use tracing::debug;

/// Resolved business-hours configuration, immutable after startup.
#[derive(Debug, Clone, Copy)]
pub struct BusinessHours {
    pub tz: Tz,
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_minutes: u32,
}

impl BusinessHours {
    pub fn from_config(cfg: &SchedulingConfig) -> Result<Self, CivilTimeError> {
        Ok(Self {
            tz: civil::parse_time_zone(&cfg.time_zone)?,
            start_hour: cfg.business_start_hour,
            end_hour: cfg.business_end_hour,
            slot_minutes: cfg.slot_minutes,
        })
    }

    /// First bookable minute of the day, from local midnight.
    pub fn open_minute(&self) -> u32 {
        self.start_hour * 60
    }

    /// Closing minute of the day, from local midnight.
    pub fn close_minute(&self) -> u32 {
        self.end_hour * 60
    }
}

/// Booking status of one candidate slot.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    Available,
    Pending,
    Confirmed,
    Past,
}

/// A candidate interval produced by the generator, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub label: String,
}

/// A classified slot as returned to callers. Regenerated on every query;
/// its only identity is its start instant.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize)]
pub struct Slot {
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub start: DateTime<Utc>,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub end: DateTime<Utc>,
    pub label: String,
    pub status: SlotStatus,
}

/// A reservation span as the classifier sees it.
#[derive(Debug, Clone, Copy)]
pub struct BookedSpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: ReservationStatus,
}

/// Half-open interval intersection: `[a_start, a_end)` meets `[b_start, b_end)`.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// "9:00 AM – 9:30 AM", rendered in the business time zone.
pub fn format_label(tz: Tz, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!(
        "{} – {}",
        start.with_timezone(&tz).format("%-I:%M %p"),
        end.with_timezone(&tz).format("%-I:%M %p")
    )
}

/// Enumerates the candidate slots of one civil day, ascending by start.
///
/// Pure function of date + configuration: starting at the opening minute,
/// step by the granularity, emit while the slot still fits before closing.
/// Slots never cross the civil-day boundary because both endpoints come
/// from the same date's wall clock.
pub fn generate_slots(
    hours: &BusinessHours,
    date: NaiveDate,
) -> Result<Vec<SlotInterval>, CivilTimeError> {
    let open = i64::from(hours.open_minute());
    let close = i64::from(hours.close_minute());
    let step = i64::from(hours.slot_minutes);

    let mut slots = Vec::new();
    let mut at = open;
    while at + step <= close {
        let start = civil::civil_to_instant(hours.tz, date, at)?;
        let end = civil::civil_to_instant(hours.tz, date, at + step)?;
        slots.push(SlotInterval {
            label: format_label(hours.tz, start, end),
            start,
            end,
        });
        at += step;
    }
    debug!("Generated {} candidate slots for {}", slots.len(), date);
    Ok(slots)
}

/// Assigns each candidate slot its status, in priority order:
/// a civil date before today is entirely PAST; today's slots are PAST once
/// they have ended; an overlapping reservation makes the slot PENDING or
/// CONFIRMED; everything else is AVAILABLE.
///
/// Pure function; reads `existing` and `now`, writes nothing.
pub fn classify_slots(
    hours: &BusinessHours,
    date: NaiveDate,
    intervals: &[SlotInterval],
    existing: &[BookedSpan],
    now: DateTime<Utc>,
) -> Vec<Slot> {
    let today = civil::civil_today(hours.tz, now);
    let past_day = date < today;
    let is_today = date == today;

    intervals
        .iter()
        .map(|s| {
            let status = if past_day || (is_today && s.end <= now) {
                SlotStatus::Past
            } else if let Some(r) = existing
                .iter()
                .find(|r| overlaps(s.start, s.end, r.start, r.end))
            {
                match r.status {
                    ReservationStatus::Confirmed => SlotStatus::Confirmed,
                    ReservationStatus::Pending => SlotStatus::Pending,
                }
            } else {
                SlotStatus::Available
            };
            Slot {
                start: s.start,
                end: s.end,
                label: s.label.clone(),
                status,
            }
        })
        .collect()
}

/// Generator plus classifier in one call, the shape handlers want.
pub fn day_schedule(
    hours: &BusinessHours,
    date: NaiveDate,
    existing: &[BookedSpan],
    now: DateTime<Utc>,
) -> Result<Vec<Slot>, CivilTimeError> {
    let intervals = generate_slots(hours, date)?;
    Ok(classify_slots(hours, date, &intervals, existing, now))
}
