// --- File: crates/showroom_scheduling/src/civil.rs ---

// Conversion between civil wall-clock time in the business time zone and
// absolute instants. chrono-tz resolves the zone's true offset at any
// instant, so no iterative correction is needed here; the only decisions
// left are the DST edges, handled in `resolve_local`.

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use thiserror::Error;

/// Minutes in a civil day; offset 1440 addresses the following midnight.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CivilTimeError {
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
    #[error("minutes-from-midnight out of range: {0}")]
    MinutesOutOfRange(i64),
    #[error("unrepresentable civil time: {0}")]
    Unrepresentable(String),
}

/// Parses an IANA zone name ("America/Los_Angeles") into a `Tz`.
pub fn parse_time_zone(name: &str) -> Result<Tz, CivilTimeError> {
    name.parse::<Tz>()
        .map_err(|_| CivilTimeError::UnknownTimeZone(name.to_string()))
}

/// Converts a civil date plus minutes-from-midnight in `tz` into the
/// absolute instant it denotes.
///
/// DST edges resolve deterministically:
/// - a wall clock that occurs twice (fall-back) maps to the earlier instant;
/// - a wall clock that does not occur (spring-forward) is shifted forward
///   by the width of the gap, then resolved.
pub fn civil_to_instant(
    tz: Tz,
    date: NaiveDate,
    minutes_from_midnight: i64,
) -> Result<DateTime<Utc>, CivilTimeError> {
    if !(0..=MINUTES_PER_DAY).contains(&minutes_from_midnight) {
        return Err(CivilTimeError::MinutesOutOfRange(minutes_from_midnight));
    }
    let naive =
        NaiveDateTime::new(date, NaiveTime::MIN) + Duration::minutes(minutes_from_midnight);
    resolve_local(tz, naive)
}

fn resolve_local(tz: Tz, naive: NaiveDateTime) -> Result<DateTime<Utc>, CivilTimeError> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _latest) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            // Spring-forward gap. Every real transition is bracketed by the
            // offsets in force one day before and one day after.
            let before = tz
                .offset_from_utc_datetime(&(naive - Duration::days(1)))
                .fix();
            let after = tz
                .offset_from_utc_datetime(&(naive + Duration::days(1)))
                .fix();
            let gap_seconds = i64::from(after.local_minus_utc() - before.local_minus_utc());
            if gap_seconds <= 0 {
                return Err(CivilTimeError::Unrepresentable(naive.to_string()));
            }
            match tz.from_local_datetime(&(naive + Duration::seconds(gap_seconds))) {
                LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
                LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
                LocalResult::None => Err(CivilTimeError::Unrepresentable(naive.to_string())),
            }
        }
    }
}

/// Projects an instant into the zone's civil wall clock. Callers read
/// year/month/day/hour/minute straight off the result.
pub fn instant_to_civil(tz: Tz, instant: DateTime<Utc>) -> DateTime<Tz> {
    instant.with_timezone(&tz)
}

/// The civil date it currently is in `tz`.
pub fn civil_today(tz: Tz, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// The instants of local midnight and the following local midnight: the
/// half-open range `[start, end)` covering one civil day. On DST transition
/// days the range is 23 or 25 hours long.
pub fn day_bounds(
    tz: Tz,
    date: NaiveDate,
) -> Result<(DateTime<Utc>, DateTime<Utc>), CivilTimeError> {
    let start = civil_to_instant(tz, date, 0)?;
    let end = civil_to_instant(tz, date, MINUTES_PER_DAY)?;
    Ok((start, end))
}
