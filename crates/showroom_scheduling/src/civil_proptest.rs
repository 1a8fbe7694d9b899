#[cfg(test)]
mod tests {
    use crate::civil::{civil_to_instant, instant_to_civil};
    use chrono::{Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
    use chrono_tz::America::Los_Angeles;
    use proptest::prelude::*;

    fn wall_clock_exists(date: NaiveDate, minutes: i64) -> bool {
        let naive = NaiveDateTime::new(date, NaiveTime::MIN) + Duration::minutes(minutes);
        !matches!(
            Los_Angeles.from_local_datetime(&naive),
            LocalResult::None
        )
    }

    proptest! {
        // Round trip: outside spring-forward gaps, projecting the converted
        // instant back into the zone reproduces the date and the
        // minutes-from-midnight.
        #[test]
        fn round_trip_reproduces_civil_parts(
            day_offset in 0i64..3650,
            minutes in 0i64..1440,
        ) {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(day_offset);
            prop_assume!(wall_clock_exists(date, minutes));

            let instant = civil_to_instant(Los_Angeles, date, minutes).unwrap();
            let local = instant_to_civil(Los_Angeles, instant);

            prop_assert_eq!(local.date_naive(), date);
            prop_assert_eq!(i64::from(local.hour() * 60 + local.minute()), minutes);
            prop_assert_eq!(local.second(), 0);
        }

        // Ordering: later wall clocks on the same day never produce earlier
        // instants (gap minutes excluded; they have no wall clock of their
        // own).
        #[test]
        fn instants_follow_wall_clock_order(
            day_offset in 0i64..3650,
            a in 0i64..1440,
            b in 0i64..1440,
        ) {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(day_offset);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assume!(wall_clock_exists(date, lo) && wall_clock_exists(date, hi));

            let lo_instant = civil_to_instant(Los_Angeles, date, lo).unwrap();
            let hi_instant = civil_to_instant(Los_Angeles, date, hi).unwrap();
            prop_assert!(lo_instant <= hi_instant);
        }
    }
}
