#[cfg(test)]
mod tests {
    use crate::slots::{
        classify_slots, day_schedule, format_label, generate_slots, overlaps, BookedSpan,
        BusinessHours, SlotStatus,
    };
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use chrono_tz::America::Los_Angeles;
    use showroom_common::models::ReservationStatus;
    use showroom_config::SchedulingConfig;

    fn showroom_hours() -> BusinessHours {
        BusinessHours {
            tz: Los_Angeles,
            start_hour: 9,
            end_hour: 17,
            slot_minutes: 30,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn from_config_resolves_the_zone() {
        let hours = BusinessHours::from_config(&SchedulingConfig::default()).unwrap();
        assert_eq!(hours.tz, Los_Angeles);
        assert_eq!(hours.open_minute(), 540);
        assert_eq!(hours.close_minute(), 1020);
    }

    #[test]
    fn overlap_test_is_half_open() {
        let a = utc(2030, 1, 15, 18, 0);
        let b = utc(2030, 1, 15, 18, 30);
        let c = utc(2030, 1, 15, 19, 0);
        assert!(overlaps(a, b, a, b));
        assert!(!overlaps(a, b, b, c)); // adjacent, not overlapping
        assert!(overlaps(a, c, b, c));
    }

    // Scenario: 09:00-17:00, 30-minute slots, empty store, querying a
    // future date yields 16 AVAILABLE slots with the expected labels.
    #[test]
    fn empty_future_day_yields_sixteen_available_slots() {
        let hours = showroom_hours();
        let d = date(2030, 1, 15); // a Tuesday, PST
        let now = utc(2030, 1, 10, 12, 0);

        let slots = day_schedule(&hours, d, &[], now).unwrap();
        assert_eq!(slots.len(), 16);
        assert!(slots.iter().all(|s| s.status == SlotStatus::Available));
        assert_eq!(slots[0].label, "9:00 AM – 9:30 AM");
        assert_eq!(slots[15].label, "4:30 PM – 5:00 PM");

        // 9:00 AM PST is 17:00 UTC.
        assert_eq!(slots[0].start, utc(2030, 1, 15, 17, 0));
        assert_eq!(slots[15].end, utc(2030, 1, 16, 1, 0));
    }

    #[test]
    fn slots_are_ascending_and_stay_inside_the_day() {
        let hours = showroom_hours();
        let intervals = generate_slots(&hours, date(2030, 1, 15)).unwrap();
        for w in intervals.windows(2) {
            assert!(w[0].start < w[1].start);
            assert_eq!(w[0].end, w[1].start);
        }
        let (day_start, day_end) =
            crate::civil::day_bounds(Los_Angeles, date(2030, 1, 15)).unwrap();
        assert!(intervals.first().unwrap().start >= day_start);
        assert!(intervals.last().unwrap().end <= day_end);
    }

    #[test]
    fn granularity_that_does_not_divide_the_window_truncates() {
        let hours = BusinessHours {
            slot_minutes: 45,
            ..showroom_hours()
        };
        let intervals = generate_slots(&hours, date(2030, 1, 15)).unwrap();
        // 480 minutes of business hours fit ten 45-minute slots.
        assert_eq!(intervals.len(), 10);
    }

    // Scenario: one PENDING reservation at 10:00-10:30 marks exactly that
    // slot PENDING.
    #[test]
    fn pending_reservation_marks_its_slot() {
        let hours = showroom_hours();
        let d = date(2030, 1, 15);
        let now = utc(2030, 1, 10, 12, 0);
        let existing = [BookedSpan {
            start: utc(2030, 1, 15, 18, 0), // 10:00 AM PST
            end: utc(2030, 1, 15, 18, 30),
            status: ReservationStatus::Pending,
        }];

        let slots = day_schedule(&hours, d, &existing, now).unwrap();
        assert_eq!(slots[2].status, SlotStatus::Pending);
        for (i, slot) in slots.iter().enumerate() {
            if i != 2 {
                assert_eq!(slot.status, SlotStatus::Available, "slot {i}");
            }
        }
    }

    #[test]
    fn confirmed_reservation_marks_its_slot_confirmed() {
        let hours = showroom_hours();
        let d = date(2030, 1, 15);
        let now = utc(2030, 1, 10, 12, 0);
        let existing = [BookedSpan {
            start: utc(2030, 1, 15, 18, 0),
            end: utc(2030, 1, 15, 18, 30),
            status: ReservationStatus::Confirmed,
        }];

        let slots = day_schedule(&hours, d, &existing, now).unwrap();
        assert_eq!(slots[2].status, SlotStatus::Confirmed);
    }

    #[test]
    fn reservation_spanning_several_slots_blocks_each() {
        let hours = showroom_hours();
        let d = date(2030, 1, 15);
        let now = utc(2030, 1, 10, 12, 0);
        // An admin-created 10:00-11:30 block covers three slots.
        let existing = [BookedSpan {
            start: utc(2030, 1, 15, 18, 0),
            end: utc(2030, 1, 15, 19, 30),
            status: ReservationStatus::Confirmed,
        }];

        let slots = day_schedule(&hours, d, &existing, now).unwrap();
        for i in 2..5 {
            assert_eq!(slots[i].status, SlotStatus::Confirmed, "slot {i}");
        }
        assert_eq!(slots[1].status, SlotStatus::Available);
        assert_eq!(slots[5].status, SlotStatus::Available);
    }

    // Scenario: a date strictly before today is PAST wall to wall, store
    // contents notwithstanding.
    #[test]
    fn past_day_is_past_regardless_of_reservations() {
        let hours = showroom_hours();
        let d = date(2020, 1, 15);
        let now = utc(2030, 1, 10, 12, 0);
        let existing = [BookedSpan {
            start: utc(2020, 1, 15, 18, 0),
            end: utc(2020, 1, 15, 18, 30),
            status: ReservationStatus::Confirmed,
        }];

        let slots = day_schedule(&hours, d, &existing, now).unwrap();
        assert_eq!(slots.len(), 16);
        assert!(slots.iter().all(|s| s.status == SlotStatus::Past));
    }

    #[test]
    fn todays_elapsed_slots_are_past_remaining_are_not() {
        let hours = showroom_hours();
        let d = date(2030, 1, 15);
        // 11:45 AM PST: every slot ending at or before 11:30 has elapsed.
        let now = utc(2030, 1, 15, 19, 45);

        let slots = day_schedule(&hours, d, &[], now).unwrap();
        let past: Vec<bool> = slots.iter().map(|s| s.status == SlotStatus::Past).collect();
        assert_eq!(&past[..6], &[true; 6]);
        assert!(past[6..].iter().all(|p| !p));
    }

    #[test]
    fn slot_ending_exactly_now_is_past() {
        let hours = showroom_hours();
        let d = date(2030, 1, 15);
        // Exactly 9:30 AM PST, the end of the first slot.
        let now = utc(2030, 1, 15, 17, 30);

        let slots = day_schedule(&hours, d, &[], now).unwrap();
        assert_eq!(slots[0].status, SlotStatus::Past);
        assert_ne!(slots[1].status, SlotStatus::Past);
    }

    #[test]
    fn classification_is_idempotent() {
        let hours = showroom_hours();
        let d = date(2030, 1, 15);
        let now = utc(2030, 1, 15, 19, 45);
        let existing = [BookedSpan {
            start: utc(2030, 1, 15, 21, 0),
            end: utc(2030, 1, 15, 21, 30),
            status: ReservationStatus::Pending,
        }];

        let first = day_schedule(&hours, d, &existing, now).unwrap();
        let second = day_schedule(&hours, d, &existing, now).unwrap();
        let statuses = |v: &[crate::slots::Slot]| v.iter().map(|s| s.status).collect::<Vec<_>>();
        assert_eq!(statuses(&first), statuses(&second));
    }

    #[test]
    fn past_is_monotonic_in_now() {
        let hours = showroom_hours();
        let d = date(2030, 1, 15);
        let intervals = generate_slots(&hours, d).unwrap();

        let earlier = utc(2030, 1, 15, 19, 45);
        let later = utc(2030, 1, 15, 22, 10);
        let at_earlier = classify_slots(&hours, d, &intervals, &[], earlier);
        let at_later = classify_slots(&hours, d, &intervals, &[], later);

        for (a, b) in at_earlier.iter().zip(&at_later) {
            if a.status == SlotStatus::Past {
                assert_eq!(b.status, SlotStatus::Past);
            }
        }
    }

    #[test]
    fn generates_through_a_spring_forward_day() {
        // The 02:00-03:00 gap sits before opening time; the day still gets
        // its full 16 slots, starting at 9:00 AM PDT = 16:00 UTC.
        let hours = showroom_hours();
        let intervals = generate_slots(&hours, date(2025, 3, 9)).unwrap();
        assert_eq!(intervals.len(), 16);
        assert_eq!(intervals[0].start, utc(2025, 3, 9, 16, 0));
        assert_eq!(intervals[0].label, "9:00 AM – 9:30 AM");
    }

    #[test]
    fn labels_cross_noon_correctly() {
        let start = utc(2030, 1, 15, 19, 30); // 11:30 AM PST
        let end = utc(2030, 1, 15, 20, 0); // 12:00 PM PST
        assert_eq!(
            format_label(Los_Angeles, start, end),
            "11:30 AM – 12:00 PM"
        );
    }
}
