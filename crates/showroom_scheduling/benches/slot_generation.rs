use chrono::{Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::America::Los_Angeles;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use showroom_common::models::ReservationStatus;
use showroom_scheduling::{day_schedule, generate_slots, BookedSpan, BusinessHours};

fn showroom_hours() -> BusinessHours {
    BusinessHours {
        tz: Los_Angeles,
        start_hour: 9,
        end_hour: 17,
        slot_minutes: 30,
    }
}

// Helper function to create a run of alternating reservations
fn create_booked_spans(count: usize) -> Vec<BookedSpan> {
    let base = Utc.with_ymd_and_hms(2030, 1, 15, 17, 0, 0).unwrap();
    let mut spans = Vec::new();
    let mut current = base;
    for i in 0..count {
        let start = current;
        let end = start + Duration::minutes(30);
        spans.push(BookedSpan {
            start,
            end,
            status: if i % 2 == 0 {
                ReservationStatus::Pending
            } else {
                ReservationStatus::Confirmed
            },
        });
        current = end + Duration::minutes(30);
    }
    spans
}

fn benchmark_slot_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_generation");
    let hours = showroom_hours();
    let date = NaiveDate::from_ymd_opt(2030, 1, 15).unwrap();
    let now = Utc.with_ymd_and_hms(2030, 1, 10, 12, 0, 0).unwrap();

    group.bench_function("generate_only", |b| {
        b.iter(|| generate_slots(black_box(&hours), black_box(date)).unwrap())
    });

    group.bench_function("empty_day_schedule", |b| {
        b.iter(|| day_schedule(black_box(&hours), black_box(date), &[], black_box(now)).unwrap())
    });

    let busy = create_booked_spans(100);
    group.bench_function("schedule_with_100_reservations", |b| {
        b.iter(|| {
            day_schedule(
                black_box(&hours),
                black_box(date),
                black_box(&busy),
                black_box(now),
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_slot_generation);
criterion_main!(benches);
