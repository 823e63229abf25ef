use catercal::core::calendar::{GRID_DAYS, grid_start};
use catercal::core::{BucketSpan, Granularity, calendar_buckets};
use catercal::models::YearMonth;
use chrono::{Datelike, Weekday};

mod common;
use common::{d, event_on};

#[test]
fn monthly_grid_has_42_days_starting_on_sunday() {
    for (y, m) in [(2025, 2), (2025, 6), (2025, 7), (2026, 2), (2024, 9)] {
        let reference = d(y, m, 15);
        let buckets = calendar_buckets(&[], reference, reference, Granularity::Monthly);

        assert_eq!(buckets.len(), GRID_DAYS);
        let BucketSpan::Day(first) = buckets[0].span else {
            panic!("monthly buckets must be days");
        };
        assert_eq!(first.weekday(), Weekday::Sun);
        assert!(first <= d(y, m, 1));
    }
}

#[test]
fn grid_starts_on_the_first_when_it_is_a_sunday() {
    // 2025-06-01 is a Sunday
    let june = YearMonth::new(2025, 6).expect("valid month");
    assert_eq!(grid_start(june), d(2025, 6, 1));
}

#[test]
fn adjacent_month_days_are_not_current() {
    let buckets = calendar_buckets(&[], d(2025, 7, 10), d(2025, 7, 10), Granularity::Monthly);

    for b in &buckets {
        let BucketSpan::Day(day) = b.span else {
            panic!("day bucket expected");
        };
        assert_eq!(b.is_current, day.month() == 7, "{day}");
    }
    // 2025-07-01 is a Tuesday: Sun 29 and Mon 30 June lead the grid
    assert_eq!(buckets[0].span, BucketSpan::Day(d(2025, 6, 29)));
    assert!(!buckets[0].is_current);
}

#[test]
fn event_lands_in_its_day_bucket_only() {
    let events = vec![
        event_on("lunch", d(2025, 7, 25)),
        event_on("dinner", d(2025, 7, 25)),
        event_on("brunch", d(2025, 7, 26)),
    ];

    let buckets = calendar_buckets(&events, d(2025, 7, 1), d(2025, 7, 1), Granularity::Monthly);

    for b in &buckets {
        for ev in &b.events {
            assert_eq!(b.span, BucketSpan::Day(ev.date));
        }
    }

    let day = buckets
        .iter()
        .find(|b| b.span == BucketSpan::Day(d(2025, 7, 25)))
        .expect("25th is in the grid");
    let titles: Vec<_> = day.events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["lunch", "dinner"]);

    let total: usize = buckets.iter().map(|b| b.events.len()).sum();
    assert_eq!(total, 3);
}

#[test]
fn grid_includes_events_of_adjacent_months() {
    let events = vec![event_on("late june", d(2025, 6, 30))];
    let buckets = calendar_buckets(&events, d(2025, 7, 15), d(2025, 7, 15), Granularity::Monthly);

    let b = buckets
        .iter()
        .find(|b| !b.events.is_empty())
        .expect("event shown in leading days");
    assert!(!b.is_current);
}

#[test]
fn today_is_flagged_only_on_its_day() {
    let today = d(2025, 7, 16);
    let buckets = calendar_buckets(&[], d(2025, 7, 1), today, Granularity::Monthly);

    let flagged: Vec<_> = buckets.iter().filter(|b| b.is_today).collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].span, BucketSpan::Day(today));
}

#[test]
fn three_month_view_covers_previous_current_next() {
    let events = vec![
        event_on("dec", d(2024, 12, 31)),
        event_on("jan", d(2025, 1, 10)),
        event_on("feb", d(2025, 2, 1)),
        event_on("mar", d(2025, 3, 1)),
    ];

    let buckets = calendar_buckets(&events, d(2025, 1, 15), d(2025, 1, 15), Granularity::ThreeMonth);

    let months: Vec<_> = buckets
        .iter()
        .map(|b| match b.span {
            BucketSpan::Month(m) => m.to_string(),
            BucketSpan::Day(day) => day.to_string(),
        })
        .collect();
    assert_eq!(months, vec!["2024-12", "2025-01", "2025-02"]);

    let current: Vec<bool> = buckets.iter().map(|b| b.is_current).collect();
    assert_eq!(current, vec![false, true, false]);

    let counts: Vec<usize> = buckets.iter().map(|b| b.events.len()).collect();
    assert_eq!(counts, vec![1, 1, 1]);
    assert!(buckets[1].is_today);
}

#[test]
fn annual_view_has_twelve_months_of_the_reference_year() {
    let events = vec![
        event_on("a", d(2025, 3, 3)),
        event_on("b", d(2025, 3, 30)),
        event_on("c", d(2025, 12, 31)),
        event_on("other year", d(2026, 3, 3)),
    ];

    let buckets = calendar_buckets(&events, d(2025, 7, 4), d(2026, 1, 1), Granularity::Annual);

    assert_eq!(buckets.len(), 12);
    assert_eq!(buckets[0].span, BucketSpan::Month(YearMonth::new(2025, 1).expect("month")));
    assert_eq!(buckets[11].span, BucketSpan::Month(YearMonth::new(2025, 12).expect("month")));
    assert_eq!(buckets[2].events.len(), 2);
    assert_eq!(buckets[11].events.len(), 1);
    assert!(buckets.iter().all(|b| !b.is_today));
}

#[test]
fn view_codes_parse_and_reject_unknown() {
    assert_eq!(Granularity::from_code("monthly").ok(), Some(Granularity::Monthly));
    assert_eq!(Granularity::from_code("3month").ok(), Some(Granularity::ThreeMonth));
    assert_eq!(Granularity::from_code(" Annual ").ok(), Some(Granularity::Annual));
    assert!(Granularity::from_code("weekly").is_err());
}

#[test]
fn stepping_moves_by_view_size_and_clamps() {
    assert_eq!(Granularity::Monthly.step(d(2025, 1, 31), true), d(2025, 2, 28));
    assert_eq!(Granularity::ThreeMonth.step(d(2025, 1, 15), false), d(2024, 10, 15));
    assert_eq!(Granularity::Annual.step(d(2024, 2, 29), true), d(2025, 2, 28));
}
