use catercal::core::expand;
use catercal::core::recurrence::occurrence_date;
use catercal::models::{EventStatus, RepeatPolicy};
use rust_decimal_macros::dec;

mod common;
use common::{d, event_on};

fn dates(policy: RepeatPolicy, anchor: chrono::NaiveDate, until: chrono::NaiveDate) -> Vec<String> {
    let template = event_on("series", anchor).with_repeat(policy, Some(until));
    expand(&template).iter().map(|e| e.date_str()).collect()
}

#[test]
fn weekly_series_includes_both_ends() {
    assert_eq!(
        dates(RepeatPolicy::Weekly, d(2025, 7, 1), d(2025, 7, 15)),
        vec!["2025-07-01", "2025-07-08", "2025-07-15"]
    );
}

#[test]
fn biweekly_series_stops_before_bound() {
    assert_eq!(
        dates(RepeatPolicy::Biweekly, d(2025, 7, 1), d(2025, 7, 28)),
        vec!["2025-07-01", "2025-07-15"]
    );
}

#[test]
fn monthly_series_clamps_to_month_end() {
    assert_eq!(
        dates(RepeatPolicy::Monthly, d(2025, 1, 31), d(2025, 4, 30)),
        vec!["2025-01-31", "2025-02-28", "2025-03-31", "2025-04-30"]
    );
}

#[test]
fn monthly_series_in_leap_year() {
    assert_eq!(
        dates(RepeatPolicy::Monthly, d(2024, 1, 30), d(2024, 3, 30)),
        vec!["2024-01-30", "2024-02-29", "2024-03-30"]
    );
}

#[test]
fn bound_equal_to_anchor_yields_anchor_only() {
    assert_eq!(
        dates(RepeatPolicy::Weekly, d(2025, 7, 1), d(2025, 7, 1)),
        vec!["2025-07-01"]
    );
}

#[test]
fn bound_before_anchor_yields_anchor_only() {
    assert_eq!(
        dates(RepeatPolicy::Monthly, d(2025, 7, 1), d(2025, 6, 1)),
        vec!["2025-07-01"]
    );
}

#[test]
fn no_repeat_yields_single_anchor() {
    let template = event_on("one-off", d(2025, 7, 1)).with_repeat(RepeatPolicy::None, Some(d(2025, 12, 31)));
    let out = expand(&template);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].date, d(2025, 7, 1));
}

#[test]
fn missing_bound_yields_single_anchor() {
    let template = event_on("open", d(2025, 7, 1)).with_repeat(RepeatPolicy::Weekly, None);
    assert_eq!(expand(&template).len(), 1);
}

#[test]
fn instances_inherit_fields_and_drop_repeat() {
    let mut template = event_on("Farmers brunch", d(2025, 7, 6))
        .with_estimates(dec!(900), dec!(300), dec!(150))
        .with_status(EventStatus::Confirmed)
        .with_repeat(RepeatPolicy::Weekly, Some(d(2025, 7, 20)));
    template.notes = "outdoor".to_string();
    template.lists = vec!["Eggs".to_string(), "Pastries".to_string()];

    let out = expand(&template);
    assert_eq!(out.len(), 3);

    for ev in &out {
        assert_eq!(ev.title, "Farmers brunch");
        assert_eq!(ev.estimated_revenue, dec!(900));
        assert_eq!(ev.status, EventStatus::Confirmed);
        assert_eq!(ev.notes, "outdoor");
        assert_eq!(ev.lists, template.lists);
        assert_eq!(ev.repeat, RepeatPolicy::None);
        assert_eq!(ev.repeat_until, None);
    }
}

#[test]
fn occurrence_zero_is_the_anchor() {
    for policy in [
        RepeatPolicy::None,
        RepeatPolicy::Weekly,
        RepeatPolicy::Biweekly,
        RepeatPolicy::Monthly,
    ] {
        assert_eq!(occurrence_date(d(2025, 5, 31), policy, 0), Some(d(2025, 5, 31)));
    }
    assert_eq!(occurrence_date(d(2025, 5, 31), RepeatPolicy::None, 1), None);
}
