//! Expansion of a repeating event template into independent instances.

use crate::models::{Event, RepeatPolicy};
use chrono::{Duration, Months, NaiveDate};

/// Date of the `n`-th occurrence (0 = anchor).
///
/// Monthly steps are counted from the anchor, so a series anchored on the
/// 31st lands on the last day of shorter months and returns to the 31st
/// afterwards.
pub fn occurrence_date(anchor: NaiveDate, policy: RepeatPolicy, n: u32) -> Option<NaiveDate> {
    match policy {
        RepeatPolicy::None => (n == 0).then_some(anchor),
        RepeatPolicy::Weekly => anchor.checked_add_signed(Duration::days(7 * i64::from(n))),
        RepeatPolicy::Biweekly => anchor.checked_add_signed(Duration::days(14 * i64::from(n))),
        RepeatPolicy::Monthly => anchor.checked_add_months(Months::new(n)),
    }
}

/// Expand `template` into one event per occurrence between its date and
/// `repeat_until` (inclusive).
///
/// The anchor is always the first element. Without a policy, or without a
/// bound, the result is the anchor alone. Every instance carries
/// `RepeatPolicy::None` and no bound.
pub fn expand(template: &Event) -> Vec<Event> {
    let anchor = template.date;
    let until = match (template.repeat, template.repeat_until) {
        (RepeatPolicy::None, _) | (_, None) => anchor,
        (_, Some(until)) => until.max(anchor),
    };

    let mut out = Vec::new();
    let mut n = 0;

    while let Some(date) = occurrence_date(anchor, template.repeat, n) {
        if date > until {
            break;
        }
        out.push(Event {
            date,
            repeat: RepeatPolicy::None,
            repeat_until: None,
            ..template.clone()
        });
        n += 1;
    }

    out
}
