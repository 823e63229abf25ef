//! Raw form input → typed records.
//!
//! Amounts are lenient: the leading number is used and trailing text is
//! ignored; no number, or a negative one, becomes zero. Dates are strict and
//! fail with `InvalidDate`.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, EventStatus, Money, Receipt, RepeatPolicy};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Event fields exactly as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub estimated_revenue: String,
    pub estimated_food_cost: String,
    pub estimated_labor_cost: String,
    pub actual_revenue: String,
    pub actual_food_cost: String,
    pub actual_labor_cost: String,
    pub status: String,
    pub notes: String,
    pub lists: Vec<String>,
    pub repeat: String,
    pub repeat_until: String,
}

impl EventForm {
    /// Pre-fill a form from a stored event (edit flow).
    pub fn from_event(ev: &Event) -> Self {
        Self {
            title: ev.title.clone(),
            date: ev.date_str(),
            estimated_revenue: ev.estimated_revenue.to_string(),
            estimated_food_cost: ev.estimated_food_cost.to_string(),
            estimated_labor_cost: ev.estimated_labor_cost.to_string(),
            actual_revenue: ev.actual_revenue.to_string(),
            actual_food_cost: ev.actual_food_cost.to_string(),
            actual_labor_cost: ev.actual_labor_cost.to_string(),
            status: ev.status.to_db_str().to_string(),
            notes: ev.notes.clone(),
            lists: ev.lists.clone(),
            repeat: ev.repeat.to_db_str().to_string(),
            repeat_until: ev
                .repeat_until
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn into_event(self) -> AppResult<Event> {
        let date = parse_iso_date(&self.date)?;
        let repeat_until = parse_optional_date(&self.repeat_until)?;

        let status = if self.status.trim().is_empty() {
            EventStatus::default()
        } else {
            EventStatus::from_code(&self.status)
                .ok_or_else(|| AppError::InvalidStatus(self.status.clone()))?
        };

        let repeat = if self.repeat.trim().is_empty() {
            RepeatPolicy::default()
        } else {
            RepeatPolicy::from_code(&self.repeat)
                .ok_or_else(|| AppError::InvalidRepeat(self.repeat.clone()))?
        };

        let lists = self
            .lists
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        Ok(Event {
            id: 0,
            title: self.title,
            date,
            estimated_revenue: parse_amount(&self.estimated_revenue),
            estimated_food_cost: parse_amount(&self.estimated_food_cost),
            estimated_labor_cost: parse_amount(&self.estimated_labor_cost),
            actual_revenue: parse_amount(&self.actual_revenue),
            actual_food_cost: parse_amount(&self.actual_food_cost),
            actual_labor_cost: parse_amount(&self.actual_labor_cost),
            status,
            notes: self.notes,
            lists,
            repeat,
            repeat_until,
        })
    }
}

/// Receipt fields exactly as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct ReceiptForm {
    pub store: String,
    pub total: String,
    pub date: String,
}

impl ReceiptForm {
    pub fn from_receipt(r: &Receipt) -> Self {
        Self {
            store: r.store.clone(),
            total: r.total.to_string(),
            date: r.date_str(),
        }
    }

    pub fn into_receipt(self) -> AppResult<Receipt> {
        let date = parse_iso_date(&self.date)?;
        Ok(Receipt::new(self.store, parse_amount(&self.total), date))
    }
}

/// Parse a money amount from the longest leading number of `input`
/// (`"12abc"` is 12, `"1,234"` is 1). No leading number, or a negative one,
/// gives zero. Magnitudes beyond `Decimal::MAX` saturate.
pub fn parse_amount(input: &str) -> Money {
    let s = input.trim_start();
    let prefix = &s[..numeric_prefix_len(s)];
    if prefix.is_empty() || prefix.starts_with('-') {
        return Decimal::ZERO;
    }

    let (mantissa, exponent) = match prefix.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e.trim_start_matches('+'))),
        None => (prefix, None),
    };
    let mantissa = mantissa.trim_start_matches('+');
    let mantissa = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => {
            let int_part = if int_part.is_empty() { "0" } else { int_part };
            // keep within the 28 significant digits a Decimal can hold
            let keep = 28usize.saturating_sub(int_part.trim_start_matches('0').len());
            let frac: String = frac_part.chars().take(keep).collect();
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{int_part}.{frac}")
            }
        }
        None => mantissa.to_string(),
    };

    let parsed = match exponent {
        Some(e) => Decimal::from_scientific(&format!("{mantissa}e{e}")),
        None => Decimal::from_str(&mantissa),
    };

    match parsed {
        Ok(v) if !v.is_sign_negative() => v,
        Ok(_) => Decimal::ZERO,
        // too small to represent
        Err(_) if exponent.is_some_and(|e| e.starts_with('-')) => Decimal::ZERO,
        Err(_) => Decimal::MAX,
    }
}

/// Byte length of the leading `[+-]digits[.digits][e[+-]digits]` run, or 0
/// when it holds no digit. A dangling exponent marker is not part of it.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_end = digits_from(i);
    let mut end = int_end;
    let mut has_digits = int_end > i;

    if b.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return 0;
    }

    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    end
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_iso_date(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(input.to_string()))
}

/// Empty input means "not set"; anything else must be a valid date.
pub fn parse_optional_date(input: &str) -> AppResult<Option<NaiveDate>> {
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse_iso_date(input).map(Some)
    }
}
