use chrono::NaiveDate;

/// Excel serial number of an ISO `YYYY-MM-DD` string, if it is one.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}
