//! Date math primitives shared by the reconciliation state machine and the loan engines.
//!
//! Dates cross the boundary as `YYYY-MM-DD` strings, the value format of an HTML date
//! input. The string functions treat an empty or unreadable date as "not entered yet"
//! and degrade to a no-op instead of failing.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format used for dates on the string boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const START_BEFORE_END: &str = "Start date must be before end date";
pub const END_AFTER_START: &str = "End date must be after start date";

/// Unit of a period companion field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Days,
    Months,
    Years,
}

impl PeriodUnit {
    pub fn name(&self) -> &'static str {
        match self {
            PeriodUnit::Days => "days",
            PeriodUnit::Months => "months",
            PeriodUnit::Years => "years",
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PeriodUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "days" => Ok(PeriodUnit::Days),
            "months" => Ok(PeriodUnit::Months),
            "years" => Ok(PeriodUnit::Years),
            other => Err(format!("unknown period unit: {other:?}")),
        }
    }
}

/// Paired range-ordering messages for the two date fields.
///
/// Always both-or-neither; a fresh value replaces the previous one on every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateValidationErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl DateValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    fn range_order() -> Self {
        Self {
            start_date: Some(START_BEFORE_END.to_string()),
            end_date: Some(END_AFTER_START.to_string()),
        }
    }
}

/// Parse a `YYYY-MM-DD` date; empty or malformed input yields `None`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Read the leading integer of a period field, the way a form reads a number input.
///
/// Trailing text is ignored (`"3 months"` reads as 3, `"1.5"` as 1). Only strictly
/// positive amounts are returned.
pub fn parse_period_amount(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let amount: i64 = digits[..end].parse().ok()?;
    if negative || amount == 0 {
        return None;
    }
    Some(amount)
}

/// Build a date from a possibly out-of-range day, rolling any excess into the following
/// month(s) the way a calendar overflow does.
fn roll_over(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(i64::from(day) - 1))
}

/// Add a whole number of calendar units to a date.
///
/// Zero or negative amounts, and results outside the representable range, return the
/// date unchanged.
pub fn add_period(date: NaiveDate, amount: i64, unit: PeriodUnit) -> NaiveDate {
    if amount <= 0 {
        return date;
    }
    let shifted = match unit {
        PeriodUnit::Days => date.checked_add_signed(Duration::days(amount)),
        PeriodUnit::Months => {
            let index = i64::from(date.year()) * 12 + i64::from(date.month0()) + amount;
            i32::try_from(index.div_euclid(12))
                .ok()
                .and_then(|year| roll_over(year, index.rem_euclid(12) as u32 + 1, date.day()))
        }
        PeriodUnit::Years => i32::try_from(i64::from(date.year()) + amount)
            .ok()
            .and_then(|year| roll_over(year, date.month(), date.day())),
    };
    shifted.unwrap_or(date)
}

/// String form of [`add_period`]. An empty or unreadable date returns an empty string.
pub fn add_period_to_date(date: &str, amount: i64, unit: PeriodUnit) -> String {
    match parse_date(date) {
        Some(parsed) => format_date(add_period(parsed, amount, unit)),
        None => String::new(),
    }
}

/// Whole units between two dates.
///
/// Months ignore the day of month entirely; years are the floor of months over twelve.
/// A reversed range counts negative.
pub fn period_between(start: NaiveDate, end: NaiveDate, unit: PeriodUnit) -> i64 {
    let months = || {
        (i64::from(end.year()) - i64::from(start.year())) * 12
            + (i64::from(end.month()) - i64::from(start.month()))
    };
    match unit {
        // Calendar dates carry no time of day, so the ceiling of the day span is exact.
        PeriodUnit::Days => (end - start).num_days(),
        PeriodUnit::Months => months(),
        PeriodUnit::Years => months().div_euclid(12),
    }
}

/// String form of [`period_between`]. Returns 0 when either date is missing.
pub fn calculate_period_between(start: &str, end: &str, unit: PeriodUnit) -> i64 {
    match (parse_date(start), parse_date(end)) {
        (Some(start), Some(end)) => period_between(start, end, unit),
        _ => 0,
    }
}

/// Check that the start date is strictly before the end date.
///
/// Returns no errors when either date is missing.
pub fn validate_date_range(start: &str, end: &str) -> DateValidationErrors {
    match (parse_date(start), parse_date(end)) {
        (Some(start), Some(end)) if start >= end => DateValidationErrors::range_order(),
        _ => DateValidationErrors::default(),
    }
}
