//! Date-of-birth arithmetic

use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::LocaleError;
use crate::Result;

/// Gender tag as stored on personnel records.
///
/// The records carry a Vietnamese tag; `Nam` is male and every other value
/// is treated as female for retirement purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_tag(tag: &str) -> Self {
        if tag == "Nam" {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Statutory retirement age as (years, months)
    pub fn retirement_age(&self) -> (u32, u32) {
        match self {
            Gender::Male => (60, 3),
            Gender::Female => (55, 4),
        }
    }
}

/// Parse a date the way the pages submit them: `YYYY-MM-DD`, or a full
/// timestamp whose date part is taken.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }

    Err(LocaleError::InvalidDate(input.to_string()))
}

/// Whole years between `date_of_birth` and `today`. The current year only
/// counts once the birthday has been reached.
pub fn calculate_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

pub fn age_today(date_of_birth: NaiveDate) -> i32 {
    calculate_age(date_of_birth, Local::now().date_naive())
}

/// Date on which the statutory retirement age is reached.
///
/// Adding months clamps to the end of a shorter target month, so a birth
/// date of 30 November gives a retirement date on the last day of February.
pub fn retirement_date(date_of_birth: NaiveDate, gender: Gender) -> Result<NaiveDate> {
    let (years, months) = gender.retirement_age();
    date_of_birth
        .checked_add_months(Months::new(years * 12 + months))
        .ok_or_else(|| LocaleError::OutOfRange(date_of_birth.to_string()))
}
