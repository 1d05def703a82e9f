//! HRMS Locale
//!
//! Vietnamese (vi-VN) presentation of dates, numbers and money, plus the
//! date-of-birth arithmetic the personnel pages display: age and the
//! statutory retirement date with its urgency bands.

mod dates;
mod error;
mod format;
mod retirement;

pub use dates::{age_today, calculate_age, parse_date, retirement_date, Gender};
pub use error::LocaleError;
pub use format::{format_currency, format_date, format_date_str, format_number};
pub use retirement::{
    months_until, retirement_notices, RetirementNotices, RetirementUrgency, DECISION_WINDOW_DAYS,
    NOTICE_WINDOW_DAYS,
};

pub type Result<T> = std::result::Result<T, LocaleError>;
