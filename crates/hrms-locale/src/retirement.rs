//! Retirement urgency bands
//!
//! Personnel staff must send a retirement notice six months ahead and issue
//! the decision three months ahead; anyone within two years is watched.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const NOTICE_WINDOW_DAYS: i64 = 180;
pub const DECISION_WINDOW_DAYS: i64 = 90;

const DECISION_MONTHS: i32 = 3;
const NOTICE_MONTHS: i32 = 6;
const WATCH_MONTHS: i32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetirementUrgency {
    /// Retirement date already reached
    Retired,
    /// Three months or less: the decision must be issued
    Decision,
    /// Six months or less: the notice must be sent
    Notice,
    /// Within two years
    Watch,
    /// Further out than two years
    Distant,
}

impl RetirementUrgency {
    pub fn classify(retirement: NaiveDate, today: NaiveDate) -> Self {
        if retirement <= today {
            return RetirementUrgency::Retired;
        }

        match months_until(retirement, today) {
            m if m <= DECISION_MONTHS => RetirementUrgency::Decision,
            m if m <= NOTICE_MONTHS => RetirementUrgency::Notice,
            m if m <= WATCH_MONTHS => RetirementUrgency::Watch,
            _ => RetirementUrgency::Distant,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RetirementUrgency::Retired => "Đã nghỉ hưu",
            RetirementUrgency::Decision => "Cấp bách - Ra quyết định",
            RetirementUrgency::Notice => "Quan trọng - Thông báo",
            RetirementUrgency::Watch => "Theo dõi",
            RetirementUrgency::Distant => "",
        }
    }
}

/// Calendar-month difference, ignoring the day of month
pub fn months_until(target: NaiveDate, today: NaiveDate) -> i32 {
    (target.year() - today.year()) * 12 + (target.month() as i32 - today.month() as i32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RetirementNotices {
    pub notice_due: bool,
    pub decision_due: bool,
}

pub fn retirement_notices(retirement: NaiveDate, today: NaiveDate) -> RetirementNotices {
    RetirementNotices {
        notice_due: retirement <= today + Duration::days(NOTICE_WINDOW_DAYS),
        decision_due: retirement <= today + Duration::days(DECISION_WINDOW_DAYS),
    }
}
