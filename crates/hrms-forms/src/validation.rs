//! Pre-submit validity gate
//!
//! Follows native constraint semantics: an empty optional field is valid no
//! matter what other constraints it carries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::form::{Constraint, FieldValue, FormField, FormModel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViolationKind {
    Missing,
    TooShort { min: usize },
    TooLong { max: usize },
    NotANumber,
    BelowMinimum { min: f64 },
    AboveMaximum { max: f64 },
    InvalidEmail,
    InvalidDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
}

impl FormModel {
    /// Every field that fails, with the first constraint it fails
    pub fn check_validity(&self) -> Vec<Violation> {
        self.fields.iter().filter_map(check_field).collect()
    }

    /// Gate a submit. On failure the form switches on invalid-state styling.
    pub fn validate(&mut self) -> bool {
        let violations = self.check_validity();
        if violations.is_empty() {
            return true;
        }

        tracing::debug!(
            form_id = %self.id,
            invalid = violations.len(),
            "Form failed validity check"
        );
        self.was_validated = true;
        false
    }
}

fn check_field(field: &FormField) -> Option<Violation> {
    let violation = |kind| {
        Some(Violation {
            field: field.name.clone(),
            kind,
        })
    };

    if field.value.is_empty() {
        if field.constraints.contains(&Constraint::Required) {
            return violation(ViolationKind::Missing);
        }
        return None;
    }

    let text = match &field.value {
        FieldValue::Text(text) => text.as_str(),
        FieldValue::File(_) => return None,
    };

    for constraint in &field.constraints {
        let kind = match constraint {
            Constraint::Required => None,
            Constraint::MinLength(min) if text.chars().count() < *min => {
                Some(ViolationKind::TooShort { min: *min })
            }
            Constraint::MaxLength(max) if text.chars().count() > *max => {
                Some(ViolationKind::TooLong { max: *max })
            }
            Constraint::MinLength(_) | Constraint::MaxLength(_) => None,
            Constraint::Range { min, max } => check_range(text, *min, *max),
            Constraint::Email if !looks_like_email(text) => Some(ViolationKind::InvalidEmail),
            Constraint::Date if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_err() => {
                Some(ViolationKind::InvalidDate)
            }
            Constraint::Email | Constraint::Date => None,
        };

        if let Some(kind) = kind {
            return violation(kind);
        }
    }

    None
}

fn check_range(text: &str, min: Option<f64>, max: Option<f64>) -> Option<ViolationKind> {
    // Number inputs take finite decimals only; NaN and infinity are not numbers
    let value: f64 = match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return Some(ViolationKind::NotANumber),
    };

    if let Some(min) = min {
        if value < min {
            return Some(ViolationKind::BelowMinimum { min });
        }
    }
    if let Some(max) = max {
        if value > max {
            return Some(ViolationKind::AboveMaximum { max });
        }
    }
    None
}

fn looks_like_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !text.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
