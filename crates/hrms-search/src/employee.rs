//! Employee summary as returned by the search endpoint

use serde::{Deserialize, Serialize};

pub const NO_POSITION: &str = "Chưa có chức vụ";
pub const NO_DEPARTMENT: &str = "Chưa có đơn vị";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl EmployeeSummary {
    pub fn detail_path(&self) -> String {
        format!("/employee/{}", self.id)
    }

    /// Position, or the placeholder when missing or blank
    pub fn position_label(&self) -> &str {
        label_or(self.position.as_deref(), NO_POSITION)
    }

    /// Department, or the placeholder when missing or blank
    pub fn department_label(&self) -> &str {
        label_or(self.department.as_deref(), NO_DEPARTMENT)
    }
}

fn label_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|s| !s.trim().is_empty()).unwrap_or(fallback)
}
