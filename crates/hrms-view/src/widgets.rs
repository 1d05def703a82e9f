//! Option objects for third-party widgets
//!
//! The page initializes its tables and charts from these; keeping them here
//! means the defaults live in one typed place instead of in page scripts.

use serde::{Deserialize, Serialize};

use crate::Result;

const VIETNAMESE_LANGUAGE_URL: &str = "//cdn.datatables.net/plug-ins/1.10.24/i18n/Vietnamese.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableLanguage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTableOptions {
    pub language: DataTableLanguage,
    pub page_length: u32,
    pub responsive: bool,
}

impl DataTableOptions {
    /// Vietnamese UI strings, 25 rows per page, responsive layout
    pub fn vietnamese() -> Self {
        Self {
            language: DataTableLanguage {
                url: VIETNAMESE_LANGUAGE_URL.to_string(),
            },
            page_length: 25,
            responsive: true,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for DataTableOptions {
    fn default() -> Self {
        Self::vietnamese()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
}

impl ChartOptions {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatable_defaults() {
        let json = DataTableOptions::default().to_json().unwrap();
        assert!(json.contains("\"pageLength\":25"));
        assert!(json.contains("\"responsive\":true"));
        assert!(json.contains("Vietnamese.json"));
    }

    #[test]
    fn test_chart_defaults() {
        assert_eq!(
            ChartOptions::default().to_json().unwrap(),
            r#"{"responsive":true,"maintainAspectRatio":false}"#
        );
    }
}
