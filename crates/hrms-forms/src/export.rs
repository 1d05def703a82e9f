//! Export links
//!
//! Files are produced by the server; the page only navigates to the report
//! endpoint with the wanted format.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FormError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Excel,
    Word,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "excel",
            ExportFormat::Word => "word",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = FormError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "word" | "docx" => Ok(ExportFormat::Word),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(FormError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportLinks {
    base: Url,
}

impl ExportLinks {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Navigation target for exporting `endpoint` as `format`. Relative
    /// endpoints resolve against the portal base; existing query parameters
    /// are kept.
    pub fn export_url(&self, endpoint: &str, format: ExportFormat) -> Result<Url> {
        let mut url = self.base.join(endpoint)?;
        url.query_pairs_mut().append_pair("format", format.as_str());

        tracing::info!(url = %url, format = %format, "Export requested");

        Ok(url)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}
