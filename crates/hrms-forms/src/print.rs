//! Printable documents
//!
//! A print copies one element's markup into a bare page that opens the
//! print dialog on load and closes itself afterwards.
//!
//! ```text
//! Opened
//!   ↓ load
//! Printing
//!   ↓ after print (or cancel)
//! Closed
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use hrms_view::{escape_html, Render};

use crate::error::FormError;
use crate::Result;

pub const PRINT_TITLE: &str = "In tài liệu";
const PRINT_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";

/// Anything that can hand out the inner markup of a page element by id
pub trait ContentSource {
    fn inner_html(&self, element_id: &str) -> Option<String>;
}

impl ContentSource for HashMap<String, String> {
    fn inner_html(&self, element_id: &str) -> Option<String> {
        self.get(element_id).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    pub title: String,
    pub stylesheet: String,
    /// Markup copied from the page as-is
    pub body_html: String,
}

impl PrintDocument {
    pub fn new(body_html: String) -> Self {
        Self {
            title: PRINT_TITLE.to_string(),
            stylesheet: PRINT_STYLESHEET.to_string(),
            body_html,
        }
    }

    pub fn from_element<S: ContentSource + ?Sized>(source: &S, element_id: &str) -> Result<Self> {
        let body = source
            .inner_html(element_id)
            .ok_or_else(|| FormError::ElementNotFound(element_id.to_string()))?;
        Ok(Self::new(body))
    }
}

impl Render for PrintDocument {
    fn render_html(&self) -> String {
        format!(
            r#"<html>
<head>
    <title>{title}</title>
    <link href="{stylesheet}" rel="stylesheet">
    <style>
        body {{ padding: 20px; }}
        @media print {{
            .no-print {{ display: none; }}
        }}
    </style>
</head>
<body>
    {body}
    <script>
        window.onload = function() {{
            window.print();
            window.onafterprint = function() {{
                window.close();
            }}
        }}
    </script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            stylesheet = escape_html(&self.stylesheet),
            body = self.body_html,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintState {
    /// Print context created, content not yet loaded
    Opened,
    /// Print dialog showing
    Printing,
    /// Context closed
    Closed,
}

impl PrintState {
    pub fn can_transition_to(&self, target: PrintState) -> bool {
        match (self, target) {
            (PrintState::Opened, PrintState::Printing) => true,
            // Cancel is allowed from anywhere
            (PrintState::Opened, PrintState::Closed) => true,
            (PrintState::Printing, PrintState::Closed) => true,
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrintState::Opened => "opened",
            PrintState::Printing => "printing",
            PrintState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for PrintState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct PrintJob {
    pub id: String,
    pub document: PrintDocument,
    state: PrintState,
}

impl PrintJob {
    pub fn open(document: PrintDocument) -> Self {
        let job = Self {
            id: Uuid::new_v4().to_string(),
            document,
            state: PrintState::Opened,
        };
        tracing::debug!(job_id = %job.id, "Opened print context");
        job
    }

    pub fn state(&self) -> PrintState {
        self.state
    }

    /// Content loaded; the print dialog opens
    pub fn on_load(&mut self) -> Result<()> {
        self.transition(PrintState::Printing)
    }

    /// Dialog finished, whether printed or not
    pub fn on_after_print(&mut self) -> Result<()> {
        self.transition(PrintState::Closed)
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.transition(PrintState::Closed)
    }

    fn transition(&mut self, target: PrintState) -> Result<()> {
        if !self.state.can_transition_to(target) {
            return Err(FormError::InvalidTransition {
                from: self.state,
                to: target,
            });
        }
        tracing::debug!(job_id = %self.id, from = %self.state, to = %target, "Print state change");
        self.state = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> HashMap<String, String> {
        let mut page = HashMap::new();
        page.insert(
            "employeeProfile".to_string(),
            "<h3>Nguyễn Văn An</h3><p class=\"no-print\">Sửa</p>".to_string(),
        );
        page
    }

    #[test]
    fn test_document_copies_element() {
        let doc = PrintDocument::from_element(&page(), "employeeProfile").unwrap();
        let html = doc.render_html();

        assert!(html.contains("<title>In tài liệu</title>"));
        assert!(html.contains("<h3>Nguyễn Văn An</h3>"));
        assert!(html.contains("window.print();"));
        assert!(html.contains("window.close();"));
        assert!(html.contains("body { padding: 20px; }"));
    }

    #[test]
    fn test_missing_element() {
        assert!(matches!(
            PrintDocument::from_element(&page(), "nothing"),
            Err(FormError::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_job_lifecycle() {
        let doc = PrintDocument::from_element(&page(), "employeeProfile").unwrap();
        let mut job = PrintJob::open(doc);
        assert_eq!(job.state(), PrintState::Opened);

        job.on_load().unwrap();
        assert_eq!(job.state(), PrintState::Printing);
        job.on_after_print().unwrap();
        assert_eq!(job.state(), PrintState::Closed);

        assert!(matches!(
            job.on_load(),
            Err(FormError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_cancel_before_load() {
        let mut job = PrintJob::open(PrintDocument::new("<p>x</p>".to_string()));
        job.cancel().unwrap();
        assert_eq!(job.state(), PrintState::Closed);
    }
}
