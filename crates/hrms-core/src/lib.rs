//! HRMS Core
//!
//! Coordination layer for the portal's client-side behavior.
//! Rust owns all UI state; the web view renders what it is handed and
//! reports input and activity back over the event bus.

mod config;
mod error;
mod portal;

pub use config::Config;
pub use error::CoreError;
pub use portal::{Portal, SEARCH_FIELD_ID};

// Re-export the components
pub use hrms_forms::{
    confirm_action, Confirm, ContentSource, ExportFormat, ExportLinks, FieldGroup, FieldValue,
    FilePreview, FileUpload, FormError, FormField, FormMethod, FormModel, FormSubmitter,
    PrintDocument, PrintJob, PrintState, RepeatingFields, RowSelection, SubmitOutcome,
    SubmitResponse,
};
pub use hrms_locale::{
    calculate_age, format_currency, format_date, format_number, retirement_date, Gender,
    LocaleError, RetirementUrgency,
};
pub use hrms_notify::{Banner, NotificationCenter, NotifyError, SessionTimeout, Severity};
pub use hrms_search::{
    EmployeeSummary, HttpSearchBackend, SearchBackend, SearchController, SearchError,
    SearchModal, SearchView,
};
pub use hrms_view::{EventBus, Render, Subscription, UiEvent, ViewError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
