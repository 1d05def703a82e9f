//! HRMS Form Helpers
//!
//! Stateless translations of page intents into effects:
//! - validity gate before submit, multipart submit with banners
//! - export links (`?format=excel|word|pdf`)
//! - print documents and their open/print/close lifecycle
//! - upload previews, checkbox row selection, repeating field groups

mod confirm;
mod error;
mod export;
mod fields;
mod form;
mod preview;
mod print;
mod selection;
mod submit;
mod validation;

pub use confirm::{confirm_action, Confirm};
pub use error::FormError;
pub use export::{ExportFormat, ExportLinks};
pub use fields::{FieldGroup, RepeatingFields};
pub use form::{Constraint, FieldValue, FileUpload, FormField, FormMethod, FormModel};
pub use preview::FilePreview;
pub use print::{ContentSource, PrintDocument, PrintJob, PrintState, PRINT_TITLE};
pub use selection::{Row, RowSelection, ACTIVE_ROW_CLASS};
pub use submit::{FormSubmitter, SubmitOutcome, SubmitResponse, SUBMIT_SUCCESS_MESSAGE};
pub use validation::{Violation, ViolationKind};

pub type Result<T> = std::result::Result<T, FormError>;
