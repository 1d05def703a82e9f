//! HRMS View Layer
//!
//! Rust owns the UI state; the web view only renders what it is handed.
//! This crate holds the pieces every component shares:
//! - `EventBus` carrying input and activity events from the page
//! - `Render` for turning view-models into escaped markup
//! - serializable option objects for the table and chart widgets

mod error;
mod event;
mod html;
mod widgets;

pub use error::ViewError;
pub use event::{EventBus, Subscription, UiEvent};
pub use html::{escape_html, Render};
pub use widgets::{ChartOptions, DataTableLanguage, DataTableOptions};

pub type Result<T> = std::result::Result<T, ViewError>;
