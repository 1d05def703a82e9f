//! HRMS Quick Search
//!
//! Employee lookup from the search box:
//! - fewer than 2 characters clears the results, no request
//! - otherwise a spinner shows at once and one request goes out after
//!   300 ms without further typing
//! - a response only renders if no newer keystroke has arrived since

mod backend;
mod controller;
mod employee;
mod error;
mod modal;
mod view;

pub use backend::{HttpSearchBackend, SearchBackend};
pub use controller::{SearchController, DEFAULT_QUIET_PERIOD, MIN_QUERY_CHARS};
pub use employee::EmployeeSummary;
pub use error::SearchError;
pub use modal::{SearchModal, DEFAULT_FOCUS_DELAY};
pub use view::SearchView;

pub type Result<T> = std::result::Result<T, SearchError>;
