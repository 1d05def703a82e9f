//! HRMS Notifications
//!
//! - A banner is a dismissible alert at the top of the content area
//! - Banners remove themselves after 5 seconds unless dismissed first
//! - One inactivity timer per page; click or key press re-arms it, and
//!   25 minutes of silence shows a single advisory warning

mod center;
mod error;
mod notification;
mod timeout;

pub use center::{NotificationCenter, DEFAULT_AUTO_DISMISS};
pub use error::NotifyError;
pub use notification::{Banner, Severity};
pub use timeout::{SessionTimeout, DEFAULT_WARNING_AFTER, SESSION_EXPIRY_WARNING};

pub type Result<T> = std::result::Result<T, NotifyError>;
