//! Confirmation before destructive actions

/// Asks the user a yes/no question
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Run `action` only if the prompt accepts `message`
pub fn confirm_action<C, T>(prompt: &C, message: &str, action: impl FnOnce() -> T) -> Option<T>
where
    C: Confirm + ?Sized,
{
    if prompt.confirm(message) {
        Some(action())
    } else {
        tracing::debug!(message = %message, "Action declined");
        None
    }
}
