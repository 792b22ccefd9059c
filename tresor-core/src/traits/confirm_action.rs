//! Destructive-action confirmation Trait

/// Asks the user before something irreversible happens
///
/// Front-end implementations:
/// - TUI: the confirmation modal (the request only reaches the service after "Delete")
/// - tests: closures returning a fixed answer
pub trait ConfirmAction: Send + Sync {
    /// `true` when the user agreed
    ///
    /// # Arguments
    /// * `prompt` - question shown to the user
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> ConfirmAction for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Answer given ahead of time, e.g. by a modal that already asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmed(pub bool);

impl ConfirmAction for Confirmed {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
