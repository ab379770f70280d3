//! Confirmation seam for destructive or billable actions.
//!
//! Renewals and cancellations ask a [`Confirm`] implementation before they touch the
//! backend. The shell plugs in a terminal prompt; tests and `--yes` runs use the
//! fixed answers below.

/// Asks the operator to approve an action.
pub trait Confirm: Send + Sync {
    /// Returns `true` when the operator accepts `prompt`.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Accepts every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

/// Declines every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, "Auto-confirmed");
        true
    }
}

impl Confirm for NeverConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, "Auto-declined");
        false
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
