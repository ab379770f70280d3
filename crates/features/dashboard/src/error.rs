use gymhub_memberships::MembershipError;
use gymhub_payments::PaymentError;
use gymhub_people::PeopleError;
use gymhub_training::TrainingError;
use std::borrow::Cow;

/// A specialized [`DashboardError`] enum of this crate.
///
/// The dashboard is loaded as a whole: the first failing collection fails the load.
#[gymhub_derive::gymhub_error]
pub enum DashboardError {
    #[error("Dashboard people error{}: {source}", format_context(.context))]
    People { source: PeopleError, context: Option<Cow<'static, str>> },

    #[error("Dashboard membership error{}: {source}", format_context(.context))]
    Membership { source: MembershipError, context: Option<Cow<'static, str>> },

    #[error("Dashboard payment error{}: {source}", format_context(.context))]
    Payment { source: PaymentError, context: Option<Cow<'static, str>> },

    #[error("Dashboard training error{}: {source}", format_context(.context))]
    Training { source: TrainingError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal dashboard error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DashboardError {
    /// Operator-facing message of the underlying failure.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::People { source, .. } => source.user_message(fallback),
            Self::Membership { source, .. } => source.user_message(fallback),
            Self::Payment { source, .. } => source.user_message(fallback),
            Self::Training { source, .. } => source.user_message(fallback),
            Self::Internal { .. } => fallback.to_owned(),
        }
    }
}
