use gymhub_domain::MembershipStatus;
use gymhub_http::ApiError;
use gymhub_kernel::validation::ValidationErrors;
use std::borrow::Cow;

/// A specialized [`MembershipError`] enum of this crate.
#[gymhub_derive::gymhub_error]
pub enum MembershipError {
    #[error("Membership request failed{}: {source}", format_context(.context))]
    Api { source: ApiError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Validation { source: ValidationErrors, context: Option<Cow<'static, str>> },

    #[error("A membership with status {status} cannot be renewed")]
    NotRenewable { status: MembershipStatus },

    #[error("A membership with status {status} cannot be cancelled")]
    NotCancellable { status: MembershipStatus },

    #[error("Membership not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal membership error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl MembershipError {
    /// Operator-facing message, see [`ApiError::user_message`].
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { source, .. } => source.user_message(fallback),
            Self::Internal { .. } => fallback.to_owned(),
            other => other.to_string(),
        }
    }
}
