use gymhub_http::ApiError;
use gymhub_kernel::validation::ValidationErrors;
use std::borrow::Cow;

/// A specialized [`PaymentError`] enum of this crate.
#[gymhub_derive::gymhub_error]
pub enum PaymentError {
    #[error("Payment request failed{}: {source}", format_context(.context))]
    Api { source: ApiError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Validation { source: ValidationErrors, context: Option<Cow<'static, str>> },

    #[error("Insufficient stock for '{product}': {available} available, {requested} requested")]
    InsufficientStock { product: String, available: i32, requested: i32 },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal payment error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PaymentError {
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
