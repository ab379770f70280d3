use gymhub_http::ApiError;
use gymhub_kernel::validation::ValidationErrors;
use std::borrow::Cow;

/// A specialized [`AuthError`] enum of this crate.
#[gymhub_derive::gymhub_error]
pub enum AuthError {
    /// Login request failed, including rejected credentials (401).
    #[error("Auth request failed{}: {source}", format_context(.context))]
    Api { source: ApiError, context: Option<Cow<'static, str>> },
    /// Missing username or password.
    #[error("{source}{}", format_context(.context))]
    Validation { source: ValidationErrors, context: Option<Cow<'static, str>> },
    /// An operation needs a signed-in operator.
    #[error("Not signed in{}: {message}", format_context(.context))]
    Unauthenticated { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal auth error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl AuthError {
    /// Operator-facing message, see [`ApiError::user_message`].
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { source, .. } => source.user_message(fallback),
            Self::Validation { source, .. } => source.to_string(),
            Self::Unauthenticated { .. } => "Please sign in first.".to_owned(),
            Self::Internal { .. } => fallback.to_owned(),
        }
    }
}
