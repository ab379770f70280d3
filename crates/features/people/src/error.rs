use gymhub_http::ApiError;
use gymhub_kernel::validation::ValidationErrors;
use std::borrow::Cow;

/// A specialized [`PeopleError`] enum of this crate.
#[gymhub_derive::gymhub_error]
pub enum PeopleError {
    /// The backend call failed.
    #[error("People request failed{}: {source}", format_context(.context))]
    Api { source: ApiError, context: Option<Cow<'static, str>> },
    /// The form was rejected before anything was sent.
    #[error("{source}{}", format_context(.context))]
    Validation { source: ValidationErrors, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal people error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PeopleError {
    /// Operator-facing message, see [`ApiError::user_message`].
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { source, .. } => source.user_message(fallback),
            Self::Validation { source, .. } => source.to_string(),
            Self::Internal { .. } => fallback.to_owned(),
        }
    }
}
