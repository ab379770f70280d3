use gymhub_http::ApiError;
use std::borrow::Cow;

/// A specialized [`GymHubError`] enum of the facade.
#[gymhub_derive::gymhub_error]
pub enum GymHubError {
    #[error("Backend client error{}: {source}", format_context(.context))]
    Api { source: ApiError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
