//! Operator-facing rendering of failures.

use gymhub::GymHubError;
use gymhub::features::auth::AuthError;
use gymhub::features::dashboard::DashboardError;
use gymhub::features::memberships::MembershipError;
use gymhub::features::payments::PaymentError;
use gymhub::features::people::PeopleError;
use gymhub::features::training::TrainingError;
use gymhub::http::ApiError;
use gymhub::kernel::validation::ValidationErrors;

/// Shown for failures the backend does not explain (404, 500, ...).
pub const FALLBACK_MESSAGE: &str = "The operation could not be completed. Please try again.";

/// Maps the first known error in the chain to its operator message.
#[must_use]
pub fn user_message(err: &anyhow::Error) -> String {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<PeopleError>() {
            return e.user_message(FALLBACK_MESSAGE);
        }
        if let Some(e) = cause.downcast_ref::<MembershipError>() {
            return e.user_message(FALLBACK_MESSAGE);
        }
        if let Some(e) = cause.downcast_ref::<PaymentError>() {
            return e.user_message(FALLBACK_MESSAGE);
        }
        if let Some(e) = cause.downcast_ref::<TrainingError>() {
            return e.user_message(FALLBACK_MESSAGE);
        }
        if let Some(e) = cause.downcast_ref::<AuthError>() {
            return e.user_message(FALLBACK_MESSAGE);
        }
        if let Some(e) = cause.downcast_ref::<DashboardError>() {
            return e.user_message(FALLBACK_MESSAGE);
        }
        if let Some(e) = cause.downcast_ref::<ApiError>() {
            return e.user_message(FALLBACK_MESSAGE);
        }
        if let Some(e) = cause.downcast_ref::<ValidationErrors>() {
            return e.to_string();
        }
        if let Some(GymHubError::Api { source, .. }) = cause.downcast_ref::<GymHubError>() {
            return source.to_string();
        }
    }
    err.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymhub::http::CANNOT_CONNECT;

    #[test]
    fn unexplained_backend_failures_use_the_fallback() {
        let api = ApiError::Status { status: 500, message: None, context: None };
        let err = anyhow::Error::new(PaymentError::from(api));
        assert_eq!(user_message(&err), FALLBACK_MESSAGE);
    }

    #[test]
    fn connection_failures_say_so() {
        let api = ApiError::Status { status: 0, message: None, context: None };
        let err = anyhow::Error::new(PeopleError::from(api));
        assert_eq!(user_message(&err), CANNOT_CONNECT);
    }

    #[test]
    fn plain_errors_keep_their_text() {
        let err = anyhow::anyhow!("client membership 9 not found");
        assert_eq!(user_message(&err), "client membership 9 not found");
    }
}
