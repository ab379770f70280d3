use std::borrow::Cow;

/// Shown when the backend cannot be reached at all.
pub const CANNOT_CONNECT: &str = "Cannot connect to the server. Check that the backend is running.";
/// Shown for rejected logins.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

#[gymhub_derive::gymhub_error]
pub enum ApiError {
    #[error("Cannot reach backend{}: {source}", format_context(.context))]
    Connection { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error(
        "Backend responded {status}{}: {}",
        format_context(.context),
        .message.as_deref().unwrap_or("no details")
    )]
    Status { status: u16, message: Option<String>, context: Option<Cow<'static, str>> },

    #[error("Unexpected response body{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid backend URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Internal fault{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    /// HTTP status of the failure; `0` when no response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Connection { .. } => Some(0),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message the backend attached to an error response, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Operator-facing message.
    ///
    /// Unreachable backends and rejected credentials get fixed wording, validation and
    /// conflict responses (400, 409) surface the backend message, everything else
    /// falls back to `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Connection { .. } | Self::Status { status: 0, .. } => CANNOT_CONNECT.to_owned(),
            Self::Status { status: 401, .. } => INVALID_CREDENTIALS.to_owned(),
            Self::Status { status: 400 | 409, message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Pulls a human-readable message out of an error body.
///
/// The backend uses `mensaje`, `message` or `error`; a short plain-text body is used as is.
#[must_use]
pub fn extract_backend_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => ["mensaje", "message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .map(str::to_owned),
        Ok(serde_json::Value::String(text)) => Some(text),
        Ok(_) => None,
        Err(_) if !body.starts_with('<') && body.len() <= 200 => Some(body.to_owned()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, message: Option<&str>) -> ApiError {
        ApiError::Status { status, message: message.map(str::to_owned), context: None }
    }

    #[test]
    fn maps_statuses_to_operator_messages() {
        assert_eq!(status(0, None).user_message("x"), CANNOT_CONNECT);
        assert_eq!(status(401, Some("Bad password")).user_message("x"), INVALID_CREDENTIALS);
        assert_eq!(status(404, Some("No existe")).user_message("Could not load"), "Could not load");
        assert_eq!(status(500, None).user_message("Could not save"), "Could not save");
        assert_eq!(status(409, Some("Folio duplicado")).user_message("x"), "Folio duplicado");
        assert_eq!(status(400, None).user_message("Invalid data"), "Invalid data");
    }

    #[test]
    fn extracts_known_message_keys() {
        assert_eq!(extract_backend_message(r#"{"mensaje":"Ya existe"}"#).as_deref(), Some("Ya existe"));
        assert_eq!(extract_backend_message(r#"{"message":"Bad"}"#).as_deref(), Some("Bad"));
        assert_eq!(extract_backend_message(r#"{"error":"Conflict","status":409}"#).as_deref(), Some("Conflict"));
        assert_eq!(extract_backend_message(r#"{"status":409}"#), None);
        assert_eq!(extract_backend_message("Stock insuficiente").as_deref(), Some("Stock insuficiente"));
        assert_eq!(extract_backend_message("<html>oops</html>"), None);
        assert_eq!(extract_backend_message("  "), None);
    }

    #[test]
    fn display_includes_context() {
        let err: Result<(), ApiError> = Err(status(409, Some("Duplicado")));
        let err = err.context("POST clientes").unwrap_err();
        assert_eq!(err.to_string(), "Backend responded 409 (POST clientes): Duplicado");
        assert_eq!(err.kind(), "Status");
        assert_eq!(err.status(), Some(409));
    }
}
