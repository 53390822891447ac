//! Frontend Errors
//!
//! Every failure a user action can hit, and how each one is surfaced.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No `csrfmiddlewaretoken` input on the page
    #[error("CSRF token not found!")]
    MissingCsrfToken,
    /// Required form field left empty
    #[error("Please fill in the \"{0}\" field.")]
    MissingField(&'static str),
    /// fetch() rejected or the response could not be read
    #[error("Network error: {0}")]
    Transport(String),
    /// Response body was not the expected JSON
    #[error("Response error: {0}")]
    Decode(String),
    /// Server answered with a non-success status
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    /// Text to show in a toast, or `None` when the failure stays silent.
    ///
    /// `fallback` is the flow-specific message used for transport and
    /// decode failures.
    pub fn toast_message(&self, fallback: &str) -> Option<String> {
        match self {
            ApiError::MissingCsrfToken => None,
            ApiError::MissingField(_) => Some(self.to_string()),
            ApiError::Transport(_) | ApiError::Decode(_) => Some(fallback.to_string()),
            ApiError::Server(message) => Some(format!("Error: {}", message)),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csrf_failure_is_silent() {
        assert_eq!(ApiError::MissingCsrfToken.toast_message("x"), None);
    }

    #[test]
    fn test_server_message_is_surfaced_verbatim() {
        let err = ApiError::Server("Account number already exists".into());
        assert_eq!(
            err.toast_message("fallback").as_deref(),
            Some("Error: Account number already exists")
        );
    }

    #[test]
    fn test_transport_failures_use_the_generic_message() {
        let err = ApiError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(
            err.toast_message("An error occurred while creating the account.").as_deref(),
            Some("An error occurred while creating the account.")
        );
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = ApiError::MissingField("cashValue");
        assert_eq!(
            err.toast_message("unused").as_deref(),
            Some("Please fill in the \"cashValue\" field.")
        );
    }
}
