//! Client error types.

use reqwest::StatusCode;
use serde::Deserialize;

/// Errors that can occur when calling the Chargify API.
#[derive(Debug, thiserror::Error)]
pub enum ChargifyError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// Chargify refused the request. The body is kept verbatim because 403
    /// responses do not use the JSON error shape.
    #[error("forbidden: {body}")]
    Forbidden {
        /// Raw response body.
        body: String,
    },

    /// Chargify rejected the request (4xx other than 403/404).
    #[error("Chargify API error: {status} - {}", .errors.join("; "))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error messages returned by Chargify.
        errors: Vec<String>,
    },

    /// Chargify failed to process the request (5xx).
    #[error("Chargify server error: {status} - {body}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Chargify answered with a status outside the 2xx/4xx/5xx ranges.
    #[error("unexpected HTTP status: {status} - {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A request or response body did not match the expected JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An argument was rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ChargifyError {
    /// HTTP status associated with the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(StatusCode::NOT_FOUND.as_u16()),
            Self::Forbidden { .. } => Some(StatusCode::FORBIDDEN.as_u16()),
            Self::Api { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Serialization(_) | Self::InvalidArgument(_) | Self::Configuration(_) => None,
        }
    }

    /// Whether the error means the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Build the error for a non-success response.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::NOT_FOUND {
            return Self::NotFound;
        }
        if status == StatusCode::FORBIDDEN {
            return Self::Forbidden {
                body: body.to_string(),
            };
        }
        if status.is_client_error() {
            return Self::Api {
                status: status.as_u16(),
                errors: decode_errors(body),
            };
        }
        if status.is_server_error() {
            return Self::Server {
                status: status.as_u16(),
                body: body.to_string(),
            };
        }
        Self::UnexpectedStatus {
            status: status.as_u16(),
            body: body.to_string(),
        }
    }
}

/// Error body shapes Chargify uses.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    /// `{"errors": ["msg", ...]}`
    List { errors: Vec<String> },
    /// `{"errors": {"field": ["msg", ...]}}`
    Fields {
        errors: serde_json::Map<String, serde_json::Value>,
    },
    /// `{"error": "msg"}`
    Single { error: String },
}

/// Extract the error messages from a 4xx body.
fn decode_errors(body: &str) -> Vec<String> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::List { errors }) => errors,
        Ok(ErrorBody::Fields { errors }) => errors
            .into_iter()
            .flat_map(|(field, messages)| field_messages(&field, messages))
            .collect(),
        Ok(ErrorBody::Single { error }) => vec![error],
        Err(_) if body.trim().is_empty() => Vec::new(),
        Err(_) => vec![body.to_string()],
    }
}

fn field_messages(field: &str, messages: serde_json::Value) -> Vec<String> {
    match messages {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|m| match m {
                serde_json::Value::String(s) => format!("{field}: {s}"),
                other => format!("{field}: {other}"),
            })
            .collect(),
        serde_json::Value::String(s) => vec![format!("{field}: {s}")],
        other => vec![format!("{field}: {other}")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_forbidden_are_special_cased() {
        assert!(ChargifyError::from_response(StatusCode::NOT_FOUND, "").is_not_found());

        let err = ChargifyError::from_response(StatusCode::FORBIDDEN, "<html>denied</html>");
        match err {
            ChargifyError::Forbidden { body } => assert_eq!(body, "<html>denied</html>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decodes_error_list() {
        let err = ChargifyError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"errors": ["Product must be specified", "Customer must be specified"]}"#,
        );
        match err {
            ChargifyError::Api { status, errors } => {
                assert_eq!(status, 422);
                assert_eq!(
                    errors,
                    vec!["Product must be specified", "Customer must be specified"]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn flattens_field_errors() {
        let err = ChargifyError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"errors": {"handle": ["has already been taken"], "name": "can't be blank"}}"#,
        );
        let ChargifyError::Api { errors, .. } = err else {
            panic!("expected Api error");
        };
        assert!(errors.contains(&"handle: has already been taken".to_string()));
        assert!(errors.contains(&"name: can't be blank".to_string()));
    }

    #[test]
    fn single_error_and_raw_bodies() {
        let single = decode_errors(r#"{"error": "Invalid reference"}"#);
        assert_eq!(single, vec!["Invalid reference"]);

        let raw = decode_errors("Bad Request");
        assert_eq!(raw, vec!["Bad Request"]);

        assert!(decode_errors("  ").is_empty());
    }

    #[test]
    fn server_and_unexpected_statuses() {
        let err = ChargifyError::from_response(StatusCode::BAD_GATEWAY, "upstream");
        assert!(matches!(err, ChargifyError::Server { status: 502, .. }));
        assert_eq!(err.status(), Some(502));

        let err = ChargifyError::from_response(StatusCode::MULTIPLE_CHOICES, "");
        assert!(matches!(
            err,
            ChargifyError::UnexpectedStatus { status: 300, .. }
        ));
    }

    #[test]
    fn display_joins_messages() {
        let err = ChargifyError::Api {
            status: 422,
            errors: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "Chargify API error: 422 - a; b");
    }
}
