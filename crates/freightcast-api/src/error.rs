use axum::{
    extract::path::ErrorKind,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use freightcast_core::error::FreightError;
use serde::Serialize;

/// Error returned by every handler
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// Request field that failed validation
    pub field: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            field: None,
        }
    }

    pub fn on_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.message,
            field: self.field,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<FreightError> for ApiError {
    fn from(err: FreightError) -> Self {
        let message = err.to_string();
        match err {
            FreightError::Validation { field, .. } => {
                Self::new(StatusCode::BAD_REQUEST, message).on_field(field)
            }
            FreightError::DistanceUnavailable { .. } => Self::new(StatusCode::BAD_REQUEST, message),
            FreightError::RecordNotFound { .. } => Self::new(StatusCode::NOT_FOUND, message),
            FreightError::NoTrainableData { .. } => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            FreightError::ConfigMissing { .. }
            | FreightError::ConfigInvalid { .. }
            | FreightError::Io(_)
            | FreightError::Serialization(_) => {
                tracing::error!(error = %message, "Request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        let field = match &rejection {
            JsonRejection::JsonDataError(_) => rejected_field(&message),
            _ => None,
        };
        let status = match &rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => StatusCode::BAD_REQUEST,
            _ => rejection.status(),
        };

        let err = Self::new(status, message);
        match field {
            Some(field) => err.on_field(field),
            None => err,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match &rejection {
            PathRejection::FailedToDeserializePathParams(inner) => {
                let err = Self::new(StatusCode::BAD_REQUEST, rejection.body_text());
                match inner.kind() {
                    ErrorKind::ParseErrorAtKey { key, .. } => err.on_field(key.clone()),
                    _ => err,
                }
            }
            _ => Self::new(rejection.status(), rejection.body_text()),
        }
    }
}

/// Field named by a body deserialization error.
///
/// Errors read `...target type: <path>: <reason>`, or
/// `...target type: missing field `<name>`...` at the top level.
fn rejected_field(message: &str) -> Option<String> {
    let (_, detail) = message.split_once("target type: ")?;
    if let Some(rest) = detail.strip_prefix("missing field `") {
        return rest.split_once('`').map(|(field, _)| field.to_string());
    }
    let (path, _) = detail.split_once(": ")?;
    if path.is_empty() || path.contains(char::is_whitespace) {
        return None;
    }
    Some(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (FreightError::validation("price", "must be greater than 0"), StatusCode::BAD_REQUEST),
            (
                FreightError::DistanceUnavailable {
                    origin: "Khorgos".into(),
                    destination: "Atlantis".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (FreightError::RecordNotFound { id: 9 }, StatusCode::NOT_FOUND),
            (
                FreightError::NoTrainableData {
                    origin: "Baku".into(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (FreightError::Serialization("bad".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_validation_names_field() {
        let err = ApiError::from(FreightError::validation("destination", "must not be empty"));
        assert_eq!(err.field.as_deref(), Some("destination"));
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = ApiError::from(FreightError::Serialization("secret path".into()));
        assert_eq!(err.message, "Internal error");
        assert!(err.field.is_none());
    }

    #[test]
    fn test_rejected_field() {
        let prefix = "Failed to deserialize the JSON body into the target type";
        assert_eq!(
            rejected_field(&format!("{}: price: invalid type: map, expected f64", prefix)),
            Some("price".to_string())
        );
        assert_eq!(
            rejected_field(&format!("{}: missing field `destination` at line 1 column 2", prefix)),
            Some("destination".to_string())
        );
        assert_eq!(
            rejected_field(&format!("{}: invalid type: integer `5`, expected a map", prefix)),
            None
        );
        assert_eq!(rejected_field("Expected request with `Content-Type: application/json`"), None);
    }
}
