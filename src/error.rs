use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Field-level validation failure, serialized as `{msg, loc, type}`.
///
/// `loc` is a dotted path into the request (`body.url`, `body.expires_at`,
/// or `body` for whole-payload failures).
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub msg: String,
    pub loc: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<FieldError>,
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

/// Application error taxonomy.
///
/// Variants map onto HTTP responses in [`IntoResponse`]:
///
/// - `Validation` → 422 with a `{errors: [{msg, loc, type}]}` body
/// - `BadRequest` → 400 `{message}`
/// - `NotFound`   → 404 `{message}`
/// - `Conflict`   → 409 `{message}` (duplicate key; the build retry loop
///   consumes these before they can reach a client)
/// - `Internal`   → 500 with a generic `{message}`; details are logged, not
///   returned
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },
    #[error("{message}")]
    BadRequest { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    /// Single-field validation failure at the given request location.
    pub fn validation(
        loc: impl Into<String>,
        msg: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        let error = FieldError {
            msg: msg.into(),
            loc: loc.into(),
            kind: kind.into(),
        };
        Self::Validation {
            message: error.msg.clone(),
            errors: vec![error],
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let errors: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| FieldError {
                    msg: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                    loc: format!("body.{field}"),
                    kind: "value_error".to_string(),
                })
            })
            .collect();

        Self::Validation {
            message: "Validation failed".to_string(),
            errors,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return Self::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        Self::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { errors, .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody { errors }),
            )
                .into_response(),
            AppError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, Json(MessageBody { message })).into_response()
            }
            AppError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, Json(MessageBody { message })).into_response()
            }
            AppError::Conflict { message, .. } => {
                (StatusCode::CONFLICT, Json(MessageBody { message })).into_response()
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
