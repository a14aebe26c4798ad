use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::{ValidationError, ValidationErrors};

use crate::domain::form::FormError;
use crate::domain::repositories::ApiError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Upstream { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::Upstream { message, .. } => f.write_str(message),
        }
    }
}

fn upstream_details(e: &ApiError) -> Value {
    match e {
        ApiError::Status { status, .. } => json!({ "upstream_status": status }),
        _ => json!({}),
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::upstream(e.to_string(), upstream_details(&e))
    }
}

impl From<FormError> for AppError {
    fn from(e: FormError) -> Self {
        let details = match &e {
            FormError::DomainsUnavailable(api) | FormError::IssueFailed(api) => {
                upstream_details(api)
            }
            _ => json!({}),
        };

        if e.is_upstream() {
            AppError::upstream(e.to_string(), details)
        } else {
            AppError::bad_request(e.to_string(), details)
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let details: serde_json::Map<String, Value> = e
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages: Vec<String> = errors.iter().map(describe).collect();
                (field.to_string(), json!(messages))
            })
            .collect();

        AppError::bad_request(validation_message(&e), Value::Object(details))
    }
}

/// First human-readable message of a set of validation errors.
pub fn validation_message(e: &ValidationErrors) -> String {
    let mut fields: Vec<_> = e.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .first()
        .and_then(|(_, errors)| errors.first())
        .map(describe)
        .unwrap_or_else(|| "Validation failed".to_string())
}

fn describe(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Upstream { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
