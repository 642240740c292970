use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Envelope for the plain HTTP endpoints (`/health`, unknown routes).
/// GraphQL responses keep the engine's `data`/`errors` shape.
#[derive(Serialize)]
#[serde(untagged)]
pub enum Envelope<'a, T: Serialize> {
    Success {
        success: bool,
        data: T,
        message: &'a str,
    },
    Failure {
        success: bool,
        error: ErrorBody<'a>,
    },
}

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub code: &'a str,
    pub message: &'a str,
    /// Always `null`; internal details stay in the logs.
    pub details: Option<Value>,
}

pub fn success<T: Serialize>(data: T, message: &str) -> Response {
    let body = Envelope::Success {
        success: true,
        data,
        message,
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub fn error(status: StatusCode, code: &str, message: &str) -> Response {
    let body: Envelope<'_, ()> = Envelope::Failure {
        success: false,
        error: ErrorBody {
            code,
            message,
            details: None,
        },
    };
    (status, Json(body)).into_response()
}
