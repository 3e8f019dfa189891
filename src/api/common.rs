use crate::services::graph_client::GraphError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

/// Success envelope for data-returning operator endpoints.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub ok: bool,
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Failure half of the operator envelope: every error leaves the service
/// as `{ok: false, error}` with an appropriate status code.
#[derive(Debug)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub error: Value,
}

impl ApiFailure {
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: json!(message),
        }
    }

    pub fn internal(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: json!(message),
        }
    }

    /// Remote platform failures surface as 502 with the platform's own
    /// structured error detail.
    pub fn from_graph(err: GraphError) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            error: err.detail(),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let body = json!({ "ok": false, "error": self.error });
        (self.status, Json(body)).into_response()
    }
}
