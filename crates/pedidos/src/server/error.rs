use axum::extract::multipart::MultipartError;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pedidosapp::error::PedidosError;
use serde_json::json;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::error;

pub const NOT_FOUND_MESSAGE: &str = "Pedido no existe";
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Pedidos(#[from] PedidosError),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Form(#[from] FormRejection),

    #[error("blocking task failed: {0}")]
    Task(#[from] JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Pedidos(PedidosError::NotFound(_)) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": NOT_FOUND_MESSAGE })),
            )
                .into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            // Body decoding failures keep the status axum assigns them.
            ApiError::Multipart(e) => e.into_response(),
            ApiError::Json(e) => e.into_response(),
            ApiError::Form(e) => e.into_response(),
            other => {
                error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": INTERNAL_MESSAGE })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedidosapp::model::OrderId;

    #[test]
    fn not_found_is_404() {
        let response = ApiError::from(PedidosError::NotFound(OrderId::new(7.0))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn corrupt_state_is_500() {
        let response =
            ApiError::from(PedidosError::CorruptState("truncated".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_is_400() {
        let response = ApiError::BadRequest("scalar body".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_request_is_500() {
        let response =
            ApiError::from(PedidosError::MalformedRequest("no pedido".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
