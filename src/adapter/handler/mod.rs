pub mod error;
pub mod kafka_handler;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::usecase::SendMessageUseCase;

/// AppState はアプリケーション全体の共有状態を表す。
#[derive(Clone)]
pub struct AppState {
    pub send_message_uc: Arc<SendMessageUseCase>,
}

/// ErrorResponse は REST API のエラーレスポンス。
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        kafka_handler::healthz,
        kafka_handler::readyz,
        kafka_handler::send_message,
    ),
    components(schemas(ErrorResponse, ErrorBody))
)]
struct ApiDoc;

/// REST API ルーターを構築する。
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(kafka_handler::healthz))
        .route("/readyz", get(kafka_handler::readyz))
        .route("/kafka", post(kafka_handler::send_message))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
