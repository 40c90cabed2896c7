//! Axum route handlers for the holiday helper HTTP server.
//!
//! # Routes
//!
//! - `GET  /health`: Returns `{"status": "ok", "version": ...}`
//! - `GET  /categories`: Categories, styles and example questions
//! - `POST /respond`: Answer a question (`ResponseRequest`)
//! - `POST /respond/marriage`: Answer a marriage question (`MarriageRequest`)
//! - `POST /customize`: Append situational remarks (`CustomizeRequest`)
//! - `POST /similar`: Other questions of a category (`SimilarRequest`)
//! - `POST /mcp`: MCP JSON-RPC endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::envelope::{CatalogReply, CustomizedReply, ErrorReply, ResponseReply, SimilarReply};
use crate::mcp::protocol::PARSE_ERROR;
use crate::mcp::{handle_request, JsonRpcRequest, JsonRpcResponse};
use crate::service::{
    CustomizeRequest, HelperService, MarriageRequest, Reply, ResponseRequest, SimilarRequest,
};
use crate::utilities::errors::HelperError;

/// Shared application state for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: HelperService,
}

impl AppState {
    pub fn new(service: HelperService) -> Self {
        Self { service }
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/categories", get(categories_handler))
        .route("/respond", post(respond_handler))
        .route("/respond/marriage", post(respond_marriage_handler))
        .route("/customize", post(customize_handler))
        .route("/similar", post(similar_handler))
        .route("/mcp", post(mcp_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type HandlerResult<T> = Result<Json<T>, (StatusCode, Json<ErrorReply>)>;

/// Map an engine reply to HTTP: caller mistakes are 400, data faults 500.
fn into_http<T>(reply: Reply<T>) -> HandlerResult<T> {
    reply.map(Json).map_err(|err| {
        let status = match err.kind.as_str() {
            "InvalidInputError" | "InvalidStyleError" | "InvalidCategoryError" => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(err))
    })
}

/// Unwrap a JSON body, turning extractor rejections into a 400 `ErrorReply`.
fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, (StatusCode, Json<ErrorReply>)> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        let message = rejection.body_text();
        tracing::info!(status = %rejection.status(), "Rejected request body: {}", message);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorReply::from(HelperError::invalid_input(message))),
        )
    })
}

/// GET /health: liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "holiday-helper",
    }))
}

/// GET /categories: registry listing.
async fn categories_handler(State(state): State<AppState>) -> Json<CatalogReply> {
    Json(state.service.list_categories())
}

/// POST /respond: answer a question of any category.
async fn respond_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResponseRequest>, JsonRejection>,
) -> HandlerResult<ResponseReply> {
    let request = json_body(payload)?;
    into_http(state.service.generate_response(&request))
}

/// POST /respond/marriage: answer a marriage question.
async fn respond_marriage_handler(
    State(state): State<AppState>,
    payload: Result<Json<MarriageRequest>, JsonRejection>,
) -> HandlerResult<ResponseReply> {
    let request = json_body(payload)?;
    into_http(state.service.generate_marriage_response(&request))
}

/// POST /customize: append situational remarks to a response.
async fn customize_handler(
    State(state): State<AppState>,
    payload: Result<Json<CustomizeRequest>, JsonRejection>,
) -> HandlerResult<CustomizedReply> {
    let request = json_body(payload)?;
    Ok(Json(state.service.customize_response(&request)))
}

/// POST /similar: other questions of the same category.
async fn similar_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimilarRequest>, JsonRejection>,
) -> HandlerResult<SimilarReply> {
    let request = json_body(payload)?;
    into_http(state.service.similar_questions(&request))
}

/// POST /mcp: one JSON-RPC request per call.
///
/// Notifications are acknowledged with `202 Accepted` and an empty body.
/// Unparsable bodies get a JSON-RPC parse error, as on stdio.
async fn mcp_handler(
    State(state): State<AppState>,
    payload: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> axum::response::Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Unparsable MCP message: {}", rejection.body_text());
            let response = JsonRpcResponse::failure(
                serde_json::Value::Null,
                PARSE_ERROR,
                format!("Parse error: {}", rejection.body_text()),
            );
            return Json(response).into_response();
        }
    };
    match handle_request(&request, &state.service) {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        app_router(AppState::new(HelperService::load(None).unwrap()))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["service"], "holiday-helper");
    }

    #[tokio::test]
    async fn test_categories_endpoint() {
        let request = Request::builder()
            .uri("/categories")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["total_categories"], 6);
        assert_eq!(json["styles"][0]["key"], "humorous");
    }

    #[tokio::test]
    async fn test_respond_auto_detects_marriage() {
        let (status, json) = post_json(
            "/respond",
            serde_json::json!({ "question": "결혼은 언제 하니?", "style": "humorous", "category": "auto" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["category_key"], "marriage");
        assert_eq!(json["matched_question"], "결혼은 언제 하니?");
        assert!(!json["response"].as_str().unwrap().is_empty());
        assert!(json["disclaimer"].as_str().unwrap().starts_with("⚠️"));
    }

    #[tokio::test]
    async fn test_respond_rejects_unknown_style() {
        let (status, json) = post_json(
            "/respond",
            serde_json::json!({ "question": "아무 말", "style": "nonexistent_style", "category": "weather" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["kind"], "InvalidStyleError");
        let message = json["message"].as_str().unwrap();
        for key in ["humorous", "witty", "polite", "reverse", "wise"] {
            assert!(message.contains(key));
        }
    }

    #[tokio::test]
    async fn test_respond_marriage_endpoint() {
        let (status, json) = post_json(
            "/respond/marriage",
            serde_json::json!({ "question": "만나는 사람은 있니?" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["style_key"], "humorous");
        assert_eq!(json["matched_question"], "만나는 사람은 있니?");
    }

    #[tokio::test]
    async fn test_customize_and_similar_endpoints() {
        let (status, json) = post_json(
            "/customize",
            serde_json::json!({ "response": "괜찮아요.", "is_married": true }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["customized"].as_str().unwrap().contains("이미 결혼했어요"));

        let (status, json) = post_json(
            "/similar",
            serde_json::json!({ "category": "hobby", "question": "취미는?" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["kind"], "InvalidCategoryError");
    }

    #[tokio::test]
    async fn test_rejected_bodies_get_error_reply() {
        let (status, json) = post_json(
            "/customize",
            serde_json::json!({ "response": "괜찮아요.", "age": 0 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let reply: ErrorReply = serde_json::from_value(json).unwrap();
        assert_eq!(reply.kind, "InvalidInputError");
        assert_eq!(reply.error, "입력 오류");
        assert!(!reply.timestamp.is_empty());

        let (status, json) = post_json("/respond", serde_json::json!({ "style": "wise" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["kind"], "InvalidInputError");
        assert!(json["message"].as_str().unwrap().contains("question"));

        for uri in ["/respond/marriage", "/similar"] {
            let (status, json) = post_json(uri, serde_json::json!([])).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["kind"], "InvalidInputError");
        }
    }

    #[tokio::test]
    async fn test_similar_endpoint_matches_paraphrase() {
        let (status, json) = post_json(
            "/similar",
            serde_json::json!({ "category": "marriage", "question": "그래서 결혼은 언제 하니?" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["matched_question"], "결혼은 언제 하니?");
        assert_eq!(json["similar_questions"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_mcp_endpoint() {
        let (status, json) = post_json(
            "/mcp",
            serde_json::json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/list" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], 3);
        assert_eq!(json["result"]["tools"].as_array().unwrap().len(), 6);

        let (status, _) = post_json(
            "/mcp",
            serde_json::json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);

        let (status, json) = post_json("/mcp", serde_json::json!({ "id": 4 })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["error"]["code"], PARSE_ERROR);
        assert_eq!(json["id"], Value::Null);
    }
}
