//! The two proxy endpoints.
//!
//! Every gateway failure is absorbed here: full detail goes to the log, the
//! caller only ever sees a fixed message and a 500.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use buddy_llm::PromptGateway;
use serde_json::{json, Value};
use tracing::error;

use crate::models::PromptRequest;

const FULL_RESULT_ERROR: &str = "Failed to fetch full result";
const RESPONSE_ONLY_ERROR: &str = "Failed to fetch response only";

#[derive(Clone)]
pub struct AppState {
    gateway: Arc<dyn PromptGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn PromptGateway>) -> Self {
        Self { gateway }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/full-result", post(full_result))
        .route("/api/response-only", post(response_only))
        .with_state(state)
}

/// `POST /api/full-result` — the endpoint's entire payload, unmodified.
async fn full_result(
    State(state): State<AppState>,
    Json(req): Json<PromptRequest>,
) -> (StatusCode, Json<Value>) {
    match state.gateway.full_result(&req.prompt).await {
        Ok(payload) => (StatusCode::OK, Json(payload)),
        Err(err) => {
            error!(error = %err, "error fetching full result");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": FULL_RESULT_ERROR })),
            )
        }
    }
}

/// `POST /api/response-only` — just the generated text.
async fn response_only(
    State(state): State<AppState>,
    Json(req): Json<PromptRequest>,
) -> (StatusCode, Json<Value>) {
    match state.gateway.response_only(&req.prompt).await {
        Ok(text) => (StatusCode::OK, Json(json!({ "response": text }))),
        Err(err) => {
            error!(error = %err, "error fetching response only");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": RESPONSE_ONLY_ERROR })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use buddy_llm::{LlmError, Result as LlmResult};

    /// Gateway double: `Some(payload)` answers both operations, `None` fails
    /// them the way a dead endpoint would.
    struct FakeGateway {
        payload: Option<Value>,
    }

    #[async_trait]
    impl PromptGateway for FakeGateway {
        async fn full_result(&self, _prompt: &str) -> LlmResult<Value> {
            self.payload.clone().ok_or(LlmError::MissingResponseField)
        }

        async fn response_only(&self, _prompt: &str) -> LlmResult<String> {
            let payload = self.payload.clone().ok_or(LlmError::MissingResponseField)?;
            payload
                .get("response")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or(LlmError::MissingResponseField)
        }
    }

    fn state_with(payload: Option<Value>) -> AppState {
        AppState::new(Arc::new(FakeGateway { payload }))
    }

    fn request(prompt: &str) -> Json<PromptRequest> {
        Json(PromptRequest {
            prompt: prompt.to_string(),
        })
    }

    #[tokio::test]
    async fn test_full_result_passes_payload_through() {
        let payload = json!({ "response": "```js\nfizz()\n```", "done": true });
        let state = state_with(Some(payload.clone()));

        let (status, Json(body)) = full_result(State(state), request("write fizzbuzz")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn test_full_result_failure_is_generic() {
        let (status, Json(body)) = full_result(State(state_with(None)), request("x")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch full result" }));
    }

    #[tokio::test]
    async fn test_response_only_wraps_text() {
        let state = state_with(Some(json!({ "response": "print(1)" })));

        let (status, Json(body)) = response_only(State(state), request("print one")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "response": "print(1)" }));
    }

    #[tokio::test]
    async fn test_response_only_missing_field_is_generic() {
        let state = state_with(Some(json!({ "done": true })));

        let (status, Json(body)) = response_only(State(state), request("x")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch response only" }));
    }
}
