use axum::{body::Bytes, extract::State, Json};

use crate::{api::types::ChatResponse, api::AppState, tutor};

/// `POST /api/chat`. Always answers 200; a failed relay is reported in the
/// body through `success: false`.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Json<ChatResponse> {
    let outcome = tutor::relay_body(state.completion.as_ref(), &body).await;
    Json(outcome.into())
}
