use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    completion::{ChatCompletion, CompletionError, CompletionRequest},
    prompts::tutor_system_prompt,
};

/// Reply sent in place of the model's answer whenever the relay fails.
pub const FALLBACK_RESPONSE: &str = "I'm here to help you learn English! Currently, I can assist with grammar, vocabulary, pronunciation, and conversation practice. What specific area would you like to work on?";

pub const DEFAULT_CONTEXT: &str = "general";
pub const DEFAULT_USER_LEVEL: &str = "intermediate";

fn default_context() -> String {
    DEFAULT_CONTEXT.to_string()
}

fn default_user_level() -> String {
    DEFAULT_USER_LEVEL.to_string()
}

/// One student turn. Absent fields fall back to an empty message, the
/// general context and the intermediate level.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_context")]
    pub context: String,
    #[serde(default = "default_user_level")]
    pub user_level: String,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid request body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("prompt rendering failed: {0}")]
    Prompt(#[from] minijinja::Error),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Success { text: String, context: String },
    Failure { fallback: String, error: String },
}

impl RelayOutcome {
    fn failed(err: &RelayError) -> Self {
        RelayOutcome::Failure {
            fallback: FALLBACK_RESPONSE.to_string(),
            error: err.to_string(),
        }
    }
}

/// Decodes a raw request body and relays it. Every failure, including a body
/// that does not decode, becomes [`RelayOutcome::Failure`].
pub async fn relay_body(completion: &dyn ChatCompletion, body: &[u8]) -> RelayOutcome {
    let request_id = Uuid::new_v4();

    let request = match serde_json::from_slice::<ChatRequest>(body) {
        Ok(request) => request,
        Err(err) => {
            let err = RelayError::from(err);
            warn!(%request_id, error = %err, "rejected chat request");
            return RelayOutcome::failed(&err);
        }
    };

    info!(
        %request_id,
        context = %request.context,
        user_level = %request.user_level,
        "chat request"
    );

    match relay(completion, &request).await {
        Ok(text) => RelayOutcome::Success {
            text,
            context: request.context,
        },
        Err(err) => {
            warn!(%request_id, error = %err, "chat relay failed, sending fallback");
            RelayOutcome::failed(&err)
        }
    }
}

/// Builds the tutor prompt for `request` and makes the single completion call.
pub async fn relay(
    completion: &dyn ChatCompletion,
    request: &ChatRequest,
) -> Result<String, RelayError> {
    let system_prompt = tutor_system_prompt(&request.user_level, &request.context)?;
    let text = completion
        .complete(CompletionRequest::new(system_prompt, request.message.clone()))
        .await?;
    Ok(text)
}
