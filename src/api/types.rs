use serde::Serialize;

use crate::tutor::RelayOutcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<RelayOutcome> for ChatResponse {
    fn from(outcome: RelayOutcome) -> Self {
        match outcome {
            RelayOutcome::Success { text, context } => ChatResponse {
                response: text,
                context: Some(context),
                success: true,
                error: None,
            },
            RelayOutcome::Failure { fallback, error } => ChatResponse {
                response: fallback,
                context: None,
                success: false,
                error: Some(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_has_no_error_key() {
        let body = serde_json::to_value(ChatResponse::from(RelayOutcome::Success {
            text: "T".into(),
            context: "travel".into(),
        }))
        .unwrap();
        assert_eq!(
            body,
            json!({ "response": "T", "context": "travel", "success": true })
        );
    }

    #[test]
    fn failure_envelope_has_no_context_key() {
        let body = serde_json::to_value(ChatResponse::from(RelayOutcome::Failure {
            fallback: "fallback".into(),
            error: "boom".into(),
        }))
        .unwrap();
        assert_eq!(
            body,
            json!({ "response": "fallback", "success": false, "error": "boom" })
        );
    }
}
