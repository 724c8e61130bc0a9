//! Request DTOs for the gateway endpoints.

use serde::Deserialize;
use serde_json::Value;

/// Inbound action dispatch request.
///
/// `payload` stays an untyped JSON value here; the router validates the
/// action's required fields after resolving the provider/action pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRequest {
    pub provider: String,
    #[serde(default)]
    pub action: Option<String>,
    pub agent_id: String,
    #[serde(default)]
    pub payload: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatch_request_deserializes() {
        let request: DispatchRequest = serde_json::from_value(json!({
            "provider": "classroom",
            "action": "getCourses",
            "agentId": "agent-7",
            "payload": {}
        }))
        .unwrap();

        assert_eq!(request.provider, "classroom");
        assert_eq!(request.action.as_deref(), Some("getCourses"));
        assert_eq!(request.agent_id, "agent-7");
    }

    #[test]
    fn payload_and_action_are_optional() {
        let request: DispatchRequest = serde_json::from_value(json!({
            "provider": "chat",
            "agentId": "agent-7"
        }))
        .unwrap();

        assert!(request.action.is_none());
        assert!(request.payload.is_null());
    }
}
