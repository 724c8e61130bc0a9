//! Inbound action request and payload access.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::GatewayError;

/// A raw action request as received on the wire.
///
/// `provider` and `action` stay as strings here; the router resolves them
/// into the typed dispatch table. `agent_id` is an opaque caller identity
/// used only for logging and result correlation, never for authorization.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    pub provider: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(rename = "agentId")]
    pub agent_id: String,
    #[serde(default)]
    pub payload: Payload,
}

impl ActionRequest {
    /// Creates a request from its parts.
    pub fn new(
        provider: impl Into<String>,
        action: Option<&str>,
        agent_id: impl Into<String>,
        payload: Payload,
    ) -> Self {
        Self {
            provider: provider.into(),
            action: action.map(str::to_owned),
            agent_id: agent_id.into(),
            payload,
        }
    }
}

/// JSON object payload with presence-only validation helpers.
///
/// A field counts as missing when the key is absent or the value is null;
/// deeper schema checks are owned by the individual handlers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Creates an empty payload.
    pub fn empty() -> Self {
        Self(Map::new())
    }

    /// Wraps a JSON object, rejecting non-object values.
    pub fn from_value(value: Value) -> Result<Self, GatewayError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::empty()),
            other => Err(GatewayError::invalid_payload(vec![format!(
                "payload must be an object, got {}",
                type_name(&other)
            )])),
        }
    }

    /// Checks that every named field is present and non-null.
    pub fn require_fields(&self, fields: &[&str]) -> Result<(), GatewayError> {
        let missing: Vec<String> = fields
            .iter()
            .filter(|field| self.0.get(**field).map_or(true, Value::is_null))
            .map(|field| (*field).to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(GatewayError::invalid_payload(missing))
        }
    }

    /// Raw field lookup.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String field, if present and a string.
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// String field with a fallback.
    pub fn str_or<'a>(&'a self, field: &str, default: &'a str) -> &'a str {
        self.str_field(field).unwrap_or(default)
    }

    /// Array field, if present and an array.
    pub fn array_field(&self, field: &str) -> Option<&Vec<Value>> {
        self.0.get(field).and_then(Value::as_array)
    }

    /// Inserts a field (used by probe request builders and tests).
    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.0.insert(field.into(), value);
        self
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_fields_accepts_present_fields() {
        let payload = Payload::from_value(json!({"to": "+15550100", "message": "hi"})).unwrap();
        assert!(payload.require_fields(&["to", "message"]).is_ok());
    }

    #[test]
    fn require_fields_names_every_missing_field() {
        let payload = Payload::from_value(json!({"subject": "x"})).unwrap();
        let err = payload.require_fields(&["to", "subject", "body"]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("to"));
        assert!(message.contains("body"));
        assert!(!message.contains("subject,"));
    }

    #[test]
    fn null_valued_field_counts_as_missing() {
        let payload = Payload::from_value(json!({"query": null})).unwrap();
        assert!(payload.require_fields(&["query"]).is_err());
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(Payload::from_value(json!([1, 2])).is_err());
        assert!(Payload::from_value(json!("text")).is_err());
    }

    #[test]
    fn null_payload_becomes_empty_object() {
        let payload = Payload::from_value(Value::Null).unwrap();
        assert!(payload.as_map().is_empty());
    }

    #[test]
    fn str_or_falls_back_to_default() {
        let payload = Payload::empty();
        assert_eq!(payload.str_or("voice", "alice"), "alice");

        let payload = payload.with("voice", json!("man"));
        assert_eq!(payload.str_or("voice", "alice"), "man");
    }

    #[test]
    fn action_request_deserializes_camel_case_agent_id() {
        let request: ActionRequest = serde_json::from_value(json!({
            "provider": "email",
            "agentId": "agent-7",
            "payload": {"to": "a@b.c"}
        }))
        .unwrap();

        assert_eq!(request.provider, "email");
        assert_eq!(request.agent_id, "agent-7");
        assert!(request.action.is_none());
        assert_eq!(request.payload.str_field("to"), Some("a@b.c"));
    }
}
