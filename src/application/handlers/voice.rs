//! Voice call handler - builds the spoken script and TwiML document.

use serde_json::{json, Value};

use crate::domain::{correlation_id, GatewayError, Payload};
use crate::ports::{PlaceCallRequest, VoiceClient};

/// TTS voice preset used when the caller does not pick one.
const DEFAULT_VOICE: &str = "alice";

/// Places an outbound call speaking a fixed script template.
pub async fn place_call(
    client: &dyn VoiceClient,
    agent_id: &str,
    payload: &Payload,
) -> Result<Value, GatewayError> {
    let to = payload.str_field("to").unwrap_or_default().to_string();
    let message = payload.str_field("message").unwrap_or_default();
    let purpose = payload.str_or("purpose", "an update from your agent");
    let voice = payload.str_or("voice", DEFAULT_VOICE);

    let script = build_call_script(agent_id, purpose, message);
    let twiml = build_twiml(voice, &script);

    let record = client.place_call(PlaceCallRequest { to: to.clone(), twiml }).await?;

    let call_sid = record.sid.unwrap_or_else(|| correlation_id("call"));
    Ok(json!({
        "agentId": agent_id,
        "to": to,
        "purpose": purpose,
        "callSid": call_sid,
        "status": record.status.unwrap_or_else(|| "queued".to_string()),
    }))
}

/// Fixed spoken-script template embedding agent identity, purpose, and
/// message.
fn build_call_script(agent_id: &str, purpose: &str, message: &str) -> String {
    format!(
        "Hello! This is agent {} calling from your agent dashboard regarding {}. {} \
         Thank you, and have a great day. Goodbye!",
        agent_id, purpose, message
    )
}

/// Wraps the script in a TwiML `<Say>` document.
fn build_twiml(voice: &str, script: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><Response><Say voice="{}">{}</Say></Response>"#,
        xml_escape(voice),
        xml_escape(script)
    )
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::providers::MockVoiceClient;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        Payload::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn builds_script_with_agent_purpose_and_message() {
        let mock = MockVoiceClient::new();
        place_call(
            &mock,
            "agent-7",
            &payload(json!({
                "to": "+15550100",
                "message": "Your report is ready.",
                "purpose": "your weekly report"
            })),
        )
        .await
        .unwrap();

        let request = mock.requests().remove(0);
        assert_eq!(request.to, "+15550100");
        assert!(request.twiml.contains("agent agent-7"));
        assert!(request.twiml.contains("your weekly report"));
        assert!(request.twiml.contains("Your report is ready."));
    }

    #[tokio::test]
    async fn voice_defaults_to_preset_when_absent() {
        let mock = MockVoiceClient::new();
        place_call(
            &mock,
            "agent-7",
            &payload(json!({"to": "+15550100", "message": "Hi."})),
        )
        .await
        .unwrap();

        let request = mock.requests().remove(0);
        assert!(request.twiml.contains(r#"voice="alice""#));
    }

    #[tokio::test]
    async fn explicit_voice_is_used() {
        let mock = MockVoiceClient::new();
        place_call(
            &mock,
            "agent-7",
            &payload(json!({"to": "+15550100", "message": "Hi.", "voice": "man"})),
        )
        .await
        .unwrap();

        assert!(mock.requests().remove(0).twiml.contains(r#"voice="man""#));
    }

    #[tokio::test]
    async fn provider_sid_is_surfaced() {
        let mock = MockVoiceClient::new();
        let data = place_call(
            &mock,
            "agent-7",
            &payload(json!({"to": "+15550100", "message": "Hi."})),
        )
        .await
        .unwrap();

        assert_eq!(data["callSid"], json!("CAmock0001"));
        assert_eq!(data["agentId"], json!("agent-7"));
    }

    #[tokio::test]
    async fn missing_sid_falls_back_to_correlation_id() {
        let mock = MockVoiceClient::new().with_result(crate::ports::CallRecord {
            sid: None,
            status: None,
        });
        let data = place_call(
            &mock,
            "agent-7",
            &payload(json!({"to": "+15550100", "message": "Hi."})),
        )
        .await
        .unwrap();

        let sid = data["callSid"].as_str().unwrap();
        assert!(sid.starts_with("call_"));
        assert_eq!(data["status"], json!("queued"));
    }

    #[test]
    fn twiml_escapes_markup_in_script() {
        let twiml = build_twiml("alice", "Watch out for <tags> & \"quotes\"");
        assert!(twiml.contains("&lt;tags&gt;"));
        assert!(twiml.contains("&amp;"));
        assert!(!twiml.contains("<tags>"));
    }
}
