//! Email handler - subject tagging and the branded HTML fallback.

use serde_json::{json, Value};

use crate::domain::{correlation_id, GatewayError, Payload};
use crate::ports::{EmailClient, OutboundEmail};

/// Fixed tag prefixed to every outbound subject.
const SUBJECT_TAG: &str = "[Switchboard]";

/// Sends one email, defaulting the HTML body to the branded template
/// when the caller supplies none.
pub async fn send_email(
    client: &dyn EmailClient,
    agent_id: &str,
    payload: &Payload,
) -> Result<Value, GatewayError> {
    let to = payload.str_field("to").unwrap_or_default().to_string();
    let subject = format!(
        "{} {}",
        SUBJECT_TAG,
        payload.str_field("subject").unwrap_or_default()
    );
    let body = payload.str_field("body").unwrap_or_default().to_string();
    let html = match payload.str_field("html") {
        Some(html) => html.to_string(),
        None => branded_html(&body),
    };

    let receipt = client
        .send_email(OutboundEmail {
            to: to.clone(),
            subject: subject.clone(),
            text: body,
            html,
        })
        .await?;

    let message_id = receipt.id.unwrap_or_else(|| correlation_id("email"));
    Ok(json!({
        "agentId": agent_id,
        "to": to,
        "subject": subject,
        "messageId": message_id,
    }))
}

/// Fixed branded template wrapping a plain-text body.
fn branded_html(body: &str) -> String {
    format!(
        r#"<div style="font-family: sans-serif; max-width: 600px; margin: 0 auto;">
  <div style="background: #1a1a2e; color: #ffffff; padding: 16px 24px; border-radius: 8px 8px 0 0;">
    <h2 style="margin: 0;">Switchboard</h2>
  </div>
  <div style="padding: 24px; border: 1px solid #e0e0e0; border-top: none; border-radius: 0 0 8px 8px;">
    <p style="white-space: pre-wrap;">{}</p>
    <hr style="border: none; border-top: 1px solid #e0e0e0;">
    <p style="color: #888888; font-size: 12px;">Sent by your agent dashboard.</p>
  </div>
</div>"#,
        html_escape(body)
    )
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::providers::MockEmailClient;
    use crate::ports::EmailReceipt;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        Payload::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn subject_gets_fixed_tag_prefix() {
        let mock = MockEmailClient::new();
        let data = send_email(
            &mock,
            "agent-7",
            &payload(json!({"to": "a@b.c", "subject": "Report ready", "body": "Done."})),
        )
        .await
        .unwrap();

        let sent = mock.sent().remove(0);
        assert_eq!(sent.subject, "[Switchboard] Report ready");
        assert_eq!(data["subject"], json!("[Switchboard] Report ready"));
    }

    #[tokio::test]
    async fn html_defaults_to_branded_template() {
        let mock = MockEmailClient::new();
        send_email(
            &mock,
            "agent-7",
            &payload(json!({"to": "a@b.c", "subject": "Hi", "body": "Plain text body"})),
        )
        .await
        .unwrap();

        let sent = mock.sent().remove(0);
        assert!(sent.html.contains("Switchboard"));
        assert!(sent.html.contains("Plain text body"));
        assert_eq!(sent.text, "Plain text body");
    }

    #[tokio::test]
    async fn explicit_html_is_passed_through() {
        let mock = MockEmailClient::new();
        send_email(
            &mock,
            "agent-7",
            &payload(json!({
                "to": "a@b.c",
                "subject": "Hi",
                "body": "text",
                "html": "<b>custom</b>"
            })),
        )
        .await
        .unwrap();

        assert_eq!(mock.sent().remove(0).html, "<b>custom</b>");
    }

    #[tokio::test]
    async fn branded_template_escapes_body_markup() {
        let mock = MockEmailClient::new();
        send_email(
            &mock,
            "agent-7",
            &payload(json!({"to": "a@b.c", "subject": "Hi", "body": "<script>x</script>"})),
        )
        .await
        .unwrap();

        let sent = mock.sent().remove(0);
        assert!(sent.html.contains("&lt;script&gt;"));
        assert!(!sent.html.contains("<script>"));
    }

    #[tokio::test]
    async fn provider_message_id_is_surfaced() {
        let mock = MockEmailClient::new().with_result(EmailReceipt {
            id: Some("msg-42".to_string()),
        });
        let data = send_email(
            &mock,
            "agent-7",
            &payload(json!({"to": "a@b.c", "subject": "Hi", "body": "x"})),
        )
        .await
        .unwrap();

        assert_eq!(data["messageId"], json!("msg-42"));
    }

    #[tokio::test]
    async fn missing_message_id_falls_back_to_correlation_id() {
        let mock = MockEmailClient::new().with_result(EmailReceipt { id: None });
        let data = send_email(
            &mock,
            "agent-7",
            &payload(json!({"to": "a@b.c", "subject": "Hi", "body": "x"})),
        )
        .await
        .unwrap();

        assert!(data["messageId"].as_str().unwrap().starts_with("email_"));
    }
}
