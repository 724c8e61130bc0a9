//! Action router - validates requests and dispatches them to the
//! provider handlers with a uniform envelope contract.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{ActionRequest, ActionResult, GatewayError, Provider, ProviderAction};
use crate::ports::{
    ChatClient, ClassroomClient, DocumentStore, EmailClient, ResearchClient, VoiceClient,
};

use super::handlers;

/// Routes typed provider actions to their handlers.
///
/// Per request the lifecycle is received → validated → dispatched →
/// {succeeded | failed}, terminal in one hop: validation fully completes
/// before any network call starts, and no retries happen here.
pub struct ActionRouter {
    classroom: Arc<dyn ClassroomClient>,
    voice: Arc<dyn VoiceClient>,
    email: Arc<dyn EmailClient>,
    research: Arc<dyn ResearchClient>,
    chat: Arc<dyn ChatClient>,
    documents: Arc<dyn DocumentStore>,
}

impl ActionRouter {
    /// Creates a router over the six capability clients.
    pub fn new(
        classroom: Arc<dyn ClassroomClient>,
        voice: Arc<dyn VoiceClient>,
        email: Arc<dyn EmailClient>,
        research: Arc<dyn ResearchClient>,
        chat: Arc<dyn ChatClient>,
        documents: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            classroom,
            voice,
            email,
            research,
            chat,
            documents,
        }
    }

    /// Dispatches a request, always producing exactly one envelope.
    pub async fn dispatch(&self, request: ActionRequest) -> ActionResult {
        self.execute(&request).await.into()
    }

    /// Dispatches a request, keeping the typed error for callers that
    /// map failures onto HTTP status codes.
    pub async fn execute(&self, request: &ActionRequest) -> Result<Value, GatewayError> {
        let request_id = uuid::Uuid::new_v4().to_string();

        let provider = Provider::parse(&request.provider)?;
        let action = ProviderAction::resolve(provider, request.action.as_deref())?;
        request.payload.require_fields(action.required_fields())?;

        tracing::info!(
            request_id = %request_id,
            provider = %provider,
            action = ?action,
            agent_id = %request.agent_id,
            "Dispatching action"
        );

        let agent_id = request.agent_id.as_str();
        let payload = &request.payload;

        let outcome = match action {
            ProviderAction::Classroom(sub_action) => {
                handlers::classroom::handle(self.classroom.as_ref(), sub_action, agent_id, payload)
                    .await
            }
            ProviderAction::PlaceCall => {
                handlers::voice::place_call(self.voice.as_ref(), agent_id, payload).await
            }
            ProviderAction::SendEmail => {
                handlers::email::send_email(self.email.as_ref(), agent_id, payload).await
            }
            ProviderAction::Research => {
                handlers::research::research(self.research.as_ref(), agent_id, payload).await
            }
            ProviderAction::ChatCompletion => {
                handlers::chat::chat(self.chat.as_ref(), agent_id, payload).await
            }
            ProviderAction::AnalyzeDocument => {
                handlers::documents::analyze_document(self.documents.as_ref(), agent_id, payload)
                    .await
            }
        };

        match &outcome {
            Ok(_) => {
                tracing::info!(request_id = %request_id, provider = %provider, "Action succeeded")
            }
            Err(err) => {
                tracing::warn!(
                    request_id = %request_id,
                    provider = %provider,
                    error = %err,
                    "Action failed"
                )
            }
        }

        outcome
    }
}
