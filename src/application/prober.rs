//! Capability prober - concurrent benign probes with a memoized
//! snapshot.
//!
//! Probes reuse the action router (and with it the real provider
//! handlers) under a reserved synthetic agent id, so configuration
//! health is inferred without a separate health-check protocol.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::join_all;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::{
    classify_probe, ActionRequest, CapabilitySnapshot, Payload, Provider,
};

use super::router::ActionRouter;

/// Reserved agent id used for all probe traffic.
pub const PROBE_AGENT_ID: &str = "config-check";

/// Owns the capability cache and the probing fan-out.
///
/// The snapshot is computed lazily on first query and lives until
/// [`CapabilityProber::invalidate`] is called; invalidation always
/// triggers a full re-probe of every probed provider on the next query.
pub struct CapabilityProber {
    router: Arc<ActionRouter>,
    cache: RwLock<Option<CapabilitySnapshot>>,
}

impl CapabilityProber {
    /// Creates a prober with an empty cache.
    pub fn new(router: Arc<ActionRouter>) -> Self {
        Self {
            router,
            cache: RwLock::new(None),
        }
    }

    /// Returns the cached snapshot without probing.
    pub async fn get_cached(&self) -> Option<CapabilitySnapshot> {
        self.cache.read().await.clone()
    }

    /// Clears the cached snapshot unconditionally.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
        tracing::info!("Capability snapshot invalidated");
    }

    /// Returns the snapshot, probing every provider if none is cached.
    ///
    /// Probes run concurrently and settle independently: a probe that
    /// fails or panics degrades only its own entry, never the batch. The
    /// call blocks until every probe has settled, then writes the cache
    /// exactly once.
    pub async fn check_all(&self) -> CapabilitySnapshot {
        if let Some(snapshot) = self.cache.read().await.clone() {
            return snapshot;
        }

        let mut providers = Vec::with_capacity(Provider::PROBEABLE.len());
        let mut probes = Vec::with_capacity(Provider::PROBEABLE.len());
        for provider in Provider::PROBEABLE {
            let router = self.router.clone();
            providers.push(provider);
            probes.push(tokio::spawn(async move {
                router.dispatch(probe_request(provider)).await
            }));
        }

        let settled = join_all(probes).await;

        let mut entries = BTreeMap::new();
        for (provider, result) in providers.into_iter().zip(settled) {
            let available = match result {
                Ok(envelope) => {
                    let outcome = classify_probe(provider.probe_class(), &envelope);
                    if !outcome.is_available() {
                        tracing::warn!(
                            provider = %provider,
                            error = envelope.error_message().unwrap_or("<none>"),
                            "Probe classified provider unavailable"
                        );
                    }
                    outcome.is_available()
                }
                Err(join_error) => {
                    tracing::warn!(
                        provider = %provider,
                        error = %join_error,
                        "Probe task failed"
                    );
                    false
                }
            };
            entries.insert(provider, available);
        }

        let snapshot = CapabilitySnapshot::new(entries);
        *self.cache.write().await = Some(snapshot.clone());
        snapshot
    }
}

/// Builds the benign probe request for a provider.
fn probe_request(provider: Provider) -> ActionRequest {
    let (action, payload) = match provider {
        Provider::Classroom => (Some("getCourses"), Payload::empty()),
        Provider::VoiceCall => (
            None,
            Payload::empty()
                .with("to", json!("+15005550001"))
                .with("message", json!("This is a configuration check."))
                .with("purpose", json!("a configuration check")),
        ),
        Provider::Email => (
            None,
            Payload::empty()
                .with("to", json!("probe@switchboard.invalid"))
                .with("subject", json!("Configuration check"))
                .with("body", json!("Verifying email delivery configuration.")),
        ),
        Provider::WebResearch => (
            None,
            Payload::empty()
                .with("query", json!("connectivity check"))
                .with("searchType", json!("general")),
        ),
        Provider::Chat => (
            None,
            Payload::empty().with("message", json!("Reply with the single word OK.")),
        ),
        Provider::Documents => unreachable!("documents capability is not probed"),
    };

    ActionRequest::new(provider.as_str(), action, PROBE_AGENT_ID, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::documents::InMemoryDocumentStore;
    use crate::adapters::providers::{
        MockChatClient, MockClassroomClient, MockEmailClient, MockResearchClient, MockVoiceClient,
    };
    use crate::domain::GatewayError;

    struct Mocks {
        classroom: MockClassroomClient,
        voice: MockVoiceClient,
        email: MockEmailClient,
        research: MockResearchClient,
        chat: MockChatClient,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                classroom: MockClassroomClient::new(),
                voice: MockVoiceClient::new(),
                email: MockEmailClient::new(),
                research: MockResearchClient::new(),
                chat: MockChatClient::new(),
            }
        }

        fn prober(&self) -> CapabilityProber {
            let router = ActionRouter::new(
                Arc::new(self.classroom.clone()),
                Arc::new(self.voice.clone()),
                Arc::new(self.email.clone()),
                Arc::new(self.research.clone()),
                Arc::new(self.chat.clone()),
                Arc::new(InMemoryDocumentStore::new()),
            );
            CapabilityProber::new(Arc::new(router))
        }
    }

    #[tokio::test]
    async fn check_all_covers_every_probed_provider() {
        let mocks = Mocks::new();
        let snapshot = mocks.prober().check_all().await;

        assert_eq!(snapshot.len(), Provider::PROBEABLE.len());
        for provider in Provider::PROBEABLE {
            assert!(snapshot.covers(provider), "missing entry for {}", provider);
        }
        assert!(!snapshot.covers(Provider::Documents));
    }

    #[tokio::test]
    async fn healthy_mocks_probe_available() {
        let mocks = Mocks::new();
        let snapshot = mocks.prober().check_all().await;

        for provider in Provider::PROBEABLE {
            assert!(snapshot.is_available(provider), "{} should be available", provider);
        }
    }

    #[tokio::test]
    async fn validation_style_error_keeps_voice_available() {
        let mocks = Mocks::new();
        let prober = {
            let router = ActionRouter::new(
                Arc::new(mocks.classroom.clone()),
                Arc::new(
                    MockVoiceClient::new()
                        .with_error(GatewayError::transport_status(400, "Twilio", "Invalid phone number")),
                ),
                Arc::new(mocks.email.clone()),
                Arc::new(mocks.research.clone()),
                Arc::new(mocks.chat.clone()),
                Arc::new(InMemoryDocumentStore::new()),
            );
            CapabilityProber::new(Arc::new(router))
        };

        let snapshot = prober.check_all().await;
        assert!(snapshot.is_available(Provider::VoiceCall));
    }

    #[tokio::test]
    async fn credentials_error_marks_voice_unavailable() {
        let mocks = Mocks::new();
        let prober = {
            let router = ActionRouter::new(
                Arc::new(mocks.classroom.clone()),
                Arc::new(
                    MockVoiceClient::new()
                        .with_error(GatewayError::credentials_missing("Twilio")),
                ),
                Arc::new(mocks.email.clone()),
                Arc::new(mocks.research.clone()),
                Arc::new(mocks.chat.clone()),
                Arc::new(InMemoryDocumentStore::new()),
            );
            CapabilityProber::new(Arc::new(router))
        };

        let snapshot = prober.check_all().await;
        assert!(!snapshot.is_available(Provider::VoiceCall));
        assert!(snapshot.is_available(Provider::Email));
    }

    #[tokio::test]
    async fn clean_class_error_marks_chat_unavailable() {
        let mocks = Mocks::new();
        let prober = {
            let router = ActionRouter::new(
                Arc::new(mocks.classroom.clone()),
                Arc::new(mocks.voice.clone()),
                Arc::new(mocks.email.clone()),
                Arc::new(mocks.research.clone()),
                Arc::new(
                    MockChatClient::new()
                        .with_error(GatewayError::transport_status(500, "OpenAI", "server error")),
                ),
                Arc::new(InMemoryDocumentStore::new()),
            );
            CapabilityProber::new(Arc::new(router))
        };

        let snapshot = prober.check_all().await;
        assert!(!snapshot.is_available(Provider::Chat));
    }

    #[tokio::test]
    async fn panicking_probe_degrades_only_its_own_entry() {
        let mocks = Mocks::new();
        let prober = {
            let router = ActionRouter::new(
                Arc::new(mocks.classroom.clone()),
                Arc::new(mocks.voice.clone()),
                Arc::new(mocks.email.clone()),
                Arc::new(mocks.research.clone()),
                Arc::new(MockChatClient::new().with_panic()),
                Arc::new(InMemoryDocumentStore::new()),
            );
            CapabilityProber::new(Arc::new(router))
        };

        let snapshot = prober.check_all().await;
        assert!(!snapshot.is_available(Provider::Chat));
        for provider in [
            Provider::Classroom,
            Provider::VoiceCall,
            Provider::Email,
            Provider::WebResearch,
        ] {
            assert!(snapshot.is_available(provider), "{} should survive", provider);
        }
    }

    #[tokio::test]
    async fn snapshot_is_cached_until_invalidated() {
        let mocks = Mocks::new();
        let prober = mocks.prober();

        assert!(prober.get_cached().await.is_none());

        prober.check_all().await;
        assert_eq!(mocks.chat.call_count(), 1);
        assert_eq!(mocks.classroom.call_count(), 1);

        // Cached: no re-probe.
        prober.check_all().await;
        assert_eq!(mocks.chat.call_count(), 1);
        assert!(prober.get_cached().await.is_some());

        // Invalidate: next query re-probes every provider exactly once.
        prober.invalidate().await;
        assert!(prober.get_cached().await.is_none());
        prober.check_all().await;
        assert_eq!(mocks.chat.call_count(), 2);
        assert_eq!(mocks.classroom.call_count(), 2);
        assert_eq!(mocks.voice.call_count(), 2);
        assert_eq!(mocks.email.call_count(), 2);
        assert_eq!(mocks.research.call_count(), 2);
    }

    #[tokio::test]
    async fn probe_uses_reserved_agent_id_and_benign_actions() {
        let mocks = Mocks::new();
        mocks.prober().check_all().await;

        assert_eq!(mocks.classroom.calls(), vec!["getCourses"]);
        let email = mocks.email.sent().remove(0);
        assert_eq!(email.to, "probe@switchboard.invalid");

        let voice = mocks.voice.requests().remove(0);
        assert_eq!(voice.to, "+15005550001");
        assert!(voice.twiml.contains(PROBE_AGENT_ID));
    }
}
