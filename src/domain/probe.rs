//! Probe outcome classification and the capability snapshot.
//!
//! Availability is inferred from the envelope a benign probe call
//! produces. Two provider classes exist: those whose probe is expected to
//! succeed cleanly when configured, and those whose probe is expected to
//! fail validation on the placeholder payload (where only a credentials
//! error is a negative signal).

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::envelope::ActionResult;
use super::provider::Provider;
use super::timestamp::Timestamp;

/// How a provider's probe outcome maps to availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeClass {
    /// Probe should succeed outright when the provider is configured.
    CleanSuccess,
    /// Probe targets a placeholder and is expected to fail validation;
    /// any domain error other than missing credentials proves the
    /// provider's credentials work.
    ExpectedRejection,
}

impl Provider {
    /// The probe classification for this provider.
    pub fn probe_class(&self) -> ProbeClass {
        match self {
            Provider::Classroom | Provider::WebResearch | Provider::Chat => {
                ProbeClass::CleanSuccess
            }
            Provider::VoiceCall | Provider::Email => ProbeClass::ExpectedRejection,
            // Not probed; classified clean for completeness.
            Provider::Documents => ProbeClass::CleanSuccess,
        }
    }
}

/// Per-provider intermediate result of a probe call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Handler returned and reported `success: true`.
    Fulfilled,
    /// Handler returned a domain error that is positive evidence the
    /// provider's credentials are valid.
    DegradedButAvailable,
    /// Transport failure, credentials failure, or panic.
    Rejected,
}

impl ProbeOutcome {
    /// The boolean the snapshot records for this outcome.
    pub fn is_available(&self) -> bool {
        !matches!(self, ProbeOutcome::Rejected)
    }
}

/// Classifies a probe envelope for a provider class.
///
/// Known fragility, preserved as specified: the credentials check is a
/// substring match on the provider's error wording.
pub fn classify_probe(class: ProbeClass, result: &ActionResult) -> ProbeOutcome {
    if result.success {
        return ProbeOutcome::Fulfilled;
    }

    match class {
        ProbeClass::CleanSuccess => ProbeOutcome::Rejected,
        ProbeClass::ExpectedRejection => match result.error_message() {
            Some(message) if message.to_lowercase().contains("credentials") => {
                ProbeOutcome::Rejected
            }
            Some(_) => ProbeOutcome::DegradedButAvailable,
            None => ProbeOutcome::DegradedButAvailable,
        },
    }
}

/// Availability flags for every probed provider, plus when they were
/// computed. Computed lazily, cached until explicitly invalidated, and
/// always rebuilt as a whole (no partial updates).
#[derive(Debug, Clone)]
pub struct CapabilitySnapshot {
    entries: BTreeMap<Provider, bool>,
    checked_at: Timestamp,
}

impl Serialize for CapabilitySnapshot {
    /// Serializes as a flat provider-name → bool map plus `checkedAt`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for (provider, available) in &self.entries {
            map.serialize_entry(provider.as_str(), available)?;
        }
        map.serialize_entry("checkedAt", &self.checked_at)?;
        map.end()
    }
}

impl CapabilitySnapshot {
    /// Builds a snapshot from per-provider flags.
    pub fn new(entries: BTreeMap<Provider, bool>) -> Self {
        Self {
            entries,
            checked_at: Timestamp::now(),
        }
    }

    /// Availability of one provider; absent providers read as false.
    pub fn is_available(&self, provider: Provider) -> bool {
        self.entries.get(&provider).copied().unwrap_or(false)
    }

    /// True when an entry exists for the provider.
    pub fn covers(&self, provider: Provider) -> bool {
        self.entries.contains_key(&provider)
    }

    /// Number of providers covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no providers are covered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When the snapshot was computed.
    pub fn checked_at(&self) -> Timestamp {
        self.checked_at
    }

    /// Iterates provider/availability pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Provider, bool)> + '_ {
        self.entries.iter().map(|(p, a)| (*p, *a))
    }
}
