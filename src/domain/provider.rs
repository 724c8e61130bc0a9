//! Provider and action identities - the closed dispatch table.
//!
//! The provider/action space is a nested sum type so the router resolves
//! requests through exhaustive matches; only the wire request (strings)
//! needs runtime validation.

use std::fmt;

use super::error::GatewayError;

/// A named external capability routed by the gateway.
///
/// The set is fixed at compile time. `Documents` is routable but not
/// probed: it fronts the internal blob/metadata store rather than a
/// credentialed third-party API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Provider {
    Classroom,
    VoiceCall,
    Email,
    WebResearch,
    Chat,
    Documents,
}

impl Provider {
    /// Providers covered by the capability prober.
    pub const PROBEABLE: [Provider; 5] = [
        Provider::Classroom,
        Provider::VoiceCall,
        Provider::Email,
        Provider::WebResearch,
        Provider::Chat,
    ];

    /// Wire name of the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Classroom => "classroom",
            Provider::VoiceCall => "voice-call",
            Provider::Email => "email",
            Provider::WebResearch => "web-research",
            Provider::Chat => "chat",
            Provider::Documents => "documents",
        }
    }

    /// Resolves a wire name, failing with `UnknownProvider` otherwise.
    pub fn parse(name: &str) -> Result<Self, GatewayError> {
        match name {
            "classroom" => Ok(Provider::Classroom),
            "voice-call" => Ok(Provider::VoiceCall),
            "email" => Ok(Provider::Email),
            "web-research" => Ok(Provider::WebResearch),
            "chat" => Ok(Provider::Chat),
            "documents" => Ok(Provider::Documents),
            other => Err(GatewayError::unknown_provider(other)),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classroom sub-actions, each a distinct endpoint/verb on the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassroomAction {
    CreateCourse,
    PostAnnouncement,
    CreateAssignment,
    GetCourses,
    GetStudents,
}

impl ClassroomAction {
    /// Wire name of the sub-action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassroomAction::CreateCourse => "createCourse",
            ClassroomAction::PostAnnouncement => "postAnnouncement",
            ClassroomAction::CreateAssignment => "createAssignment",
            ClassroomAction::GetCourses => "getCourses",
            ClassroomAction::GetStudents => "getStudents",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "createCourse" => Some(ClassroomAction::CreateCourse),
            "postAnnouncement" => Some(ClassroomAction::PostAnnouncement),
            "createAssignment" => Some(ClassroomAction::CreateAssignment),
            "getCourses" => Some(ClassroomAction::GetCourses),
            "getStudents" => Some(ClassroomAction::GetStudents),
            _ => None,
        }
    }
}

/// A fully resolved provider action.
///
/// Single-operation providers accept an omitted action name or their
/// canonical one; anything else is `UnknownAction` before any network
/// call is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderAction {
    Classroom(ClassroomAction),
    PlaceCall,
    SendEmail,
    Research,
    ChatCompletion,
    AnalyzeDocument,
}

impl ProviderAction {
    /// Resolves a `(provider, action)` pair from the wire.
    pub fn resolve(provider: Provider, action: Option<&str>) -> Result<Self, GatewayError> {
        let unknown = |name: &str| GatewayError::unknown_action(provider, name);

        match provider {
            Provider::Classroom => {
                let name = action.ok_or_else(|| unknown("<missing>"))?;
                ClassroomAction::parse(name)
                    .map(ProviderAction::Classroom)
                    .ok_or_else(|| unknown(name))
            }
            Provider::VoiceCall => match action {
                None | Some("placeCall") => Ok(ProviderAction::PlaceCall),
                Some(other) => Err(unknown(other)),
            },
            Provider::Email => match action {
                None | Some("sendEmail") => Ok(ProviderAction::SendEmail),
                Some(other) => Err(unknown(other)),
            },
            Provider::WebResearch => match action {
                None | Some("search") => Ok(ProviderAction::Research),
                Some(other) => Err(unknown(other)),
            },
            Provider::Chat => match action {
                None | Some("chat") => Ok(ProviderAction::ChatCompletion),
                Some(other) => Err(unknown(other)),
            },
            Provider::Documents => match action {
                None | Some("analyzeDocument") => Ok(ProviderAction::AnalyzeDocument),
                Some(other) => Err(unknown(other)),
            },
        }
    }

    /// The provider this action is scoped to.
    pub fn provider(&self) -> Provider {
        match self {
            ProviderAction::Classroom(_) => Provider::Classroom,
            ProviderAction::PlaceCall => Provider::VoiceCall,
            ProviderAction::SendEmail => Provider::Email,
            ProviderAction::Research => Provider::WebResearch,
            ProviderAction::ChatCompletion => Provider::Chat,
            ProviderAction::AnalyzeDocument => Provider::Documents,
        }
    }

    /// Required payload fields, checked for presence before dispatch.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            ProviderAction::Classroom(ClassroomAction::CreateCourse) => &["name"],
            ProviderAction::Classroom(ClassroomAction::PostAnnouncement) => &["courseId", "text"],
            ProviderAction::Classroom(ClassroomAction::CreateAssignment) => &["courseId", "title"],
            ProviderAction::Classroom(ClassroomAction::GetCourses) => &[],
            ProviderAction::Classroom(ClassroomAction::GetStudents) => &["courseId"],
            ProviderAction::PlaceCall => &["to", "message"],
            ProviderAction::SendEmail => &["to", "subject", "body"],
            ProviderAction::Research => &["query"],
            ProviderAction::ChatCompletion => &["message"],
            ProviderAction::AnalyzeDocument => &["documentId"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parse_roundtrips_wire_names() {
        for provider in [
            Provider::Classroom,
            Provider::VoiceCall,
            Provider::Email,
            Provider::WebResearch,
            Provider::Chat,
            Provider::Documents,
        ] {
            assert_eq!(Provider::parse(provider.as_str()).unwrap(), provider);
        }
    }

    #[test]
    fn provider_parse_rejects_unknown_name() {
        let err = Provider::parse("telegram").unwrap_err();
        assert!(err.to_string().contains("telegram"));
    }

    #[test]
    fn classroom_actions_resolve_by_name() {
        let action = ProviderAction::resolve(Provider::Classroom, Some("getCourses")).unwrap();
        assert_eq!(action, ProviderAction::Classroom(ClassroomAction::GetCourses));
    }

    #[test]
    fn classroom_unknown_sub_action_is_rejected() {
        let err = ProviderAction::resolve(Provider::Classroom, Some("bogus")).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn classroom_requires_an_action_name() {
        assert!(ProviderAction::resolve(Provider::Classroom, None).is_err());
    }

    #[test]
    fn single_operation_providers_accept_omitted_action() {
        assert_eq!(
            ProviderAction::resolve(Provider::VoiceCall, None).unwrap(),
            ProviderAction::PlaceCall
        );
        assert_eq!(
            ProviderAction::resolve(Provider::Email, Some("sendEmail")).unwrap(),
            ProviderAction::SendEmail
        );
        assert_eq!(
            ProviderAction::resolve(Provider::Chat, None).unwrap(),
            ProviderAction::ChatCompletion
        );
    }

    #[test]
    fn single_operation_providers_reject_foreign_action() {
        assert!(ProviderAction::resolve(Provider::Email, Some("placeCall")).is_err());
    }

    #[test]
    fn required_fields_match_action_contracts() {
        assert_eq!(
            ProviderAction::Classroom(ClassroomAction::PostAnnouncement).required_fields(),
            &["courseId", "text"]
        );
        assert_eq!(ProviderAction::PlaceCall.required_fields(), &["to", "message"]);
        assert!(ProviderAction::Classroom(ClassroomAction::GetCourses)
            .required_fields()
            .is_empty());
    }

    #[test]
    fn action_knows_its_provider() {
        assert_eq!(ProviderAction::Research.provider(), Provider::WebResearch);
        assert_eq!(
            ProviderAction::Classroom(ClassroomAction::CreateCourse).provider(),
            Provider::Classroom
        );
    }
}
