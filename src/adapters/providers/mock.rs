//! Mock provider clients for testing.
//!
//! Configurable implementations of every provider port, allowing router
//! and prober tests to run without calling real APIs.
//!
//! # Features
//!
//! - Pre-configured responses (consumed in order, with a sensible default)
//! - Error injection for resilience testing
//! - Call tracking for verification
//! - Optional panic-on-call for probe isolation testing

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::GatewayError;
use crate::ports::{
    AnnouncementRecord, AssignmentRecord, CallRecord, ChatCall, ChatClient, ChatReply,
    ClassroomClient, CourseRecord, CreateAssignmentRequest, CreateCourseRequest, EmailClient,
    EmailReceipt, OutboundEmail, PlaceCallRequest, PostAnnouncementRequest, ResearchCall,
    ResearchClient, ResearchFindings, StudentRecord, VoiceClient,
};

type Script<T> = Arc<Mutex<VecDeque<Result<T, GatewayError>>>>;

fn next_or<T: Clone>(script: &Script<T>, fallback: T) -> Result<T, GatewayError> {
    script
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or(Ok(fallback))
}

// ----- Classroom -----

/// Mock classroom client.
#[derive(Clone, Default)]
pub struct MockClassroomClient {
    courses: Arc<Mutex<Vec<CourseRecord>>>,
    students: Arc<Mutex<Vec<StudentRecord>>>,
    fail_with: Arc<Mutex<Option<GatewayError>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockClassroomClient {
    /// Creates a mock with no courses or students.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds courses returned by `list_courses`.
    pub fn with_courses(self, courses: Vec<CourseRecord>) -> Self {
        *self.courses.lock().unwrap() = courses;
        self
    }

    /// Seeds students returned by `list_students`.
    pub fn with_students(self, students: Vec<StudentRecord>) -> Self {
        *self.students.lock().unwrap() = students;
        self
    }

    /// Makes every call fail with the given error.
    pub fn with_error(self, error: GatewayError) -> Self {
        *self.fail_with.lock().unwrap() = Some(error);
        self
    }

    /// Names of operations invoked so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Total number of operations invoked.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, name: &str) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(name.to_string());
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ClassroomClient for MockClassroomClient {
    async fn create_course(
        &self,
        request: CreateCourseRequest,
    ) -> Result<CourseRecord, GatewayError> {
        self.record("createCourse")?;
        Ok(CourseRecord {
            id: "course-mock-1".to_string(),
            name: request.name,
            section: request.section,
            state: Some("ACTIVE".to_string()),
            link: None,
        })
    }

    async fn post_announcement(
        &self,
        request: PostAnnouncementRequest,
    ) -> Result<AnnouncementRecord, GatewayError> {
        self.record("postAnnouncement")?;
        Ok(AnnouncementRecord {
            id: "announcement-mock-1".to_string(),
            course_id: request.course_id,
        })
    }

    async fn create_assignment(
        &self,
        request: CreateAssignmentRequest,
    ) -> Result<AssignmentRecord, GatewayError> {
        self.record("createAssignment")?;
        Ok(AssignmentRecord {
            id: "assignment-mock-1".to_string(),
            course_id: request.course_id,
            title: request.title,
        })
    }

    async fn list_courses(&self) -> Result<Vec<CourseRecord>, GatewayError> {
        self.record("getCourses")?;
        Ok(self.courses.lock().unwrap().clone())
    }

    async fn list_students(&self, _course_id: &str) -> Result<Vec<StudentRecord>, GatewayError> {
        self.record("getStudents")?;
        Ok(self.students.lock().unwrap().clone())
    }
}

// ----- Voice -----

/// Mock voice client.
#[derive(Clone, Default)]
pub struct MockVoiceClient {
    script: Script<CallRecord>,
    requests: Arc<Mutex<Vec<PlaceCallRequest>>>,
    panic_on_call: Arc<Mutex<bool>>,
}

impl MockVoiceClient {
    /// Creates a mock that answers every call with a queued SID.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful call record.
    pub fn with_result(self, record: CallRecord) -> Self {
        self.script.lock().unwrap().push_back(Ok(record));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GatewayError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Makes every call panic (probe isolation testing).
    pub fn with_panic(self) -> Self {
        *self.panic_on_call.lock().unwrap() = true;
        self
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<PlaceCallRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of calls placed.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl VoiceClient for MockVoiceClient {
    async fn place_call(&self, request: PlaceCallRequest) -> Result<CallRecord, GatewayError> {
        if *self.panic_on_call.lock().unwrap() {
            panic!("MockVoiceClient configured to panic");
        }
        self.requests.lock().unwrap().push(request);
        next_or(
            &self.script,
            CallRecord {
                sid: Some("CAmock0001".to_string()),
                status: Some("queued".to_string()),
            },
        )
    }
}

// ----- Email -----

/// Mock email client.
#[derive(Clone, Default)]
pub struct MockEmailClient {
    script: Script<EmailReceipt>,
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl MockEmailClient {
    /// Creates a mock that accepts every email.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a receipt.
    pub fn with_result(self, receipt: EmailReceipt) -> Self {
        self.script.lock().unwrap().push_back(Ok(receipt));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GatewayError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Emails received so far.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of emails sent.
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(&self, email: OutboundEmail) -> Result<EmailReceipt, GatewayError> {
        self.sent.lock().unwrap().push(email);
        next_or(
            &self.script,
            EmailReceipt {
                id: Some("email-mock-1".to_string()),
            },
        )
    }
}

// ----- Research -----

/// Mock research client.
#[derive(Clone, Default)]
pub struct MockResearchClient {
    script: Script<ResearchFindings>,
    queries: Arc<Mutex<Vec<ResearchCall>>>,
}

impl MockResearchClient {
    /// Creates a mock that returns empty findings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues findings.
    pub fn with_findings(self, findings: ResearchFindings) -> Self {
        self.script.lock().unwrap().push_back(Ok(findings));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GatewayError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Calls received so far.
    pub fn queries(&self) -> Vec<ResearchCall> {
        self.queries.lock().unwrap().clone()
    }

    /// Number of queries run.
    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl ResearchClient for MockResearchClient {
    async fn search(&self, call: ResearchCall) -> Result<ResearchFindings, GatewayError> {
        self.queries.lock().unwrap().push(call);
        next_or(&self.script, ResearchFindings::default())
    }
}

// ----- Chat -----

/// Mock chat client.
#[derive(Clone, Default)]
pub struct MockChatClient {
    script: Script<ChatReply>,
    calls: Arc<Mutex<Vec<ChatCall>>>,
    panic_on_call: Arc<Mutex<bool>>,
}

impl MockChatClient {
    /// Creates a mock that replies "OK".
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply.
    pub fn with_reply(self, content: impl Into<String>) -> Self {
        self.script.lock().unwrap().push_back(Ok(ChatReply {
            content: content.into(),
            model: "mock-model".to_string(),
        }));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GatewayError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Makes every call panic (probe isolation testing).
    pub fn with_panic(self) -> Self {
        *self.panic_on_call.lock().unwrap() = true;
        self
    }

    /// Calls received so far.
    pub fn calls(&self) -> Vec<ChatCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of completion calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, call: ChatCall) -> Result<ChatReply, GatewayError> {
        if *self.panic_on_call.lock().unwrap() {
            panic!("MockChatClient configured to panic");
        }
        self.calls.lock().unwrap().push(call);
        next_or(
            &self.script,
            ChatReply {
                content: "OK".to_string(),
                model: "mock-model".to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_voice_returns_queued_then_default() {
        let mock = MockVoiceClient::new().with_error(GatewayError::transport("boom"));

        let request = PlaceCallRequest {
            to: "+15550100".to_string(),
            twiml: "<Response/>".to_string(),
        };

        assert!(mock.place_call(request.clone()).await.is_err());
        let record = mock.place_call(request).await.unwrap();
        assert_eq!(record.sid.as_deref(), Some("CAmock0001"));
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn mock_classroom_records_operation_names() {
        let mock = MockClassroomClient::new();
        mock.list_courses().await.unwrap();
        mock.list_students("c-1").await.unwrap();

        assert_eq!(mock.calls(), vec!["getCourses", "getStudents"]);
    }

    #[tokio::test]
    async fn mock_classroom_error_applies_to_all_operations() {
        let mock =
            MockClassroomClient::new().with_error(GatewayError::credentials_missing("Google"));
        assert!(mock.list_courses().await.is_err());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_chat_tracks_calls() {
        let mock = MockChatClient::new().with_reply("Hello!");
        let reply = mock
            .complete(ChatCall {
                system_prompt: "persona".to_string(),
                turns: vec![],
                temperature: 0.7,
                presence_penalty: 0.6,
            })
            .await
            .unwrap();

        assert_eq!(reply.content, "Hello!");
        assert_eq!(mock.call_count(), 1);
    }
}
