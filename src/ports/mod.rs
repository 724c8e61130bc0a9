//! Ports - trait boundaries between the gateway and its collaborators.
//!
//! Each provider's REST API is treated as a black box behind a client
//! trait: given shaped input, return a provider response or fail with a
//! `GatewayError`. Adapters implement these against the real services;
//! mocks implement them for tests.

mod chat;
mod classroom;
mod document_store;
mod email;
mod research;
mod voice;

pub use chat::{ChatCall, ChatClient, ChatReply, ChatTurn, TurnRole};
pub use classroom::{
    AnnouncementRecord, AssignmentRecord, ClassroomClient, CourseRecord, CreateAssignmentRequest,
    CreateCourseRequest, PostAnnouncementRequest, StudentRecord,
};
pub use document_store::{DocumentRecord, DocumentStore, DocumentUpdate};
pub use email::{EmailClient, EmailReceipt, OutboundEmail};
pub use research::{ResearchCall, ResearchClient, ResearchFindings};
pub use voice::{CallRecord, PlaceCallRequest, VoiceClient};
