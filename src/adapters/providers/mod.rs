//! Provider client adapters - one REST client per port, plus mocks.

mod chat;
mod classroom;
mod email;
mod mock;
mod research;
mod voice;

pub use chat::RestChatClient;
pub use classroom::RestClassroomClient;
pub use email::RestEmailClient;
pub use mock::{
    MockChatClient, MockClassroomClient, MockEmailClient, MockResearchClient, MockVoiceClient,
};
pub use research::RestResearchClient;
pub use voice::RestVoiceClient;
