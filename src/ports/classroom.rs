//! Classroom provider port.
//!
//! Five operations, each a distinct endpoint/verb on the provider's REST
//! API. Course/announcement/assignment records are the normalized subset
//! of the provider's response the gateway actually surfaces.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::GatewayError;

/// Port for the classroom management provider.
#[async_trait]
pub trait ClassroomClient: Send + Sync {
    /// Creates a course.
    async fn create_course(&self, request: CreateCourseRequest) -> Result<CourseRecord, GatewayError>;

    /// Posts an announcement to a course.
    async fn post_announcement(
        &self,
        request: PostAnnouncementRequest,
    ) -> Result<AnnouncementRecord, GatewayError>;

    /// Creates an assignment in a course.
    async fn create_assignment(
        &self,
        request: CreateAssignmentRequest,
    ) -> Result<AssignmentRecord, GatewayError>;

    /// Lists active courses.
    async fn list_courses(&self) -> Result<Vec<CourseRecord>, GatewayError>;

    /// Lists students enrolled in a course.
    async fn list_students(&self, course_id: &str) -> Result<Vec<StudentRecord>, GatewayError>;
}

/// Input for course creation.
#[derive(Debug, Clone)]
pub struct CreateCourseRequest {
    pub name: String,
    pub section: Option<String>,
    pub description: Option<String>,
}

/// Input for posting an announcement.
#[derive(Debug, Clone)]
pub struct PostAnnouncementRequest {
    pub course_id: String,
    pub text: String,
}

/// Input for assignment creation.
#[derive(Debug, Clone)]
pub struct CreateAssignmentRequest {
    pub course_id: String,
    pub title: String,
    pub description: Option<String>,
    pub max_points: Option<u32>,
}

/// Normalized course record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Normalized announcement record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementRecord {
    pub id: String,
    pub course_id: String,
}

/// Normalized assignment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub id: String,
    pub course_id: String,
    pub title: String,
}

/// Normalized student record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
