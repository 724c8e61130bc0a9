//! Classroom provider adapter - REST client for a Google-Classroom-style
//! API.
//!
//! Each port operation maps to a distinct endpoint/verb. All requests
//! carry a bearer token; a missing token fails before any network call
//! with a credentials error.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ClassroomConfig;
use crate::domain::GatewayError;
use crate::ports::{
    AnnouncementRecord, AssignmentRecord, ClassroomClient, CourseRecord, CreateAssignmentRequest,
    CreateCourseRequest, PostAnnouncementRequest, StudentRecord,
};

const VENDOR: &str = "Google Classroom";

/// REST adapter for the classroom provider.
pub struct RestClassroomClient {
    access_token: Option<SecretString>,
    base_url: String,
    client: Client,
}

impl RestClassroomClient {
    /// Creates a new classroom client from configuration.
    pub fn new(config: ClassroomConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            access_token: config
                .access_token
                .filter(|t| !t.is_empty())
                .map(SecretString::new),
            base_url: config.base_url,
            client,
        }
    }

    fn token(&self) -> Result<&str, GatewayError> {
        self.access_token
            .as_ref()
            .map(|t| t.expose_secret().as_str())
            .ok_or_else(|| GatewayError::credentials_missing(VENDOR))
    }

    async fn read_error(response: reqwest::Response) -> GatewayError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status, error = %body, "Classroom API call failed");
        GatewayError::transport_status(status, VENDOR, body)
    }
}

#[async_trait]
impl ClassroomClient for RestClassroomClient {
    async fn create_course(
        &self,
        request: CreateCourseRequest,
    ) -> Result<CourseRecord, GatewayError> {
        let token = self.token()?;
        let url = format!("{}/v1/courses", self.base_url);

        let body = CourseBody {
            name: request.name,
            section: request.section,
            description: request.description,
            owner_id: "me".to_string(),
            course_state: "ACTIVE".to_string(),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let course: ApiCourse = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected(format!("Invalid course response: {}", e)))?;
        Ok(course.into())
    }

    async fn post_announcement(
        &self,
        request: PostAnnouncementRequest,
    ) -> Result<AnnouncementRecord, GatewayError> {
        let token = self.token()?;
        let url = format!(
            "{}/v1/courses/{}/announcements",
            self.base_url, request.course_id
        );

        let body = AnnouncementBody {
            text: request.text,
            state: "PUBLISHED".to_string(),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let announcement: ApiAnnouncement = response.json().await.map_err(|e| {
            GatewayError::unexpected(format!("Invalid announcement response: {}", e))
        })?;

        Ok(AnnouncementRecord {
            id: announcement.id,
            course_id: request.course_id,
        })
    }

    async fn create_assignment(
        &self,
        request: CreateAssignmentRequest,
    ) -> Result<AssignmentRecord, GatewayError> {
        let token = self.token()?;
        let url = format!(
            "{}/v1/courses/{}/courseWork",
            self.base_url, request.course_id
        );

        let body = CourseWorkBody {
            title: request.title,
            description: request.description,
            max_points: request.max_points,
            work_type: "ASSIGNMENT".to_string(),
            state: "PUBLISHED".to_string(),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let work: ApiCourseWork = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected(format!("Invalid assignment response: {}", e)))?;

        Ok(AssignmentRecord {
            id: work.id,
            course_id: request.course_id,
            title: work.title,
        })
    }

    async fn list_courses(&self) -> Result<Vec<CourseRecord>, GatewayError> {
        let token = self.token()?;
        let url = format!("{}/v1/courses?courseStates=ACTIVE", self.base_url);

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let listing: CourseListing = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected(format!("Invalid course listing: {}", e)))?;

        Ok(listing.courses.into_iter().map(CourseRecord::from).collect())
    }

    async fn list_students(&self, course_id: &str) -> Result<Vec<StudentRecord>, GatewayError> {
        let token = self.token()?;
        let url = format!("{}/v1/courses/{}/students", self.base_url, course_id);

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let listing: StudentListing = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected(format!("Invalid student listing: {}", e)))?;

        Ok(listing
            .students
            .into_iter()
            .map(|s| StudentRecord {
                user_id: s.user_id,
                full_name: s.profile.as_ref().and_then(|p| p.name.as_ref()).map(|n| n.full_name.clone()),
                email: s.profile.and_then(|p| p.email_address),
            })
            .collect())
    }
}

// ----- Classroom API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CourseBody {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    owner_id: String,
    course_state: String,
}

#[derive(Debug, Serialize)]
struct AnnouncementBody {
    text: String,
    state: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CourseWorkBody {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_points: Option<u32>,
    work_type: String,
    state: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCourse {
    id: String,
    name: String,
    section: Option<String>,
    course_state: Option<String>,
    alternate_link: Option<String>,
}

impl From<ApiCourse> for CourseRecord {
    fn from(course: ApiCourse) -> Self {
        CourseRecord {
            id: course.id,
            name: course.name,
            section: course.section,
            state: course.course_state,
            link: course.alternate_link,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiAnnouncement {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ApiCourseWork {
    id: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct CourseListing {
    #[serde(default)]
    courses: Vec<ApiCourse>,
}

#[derive(Debug, Deserialize)]
struct StudentListing {
    #[serde(default)]
    students: Vec<ApiStudent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiStudent {
    user_id: String,
    profile: Option<ApiProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiProfile {
    name: Option<ApiName>,
    email_address: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiName {
    full_name: String,
}
