//! Classroom handler - sub-dispatch over the provider's five operations.

use serde_json::{json, Value};

use crate::domain::{ClassroomAction, GatewayError, Payload};
use crate::ports::{
    ClassroomClient, CreateAssignmentRequest, CreateCourseRequest, PostAnnouncementRequest,
};

/// Dispatches one classroom sub-action. Unknown sub-actions were already
/// rejected during action resolution, so this match is exhaustive.
pub async fn handle(
    client: &dyn ClassroomClient,
    action: ClassroomAction,
    agent_id: &str,
    payload: &Payload,
) -> Result<Value, GatewayError> {
    match action {
        ClassroomAction::CreateCourse => create_course(client, agent_id, payload).await,
        ClassroomAction::PostAnnouncement => post_announcement(client, agent_id, payload).await,
        ClassroomAction::CreateAssignment => create_assignment(client, agent_id, payload).await,
        ClassroomAction::GetCourses => get_courses(client, agent_id).await,
        ClassroomAction::GetStudents => get_students(client, agent_id, payload).await,
    }
}

async fn create_course(
    client: &dyn ClassroomClient,
    agent_id: &str,
    payload: &Payload,
) -> Result<Value, GatewayError> {
    let course = client
        .create_course(CreateCourseRequest {
            name: payload.str_field("name").unwrap_or_default().to_string(),
            section: payload.str_field("section").map(str::to_string),
            description: payload.str_field("description").map(str::to_string),
        })
        .await?;

    Ok(json!({
        "agentId": agent_id,
        "courseId": course.id,
        "name": course.name,
        "state": course.state,
        "link": course.link,
    }))
}

async fn post_announcement(
    client: &dyn ClassroomClient,
    agent_id: &str,
    payload: &Payload,
) -> Result<Value, GatewayError> {
    let course_id = payload.str_field("courseId").unwrap_or_default().to_string();
    let announcement = client
        .post_announcement(PostAnnouncementRequest {
            course_id: course_id.clone(),
            text: payload.str_field("text").unwrap_or_default().to_string(),
        })
        .await?;

    Ok(json!({
        "agentId": agent_id,
        "courseId": course_id,
        "announcementId": announcement.id,
    }))
}

async fn create_assignment(
    client: &dyn ClassroomClient,
    agent_id: &str,
    payload: &Payload,
) -> Result<Value, GatewayError> {
    let course_id = payload.str_field("courseId").unwrap_or_default().to_string();
    let max_points = payload
        .get("maxPoints")
        .and_then(Value::as_u64)
        .map(|points| points as u32);

    let assignment = client
        .create_assignment(CreateAssignmentRequest {
            course_id: course_id.clone(),
            title: payload.str_field("title").unwrap_or_default().to_string(),
            description: payload.str_field("description").map(str::to_string),
            max_points,
        })
        .await?;

    Ok(json!({
        "agentId": agent_id,
        "courseId": course_id,
        "assignmentId": assignment.id,
        "title": assignment.title,
    }))
}

async fn get_courses(client: &dyn ClassroomClient, agent_id: &str) -> Result<Value, GatewayError> {
    let courses = client.list_courses().await?;

    Ok(json!({
        "agentId": agent_id,
        "count": courses.len(),
        "courses": courses,
    }))
}

async fn get_students(
    client: &dyn ClassroomClient,
    agent_id: &str,
    payload: &Payload,
) -> Result<Value, GatewayError> {
    let course_id = payload.str_field("courseId").unwrap_or_default();
    let students = client.list_students(course_id).await?;

    Ok(json!({
        "agentId": agent_id,
        "courseId": course_id,
        "count": students.len(),
        "students": students,
    }))
}
