use uuid::Uuid;
use chrono::Utc;
use serde_json::json;
use crate::builtins::notify;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Model::Account::Role;
use crate::Model::Assignment::Assignment;
use crate::Model::Notification::Sender;
use crate::Middleware::Auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PostData {
    pub course_id: String,
    pub subject_id: String,
    pub title: String,
    pub description: String,
    pub due_date: i64,
}

pub async fn task(req: HttpRequest, form_data: web::Json<PostData>) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        AccessRequirement::AnyOf(vec![Role::Admin, Role::Teacher])
    )?;

    if let Err(error) = check_empty_fields(&form_data) {
        return Ok(Response::bad_request(&error));
    }

    let assignment_id = Uuid::new_v4().to_string();
    let now = Utc::now().timestamp_millis();

    let db = MongoDB.connect();
    let collection = db.collection::<Assignment>("assignment");

    let assignment = Assignment {
        uuid: assignment_id.clone(),
        course_id: form_data.course_id.clone(),
        subject_id: form_data.subject_id.clone(),
        title: form_data.title.clone(),
        description: form_data.description.clone(),
        posted_by: user.user_id.clone(),
        due_date: form_data.due_date,
        created_at: now,
    };

    let result = collection.insert_one(assignment).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    notify::emit(
        &db,
        Sender {
            id: user.user_id,
            role: user.role,
            name: user.name,
        },
        notify::Event::Assignment {
            assignment_id: assignment_id.clone(),
            course_id: form_data.course_id.clone(),
            subject_id: form_data.subject_id.clone(),
            title: form_data.title.clone(),
        },
    ).await;

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "success": true,
            "uuid": &assignment_id
        }))
    )
}

fn check_empty_fields(data: &PostData) -> Result<(), String> {
    if data.title.is_empty() {
        Err("Title required".to_string())
    }
    else if data.course_id.is_empty() {
        Err("Course id required".to_string())
    }
    else if data.subject_id.is_empty() {
        Err("Subject id required".to_string())
    }
    else {
        Ok(())
    }
}
