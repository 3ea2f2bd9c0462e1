use uuid::Uuid;
use chrono::Utc;
use serde_json::json;
use crate::builtins::notify;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Model::Account::Role;
use crate::Model::Notice::Notice;
use crate::Model::Notification::Sender;
use crate::Middleware::Auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PostData {
    pub course_id: String,
    pub title: String,
    pub content: String,
}

pub async fn task(req: HttpRequest, form_data: web::Json<PostData>) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        AccessRequirement::AnyOf(vec![Role::Admin, Role::Teacher])
    )?;

    if let Err(error) = check_empty_fields(&form_data) {
        return Ok(Response::bad_request(&error));
    }

    let notice_id = Uuid::new_v4().to_string();
    let now = Utc::now().timestamp_millis();

    let db = MongoDB.connect();
    let collection = db.collection::<Notice>("notice");

    let notice = Notice {
        uuid: notice_id.clone(),
        course_id: form_data.course_id.clone(),
        title: form_data.title.clone(),
        content: form_data.content.clone(),
        posted_by: user.user_id.clone(),
        created_at: now,
    };

    let result = collection.insert_one(notice).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    // Losing the notification never fails the notice itself
    notify::emit(
        &db,
        Sender {
            id: user.user_id,
            role: user.role,
            name: user.name,
        },
        notify::Event::Notice {
            notice_id: notice_id.clone(),
            course_id: form_data.course_id.clone(),
            title: form_data.title.clone(),
        },
    ).await;

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "success": true,
            "uuid": &notice_id
        }))
    )
}

fn check_empty_fields(data: &PostData) -> Result<(), String> {
    if data.title.is_empty() {
        Err("Title required".to_string())
    }
    else if data.content.is_empty() {
        Err("Content required".to_string())
    }
    else if data.course_id.is_empty() {
        Err("Course id required".to_string())
    }
    else {
        Ok(())
    }
}
