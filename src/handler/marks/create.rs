use uuid::Uuid;
use chrono::Utc;
use serde_json::json;
use mongodb::Database;
use mongodb::bson::doc;
use crate::builtins::notify;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Model::Account::Role;
use crate::Model::Subject::Subject;
use crate::Model::Marks::MarksEntry;
use crate::Model::Notification::Sender;
use crate::Middleware::Auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PostData {
    pub student_id: String,
    pub subject_id: String,
    pub exam: String,
    pub obtained: i64,
    pub total: i64,
}

pub async fn task(req: HttpRequest, form_data: web::Json<PostData>) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        AccessRequirement::AnyOf(vec![Role::Admin, Role::Teacher])
    )?;

    if let Err(error) = check_empty_fields(&form_data) {
        return Ok(Response::bad_request(&error));
    }

    let db = MongoDB.connect();

    let subject = match get_subject(&db, &form_data.subject_id).await {
        Ok(subject) => subject,
        Err(response) => return Ok(response),
    };

    let entry_id = Uuid::new_v4().to_string();
    let now = Utc::now().timestamp_millis();

    let collection = db.collection::<MarksEntry>("marks_entry");

    let entry = MarksEntry {
        uuid: entry_id.clone(),
        student_id: form_data.student_id.clone(),
        subject_id: form_data.subject_id.clone(),
        exam: form_data.exam.clone(),
        obtained: form_data.obtained,
        total: form_data.total,
        entered_by: user.user_id.clone(),
        created_at: now,
    };

    let result = collection.insert_one(entry).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    // Marks go to exactly the one student concerned
    notify::emit(
        &db,
        Sender {
            id: user.user_id,
            role: user.role,
            name: user.name,
        },
        notify::Event::Marks {
            entry_id: entry_id.clone(),
            student_id: form_data.student_id.clone(),
            subject_name: subject.name,
        },
    ).await;

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "success": true,
            "uuid": &entry_id
        }))
    )
}

async fn get_subject(
    db: &Database,
    subject_id: &str
) -> Result<Subject, HttpResponse> {
    let collection = db.collection::<Subject>("subject");
    let result = collection.find_one(
        doc!{ "uuid": subject_id },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Err(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Err(Response::not_found("subject not found"));
    }

    Ok(option.unwrap())
}

fn check_empty_fields(data: &PostData) -> Result<(), String> {
    if data.student_id.is_empty() {
        Err("Student id required".to_string())
    }
    else if data.subject_id.is_empty() {
        Err("Subject id required".to_string())
    }
    else if data.exam.is_empty() {
        Err("Exam name required".to_string())
    }
    else if data.total <= 0 {
        Err("Total marks must be positive".to_string())
    }
    else if data.obtained < 0 || data.obtained > data.total {
        Err("Obtained marks out of range".to_string())
    }
    else {
        Ok(())
    }
}
