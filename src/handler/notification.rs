pub mod list;
pub use list as List;

pub mod unread_count;
pub use unread_count as UnreadCount;

pub mod mark_read;
pub use mark_read as MarkRead;

pub mod acknowledge;
pub use acknowledge as Acknowledge;

use mongodb::Database;
use mongodb::bson::doc;
use actix_web::HttpResponse;
use crate::utils::response::Response;
use crate::Model::Account::{Role, StudentProfile};

/// Enrolled course of the caller, when the caller is a student and their
/// profile carries one. Teachers and admins never get a course clause; a
/// missing student record degrades silently to no course clause.
pub async fn enrolled_course(
    db: &Database,
    user_id: &str,
    role: &Role,
) -> Result<Option<String>, HttpResponse> {
    if *role != Role::Student {
        return Ok(None);
    }

    let collection = db.collection::<StudentProfile>("student_profile");
    let result = collection.find_one(doc! { "uuid": user_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Err(Response::internal_server_error(&error.to_string()));
    }

    match result.unwrap() {
        Some(profile) => Ok(profile.course_id),
        None => Ok(None),
    }
}
