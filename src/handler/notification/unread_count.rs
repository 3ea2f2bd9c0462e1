use serde_json::json;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use actix_web::{Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};

use crate::model::Notification::Notification;

pub async fn task(req: HttpRequest) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;

    let db = MongoDB.connect();

    let course_id = match super::enrolled_course(&db, &user_id, &user.role).await {
        Ok(course_id) => course_id,
        Err(response) => return Ok(response),
    };

    let filter = Notification::unread_filter(
        &user_id,
        &user.role,
        course_id.as_deref(),
    );

    let collection = db.collection::<Notification>("notification");
    let result = collection.count_documents(filter).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let unread_count = result.unwrap();

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "success": true,
            "unreadCount": unread_count,
        }))
    )
}
