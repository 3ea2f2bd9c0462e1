use chrono::Utc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};

use crate::model::Notification::Notification;

pub async fn task(req: HttpRequest, path: web::Path<String>) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        AccessRequirement::AnyToken
    )?;

    // The receipt is always recorded for the token holder. The id being
    // marked comes from the path; whose read it is does not.
    let user_id = user.user_id;
    let notification_id = path.into_inner();

    let db = MongoDB.connect();
    let collection = db.collection::<Notification>("notification");

    let now = Utc::now().timestamp_millis();

    let result = collection.update_one(
        Notification::not_yet_read_by(&notification_id, &user_id),
        Notification::read_receipt_update(&user_id, now),
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    // modified_count of zero means the receipt already existed (or the id
    // is unknown); either way the end state is what the caller asked for.
    Ok(Response::ok("notification marked as read"))
}
