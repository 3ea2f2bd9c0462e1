use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};

use crate::model::Notification::Notification;

/// Records read receipts for a whole page of notifications at once.
/// Clients call this after rendering the page they fetched from the list
/// endpoint; the listing itself never marks anything read.
pub async fn task(
    req: HttpRequest,
    notification_ids: web::Json<Vec<String>>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;
    let notification_ids = notification_ids.into_inner();

    if notification_ids.is_empty() {
        return Ok(Response::bad_request("No notification ids supplied"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Notification>("notification");

    let now = Utc::now().timestamp_millis();

    // Same guarded insert as the single mark-read; ids already carrying a
    // receipt for this user simply do not match.
    let result = collection.update_many(
        doc! {
            "uuid": { "$in": notification_ids },
            "read_by.user_id": { "$ne": &user_id },
        },
        Notification::read_receipt_update(&user_id, now),
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::ok("notifications marked as read"))
}
