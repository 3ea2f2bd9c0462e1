use futures::StreamExt;
use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::utils::mongo::{find_page, page_params};
use serde::{ Serialize, Deserialize };
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};

use crate::model::{
    Course::Course,
    Subject::Subject,
    Notification::Notification,
};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqQuery {
    page: Option<u32>,
    limit: Option<u32>,
}

pub async fn task(req: HttpRequest, req_query: web::Query<ReqQuery>) -> Result<HttpResponse, Error> {
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

    let filter = Notification::visibility_filter(
        &user_id,
        &user.role,
        course_id.as_deref(),
    );

    let collection = db.collection::<Notification>("notification");

    let result = find_page(
        &collection,
        filter,
        req_query.limit,
        req_query.page,
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let mut cursor = result.unwrap();

    let mut notifications = Vec::new();

    while let Some(notification) = cursor.next().await {
        if let Err(error) = notification {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let notification = notification.unwrap();

        // Populate display names for whatever the targeting rule references
        let course_name = match &notification.recipients.course_id {
            Some(course_id) => {
                let collection = db.collection::<Course>("course");

                let result = collection.find_one(doc!{
                    "uuid": course_id
                }).await;

                if let Err(error) = result {
                    log::error!("{:?}", error);
                    return Ok(Response::internal_server_error(&error.to_string()));
                }

                result.unwrap().map(|course| course.name)
            },
            None => None
        };

        let subject_name = match &notification.recipients.subject_id {
            Some(subject_id) => {
                let collection = db.collection::<Subject>("subject");

                let result = collection.find_one(doc!{
                    "uuid": subject_id
                }).await;

                if let Err(error) = result {
                    log::error!("{:?}", error);
                    return Ok(Response::internal_server_error(&error.to_string()));
                }

                result.unwrap().map(|subject| subject.name)
            },
            None => None
        };

        notifications.push(json!({
            "notification": notification,
            "course_name": course_name,
            "subject_name": subject_name,
        }));
    }

    // Over the whole eligible set, not just this page. Listing is a pure
    // read, so nothing fetched here counts as seen until the client
    // acknowledges it.
    let unread_filter = Notification::unread_filter(
        &user_id,
        &user.role,
        course_id.as_deref(),
    );

    let result = collection.count_documents(unread_filter).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let unread_count = result.unwrap();

    let total = notifications.len();
    let (limit, page) = page_params(req_query.limit, req_query.page);

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "success": true,
            "notifications": notifications,
            "pagination": {
                "page": page,
                "limit": limit,
                "total": total,
                "unreadCount": unread_count,
            }
        }))
    )
}
