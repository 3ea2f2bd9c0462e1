use actix_web::HttpResponse;
use serde_json::json;

pub struct Response;

impl Response {
    pub fn ok(msg: &str) -> HttpResponse {
        HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({ "success": true, "msg": msg }))
    }

    pub fn bad_request(msg: &str) -> HttpResponse {
        HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({ "success": false, "msg": msg }))
    }

    pub fn not_found(msg: &str) -> HttpResponse {
        HttpResponse::NotFound()
            .content_type("application/json")
            .json(json!({ "success": false, "msg": msg }))
    }

    pub fn internal_server_error(msg: &str) -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type("application/json")
            .json(json!({ "success": false, "msg": msg }))
    }
}
