use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notification")
        //List (pure read; acknowledge below records the receipts)
        .route(
            "",
            web::get().to(Handler::Notification::List::task)
        )
        .route(
            "/unread-count",
            web::get().to(Handler::Notification::UnreadCount::task)
        )
        //Acknowledge a rendered page
        .route(
            "/read",
            web::put().to(Handler::Notification::Acknowledge::task)
        )
        //Mark a single notification
        .route(
            "/{uuid}/read",
            web::put().to(Handler::Notification::MarkRead::task)
        )
    );
}
