use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/attendance")
        .route(
            "",
            web::post().to(Handler::Attendance::Create::task)
        )
    );
}
