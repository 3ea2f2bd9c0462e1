use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/material")
        .route(
            "",
            web::post().to(Handler::Material::Create::task)
        )
    );
}
