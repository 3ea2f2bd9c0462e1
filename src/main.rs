use actix_web::{middleware::Logger, App, HttpServer};
use campushub_backend::builtins::mongo::MongoDB;
use campushub_backend::Routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    if let Err(error) = MongoDB::init().await {
        log::error!("failed to connect to mongodb: {}", error);
        return Err(std::io::Error::new(std::io::ErrorKind::Other, error));
    }

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    log::info!("starting server on port {}", port);

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .configure(Routes::Notification::router)
            .configure(Routes::Notice::router)
            .configure(Routes::Assignment::router)
            .configure(Routes::Material::router)
            .configure(Routes::Attendance::router)
            .configure(Routes::Marks::router)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
