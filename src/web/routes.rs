use actix_web::web;

use crate::error::ChatError;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ChatError::InvalidBody(err.to_string()).into()),
    )
    .service(
        web::scope("/api").service(
            web::resource("/chat")
                .route(web::post().to(handlers::chat))
                .default_service(web::to(handlers::method_not_allowed)),
        ),
    )
    .route("/health", web::get().to(handlers::health_check));
}
