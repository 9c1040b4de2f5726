pub mod health;

use actix_web::web;

use crate::handlers::{dataset, query, ui};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/dataset/info", web::get().to(dataset::dataset_info))
            .route("/dataset/preview", web::get().to(dataset::dataset_preview))
            .route("/query", web::post().to(query::ask_question)),
    )
    .route("/", web::get().to(ui::index))
    .route("/health", web::get().to(health::health_check))
    .route("/status", web::get().to(health::status_check));
}
