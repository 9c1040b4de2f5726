mod handlers;
mod routes;
mod services;
mod state;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::io;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_actix_web::TracingLogger;

use tabletalk_config::AppConfig;

use services::query_engine::{HttpQueryEngine, QueryEngine};
use state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let bind_addr = format!("0.0.0.0:{}", config.port);

    info!("🚀 [TableTalk] Starting on port {}", config.port);
    info!(
        "📂 [TableTalk] Loading dataset folder: {}",
        config.dataset_dir
    );

    // Loaded once; shared read-only for the lifetime of the process.
    let dataset = match tabletalk_dataset::load_folder(&config.dataset_dir) {
        Ok(dataset) => {
            info!(
                "📊 [TableTalk] Dataset ready: {} rows, {} columns from {} files",
                dataset.num_rows(),
                dataset.schema().fields().len(),
                dataset.source_files()
            );
            Arc::new(dataset)
        }
        Err(e) => {
            error!("❌ [TableTalk] Failed to load dataset folder: {}", e);
            return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
        }
    };

    if config.engine_api_key.is_none() {
        warn!("⚠️  OPENAI_API_KEY not set; query engine requests will be unauthenticated");
    }
    let engine: Arc<dyn QueryEngine> = Arc::new(HttpQueryEngine::new(
        config.http_client.clone(),
        config.engine_url.clone(),
        config.engine_api_key.clone(),
    ));
    info!("🧠 [TableTalk] Query engine: {}", config.engine_url);

    let state = web::Data::new(AppState {
        config,
        dataset,
        engine,
    });

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
