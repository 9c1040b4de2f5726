use actix_web::{web, HttpResponse, Result};

use crate::state::AppState;

pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tabletalk-backend"
    })))
}

pub async fn status_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "service": "tabletalk-backend",
        "version": "0.1.0",
        "status": "running",
        "dataset": {
            "rows": state.dataset.num_rows(),
            "columns": state.dataset.schema().fields().len(),
            "source_files": state.dataset.source_files(),
        },
        "engine": {
            "url": state.config.engine_url,
            "authenticated": state.config.engine_api_key.is_some(),
            "row_limit": state.config.engine_row_limit,
        }
    })))
}
