use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use tracing::error;

use tabletalk_models::ApiResponse;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub rows: Option<usize>,
}

/// Schema, row count and source file count of the loaded table.
pub async fn dataset_info(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(state.dataset.info())))
}

/// Last N rows of the table for the UI's preview panel.
pub async fn dataset_preview(
    state: web::Data<AppState>,
    params: web::Query<PreviewParams>,
) -> Result<HttpResponse> {
    let rows = params.rows.unwrap_or(state.config.preview_rows);

    match state.dataset.preview(rows) {
        Ok(preview) => Ok(HttpResponse::Ok().json(ApiResponse::success(preview))),
        Err(e) => {
            error!("❌ Failed to build dataset preview: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<serde_json::Value>::error(e.to_string())))
        }
    }
}
