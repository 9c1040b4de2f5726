use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use tabletalk_models::query::{QueryRequest, QueryResponse};
use tabletalk_models::ApiResponse;

use crate::services::renderer::{ResponseRenderer, WebRenderer};
use crate::state::AppState;

/// Ask the query engine a natural-language question about the loaded
/// table and dispatch the typed result to a renderable answer.
pub async fn ask_question(
    state: web::Data<AppState>,
    req: web::Json<QueryRequest>,
) -> Result<HttpResponse> {
    let question = req.question.trim();
    if question.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<QueryResponse>::error(
            "question must not be empty".to_string(),
        )));
    }

    let query_id = Uuid::new_v4();
    info!("🗣️  [{}] Question: {}", query_id, question);

    let table = match state.dataset.to_table_payload(state.config.engine_row_limit) {
        Ok(table) => table,
        Err(e) => {
            error!("❌ [{}] Failed to serialize table for engine: {}", query_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<QueryResponse>::error(e.to_string())));
        }
    };

    match state.engine.ask(question, &table).await {
        Ok(reply) => {
            if let Some(code) = &reply.code {
                info!("🧾 [{}] Engine ran:\n{}", query_id, code);
            }

            let answer = WebRenderer.render(reply.result);
            info!("✅ [{}] Answered with {}", query_id, answer.kind_name());

            Ok(HttpResponse::Ok().json(ApiResponse::success(QueryResponse {
                query_id,
                answer,
                code: reply.code,
                answered_at: Utc::now(),
            })))
        }
        Err(e) => {
            error!("❌ [{}] Query engine error: {}", query_id, e);
            Ok(HttpResponse::BadGateway()
                .json(ApiResponse::<QueryResponse>::error(e.to_string())))
        }
    }
}
