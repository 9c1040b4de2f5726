use std::sync::Arc;

use tabletalk_config::AppConfig;
use tabletalk_dataset::Dataset;

use crate::services::query_engine::QueryEngine;

pub struct AppState {
    pub config: AppConfig,
    pub dataset: Arc<Dataset>,
    pub engine: Arc<dyn QueryEngine>,
}
