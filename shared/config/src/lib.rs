use reqwest::Client;

#[derive(Clone)]
pub struct AppConfig {
    pub http_client: Client,
    pub port: u16,
    pub dataset_dir: String,
    pub preview_rows: usize,
    pub engine_url: String,
    pub engine_api_key: Option<String>,
    /// Cap on how many rows are shipped to the query engine per question.
    /// Unset means the whole table goes.
    pub engine_row_limit: Option<usize>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            http_client: Client::new(),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3015),
            dataset_dir: std::env::var("DATASET_DIR").unwrap_or_else(|_| "./data".to_string()),
            preview_rows: std::env::var("PREVIEW_ROWS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            engine_url: std::env::var("QUERY_ENGINE_URL")
                .unwrap_or_else(|_| "http://localhost:8001".to_string()),
            engine_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            engine_row_limit: std::env::var("ENGINE_ROW_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }
}
