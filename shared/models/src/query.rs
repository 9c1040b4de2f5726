use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A natural-language question submitted from the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

/// JSON-rows projection of the loaded table, shipped to the query engine
/// and used for table answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePayload {
    pub columns: Vec<String>,
    pub rows: Vec<serde_json::Value>,
}

/// Request body sent to the external query engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineRequest {
    pub question: String,
    pub table: TablePayload,
}

/// Typed result returned by the query engine. The `type` tag decides
/// which formatter renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum EngineResult {
    Dataframe(TablePayload),
    Plot(String),
    String(String),
    Number(f64),
}

/// Full query engine reply: the typed result plus the generated program
/// the engine executed, when it chooses to disclose it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineReply {
    pub result: EngineResult,
    #[serde(default)]
    pub code: Option<String>,
}

/// What the browser UI actually renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderedAnswer {
    Table {
        columns: Vec<String>,
        rows: Vec<serde_json::Value>,
    },
    Image {
        data_uri: String,
    },
    Text {
        text: String,
    },
}

impl RenderedAnswer {
    pub fn kind_name(&self) -> &'static str {
        match self {
            RenderedAnswer::Table { .. } => "table",
            RenderedAnswer::Image { .. } => "image",
            RenderedAnswer::Text { .. } => "text",
        }
    }
}

/// Response body for `POST /api/query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub query_id: Uuid,
    pub answer: RenderedAnswer,
    pub code: Option<String>,
    pub answered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dataframe_reply_decodes() {
        let body = json!({
            "result": {
                "type": "dataframe",
                "value": {
                    "columns": ["city", "population"],
                    "rows": [{"city": "Oslo", "population": 709037}]
                }
            },
            "code": "df.sort_values(...)"
        });

        let reply: EngineReply = serde_json::from_value(body).unwrap();
        assert_eq!(reply.code.as_deref(), Some("df.sort_values(...)"));
        match reply.result {
            EngineResult::Dataframe(table) => {
                assert_eq!(table.columns, vec!["city", "population"]);
                assert_eq!(table.rows.len(), 1);
            }
            other => panic!("expected dataframe, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_replies_decode_without_code() {
        let number: EngineReply =
            serde_json::from_value(json!({"result": {"type": "number", "value": 3.5}})).unwrap();
        assert!(number.code.is_none());
        assert!(matches!(number.result, EngineResult::Number(n) if n == 3.5));

        let text: EngineReply =
            serde_json::from_value(json!({"result": {"type": "string", "value": "42 rows"}}))
                .unwrap();
        assert!(matches!(text.result, EngineResult::String(s) if s == "42 rows"));
    }

    #[test]
    fn test_unknown_result_kind_is_rejected() {
        let body = json!({"result": {"type": "hologram", "value": 1}});
        assert!(serde_json::from_value::<EngineReply>(body).is_err());
    }

    #[test]
    fn test_rendered_answer_kind_tags() {
        let answer = RenderedAnswer::Image {
            data_uri: "data:image/png;base64,AAAA".to_string(),
        };
        let value = serde_json::to_value(&answer).unwrap();
        assert_eq!(value["kind"], "image");
        assert_eq!(answer.kind_name(), "image");

        let text = serde_json::to_value(RenderedAnswer::Text {
            text: "hi".to_string(),
        })
        .unwrap();
        assert_eq!(text["kind"], "text");
    }
}
