use tabletalk_models::query::{EngineResult, RenderedAnswer, TablePayload};

/// Maps a query engine result's declared kind to a UI rendering call.
/// One formatter per kind, mirroring the three output panels of the UI.
pub trait ResponseRenderer {
    fn format_dataframe(&self, table: TablePayload) -> RenderedAnswer;
    fn format_plot(&self, image: String) -> RenderedAnswer;
    fn format_other(&self, value: serde_json::Value) -> RenderedAnswer;

    fn render(&self, result: EngineResult) -> RenderedAnswer {
        match result {
            EngineResult::Dataframe(table) => self.format_dataframe(table),
            EngineResult::Plot(image) => self.format_plot(image),
            EngineResult::String(text) => self.format_other(serde_json::Value::String(text)),
            EngineResult::Number(n) => self.format_other(serde_json::json!(n)),
        }
    }
}

/// Renderer for the browser UI.
pub struct WebRenderer;

impl ResponseRenderer for WebRenderer {
    fn format_dataframe(&self, table: TablePayload) -> RenderedAnswer {
        RenderedAnswer::Table {
            columns: table.columns,
            rows: table.rows,
        }
    }

    fn format_plot(&self, image: String) -> RenderedAnswer {
        // Engines send either a ready-made data URI or raw base64 PNG bytes.
        let data_uri = if image.starts_with("data:") {
            image
        } else {
            format!("data:image/png;base64,{}", image)
        };
        RenderedAnswer::Image { data_uri }
    }

    fn format_other(&self, value: serde_json::Value) -> RenderedAnswer {
        let text = match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        RenderedAnswer::Text { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataframe_renders_as_table() {
        let result = EngineResult::Dataframe(TablePayload {
            columns: vec!["city".to_string()],
            rows: vec![serde_json::json!({"city": "Oslo"})],
        });
        match WebRenderer.render(result) {
            RenderedAnswer::Table { columns, rows } => {
                assert_eq!(columns, vec!["city"]);
                assert_eq!(rows.len(), 1);
            }
            other => panic!("expected table, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_plot_base64_is_wrapped_as_data_uri() {
        match WebRenderer.render(EngineResult::Plot("AAAA".to_string())) {
            RenderedAnswer::Image { data_uri } => {
                assert_eq!(data_uri, "data:image/png;base64,AAAA");
            }
            other => panic!("expected image, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_plot_data_uri_passes_through() {
        let uri = "data:image/png;base64,BBBB".to_string();
        match WebRenderer.render(EngineResult::Plot(uri.clone())) {
            RenderedAnswer::Image { data_uri } => assert_eq!(data_uri, uri),
            other => panic!("expected image, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_scalars_render_as_text() {
        assert!(matches!(
            WebRenderer.render(EngineResult::String("42 rows".to_string())),
            RenderedAnswer::Text { text } if text == "42 rows"
        ));
        assert!(matches!(
            WebRenderer.render(EngineResult::Number(3.5)),
            RenderedAnswer::Text { text } if text == "3.5"
        ));
    }
}
