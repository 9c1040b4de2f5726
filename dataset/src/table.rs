use arrow::datatypes::SchemaRef;
use arrow::json::ArrayWriter;
use arrow::record_batch::RecordBatch;

use tabletalk_models::dataset::{ColumnInfo, DatasetInfo, PreviewResponse};
use tabletalk_models::query::TablePayload;

use crate::errors::DatasetError;

/// The single logical table served by the application: every file in the
/// dataset folder concatenated into one record batch.
pub struct Dataset {
    schema: SchemaRef,
    batch: RecordBatch,
    source_files: usize,
}

impl Dataset {
    pub fn from_batches(
        schema: SchemaRef,
        batches: Vec<RecordBatch>,
        source_files: usize,
    ) -> Result<Self, DatasetError> {
        let batch = arrow::compute::concat_batches(&schema, &batches)?;
        Ok(Self {
            schema,
            batch,
            source_files,
        })
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn source_files(&self) -> usize {
        self.source_files
    }

    pub fn column_names(&self) -> Vec<String> {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Last `n` rows as a zero-copy slice.
    pub fn tail(&self, n: usize) -> RecordBatch {
        let rows = self.batch.num_rows();
        let take = n.min(rows);
        self.batch.slice(rows - take, take)
    }

    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            rows: self.num_rows(),
            columns: self
                .schema
                .fields()
                .iter()
                .map(|f| ColumnInfo {
                    name: f.name().clone(),
                    data_type: f.data_type().to_string(),
                })
                .collect(),
            source_files: self.source_files,
        }
    }

    /// Tail-of-table preview for the UI.
    pub fn preview(&self, rows: usize) -> Result<PreviewResponse, DatasetError> {
        let tail = self.tail(rows);
        Ok(PreviewResponse {
            columns: self.column_names(),
            rows: batch_to_json_rows(&tail)?,
            total_rows: self.num_rows(),
        })
    }

    /// JSON-rows projection of the table, optionally capped to the first
    /// `limit` rows, for shipping to the query engine.
    pub fn to_table_payload(&self, limit: Option<usize>) -> Result<TablePayload, DatasetError> {
        let batch = match limit {
            Some(limit) if limit < self.batch.num_rows() => self.batch.slice(0, limit),
            _ => self.batch.clone(),
        };
        Ok(TablePayload {
            columns: self.column_names(),
            rows: batch_to_json_rows(&batch)?,
        })
    }
}

fn batch_to_json_rows(batch: &RecordBatch) -> Result<Vec<serde_json::Value>, DatasetError> {
    if batch.num_rows() == 0 {
        return Ok(Vec::new());
    }

    let mut buf = Vec::new();
    {
        let mut writer = ArrayWriter::new(&mut buf);
        writer.write_batches(&[batch])?;
        writer.finish()?;
    }

    Ok(serde_json::from_slice(&buf)?)
}
