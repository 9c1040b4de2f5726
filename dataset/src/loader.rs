use std::fs::{self, File};
use std::path::{Path, PathBuf};

use arrow::datatypes::{Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::{info, warn};

use crate::errors::DatasetError;
use crate::table::Dataset;

const BATCH_SIZE: usize = 8192;

/// Read one Parquet file into record batches.
pub fn load_file(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).map_err(|source| DatasetError::Parquet {
            path: path.to_path_buf(),
            source,
        })?;
    let schema = builder.schema().clone();

    let reader = builder
        .with_batch_size(BATCH_SIZE)
        .build()
        .map_err(|source| DatasetError::Parquet {
            path: path.to_path_buf(),
            source,
        })?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }

    Ok((schema, batches))
}

/// Load every Parquet file in `folder` and concatenate the results into
/// a single [`Dataset`].
///
/// Files are visited in sorted name order so the row order of the
/// concatenated table is deterministic. The first file's schema is
/// authoritative; any file that disagrees fails the whole load.
pub fn load_folder<P: AsRef<Path>>(folder: P) -> Result<Dataset, DatasetError> {
    let folder = folder.as_ref();

    let entries = fs::read_dir(folder).map_err(|source| DatasetError::Io {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DatasetError::Io {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if !path.is_file() {
            warn!("⏭️  Skipping non-file entry: {}", path.display());
            continue;
        }
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('.'))
            .unwrap_or(false);
        if hidden {
            warn!("⏭️  Skipping hidden file: {}", path.display());
            continue;
        }

        paths.push(path);
    }
    paths.sort();

    if paths.is_empty() {
        return Err(DatasetError::EmptyFolder(folder.to_path_buf()));
    }

    let mut expected: Option<SchemaRef> = None;
    let mut all_batches: Vec<RecordBatch> = Vec::new();

    for path in &paths {
        let (schema, batches) = load_file(path)?;

        match &expected {
            None => expected = Some(schema),
            Some(first) => {
                if first.as_ref() != schema.as_ref() {
                    return Err(DatasetError::SchemaMismatch {
                        path: path.clone(),
                        expected: schema_summary(first),
                        found: schema_summary(&schema),
                    });
                }
            }
        }

        let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        info!("📄 Loaded {} rows from {}", rows, path.display());
        all_batches.extend(batches);
    }

    let schema = expected.ok_or_else(|| DatasetError::EmptyFolder(folder.to_path_buf()))?;
    Dataset::from_batches(schema, all_batches, paths.len())
}

fn schema_summary(schema: &Schema) -> String {
    schema
        .fields()
        .iter()
        .map(|f| format!("{}: {}", f.name(), f.data_type()))
        .collect::<Vec<_>>()
        .join(", ")
}
