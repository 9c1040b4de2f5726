//! Dataset folder loading and the single logical table it produces.
//!
//! A dataset folder is a directory of Parquet files with identical
//! schemas. At startup every file is read into Arrow record batches and
//! the batches are concatenated into one [`Dataset`] that the rest of
//! the service shares read-only.

pub mod errors;
pub mod loader;
pub mod table;

pub use errors::DatasetError;
pub use loader::{load_file, load_folder};
pub use table::Dataset;
