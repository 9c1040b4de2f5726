pub mod dataset;
pub mod query;
pub mod ui;
