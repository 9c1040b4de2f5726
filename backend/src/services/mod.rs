pub mod query_engine;
pub mod renderer;
