pub mod app;
pub mod cli;
pub mod commands;
pub mod context;
pub mod storage;
pub mod tracing;
pub mod types;
