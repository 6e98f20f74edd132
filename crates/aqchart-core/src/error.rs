// File: crates/aqchart-core/src/error.rs
// Summary: Error type shared by loading, configuration and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] json5::Error),

    #[error("missing column '{0}' in CSV header")]
    MissingColumn(&'static str),

    #[error("row {row}: cannot parse date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: cannot parse level '{value}'")]
    InvalidLevel { row: usize, value: String },

    #[error("render failed: {0}")]
    Render(&'static str),
}

pub type Result<T> = std::result::Result<T, ChartError>;
