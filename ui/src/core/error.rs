//! Error taxonomy for loading and laying out the heatmap.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with HTTP {status}")]
    Http { status: u16 },

    #[error("malformed dataset: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("record {index} has month {month}; expected 1-12")]
    InvalidMonth { index: usize, month: u8 },

    #[error("record {index} has year {year}, outside the supported calendar")]
    InvalidYear { index: usize, year: i32 },

    #[error("record {index} repeats month {month} of {year}")]
    DuplicateCell { index: usize, year: i32, month: u8 },

    #[error("record {index} has a non-finite variance")]
    InvalidVariance { index: usize },

    #[error("dataset contains no monthly records")]
    EmptyDataset,

    #[error("container leaves no drawable area ({width}x{height})")]
    EmptyCanvas { width: f64, height: f64 },
}

pub type Result<T, E = HeatmapError> = std::result::Result<T, E>;
