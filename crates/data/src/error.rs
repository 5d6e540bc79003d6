//! Dataset loading errors.

use std::path::PathBuf;

use thiserror::Error;
use valora_core::InflationError;
use valora_shared::AppError;

/// Errors raised while loading the price-index dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened.
    #[error("Failed to open dataset {}: {source}", .path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV could not be read.
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("Column '{0}' not found in dataset header")]
    MissingColumn(String),

    /// A rate cell is not a decimal number.
    #[error("Invalid rate '{value}' on line {line}")]
    InvalidRate {
        /// 1-based line number including the header.
        line: usize,
        /// Raw cell contents.
        value: String,
    },

    /// The parsed rows do not form a valid series.
    #[error("Invalid inflation series: {0}")]
    Series(#[from] InflationError),
}

impl From<DatasetError> for AppError {
    fn from(err: DatasetError) -> Self {
        Self::Dataset(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_error_maps_to_app_error() {
        let err: AppError = DatasetError::MissingColumn("CPI_MoM".into()).into();
        assert_eq!(err.error_code(), "DATASET_ERROR");
        assert_eq!(
            err.to_string(),
            "Dataset error: Column 'CPI_MoM' not found in dataset header"
        );
    }
}
