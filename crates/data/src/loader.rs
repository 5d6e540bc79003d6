//! CSV loader for the monthly price-index dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use valora_core::{InflationRecord, InflationSeries};
use valora_shared::{DatasetConfig, DateOrder};

use crate::date::parse_period_date;
use crate::error::DatasetError;

/// Summary of a dataset load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows read (header excluded).
    pub rows_read: usize,
    /// Rows skipped because their date could not be parsed.
    pub rows_skipped: usize,
    /// Oldest period in the series.
    pub first_period: NaiveDate,
    /// Newest period in the series ("today").
    pub last_period: NaiveDate,
}

/// Reads monthly inflation records from CSV.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    date_column: String,
    rate_column: String,
    date_order: DateOrder,
}

impl DatasetLoader {
    /// Creates a loader for the `Date` and `CPI_MoM` columns.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&DatasetConfig::default())
    }

    /// Creates a loader from dataset configuration.
    #[must_use]
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self {
            date_column: config.date_column.clone(),
            rate_column: config.rate_column.clone(),
            date_order: config.date_order,
        }
    }

    /// Overrides the column headers.
    #[must_use]
    pub fn with_columns(mut self, date_column: impl Into<String>, rate_column: impl Into<String>) -> Self {
        self.date_column = date_column.into();
        self.rate_column = rate_column.into();
        self
    }

    /// Overrides the preferred date order.
    #[must_use]
    pub const fn with_date_order(mut self, date_order: DateOrder) -> Self {
        self.date_order = date_order;
        self
    }

    /// Loads a series from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, or for any error
    /// listed on [`DatasetLoader::load_reader`].
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<(InflationSeries, LoadReport), DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "Loading price-index dataset");
        self.load_reader(file)
    }

    /// Loads a series from any CSV source.
    ///
    /// Rows with unparseable dates are skipped; rows with unparseable rates
    /// are an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The CSV is malformed
    /// - A configured column is missing
    /// - A rate cannot be parsed
    /// - The rows do not form a valid series (empty, duplicate periods,
    ///   rates below -1)
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<(InflationSeries, LoadReport), DatasetError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let date_idx = column_index(&headers, &self.date_column)?;
        let rate_idx = column_index(&headers, &self.rate_column)?;

        let mut records = Vec::new();
        let mut rows_read = 0;
        let mut rows_skipped = 0;

        for (row_num, result) in reader.records().enumerate() {
            let row = result?;
            // +2 because: 1-indexed + header row
            let line = row_num + 2;
            rows_read += 1;

            let raw_date = row.get(date_idx).unwrap_or("");
            let Some(period_date) = parse_period_date(raw_date, self.date_order) else {
                warn!(line, value = raw_date, "Skipping row with unparseable date");
                rows_skipped += 1;
                continue;
            };

            let raw_rate = row.get(rate_idx).unwrap_or("");
            let rate = parse_rate(raw_rate).ok_or_else(|| DatasetError::InvalidRate {
                line,
                value: raw_rate.to_string(),
            })?;

            records.push(InflationRecord::new(period_date, rate));
        }

        debug!(rows_read, rows_skipped, "Parsed dataset rows");

        let series = InflationSeries::new(records)?;
        let report = LoadReport {
            rows_read,
            rows_skipped,
            first_period: series.first_period(),
            last_period: series.today(),
        };

        info!(
            records = series.len(),
            rows_skipped,
            first_period = %report.first_period,
            last_period = %report.last_period,
            "Price-index dataset loaded"
        );

        Ok((series, report))
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
}

/// Parses a rate in plain or scientific notation.
fn parse_rate(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate("0.0123"), Some(dec!(0.0123)));
        assert_eq!(parse_rate(" -0.004 "), Some(dec!(-0.004)));
        assert_eq!(parse_rate("1.5e-2"), Some(dec!(0.015)));
        assert_eq!(parse_rate(""), None);
        assert_eq!(parse_rate("n/a"), None);
    }

    #[test]
    fn test_load_reader_sorts_and_skips() {
        let csv = "\
Date,CPI_MoM
01/03/1980,0.20
01/02/1980,0.10
not a date,0.99
01/04/1980,0.50
";
        let (series, report) = DatasetLoader::new().load_reader(csv.as_bytes()).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(report.rows_read, 4);
        assert_eq!(report.rows_skipped, 1);
        assert_eq!(report.first_period, date(1980, 2, 1));
        assert_eq!(report.last_period, date(1980, 4, 1));
    }

    #[test]
    fn test_load_reader_custom_columns() {
        let csv = "fecha,ipc\n1990-01-01,0.79\n1990-02-01,0.61\n";
        let loader = DatasetLoader::new().with_columns("fecha", "ipc");
        let (series, _) = loader.load_reader(csv.as_bytes()).unwrap();
        assert_eq!(series.records()[0].rate, dec!(0.79));
    }

    #[test]
    fn test_load_reader_month_first() {
        let csv = "Date,CPI_MoM\n02/01/1980,0.1\n";
        let loader = DatasetLoader::new().with_date_order(DateOrder::MonthFirst);
        let (series, _) = loader.load_reader(csv.as_bytes()).unwrap();
        assert_eq!(series.first_period(), date(1980, 2, 1));
    }

    #[test]
    fn test_missing_column() {
        let csv = "Date,Rate\n01/02/1980,0.1\n";
        let result = DatasetLoader::new().load_reader(csv.as_bytes());
        assert!(matches!(result, Err(DatasetError::MissingColumn(ref c)) if c == "CPI_MoM"));
    }

    #[test]
    fn test_invalid_rate_reports_line() {
        let csv = "Date,CPI_MoM\n01/02/1980,0.1\n01/03/1980,abc\n";
        let result = DatasetLoader::new().load_reader(csv.as_bytes());
        assert!(matches!(
            result,
            Err(DatasetError::InvalidRate { line: 3, ref value }) if value == "abc"
        ));
    }

    #[test]
    fn test_duplicate_period_rejected() {
        let csv = "Date,CPI_MoM\n01/02/1980,0.1\n1980-02-01,0.2\n";
        let result = DatasetLoader::new().load_reader(csv.as_bytes());
        assert!(matches!(result, Err(DatasetError::Series(_))));
    }

    #[test]
    fn test_only_unparseable_dates_is_empty_series() {
        let csv = "Date,CPI_MoM\nfoo,0.1\n";
        let result = DatasetLoader::new().load_reader(csv.as_bytes());
        assert!(matches!(
            result,
            Err(DatasetError::Series(valora_core::InflationError::EmptySeries))
        ));
    }
}
