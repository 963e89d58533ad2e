use crate::metric::Metric;
use crate::month::Month;
use chrono::Datelike;
use csv::{ReaderBuilder, StringRecord};
use energy_utils::dates::parse_dataset_date;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header of the country column.
pub const COUNTRY_COLUMN: &str = "Country";
/// Header of the year column.
pub const YEAR_COLUMN: &str = "Year";
/// Header of the month label column.
pub const MONTH_COLUMN: &str = "Month";
/// Optional full date column, used when year or month cells are absent.
pub const DATE_COLUMN: &str = "date";

/// The fixed set of numeric measurements carried by one observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyMetrics {
    pub consumption: f64,
    pub generation: f64,
    pub per_capita: f64,
    pub emissions: f64,
    pub renewable_share: f64,
    pub fossil_share: f64,
    pub price_index: f64,
    pub industrial_share: f64,
    pub household_share: f64,
}

impl EnergyMetrics {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Consumption => self.consumption,
            Metric::Generation => self.generation,
            Metric::PerCapita => self.per_capita,
            Metric::Emissions => self.emissions,
            Metric::RenewableShare => self.renewable_share,
            Metric::FossilShare => self.fossil_share,
            Metric::PriceIndex => self.price_index,
            Metric::IndustrialShare => self.industrial_share,
            Metric::HouseholdShare => self.household_share,
        }
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        let slot = match metric {
            Metric::Consumption => &mut self.consumption,
            Metric::Generation => &mut self.generation,
            Metric::PerCapita => &mut self.per_capita,
            Metric::Emissions => &mut self.emissions,
            Metric::RenewableShare => &mut self.renewable_share,
            Metric::FossilShare => &mut self.fossil_share,
            Metric::PriceIndex => &mut self.price_index,
            Metric::IndustrialShare => &mut self.industrial_share,
            Metric::HouseholdShare => &mut self.household_share,
        };
        *slot = value;
    }
}

/// One country/year/month observation of energy metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRecord {
    pub country: String,
    pub year: i32,
    pub month: Month,
    pub metrics: EnergyMetrics,
}

impl EnergyRecord {
    /// A record with every metric set to 0.
    pub fn new(country: impl Into<String>, year: i32, month: Month) -> Self {
        EnergyRecord {
            country: country.into(),
            year,
            month,
            metrics: EnergyMetrics::default(),
        }
    }

    /// Builder-style setter for a single metric.
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.metrics.set(metric, value);
        self
    }

    pub fn value(&self, metric: Metric) -> f64 {
        self.metrics.get(metric)
    }

    /// Parse the dashboard dataset CSV (with headers) into records.
    ///
    /// Columns are located by header name. `Country` is required; year and
    /// month come from `Year`/`Month` or, failing that, from `date`. Metric
    /// columns that are absent or empty read as 0.
    pub fn parse_energy_csv(csv_object: &str) -> Result<Vec<EnergyRecord>, RecordError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        let headers = rdr.headers().map_err(RecordError::Csv)?.clone();
        let columns = ColumnIndex::from_headers(&headers)?;

        let mut record_list: Vec<EnergyRecord> = Vec::new();
        for (i, row) in rdr.records().enumerate() {
            let record = row.map_err(RecordError::Csv)?;
            // header is line 1
            record_list.push(columns.parse_row(&record, i + 2)?);
        }
        log::debug!("parsed {} energy records", record_list.len());
        Ok(record_list)
    }
}

/// Header positions resolved once per file.
struct ColumnIndex {
    country: usize,
    year: Option<usize>,
    month: Option<usize>,
    date: Option<usize>,
    metrics: Vec<(Metric, usize)>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, RecordError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let country = find(COUNTRY_COLUMN).ok_or(RecordError::MissingColumn(COUNTRY_COLUMN))?;
        let year = find(YEAR_COLUMN);
        let month = find(MONTH_COLUMN);
        let date = find(DATE_COLUMN);
        if date.is_none() {
            if year.is_none() {
                return Err(RecordError::MissingColumn(YEAR_COLUMN));
            }
            if month.is_none() {
                return Err(RecordError::MissingColumn(MONTH_COLUMN));
            }
        }
        let mut metrics = Vec::with_capacity(Metric::ALL.len());
        for metric in Metric::ALL {
            match find(metric.column()) {
                Some(idx) => metrics.push((metric, idx)),
                None => log::warn!("column {:?} not found, reading as 0", metric.column()),
            }
        }
        Ok(ColumnIndex {
            country,
            year,
            month,
            date,
            metrics,
        })
    }

    fn parse_row(&self, record: &StringRecord, row: usize) -> Result<EnergyRecord, RecordError> {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };
        let country = cell(Some(self.country))
            .ok_or(RecordError::MissingValue {
                row,
                column: COUNTRY_COLUMN,
            })?
            .to_string();

        let date = match cell(self.date) {
            Some(raw) => Some(parse_dataset_date(raw).map_err(|e| RecordError::InvalidValue {
                row,
                column: DATE_COLUMN,
                value: e.to_string(),
            })?),
            None => None,
        };

        let year = match (cell(self.year), date) {
            (Some(raw), _) => raw.parse::<i32>().map_err(|_| RecordError::InvalidValue {
                row,
                column: YEAR_COLUMN,
                value: raw.to_string(),
            })?,
            (None, Some(d)) => d.year(),
            (None, None) => {
                return Err(RecordError::MissingValue {
                    row,
                    column: YEAR_COLUMN,
                })
            }
        };

        let month = match (cell(self.month), date) {
            (Some(raw), _) => raw.parse::<Month>().map_err(|_| RecordError::InvalidValue {
                row,
                column: MONTH_COLUMN,
                value: raw.to_string(),
            })?,
            (None, Some(d)) => Month::from_date(&d),
            (None, None) => {
                return Err(RecordError::MissingValue {
                    row,
                    column: MONTH_COLUMN,
                })
            }
        };

        let mut metrics = EnergyMetrics::default();
        for (metric, idx) in &self.metrics {
            if let Some(raw) = cell(Some(*idx)) {
                // NaN or infinity would poison every mean it reaches
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| RecordError::InvalidValue {
                        row,
                        column: metric.column(),
                        value: raw.to_string(),
                    })?;
                metrics.set(*metric, value);
            }
        }

        Ok(EnergyRecord {
            country,
            year,
            month,
            metrics,
        })
    }
}

/// Errors produced while loading records from CSV.
#[derive(Debug)]
pub enum RecordError {
    Csv(csv::Error),
    MissingColumn(&'static str),
    MissingValue { row: usize, column: &'static str },
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Csv(e) => write!(f, "CSV error: {e}"),
            RecordError::MissingColumn(column) => write!(f, "missing column {column:?}"),
            RecordError::MissingValue { row, column } => {
                write!(f, "row {row}: missing value for {column:?}")
            }
            RecordError::InvalidValue { row, column, value } => {
                write!(f, "row {row}: invalid value for {column:?}: {value}")
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Csv(e) => Some(e),
            _ => None,
        }
    }
}
