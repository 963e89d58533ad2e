//! Aggregation engine for per-country energy observations.
//!
//! This crate turns an in-memory snapshot of records into the forms the
//! dashboard charts need: filtered subsets, month-of-year means, per-metric
//! summaries, country totals and the bubble-map scales derived from them.
//! Every function here is pure; nothing is cached between calls.

pub mod bubbles;
pub mod country;
pub mod filter;
pub mod kpi;
pub mod monthly;
pub mod options;
pub mod report;
pub mod scale;
pub mod series;
pub mod summary;

pub use country::{aggregate_by_country, CountryTotals};
pub use filter::{filter, FilterCriteria};
pub use monthly::{aggregate_by_month, MonthlyAggregate};
pub use scale::{build_scales, BubbleScale, Rgb};
pub use summary::{summarize, summarize_named, MetricSummary, PercentChange};
