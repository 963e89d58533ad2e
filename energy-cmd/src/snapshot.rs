//! Loading the record snapshot that every view works from.

use anyhow::Context;
use energy_core::record::EnergyRecord;
use log::info;

/// Read and parse the dataset CSV at `path`.
pub fn load_snapshot(path: &str) -> anyhow::Result<Vec<EnergyRecord>> {
    if !std::path::Path::new(path).exists() {
        anyhow::bail!("{path} not found");
    }
    let csv_data =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let records = parse_snapshot(&csv_data).with_context(|| format!("Failed to parse {path}"))?;
    info!("Loaded {} records from {}", records.len(), path);
    Ok(records)
}

/// Parse an in-memory dataset CSV.
pub fn parse_snapshot(csv_data: &str) -> anyhow::Result<Vec<EnergyRecord>> {
    Ok(EnergyRecord::parse_energy_csv(csv_data)?)
}
