use freightcast_core::error::{FreightError, Result};
use freightcast_core::models::HistoricalQuote;
use std::fs;
use std::path::Path;

/// Load the historical quote sheet exported as a JSON array.
///
/// Unlike the record file, a broken history file is a startup error: it is
/// reference data and silently training without it would skew every price.
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<Vec<HistoricalQuote>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let quotes: Vec<HistoricalQuote> = serde_json::from_str(&content).map_err(|e| {
        FreightError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), rows = quotes.len(), "Loaded historical quotes");
    Ok(quotes)
}
