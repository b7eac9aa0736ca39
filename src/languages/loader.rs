use crate::models::CountryRecord;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Load the country list from a JSON file holding an array of records
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<CountryRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read country data: {}", path.display()))?;

    let records = parse_records(&content)
        .with_context(|| format!("Failed to parse country data: {}", path.display()))?;

    debug!(path = %path.display(), count = records.len(), "Loaded country records");
    Ok(records)
}

/// Parse a JSON array of `{"country": .., "languages": [..]}` objects
pub fn parse_records(json: &str) -> Result<Vec<CountryRecord>> {
    let records: Vec<CountryRecord> = serde_json::from_str(json)?;
    Ok(records)
}

/// The five-country sample shipped in `assets/countries.json`
pub fn sample_records() -> Vec<CountryRecord> {
    vec![
        CountryRecord::new("US", ["en"]),
        CountryRecord::new("BE", ["nl", "fr", "de"]),
        CountryRecord::new("NL", ["nl"]),
        CountryRecord::new("DE", ["de"]),
        CountryRecord::new("ES", ["es"]),
    ]
}
