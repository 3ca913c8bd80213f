use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::dataset::{Dataset, LaunchRecord, Outcome};
use super::error::DataLoadError;

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [
    LAUNCH_SITE_COLUMN,
    PAYLOAD_MASS_COLUMN,
    CLASS_COLUMN,
    BOOSTER_CATEGORY_COLUMN,
];

#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(
        default,
        rename = "Flight Number",
        deserialize_with = "csv::invalid_option"
    )]
    flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: String,
    #[serde(rename = "class")]
    class: String,
    #[serde(default, rename = "Booster Version")]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl RawLaunchRow {
    fn into_record(self, row: usize) -> Result<LaunchRecord, DataLoadError> {
        if self.site.is_empty() {
            return Err(DataLoadError::EmptySite { row });
        }

        let payload_mass_kg = self
            .payload_mass_kg
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or_else(|| DataLoadError::InvalidPayload {
                row,
                value: self.payload_mass_kg.clone(),
            })?;

        let outcome = self
            .class
            .parse::<f64>()
            .ok()
            .and_then(Outcome::from_class)
            .ok_or_else(|| DataLoadError::InvalidClass {
                row,
                value: self.class.clone(),
            })?;

        Ok(LaunchRecord {
            flight_number: self.flight_number,
            site: self.site,
            payload_mass_kg,
            outcome,
            booster_version: self.booster_version.filter(|value| !value.is_empty()),
            booster_version_category: self.booster_version_category,
        })
    }
}

pub fn load_dataset(path: &Path) -> Result<Dataset, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_dataset(file)?;
    info!(
        path = %path.display(),
        records = dataset.len(),
        sites = dataset.sites().len(),
        "loaded launch records"
    );
    Ok(dataset)
}

/// Parses launch records from CSV with a header row. Columns beyond the
/// required ones are ignored.
pub fn parse_dataset<R: Read>(reader: R) -> Result<Dataset, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DataLoadError::MissingColumn(column));
        }
    }
    debug!(columns = headers.len(), "launch data header accepted");

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawLaunchRow>().enumerate() {
        records.push(row?.into_record(index + 1)?);
    }

    Ok(Dataset::new(records))
}
