//! Load assumption sets and scenario batches from disk

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};

use super::{AssumptionSet, ScenarioParams};
use crate::error::Result;

/// Load a full `AssumptionSet` from a JSON file
///
/// Missing sections fall back to their defaults.
pub fn load_assumptions<P: AsRef<Path>>(path: P) -> Result<AssumptionSet> {
    let path = path.as_ref();
    debug!("Reading assumptions from {}", path.display());
    let file = File::open(path)?;
    let assumptions = serde_json::from_reader(BufReader::new(file))?;
    Ok(assumptions)
}

/// Load scenario rows from a CSV file with a header row
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioParams>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let scenarios = load_scenarios_from_reader(file)?;
    info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenario rows from any CSV reader
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<ScenarioParams>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for record in rdr.deserialize() {
        let params: ScenarioParams = record?;
        scenarios.push(params);
    }
    Ok(scenarios)
}
