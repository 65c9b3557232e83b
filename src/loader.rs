use std::fs::File;
use std::path::Path;

use indexmap::IndexMap;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::component::Component;
use crate::workload::{UsageEntry, Workload};

/// Errors at the ingestion boundary. Malformed reference data is caught
/// here; the calculator itself assumes well-formed values.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed workload YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load a component catalog from a CSV file with columns
/// `name, embodied_carbon, lifetime_years, power_consumption, idle_power`.
/// `idle_power` defaults to 0 when the column is absent. Duplicate names
/// keep the last row seen.
pub fn load_catalog_csv(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut components = Vec::new();
    for row in reader.deserialize() {
        let comp: Component = row?;
        components.push(comp);
    }
    Ok(Catalog::from_components(components))
}

/// Load named workloads from a YAML file shaped as
/// `workload name -> { component name -> usage }`, where each usage is
/// either a `[hours, utilization]` pair or a `{hours, utilization}` record.
/// Scenario and entry order follow the file.
pub fn load_workloads_yaml(path: impl AsRef<Path>) -> Result<Vec<Workload>, LoadError> {
    let file = File::open(path)?;
    let scenarios: IndexMap<String, IndexMap<String, UsageEntry>> =
        serde_yaml::from_reader(file)?;
    Ok(scenarios
        .into_iter()
        .map(|(name, usage)| Workload::new(name, usage))
        .collect())
}
