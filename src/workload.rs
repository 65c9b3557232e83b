use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Usage of one component inside a workload: hours in service and the
/// average utilization over that window, as a 0-100 percentage.
///
/// Workload sources write this either as a `[hours, utilization]` pair or
/// as a `{hours, utilization}` record; both deserialize to the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "UsageSpec")]
pub struct UsageEntry {
    pub hours: f64,
    pub utilization: f64,
}

impl UsageEntry {
    pub fn new(hours: f64, utilization: f64) -> Self {
        Self { hours, utilization }
    }
}

/// The two accepted external shapes for a usage entry.
#[derive(Deserialize)]
#[serde(untagged)]
enum UsageSpec {
    Pair(f64, f64),
    Record { hours: f64, utilization: f64 },
}

impl From<UsageSpec> for UsageEntry {
    fn from(spec: UsageSpec) -> Self {
        match spec {
            UsageSpec::Pair(hours, utilization) => UsageEntry { hours, utilization },
            UsageSpec::Record { hours, utilization } => UsageEntry { hours, utilization },
        }
    }
}

/// A named usage scenario: component name -> usage entry, in declaration
/// order. Immutable after construction; the name is reporting-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workload {
    pub name: String,
    pub usage: IndexMap<String, UsageEntry>,
}

impl Workload {
    pub fn new(name: impl Into<String>, usage: IndexMap<String, UsageEntry>) -> Self {
        Self {
            name: name.into(),
            usage,
        }
    }
}
