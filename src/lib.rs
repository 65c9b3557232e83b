#![forbid(unsafe_code)]

//! Carbon accounting for computing workloads.
//!
//! A [`Catalog`] holds immutable hardware reference records ([`Component`]:
//! embodied carbon, expected lifetime, power profile). A [`Workload`] names
//! how many hours and at what utilization each component was used. The
//! [`CarbonCalculator`] allocates each component's lifetime embodied carbon
//! to the usage window and converts power draw into operational carbon,
//! producing per-component maps and aggregate totals.

pub mod calculator;
pub mod catalog;
pub mod component;
pub mod error;
pub mod loader;
pub mod workload;

pub use calculator::CarbonCalculator;
pub use catalog::Catalog;
pub use component::Component;
pub use error::CarbonError;
pub use loader::{load_catalog_csv, load_workloads_yaml, LoadError};
pub use workload::{UsageEntry, Workload};
