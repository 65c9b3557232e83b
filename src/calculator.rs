use indexmap::IndexMap;
use tracing::warn;

use crate::catalog::Catalog;
use crate::component::Component;
use crate::error::CarbonError;
use crate::workload::Workload;

/// Default normalization constant: hours per year at 24/7 operation.
pub const DEFAULT_ANNUAL_USAGE_HOURS: f64 = 8760.0;

/// Applies the per-component carbon formulas across a workload.
///
/// Pure configuration over a borrowed catalog: electricity carbon density
/// (kg CO2-eq per kWh) and the annual-usage-hours normalization constant,
/// both fixed at construction. Every call recomputes from scratch and
/// mutates nothing, so one catalog can back several calculators with
/// different densities.
///
/// Error policy is deliberately asymmetric: the per-component methods
/// fail outright on a usage entry whose name is missing from the catalog,
/// while [`calculate_totals`] skips such entries with a warning and keeps
/// accumulating. Callers that want strict totals should go through
/// [`calculate_totals_per_component`].
///
/// [`calculate_totals`]: CarbonCalculator::calculate_totals
/// [`calculate_totals_per_component`]: CarbonCalculator::calculate_totals_per_component
#[derive(Debug, Clone)]
pub struct CarbonCalculator<'a> {
    catalog: &'a Catalog,
    electricity_carbon_density: f64,
    annual_usage_hours: f64,
}

impl<'a> CarbonCalculator<'a> {
    pub fn new(catalog: &'a Catalog, electricity_carbon_density: f64) -> Self {
        Self {
            catalog,
            electricity_carbon_density,
            annual_usage_hours: DEFAULT_ANNUAL_USAGE_HOURS,
        }
    }

    /// Override the assumed maximum yearly operating hours that
    /// `lifetime_years` was defined against.
    pub fn with_annual_usage_hours(mut self, annual_usage_hours: f64) -> Self {
        self.annual_usage_hours = annual_usage_hours;
        self
    }

    /// Allocated embodied carbon per component, in workload order.
    /// Fails on the first usage entry missing from the catalog.
    pub fn embodied_per_component(
        &self,
        workload: &Workload,
    ) -> Result<IndexMap<&'a Component, f64>, CarbonError> {
        let mut out = IndexMap::with_capacity(workload.usage.len());
        for (name, entry) in &workload.usage {
            let comp = self.lookup(name)?;
            let embodied = comp.compute_allocated_embodied(entry.hours, self.annual_usage_hours)?;
            out.insert(comp, embodied);
        }
        Ok(out)
    }

    /// Operational carbon per component, in workload order.
    /// Fails on the first usage entry missing from the catalog.
    pub fn operational_per_component(
        &self,
        workload: &Workload,
    ) -> Result<IndexMap<&'a Component, f64>, CarbonError> {
        let mut out = IndexMap::with_capacity(workload.usage.len());
        for (name, entry) in &workload.usage {
            let comp = self.lookup(name)?;
            let operational = comp.compute_operational(
                entry.hours,
                entry.utilization,
                self.electricity_carbon_density,
            );
            out.insert(comp, operational);
        }
        Ok(out)
    }

    /// Embodied + operational per component. Key sets of the two underlying
    /// maps coincide because both come from the same workload.
    pub fn calculate_totals_per_component(
        &self,
        workload: &Workload,
    ) -> Result<IndexMap<&'a Component, f64>, CarbonError> {
        let embodied = self.embodied_per_component(workload)?;
        let operational = self.operational_per_component(workload)?;
        Ok(embodied
            .into_iter()
            .map(|(comp, e)| (comp, e + operational[comp]))
            .collect())
    }

    /// Aggregate `(total_embodied, total_operational)` across the workload.
    ///
    /// Unlike the per-component methods, an unknown component name is not
    /// fatal here: the entry is skipped with a warning and accumulation
    /// continues over the rest. The lenient-vs-strict split between this
    /// method and the per-component ones is intentional.
    pub fn calculate_totals(&self, workload: &Workload) -> Result<(f64, f64), CarbonError> {
        let mut total_embodied = 0.0;
        let mut total_operational = 0.0;
        for (name, entry) in &workload.usage {
            let Some(comp) = self.catalog.get(name) else {
                warn!(component = %name, "component not found in catalog, skipping");
                continue;
            };
            total_embodied += comp.compute_allocated_embodied(entry.hours, self.annual_usage_hours)?;
            total_operational += comp.compute_operational(
                entry.hours,
                entry.utilization,
                self.electricity_carbon_density,
            );
        }
        Ok((total_embodied, total_operational))
    }

    fn lookup(&self, name: &str) -> Result<&'a Component, CarbonError> {
        self.catalog
            .get(name)
            .ok_or_else(|| CarbonError::UnknownComponent(name.to_string()))
    }
}
