use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::CarbonError;

/// Hardware reference record, one per catalog entry.
///
/// `name` doubles as the catalog key and encodes a category as its prefix
/// before the first `_` (e.g. `GPU_A100` -> `GPU`). Carbon is kg CO2-eq,
/// power is Watts. Catalog data is expected to satisfy
/// `idle_power <= power_consumption`; that is the ingestion boundary's
/// contract and is not re-checked inside the formulas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    /// Total lifecycle embodied carbon attributed to manufacturing this unit.
    pub embodied_carbon: f64,
    /// Expected service life in years.
    pub lifetime_years: f64,
    /// Power draw at 100% utilization, Watts.
    pub power_consumption: f64,
    /// Power draw at 0% utilization, Watts.
    #[serde(default)]
    pub idle_power: f64,
}

// Identity is the catalog key; carbon results are keyed by &Component.
impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Component {}

impl Hash for Component {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Component {
    /// Grouping label: substring before the first `_`, or the whole name
    /// when there is no delimiter. Reporting-only, never used in a formula.
    pub fn category(&self) -> &str {
        self.name.split('_').next().unwrap_or(&self.name)
    }

    /// Allocate embodied carbon proportionally to the fraction of total
    /// expected operating hours consumed.
    ///
    /// `annual_usage_hours` is the assumed maximum yearly operating hours
    /// against which `lifetime_years` was defined (8760 for 24/7 duty).
    /// `usage_hours` beyond the lifetime budget is not clamped: allocating
    /// more than 100% of the embodied carbon is the caller's to interpret.
    pub fn compute_allocated_embodied(
        &self,
        usage_hours: f64,
        annual_usage_hours: f64,
    ) -> Result<f64, CarbonError> {
        if self.lifetime_years <= 0.0 {
            return Err(CarbonError::NonPositiveLifetime(self.lifetime_years));
        }
        if annual_usage_hours <= 0.0 {
            return Err(CarbonError::NonPositiveAnnualHours(annual_usage_hours));
        }
        let total_lifetime_hours = self.lifetime_years * annual_usage_hours;
        Ok(usage_hours / total_lifetime_hours * self.embodied_carbon)
    }

    /// Operational carbon for a usage window: power draw interpolated
    /// linearly between idle and full load by `utilization_percent`,
    /// converted to kWh, then scaled by `electricity_carbon_density`
    /// (kg CO2-eq per kWh).
    ///
    /// Utilization outside [0,100] is accepted verbatim and extrapolates
    /// along the same line.
    pub fn compute_operational(
        &self,
        usage_hours: f64,
        utilization_percent: f64,
        electricity_carbon_density: f64,
    ) -> f64 {
        let u = utilization_percent / 100.0;
        let power_w = u * (self.power_consumption - self.idle_power) + self.idle_power;
        let energy_kwh = power_w * usage_hours / 1000.0;
        energy_kwh * electricity_carbon_density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpu_a100() -> Component {
        Component {
            name: "GPU_A100".to_string(),
            embodied_carbon: 1500.0,
            lifetime_years: 5.0,
            power_consumption: 400.0,
            idle_power: 50.0,
        }
    }

    #[test]
    fn category_is_prefix_before_first_underscore() {
        assert_eq!(gpu_a100().category(), "GPU");

        let nic = Component {
            name: "NIC_ConnectX6".to_string(),
            embodied_carbon: 30.0,
            lifetime_years: 5.0,
            power_consumption: 25.0,
            idle_power: 10.0,
        };
        assert_eq!(nic.category(), "NIC");

        let bare = Component {
            name: "Disk".to_string(),
            embodied_carbon: 50.0,
            lifetime_years: 4.0,
            power_consumption: 10.0,
            idle_power: 2.0,
        };
        assert_eq!(bare.category(), "Disk");
    }

    #[test]
    fn allocated_embodied_worked_example() {
        // 40h of a 5y component at 8760 h/y: 40 / 43800 * 1500.
        let got = gpu_a100().compute_allocated_embodied(40.0, 8760.0).unwrap();
        assert!((got - 1.369863).abs() < 1e-4);
    }

    #[test]
    fn allocated_embodied_is_zero_at_zero_hours() {
        let got = gpu_a100().compute_allocated_embodied(0.0, 8760.0).unwrap();
        assert_eq!(got, 0.0);
    }

    #[test]
    fn allocated_embodied_is_linear_in_hours_and_carbon() {
        let comp = gpu_a100();
        let one = comp.compute_allocated_embodied(10.0, 8760.0).unwrap();
        let three = comp.compute_allocated_embodied(30.0, 8760.0).unwrap();
        assert!((three - 3.0 * one).abs() < 1e-12);

        let mut doubled = comp.clone();
        doubled.embodied_carbon *= 2.0;
        let got = doubled.compute_allocated_embodied(10.0, 8760.0).unwrap();
        assert!((got - 2.0 * one).abs() < 1e-12);
    }

    #[test]
    fn allocated_embodied_past_lifetime_is_not_clamped() {
        // Degenerate input: usage beyond the lifetime budget over-allocates
        // past 100% of the embodied carbon. Deliberately unclamped.
        let comp = gpu_a100();
        let lifetime_hours = comp.lifetime_years * 8760.0;
        let got = comp
            .compute_allocated_embodied(2.0 * lifetime_hours, 8760.0)
            .unwrap();
        assert!((got - 2.0 * comp.embodied_carbon).abs() < 1e-9);
    }

    #[test]
    fn allocated_embodied_rejects_non_positive_lifetime() {
        let mut comp = gpu_a100();
        comp.lifetime_years = 0.0;
        assert!(matches!(
            comp.compute_allocated_embodied(10.0, 8760.0),
            Err(CarbonError::NonPositiveLifetime(_))
        ));

        comp.lifetime_years = -1.0;
        assert!(comp.compute_allocated_embodied(10.0, 8760.0).is_err());
    }

    #[test]
    fn allocated_embodied_rejects_non_positive_annual_hours() {
        assert!(matches!(
            gpu_a100().compute_allocated_embodied(10.0, 0.0),
            Err(CarbonError::NonPositiveAnnualHours(_))
        ));
    }

    #[test]
    fn operational_at_zero_utilization_is_idle_power() {
        // 0%: draw is exactly idle_power.
        let got = gpu_a100().compute_operational(40.0, 0.0, 0.68);
        assert!((got - 50.0 * 40.0 / 1000.0 * 0.68).abs() < 1e-12);
        assert!((got - 1.36).abs() < 1e-12);
    }

    #[test]
    fn operational_at_full_utilization_is_full_power() {
        // 100%: draw is exactly power_consumption.
        let got = gpu_a100().compute_operational(40.0, 100.0, 0.68);
        assert!((got - 400.0 * 40.0 / 1000.0 * 0.68).abs() < 1e-12);
        assert!((got - 10.88).abs() < 1e-12);
    }

    #[test]
    fn operational_interpolates_between_idle_and_full() {
        let comp = gpu_a100();
        let half = comp.compute_operational(10.0, 50.0, 1.0);
        let mid_power_w = 0.5 * (400.0 - 50.0) + 50.0;
        assert!((half - mid_power_w * 10.0 / 1000.0).abs() < 1e-12);
    }

    #[test]
    fn operational_extrapolates_outside_percent_range() {
        // Degenerate input: utilization outside [0,100] is taken verbatim.
        let comp = gpu_a100();
        let over = comp.compute_operational(10.0, 150.0, 1.0);
        let power_w = 1.5 * (400.0 - 50.0) + 50.0;
        assert!((over - power_w * 10.0 / 1000.0).abs() < 1e-12);

        let under = comp.compute_operational(10.0, -10.0, 1.0);
        assert!(under < comp.compute_operational(10.0, 0.0, 1.0));
    }
}
