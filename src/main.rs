use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use workload_carbon::{load_catalog_csv, load_workloads_yaml, CarbonCalculator};

/// Estimate the carbon footprint of computing workloads from a hardware
/// catalog and per-component usage profiles.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV file with component carbon reference data.
    #[arg(long, default_value = "component_carbon_data.csv")]
    csv_path: String,

    /// Electricity carbon density, kg CO2-eq per kWh.
    #[arg(long, default_value_t = 0.68)]
    electricity_carbon_density: f64,

    /// YAML file with named workload usage scenarios.
    #[arg(long, default_value = "example_usage.yaml")]
    usage: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let catalog = load_catalog_csv(&args.csv_path)?;
    let workloads = load_workloads_yaml(&args.usage)?;
    let calculator = CarbonCalculator::new(&catalog, args.electricity_carbon_density);

    for workload in &workloads {
        let (embodied, operational) = calculator.calculate_totals(workload)?;
        println!("Carbon footprint for {}:", workload.name);
        println!("  Total allocated embodied carbon: {embodied:.2} kg CO2-eq");
        println!("  Total operational carbon:        {operational:.2} kg CO2-eq");

        // Breakdown uses the strict lookups; a workload naming unknown
        // components still gets its (lenient) totals above.
        match calculator.calculate_totals_per_component(workload) {
            Ok(per_component) => {
                for (comp, total) in &per_component {
                    println!(
                        "    {:<20} [{}] {total:.4} kg CO2-eq",
                        comp.name,
                        comp.category(),
                    );
                }
            }
            Err(err) => println!("  (no per-component breakdown: {err})"),
        }
    }

    Ok(())
}
