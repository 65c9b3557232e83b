use thiserror::Error;

/// Errors for catalog lookups and degenerate allocation parameters.
#[derive(Debug, Error)]
pub enum CarbonError {
    /// A workload names a component the catalog does not carry.
    #[error("component '{0}' not found in catalog")]
    UnknownComponent(String),
    /// Lifetime must be positive or the allocation denominator collapses.
    #[error("lifetime_years must be positive, got {0}")]
    NonPositiveLifetime(f64),
    /// Annual usage hours must be positive or the allocation denominator collapses.
    #[error("annual_usage_hours must be positive, got {0}")]
    NonPositiveAnnualHours(f64),
}
