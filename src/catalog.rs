use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::component::Component;

/// Read-only hardware reference catalog, keyed by component name.
///
/// Built once from static reference data and never mutated afterwards: the
/// public surface is lookup and iteration only, so a shared `&Catalog` is
/// safe across any number of concurrent calculations. Insertion order is
/// preserved. Duplicate names overwrite earlier entries (last-write-wins),
/// matching the catalog-source contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    components: IndexMap<String, Component>,
}

impl Catalog {
    /// Build a catalog from reference records. Later duplicates of a name
    /// silently replace earlier ones.
    pub fn from_components<I>(components: I) -> Self
    where
        I: IntoIterator<Item = Component>,
    {
        let mut map = IndexMap::new();
        for comp in components {
            map.insert(comp.name.clone(), comp);
        }
        Self { components: map }
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }
}

impl FromIterator<Component> for Catalog {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self::from_components(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(name: &str, embodied: f64) -> Component {
        Component {
            name: name.to_string(),
            embodied_carbon: embodied,
            lifetime_years: 5.0,
            power_consumption: 100.0,
            idle_power: 10.0,
        }
    }

    #[test]
    fn lookup_by_name() {
        let catalog = Catalog::from_components([comp("CPU_EPYC", 80.0), comp("GPU_A100", 1500.0)]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("GPU_A100"));
        assert!(catalog.get("TPU_V4").is_none());
        assert_eq!(catalog.get("CPU_EPYC").unwrap().embodied_carbon, 80.0);
    }

    #[test]
    fn duplicate_names_last_write_wins() {
        let catalog = Catalog::from_components([comp("GPU_A100", 1500.0), comp("GPU_A100", 1800.0)]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("GPU_A100").unwrap().embodied_carbon, 1800.0);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let catalog: Catalog = ["B_1", "A_1", "C_1"]
            .into_iter()
            .map(|n| comp(n, 1.0))
            .collect();
        let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B_1", "A_1", "C_1"]);
    }
}
