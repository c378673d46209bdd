use crate::data::load_ron_dir;
use crate::errors::DataError;
use crate::repository::SpeciesRepository;
use schema::{SpeciesData, SpeciesId};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Read-only species catalog. Templates are shared between every individual
/// of the species.
#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    by_id: HashMap<SpeciesId, Arc<SpeciesData>>,
    order: Vec<SpeciesId>,
}

impl SpeciesCatalog {
    pub fn new(species: Vec<SpeciesData>) -> Self {
        let mut catalog = Self::default();
        for data in species {
            if catalog.by_id.contains_key(&data.id) {
                log::warn!("duplicate species id {} ({}); keeping the first", data.id, data.name);
                continue;
            }
            catalog.order.push(data.id);
            catalog.by_id.insert(data.id, Arc::new(data));
        }
        catalog
    }

    /// Load every species file under `<data_dir>/species`.
    pub fn load(data_dir: &Path) -> Result<Self, DataError> {
        let species: Vec<SpeciesData> = load_ron_dir(&data_dir.join("species"))?;
        let catalog = Self::new(species);
        log::info!("species catalog ready with {} entries", catalog.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: SpeciesId) -> Result<Arc<SpeciesData>, DataError> {
        self.find_by_id(id).ok_or(DataError::SpeciesNotFound { id })
    }

    pub fn get_by_name(&self, name: &str) -> Result<Arc<SpeciesData>, DataError> {
        self.find_by_name(name)
            .ok_or_else(|| DataError::SpeciesNameNotFound(name.to_string()))
    }
}

impl SpeciesRepository for SpeciesCatalog {
    fn find_by_id(&self, id: SpeciesId) -> Option<Arc<SpeciesData>> {
        self.by_id.get(&id).cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<Arc<SpeciesData>> {
        self.by_id
            .values()
            .find(|species| species.name == name)
            .cloned()
    }

    fn find_all(&self) -> Vec<Arc<SpeciesData>> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::{flamkip, springleaf};
    use std::path::PathBuf;

    fn catalog() -> SpeciesCatalog {
        SpeciesCatalog::new(vec![(*springleaf()).clone(), (*flamkip()).clone()])
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let catalog = catalog();
        assert_eq!(catalog.get(4).unwrap().name, "Flamkip");
        assert_eq!(catalog.get_by_name("Springleaf").unwrap().id, 1);
        assert!(matches!(catalog.get(99), Err(DataError::SpeciesNotFound { id: 99 })));
        assert!(catalog.find_by_name("springleaf").is_none());
    }

    #[test]
    fn test_templates_are_shared() {
        let catalog = catalog();
        let first = catalog.get(1).unwrap();
        let second = catalog.get(1).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_find_all_keeps_load_order() {
        let names: Vec<String> = catalog()
            .find_all()
            .iter()
            .map(|species| species.name.clone())
            .collect();
        assert_eq!(names, vec!["Springleaf", "Flamkip"]);
    }

    #[test]
    fn test_bundled_species_data_loads() {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
        let catalog = SpeciesCatalog::load(&data_dir).unwrap();

        assert_eq!(catalog.len(), 6);
        let aquamy = catalog.get_by_name("Aquamy").unwrap();
        assert_eq!(aquamy.id, 7);
        assert_eq!(aquamy.base_stats.max_hp, 55);
        assert_eq!(aquamy.growth.sp_attack, 12.0);
    }
}
