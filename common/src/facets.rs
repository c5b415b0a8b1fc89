//! Facet catalog derived from the reference datasets.
//!
//! The catalog is a pure function of the four reference lists; it is rebuilt
//! from scratch whenever any of them changes and replaces the previous
//! catalog wholesale (no incremental merge).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter::SelectionState;
use crate::reference::ReferenceEntity;

/// The closed set of filterable product dimensions. Wire names match the
/// upstream catalog service field names, which is why `Categories` is the odd
/// one out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FacetKey {
    #[serde(rename = "price")]
    Price,
    Categories,
    #[serde(rename = "collection")]
    Collection,
    #[serde(rename = "skillLevel")]
    SkillLevel,
    #[serde(rename = "designer")]
    Designer,
}

impl FacetKey {
    pub const ALL: [FacetKey; 5] = [
        FacetKey::Price,
        FacetKey::Categories,
        FacetKey::Collection,
        FacetKey::SkillLevel,
        FacetKey::Designer,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FacetKey::Price => "Price",
            FacetKey::Categories => "Categories",
            FacetKey::Collection => "Collection",
            FacetKey::SkillLevel => "Skill Level",
            FacetKey::Designer => "Designer",
        }
    }
}

/// One selectable option within a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub label: String,
    pub value: String,
}

impl FacetOption {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Every facet key mapped to its ordered option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetCatalog {
    options: BTreeMap<FacetKey, Vec<FacetOption>>,
}

/// The fixed price bands offered by the price facet.
pub fn price_band_options() -> Vec<FacetOption> {
    vec![
        FacetOption::new("$0-$100", "0-100"),
        FacetOption::new("$101-$500", "101-500"),
        FacetOption::new("$501-$1000", "501-1000"),
        FacetOption::new("$1000+", "1000+"),
    ]
}

fn reference_options(entities: &[ReferenceEntity]) -> Vec<FacetOption> {
    // insertion order of the upstream response is preserved, no sorting
    entities
        .iter()
        .map(|entity| FacetOption::new(entity.name.clone(), entity._id.clone()))
        .collect()
}

impl FacetCatalog {
    /// Build the catalog from the four reference lists. Empty lists are
    /// valid and simply yield facets with zero options.
    pub fn build(
        categories: &[ReferenceEntity],
        collections: &[ReferenceEntity],
        skill_levels: &[ReferenceEntity],
        designers: &[ReferenceEntity],
    ) -> Self {
        let mut options = BTreeMap::new();
        options.insert(FacetKey::Price, price_band_options());
        options.insert(FacetKey::Categories, reference_options(categories));
        options.insert(FacetKey::Collection, reference_options(collections));
        options.insert(FacetKey::SkillLevel, reference_options(skill_levels));
        options.insert(FacetKey::Designer, reference_options(designers));
        Self { options }
    }

    pub fn options(&self, key: FacetKey) -> &[FacetOption] {
        // every key is inserted by build(), so the lookup cannot miss
        self.options.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The selection to (re)initialize with whenever the catalog changes:
    /// every facet key present, nothing selected.
    pub fn default_selection(&self) -> SelectionState {
        SelectionState::default()
    }
}

impl Default for FacetCatalog {
    fn default() -> Self {
        Self::build(&[], &[], &[], &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(pairs: &[(&str, &str)]) -> Vec<ReferenceEntity> {
        pairs
            .iter()
            .map(|(id, name)| ReferenceEntity::new(*id, *name))
            .collect()
    }

    #[test]
    fn price_bands_are_fixed() {
        let catalog = FacetCatalog::build(&[], &[], &[], &[]);
        let bands: Vec<_> = catalog
            .options(FacetKey::Price)
            .iter()
            .map(|o| (o.label.as_str(), o.value.as_str()))
            .collect();
        assert_eq!(
            bands,
            vec![
                ("$0-$100", "0-100"),
                ("$101-$500", "101-500"),
                ("$501-$1000", "501-1000"),
                ("$1000+", "1000+"),
            ]
        );
    }

    #[test]
    fn reference_facets_preserve_order_and_mapping() {
        let categories = refs(&[("c2", "Starfighters"), ("c1", "Droids"), ("c3", "Dioramas")]);
        let catalog = FacetCatalog::build(&categories, &[], &[], &[]);
        let opts = catalog.options(FacetKey::Categories);
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[0].label, "Starfighters");
        assert_eq!(opts[0].value, "c2");
        assert_eq!(opts[1].value, "c1");
        assert_eq!(opts[2].value, "c3");
    }

    #[test]
    fn empty_reference_lists_yield_zero_options() {
        let catalog = FacetCatalog::build(&[], &[], &[], &[]);
        for key in [
            FacetKey::Categories,
            FacetKey::Collection,
            FacetKey::SkillLevel,
            FacetKey::Designer,
        ] {
            assert!(catalog.options(key).is_empty());
        }
    }

    #[test]
    fn default_selection_covers_every_key_with_empty_sets() {
        let catalog = FacetCatalog::build(&refs(&[("c1", "Droids")]), &[], &[], &[]);
        let selection = catalog.default_selection();
        assert!(selection.is_empty());
        for key in FacetKey::ALL {
            assert!(selection.selected(key).is_empty());
        }
    }
}
