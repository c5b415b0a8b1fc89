//! Selection state and the pure product filter evaluator.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::facets::FacetKey;
use crate::product::Product;

/// A price sub-range option within the price facet, parsed from a band token.
///
/// Bounded bands (`"min-max"`) are inclusive at both ends. The open-ended
/// band (`"min+"`) is exclusive at `min`, so a product priced exactly 1000
/// matches neither `"501-1000"`'s upper neighbor nor `"1000+"`. The asymmetry
/// is inherited behavior that downstream consumers rely on; do not "fix" it
/// here without a stakeholder decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceBand {
    Bounded { min: f64, max: f64 },
    Open { min: f64 },
}

impl PriceBand {
    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceBand::Bounded { min, max } => price >= *min && price <= *max,
            PriceBand::Open { min } => price > *min,
        }
    }
}

/// Malformed band tokens are rejected when the selection is constructed,
/// never silently mis-evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BandParseError {
    Empty,
    MissingSeparator(String),
    InvalidBound(String),
}

impl std::fmt::Display for BandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty price band token"),
            Self::MissingSeparator(token) => {
                write!(f, "Price band {:?} has no '-' or trailing '+'", token)
            }
            Self::InvalidBound(bound) => {
                write!(f, "Price band bound {:?} is not a number", bound)
            }
        }
    }
}

impl std::error::Error for BandParseError {}

impl FromStr for PriceBand {
    type Err = BandParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.is_empty() {
            return Err(BandParseError::Empty);
        }
        if let Some(min) = token.strip_suffix('+') {
            let min = min
                .parse::<f64>()
                .map_err(|_| BandParseError::InvalidBound(min.to_string()))?;
            return Ok(PriceBand::Open { min });
        }
        let Some((min, max)) = token.split_once('-') else {
            return Err(BandParseError::MissingSeparator(token.to_string()));
        };
        let min = min
            .parse::<f64>()
            .map_err(|_| BandParseError::InvalidBound(min.to_string()))?;
        let max = max
            .parse::<f64>()
            .map_err(|_| BandParseError::InvalidBound(max.to_string()))?;
        Ok(PriceBand::Bounded { min, max })
    }
}

static EMPTY_SET: BTreeSet<String> = BTreeSet::new();

/// The user's current choices, one (possibly empty) value set per facet key.
/// An empty set means "no constraint for this facet".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: BTreeMap<FacetKey, BTreeSet<String>>,
}

impl Default for SelectionState {
    fn default() -> Self {
        let selected = FacetKey::ALL
            .into_iter()
            .map(|key| (key, BTreeSet::new()))
            .collect();
        Self { selected }
    }
}

impl SelectionState {
    pub fn selected(&self, key: FacetKey) -> &BTreeSet<String> {
        self.selected.get(&key).unwrap_or(&EMPTY_SET)
    }

    pub fn is_selected(&self, key: FacetKey, value: &str) -> bool {
        self.selected(key).contains(value)
    }

    /// True when no facet constrains anything.
    pub fn is_empty(&self) -> bool {
        self.selected.values().all(BTreeSet::is_empty)
    }

    /// The single mutation primitive: remove `value` from the facet's set if
    /// present, insert it otherwise. Inserting a malformed band token under
    /// the price facet is rejected; removal always succeeds.
    pub fn toggle(&mut self, key: FacetKey, value: &str) -> Result<(), BandParseError> {
        let entry = self.selected.entry(key).or_default();
        if entry.contains(value) {
            entry.remove(value);
            return Ok(());
        }
        if key == FacetKey::Price {
            value.parse::<PriceBand>()?;
        }
        entry.insert(value.to_string());
        Ok(())
    }
}

fn matches_facet(product: &Product, key: FacetKey, values: &BTreeSet<String>) -> bool {
    match key {
        // tokens were validated on insertion; a token that still fails to
        // parse matches nothing rather than everything
        FacetKey::Price => values.iter().any(|token| {
            token
                .parse::<PriceBand>()
                .map(|band| band.contains(product.price))
                .unwrap_or(false)
        }),
        FacetKey::Categories => product
            .product_category
            .iter()
            .any(|category| values.contains(category)),
        FacetKey::Collection => matches_single(product.collection.as_deref(), values),
        FacetKey::SkillLevel => matches_single(product.skill_level.as_deref(), values),
        FacetKey::Designer => matches_single(product.designer.as_deref(), values),
    }
}

fn matches_single(value: Option<&str>, values: &BTreeSet<String>) -> bool {
    match value {
        Some(value) => values.contains(value),
        // a product without the dimension never matches a non-empty selection
        None => false,
    }
}

/// Evaluate the selection against a raw product list.
///
/// A product survives iff it satisfies every facet whose selected set is
/// non-empty (AND across facets); within a facet any one selected value
/// suffices (OR within a facet). The result is a stable subsequence of the
/// input, never a reordering.
pub fn filter_products(products: &[Product], selection: &SelectionState) -> Vec<Product> {
    // no filters active shows everything
    if selection.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| {
            FacetKey::ALL.into_iter().all(|key| {
                let values = selection.selected(key);
                values.is_empty() || matches_facet(product, key, values)
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            _id: id.to_string(),
            product_name: format!("Model {}", id),
            price,
            ..Default::default()
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p._id.as_str()).collect()
    }

    fn select(pairs: &[(FacetKey, &str)]) -> SelectionState {
        let mut selection = SelectionState::default();
        for (key, value) in pairs {
            selection.toggle(*key, value).unwrap();
        }
        selection
    }

    fn sample_products() -> Vec<Product> {
        vec![
            Product {
                product_category: vec!["cat1".to_string()],
                collection: Some("col1".to_string()),
                skill_level: Some("lvl1".to_string()),
                designer: Some("des1".to_string()),
                ..product("p1", 50.0)
            },
            Product {
                product_category: vec!["cat2".to_string()],
                collection: Some("col2".to_string()),
                ..product("p2", 500.0)
            },
            Product {
                product_category: vec!["cat1".to_string(), "cat2".to_string()],
                designer: Some("des2".to_string()),
                ..product("p3", 1500.0)
            },
        ]
    }

    #[test]
    fn empty_selection_is_identity() {
        let products = sample_products();
        let filtered = filter_products(&products, &SelectionState::default());
        assert_eq!(filtered, products);
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let products = vec![product("a", 10.0), product("b", 99.0), product("c", 40.0)];
        let selection = select(&[(FacetKey::Price, "0-100")]);
        assert_eq!(ids(&filter_products(&products, &selection)), vec!["a", "b", "c"]);
    }

    #[test]
    fn bounded_band_is_inclusive_at_both_ends() {
        let products = vec![product("at_min", 0.0), product("at_max", 100.0), product("above", 101.0)];
        let selection = select(&[(FacetKey::Price, "0-100")]);
        assert_eq!(ids(&filter_products(&products, &selection)), vec!["at_min", "at_max"]);
    }

    #[test]
    fn open_band_is_exclusive_at_its_minimum() {
        let products = vec![product("boundary", 1000.0), product("above", 1000.01)];
        let selection = select(&[(FacetKey::Price, "1000+")]);
        assert_eq!(ids(&filter_products(&products, &selection)), vec!["above"]);
    }

    #[test]
    fn or_within_facet_yields_supersets() {
        let products = sample_products();
        let both = select(&[(FacetKey::Price, "0-100"), (FacetKey::Price, "1000+")]);
        let low = select(&[(FacetKey::Price, "0-100")]);
        let high = select(&[(FacetKey::Price, "1000+")]);

        let both = filter_products(&products, &both);
        for item in filter_products(&products, &low)
            .iter()
            .chain(filter_products(&products, &high).iter())
        {
            assert!(both.contains(item));
        }
        assert_eq!(ids(&both), vec!["p1", "p3"]);
    }

    #[test]
    fn and_across_facets_composes() {
        let products = sample_products();
        let price_only = select(&[(FacetKey::Price, "101-500")]);
        let category_only = select(&[(FacetKey::Categories, "cat2")]);
        let combined = select(&[(FacetKey::Price, "101-500"), (FacetKey::Categories, "cat2")]);

        let sequential =
            filter_products(&filter_products(&products, &price_only), &category_only);
        assert_eq!(sequential, filter_products(&products, &combined));
        assert_eq!(ids(&sequential), vec!["p2"]);
    }

    #[test]
    fn adding_a_value_never_grows_the_result() {
        let products = sample_products();
        let mut selection = select(&[(FacetKey::Categories, "cat1")]);
        let before = filter_products(&products, &selection).len();
        selection.toggle(FacetKey::Designer, "des1").unwrap();
        let after = filter_products(&products, &selection).len();
        assert!(after <= before);
    }

    #[test]
    fn category_matches_on_non_empty_intersection() {
        let mut item = product("multi", 10.0);
        item.product_category = vec!["A".to_string(), "B".to_string()];
        let selection = select(&[(FacetKey::Categories, "B"), (FacetKey::Categories, "C")]);
        assert_eq!(filter_products(&[item], &selection).len(), 1);
    }

    #[test]
    fn absent_single_valued_dimension_never_matches() {
        let without_collection = product("bare", 10.0);
        let selection = select(&[(FacetKey::Collection, "col1")]);
        assert!(filter_products(&[without_collection], &selection).is_empty());
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut selection = select(&[(FacetKey::Categories, "cat1")]);
        let before = selection.clone();
        selection.toggle(FacetKey::Categories, "cat2").unwrap();
        assert!(selection.is_selected(FacetKey::Categories, "cat2"));
        selection.toggle(FacetKey::Categories, "cat2").unwrap();
        assert_eq!(selection, before);
    }

    #[test]
    fn toggle_rejects_malformed_band_tokens() {
        let mut selection = SelectionState::default();
        assert_eq!(
            selection.toggle(FacetKey::Price, "cheap"),
            Err(BandParseError::MissingSeparator("cheap".to_string()))
        );
        assert_eq!(
            selection.toggle(FacetKey::Price, "ten-20"),
            Err(BandParseError::InvalidBound("ten".to_string()))
        );
        assert_eq!(
            selection.toggle(FacetKey::Price, ""),
            Err(BandParseError::Empty)
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn end_to_end_price_and_empty_categories() {
        let products = vec![
            Product {
                product_category: vec!["cat1".to_string()],
                ..product("cheap", 50.0)
            },
            Product {
                product_category: vec!["cat2".to_string()],
                ..product("mid", 500.0)
            },
        ];
        let selection = select(&[(FacetKey::Price, "0-100")]);
        assert_eq!(ids(&filter_products(&products, &selection)), vec!["cheap"]);
    }
}
