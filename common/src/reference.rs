//! Reference entities backing the derived filter facets.

use serde::{Deserialize, Serialize};

/// One row of a reference dataset (category, collection, skill level or
/// designer). Facet options are derived 1:1 from these: `name` becomes the
/// option label, `_id` the option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntity {
    pub _id: String,
    pub name: String,
}

impl ReferenceEntity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            _id: id.into(),
            name: name.into(),
        }
    }
}
