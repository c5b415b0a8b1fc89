//! Reference dataset endpoints: the four lists the filter facets derive from.
//!
//! Each read is independent; a failure here is recovered by the storefront
//! with an empty option list and a user-facing notification.

use common::reference::ReferenceEntity;
use serde::Deserialize;

use crate::upstream::get_json;

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    categories: Vec<ReferenceEntity>,
}

#[derive(Debug, Deserialize)]
struct CollectionsResponse {
    collections: Vec<ReferenceEntity>,
}

#[derive(Debug, Deserialize)]
struct SkillLevelsResponse {
    #[serde(rename = "skillLevels")]
    skill_levels: Vec<ReferenceEntity>,
}

#[derive(Debug, Deserialize)]
struct DesignersResponse {
    designers: Vec<ReferenceEntity>,
}

pub async fn get_categories() -> anyhow::Result<Vec<ReferenceEntity>> {
    let response: CategoriesResponse = get_json("/categories", None).await?;
    Ok(response.categories)
}

pub async fn get_collections() -> anyhow::Result<Vec<ReferenceEntity>> {
    let response: CollectionsResponse = get_json("/collections", None).await?;
    Ok(response.collections)
}

pub async fn get_skill_levels() -> anyhow::Result<Vec<ReferenceEntity>> {
    let response: SkillLevelsResponse = get_json("/skill-levels", None).await?;
    Ok(response.skill_levels)
}

pub async fn get_designers() -> anyhow::Result<Vec<ReferenceEntity>> {
    let response: DesignersResponse = get_json("/designers", None).await?;
    Ok(response.designers)
}
