//! Category Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Category model
///
/// `slug` is derived from `name` by the manager and is unique within the
/// collection; products reference categories by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Create category payload (id and slug are assigned by the manager)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    #[validate(length(min = 1))]
    pub name: String,
}

/// Update category payload
///
/// Renaming re-derives the slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
