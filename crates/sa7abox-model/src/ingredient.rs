use crate::menu::Nutrition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum IngredientCategory {
    Base,
    Protein,
    Veg,
    Sauce,
    Extra,
}

/// Catalog ingredient entity. Immutable at runtime.
///
/// `min_qty`/`max_qty` bound the quantities the builder UI may construct;
/// required ingredients never drop below `min_qty` there. Computation treats
/// the bounds as a precondition and does not clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name_key: String,
    pub description_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub unit_label: String,
    pub unit_price_tnd: f64,
    pub nutrition_per_unit: Nutrition,
    pub min_qty: u32,
    pub max_qty: u32,
    pub category: IngredientCategory,
    pub required: bool,
}

/// One `(ingredient, quantity)` pair of a custom plate selection.
/// Unselected catalog ingredients implicitly have quantity 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSelection {
    pub ingredient_id: String,
    pub quantity: u32,
}

/// Persisted in-progress custom plate, stamped at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDraft {
    pub selections: Vec<IngredientSelection>,
    pub timestamp: u64,
}
