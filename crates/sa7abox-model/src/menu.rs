use crate::builder::BuilderConfig;
use crate::ingredient::IngredientSelection;
use serde::{Deserialize, Serialize};

/// Nutrition facts, per catalog unit or per computed plate.
///
/// `carbs` and `fat` are optional and propagate defined-ness: a computed
/// plate reports `None` only when no contributing entry declared the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    pub fiber: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum MenuCategory {
    Box,
    Salad,
    Side,
    Drink,
    HealthySweet,
    HealthyJuice,
}

/// A priced add-on (extra or base choice) attached to a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemOption {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_tnd: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base: Vec<MenuItemOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<MenuItemOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sauces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_ingredients: Vec<String>,
}

/// Catalog menu entity. Immutable at runtime.
///
/// Cart lines for custom plates and builder meals carry a synthetic
/// `MenuItem` whose `price_tnd` and `nutrition` are the computed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub category: MenuCategory,
    pub name_key: String,
    pub description_key: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_tnd: Option<f64>,
    pub nutrition: Nutrition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<MenuItemOptions>,
}

/// User selections attached to one cart line.
///
/// Exactly one of the three variants is populated in practice: extras-style
/// options on a catalog item, `ingredient_selections` for a custom plate, or
/// `builder_config` for a builder meal. Absent and empty collections are
/// interchangeable; identity derivation normalizes both to the same key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sauce: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder_config: Option<BuilderConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_selections: Option<Vec<IngredientSelection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_summary: Option<String>,
}

impl SelectedOptions {
    #[must_use]
    pub fn is_custom_plate(&self) -> bool {
        self.ingredient_selections.is_some()
    }

    #[must_use]
    pub fn is_builder_meal(&self) -> bool {
        self.builder_config.is_some()
    }
}
