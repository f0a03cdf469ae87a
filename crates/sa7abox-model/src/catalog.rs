use crate::data;
use crate::ids::{parse_ingredient_id, parse_menu_item_id, ValidationError};
use crate::ingredient::Ingredient;
use crate::menu::MenuItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Read-only reference data with process lifetime: the menu and the
/// ingredient table. Builder portion/size tables live on the enum types in
/// [`crate::PortionKey`] and [`crate::MealSize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    menu_items: Vec<MenuItem>,
    ingredients: Vec<Ingredient>,
}

impl Catalog {
    /// Builds a catalog, rejecting malformed ids, duplicate ids, and
    /// inverted quantity bounds.
    pub fn new(
        menu_items: Vec<MenuItem>,
        ingredients: Vec<Ingredient>,
    ) -> Result<Self, ValidationError> {
        let catalog = Self {
            menu_items,
            ingredients,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The storefront's built-in data tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            menu_items: data::builtin_menu_items(),
            ingredients: data::builtin_ingredients(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = BTreeSet::new();
        for item in &self.menu_items {
            let id = parse_menu_item_id(&item.id)?;
            if !seen.insert(id) {
                return Err(ValidationError(format!("duplicate menu item id {}", item.id)));
            }
        }
        let mut seen = BTreeSet::new();
        for ing in &self.ingredients {
            let id = parse_ingredient_id(&ing.id)?;
            if !seen.insert(id) {
                return Err(ValidationError(format!("duplicate ingredient id {}", ing.id)));
            }
            if ing.min_qty > ing.max_qty {
                return Err(ValidationError(format!(
                    "ingredient {} has min_qty {} > max_qty {}",
                    ing.id, ing.min_qty, ing.max_qty
                )));
            }
            if ing.unit_price_tnd < 0.0 {
                return Err(ValidationError(format!(
                    "ingredient {} has negative unit price",
                    ing.id
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    #[must_use]
    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|m| m.id == id)
    }

    #[must_use]
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// The required-ingredients-at-minimum seed the ingredient builder
    /// starts from when no draft is present.
    #[must_use]
    pub fn required_selection_seed(&self) -> Vec<crate::IngredientSelection> {
        self.ingredients
            .iter()
            .filter(|i| i.required)
            .map(|i| crate::IngredientSelection {
                ingredient_id: i.id.clone(),
                quantity: i.min_qty,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::{Ingredient, IngredientCategory, Nutrition};

    fn ingredient(id: &str) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name_key: format!("ingredients.test.{id}"),
            description_key: format!("ingredients.nutrition.{id}"),
            image_url: None,
            unit_label: "portion".to_string(),
            unit_price_tnd: 1.0,
            nutrition_per_unit: Nutrition {
                calories: 100.0,
                protein: 10.0,
                carbs: Some(5.0),
                fat: Some(1.0),
                fiber: 0.0,
            },
            min_qty: 0,
            max_qty: 3,
            category: IngredientCategory::Base,
            required: false,
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().expect("builtin catalog");
        assert!(catalog.menu_item("supercut").is_some());
        assert!(catalog.ingredient("riz").is_some());
        assert!(catalog.menu_item("nope").is_none());
    }

    #[test]
    fn duplicate_and_inverted_entries_are_rejected() {
        let dup = Catalog::new(vec![], vec![ingredient("riz"), ingredient("riz")]);
        assert!(dup.is_err());

        let mut bad = ingredient("riz");
        bad.min_qty = 5;
        bad.max_qty = 3;
        assert!(Catalog::new(vec![], vec![bad]).is_err());
    }
}
