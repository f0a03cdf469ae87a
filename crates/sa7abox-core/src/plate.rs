//! The Plate Computer: selections in, `{nutrition, price, summary}` out.

use sa7abox_model::{
    BuilderConfig, Catalog, ComputedPlate, IngredientSelection, Nutrition, PortionKey, SpicyLevel,
};

/// Summary sentinel for an all-zero ingredient selection.
pub const EMPTY_PLATE_SUMMARY: &str = "Empty plate";
/// Summary sentinel for an unmodified builder config.
pub const STANDARD_SUMMARY: &str = "Standard";

fn round_price(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Optional-field accumulator: tracks both the running total and whether any
/// contributing entry actually defined the field.
#[derive(Default, Clone, Copy)]
struct OptionalSum {
    total: f64,
    defined: bool,
}

impl OptionalSum {
    fn add(&mut self, value: Option<f64>, multiplier: f64) {
        if let Some(v) = value {
            self.total += v * multiplier;
            self.defined = true;
        }
    }

    fn rounded(self) -> Option<f64> {
        self.defined.then(|| self.total.round())
    }
}

/// Computes nutrition, price, and a human summary for an ingredient-based
/// custom plate. Unknown ingredient ids and zero quantities contribute
/// nothing; this never fails.
#[must_use]
pub fn compute_plate_totals(
    selections: &[IngredientSelection],
    catalog: &Catalog,
) -> ComputedPlate {
    let mut calories = 0.0;
    let mut protein = 0.0;
    let mut fiber = 0.0;
    let mut carbs = OptionalSum::default();
    let mut fat = OptionalSum::default();
    let mut price = 0.0;

    for selection in selections {
        let Some(ingredient) = catalog.ingredient(&selection.ingredient_id) else {
            continue;
        };
        if selection.quantity == 0 {
            continue;
        }
        let multiplier = f64::from(selection.quantity);
        let per_unit = &ingredient.nutrition_per_unit;
        calories += per_unit.calories * multiplier;
        protein += per_unit.protein * multiplier;
        fiber += per_unit.fiber * multiplier;
        carbs.add(per_unit.carbs, multiplier);
        fat.add(per_unit.fat, multiplier);
        price += ingredient.unit_price_tnd * multiplier;
    }

    ComputedPlate {
        nutrition: Nutrition {
            calories: calories.round(),
            protein: protein.round(),
            carbs: carbs.rounded(),
            fat: fat.rounded(),
            fiber: fiber.round(),
        },
        price_tnd: round_price(price),
        summary: plate_summary(selections, catalog),
    }
}

fn plate_summary(selections: &[IngredientSelection], catalog: &Catalog) -> String {
    let parts: Vec<String> = selections
        .iter()
        .filter(|s| s.quantity > 0)
        .filter_map(|s| {
            catalog
                .ingredient(&s.ingredient_id)
                .map(|ing| format!("{} x{}", ing.name_key, s.quantity))
        })
        .collect();
    if parts.is_empty() {
        EMPTY_PLATE_SUMMARY.to_string()
    } else {
        parts.join(", ")
    }
}

/// Computes price, nutrition, and summary for a builder-configured meal on
/// top of the base meal's nutrition and price.
///
/// Portion counters are bounded by the catalog's `[min, max]` tables; the
/// caller clamps, this function does not.
#[must_use]
pub fn compute_meal(
    config: &BuilderConfig,
    base_nutrition: &Nutrition,
    base_price: f64,
) -> ComputedPlate {
    let mut calories = base_nutrition.calories;
    let mut protein = base_nutrition.protein;
    let mut fiber = base_nutrition.fiber;
    let mut carbs = base_nutrition.carbs.unwrap_or(0.0);
    let mut fat = base_nutrition.fat.unwrap_or(0.0);
    let mut price = base_price + config.size.price_modifier();

    for key in PortionKey::ALL {
        let count = f64::from(config.portions.get(key));
        let spec = key.spec();
        let per_portion = spec.nutrition_per_portion;
        calories += per_portion.calories * count;
        protein += per_portion.protein * count;
        fiber += per_portion.fiber * count;
        carbs += per_portion.carbs.unwrap_or(0.0) * count;
        fat += per_portion.fat.unwrap_or(0.0) * count;
        price += spec.price_per_portion * count;
    }

    ComputedPlate {
        nutrition: Nutrition {
            calories,
            protein,
            carbs: Some(carbs),
            fat: Some(fat),
            fiber,
        },
        price_tnd: round_price(price),
        summary: meal_summary(config),
    }
}

fn meal_summary(config: &BuilderConfig) -> String {
    let mut parts: Vec<String> = Vec::new();
    if config.size != sa7abox_model::MealSize::Standard {
        parts.push(config.size.label().to_string());
    }
    if config.toggles.spicy_level != SpicyLevel::NotSpicy {
        parts.push(config.toggles.spicy_level.label().to_string());
    }
    if config.toggles.no_onions {
        parts.push("No onions".to_string());
    }
    for key in PortionKey::ALL {
        let count = config.portions.get(key);
        if count > 0 {
            parts.push(format!("+{count} {}", key.spec().label));
        }
    }
    if parts.is_empty() {
        STANDARD_SUMMARY.to_string()
    } else {
        parts.join(", ")
    }
}
