use crate::menu::Nutrition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSize {
    Standard,
    Large,
    Xl,
}

impl MealSize {
    /// Flat price delta added on top of the base meal price, in TND.
    #[must_use]
    pub const fn price_modifier(self) -> f64 {
        match self {
            Self::Standard => 0.0,
            Self::Large => 5.0,
            Self::Xl => 10.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Large => "Large",
            Self::Xl => "XL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SpicyLevel {
    NotSpicy,
    Mild,
    Medium,
    Hot,
}

impl SpicyLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotSpicy => "Not spicy",
            Self::Mild => "Mild",
            Self::Medium => "Medium",
            Self::Hot => "Hot",
        }
    }
}

impl From<SpicyLevel> for u8 {
    fn from(level: SpicyLevel) -> Self {
        match level {
            SpicyLevel::NotSpicy => 0,
            SpicyLevel::Mild => 1,
            SpicyLevel::Medium => 2,
            SpicyLevel::Hot => 3,
        }
    }
}

impl TryFrom<u8> for SpicyLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotSpicy),
            1 => Ok(Self::Mild),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hot),
            other => Err(format!("spicy level out of range 0..=3: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortionKey {
    Protein,
    Carbs,
    Veg,
    Fat,
}

/// Per-key portion table: label, `[min, max]` counter bounds, and the price
/// and nutrition contributed by each portion unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortionSpec {
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
    pub nutrition_per_portion: Nutrition,
    pub price_per_portion: f64,
}

impl PortionKey {
    /// Summary and computation order is fixed: protein, carbs, veg, fat.
    pub const ALL: [Self; 4] = [Self::Protein, Self::Carbs, Self::Veg, Self::Fat];

    #[must_use]
    pub const fn spec(self) -> PortionSpec {
        match self {
            Self::Protein => PortionSpec {
                label: "Protein",
                min: 0,
                max: 4,
                nutrition_per_portion: Nutrition {
                    calories: 120.0,
                    protein: 25.0,
                    carbs: Some(0.0),
                    fat: Some(0.0),
                    fiber: 0.0,
                },
                price_per_portion: 2.0,
            },
            Self::Carbs => PortionSpec {
                label: "Carbs",
                min: 0,
                max: 4,
                nutrition_per_portion: Nutrition {
                    calories: 130.0,
                    protein: 0.0,
                    carbs: Some(30.0),
                    fat: Some(0.0),
                    fiber: 0.0,
                },
                price_per_portion: 1.5,
            },
            Self::Veg => PortionSpec {
                label: "Veg/Fiber",
                min: 0,
                max: 4,
                nutrition_per_portion: Nutrition {
                    calories: 25.0,
                    protein: 0.0,
                    carbs: Some(0.0),
                    fat: Some(0.0),
                    fiber: 1.0,
                },
                price_per_portion: 0.5,
            },
            Self::Fat => PortionSpec {
                label: "Fat/Sauce",
                min: 0,
                max: 3,
                nutrition_per_portion: Nutrition {
                    calories: 90.0,
                    protein: 0.0,
                    carbs: Some(0.0),
                    fat: Some(10.0),
                    fiber: 0.0,
                },
                price_per_portion: 1.0,
            },
        }
    }
}

/// The four macro portion counters of a builder config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portions {
    pub protein: u32,
    pub carbs: u32,
    pub veg: u32,
    pub fat: u32,
}

impl Portions {
    #[must_use]
    pub const fn get(self, key: PortionKey) -> u32 {
        match key {
            PortionKey::Protein => self.protein,
            PortionKey::Carbs => self.carbs,
            PortionKey::Veg => self.veg,
            PortionKey::Fat => self.fat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderToggles {
    pub no_onions: bool,
    pub spicy_level: SpicyLevel,
}

impl Default for BuilderToggles {
    fn default() -> Self {
        Self {
            no_onions: false,
            spicy_level: SpicyLevel::NotSpicy,
        }
    }
}

/// Parametric meal-builder selection: base meal, size, toggles, and the four
/// macro portion counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderConfig {
    pub meal_id: String,
    pub size: MealSize,
    pub toggles: BuilderToggles,
    pub portions: Portions,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            meal_id: String::new(),
            size: MealSize::Standard,
            toggles: BuilderToggles::default(),
            portions: Portions::default(),
        }
    }
}

/// Persisted in-progress builder config, stamped at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderDraft {
    #[serde(flatten)]
    pub config: BuilderConfig,
    pub timestamp: u64,
}
