//! Authoritative repricing for incoming orders.
//!
//! The client's declared prices are never trusted. Every submitted line is
//! re-derived from the server catalog: ingredient plates through the plate
//! computer, builder meals through the meal computer over the catalog base
//! meal, and plain catalog items from the catalog price plus selected
//! extras. Lines that fail to resolve are rejected, not silently dropped.

use crate::http::SubmittedLine;
use crate::orders::OrderLine;
use sa7abox_core::{compute_meal, compute_plate_totals, plate};
use sa7abox_model::{Catalog, Nutrition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecomputeError(pub String);

impl std::fmt::Display for RecomputeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for RecomputeError {}

#[derive(Debug)]
pub struct RepricedOrder {
    pub lines: Vec<OrderLine>,
    pub total_tnd: f64,
}

pub fn reprice(lines: &[SubmittedLine], catalog: &Catalog) -> Result<RepricedOrder, RecomputeError> {
    let mut repriced = Vec::with_capacity(lines.len());
    for line in lines {
        repriced.push(reprice_line(line, catalog)?);
    }
    let total_tnd = round_total(repriced.iter().map(|l| l.line_total_tnd).sum());
    Ok(RepricedOrder {
        lines: repriced,
        total_tnd,
    })
}

fn reprice_line(line: &SubmittedLine, catalog: &Catalog) -> Result<OrderLine, RecomputeError> {
    if line.quantity == 0 {
        return Err(RecomputeError(format!(
            "zero quantity for item {}",
            line.menu_item.id
        )));
    }

    let (unit_price_tnd, unit_nutrition) =
        if let Some(selections) = &line.selected_options.ingredient_selections {
            let computed = compute_plate_totals(selections, catalog);
            if computed.summary == plate::EMPTY_PLATE_SUMMARY {
                return Err(RecomputeError("empty custom plate".to_string()));
            }
            (computed.price_tnd, computed.nutrition)
        } else if let Some(config) = &line.selected_options.builder_config {
            let base = catalog.menu_item(&line.menu_item.id).ok_or_else(|| {
                RecomputeError(format!("unknown builder base {}", line.menu_item.id))
            })?;
            let computed = compute_meal(config, &base.nutrition, base.price_tnd.unwrap_or(0.0));
            (computed.price_tnd, computed.nutrition)
        } else {
            let item = catalog
                .menu_item(&line.menu_item.id)
                .ok_or_else(|| RecomputeError(format!("unknown item {}", line.menu_item.id)))?;
            let price = sa7abox_core::unit_price(item, &line.selected_options);
            (price, item.nutrition)
        };

    let multiplier = f64::from(line.quantity);
    Ok(OrderLine {
        item_id: line.menu_item.id.clone(),
        name_key: line.menu_item.name_key.clone(),
        quantity: line.quantity,
        unit_price_tnd,
        line_total_tnd: round_total(unit_price_tnd * multiplier),
        nutrition: Nutrition {
            calories: unit_nutrition.calories * multiplier,
            protein: unit_nutrition.protein * multiplier,
            carbs: unit_nutrition.carbs.map(|v| v * multiplier),
            fat: unit_nutrition.fat.map(|v| v * multiplier),
            fiber: unit_nutrition.fiber * multiplier,
        },
        selected_options: line.selected_options.clone(),
    })
}

fn round_total(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
