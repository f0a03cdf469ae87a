use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sa7abox_core::{compute_plate_totals, identity::ingredient_fingerprint};
use sa7abox_model::{Catalog, IngredientSelection};

fn full_plate(catalog: &Catalog) -> Vec<IngredientSelection> {
    catalog
        .ingredients()
        .iter()
        .map(|i| IngredientSelection {
            ingredient_id: i.id.clone(),
            quantity: i.max_qty,
        })
        .collect()
}

fn bench_plate_compute(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let selections = full_plate(&catalog);
    c.bench_function("compute_plate_totals_full_catalog", |b| {
        b.iter(|| compute_plate_totals(black_box(&selections), &catalog));
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let selections = full_plate(&catalog);
    c.bench_function("ingredient_fingerprint_full_catalog", |b| {
        b.iter(|| ingredient_fingerprint(black_box(&selections)));
    });
}

criterion_group!(benches, bench_plate_compute, bench_fingerprint);
criterion_main!(benches);
