//! Benchmarks for icosphere construction.
//!
//! Run with: `cargo bench --bench subdivision`

use divan::{black_box, Bencher};
use icosphere::{
    geometry::{seed, subdivide},
    model::LineModel,
    Icosphere,
};

fn main() {
    divan::main();
}

#[divan::bench(args = [0, 2, 4, 6])]
fn build(level: u32) -> Icosphere {
    Icosphere::with_subdivisions(black_box(level))
}

#[divan::bench]
fn single_pass_from_seed(bencher: Bencher) {
    let (vertices, faces) = seed();
    bencher.bench(|| subdivide(black_box(&vertices), black_box(&faces)));
}

#[divan::bench(args = [2, 4, 6])]
fn line_model(bencher: Bencher, level: u32) {
    let sphere = Icosphere::with_subdivisions(level);
    bencher.bench(|| LineModel::new(black_box(&sphere)));
}
