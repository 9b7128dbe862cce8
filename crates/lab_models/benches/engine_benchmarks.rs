//! Criterion benchmarks for the scenario engine.
//!
//! Measures table dispatch for every module on its default snapshot, and
//! the curve-producing modules separately since they dominate the cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lab_core::types::{LabModule, ParamId, ScenarioInput};
use lab_models::catalogue::Strategy;
use lab_models::engine;

/// Benchmark evaluation of every module on its defaults.
fn bench_module_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("module_dispatch");

    for module in LabModule::ALL {
        let input = engine::collect(module, &ScenarioInput::new());
        group.bench_with_input(
            BenchmarkId::new("evaluate", module.slug()),
            &input,
            |b, input| {
                b.iter(|| engine::evaluate(black_box(module), black_box(input)));
            },
        );
    }

    group.finish();
}

/// Benchmark the strategy menu, including selection parsing.
fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");

    for strategy in Strategy::ALL {
        let overrides = ScenarioInput::new().with_choice(ParamId::Strategy, strategy.name());
        let input = engine::collect(LabModule::AdvancedStrategies, &overrides);
        group.bench_with_input(
            BenchmarkId::new("evaluate", strategy.name()),
            &input,
            |b, input| {
                b.iter(|| engine::evaluate(LabModule::AdvancedStrategies, black_box(input)));
            },
        );
    }

    group.finish();
}

/// Benchmark input collection (defaults merged under overrides).
fn bench_collect(c: &mut Criterion) {
    let overrides = ScenarioInput::new()
        .with_number(ParamId::PortfolioValue, 7_500_000.0)
        .with_number(ParamId::Beta, 1.2);

    c.bench_function("collect_hedging_builder", |b| {
        b.iter(|| engine::collect(LabModule::HedgingBuilder, black_box(&overrides)));
    });
}

criterion_group!(benches, bench_module_dispatch, bench_strategies, bench_collect);
criterion_main!(benches);
