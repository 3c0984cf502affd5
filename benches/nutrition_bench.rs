// ABOUTME: Criterion benchmarks for the nutrition calculators and meal plan helpers
// ABOUTME: Measures BMI, energy expenditure, JSON extraction, and fallback plan synthesis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition calculators.
//!
//! The calculators run on every request, and JSON extraction runs on every
//! completion, so both should stay in the microsecond range.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriplan_server::intelligence::{calculate_bmi, calculate_energy};
use nutriplan_server::meal_plan::demo::DEMO_MEAL_PLAN_JSON;
use nutriplan_server::meal_plan::fallback::synthesize_plan;
use nutriplan_server::meal_plan::parser::extract_json;
use nutriplan_server::models::{ActivityLevel, Gender, UnitSystem, UserProfile, WeightHeight};

fn bench_calculators(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculators");

    let metric = WeightHeight::new(70.0, 175.0, UnitSystem::Metric).unwrap();
    let imperial = WeightHeight::new(154.0, 69.0, UnitSystem::Imperial).unwrap();
    let profile = UserProfile::new(metric, 30, Gender::Male, ActivityLevel::ModeratelyActive).unwrap();

    group.bench_function("bmi_metric", |b| {
        b.iter(|| calculate_bmi(black_box(&metric)));
    });

    group.bench_function("bmi_imperial", |b| {
        b.iter(|| calculate_bmi(black_box(&imperial)));
    });

    group.bench_function("energy", |b| {
        b.iter(|| calculate_energy(black_box(&profile)));
    });

    group.finish();
}

fn bench_meal_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("meal_plan");

    for wrapper in ["bare", "prose"] {
        let completion = if wrapper == "bare" {
            DEMO_MEAL_PLAN_JSON.to_owned()
        } else {
            format!("Here is your plan:\n```json\n{DEMO_MEAL_PLAN_JSON}\n```\nEnjoy!")
        };
        group.throughput(Throughput::Bytes(completion.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("extract_json", wrapper),
            &completion,
            |b, text| {
                b.iter(|| extract_json(black_box(text)));
            },
        );
    }

    group.bench_function("synthesize_fallback", |b| {
        b.iter(|| synthesize_plan(black_box(2000), black_box(70.0)));
    });

    group.finish();
}

criterion_group!(benches, bench_calculators, bench_meal_plan);
criterion_main!(benches);
