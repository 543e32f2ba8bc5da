// ABOUTME: Criterion benchmarks for the progress calculator and trend analyzer
// ABOUTME: Measures single-goal, batched, and trend-classification throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Fitness Engine

//! Criterion benchmarks for the progression engine calculation paths.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use progression_engine::trend_analyzer::classify_trend;
use progression_engine::{
    Goal, GoalProgressCalculator, GoalType, Measurement, TrendConfig,
};
use uuid::Uuid;

/// Daily measurements, newest-first, with a mild downward drift
fn generate_measurements(user_id: Uuid, count: usize) -> Vec<Measurement> {
    let now = Utc::now();
    (0..count)
        .map(|index| {
            let weight = 80.0 - (count - index) as f64 * 0.05 + f64::from(index as u32 % 3) * 0.1;
            Measurement::new(user_id, now - Duration::days(index as i64), weight)
        })
        .collect()
}

fn bench_goal(user_id: Uuid) -> Goal {
    let start = Utc::now() - Duration::days(45);
    Goal::new(
        user_id,
        GoalType::FatLoss,
        start,
        start + Duration::days(90),
        80.0,
        75.0,
    )
    .unwrap()
}

fn bench_single_goal_progress(c: &mut Criterion) {
    let user_id = Uuid::new_v4();
    let goal = bench_goal(user_id);
    let measurements = generate_measurements(user_id, 30);
    let calculator = GoalProgressCalculator::new();

    c.bench_function("progress/single_goal_30_measurements", |b| {
        b.iter(|| {
            calculator
                .calculate(black_box(&goal), black_box(&measurements))
                .unwrap()
        });
    });
}

fn bench_batch_goal_progress(c: &mut Criterion) {
    let batch: Vec<(Goal, Vec<Measurement>)> = (0..100)
        .map(|_| {
            let user_id = Uuid::new_v4();
            (bench_goal(user_id), generate_measurements(user_id, 30))
        })
        .collect();
    let calculator = GoalProgressCalculator::new();

    c.bench_function("progress/batch_100_goals", |b| {
        b.iter(|| calculator.calculate_many(black_box(&batch)));
    });
}

fn bench_trend_classification(c: &mut Criterion) {
    let measurements = generate_measurements(Uuid::new_v4(), 30);
    let config = TrendConfig::default();

    c.bench_function("trend/classify_30_measurements", |b| {
        b.iter(|| {
            classify_trend(
                black_box(&measurements),
                black_box(GoalType::FatLoss),
                &config,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_single_goal_progress,
    bench_batch_goal_progress,
    bench_trend_classification
);
criterion_main!(benches);
