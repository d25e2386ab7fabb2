//! Performance benchmarks for state reconciliation
//!
//! Measures `set_state` as the number of children grows.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use multistate::adapters::mock::MockChild;
use multistate::animation::{Animation, AnimationDefaults};
use multistate::child::LayoutParams;
use multistate::container::MultiStateView;
use multistate::view_state::{HideStrategy, ViewState};

/// Build a container with `children` children spread across all states.
fn build_container(children: usize) -> MultiStateView<MockChild> {
    let mut view = MultiStateView::new(AnimationDefaults::new(
        Animation::new("fade_in", 300),
        Animation::new("fade_out", 300),
    ));
    for i in 0..children {
        let state = ViewState::ALL[i % ViewState::ALL.len()];
        let strategy = if i % 2 == 0 {
            HideStrategy::MakeInvisible
        } else {
            HideStrategy::MakeGone
        };
        view.attach(
            MockChild::new(format!("child-{}", i)),
            LayoutParams::for_state(state).with_hide_strategy(strategy),
        );
    }
    view
}

/// Benchmark cycling through every state
fn bench_set_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_state_cycle");

    for size in [5, 50, 500].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_children", size)),
            size,
            |b, &size| {
                let mut view = build_container(size);
                b.iter(|| {
                    for state in ViewState::ALL {
                        view.set_state(black_box(state));
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the same-state fast path
fn bench_same_state(c: &mut Criterion) {
    let mut view = build_container(500);
    c.bench_function("set_state_unchanged_500", |b| {
        b.iter(|| view.set_state(black_box(ViewState::Content)))
    });
}

criterion_group!(benches, bench_set_state, bench_same_state);
criterion_main!(benches);
