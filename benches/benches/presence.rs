// Copyright 2025 the Pointer Presence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use pointer_presence::PresenceTracker;
use pointer_presence::adapters::queue::{QueueSource, pump};
use std::cell::Cell;
use std::rc::Rc;

fn bench_dispatch_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("presence/dispatch_fanout");

    // The notification pass is a linear walk over boxed callbacks; this
    // tracks how dispatch cost scales with subscriber count.
    for subscribers in [1_usize, 8, 64, 512] {
        group.throughput(Throughput::Elements(subscribers as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(subscribers),
            &subscribers,
            |b, &count| {
                b.iter_batched(
                    || {
                        let hits = Rc::new(Cell::new(0_u64));
                        let mut tracker = PresenceTracker::new(QueueSource::new());
                        for _ in 0..count {
                            let hits = Rc::clone(&hits);
                            tracker.on_disappear(move || hits.set(hits.get() + 1));
                        }
                        tracker
                    },
                    |mut tracker| {
                        tracker.dispatch_disappear();
                        black_box(tracker);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_hide_show_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("presence/cycle");

    group.bench_function("hide_then_move", |b| {
        b.iter_batched(
            || {
                let mut tracker = PresenceTracker::new(QueueSource::new());
                tracker.on_disappear(|| {});
                tracker.on_appear(|| {});
                tracker
            },
            |mut tracker| {
                tracker.dispatch_disappear();
                tracker.source_mut().push_pointer_move(Point::new(1.0, 1.0));
                pump(&mut tracker);
                black_box(tracker);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_subscribe_unsubscribe_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("presence/subscription_churn");

    for subscribers in [8_usize, 64, 512] {
        group.throughput(Throughput::Elements(subscribers as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(subscribers),
            &subscribers,
            |b, &count| {
                b.iter_batched(
                    || PresenceTracker::new(QueueSource::new()),
                    |mut tracker| {
                        let tokens: Vec<_> =
                            (0..count).map(|_| tracker.on_disappear(|| {})).collect();
                        for token in tokens {
                            tracker.unsubscribe(token);
                        }
                        black_box(tracker);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dispatch_fanout,
    bench_hide_show_cycle,
    bench_subscribe_unsubscribe_churn
);
criterion_main!(benches);
