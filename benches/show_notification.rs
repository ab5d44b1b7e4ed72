// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use toast_notifier::document::Document;
use toast_notifier::notifications::{show_notification, Flashes};

fn show_notification_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("show_notification");

    group.bench_function("append_1000_toasts", |b| {
        b.iter_batched(
            Document::new,
            |mut doc| {
                for i in 0..1000 {
                    let kind = if i % 2 == 0 { "success" } else { "error" };
                    let _ = black_box(show_notification(&mut doc, "Saved!", kind));
                }
                doc
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("drain_100_flashes", |b| {
        b.iter_batched(
            || {
                let mut flashes = Flashes::new();
                for i in 0..100 {
                    flashes.flash(format!("Token no. {i}"), "success");
                }
                (flashes, Document::new())
            },
            |(mut flashes, mut doc)| black_box(flashes.drain_into(&mut doc)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, show_notification_benchmark);
criterion_main!(benches);
