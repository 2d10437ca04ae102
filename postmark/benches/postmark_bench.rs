//! Benchmarks for postmark dispatch.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use postmark::{Postmark, PostmarkBuilder};

fn dispatch_benchmark(c: &mut Criterion) {
    c.bench_function("commit_and_drop", |b| {
        b.iter(|| {
            let mut total = 0u64;
            {
                let mut pm: Postmark<'_, u64, u64> = PostmarkBuilder::new()
                    .on_committed(|v| total += v)
                    .on_canceled(|_| {})
                    .build();
                pm.commit(black_box(7));
            }
            black_box(total)
        });
    });

    c.bench_function("cancel_wins_and_drop", |b| {
        b.iter(|| {
            let mut pm: Postmark<'_, u64, u64> = Postmark::noop();
            pm.commit(black_box(1));
            pm.cancel(black_box(2));
            pm.commit(black_box(3));
            black_box(pm.close())
        });
    });
}

criterion_group!(benches, dispatch_benchmark);
criterion_main!(benches);
