use std::sync::Arc;
use std::thread;

use boxoffice_core::ShowId;
use boxoffice_inventory::seed;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_book_cancel_single_thread(c: &mut Criterion) {
    let service = seed::default_theater();
    let show = ShowId::new(3);

    c.bench_function("book_then_cancel_one_seat", |b| {
        b.iter(|| {
            service.book_seat(show, black_box(10u32)).unwrap();
            service.cancel_seat(show, black_box(10u32)).unwrap();
        })
    });
}

fn bench_contended_screen(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_screen");

    for threads in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let service = Arc::new(seed::default_theater());
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let service = service.clone();
                        thread::spawn(move || {
                            // Each thread cycles its own seat on the same screen.
                            let seat = t as u32 + 1;
                            for _ in 0..100 {
                                let _ = service.book_seat(ShowId::new(3), seat);
                                let _ = service.cancel_seat(ShowId::new(3), seat);
                            }
                        })
                    })
                    .collect();
                for h in handles {
                    h.join().unwrap();
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_book_cancel_single_thread, bench_contended_screen);
criterion_main!(benches);
