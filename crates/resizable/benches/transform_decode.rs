//! Benchmarks for decoding the translation of computed transforms.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use resizable::transform::decode_translation;

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_translation");

    let inputs = [
        ("none", None),
        ("matrix", Some("matrix(1, 0, 0, 1, 120, -48)")),
        (
            "matrix3d",
            Some("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 120, -48, 12, 1)"),
        ),
        ("unresolved", Some("translate(-50%, 10px)")),
    ];

    for (name, input) in inputs {
        group.bench_function(name, |b| {
            b.iter(|| decode_translation(black_box(input)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
