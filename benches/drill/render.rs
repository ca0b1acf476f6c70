//! Benchmarks for fret-label rendering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fretdrill::{render_shape, Position, Tonality};

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for tonality in Tonality::ALL {
        for pentatonic in [false, true] {
            let id = format!("{}{}", tonality, if pentatonic { "/pentatonic" } else { "" });
            group.bench_with_input(BenchmarkId::new("shape", id), &tonality, |b, &tonality| {
                b.iter(|| {
                    for position in Position::ALL {
                        black_box(render_shape(black_box(position), tonality, pentatonic));
                    }
                })
            });
        }
    }

    group.finish();
}
