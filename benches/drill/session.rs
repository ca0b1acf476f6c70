//! Benchmarks for the session controller.

use std::hint::black_box;
use std::time::Duration;

use criterion::Criterion;
use fretdrill::{Command, Session, SessionConfig, TimerMode};

fn session(mode: TimerMode) -> Session {
    let config = SessionConfig::new(60, mode)
        .expect("valid config")
        .with_seed(1);
    Session::new(config)
}

pub fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    let mut s = session(TimerMode::Dual);
    group.bench_function("randomize_once", |b| {
        b.iter(|| {
            s.randomize_once();
            black_box(s.state());
        })
    });

    // One hour of one-second ticks, including the per-minute restarts
    for mode in [TimerMode::Dual, TimerMode::Single] {
        group.bench_function(format!("advance_hour/{mode}"), |b| {
            b.iter(|| {
                let mut s = session(mode);
                s.command(Command::Start);
                for second in 1..=3600 {
                    s.advance_to(Duration::from_secs(second));
                }
                black_box(s.draws())
            })
        });
    }

    group.finish();
}
