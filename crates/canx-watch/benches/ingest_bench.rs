// File: crates/canx-watch/benches/ingest_bench.rs
// Summary: Sample routing throughput with a full buffer, and tick cost after a burst.

use std::rc::Rc;

use anyhow::Result;
use canx_chart::{ChartConfig, HostArea, RasterSurfaceFactory};
use canx_watch::{SignalMeta, SignalWatcherManager, WatchConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_manager(signals: usize) -> Result<SignalWatcherManager> {
    let cfg = WatchConfig::default()
        .with_host(HostArea::new(800.0, 400.0, 1.0))
        .with_chart(ChartConfig::default().without_labels());
    let mut m = SignalWatcherManager::new(Rc::new(RasterSurfaceFactory), cfg)?;
    for i in 0..signals {
        m.add_watcher("ENGINE", format!("S{i}"), &SignalMeta::with_range(-100.0, 100.0))?;
    }
    Ok(m)
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");
    group.bench_function("on_sample_4_signals", |b| {
        let mut m = build_manager(4).expect("manager");
        let names: Vec<String> = (0..4).map(|i| format!("S{i}")).collect();
        let mut t = 0.0f64;
        b.iter(|| {
            t += 0.001;
            for n in &names {
                black_box(m.on_sample("ENGINE", n, (t * 3.0).sin() * 50.0, t));
            }
        });
    });
    group.bench_function("tick_after_burst", |b| {
        let mut m = build_manager(4).expect("manager");
        let mut t = 0.0f64;
        b.iter(|| {
            for _ in 0..100 {
                t += 0.01;
                m.on_sample("ENGINE", "S0", t.cos() * 80.0, t);
            }
            black_box(m.tick())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_ingest);
criterion_main!(benches);
