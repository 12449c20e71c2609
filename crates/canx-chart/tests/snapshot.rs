// File: crates/canx-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small charts (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use std::rc::Rc;

use canx_chart::{
    AxisId, Chart, ChartConfig, Dataset, HostArea, PlotKind, RasterSurfaceFactory, SampleBuffer, Scale, Scales, Series,
};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(kind: PlotKind, dataset: Dataset, scales: Scales) -> Vec<u8> {
    let cfg = ChartConfig::default().without_labels();
    let mut chart = Chart::with_scales(Rc::new(RasterSurfaceFactory), HostArea::new(320.0, 200.0, 1.0), cfg, kind, scales)
        .expect("chart");
    chart.add_dataset(dataset);
    chart.update();
    chart.encode_png().expect("png")
}

#[test]
fn golden_time_series() {
    let buf = SampleBuffer::shared(16);
    for (t, v) in [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)] {
        buf.borrow_mut().push(t, v);
    }
    let ds = Dataset::new("line", Series::Time(buf), AxisId::primary(), skia_safe::Color::CYAN);
    let scales = Scales::single(Scale::new("t", 0.0, 4.0), Scale::new("v", 0.0, 2.0));
    write_or_compare("time_series.png", &render(PlotKind::TimeSeries, ds, scales));
}

#[test]
fn golden_category() {
    let labels = ["P", "R", "N", "D", "S"].iter().map(|s| s.to_string()).collect();
    let series = Series::Category { values: vec![0.0, 1.0, 0.5, 3.0, 2.0], labels };
    let ds = Dataset::new("gear", series, AxisId::primary(), skia_safe::Color::YELLOW);
    let scales = Scales::single(Scale::default_x(), Scale::new("v", -1.0, 4.0));
    write_or_compare("category.png", &render(PlotKind::Category, ds, scales));
}
