// File: crates/canx-watch/tests/manager.rs
// Purpose: Validate watcher lifecycle, sample routing, presentation modes and redraw coalescing.

use std::rc::Rc;

use canx_chart::types::PixelSize;
use canx_chart::{ChartConfig, DrawingSurfaceFactory, HostArea, Range, RasterSurfaceFactory};
use canx_watch::{
    PresentationMode, SampleOutcome, SignalMeta, SignalUpdate, SignalWatcherManager, WatchConfig, WatchError,
    WatcherKey,
};
use skia_safe as skia;

struct NoContext;

impl DrawingSurfaceFactory for NoContext {
    fn create(&self, _size: PixelSize) -> Option<skia::Surface> { None }
}

fn config() -> WatchConfig {
    WatchConfig::default()
        .with_host(HostArea::new(240.0, 140.0, 1.0))
        .with_chart(ChartConfig::default().without_labels())
}

fn manager(cfg: WatchConfig) -> SignalWatcherManager {
    SignalWatcherManager::new(Rc::new(RasterSurfaceFactory), cfg).expect("manager")
}

/// (key, colour) per dataset of every chart, in chart order.
fn membership(m: &SignalWatcherManager) -> Vec<(String, skia::Color)> {
    m.charts().flat_map(|(_, c)| c.visible_datasets().map(|d| (d.label.clone(), d.color)).collect::<Vec<_>>()).collect()
}

#[test]
fn speed_scenario() {
    let mut m = manager(config());
    let key = m.add_watcher("MSG_A", "Speed", &SignalMeta::with_range(0.0, 200.0)).expect("add");
    assert_eq!(m.display_range(&key), Some(Range::new(0.0, 200.0)));

    for (t, v) in [(0.0, 50.0), (1.0, 60.0), (2.0, 55.0)] {
        assert_eq!(m.on_sample("MSG_A", "Speed", v, t), SampleOutcome::Accepted);
    }
    assert_eq!(m.display_range(&key), Some(Range::new(50.0, 60.0)));

    assert!(m.tick());
    let charts: Vec<_> = m.charts().collect();
    assert_eq!(charts.len(), 1);
    assert_eq!(charts[0].1.visible_datasets().count(), 1);
    assert_eq!(m.x_range(), Range::new(-28.0, 2.0));
}

#[test]
fn duplicate_is_rejected() {
    let mut m = manager(config());
    m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    let err = m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).unwrap_err();
    assert!(matches!(err, WatchError::DuplicateWatcher(k) if k == WatcherKey::new("MSG_A", "Speed")));
    assert_eq!(m.len(), 1);
}

#[test]
fn unknown_key_is_reported() {
    let mut m = manager(config());
    let k = WatcherKey::new("MSG_X", "Nope");
    assert!(matches!(m.remove_watcher(&k), Err(WatchError::UnknownWatcher(_))));
    assert!(matches!(m.toggle_watcher(&k, false), Err(WatchError::UnknownWatcher(_))));
}

#[test]
fn invalid_and_unwatched_samples() {
    let mut m = manager(config());
    m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    assert_eq!(m.on_sample("MSG_A", "Speed", f64::NAN, 1.0), SampleOutcome::Invalid);
    assert_eq!(m.on_sample("MSG_A", "Speed", 1.0, f64::INFINITY), SampleOutcome::Invalid);
    assert_eq!(m.on_sample("MSG_A", "Rpm", 1.0, 1.0), SampleOutcome::NotWatched);
    assert!(!m.is_dirty());
    assert_eq!(m.latest_time(), None);
}

#[test]
fn buffer_keeps_most_recent_samples() {
    let mut m = manager(config().with_buffer_capacity(5));
    let key = m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    for i in 0..12 {
        m.on_sample("MSG_A", "Speed", i as f64 * 10.0, i as f64);
    }
    let w = m.watcher(&key).expect("watcher");
    assert_eq!(w.len(), 5);
    let times: Vec<f64> = w.samples().iter().map(|s| s.0).collect();
    assert_eq!(times, vec![7.0, 8.0, 9.0, 10.0, 11.0]);
    // extent follows eviction
    assert_eq!(w.extent(), Some(Range::new(70.0, 110.0)));
}

#[test]
fn disabled_watcher_drops_samples_but_keeps_buffer() {
    let mut m = manager(config());
    let key = m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    m.on_sample("MSG_A", "Speed", 1.0, 0.0);
    m.toggle_watcher(&key, false).expect("toggle");
    assert_eq!(m.on_sample("MSG_A", "Speed", 2.0, 1.0), SampleOutcome::NotWatched);
    assert_eq!(m.watcher(&key).map(|w| w.len()), Some(1));
    assert_eq!(membership(&m).len(), 0);
    m.toggle_watcher(&key, true).expect("toggle");
    assert_eq!(membership(&m).len(), 1);
}

#[test]
fn mode_round_trip_keeps_membership() {
    let mut m = manager(config());
    for s in ["Speed", "Rpm", "Temp"] {
        m.add_watcher("MSG_A", s, &SignalMeta::default()).expect("add");
    }
    let before = membership(&m);
    assert_eq!(before.len(), 3);

    m.set_presentation_mode(PresentationMode::Separate);
    assert_eq!(m.charts().count(), 3);
    let mut separate = membership(&m);
    let mut sorted = before.clone();
    separate.sort_by(|a, b| a.0.cmp(&b.0));
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(separate, sorted);

    m.set_presentation_mode(PresentationMode::Combined);
    assert_eq!(m.charts().count(), 1);
    assert_eq!(membership(&m), before);
}

#[test]
fn combined_axes_alternate_sides() {
    use canx_chart::AxisSide;
    let mut m = manager(config());
    let keys: Vec<WatcherKey> =
        ["A", "B", "C"].iter().map(|s| m.add_watcher("MSG", *s, &SignalMeta::default()).expect("add")).collect();
    let (_, chart) = m.charts().next().expect("chart");
    assert_eq!(chart.scales.y_count(), 3);
    let side = |k: &WatcherKey| chart.scales.y(&k.axis_id()).map(|a| a.side);
    assert_eq!(side(&keys[0]), Some(AxisSide::Left));
    assert_eq!(side(&keys[1]), Some(AxisSide::Right));
    assert_eq!(side(&keys[2]), Some(AxisSide::Left));
}

#[test]
fn dotted_names_get_distinct_axes() {
    let mut m = manager(config());
    let a = m.add_watcher("A.B", "C", &SignalMeta::default()).expect("add");
    let b = m.add_watcher("A", "B.C", &SignalMeta::default()).expect("add");
    assert_eq!(a.to_string(), b.to_string());
    assert_ne!(a.axis_id(), b.axis_id());

    m.on_sample("A.B", "C", 10.0, 0.0);
    m.on_sample("A.B", "C", 20.0, 1.0);
    m.on_sample("A", "B.C", 500.0, 0.0);
    m.on_sample("A", "B.C", 900.0, 1.0);
    m.tick();

    let (_, chart) = m.charts().next().expect("chart");
    assert_eq!(chart.scales.y_count(), 2);
    assert_eq!(chart.scales.y(&a.axis_id()).map(|y| y.scale.range()), Some(Range::new(10.0, 20.0)));
    assert_eq!(chart.scales.y(&b.axis_id()).map(|y| y.scale.range()), Some(Range::new(500.0, 900.0)));
    let axes: Vec<_> = chart.visible_datasets().map(|d| d.axis.clone()).collect();
    assert_eq!(axes, vec![a.axis_id(), b.axis_id()]);
}

#[test]
fn huge_samples_keep_display_range_finite() {
    let mut m = manager(config());
    let key = m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    m.on_sample("MSG_A", "Speed", 1.7e308, 0.0);
    let r = m.display_range(&key).expect("range");
    assert!(r.is_finite() && r.min < r.max, "{r:?}");

    m.on_sample("MSG_A", "Speed", -1.7e308, 1.0);
    m.adjust_value_zoom(6.0);
    let r = m.display_range(&key).expect("range");
    assert_eq!(r, Range::new(f64::MIN, f64::MAX));
    assert!(m.tick());
}

#[test]
fn removing_last_watcher_resets_view() {
    let mut m = manager(config());
    let a = m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    let b = m.add_watcher("MSG_A", "Rpm", &SignalMeta::default()).expect("add");
    m.on_sample("MSG_A", "Speed", 1.0, 5.0);
    m.adjust_time_window(2.0);
    m.adjust_value_zoom(0.5);

    m.remove_watcher(&a).expect("remove");
    assert_eq!(m.view().window_seconds(), 60.0);

    m.remove_watcher(&b).expect("remove");
    assert!(m.view().is_default());
    assert_eq!(m.latest_time(), None);
    assert_eq!(m.x_range(), Range::new(0.0, 30.0));
}

#[test]
fn colours_return_to_pool() {
    let mut m = manager(config());
    let a = m.add_watcher("MSG", "A", &SignalMeta::default()).expect("add");
    let first = m.watcher(&a).map(|w| w.color());
    m.remove_watcher(&a).expect("remove");
    m.clear();
    let b = m.add_watcher("MSG", "B", &SignalMeta::default()).expect("add");
    assert_eq!(m.watcher(&b).map(|w| w.color()), first);
}

#[test]
fn samples_coalesce_until_tick() {
    let mut m = manager(config());
    m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    let renders = |m: &SignalWatcherManager| m.charts().map(|(_, c)| c.render_count()).sum::<u64>();
    let start = renders(&m);
    for i in 0..50 {
        m.on_sample("MSG_A", "Speed", i as f64, i as f64 * 0.1);
    }
    assert_eq!(renders(&m), start);
    assert!(m.is_dirty());
    assert!(m.tick());
    assert_eq!(renders(&m), start + 1);
    assert!(!m.tick());
    assert_eq!(renders(&m), start + 1);
}

#[test]
fn stream_messages() {
    let mut m = manager(config());
    m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    let ok = r#"{"messageId":"MSG_A","signalName":"Speed","value":"42.5","timestampSeconds":1.0}"#;
    assert_eq!(m.on_stream_message(ok), SampleOutcome::Accepted);
    let bad = r#"{"messageId":"MSG_A","signalName":"Speed","value":"fast","timestampSeconds":1.0}"#;
    assert_eq!(m.on_stream_message(bad), SampleOutcome::Invalid);
    assert_eq!(m.on_stream_message("not json"), SampleOutcome::Invalid);

    let u = SignalUpdate { message_id: "MSG_A".into(), signal_name: "Speed".into(), value: 1.0, timestamp_seconds: 2.0 };
    assert_eq!(m.on_signal_update(&u), SampleOutcome::Accepted);
    assert_eq!(m.latest_time(), Some(2.0));
}

#[test]
fn missing_surface_disables_chart_slot() {
    let mut m = SignalWatcherManager::new(Rc::new(NoContext), config()).expect("manager");
    m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    assert_eq!(m.chart_slots(), 1);
    assert_eq!(m.charts().count(), 0);
    assert_eq!(m.on_sample("MSG_A", "Speed", 1.0, 0.0), SampleOutcome::Accepted);
    assert!(m.tick());
}

#[test]
fn zoom_scales_display_range() {
    let mut m = manager(config());
    let key = m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    m.on_sample("MSG_A", "Speed", 40.0, 0.0);
    m.on_sample("MSG_A", "Speed", 60.0, 1.0);
    m.adjust_value_zoom(2.0);
    assert_eq!(m.display_range(&key), Some(Range::new(30.0, 70.0)));
    m.reset_view();
    assert_eq!(m.display_range(&key), Some(Range::new(40.0, 60.0)));
}

#[test]
fn single_value_is_widened() {
    let mut m = manager(config());
    let key = m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    m.on_sample("MSG_A", "Speed", 0.0, 0.0);
    assert_eq!(m.display_range(&key), Some(Range::new(-1.0, 1.0)));
}

#[test]
fn resize_keeps_charts_rendering() {
    let mut m = manager(config());
    m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    m.resize(HostArea::new(320.0, 180.0, 2.0));
    let (_, chart) = m.charts().next().expect("chart");
    assert_eq!(chart.host(), HostArea::new(320.0, 180.0, 2.0));
    m.resize(HostArea::new(0.0, 0.0, 1.0));
    assert_eq!(m.charts().count(), 1);
}

#[test]
fn charts_open_once_host_has_area() {
    let mut m = manager(config().with_host(HostArea::new(0.0, 0.0, 1.0)));
    let key = m.add_watcher("MSG_A", "Speed", &SignalMeta::default()).expect("add");
    m.add_watcher("MSG_A", "Rpm", &SignalMeta::default()).expect("add");
    m.set_presentation_mode(PresentationMode::Separate);
    assert_eq!(m.chart_slots(), 2);
    assert_eq!(m.charts().count(), 0);

    // still no area: nothing to open
    m.resize(HostArea::new(0.0, 120.0, 1.0));
    assert_eq!(m.charts().count(), 0);

    m.resize(HostArea::new(240.0, 140.0, 1.0));
    assert_eq!(m.charts().count(), 2);
    for (owner, chart) in m.charts() {
        assert_eq!(chart.host(), HostArea::new(240.0, 140.0, 1.0));
        assert_eq!(chart.visible_datasets().count(), 1);
        assert!(chart.render_count() > 0);
        assert!(owner.is_some());
    }

    m.on_sample("MSG_A", "Speed", 3.0, 1.0);
    assert!(m.tick());
    let speed = m.charts().find(|(o, _)| *o == Some(&key)).map(|(_, c)| c.visible_datasets().count());
    assert_eq!(speed, Some(1));
}
