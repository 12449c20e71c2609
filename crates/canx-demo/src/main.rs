// File: crates/canx-demo/src/main.rs
// Summary: Replays a CSV signal trace (or a synthetic one) through the watcher manager and writes PNGs of both modes.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use canx_chart::RasterSurfaceFactory;
use canx_watch::{PresentationMode, SignalMeta, SignalWatcherManager, WatchConfig};
use chrono::DateTime;

/// One row of a recorded trace.
struct TraceSample {
    message: String,
    signal: String,
    t: f64,
    value: f64,
}

/// Command line: `[trace.csv] [--config watch.json] [--out dir]`.
#[derive(Debug, PartialEq)]
struct Args {
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    out_dir: PathBuf,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args { input: None, config: None, out_dir: PathBuf::from("target/out") };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "--out" => {
                let Some(value) = args.next() else {
                    anyhow::bail!("{arg} expects a path");
                };
                if arg == "--config" {
                    parsed.config = Some(PathBuf::from(value));
                } else {
                    parsed.out_dir = PathBuf::from(value);
                }
            }
            _ => parsed.input = Some(PathBuf::from(arg)),
        }
    }
    Ok(parsed)
}

/// Render cadence in trace seconds.
const TICK_SECONDS: f64 = 0.1;

fn main() -> Result<()> {
    init_logging();

    let args = parse_args(std::env::args().skip(1))?;
    let (input, config_path, out_dir) = (args.input, args.config, args.out_dir);

    let config = match &config_path {
        Some(p) => WatchConfig::from_path(p).with_context(|| format!("loading config {}", p.display()))?,
        None => WatchConfig::default(),
    };

    let (trace, metas) = match &input {
        Some(p) => {
            let trace = load_trace(p).with_context(|| format!("failed to load trace '{}'", p.display()))?;
            println!("Loaded {} samples from {}", trace.len(), p.display());
            (trace, Vec::new())
        }
        None => {
            println!("No trace given, using a synthetic one");
            synthetic_trace()
        }
    };
    if trace.is_empty() {
        anyhow::bail!("trace has no usable rows; expected columns message,signal,timestamp,value");
    }

    let mut mgr = SignalWatcherManager::new(Rc::new(RasterSurfaceFactory), config)?;
    let signals: BTreeSet<(String, String)> = trace.iter().map(|s| (s.message.clone(), s.signal.clone())).collect();
    for (message, signal) in &signals {
        let meta = metas
            .iter()
            .find(|(m, s, _)| m == message && s == signal)
            .map(|(_, _, meta)| meta.clone())
            .unwrap_or_default();
        mgr.add_watcher(message.as_str(), signal.as_str(), &meta)?;
    }
    println!("Watching {} signals", signals.len());

    let mut next_tick = trace[0].t + TICK_SECONDS;
    let mut ticks = 0usize;
    for s in &trace {
        mgr.on_sample(&s.message, &s.signal, s.value, s.t);
        if s.t >= next_tick {
            if mgr.tick() {
                ticks += 1;
            }
            next_tick = s.t + TICK_SECONDS;
        }
    }
    mgr.tick();
    log::info!("replayed {} samples in {} render ticks", trace.len(), ticks);

    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    write_charts(&mut mgr, &out_dir, PresentationMode::Combined)?;
    write_charts(&mut mgr, &out_dir, PresentationMode::Separate)?;
    Ok(())
}

fn write_charts(mgr: &mut SignalWatcherManager, out_dir: &Path, mode: PresentationMode) -> Result<()> {
    mgr.set_presentation_mode(mode);
    for (i, (key, chart)) in mgr.charts_mut().enumerate() {
        let name = match mode {
            PresentationMode::Combined => String::from("combined.png"),
            PresentationMode::Separate => format!("separate_{i}.png"),
        };
        let path = out_dir.join(name);
        let png = chart.encode_png()?;
        std::fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
        match key {
            Some(k) => println!("Wrote {} ({k})", path.display()),
            None => println!("Wrote {}", path.display()),
        }
    }
    Ok(())
}

/// Load `message,signal,timestamp,value` rows. Times become seconds since the first row.
fn load_trace(path: &Path) -> Result<Vec<TraceSample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_msg = idx(&["message", "message_id", "msg"]).context("missing message column")?;
    let i_sig = idx(&["signal", "signal_name", "name"]).context("missing signal column")?;
    let i_time = idx(&["timestamp", "time", "t"]).context("missing timestamp column")?;
    let i_val = idx(&["value", "v"]).context("missing value column")?;

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).unwrap_or("");
        let (Some(t), Ok(value)) = (parse_time(field(i_time)), field(i_val).parse::<f64>()) else {
            skipped += 1;
            continue;
        };
        out.push(TraceSample { message: field(i_msg).to_string(), signal: field(i_sig).to_string(), t, value });
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} unparsable rows");
    }

    out.sort_by(|a, b| a.t.total_cmp(&b.t));
    if let Some(t0) = out.first().map(|s| s.t) {
        for s in &mut out {
            s.t -= t0;
        }
    }
    Ok(out)
}

/// Seconds as a plain number, or an RFC 3339 timestamp.
fn parse_time(s: &str) -> Option<f64> {
    if let Ok(v) = s.parse::<f64>() {
        return v.is_finite().then_some(v);
    }
    let dt = DateTime::parse_from_rfc3339(s).ok()?;
    Some(dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9)
}

/// Forty seconds of engine and vehicle signals at 20 Hz.
fn synthetic_trace() -> (Vec<TraceSample>, Vec<(String, String, SignalMeta)>) {
    let metas = vec![
        ("ENGINE".to_string(), "Rpm".to_string(), SignalMeta::with_range(0.0, 8000.0).with_unit("rpm")),
        ("VEHICLE".to_string(), "Speed".to_string(), SignalMeta::with_range(0.0, 250.0).with_unit("km/h")),
        (
            "ENGINE".to_string(),
            "CoolantTemp".to_string(),
            SignalMeta { bit_length: Some(8), offset: Some(-40.0), ..SignalMeta::default() }.with_unit("degC"),
        ),
    ];
    let mut trace = Vec::new();
    for i in 0..800 {
        let t = i as f64 * 0.05;
        let speed = 60.0 + 40.0 * (t * 0.15).sin();
        let rpm = 900.0 + speed * 28.0 + 150.0 * (t * 2.3).sin();
        let coolant = 20.0 + 70.0 * (1.0 - (-t / 15.0).exp());
        for (m, s, v) in [("ENGINE", "Rpm", rpm), ("VEHICLE", "Speed", speed), ("ENGINE", "CoolantTemp", coolant)] {
            trace.push(TraceSample { message: m.to_string(), signal: s.to_string(), t, value: v });
        }
    }
    (trace, metas)
}

fn init_logging() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()))
        .init();
}
