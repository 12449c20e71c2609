// File: crates/canx-chart/src/ticks.rs
// Summary: Compact tick labels for numeric values and time durations.

/// Magnitude-banded numeric label.
///
/// `>= 1000` → 0 decimals, `>= 100` → 1, `>= 10` → 2, `>= 1` → 3,
/// `>= 0.01` → 4, anything smaller uses scientific notation with 2 decimals.
/// Fixed-point output drops trailing zeros.
pub fn format_numeric(value: f64) -> String {
    if !value.is_finite() {
        return String::from("-");
    }
    if value == 0.0 {
        return String::from("0");
    }
    let mag = value.abs();
    let decimals = if mag >= 1000.0 {
        0
    } else if mag >= 100.0 {
        1
    } else if mag >= 10.0 {
        2
    } else if mag >= 1.0 {
        3
    } else if mag >= 0.01 {
        4
    } else {
        return format!("{value:.2e}");
    };
    trim_fraction(format!("{value:.decimals$}"))
}

/// Duration label for a time axis value given in seconds.
///
/// One second and above stays in seconds with one decimal; below that the
/// value is shown in milliseconds with 0-2 decimals depending on magnitude.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return String::from("-");
    }
    if seconds.abs() >= 1.0 {
        return format!("{seconds:.1} s");
    }
    let ms = seconds * 1000.0;
    let mag = ms.abs();
    let decimals = if mag >= 100.0 || mag == 0.0 { 0 } else if mag >= 10.0 { 1 } else { 2 };
    format!("{ms:.decimals$} ms")
}

fn trim_fraction(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') { s.pop(); }
        if s.ends_with('.') { s.pop(); }
    }
    if s == "-0" { s = String::from("0"); }
    s
}
