// File: crates/canx-chart/src/render.rs
// Summary: Stateless surface renderer: grid, axes, tick labels, series lines and legend.

use skia_safe as skia;

use crate::axis::{AxisSide, Scales, YAxis};
use crate::config::ChartConfig;
use crate::geometry::RectF;
use crate::grid::{category_slot, linspace};
use crate::scale::{XMap, YMap};
use crate::series::{Dataset, Series};
use crate::surface::DrawingSurface;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::ticks::{format_duration, format_numeric};
use crate::types::{Insets, LogicalSize, PixelSize};

/// Which plot the renderer draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlotKind {
    /// Continuous (seconds, value) lines with a duration-labelled x axis.
    #[default]
    TimeSeries,
    /// Values against discrete labels, evenly spaced by index.
    Category,
}

/// Device transform for one render pass: pixels per logical unit on each axis.
pub fn backing_transform(logical: LogicalSize, pixels: PixelSize) -> (f32, f32) {
    if logical.is_empty() || pixels.is_empty() {
        return (1.0, 1.0);
    }
    (pixels.width as f32 / logical.width, pixels.height as f32 / logical.height)
}

/// Padding around the axis box: base insets for the plot kind, widened by one
/// gutter per extra y axis on a side.
pub fn plot_insets(kind: PlotKind, scales: &Scales, config: &ChartConfig) -> Insets {
    let base = match kind {
        PlotKind::TimeSeries => config.time_insets,
        PlotKind::Category => config.category_insets,
    };
    let left_axes = scales.count_on(AxisSide::Left);
    let right_axes = scales.count_on(AxisSide::Right);
    let gutter = config.axis_gutter.max(0.0);
    Insets::new(
        base.left + left_axes.saturating_sub(1) as f32 * gutter,
        base.right + right_axes as f32 * gutter,
        base.top,
        base.bottom,
    )
}

/// Axis box for `size`.
pub fn plot_box(size: LogicalSize, kind: PlotKind, scales: &Scales, config: &ChartConfig) -> RectF {
    RectF::inset(size, &plot_insets(kind, scales, config))
}

/// Draws charts onto a [`DrawingSurface`]. Holds only the font collection;
/// every pass is a function of its arguments.
pub struct SurfaceRenderer {
    text: Option<TextShaper>,
}

impl SurfaceRenderer {
    pub fn new(draw_labels: bool) -> Self {
        Self { text: if draw_labels { Some(TextShaper::new()) } else { None } }
    }

    pub fn render(
        &self,
        surface: &mut DrawingSurface,
        datasets: &[Dataset],
        scales: &Scales,
        kind: PlotKind,
        config: &ChartConfig,
    ) {
        let theme = config.theme();
        let logical = surface.logical_size();
        let (sx, sy) = backing_transform(logical, surface.pixel_size());

        surface.clear(theme.background);
        if logical.is_empty() {
            return;
        }

        let plot = plot_box(logical, kind, scales, config);
        let canvas = surface.canvas();
        canvas.save();
        canvas.scale((sx, sy));

        self.draw_grid(canvas, &plot, datasets, scales, kind, config, &theme);
        self.draw_axes(canvas, &plot, scales, config, &theme);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for ds in datasets.iter().filter(|d| !d.hidden) {
            let Some(axis) = scales.y(&ds.axis).or_else(|| scales.first_y()) else { continue };
            let ymap = YMap::new(&plot, &axis.scale);
            match &ds.series {
                Series::Time(buf) => {
                    let xmap = XMap::new(&plot, &scales.x);
                    let buf = buf.borrow();
                    draw_polyline(canvas, buf.iter().map(|(t, v)| (xmap.to_px(t), ymap.to_px(v), v)), ds);
                }
                Series::Category { values, labels } => {
                    let n = labels.len().max(values.len());
                    let pts = values
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| (category_slot(plot.left, plot.right, i, n), ymap.to_px(v), v));
                    draw_polyline(canvas, pts, ds);
                }
            }
        }
        canvas.restore();

        if config.draw_legend {
            self.draw_legend(canvas, &plot, datasets, config, &theme);
        }
        canvas.restore();
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_grid(
        &self,
        canvas: &skia::Canvas,
        plot: &RectF,
        datasets: &[Dataset],
        scales: &Scales,
        kind: PlotKind,
        config: &ChartConfig,
        theme: &Theme,
    ) {
        let mut paint = skia::Paint::default();
        paint.set_color(theme.grid);
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.0);

        // verticals + x labels
        let label_y = plot.bottom + config.font_size + 6.0;
        match kind {
            PlotKind::TimeSeries => {
                let xmap = XMap::new(plot, &scales.x);
                for x in linspace(scales.x.min, scales.x.max, config.x_ticks) {
                    let px = xmap.to_px(x);
                    canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
                    self.label(canvas, &format_duration(x), px, label_y, Anchor::Center, config, theme.tick);
                }
            }
            PlotKind::Category => {
                let labels = category_labels(datasets);
                let n = labels.len().max(max_category_len(datasets));
                for i in 0..n {
                    let px = category_slot(plot.left, plot.right, i, n);
                    canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
                    if let Some(text) = labels.get(i) {
                        self.name_label(canvas, text, px, label_y, Anchor::Center, config, theme.tick);
                    }
                }
            }
        }

        // horizontals; every y axis spans the same pixel rows
        let rows = linspace(plot.bottom as f64, plot.top as f64, config.y_ticks);
        for &py in &rows {
            canvas.draw_line((plot.left, py as f32), (plot.right, py as f32), &paint);
        }
        let fractions = linspace(0.0, 1.0, config.y_ticks);
        let (mut left_i, mut right_i) = (0usize, 0usize);
        for (_, axis) in scales.y_axes() {
            let x = axis_x(plot, axis.side, &mut left_i, &mut right_i, config.axis_gutter);
            let color = axis.color.unwrap_or(theme.tick);
            for (&py, &f) in rows.iter().zip(fractions.iter()) {
                let value = axis.scale.min + (axis.scale.max - axis.scale.min) * f;
                let text = format_numeric(value);
                let py = py as f32 + config.font_size * 0.35;
                match axis.side {
                    AxisSide::Left => self.label(canvas, &text, x - 6.0, py, Anchor::Right, config, color),
                    AxisSide::Right => self.label(canvas, &text, x + 6.0, py, Anchor::Left, config, color),
                }
            }
        }
    }

    fn draw_axes(&self, canvas: &skia::Canvas, plot: &RectF, scales: &Scales, config: &ChartConfig, theme: &Theme) {
        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(theme.axis_line);
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.5);

        canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis_paint);
        if scales.y_count() == 0 {
            canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis_paint);
            return;
        }
        let (mut left_i, mut right_i) = (0usize, 0usize);
        for (_, axis) in scales.y_axes() {
            let x = axis_x(plot, axis.side, &mut left_i, &mut right_i, config.axis_gutter);
            if let Some(c) = axis.color { axis_paint.set_color(c); } else { axis_paint.set_color(theme.axis_line); }
            canvas.draw_line((x, plot.top), (x, plot.bottom), &axis_paint);
            self.axis_title(canvas, axis, x, plot, config, theme);
        }
    }

    fn axis_title(&self, canvas: &skia::Canvas, axis: &YAxis, x: f32, plot: &RectF, config: &ChartConfig, theme: &Theme) {
        if axis.scale.label.is_empty() { return; }
        let anchor = match axis.side { AxisSide::Left => Anchor::Right, AxisSide::Right => Anchor::Left };
        let dx = match axis.side { AxisSide::Left => -4.0, AxisSide::Right => 4.0 };
        let color = axis.color.unwrap_or(theme.axis_label);
        self.name_label(canvas, &axis.scale.label, x + dx, plot.top - 2.0, anchor, config, color);
    }

    fn draw_legend(&self, canvas: &skia::Canvas, plot: &RectF, datasets: &[Dataset], config: &ChartConfig, theme: &Theme) {
        let visible: Vec<&Dataset> = datasets.iter().filter(|d| !d.hidden).collect();
        if visible.is_empty() {
            return;
        }
        let row_h = config.font_size + 6.0;
        let swatch = (config.font_size - 1.0).max(4.0);
        let text_w = match &self.text {
            Some(t) => visible
                .iter()
                .map(|d| t.measure_width(&d.legend_text(), config.font_size, false))
                .fold(0.0f32, f32::max),
            None => 0.0,
        };
        let (x0, y0) = (plot.left + 8.0, plot.top + 8.0);
        let w = 8.0 + swatch + if text_w > 0.0 { 6.0 + text_w } else { 0.0 } + 8.0;
        let h = 6.0 + row_h * visible.len() as f32;

        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(theme.legend_background);
        canvas.draw_rect(skia::Rect::from_xywh(x0, y0, w, h), &bg);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        for (i, ds) in visible.iter().enumerate() {
            let top = y0 + 3.0 + row_h * i as f32 + (row_h - swatch) * 0.5;
            fill.set_color(ds.color);
            canvas.draw_rect(skia::Rect::from_xywh(x0 + 8.0, top, swatch, swatch), &fill);
            let baseline = top + swatch * 0.9;
            self.name_label(canvas, &ds.legend_text(), x0 + 8.0 + swatch + 6.0, baseline, Anchor::Left, config, theme.legend_text);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn label(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, anchor: Anchor, config: &ChartConfig, color: skia::Color) {
        if let Some(t) = &self.text {
            t.draw(canvas, text, x, y, anchor, config.font_size, color, true);
        }
    }

    /// Like [`label`](Self::label) in the proportional family, for names and units.
    #[allow(clippy::too_many_arguments)]
    fn name_label(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, anchor: Anchor, config: &ChartConfig, color: skia::Color) {
        if let Some(t) = &self.text {
            t.draw(canvas, text, x, y, anchor, config.font_size, color, false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// X position of the next y axis on `side`, advancing that side's counter.
fn axis_x(plot: &RectF, side: AxisSide, left_i: &mut usize, right_i: &mut usize, gutter: f32) -> f32 {
    match side {
        AxisSide::Left => {
            let x = plot.left - *left_i as f32 * gutter;
            *left_i += 1;
            x
        }
        AxisSide::Right => {
            let x = plot.right + *right_i as f32 * gutter;
            *right_i += 1;
            x
        }
    }
}

/// Labels of the first category dataset, verbatim.
fn category_labels(datasets: &[Dataset]) -> Vec<String> {
    datasets
        .iter()
        .find_map(|d| match &d.series {
            Series::Category { labels, .. } if !labels.is_empty() => Some(labels.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

fn max_category_len(datasets: &[Dataset]) -> usize {
    datasets
        .iter()
        .map(|d| match &d.series {
            Series::Category { values, .. } => values.len(),
            Series::Time(_) => 0,
        })
        .max()
        .unwrap_or(0)
}

/// Stroke points in order; non-finite values break the line. A lone point is drawn as a dot.
fn draw_polyline<I: Iterator<Item = (f32, f32, f64)>>(canvas: &skia::Canvas, points: I, ds: &Dataset) {
    let mut path = skia::PathBuilder::new();
    let mut in_segment = false;
    let mut drawn = 0usize;
    let mut last = None;
    for (x, y, v) in points {
        if !v.is_finite() || !x.is_finite() || !y.is_finite() {
            in_segment = false;
            continue;
        }
        if in_segment {
            path.line_to((x, y));
        } else {
            path.move_to((x, y));
            in_segment = true;
        }
        drawn += 1;
        last = Some((x, y));
    }
    if drawn == 0 {
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_color(ds.color);
    if drawn == 1 {
        if let Some((x, y)) = last {
            stroke.set_style(skia::paint::Style::Fill);
            canvas.draw_circle((x, y), ds.line_width.max(1.5), &stroke);
        }
        return;
    }
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(ds.line_width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path.snapshot(), &stroke);
}
