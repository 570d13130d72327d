// File: crates/curve-chart/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;
use std::path::Path;

use crate::error::RenderError;
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, ticks};
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_grid: bool,
    /// Tick and axis labels; tests turn this off to avoid font variance.
    pub draw_labels: bool,
    pub line_width: f32,
    /// Approximate number of grid intervals per axis.
    pub x_ticks: usize,
    pub y_ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_grid: true,
            draw_labels: true,
            line_width: 1.5,
            x_ticks: 10,
            y_ticks: 8,
        }
    }
}

impl RenderOptions {
    pub fn plot_rect(&self) -> RectI32 {
        self.insets.plot_rect(self.width, self.height)
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padding each span by `margin`.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Rasterize into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(RenderError::InvalidSize { width: opts.width, height: opts.height });
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface)?;
        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        log::debug!("rendered {}x{} chart with {} series", opts.width, opts.height, self.series.len());
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(RenderError::ReadPixels)?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let plot = opts.plot_rect();
        canvas.clear(theme.background);

        let mut fill = skia::Paint::default();
        fill.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &fill);

        let x_ticks = ticks(self.x_axis.min, self.x_axis.max, opts.x_ticks);
        let y_ticks = ticks(self.y_axis.min, self.y_axis.max, opts.y_ticks);

        if opts.draw_grid {
            draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme);
        }

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s, opts);
        }
        canvas.restore();

        draw_frame(canvas, &plot, theme);
        if opts.draw_labels {
            draw_labels(canvas, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, opts);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn sx(plot: &RectI32, axis: &Axis, x: f64) -> f32 {
    plot.left as f32 + ((x - axis.min) / axis.span()) as f32 * plot.width() as f32
}

fn sy(plot: &RectI32, axis: &Axis, y: f64) -> f32 {
    plot.bottom as f32 - ((y - axis.min) / axis.span()) as f32 * plot.height() as f32
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);

    let (t, b) = (plot.top as f32, plot.bottom as f32);
    let (l, r) = (plot.left as f32, plot.right as f32);
    for &x in x_ticks {
        let px = sx(plot, x_axis, x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    for &y in y_ticks {
        let py = sy(plot, y_axis, y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    canvas.draw_rect(plot.to_skia(), &paint);
}

fn label_font(size: f32) -> skia::Font {
    // Font::default() carries no typeface on recent Skia builds.
    match skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::normal()) {
        Some(tf) => skia::Font::from_typeface(tf, size),
        None => {
            let mut font = skia::Font::default();
            font.set_size(size);
            font
        }
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);
    let mut text = skia::Paint::default();
    text.set_color(theme.axis_label);
    text.set_anti_alias(true);
    let font = label_font(12.0);

    let (l, b) = (plot.left as f32, plot.bottom as f32);
    let x_step = nice_step(x_axis.max - x_axis.min, opts.x_ticks).unwrap_or(1.0);
    for &x in x_ticks {
        let px = sx(plot, x_axis, x);
        canvas.draw_line((px, b), (px, b + 4.0), &tick_paint);
        let s = format_tick(x, x_step);
        let (w, _) = font.measure_str(&s, Some(&text));
        canvas.draw_str(&s, (px - w * 0.5, b + 18.0), &font, &text);
    }
    let y_step = nice_step(y_axis.max - y_axis.min, opts.y_ticks).unwrap_or(1.0);
    for &y in y_ticks {
        let py = sy(plot, y_axis, y);
        canvas.draw_line((l - 4.0, py), (l, py), &tick_paint);
        let s = format_tick(y, y_step);
        let (w, _) = font.measure_str(&s, Some(&text));
        canvas.draw_str(&s, (l - 8.0 - w, py + 4.0), &font, &text);
    }

    let axis_font = label_font(14.0);
    if !x_axis.label.is_empty() {
        let (w, _) = axis_font.measure_str(&x_axis.label, Some(&text));
        let cx = plot.left as f32 + plot.width() as f32 * 0.5;
        canvas.draw_str(&x_axis.label, (cx - w * 0.5, b + 42.0), &axis_font, &text);
    }
    if !y_axis.label.is_empty() {
        canvas.draw_str(&y_axis.label, (8.0, plot.top as f32 - 8.0), &axis_font, &text);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    opts: &RenderOptions,
) {
    if series.data.len() < 2 {
        return;
    }

    // Break the path at non-finite samples instead of drawing through them.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    let mut skipped = 0usize;
    for &(x, y) in &series.data {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            skipped += 1;
            continue;
        }
        let p = (sx(plot, x_axis, x), sy(plot, y_axis, y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} non-finite points while drawing series");
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(opts.line_width);
    stroke.set_color(series.color.unwrap_or(opts.theme.line_stroke));

    canvas.draw_path(&path, &stroke);
}
