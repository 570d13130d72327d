// File: crates/curve-plot/src/window.rs
// Summary: Blocking plot window; renders chart-core to RGBA and blits it via winit + softbuffer (CPU).

use anyhow::{anyhow, Result};
use std::num::NonZeroU32;
use std::path::PathBuf;
use winit::dpi::LogicalSize;
use winit::event::{
    ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};
use winit::event_loop::EventLoop;
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

use curve_chart::{Chart, RenderOptions, ViewState};

use crate::plot::AUTOSCALE_MARGIN;

const TITLE: &str = "Interest Curve";
const SAVE_PATH: &str = "target/out/interest_curve.png";

/// Interactive state for the single chart shown in the window.
struct PlotView {
    chart: Chart,
    opts: RenderOptions,
    home: ViewState,
    view: ViewState,
    cursor: Option<(f64, f64)>,
    dragging: bool,
}

impl PlotView {
    fn new(chart: Chart, opts: RenderOptions) -> Self {
        let home = ViewState::from_chart(&chart, AUTOSCALE_MARGIN);
        Self { chart, opts, home, view: home, cursor: None, dragging: false }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.opts.width = width as i32;
        self.opts.height = height as i32;
    }

    fn cursor_moved(&mut self, x: f64, y: f64) -> bool {
        let moved = match (self.dragging, self.cursor) {
            (true, Some((px, py))) => {
                let plot = self.opts.plot_rect();
                self.view.pan_by_pixels(x - px, y - py, &plot);
                true
            }
            _ => false,
        };
        self.cursor = Some((x, y));
        moved
    }

    fn scroll(&mut self, amount: f64) -> bool {
        let Some((cx, cy)) = self.cursor else { return false };
        let plot = self.opts.plot_rect();
        if !plot.contains(cx, cy) {
            return false;
        }
        self.view.zoom_at_pixel(amount, cx, cy, &plot);
        true
    }

    fn reset(&mut self) {
        self.view = self.home;
    }

    fn current_chart(&mut self) -> &Chart {
        self.view.apply_to_chart(&mut self.chart);
        &self.chart
    }

    fn save(&mut self) -> Result<PathBuf> {
        let out = PathBuf::from(SAVE_PATH);
        let opts = self.opts.clone();
        self.current_chart().render_to_png(&opts, &out)?;
        Ok(out)
    }

    fn redraw(&mut self, surface: &mut softbuffer::Surface) -> Result<()> {
        let (Some(w), Some(h)) = (
            NonZeroU32::new(self.opts.width.max(0) as u32),
            NonZeroU32::new(self.opts.height.max(0) as u32),
        ) else {
            // minimized
            return Ok(());
        };
        let opts = self.opts.clone();
        let (rgba, _, _, _) = self.current_chart().render_to_rgba8(&opts)?;

        surface.resize(w, h).map_err(|e| anyhow!("failed to resize surface: {e}"))?;
        let mut frame = surface.buffer_mut().map_err(|e| anyhow!("failed to map frame: {e}"))?;
        // softbuffer wants 0RGB in the low 24 bits
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
        frame.present().map_err(|e| anyhow!("failed to present frame: {e}"))?;
        Ok(())
    }
}

/// Open the plot window and block until it is closed.
pub fn show(chart: Chart, opts: RenderOptions) -> Result<()> {
    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(LogicalSize::new(opts.width as f64, opts.height as f64))
        .build(&event_loop)
        .map_err(|e| anyhow!("failed to create window: {e}"))?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("failed to create softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("failed to create softbuffer surface: {e}"))?;

    let mut state = PlotView::new(chart, opts);
    let size = window.inner_size();
    state.resize(size.width, size.height);
    log::info!("window open at {}x{}", size.width, size.height);

    let mut failure: Option<anyhow::Error> = None;
    event_loop.run_return(|event, _, control_flow| {
        control_flow.set_wait();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => control_flow.set_exit(),
                WindowEvent::Resized(new_size) => {
                    state.resize(new_size.width, new_size.height);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if state.cursor_moved(position.x, position.y) {
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseInput { state: button_state, button: MouseButton::Left, .. } => {
                    state.dragging = button_state == ElementState::Pressed;
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let amount = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
                        MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
                    };
                    if state.scroll(amount) {
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => control_flow.set_exit(),
                    VirtualKeyCode::R => {
                        state.reset();
                        window.request_redraw();
                    }
                    VirtualKeyCode::S => match state.save() {
                        Ok(path) => println!("Wrote {}", path.display()),
                        Err(e) => log::error!("save failed: {e:#}"),
                    },
                    _ => {}
                },
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = state.redraw(&mut surface) {
                    failure = Some(e);
                    control_flow.set_exit();
                }
            }
            _ => {}
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_chart::Series;

    fn view() -> PlotView {
        let mut chart = Chart::new();
        chart.add_series(Series::line(vec![(-1.0, -1.0), (1.0, 1.0)]));
        PlotView::new(chart, RenderOptions::default())
    }

    #[test]
    fn drag_pans_only_while_pressed() {
        let mut v = view();
        assert!(!v.cursor_moved(300.0, 300.0));
        assert!(!v.cursor_moved(320.0, 300.0));
        v.dragging = true;
        assert!(v.cursor_moved(340.0, 300.0));
        assert!(v.view.x_min < v.home.x_min);
    }

    #[test]
    fn scroll_outside_plot_is_ignored() {
        let mut v = view();
        assert!(!v.scroll(0.5));
        v.cursor_moved(1.0, 1.0);
        assert!(!v.scroll(0.5));
        v.cursor_moved(500.0, 300.0);
        assert!(v.scroll(0.5));
        assert!(v.view.x_max - v.view.x_min < v.home.x_max - v.home.x_min);
    }

    #[test]
    fn reset_restores_autoscaled_view() {
        let mut v = view();
        v.cursor_moved(500.0, 300.0);
        v.scroll(0.3);
        v.reset();
        assert_eq!(v.view, v.home);
        let home = v.home;
        let chart = v.current_chart();
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (home.x_min, home.x_max));
    }
}
