use std::time::Duration;

use cubefield_engine::core::{App, AppControl, FrameCtx, RedrawMode};
use cubefield_engine::device::Gpu;
use cubefield_engine::input::{InputEvent, Key, KeyState};
use cubefield_engine::math::Mat4;
use cubefield_engine::render::ClearValues;
use cubefield_engine::render::cube::CubeRenderer;
use cubefield_engine::time::FrameStats;
use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::field::CubeField;
use crate::view::{KeyAction, ViewParams};

const FOCAL_DISTANCE: f32 = 0.9;
const CLEAR_DEPTH: f32 = 0.999;
const DEPTH_NEAR: f32 = 0.2;
const DEPTH_FAR: f32 = 0.99;
const STATS_INTERVAL: Duration = Duration::from_secs(5);

/// Whether the field moves between frames.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Mode {
    Animating,
    Paused,
}

#[derive(Debug, Clone, Default)]
pub struct ViewerOptions {
    pub title: String,
    /// Print adapter details to stdout once the GPU is up.
    pub print_info: bool,
    pub trace_cubes: bool,
}

/// The cube field viewer.
pub struct Viewer {
    options: ViewerOptions,
    view: ViewParams,
    field: CubeField,
    mode: Mode,
    /// Mode last reflected in the title and stats.
    shown: Mode,

    renderer: CubeRenderer,
    projection: Mat4,

    stats: FrameStats,
}

impl Viewer {
    pub fn new(options: ViewerOptions, field: CubeField) -> Self {
        Self {
            options,
            view: ViewParams::default(),
            field,
            mode: Mode::Animating,
            shown: Mode::Animating,
            renderer: CubeRenderer::new().with_depth_range(DEPTH_NEAR..DEPTH_FAR),
            projection: Mat4::projection(FOCAL_DISTANCE),
            stats: FrameStats::new(STATS_INTERVAL),
        }
    }

    pub fn title(&self) -> String {
        match self.mode {
            Mode::Animating => self.options.title.clone(),
            Mode::Paused => format!("{} (paused)", self.options.title),
        }
    }

    /// Applies this frame's key presses in order. Returns `Exit` on Escape.
    fn handle_keys(&mut self, keys: &[Key]) -> AppControl {
        for &key in keys {
            match self.view.apply_key(key) {
                KeyAction::Exit => return AppControl::Exit,
                KeyAction::Pause => self.mode = Mode::Paused,
                KeyAction::Adjusted | KeyAction::Other => self.mode = Mode::Animating,
            }
        }
        AppControl::Continue
    }

    /// The window was uncovered or resized: a paused field starts moving again.
    fn handle_window_event(&mut self, event: &WindowEvent) {
        if matches!(event, WindowEvent::Occluded(false) | WindowEvent::Resized(_)) {
            self.mode = Mode::Animating;
        }
    }

    /// Moves the animation one frame forward.
    fn advance(&mut self) {
        self.view.spin();
        let respawned = self.field.step();
        if respawned > 0 {
            log::trace!("{respawned} cube(s) respawned");
        }

        if self.options.trace_cubes {
            for (i, cube) in self.field.cubes().iter().enumerate() {
                let (p, d) = (&cube.pose, &cube.delta);
                log::trace!(
                    "cube {i}: pos ({:.3}, {:.3}, {:.3}) rot ({:.2}, {:.2}, {:.2}) vel ({:.3}, {:.3}, {:.3})",
                    p.x, p.y, p.z, p.rx, p.ry, p.rz, d.x, d.y, d.z
                );
            }
        }
    }
}

impl App for Viewer {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) {
        let info = gpu.adapter_info();
        log::info!(
            "renderer: {} ({:?}, {:?} backend, driver {} {})",
            info.name,
            info.device_type,
            info.backend,
            info.driver,
            info.driver_info
        );

        if self.options.print_info {
            println!("Renderer:    {}", info.name);
            println!("Vendor:      {:#06x}", info.vendor);
            println!("Device:      {:#06x}", info.device);
            println!("Type:        {:?}", info.device_type);
            println!("Backend:     {:?}", info.backend);
            println!("Driver:      {} {}", info.driver, info.driver_info);
            println!("Format:      {:?}", gpu.surface_format());
            println!("Features:    {:?}", gpu.features());
        }
    }

    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        self.handle_window_event(event);
        AppControl::Continue
    }

    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        match event {
            InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, .. } => AppControl::Exit,
            _ => AppControl::Continue,
        }
    }

    fn redraw_mode(&self) -> RedrawMode {
        match self.mode {
            Mode::Animating => RedrawMode::Continuous,
            Mode::Paused => RedrawMode::OnDemand,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.handle_keys(&ctx.input_frame.key_presses) == AppControl::Exit {
            return AppControl::Exit;
        }

        if self.mode != self.shown {
            self.shown = self.mode;
            log::info!("animation {}", if self.mode == Mode::Paused { "paused" } else { "resumed" });
            ctx.runtime.set_title(self.title());
            self.stats.reset();
            if self.mode == Mode::Animating {
                ctx.runtime.reset_clock();
            }
        }

        if self.mode == Mode::Animating {
            if self.options.trace_cubes {
                log::trace!("frame {}: dt {:.2} ms", ctx.time.frame_index, ctx.time.dt * 1000.0);
            }
            self.advance();
            if let Some(report) = self.stats.record(&ctx.time) {
                log::debug!("{} frames in {:.2?} ({:.1} fps)", report.frames, report.elapsed, report.fps());
            }
        }

        let instances = self.field.instances(&self.view.matrix());

        let clear = ClearValues { depth: CLEAR_DEPTH, ..ClearValues::default() };
        let (renderer, projection) = (&mut self.renderer, &self.projection);
        ctx.render(clear, |rctx, target| renderer.render(rctx, target, projection, &instances))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldConfig;
    use winit::dpi::PhysicalSize;

    fn viewer() -> Viewer {
        let options = ViewerOptions { title: "cubefield".into(), ..ViewerOptions::default() };
        Viewer::new(options, CubeField::new(FieldConfig::default(), Some(11)))
    }

    // ── mode ──────────────────────────────────────────────────────────────

    #[test]
    fn starts_animating_continuously() {
        let v = viewer();
        assert_eq!(v.mode, Mode::Animating);
        assert_eq!(v.redraw_mode(), RedrawMode::Continuous);
        assert_eq!(v.title(), "cubefield");
    }

    #[test]
    fn space_pauses_and_any_key_resumes() {
        let mut v = viewer();
        assert_eq!(v.handle_keys(&[Key::Space]), AppControl::Continue);
        assert_eq!(v.mode, Mode::Paused);
        assert_eq!(v.redraw_mode(), RedrawMode::OnDemand);
        assert_eq!(v.title(), "cubefield (paused)");

        v.handle_keys(&[Key::Unknown(3)]);
        assert_eq!(v.mode, Mode::Animating);
    }

    #[test]
    fn view_keys_resume_animation() {
        let mut v = viewer();
        v.handle_keys(&[Key::Space, Key::F2]);
        assert_eq!(v.mode, Mode::Animating);
        assert_eq!(v.view.scale, 2.0);
    }

    #[test]
    fn escape_stops_processing_keys() {
        let mut v = viewer();
        assert_eq!(v.handle_keys(&[Key::Escape, Key::F2]), AppControl::Exit);
        assert_eq!(v.view.scale, 1.0);
    }

    #[test]
    fn escape_press_exits_immediately() {
        let mut v = viewer();
        let press = InputEvent::Key {
            key: Key::Escape,
            state: KeyState::Pressed,
            modifiers: Default::default(),
            code: 0,
            repeat: false,
        };
        assert_eq!(v.on_input(&press), AppControl::Exit);
        let shift = InputEvent::ModifiersChanged(Default::default());
        assert_eq!(v.on_input(&shift), AppControl::Continue);
    }

    #[test]
    fn uncovering_window_resumes_animation() {
        let mut v = viewer();
        v.handle_keys(&[Key::Space]);
        v.handle_window_event(&WindowEvent::Occluded(true));
        assert_eq!(v.mode, Mode::Paused);

        v.handle_window_event(&WindowEvent::Occluded(false));
        assert_eq!(v.mode, Mode::Animating);
        assert_eq!(v.redraw_mode(), RedrawMode::Continuous);
    }

    #[test]
    fn resize_resumes_animation() {
        let mut v = viewer();
        v.handle_keys(&[Key::Space]);
        v.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(300, 300)));
        assert_eq!(v.mode, Mode::Animating);
    }

    #[test]
    fn own_redraws_keep_field_paused() {
        let mut v = viewer();
        v.handle_keys(&[Key::Space]);
        v.handle_window_event(&WindowEvent::RedrawRequested);
        v.handle_window_event(&WindowEvent::Focused(true));
        assert_eq!(v.mode, Mode::Paused);
        assert_eq!(v.title(), "cubefield (paused)");
    }

    // ── animation ─────────────────────────────────────────────────────────

    #[test]
    fn advance_spins_view_and_moves_cubes() {
        let mut v = viewer();
        let before: Vec<f32> = v.field.cubes().iter().map(|c| c.pose.z).collect();
        v.advance();
        assert!((v.view.rot_x - 0.1).abs() < 1e-6);
        let moved = v
            .field
            .cubes()
            .iter()
            .zip(&before)
            .any(|(c, z)| c.pose.z != *z);
        assert!(moved);
    }
}
