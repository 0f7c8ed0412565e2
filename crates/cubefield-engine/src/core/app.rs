use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::device::Gpu;
use crate::input::InputEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// How the runtime should schedule redraws between events.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RedrawMode {
    /// Redraw as fast as presentation allows.
    Continuous,
    /// Redraw only on input or OS request; otherwise sleep with the idle timeout.
    OnDemand,
}

/// Application contract implemented by the binary.
pub trait App {
    /// Called once after the window and its GPU context exist.
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) {
        let _ = gpu;
    }

    /// Called for raw window events, before the runtime handles them.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called for every translated input event, as it arrives.
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Queried after each batch of events to pick the loop's control flow.
    fn redraw_mode(&self) -> RedrawMode {
        RedrawMode::Continuous
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
