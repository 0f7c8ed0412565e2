use cubefield_engine::input::Key;
use cubefield_engine::math::Mat4;

/// Degrees added or removed per rotation key press.
pub const ROTATE_STEP: f32 = 5.0;
/// Eye-space units per Home/End press.
pub const DOLLY_STEP: f32 = 0.1;
/// Factor applied by F1 (divide) and F2 (multiply).
pub const ZOOM_FACTOR: f32 = 2.0;
/// Degrees about X added on every animated frame.
pub const SPIN_PER_FRAME: f32 = 0.1;

/// Global view parameters shared by every cube.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewParams {
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    pub trans_z: f32,
    pub scale: f32,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            rot_x: 0.0,
            rot_y: 0.0,
            rot_z: 0.0,
            trans_z: 2.0,
            scale: 1.0,
        }
    }
}

/// What a key press meant for the viewer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyAction {
    /// A view parameter changed.
    Adjusted,
    Pause,
    Exit,
    /// Any other key, modifiers included.
    Other,
}

impl ViewParams {
    /// View matrix: rotate about x, y, z, push back by `trans_z`, then scale.
    pub fn matrix(&self) -> Mat4 {
        let mut m = Mat4::unity();
        m.rotate_x(self.rot_x)
            .rotate_y(self.rot_y)
            .rotate_z(self.rot_z)
            .translate(0.0, 0.0, self.trans_z)
            .scale(self.scale, self.scale, self.scale);
        m
    }

    pub fn spin(&mut self) {
        self.rot_x += SPIN_PER_FRAME;
    }

    pub fn apply_key(&mut self, key: Key) -> KeyAction {
        match key {
            Key::Escape => return KeyAction::Exit,
            Key::Space => return KeyAction::Pause,

            Key::ArrowUp => self.rot_x += ROTATE_STEP,
            Key::ArrowDown => self.rot_x -= ROTATE_STEP,
            Key::ArrowLeft => self.rot_y += ROTATE_STEP,
            Key::ArrowRight => self.rot_y -= ROTATE_STEP,
            Key::PageUp => self.rot_z += ROTATE_STEP,
            Key::PageDown => self.rot_z -= ROTATE_STEP,
            Key::Home => self.trans_z += DOLLY_STEP,
            Key::End => self.trans_z -= DOLLY_STEP,
            Key::F1 => self.scale /= ZOOM_FACTOR,
            Key::F2 => self.scale *= ZOOM_FACTOR,

            _ => return KeyAction::Other,
        }
        KeyAction::Adjusted
    }
}
