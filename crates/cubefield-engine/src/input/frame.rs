use super::types::Key;

/// Key presses collected since the last frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Every key press in arrival order, including auto-repeats.
    pub key_presses: Vec<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.key_presses.clear();
    }
}
