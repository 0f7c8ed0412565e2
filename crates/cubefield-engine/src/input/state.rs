use super::frame::InputFrame;
use super::types::{InputEvent, KeyState};
use super::Modifiers;

/// Keyboard state carried between events for a single window.
///
/// winit reports modifiers separately from key events; the last reported state
/// is attached to every translated key event.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
}

impl InputState {
    /// Applies an input event to the current state and records key presses in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = modifiers;
                if state == KeyState::Pressed {
                    frame.key_presses.push(key);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            code: 0,
            repeat,
        }
    }

    #[test]
    fn press_is_recorded() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::ArrowLeft, KeyState::Pressed, false));

        assert_eq!(frame.key_presses, vec![Key::ArrowLeft]);
    }

    #[test]
    fn repeats_are_recorded_as_presses() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::F2, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::F2, KeyState::Pressed, true));
        state.apply_event(&mut frame, key(Key::F2, KeyState::Pressed, true));

        assert_eq!(frame.key_presses, vec![Key::F2, Key::F2, Key::F2]);
    }

    #[test]
    fn release_is_not_a_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Home, KeyState::Released, false));
        assert!(frame.key_presses.is_empty());
    }

    #[test]
    fn presses_keep_arrival_order_until_cleared() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Space, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::Space, KeyState::Released, false));
        state.apply_event(&mut frame, key(Key::End, KeyState::Pressed, false));
        assert_eq!(frame.key_presses, vec![Key::Space, Key::End]);

        frame.clear();
        assert!(frame.key_presses.is_empty());
    }

    #[test]
    fn modifiers_follow_latest_event() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let shift = Modifiers { shift: true, ..Modifiers::default() };
        state.apply_event(&mut frame, InputEvent::ModifiersChanged(shift));
        assert_eq!(state.modifiers, shift);

        state.apply_event(&mut frame, key(Key::Shift, KeyState::Released, false));
        assert_eq!(state.modifiers, Modifiers::default());
    }
}
