use std::collections::HashSet;
use std::hash::Hash;

use crate::coords::{Vec2, Viewport};

use super::frame::{Edges, InputFrame};
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Pixel deltas are converted to wheel lines at this rate.
const PIXELS_PER_LINE: f32 = 20.0;

/// What is held right now, where the pointer is and how big the surface is.
/// Edges go to the [`InputFrame`] passed to [`apply_event`](Self::apply_event).
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    /// Logical pixels; `None` while the pointer is outside the surface.
    pub pointer_pos: Option<Vec2>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
    pub viewport: Viewport,
}

/// Updates a held set and records the edge. Repeated presses of an item
/// already down, or releases of one that is up, record nothing.
fn transition<T: Copy + Eq + Hash>(down: &mut HashSet<T>, edges: &mut Edges<T>, item: T, pressed: bool) {
    if pressed {
        if down.insert(item) {
            edges.press(item);
        }
    } else if down.remove(&item) {
        edges.release(item);
    }
}

impl InputState {
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(focused) => {
                self.focused = *focused;
                if !focused {
                    // Releases that happen while unfocused are never seen.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => self.pointer_pos = Some(Vec2::new(*x, *y)),
            InputEvent::PointerLeft => self.pointer_pos = None,
            InputEvent::Resized { width, height } => self.viewport = Viewport::new(*width, *height),

            InputEvent::Key { key, state, modifiers, repeat } => {
                self.modifiers = *modifiers;
                let pressed = *state == KeyState::Pressed;
                if pressed && *repeat && self.keys_down.contains(key) {
                    frame.repeats.insert(*key);
                }
                transition(&mut self.keys_down, &mut frame.keys, *key, pressed);
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
                self.modifiers = *modifiers;
                let pressed = *state == MouseButtonState::Pressed;
                transition(&mut self.buttons_down, &mut frame.buttons, *button, pressed);
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                self.modifiers = *modifiers;
                frame.wheel += match *delta {
                    MouseWheelDelta::Line { x, y } => Vec2::new(x, y),
                    MouseWheelDelta::Pixel { x, y } => Vec2::new(x, y) / PIXELS_PER_LINE,
                };
            }

            InputEvent::Text(t) => frame.text.push(t.clone()),
        }

        frame.push_event(ev);
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    #[inline]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_press_records_one_edge() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, InputEvent::left_press(1.0, 1.0));
        frame.clear();
        state.apply_event(&mut frame, InputEvent::left_press(1.0, 1.0));
        assert!(!frame.buttons.was_pressed(MouseButton::Left));
        assert!(state.button_down(MouseButton::Left));
    }

    #[test]
    fn key_repeat_is_tracked_apart_from_the_press_edge() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, InputEvent::key_press(Key::Backspace));
        assert!(frame.keys.was_pressed(Key::Backspace));
        frame.clear();
        state.apply_event(&mut frame, InputEvent::key_repeat(Key::Backspace));
        assert!(!frame.keys.was_pressed(Key::Backspace));
        assert!(frame.repeats.contains(&Key::Backspace));
        assert!(state.key_down(Key::Backspace));
    }

    #[test]
    fn key_event_updates_modifiers() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        let shift = Modifiers { shift: true, ..Modifiers::default() };
        state.apply_event(&mut frame, InputEvent::Key { key: Key::Shift, state: KeyState::Pressed, modifiers: shift, repeat: false });
        assert!(state.modifiers.shift);
        state.apply_event(&mut frame, InputEvent::key_release(Key::Shift));
        assert!(!state.modifiers.any());
        assert!(frame.keys.was_released(Key::Shift));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, InputEvent::left_press(1.0, 1.0));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn pixel_wheel_is_converted_to_lines() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        let ev = InputEvent::MouseWheel { delta: MouseWheelDelta::Pixel { x: 0.0, y: 40.0 }, modifiers: Modifiers::default() };
        state.apply_event(&mut frame, ev);
        assert_eq!(frame.wheel, Vec2::new(0.0, 2.0));
    }
}
