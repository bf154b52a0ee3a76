use std::collections::HashSet;
use std::hash::Hash;

use crate::coords::Vec2;

use super::types::{InputEvent, Key, MouseButton, TextEvent};

/// Press and release edges of one kind of input (keys or mouse buttons)
/// since the last [`Input::end_frame`](super::Input::end_frame).
///
/// A press and a release of the same item can both land in one frame; both
/// edges are kept so a quick click is not lost.
#[derive(Debug, Clone)]
pub struct Edges<T> {
    pressed: HashSet<T>,
    released: HashSet<T>,
}

impl<T> Default for Edges<T> {
    fn default() -> Self {
        Self { pressed: HashSet::new(), released: HashSet::new() }
    }
}

impl<T: Copy + Eq + Hash> Edges<T> {
    pub fn press(&mut self, item: T) {
        self.pressed.insert(item);
    }

    pub fn release(&mut self, item: T) {
        self.released.insert(item);
    }

    #[inline]
    pub fn was_pressed(&self, item: T) -> bool {
        self.pressed.contains(&item)
    }

    #[inline]
    pub fn was_released(&self, item: T) -> bool {
        self.released.contains(&item)
    }

    pub fn pressed(&self) -> impl Iterator<Item = T> + '_ {
        self.pressed.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty() && self.released.is_empty()
    }

    fn clear(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

/// Everything that happened since the last frame boundary: edges, wheel
/// travel and committed text. Held state lives in
/// [`InputState`](super::InputState).
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,
    pub keys: Edges<Key>,
    /// Keys that auto-repeated while held.
    pub repeats: HashSet<Key>,
    pub buttons: Edges<MouseButton>,
    /// Wheel travel in lines; positive `y` scrolls toward the top.
    pub wheel: Vec2,
    pub text: Vec<TextEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys.clear();
        self.repeats.clear();
        self.buttons.clear();
        self.wheel = Vec2::zero();
        self.text.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Committed characters in arrival order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.iter().flat_map(|t| t.text.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_edges_survive_a_quick_click() {
        let mut edges = Edges::default();
        edges.press(MouseButton::Left);
        edges.release(MouseButton::Left);
        assert!(edges.was_pressed(MouseButton::Left));
        assert!(edges.was_released(MouseButton::Left));
        assert!(!edges.was_pressed(MouseButton::Right));
    }

    #[test]
    fn chars_flatten_text_events_in_order() {
        let mut frame = InputFrame::default();
        frame.text.push(TextEvent { text: "ab".into() });
        frame.text.push(TextEvent { text: "ç".into() });
        assert_eq!(frame.chars().collect::<String>(), "abç");
    }

    #[test]
    fn clear_drops_edges_and_wheel() {
        let mut frame = InputFrame::default();
        frame.buttons.press(MouseButton::Left);
        frame.wheel = Vec2::new(0.0, 2.0);
        frame.repeats.insert(Key::Backspace);
        frame.text.push(TextEvent { text: "ab".into() });
        frame.clear();
        assert!(frame.buttons.is_empty());
        assert!(frame.repeats.is_empty());
        assert_eq!(frame.chars().count(), 0);
        assert_eq!(frame.wheel, Vec2::zero());
    }
}
