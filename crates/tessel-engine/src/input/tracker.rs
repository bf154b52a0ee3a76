use std::collections::{HashMap, HashSet};

use crate::coords::{Vec2, Viewport};

use super::frame::InputFrame;
use super::state::InputState;
use super::types::{CursorShape, InputEvent, Key, Modifiers, MouseButton};

/// Maximum delay between two presses for them to count as a double click.
pub const DOUBLE_CLICK_TIME: f64 = 0.30;

/// Maximum pointer travel between two presses of a double click.
pub const DOUBLE_CLICK_DISTANCE: f32 = 6.0;

/// Position reported while the pointer is outside the surface.
const OFFSCREEN: Vec2 = Vec2::new(-f32::MAX, -f32::MAX);

#[derive(Debug, Clone, Copy)]
struct ButtonTrack {
    press_pos: Vec2,
    drag_origin: Vec2,
    max_travel: f32,
    last_click_time: f64,
    last_click_pos: Vec2,
}

impl Default for ButtonTrack {
    fn default() -> Self {
        Self {
            press_pos: Vec2::zero(),
            drag_origin: Vec2::zero(),
            max_travel: 0.0,
            last_click_time: f64::NEG_INFINITY,
            last_click_pos: OFFSCREEN,
        }
    }
}

/// Frame-synchronous input layer consumed by the UI.
///
/// Events are applied as they arrive with [`apply_event`](Self::apply_event);
/// [`new_frame`](Self::new_frame) derives press origins and double clicks,
/// and [`end_frame`](Self::end_frame) drops the frame's edges.
#[derive(Debug, Default)]
pub struct Input {
    state: InputState,
    frame: InputFrame,
    time: f64,
    delta_time: f32,
    tracks: HashMap<MouseButton, ButtonTrack>,
    double_clicked: HashSet<MouseButton>,
    cursor: CursorShape,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_event(&mut self, ev: InputEvent) {
        self.state.apply_event(&mut self.frame, ev);
    }

    /// Advances the clock by `dt` seconds and records this frame's press edges.
    pub fn new_frame(&mut self, dt: f32) {
        self.delta_time = dt.max(0.0);
        self.time += f64::from(self.delta_time);
        self.cursor = CursorShape::Arrow;
        self.double_clicked.clear();

        let pos = self.mouse_pos();
        for button in self.frame.buttons.pressed() {
            let track = self.tracks.entry(button).or_default();
            let double = self.time - track.last_click_time <= DOUBLE_CLICK_TIME
                && (pos - track.last_click_pos).length() <= DOUBLE_CLICK_DISTANCE;
            if double {
                self.double_clicked.insert(button);
                track.last_click_time = f64::NEG_INFINITY;
            } else {
                track.last_click_time = self.time;
            }
            track.last_click_pos = pos;
            track.press_pos = pos;
            track.drag_origin = pos;
            track.max_travel = 0.0;
        }

        for button in &self.state.buttons_down {
            if let Some(track) = self.tracks.get_mut(button) {
                track.max_travel = track.max_travel.max((pos - track.press_pos).length());
            }
        }
    }

    /// Clears per-frame edges, wheel and text.
    pub fn end_frame(&mut self) {
        self.frame.clear();
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Pointer position, or a far off-screen point when the pointer is outside.
    #[inline]
    pub fn mouse_pos(&self) -> Vec2 {
        self.state.pointer_pos.unwrap_or(OFFSCREEN)
    }

    #[inline]
    pub fn has_pointer(&self) -> bool {
        self.state.pointer_pos.is_some()
    }

    #[inline]
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.state.button_down(button)
    }

    /// Press edge this frame.
    #[inline]
    pub fn is_mouse_clicked(&self, button: MouseButton) -> bool {
        self.frame.buttons.was_pressed(button)
    }

    /// Release edge this frame.
    #[inline]
    pub fn is_mouse_released(&self, button: MouseButton) -> bool {
        self.frame.buttons.was_released(button)
    }

    #[inline]
    pub fn is_mouse_double_clicked(&self, button: MouseButton) -> bool {
        self.double_clicked.contains(&button)
    }

    /// True while `button` is held and the pointer has travelled at least
    /// `threshold` pixels from where it was pressed.
    pub fn is_mouse_dragging(&self, button: MouseButton, threshold: f32) -> bool {
        if !self.is_mouse_down(button) {
            return false;
        }
        let Some(track) = self.tracks.get(&button) else {
            return false;
        };
        let travel = track.max_travel.max((self.mouse_pos() - track.press_pos).length());
        travel >= threshold
    }

    /// Pointer movement since the drag origin, or zero below `threshold`.
    pub fn mouse_drag_delta(&self, button: MouseButton, threshold: f32) -> Vec2 {
        if !self.is_mouse_dragging(button, threshold) {
            return Vec2::zero();
        }
        match self.tracks.get(&button) {
            Some(track) => self.mouse_pos() - track.drag_origin,
            None => Vec2::zero(),
        }
    }

    /// Moves the drag origin to the current pointer position.
    pub fn reset_mouse_drag_delta(&mut self, button: MouseButton) {
        let pos = self.mouse_pos();
        if let Some(track) = self.tracks.get_mut(&button) {
            track.drag_origin = pos;
        }
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.state.key_down(key)
    }

    /// Press edge this frame; with `repeat`, auto-repeats of a held key count too.
    pub fn is_key_pressed(&self, key: Key, repeat: bool) -> bool {
        self.frame.keys.was_pressed(key) || (repeat && self.frame.repeats.contains(&key))
    }

    #[inline]
    pub fn is_key_released(&self, key: Key) -> bool {
        self.frame.keys.was_released(key)
    }

    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.state.modifiers
    }

    /// Characters committed since the last frame boundary.
    pub fn text_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.frame.chars()
    }

    /// Wheel lines accumulated this frame; positive scrolls toward the top.
    #[inline]
    pub fn mouse_wheel(&self) -> f32 {
        self.frame.wheel.y
    }

    #[inline]
    pub fn mouse_wheel_h(&self) -> f32 {
        self.frame.wheel.x
    }

    pub fn set_cursor(&mut self, shape: CursorShape) {
        self.cursor = shape;
    }

    /// Cursor shape requested during the current frame.
    #[inline]
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.state.viewport = viewport;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    #[inline]
    pub fn state(&self) -> &InputState {
        &self.state
    }

    #[inline]
    pub fn frame(&self) -> &InputFrame {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut Input, x: f32, y: f32) {
        input.apply_event(InputEvent::left_press(x, y));
    }

    fn step(input: &mut Input) {
        input.end_frame();
        input.new_frame(1.0 / 60.0);
    }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn click_edge_lasts_one_frame() {
        let mut input = Input::new();
        press(&mut input, 10.0, 10.0);
        input.new_frame(0.016);
        assert!(input.is_mouse_clicked(MouseButton::Left));
        assert!(input.is_mouse_down(MouseButton::Left));
        step(&mut input);
        assert!(!input.is_mouse_clicked(MouseButton::Left));
        assert!(input.is_mouse_down(MouseButton::Left));
    }

    #[test]
    fn press_and_release_in_one_frame_report_both_edges() {
        let mut input = Input::new();
        press(&mut input, 10.0, 10.0);
        input.apply_event(InputEvent::left_release(10.0, 10.0));
        input.new_frame(0.016);
        assert!(input.is_mouse_clicked(MouseButton::Left));
        assert!(input.is_mouse_released(MouseButton::Left));
        assert!(!input.is_mouse_down(MouseButton::Left));
    }

    #[test]
    fn pointer_left_reports_offscreen() {
        let mut input = Input::new();
        input.apply_event(InputEvent::pointer_moved(5.0, 5.0));
        input.apply_event(InputEvent::PointerLeft);
        assert!(!input.has_pointer());
        assert!(input.mouse_pos().x < -1.0e30);
    }

    // ── drag ──────────────────────────────────────────────────────────────

    #[test]
    fn drag_respects_threshold() {
        let mut input = Input::new();
        press(&mut input, 100.0, 100.0);
        input.new_frame(0.016);
        input.apply_event(InputEvent::pointer_moved(101.0, 100.0));
        assert!(!input.is_mouse_dragging(MouseButton::Left, 2.0));
        assert_eq!(input.mouse_drag_delta(MouseButton::Left, 2.0), Vec2::zero());

        input.apply_event(InputEvent::pointer_moved(110.0, 104.0));
        assert!(input.is_mouse_dragging(MouseButton::Left, 2.0));
        assert_eq!(input.mouse_drag_delta(MouseButton::Left, 2.0), Vec2::new(10.0, 4.0));
    }

    #[test]
    fn reset_drag_delta_moves_origin_but_keeps_dragging() {
        let mut input = Input::new();
        press(&mut input, 0.0, 0.0);
        input.new_frame(0.016);
        input.apply_event(InputEvent::pointer_moved(20.0, 0.0));
        step(&mut input);
        input.reset_mouse_drag_delta(MouseButton::Left);
        assert!(input.is_mouse_dragging(MouseButton::Left, 2.0));
        assert_eq!(input.mouse_drag_delta(MouseButton::Left, 1.0), Vec2::zero());

        input.apply_event(InputEvent::pointer_moved(25.0, 0.0));
        assert_eq!(input.mouse_drag_delta(MouseButton::Left, 1.0), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn released_button_is_not_dragging() {
        let mut input = Input::new();
        press(&mut input, 0.0, 0.0);
        input.new_frame(0.016);
        input.apply_event(InputEvent::left_release(50.0, 0.0));
        assert!(!input.is_mouse_dragging(MouseButton::Left, 1.0));
    }

    // ── double click ──────────────────────────────────────────────────────

    #[test]
    fn double_click_within_time_and_distance() {
        let mut input = Input::new();
        press(&mut input, 10.0, 10.0);
        input.apply_event(InputEvent::left_release(10.0, 10.0));
        input.new_frame(0.016);
        assert!(!input.is_mouse_double_clicked(MouseButton::Left));

        input.end_frame();
        press(&mut input, 12.0, 11.0);
        input.new_frame(0.1);
        assert!(input.is_mouse_double_clicked(MouseButton::Left));
    }

    #[test]
    fn slow_second_click_is_single() {
        let mut input = Input::new();
        press(&mut input, 10.0, 10.0);
        input.apply_event(InputEvent::left_release(10.0, 10.0));
        input.new_frame(0.016);
        input.end_frame();
        press(&mut input, 10.0, 10.0);
        input.new_frame(0.5);
        assert!(!input.is_mouse_double_clicked(MouseButton::Left));
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    #[test]
    fn key_press_edge_and_repeat() {
        let mut input = Input::new();
        input.apply_event(InputEvent::key_press(Key::ArrowLeft));
        input.new_frame(0.016);
        assert!(input.is_key_pressed(Key::ArrowLeft, false));
        assert!(input.is_key_down(Key::ArrowLeft));

        step(&mut input);
        assert!(!input.is_key_pressed(Key::ArrowLeft, true));
        input.apply_event(InputEvent::key_repeat(Key::ArrowLeft));
        assert!(input.is_key_pressed(Key::ArrowLeft, true));
        assert!(!input.is_key_pressed(Key::ArrowLeft, false));

        input.apply_event(InputEvent::key_release(Key::ArrowLeft));
        assert!(input.is_key_released(Key::ArrowLeft));
        assert!(!input.is_key_down(Key::ArrowLeft));
    }

    #[test]
    fn text_is_readable_until_end_frame() {
        let mut input = Input::new();
        input.apply_event(InputEvent::text("hi"));
        input.apply_event(InputEvent::text("!"));
        input.new_frame(0.016);
        assert_eq!(input.text_chars().collect::<String>(), "hi!");
        input.end_frame();
        assert_eq!(input.text_chars().count(), 0);
    }

    // ── wheel / cursor / viewport ─────────────────────────────────────────

    #[test]
    fn wheel_accumulates_and_clears() {
        let mut input = Input::new();
        input.apply_event(InputEvent::wheel_lines(1.0));
        input.apply_event(InputEvent::MouseWheel {
            delta: super::super::MouseWheelDelta::Pixel { x: 0.0, y: 40.0 },
            modifiers: Default::default(),
        });
        assert_eq!(input.mouse_wheel(), 3.0);
        input.end_frame();
        assert_eq!(input.mouse_wheel(), 0.0);
    }

    #[test]
    fn cursor_request_resets_each_frame() {
        let mut input = Input::new();
        input.set_cursor(CursorShape::ResizeNwse);
        assert_eq!(input.cursor(), CursorShape::ResizeNwse);
        input.new_frame(0.016);
        assert_eq!(input.cursor(), CursorShape::Arrow);
    }

    #[test]
    fn resize_event_updates_viewport() {
        let mut input = Input::new();
        input.apply_event(InputEvent::Resized { width: 800.0, height: 600.0 });
        assert_eq!(input.viewport(), Viewport::new(800.0, 600.0));
    }
}
