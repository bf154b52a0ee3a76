use tessel_engine::coords::Rect;
use tessel_engine::input::MouseButton;

use crate::id::WidgetId;

use super::Context;

/// Result of [`Context::button_behavior`] for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub hovered: bool,
    /// Hovered with the primary button down.
    pub held: bool,
    /// Released over the widget after a press that started on it.
    pub pressed: bool,
}

impl Context {
    /// Whether the widget `id` occupying `bb` may take the hover this frame.
    pub(crate) fn is_item_hoverable(&self, bb: Rect, id: WidgetId) -> bool {
        let Some(win) = self.current_window() else {
            return false;
        };
        if self.hovered_window != Some(win) {
            return false;
        }
        if [self.moving_window, self.sizing_window, self.wheeling_window].contains(&Some(win)) {
            return false;
        }
        // A press that started outside every window owns the mouse until release.
        if self.input.is_mouse_down(MouseButton::Left) && !self.mouse_owned {
            return false;
        }
        if !bb.contains(self.input.mouse_pos()) {
            return false;
        }
        self.hovered_id.is_none_or(|h| h == id || self.active_id_allow_overlap)
            && self.active_id.is_none_or(|a| a == id || self.active_id_allow_overlap)
    }

    /// Shared press/hold/hover logic behind every clickable widget.
    ///
    /// Results are written to the `next_*` ids and committed by `end_frame`,
    /// so a widget sees a hover one frame after the pointer reaches it. A
    /// press makes the widget active; it reports `pressed` on the frame the
    /// button is released while still hovered.
    pub fn button_behavior(&mut self, bb: Rect, id: WidgetId) -> ButtonState {
        self.prev_item.active = false;
        let mut state = ButtonState::default();

        let hovered = self.is_item_hoverable(bb, id);
        let down = self.input.is_mouse_down(MouseButton::Left);

        if self.active_id == Some(id) {
            self.active_id_alive = true;
            self.prev_item.active = true;
            if !down {
                state.pressed = hovered;
                self.next_active_id = None;
            }
        }

        if hovered {
            self.next_hovered_id = Some(id);
            if self.input.is_mouse_clicked(MouseButton::Left) {
                self.next_active_id = Some(id);
                self.prev_item.active = true;
            }
        }

        state.hovered = hovered;
        state.held = hovered && down;
        self.prev_item.hovered = hovered;
        state
    }

    /// Makes `id` the active widget immediately (text-entry style widgets).
    pub fn set_active_id(&mut self, id: Option<WidgetId>) {
        self.active_id = id;
        self.next_active_id = id;
        self.active_id_alive = id.is_some();
    }
}
