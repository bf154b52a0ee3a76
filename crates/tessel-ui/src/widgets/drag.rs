use tessel_engine::coords::{Rect, Vec2};
use tessel_engine::input::MouseButton;

use crate::context::Context;
use crate::id::visible_label;
use crate::style::ThemeColor;

use super::{state_slot, FRAME_SLOTS};

impl Context {
    /// A value field changed by dragging horizontally: every frame of the
    /// drag adds `delta.x * speed`, clamped to `[min, max]`. Returns true
    /// when the value changed.
    pub fn drag_float(&mut self, label: &str, value: &mut f32, speed: f32, min: f32, max: f32) -> bool {
        let before = *value;
        let (min, max) = (min.min(max), max.max(min));
        if let Some(dx) = self.drag_field(label, &format!("{value:.3}")) {
            *value = (*value + dx * speed).clamp(min, max);
            self.input.reset_mouse_drag_delta(MouseButton::Left);
        }
        *value != before
    }

    /// Integer drag field. Movement accumulates until it amounts to a whole step.
    pub fn drag_int(&mut self, label: &str, value: &mut i32, speed: f32, min: i32, max: i32) -> bool {
        let before = *value;
        let (min, max) = (min.min(max), max.max(min));
        if let Some(dx) = self.drag_field(label, &value.to_string()) {
            let step = (dx * speed).trunc();
            if step != 0.0 {
                *value = (i64::from(*value) + step as i64).clamp(i64::from(min), i64::from(max)) as i32;
                self.input.reset_mouse_drag_delta(MouseButton::Left);
            }
        }
        *value != before
    }

    /// Places the field and returns the horizontal drag delta while it is
    /// being dragged. The value text is the one shown this frame.
    fn drag_field(&mut self, label: &str, value_text: &str) -> Option<f32> {
        let pos = self.cursor_pos();
        let size = self.calculate_item_size(self.frame_height());
        let id = self.ids.id_of(label);
        let frame = Rect::from_origin_size(pos, Vec2::new((size.x * 2.0 / 3.0).floor(), size.y));
        let state = self.button_behavior(frame, id);
        let active = self.active_id == Some(id);

        if active {
            self.input.set_cursor(tessel_engine::input::CursorShape::ResizeEw);
        }
        let delta = (active && self.input.is_mouse_dragging(MouseButton::Left, 1.0))
            .then(|| self.input.mouse_drag_delta(MouseButton::Left, 1.0).x);

        if self.should_render(pos, size) {
            let pad = self.style.frame_padding;
            let value_size = self.text_size(value_text);
            let value_pos = Vec2::new((frame.center().x - value_size.x * 0.5).floor(), pos.y + pad.y);
            let label_pos = Vec2::new(frame.max().x + self.style.inner_spacing.x, pos.y + pad.y);
            let mut painter = self.painter();
            painter.fill_rect(frame, state_slot(state, active, FRAME_SLOTS));
            painter.clipped_text(value_pos, frame, value_text, ThemeColor::Text);
            painter.text(label_pos, visible_label(label), ThemeColor::Text);
        }
        self.advance_cursor(size.x, size.y);
        delta
    }
}
