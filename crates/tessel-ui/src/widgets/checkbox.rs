use tessel_engine::coords::{Rect, Vec2};

use crate::context::Context;
use crate::id::visible_label;
use crate::style::ThemeColor;

use super::{state_slot, FRAME_SLOTS};

/// Inset of the check mark / radio dot inside its frame.
const MARK_INSET: f32 = 3.0;

impl Context {
    /// A square check box followed by its label. Clicking either toggles
    /// `value`. Returns true when the value changed.
    pub fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        let pos = self.cursor_pos();
        let size = self.calculate_item_size(self.frame_height());
        let id = self.ids.id_of(label);
        let text = visible_label(label);
        let box_side = self.frame_height();
        let text_size = self.text_size(text);
        let inner = self.style.inner_spacing.x;
        let bb = Rect::from_origin_size(pos, Vec2::new(box_side + inner + text_size.x, box_side));

        let state = self.button_behavior(bb, id);
        if state.pressed {
            *value = !*value;
        }

        if self.should_render(pos, size) {
            let frame = Rect::from_origin_size(pos, Vec2::splat(box_side));
            let text_pos = Vec2::new(pos.x + box_side + inner, pos.y + self.style.frame_padding.y);
            let active = self.active_id == Some(id);
            let mut painter = self.painter();
            painter.fill_rect(frame, state_slot(state, active, FRAME_SLOTS));
            if *value {
                let mark = Rect::new(
                    frame.origin.x + MARK_INSET,
                    frame.origin.y + MARK_INSET,
                    box_side - 2.0 * MARK_INSET,
                    box_side - 2.0 * MARK_INSET,
                );
                painter.fill_rect(mark, ThemeColor::CheckMark);
            }
            painter.text(text_pos, text, ThemeColor::Text);
        }

        self.advance_cursor(size.x, size.y);
        state.pressed
    }

    /// A round option button. Clicking it stores `button_value` in `value`.
    /// Returns true when clicked.
    pub fn radio_button(&mut self, label: &str, value: &mut i32, button_value: i32) -> bool {
        let pos = self.cursor_pos();
        let size = self.calculate_item_size(self.frame_height());
        let id = self.ids.id_of(label);
        let text = visible_label(label);
        let side = self.frame_height();
        let text_size = self.text_size(text);
        let inner = self.style.inner_spacing.x;
        let bb = Rect::from_origin_size(pos, Vec2::new(side + inner + text_size.x, side));

        let state = self.button_behavior(bb, id);
        if state.pressed {
            *value = button_value;
        }

        if self.should_render(pos, size) {
            let radius = side * 0.5;
            let center = Vec2::new(pos.x + radius, pos.y + radius);
            let text_pos = Vec2::new(pos.x + side + inner, pos.y + self.style.frame_padding.y);
            let active = self.active_id == Some(id);
            let mut painter = self.painter();
            painter.circle(center, radius, state_slot(state, active, FRAME_SLOTS));
            if *value == button_value {
                painter.circle(center, radius - MARK_INSET, ThemeColor::CheckMark);
            }
            painter.text(text_pos, text, ThemeColor::Text);
        }

        self.advance_cursor(size.x, size.y);
        state.pressed
    }
}
