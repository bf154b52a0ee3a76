use tessel_engine::coords::{Rect, Vec2};

use crate::context::Context;
use crate::id::visible_label;

use super::{state_slot, BUTTON_SLOTS};

impl Context {
    /// A framed button filling the current layout cell. Returns true on the
    /// frame it is clicked.
    ///
    /// # Example
    /// ```rust,ignore
    /// ctx.layout_dynamic(0.0, 2);
    /// if ctx.button("Save") { save(); }
    /// if ctx.button("Cancel##dialog") { close(); }
    /// ```
    pub fn button(&mut self, label: &str) -> bool {
        let pos = self.cursor_pos();
        let size = self.calculate_item_size(self.frame_height());
        let id = self.ids.id_of(label);
        let bb = Rect::from_origin_size(pos, size);
        let state = self.button_behavior(bb, id);

        if self.should_render(pos, size) {
            let text = visible_label(label);
            let text_size = self.text_size(text);
            let text_pos = (pos + (size - text_size) * 0.5).floor();
            let active = self.active_id == Some(id);
            let mut painter = self.painter();
            painter.fill_rect(bb, state_slot(state, active, BUTTON_SLOTS));
            painter.clipped_text(text_pos, bb, text, crate::style::ThemeColor::Text);
        }

        self.advance_cursor(size.x, size.y);
        state.pressed
    }

    /// A button sized to its label rather than the layout cell.
    pub fn small_button(&mut self, label: &str) -> bool {
        let pos = self.cursor_pos();
        let pad = self.style.frame_padding;
        let text = visible_label(label);
        let text_size = self.text_size(text);
        let size = Vec2::new(text_size.x + 2.0 * pad.x, self.frame_height());
        let id = self.ids.id_of(label);
        let bb = Rect::from_origin_size(pos, size);
        let state = self.button_behavior(bb, id);

        if self.should_render(pos, size) {
            let active = self.active_id == Some(id);
            let mut painter = self.painter();
            painter.fill_rect(bb, state_slot(state, active, BUTTON_SLOTS));
            painter.text(pos + pad, text, crate::style::ThemeColor::Text);
        }

        self.advance_cursor(size.x, size.y);
        state.pressed
    }
}
