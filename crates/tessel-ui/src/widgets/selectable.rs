use tessel_engine::coords::Rect;

use crate::context::Context;
use crate::id::visible_label;
use crate::style::ThemeColor;
use crate::window::WindowFlags;

use super::{state_slot, HEADER_SLOTS};

impl Context {
    /// A full-cell row that toggles `selected` when clicked. Returns true
    /// when it was clicked this frame. Clicking one inside a popup (a combo
    /// list) closes the popup.
    pub fn selectable(&mut self, label: &str, selected: &mut bool) -> bool {
        let pos = self.cursor_pos();
        let size = self.calculate_item_size(self.frame_height());
        let id = self.ids.id_of(label);
        let bb = Rect::from_origin_size(pos, size);
        let state = self.button_behavior(bb, id);
        if state.pressed {
            *selected = !*selected;
            if self.cur_win().flags.contains(WindowFlags::POPUP) {
                self.close_current_popup();
            }
        }

        if self.should_render(pos, size) {
            let text_pos = pos + self.style.frame_padding;
            let active = self.active_id == Some(id);
            let mut painter = self.painter();
            if *selected || state.hovered || active {
                let slot = if *selected && !state.hovered && !active {
                    ThemeColor::Header
                } else {
                    state_slot(state, active, HEADER_SLOTS)
                };
                painter.fill_rect(bb, slot);
            }
            painter.clipped_text(text_pos, bb, visible_label(label), ThemeColor::Text);
        }

        self.advance_cursor(size.x, size.y);
        state.pressed
    }
}
