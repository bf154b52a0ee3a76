//! Combo boxes: a framed preview that drops a popup list below itself.

use tessel_engine::coords::{Rect, Vec2};
use tessel_engine::input::MouseButton;

use crate::context::Context;
use crate::id::visible_label;
use crate::style::ThemeColor;
use crate::window::{Cond, WindowFlags};

use super::{state_slot, BUTTON_SLOTS, FRAME_SLOTS};

/// Width of the arrow button at the right of the frame.
const ARROW_BUTTON_WIDTH: f32 = 24.0;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ComboFlags: u32 {
        /// List about four rows tall.
        const HEIGHT_SMALL    = 1 << 0;
        /// List about eight rows tall (the default).
        const HEIGHT_REGULAR  = 1 << 1;
        /// List about twenty rows tall.
        const HEIGHT_LARGE    = 1 << 2;
        const NO_ARROW_BUTTON = 1 << 3;
    }
}

impl ComboFlags {
    fn rows(self) -> f32 {
        if self.contains(ComboFlags::HEIGHT_SMALL) {
            4.0
        } else if self.contains(ComboFlags::HEIGHT_LARGE) {
            20.0
        } else {
            8.0
        }
    }
}

impl Context {
    /// A combo showing `preview`. Returns true while the list is open; fill
    /// it (usually with [`selectable`](Self::selectable)) and close it with
    /// [`end_combo`](Self::end_combo).
    ///
    /// ```rust,ignore
    /// if ctx.begin_combo("Mode", MODES[mode], ComboFlags::empty()) {
    ///     for (i, name) in MODES.iter().enumerate() {
    ///         let mut selected = i == mode;
    ///         if ctx.selectable(name, &mut selected) { mode = i; }
    ///     }
    ///     ctx.end_combo();
    /// }
    /// ```
    pub fn begin_combo(&mut self, label: &str, preview: &str, flags: ComboFlags) -> bool {
        let pos = self.cursor_pos();
        let size = self.calculate_item_size(self.frame_height());
        let id = self.ids.id_of(label);
        let frame = Rect::from_origin_size(pos, Vec2::new((size.x * 2.0 / 3.0).floor(), size.y));
        let state = self.button_behavior(frame, id);

        let popup_name = format!("##combo_{:08x}", id.raw());
        let popup_id = self.ids.id_of(&popup_name);
        // A press on the frame of an open combo closes it; its release must
        // not open it again.
        if state.hovered && self.input.is_mouse_clicked(MouseButton::Left) {
            let reopen = !self.popup_closed_by_press(popup_id);
            self.storage_mut().set_bool(popup_id.raw(), reopen);
        }
        if state.pressed && self.storage_mut().bool(popup_id.raw(), true) {
            self.open_popup(&popup_name);
        }
        let open = self.is_popup_open(&popup_name);

        if self.should_render(pos, size) {
            let pad = self.style.frame_padding;
            let arrow = if flags.contains(ComboFlags::NO_ARROW_BUTTON) {
                None
            } else {
                Some(Rect::new(frame.max().x - ARROW_BUTTON_WIDTH, pos.y, ARROW_BUTTON_WIDTH, size.y))
            };
            let preview_clip = match arrow {
                Some(a) => Rect::new(frame.origin.x, frame.origin.y, frame.size.x - a.size.x, frame.size.y),
                None => frame,
            };
            let label_pos = Vec2::new(frame.max().x + self.style.inner_spacing.x, pos.y + pad.y);
            let active = open || self.active_id == Some(id);
            let h = self.style.font_size * 0.25;
            let mut painter = self.painter();
            painter.fill_rect(frame, state_slot(state, active, FRAME_SLOTS));
            if let Some(a) = arrow {
                painter.fill_rect(a, state_slot(state, active, BUTTON_SLOTS));
                let c = a.center();
                painter.triangle(
                    c + Vec2::new(-h, -h * 0.5),
                    c + Vec2::new(h, -h * 0.5),
                    c + Vec2::new(0.0, h),
                    ThemeColor::Text,
                );
            }
            painter.clipped_text(pos + pad, preview_clip, preview, ThemeColor::Text);
            painter.text(label_pos, visible_label(label), ThemeColor::Text);
        }
        self.advance_cursor(size.x, size.y);

        if !open {
            return false;
        }
        self.set_next_window_pos(Vec2::new(frame.origin.x, frame.max().y), Cond::ALWAYS);
        self.set_next_window_size(Vec2::new(frame.size.x, size.y * flags.rows()), Cond::ALWAYS);
        if !self.begin_popup(&popup_name, WindowFlags::NO_RESIZE) {
            return false;
        }
        self.layout_dynamic(0.0, 1);
        true
    }

    pub fn end_combo(&mut self) {
        self.end_popup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_height_follows_flags() {
        assert_eq!(ComboFlags::empty().rows(), 8.0);
        assert_eq!(ComboFlags::HEIGHT_REGULAR.rows(), 8.0);
        assert_eq!(ComboFlags::HEIGHT_SMALL.rows(), 4.0);
        assert_eq!(ComboFlags::HEIGHT_LARGE.rows(), 20.0);
    }
}
