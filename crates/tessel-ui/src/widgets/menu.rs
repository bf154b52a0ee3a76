//! Menus: items that open a popup on hover, and the clickable entries
//! inside them. Picking an entry closes every open popup.

use tessel_engine::coords::{Rect, Vec2};

use crate::context::{ButtonState, Context};
use crate::id::visible_label;
use crate::style::ThemeColor;
use crate::window::{Cond, WindowFlags};

impl Context {
    /// An entry that opens the sub-menu `label` while hovered. Returns true
    /// while the sub-menu is open; fill it and close it with
    /// [`end_menu`](Self::end_menu).
    pub fn begin_menu(&mut self, label: &str, enabled: bool) -> bool {
        let pos = self.cursor_pos();
        let size = self.calculate_item_size(self.frame_height());
        let id = self.ids.id_of(label);
        let bb = Rect::from_origin_size(pos, size);
        let state = if enabled { self.button_behavior(bb, id) } else { ButtonState::default() };

        let popup_name = format!("##menu_{:08x}", id.raw());
        if (state.hovered || state.pressed) && !self.is_popup_open(&popup_name) {
            self.open_popup(&popup_name);
        }
        let open = self.is_popup_open(&popup_name);

        if self.should_render(pos, size) {
            let pad = self.style.frame_padding;
            let arrow = self.style.font_size * 0.25;
            let text_slot = if enabled { ThemeColor::Text } else { ThemeColor::TextDisabled };
            let mut painter = self.painter();
            if open || state.hovered {
                let slot = if open { ThemeColor::HeaderActive } else { ThemeColor::HeaderHovered };
                painter.fill_rect(bb, slot);
            }
            painter.clipped_text(pos + pad, bb, visible_label(label), text_slot);
            let c = Vec2::new(bb.max().x - pad.x - arrow, bb.center().y);
            painter.triangle(
                c + Vec2::new(-arrow * 0.5, -arrow),
                c + Vec2::new(arrow, 0.0),
                c + Vec2::new(-arrow * 0.5, arrow),
                text_slot,
            );
        }
        self.advance_cursor(size.x, size.y);

        if !open {
            return false;
        }
        self.set_next_window_pos(Vec2::new(bb.max().x, bb.origin.y), Cond::ALWAYS);
        self.begin_popup(&popup_name, WindowFlags::MENU)
    }

    pub fn end_menu(&mut self) {
        self.end_popup();
    }

    /// A menu entry. Returns true when clicked, which also closes every open
    /// popup. `shortcut` is only displayed; binding it is up to the caller.
    pub fn menu_item(&mut self, label: &str, shortcut: Option<&str>, selected: bool, enabled: bool) -> bool {
        let pos = self.cursor_pos();
        let size = self.calculate_item_size(self.frame_height());
        let id = self.ids.id_of(label);
        let bb = Rect::from_origin_size(pos, size);
        let state = if enabled { self.button_behavior(bb, id) } else { ButtonState::default() };
        if state.pressed {
            self.close_all_popups();
        }

        if self.should_render(pos, size) {
            let pad = self.style.frame_padding;
            let active = enabled && self.active_id == Some(id);
            let hovered = enabled && self.hovered_id == Some(id);
            let text_slot = if enabled { ThemeColor::Text } else { ThemeColor::TextDisabled };
            let end = bb.max();
            let h = size.y;
            let mut painter = self.painter();
            if active {
                painter.fill_rect(bb, ThemeColor::HeaderActive);
            } else if hovered {
                painter.fill_rect(bb, ThemeColor::HeaderHovered);
            }
            if selected && enabled {
                let mid = Vec2::new(end.x - 0.5 * h, pos.y + 0.75 * h);
                painter.line(Vec2::new(end.x - 0.333 * h, pos.y + 0.25 * h), mid, ThemeColor::CheckMark, 3.0);
                painter.line(mid, Vec2::new(end.x - 0.666 * h, pos.y + 0.5 * h), ThemeColor::CheckMark, 3.0);
            }
            painter.clipped_text(pos + pad, bb, visible_label(label), text_slot);
            if let Some(shortcut) = shortcut {
                let at = Vec2::new(pos.x + pad.x + 0.666 * size.x, pos.y + pad.y);
                painter.clipped_text(at, bb, shortcut, ThemeColor::TextDisabled);
            }
        }
        self.advance_cursor(size.x, size.y);
        state.pressed
    }

    /// A menu entry with a check mark bound to `selected`; a click flips it.
    /// Returns true when the click turned it on.
    pub fn menu_item_toggle(&mut self, label: &str, shortcut: Option<&str>, selected: &mut bool, enabled: bool) -> bool {
        let pressed = self.menu_item(label, shortcut, *selected, enabled);
        if pressed {
            *selected = !*selected;
        }
        pressed && *selected
    }
}
