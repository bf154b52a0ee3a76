//! Collapsing headers and tree nodes.
//!
//! Both remember their open state in the window's storage under the
//! widget id. While open they push that id and a layout region, so the
//! widgets between `begin_*` and the matching close call are scoped to the
//! header and laid out below it.

use tessel_engine::coords::{Rect, Vec2};

use crate::context::{ButtonState, Context};
use crate::id::{visible_label, WidgetId};
use crate::style::ThemeColor;

use super::{state_slot, HEADER_SLOTS};

impl Context {
    /// A full-width header that expands on click. Returns true while open;
    /// call [`end_collapsing_header`](Self::end_collapsing_header) only then.
    pub fn begin_collapsing_header(&mut self, label: &str) -> bool {
        let (id, open) = self.tree_row(label, true);
        if open {
            self.ids.push(id);
            self.push_layout_scope();
        }
        open
    }

    pub fn end_collapsing_header(&mut self) {
        self.pop_layout_scope();
        self.ids.pop();
    }

    /// Runs `f` under the header `label` when it is open.
    pub fn collapsing_header<R>(&mut self, label: &str, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.begin_collapsing_header(label) {
            return None;
        }
        let r = f(self);
        self.end_collapsing_header();
        Some(r)
    }

    /// A tree node: like a header, but unframed, and its children are
    /// indented one level. Close with [`tree_pop`](Self::tree_pop) when it
    /// returned true.
    pub fn tree_node(&mut self, label: &str) -> bool {
        let (id, open) = self.tree_row(label, false);
        if open {
            self.ids.push(id);
            self.push_layout_scope();
            self.cur_win_mut().layout.tree_depth += 1;
        }
        open
    }

    pub fn tree_pop(&mut self) {
        let layout = &mut self.cur_win_mut().layout;
        assert!(layout.tree_depth > 0, "tree_pop without an open tree_node");
        layout.tree_depth -= 1;
        self.pop_layout_scope();
        self.ids.pop();
    }

    /// Places the clickable row shared by headers and tree nodes. Returns
    /// the row id and whether it is open after this frame's click.
    fn tree_row(&mut self, label: &str, framed: bool) -> (WidgetId, bool) {
        let pos = self.cursor_pos();
        let size = self.calculate_item_size(self.frame_height());
        let id = self.ids.id_of(label);
        let bb = Rect::from_origin_size(pos, size);
        let state = self.button_behavior(bb, id);

        let open = self.storage_mut().bool_mut(id.raw(), false);
        if state.pressed {
            *open = !*open;
        }
        let open = *open;

        if self.should_render(pos, size) {
            let active = self.active_id == Some(id);
            self.draw_tree_row(bb, label, open, framed, state, active);
        }

        self.advance_cursor(size.x, size.y);
        (id, open)
    }

    fn draw_tree_row(&mut self, bb: Rect, label: &str, open: bool, framed: bool, state: ButtonState, active: bool) {
        let pad = self.style.frame_padding;
        let arrow = self.style.font_size * 0.5;
        let center = Vec2::new(bb.origin.x + pad.x + arrow * 0.5, bb.origin.y + bb.size.y * 0.5);
        let text_pos = Vec2::new(bb.origin.x + 2.0 * pad.x + arrow, bb.origin.y + pad.y);
        let h = arrow * 0.5;

        let mut painter = self.painter();
        if framed || state.hovered || active {
            painter.fill_rect(bb, state_slot(state, active, HEADER_SLOTS));
        }
        if open {
            painter.triangle(
                center + Vec2::new(-h, -h * 0.5),
                center + Vec2::new(h, -h * 0.5),
                center + Vec2::new(0.0, h),
                ThemeColor::Text,
            );
        } else {
            painter.triangle(
                center + Vec2::new(-h * 0.5, -h),
                center + Vec2::new(h, 0.0),
                center + Vec2::new(-h * 0.5, h),
                ThemeColor::Text,
            );
        }
        painter.clipped_text(text_pos, bb, visible_label(label), ThemeColor::Text);
    }
}
