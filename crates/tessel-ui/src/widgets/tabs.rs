use tessel_engine::coords::{Rect, Vec2};

use crate::context::Context;
use crate::id::{visible_label, WidgetId};
use crate::style::ThemeColor;

use super::{state_slot, HEADER_SLOTS};

/// Persistent state of one tab bar.
#[derive(Debug, Clone)]
pub(crate) struct TabBar {
    pub id: WidgetId,
    /// Id of the selected tab, 0 until the first tab is seen.
    pub value: u32,
    /// Selection requested by a click this frame, applied at `end_tab_bar`.
    pub next_value: Option<u32>,
    /// Where the next tab button goes.
    pub cursor: Vec2,
}

impl Context {
    /// Opens a tab bar. Tabs are added with [`begin_tab`](Self::begin_tab);
    /// the bar must be closed with [`end_tab_bar`](Self::end_tab_bar).
    ///
    /// # Example
    /// ```rust,ignore
    /// ctx.begin_tab_bar("settings");
    /// if ctx.begin_tab("General") { ctx.text("..."); ctx.end_tab(); }
    /// if ctx.begin_tab("Advanced") { ctx.text("..."); ctx.end_tab(); }
    /// ctx.end_tab_bar();
    /// ```
    pub fn begin_tab_bar(&mut self, label: &str) -> bool {
        let id = self.ids.id_of(label);
        let pos = self.cursor_pos();
        let frame_h = self.frame_height();
        let size = self.calculate_item_size(frame_h);

        let slot = match self.tab_bars.iter().position(|b| b.id == id) {
            Some(i) => i,
            None => {
                self.tab_bars.push(TabBar { id, value: 0, next_value: None, cursor: pos });
                self.tab_bars.len() - 1
            }
        };
        self.tab_bars[slot].cursor = pos;
        self.tab_bar_stack.push(slot);
        self.ids.push(id);

        if self.should_render(pos, size) {
            let y = pos.y + frame_h;
            self.painter().line(Vec2::new(pos.x, y), Vec2::new(pos.x + size.x, y), ThemeColor::HeaderActive, 1.0);
        }
        self.advance_cursor(size.x, frame_h);
        self.push_layout_scope();
        true
    }

    pub fn end_tab_bar(&mut self) {
        let Some(slot) = self.tab_bar_stack.pop() else {
            panic!("end_tab_bar without begin_tab_bar");
        };
        let bar = &mut self.tab_bars[slot];
        if let Some(next) = bar.next_value.take() {
            bar.value = next;
        }
        self.pop_layout_scope();
        self.ids.pop();
    }

    /// Adds a tab to the open bar. Returns true when it is the selected
    /// tab; its content follows and is closed with [`end_tab`](Self::end_tab).
    /// The first tab of a new bar starts selected.
    pub fn begin_tab(&mut self, label: &str) -> bool {
        let Some(&slot) = self.tab_bar_stack.last() else {
            panic!("begin_tab outside of a tab bar");
        };
        let id = self.ids.id_of(label);
        self.ids.push(id);

        let text = visible_label(label);
        let text_size = self.text_size(text);
        let pad = self.style.frame_padding;
        let size = Vec2::new(text_size.x + 2.0 * pad.x, self.frame_height());
        let gap = self.style.inner_spacing.x;

        let bar = &mut self.tab_bars[slot];
        if bar.value == 0 {
            bar.value = id.raw();
        }
        let pos = bar.cursor;
        bar.cursor.x += size.x + gap;

        let bb = Rect::from_origin_size(pos, size);
        let state = self.button_behavior(bb, id);
        let bar = &mut self.tab_bars[slot];
        if state.pressed {
            bar.next_value = Some(id.raw());
        }
        let selected = bar.value == id.raw();

        if self.should_render(pos, size) {
            let active = selected || self.active_id == Some(id);
            let mut painter = self.painter();
            painter.fill_rect(bb, state_slot(state, active, HEADER_SLOTS));
            painter.text(pos + pad, text, ThemeColor::Text);
        }

        if !selected {
            self.end_tab();
        }
        selected
    }

    pub fn end_tab(&mut self) {
        self.ids.pop();
    }
}
