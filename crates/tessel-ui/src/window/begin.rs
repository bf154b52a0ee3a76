use tessel_engine::coords::{Rect, Vec2};

use crate::context::{ButtonState, Context};
use crate::id::{hash_str, WidgetId};
use crate::layout::LayoutRow;
use crate::style::ThemeColor;

use super::{Cond, NextWindowData, Window, WindowFlags, WindowIdx};

/// Radius of the close / collapse buttons in the title bar.
const TITLE_BUTTON_RADIUS: f32 = 8.0;
/// Default row of a freshly begun window: one 300px column.
pub(crate) const DEFAULT_ROW_WIDTH: f32 = 300.0;

impl Context {
    /// Begins the window `name`, creating it on first use.
    ///
    /// Returns false when the window is collapsed; the window is then already
    /// closed and [`end_window`](Self::end_window) must not be called. When
    /// `open` is given the title bar shows a close button that clears it.
    pub fn begin_window(&mut self, name: &str, open: Option<&mut bool>, flags: WindowFlags) -> bool {
        let visible = self.begin_window_ex(name, open, flags);
        if visible {
            self.cur_win_mut().layout.set_row(LayoutRow::static_width(0.0, DEFAULT_ROW_WIDTH, 1));
        } else {
            self.end_window();
        }
        visible
    }

    /// Runs `f` inside the window `name` when it is expanded.
    pub fn window<R>(&mut self, name: &str, flags: WindowFlags, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.begin_window(name, None, flags) {
            return None;
        }
        let r = f(self);
        self.end_window();
        Some(r)
    }

    pub(crate) fn begin_window_ex(&mut self, name: &str, open: Option<&mut bool>, flags: WindowFlags) -> bool {
        let is_child = flags.contains(WindowFlags::CHILD);
        let parent = if is_child { self.window_stack.last().copied() } else { None };
        let seed = if is_child { self.ids.seed() } else { 0 };
        let id = WidgetId::from_raw(hash_str(name, seed));

        let idx = match self.window_lookup.index(id.raw()) {
            Some(i) => WindowIdx(i),
            None => self.create_window(id, name, flags),
        };

        let style = &self.style;
        let title_h = if flags.intersects(WindowFlags::NO_TITLE_BAR | WindowFlags::CHILD) {
            0.0
        } else {
            style.title_bar_height()
        };
        let (hpad, vpad) = (style.window_horizontal_padding, style.window_vertical_padding);
        let spacing_x = style.item_spacing.x;
        let gutter = style.scrollbar_size + 2.0;

        let parent_info = parent.map(|p| {
            let pw = &self.windows[p.0];
            (p, pw.root, pw.pos.x + pw.size.x - hpad, pw.pos.y + pw.size.y, pw.outer_rect_clipped, pw.inner_clip_rect)
        });
        if let Some((p, ..)) = parent_info {
            self.windows[p.0].children.push(idx);
        }

        let next = std::mem::take(&mut self.next_window);
        {
            let w = &mut self.windows[idx.0];
            w.flags = flags;
            w.active = true;
            w.visible = true;
            w.title_bar_height = title_h;
            w.children.clear();
            if let Some((p, root, ..)) = parent_info {
                w.parent = p;
                w.root = root;
            }

            apply_hints(w, &next);
            if is_child {
                w.min_size = w.min_size.min(w.size);
            }
            if flags.contains(WindowFlags::POPUP) {
                w.min_size = Vec2::zero();
            }
            if let Some((_, _, right, bottom, ..)) = parent_info {
                // Negative sizes fill the parent minus that amount.
                if w.size.x < 0.0 {
                    w.size.x += right - w.pos.x;
                }
                if w.size.y < 0.0 {
                    w.size.y += bottom - w.pos.y;
                }
            }
            if !w.collapsed {
                w.size = w.size.clamp(w.min_size, w.max_size);
            }
        }

        self.window_stack.push(idx);
        self.ids.push(id);

        // ── title bar buttons ─────────────────────────────────────────────
        let mut close_state = None;
        let mut collapse_state = None;
        if title_h > 0.0 {
            let (pos, size) = (self.windows[idx.0].pos, self.windows[idx.0].size);
            let mut offset = 2.0 * TITLE_BUTTON_RADIUS;
            if let Some(open) = open {
                let center = Vec2::new(pos.x + size.x - offset, pos.y + title_h * 0.5);
                let state = self.title_button("##close", center);
                if state.pressed {
                    *open = false;
                }
                close_state = Some((center, state));
                offset += 2.0 * TITLE_BUTTON_RADIUS + spacing_x;
            }
            if !flags.contains(WindowFlags::NO_COLLAPSE) {
                let center = Vec2::new(pos.x + size.x - offset, pos.y + title_h * 0.5);
                let state = self.title_button("##collapse", center);
                if state.pressed {
                    self.toggle_collapse(idx);
                }
                collapse_state = Some((center, state));
            }
        }

        {
            let w = &mut self.windows[idx.0];
            if w.collapsed {
                w.size.y = title_h;
            }
        }

        // ── rects ─────────────────────────────────────────────────────────
        let viewport = self.input.viewport();
        let w = &mut self.windows[idx.0];
        let (pos, size) = (w.pos, w.size);
        w.outer_rect = Rect::from_origin_size(pos, size);
        w.outer_rect_clipped = match parent_info {
            Some((.., outer, _)) => w.outer_rect.clip_to(outer),
            None if viewport.is_valid() => {
                w.outer_rect.clip_to(Rect::from_origin_size(Vec2::zero(), viewport.size()))
            }
            None => w.outer_rect,
        };
        w.inner_rect = Rect::new(pos.x, pos.y + title_h, size.x, size.y - title_h);
        let clip = Rect::new(
            pos.x + hpad,
            pos.y + title_h,
            (size.x - 2.0 * hpad - if w.scrollbar_y { gutter } else { 0.0 }).max(0.0),
            (size.y - title_h - if w.scrollbar_x { gutter } else { 0.0 }).max(0.0),
        );
        w.inner_clip_rect = match parent_info {
            Some((.., inner)) => clip.clip_to(inner),
            None => clip,
        };
        if is_child {
            w.visible = !w.inner_clip_rect.is_empty();
        }
        let collapsed = w.collapsed;
        let inner_clip = w.inner_clip_rect;
        let start = (pos + Vec2::new(hpad, vpad + title_h) - w.scroll).floor();
        w.layout.reset(start);

        if title_h > 0.0 {
            self.draw_title_bar(idx, close_state, collapse_state);
        }

        if !collapsed {
            self.draw_list.push_clip(inner_clip, false);
        }

        let w = &self.windows[idx.0];
        if is_child { w.visible } else { !collapsed }
    }

    /// Closes the window opened by the last successful
    /// [`begin_window`](Self::begin_window).
    pub fn end_window(&mut self) {
        let idx = self.current();
        assert!(
            !self.windows[idx.0].flags.contains(WindowFlags::CHILD),
            "end_window called on a child window; use end_child"
        );

        let (hpad, vpad) = (self.style.window_horizontal_padding, self.style.window_vertical_padding);
        let scrollbar_size = self.style.scrollbar_size;
        let w = &mut self.windows[idx.0];
        let collapsed = w.collapsed;
        let bg = if w.flags.contains(WindowFlags::POPUP) { ThemeColor::PopupBg } else { ThemeColor::WindowBg };

        if !collapsed {
            w.content_size = Vec2::new(hpad, vpad) + (w.layout.cursor_max - w.layout.cursor_start);
            let visible = w.visible_size();
            w.update_scroll_range(visible, scrollbar_size);
        }

        if !collapsed && w.flags.contains(WindowFlags::AUTO_SIZE) {
            let title_h = w.title_bar_height;
            w.size = Vec2::new(w.content_size.x + hpad, title_h + w.content_size.y + vpad)
                .clamp(w.min_size, w.max_size);
            w.scroll = Vec2::zero();
            w.scroll_max = Vec2::zero();
            w.scrollbar_x = false;
            w.scrollbar_y = false;
            self.draw_window_bg(idx, bg);
            self.draw_list.pop_clip();
        } else if !collapsed {
            self.draw_window_bg(idx, bg);
            self.draw_list.pop_clip();
            self.window_scrollbars(idx);
            if !self.windows[idx.0].flags.contains(WindowFlags::NO_RESIZE) {
                self.window_resize_handles(idx);
            }
            let w = &self.windows[idx.0];
            let border = self.style.colors[ThemeColor::WindowBorder];
            self.draw_list.add_rect(w.bg_layer, w.outer_rect, border, 1.0);
        }

        let w = &mut self.windows[idx.0];
        if !w.collapsed {
            w.full_size = w.size;
        }
        self.ids.pop();
        self.window_stack.pop();
    }

    // ── next-window hints ─────────────────────────────────────────────────

    pub fn set_next_window_pos(&mut self, pos: Vec2, cond: Cond) {
        self.next_window.pos = Some((pos, cond));
    }

    pub fn set_next_window_size(&mut self, size: Vec2, cond: Cond) {
        self.next_window.size = Some((size, cond));
    }

    pub fn set_next_window_collapse(&mut self, collapsed: bool, cond: Cond) {
        self.next_window.collapsed = Some((collapsed, cond));
    }

    // ── current window ────────────────────────────────────────────────────

    pub fn window_pos(&self) -> Vec2 {
        self.cur_win().pos
    }

    pub fn window_size(&self) -> Vec2 {
        self.cur_win().size
    }

    pub fn window_scroll(&self) -> Vec2 {
        self.cur_win().scroll
    }

    pub fn window_scroll_max(&self) -> Vec2 {
        self.cur_win().scroll_max
    }

    pub fn set_window_pos(&mut self, pos: Vec2) {
        self.cur_win_mut().pos = pos;
    }

    pub fn set_window_size(&mut self, size: Vec2) {
        let w = self.cur_win_mut();
        w.size = size.clamp(w.min_size, w.max_size);
    }

    /// Sets the scroll offset, clamped to the last computed range.
    pub fn set_window_scroll(&mut self, scroll: Vec2) {
        let w = self.cur_win_mut();
        w.scroll = scroll;
        w.clamp_scroll();
    }

    /// Whether the current window is the front-most root.
    pub fn is_window_focused(&self) -> bool {
        let w = self.cur_win();
        self.focus.front() == Some(w.root)
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn create_window(&mut self, id: WidgetId, name: &str, flags: WindowFlags) -> WindowIdx {
        let idx = WindowIdx(self.windows.len());
        let label = crate::id::visible_label(name);
        let bg = self.draw_list.request_layer(format!("{label} bg"));
        let fg = self.draw_list.request_layer(format!("{label} fg"));
        self.windows.push(Window::new(id, name, idx, bg, fg));
        self.window_lookup.set_index(id.raw(), idx.0);
        if !flags.intersects(WindowFlags::CHILD | WindowFlags::POPUP) {
            self.focus.register(idx);
            self.windows[idx.0].focus_order = self.focus.as_slice().len() - 1;
        }
        log::debug!("created window {name:?} ({id:?})");
        idx
    }

    fn title_button(&mut self, label: &str, center: Vec2) -> ButtonState {
        let id = self.ids.id_of(label);
        let r = TITLE_BUTTON_RADIUS;
        let bb = Rect::new(center.x - r, center.y - r, 2.0 * r, 2.0 * r);
        self.button_behavior(bb, id)
    }

    fn toggle_collapse(&mut self, idx: WindowIdx) {
        let w = &mut self.windows[idx.0];
        if w.collapsed {
            w.collapsed = false;
            w.size = w.full_size;
            if w.flags.contains(WindowFlags::AUTO_SIZE) {
                // Content size is stale until the window lays itself out again.
                w.hide_frames = 2;
            }
        } else {
            w.collapsed = true;
        }
        log::trace!("window {:?} collapsed={}", w.name, w.collapsed);
    }

    fn draw_title_bar(
        &mut self,
        idx: WindowIdx,
        close: Option<(Vec2, ButtonState)>,
        collapse: Option<(Vec2, ButtonState)>,
    ) {
        let w = &self.windows[idx.0];
        let slot = if self.active_window == Some(idx) {
            ThemeColor::TitleActive
        } else if w.collapsed {
            ThemeColor::TitleBgCollapsed
        } else {
            ThemeColor::TitleBg
        };
        let title = Rect::new(w.pos.x, w.pos.y, w.size.x, w.title_bar_height);
        let label = crate::id::visible_label(&w.name).to_owned();
        let collapsed = w.collapsed;
        let (bg, fg) = (w.bg_layer, w.fg_layer);
        let text_size = self.text_size(&label);
        let text_pos = Vec2::new(
            (title.center().x - text_size.x * 0.5).floor(),
            title.origin.y + self.style.title_padding,
        );

        self.painter_on(bg).fill_rect(title, slot);
        let mut painter = self.painter_on(fg);
        painter.clipped_text(text_pos, title, &label, ThemeColor::Text);

        let button_slot = |s: ButtonState| {
            if s.held {
                ThemeColor::ButtonActive
            } else if s.hovered {
                ThemeColor::ButtonHovered
            } else {
                ThemeColor::Button
            }
        };
        let r = TITLE_BUTTON_RADIUS;
        if let Some((center, state)) = close {
            painter.circle(center, r, button_slot(state));
            let d = r * 0.4;
            painter.line(center - Vec2::splat(d), center + Vec2::splat(d), ThemeColor::Text, 1.0);
            painter.line(center + Vec2::new(-d, d), center + Vec2::new(d, -d), ThemeColor::Text, 1.0);
        }
        if let Some((center, state)) = collapse {
            painter.circle(center, r, button_slot(state));
            let d = r * 0.5;
            if collapsed {
                painter.triangle(
                    center + Vec2::new(-d * 0.5, -d),
                    center + Vec2::new(d, 0.0),
                    center + Vec2::new(-d * 0.5, d),
                    ThemeColor::Text,
                );
            } else {
                painter.triangle(
                    center + Vec2::new(-d, -d * 0.5),
                    center + Vec2::new(d, -d * 0.5),
                    center + Vec2::new(0.0, d),
                    ThemeColor::Text,
                );
            }
        }
    }

    /// Fills the area below the title bar on the window's bg layer.
    pub(crate) fn draw_window_bg(&mut self, idx: WindowIdx, slot: ThemeColor) {
        let w = &self.windows[idx.0];
        let (layer, rect) = (w.bg_layer, w.inner_rect);
        self.painter_on(layer).fill_rect(rect, slot);
    }
}

/// Applies pending position, size and collapse hints allowed by the window's
/// conditions. A hint given with [`Cond::ONCE`] is honored the first time only.
fn apply_hints(w: &mut Window, next: &NextWindowData) {
    if let Some((pos, cond)) = next.pos
        && w.pos_allow.intersects(cond)
    {
        w.pos = pos;
        w.pos_allow.remove(Cond::ONCE);
    }
    if let Some((size, cond)) = next.size
        && w.size_allow.intersects(cond)
    {
        w.size = size;
        w.full_size = size;
        w.size_allow.remove(Cond::ONCE);
    }
    if let Some((collapsed, cond)) = next.collapsed
        && w.collapse_allow.intersects(cond)
    {
        w.collapsed = collapsed;
        w.collapse_allow.remove(Cond::ONCE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::WidgetId;
    use tessel_engine::scene::DrawList;

    fn window() -> Window {
        let mut list = DrawList::new();
        let (bg, fg) = (list.request_layer("bg"), list.request_layer("fg"));
        Window::new(WidgetId::from_raw(7), "w", WindowIdx(0), bg, fg)
    }

    #[test]
    fn once_hint_applies_first_time_only() {
        let mut w = window();
        let once = NextWindowData { pos: Some((Vec2::new(10.0, 20.0), Cond::ONCE)), ..Default::default() };
        apply_hints(&mut w, &once);
        assert_eq!(w.pos, Vec2::new(10.0, 20.0));

        let again = NextWindowData { pos: Some((Vec2::new(99.0, 99.0), Cond::ONCE)), ..Default::default() };
        apply_hints(&mut w, &again);
        assert_eq!(w.pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn always_hint_applies_every_time() {
        let mut w = window();
        for x in [1.0, 2.0, 3.0] {
            let hint = NextWindowData { size: Some((Vec2::new(x, x), Cond::ALWAYS)), ..Default::default() };
            apply_hints(&mut w, &hint);
            assert_eq!(w.size, Vec2::new(x, x));
        }
    }

    #[test]
    fn collapse_hint_sets_state() {
        let mut w = window();
        let hint = NextWindowData { collapsed: Some((true, Cond::ONCE)), ..Default::default() };
        apply_hints(&mut w, &hint);
        assert!(w.collapsed);
    }
}
