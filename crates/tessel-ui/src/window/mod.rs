//! Window records and the window manager.
//!
//! A [`Window`] is created the first time its name is begun and lives for
//! the lifetime of the [`Context`](crate::Context). Each frame, `begin`
//! applies pending placement hints, draws the title bar and seeds the layout
//! cursor; `end` turns the cursor extent into content size and scroll range,
//! then draws scrollbars and resize handles.
//!
//! Child windows, popups and the tooltip are windows too; they never enter
//! the focus order themselves. Children are drawn after their parent, popups
//! after every root window.

mod begin;
mod child;
pub(crate) mod focus;
mod popup;
mod resize;
mod scrollbar;
mod tooltip;

use tessel_engine::coords::{Rect, Vec2};
use tessel_engine::scene::LayerId;

use crate::id::WidgetId;
use crate::layout::{LayoutMetrics, LayoutState};
use crate::storage::Storage;
use crate::style::Style;

pub(crate) use begin::DEFAULT_ROW_WIDTH;
pub(crate) use popup::PopupRef;

bitflags::bitflags! {
    /// Behavior flags passed to `begin_window`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        const NO_TITLE_BAR = 1 << 0;
        const NO_RESIZE    = 1 << 1;
        const NO_MOVE      = 1 << 2;
        const NO_COLLAPSE  = 1 << 3;
        /// Size follows content every frame.
        const AUTO_SIZE    = 1 << 4;
        const CHILD        = 1 << 5;
        const TOOLTIP      = 1 << 6;
        /// Opened with `open_popup`; drawn above every root window.
        const POPUP        = 1 << 7;
        /// Popup holding a menu.
        const MENU         = 1 << 8;
    }
}

bitflags::bitflags! {
    /// When a next-window hint is allowed to apply.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Cond: u32 {
        /// Every frame the hint is given.
        const ALWAYS = 1 << 0;
        /// Only the first time the window sees a hint of this kind.
        const ONCE   = 1 << 1;
    }
}

/// Index of a window in the context's arena.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct WindowIdx(pub(crate) usize);

/// Placement hints for the next `begin_window`, cleared every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct NextWindowData {
    pub pos: Option<(Vec2, Cond)>,
    pub size: Option<(Vec2, Cond)>,
    pub collapsed: Option<(bool, Cond)>,
}

pub(crate) const DEFAULT_POS: Vec2 = Vec2::new(200.0, 200.0);
pub(crate) const DEFAULT_SIZE: Vec2 = Vec2::new(500.0, 500.0);
pub(crate) const DEFAULT_MIN_SIZE: Vec2 = Vec2::new(200.0, 200.0);
pub(crate) const DEFAULT_MAX_SIZE: Vec2 = Vec2::new(10_000.0, 10_000.0);

/// Persistent state of one named window.
#[derive(Debug)]
pub struct Window {
    pub(crate) id: WidgetId,
    pub(crate) name: String,
    pub(crate) flags: WindowFlags,

    pub(crate) pos: Vec2,
    pub(crate) size: Vec2,
    /// Size before collapsing; restored on expand.
    pub(crate) full_size: Vec2,
    pub(crate) min_size: Vec2,
    pub(crate) max_size: Vec2,
    pub(crate) content_size: Vec2,
    pub(crate) scroll: Vec2,
    pub(crate) scroll_max: Vec2,
    pub(crate) collapsed: bool,
    pub(crate) scrollbar_x: bool,
    pub(crate) scrollbar_y: bool,

    pub(crate) parent: WindowIdx,
    pub(crate) root: WindowIdx,
    pub(crate) children: Vec<WindowIdx>,
    pub(crate) focus_order: usize,

    pub(crate) bg_layer: LayerId,
    pub(crate) fg_layer: LayerId,

    pub(crate) pos_allow: Cond,
    pub(crate) size_allow: Cond,
    pub(crate) collapse_allow: Cond,

    /// Frames left before the window is drawn again.
    pub(crate) hide_frames: u32,
    /// Begun during the current frame.
    pub(crate) active: bool,
    pub(crate) visible: bool,
    pub(crate) title_bar_height: f32,

    pub(crate) outer_rect: Rect,
    pub(crate) outer_rect_clipped: Rect,
    pub(crate) inner_rect: Rect,
    pub(crate) inner_clip_rect: Rect,

    pub(crate) layout: LayoutState,
    pub(crate) storage: Storage,
}

impl Window {
    pub(crate) fn new(id: WidgetId, name: &str, idx: WindowIdx, bg_layer: LayerId, fg_layer: LayerId) -> Self {
        Self {
            id,
            name: name.to_owned(),
            flags: WindowFlags::empty(),
            pos: DEFAULT_POS,
            size: DEFAULT_SIZE,
            full_size: DEFAULT_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            content_size: Vec2::zero(),
            scroll: Vec2::zero(),
            scroll_max: Vec2::zero(),
            collapsed: false,
            scrollbar_x: false,
            scrollbar_y: false,
            parent: idx,
            root: idx,
            children: Vec::new(),
            focus_order: 0,
            bg_layer,
            fg_layer,
            pos_allow: Cond::ALWAYS | Cond::ONCE,
            size_allow: Cond::ALWAYS | Cond::ONCE,
            collapse_allow: Cond::ALWAYS | Cond::ONCE,
            hide_frames: 0,
            active: false,
            visible: true,
            title_bar_height: 0.0,
            outer_rect: Rect::default(),
            outer_rect_clipped: Rect::default(),
            inner_rect: Rect::default(),
            inner_clip_rect: Rect::default(),
            layout: LayoutState::default(),
            storage: Storage::new(),
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn min_size(&self) -> Vec2 {
        self.min_size
    }

    #[inline]
    pub fn content_size(&self) -> Vec2 {
        self.content_size
    }

    #[inline]
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    #[inline]
    pub fn scroll_max(&self) -> Vec2 {
        self.scroll_max
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    #[inline]
    pub fn is_child(&self) -> bool {
        self.flags.contains(WindowFlags::CHILD)
    }

    #[inline]
    pub fn hide_frames(&self) -> u32 {
        self.hide_frames
    }

    #[inline]
    pub fn title_bar_height(&self) -> f32 {
        self.title_bar_height
    }

    /// Draw layer for backgrounds, scrollbars and borders.
    #[inline]
    pub fn bg_layer(&self) -> LayerId {
        self.bg_layer
    }

    /// Draw layer for widgets.
    #[inline]
    pub fn fg_layer(&self) -> LayerId {
        self.fg_layer
    }

    /// Widget-local persisted values (open flags and the like).
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Visible content extent: the window minus its title bar.
    #[inline]
    pub fn visible_size(&self) -> Vec2 {
        Vec2::new(self.size.x, self.size.y - self.title_bar_height)
    }

    #[inline]
    pub(crate) fn scrollbar_gutter(&self, style: &Style) -> f32 {
        if self.scrollbar_y { style.scrollbar_size + 2.0 } else { 0.0 }
    }

    pub(crate) fn layout_metrics(&self, style: &Style) -> LayoutMetrics {
        LayoutMetrics {
            window_width: self.size.x,
            horizontal_padding: style.window_horizontal_padding,
            spacing: style.item_spacing,
            indent: style.indent,
            scrollbar_gutter: self.scrollbar_gutter(style),
        }
    }

    /// Clamps scroll into `[0, scroll_max]`.
    #[inline]
    pub(crate) fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.clamp(Vec2::zero(), self.scroll_max);
    }

    /// Recomputes scroll range and scrollbar visibility from content size.
    pub(crate) fn update_scroll_range(&mut self, visible: Vec2, scrollbar_size: f32) {
        self.scroll_max = (self.content_size - visible).max(Vec2::zero());
        self.scrollbar_x = self.scroll_max.x > 0.0;
        self.scrollbar_y = self.scroll_max.y > 0.0;

        if self.scrollbar_x && self.scrollbar_y {
            self.scroll_max += Vec2::splat(scrollbar_size + 2.0);
        }
        if !self.scrollbar_y {
            self.scroll.y = 0.0;
        }
        if !self.scrollbar_x {
            self.scroll.x = 0.0;
        }
        self.clamp_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_engine::scene::DrawList;

    fn window() -> Window {
        let mut list = DrawList::new();
        let bg = list.request_layer("bg");
        let fg = list.request_layer("fg");
        Window::new(WidgetId::from_raw(1), "w", WindowIdx(0), bg, fg)
    }

    #[test]
    fn scroll_range_is_content_minus_visible() {
        let mut w = window();
        w.content_size = Vec2::new(100.0, 800.0);
        w.scroll = Vec2::new(30.0, 900.0);
        w.update_scroll_range(Vec2::new(300.0, 200.0), 10.0);
        assert_eq!(w.scroll_max, Vec2::new(0.0, 600.0));
        assert!(w.scrollbar_y && !w.scrollbar_x);
        assert_eq!(w.scroll, Vec2::new(0.0, 600.0));
    }

    #[test]
    fn both_scrollbars_extend_range_by_gutter() {
        let mut w = window();
        w.content_size = Vec2::new(400.0, 400.0);
        w.update_scroll_range(Vec2::new(300.0, 300.0), 10.0);
        assert_eq!(w.scroll_max, Vec2::new(112.0, 112.0));
    }

    #[test]
    fn new_window_uses_defaults() {
        let w = window();
        assert_eq!(w.pos(), DEFAULT_POS);
        assert_eq!(w.size(), DEFAULT_SIZE);
        assert_eq!(w.pos_allow, Cond::ALWAYS | Cond::ONCE);
    }
}
