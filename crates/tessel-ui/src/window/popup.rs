//! Popups: windows opened on demand and closed by a click elsewhere.
//!
//! Open popups form a stack. A popup opened while another is being built
//! nests one level deeper; opening at a level replaces whatever was open
//! there and above. A press outside every popup closes them all, a press
//! inside closes only the levels above the one hit.

use tessel_engine::coords::Vec2;

use crate::context::Context;
use crate::id::{hash_str, WidgetId};
use crate::layout::LayoutRow;

use super::{Cond, WindowFlags, WindowIdx, DEFAULT_ROW_WIDTH};

/// One level of the open-popup stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PopupRef {
    pub id: WidgetId,
    /// Pointer position when opened; the default placement.
    pub open_pos: Vec2,
    /// Window backing the popup, once begun.
    pub window: Option<WindowIdx>,
}

impl Context {
    /// Marks the popup `name` open. It shows from the next
    /// [`begin_popup`](Self::begin_popup) with the same name in the same scope.
    pub fn open_popup(&mut self, name: &str) {
        let id = self.ids.id_of(name);
        let level = self.popup_stack.len();
        if self.open_popups.get(level).is_some_and(|p| p.id == id) {
            return;
        }
        self.open_popups.truncate(level);
        self.open_popups.push(PopupRef { id, open_pos: self.input.mouse_pos(), window: None });
        log::trace!("opened popup {name:?} at level {level}");
    }

    pub fn is_popup_open(&self, name: &str) -> bool {
        let id = self.ids.id_of(name);
        self.open_popups.get(self.popup_stack.len()).is_some_and(|p| p.id == id)
    }

    /// Begins the popup `name` if it is open. Call
    /// [`end_popup`](Self::end_popup) only when this returns true.
    ///
    /// Without a size hint the popup sizes itself to its content; without a
    /// position hint it appears where the pointer was when it was opened.
    pub fn begin_popup(&mut self, name: &str, flags: WindowFlags) -> bool {
        if !self.is_popup_open(name) {
            self.next_window = Default::default();
            return false;
        }
        let level = self.popup_stack.len();
        let popup = self.open_popups[level];

        if self.next_window.pos.is_none() {
            self.set_next_window_pos(popup.open_pos, Cond::ALWAYS);
        }
        let mut flags = flags
            | WindowFlags::POPUP
            | WindowFlags::NO_TITLE_BAR
            | WindowFlags::NO_COLLAPSE
            | WindowFlags::NO_MOVE;
        if self.next_window.size.is_none() {
            flags |= WindowFlags::AUTO_SIZE | WindowFlags::NO_RESIZE;
        }

        let window_name = format!("##popup_{:08x}", popup.id.raw());
        let first_use = self.window_lookup.index(hash_str(&window_name, 0)).is_none();
        self.begin_window_ex(&window_name, None, flags);
        let idx = self.current();
        if first_use && flags.contains(WindowFlags::AUTO_SIZE) {
            // Nothing has been measured yet.
            self.windows[idx.0].hide_frames = 1;
        }
        self.cur_win_mut().layout.set_row(LayoutRow::static_width(0.0, DEFAULT_ROW_WIDTH, 1));

        self.open_popups[level].window = Some(idx);
        self.popup_stack.push(level);
        self.popup_order.push(idx);
        true
    }

    /// Closes the popup begun by the last successful
    /// [`begin_popup`](Self::begin_popup).
    pub fn end_popup(&mut self) {
        assert!(!self.popup_stack.is_empty(), "end_popup without begin_popup");
        let idx = self.current();
        assert!(
            self.windows[idx.0].flags.contains(WindowFlags::POPUP),
            "end_popup called while a non-popup window is current"
        );
        self.end_window();
        self.popup_stack.pop();
    }

    /// Closes the popup being built, and every popup opened from it.
    pub fn close_current_popup(&mut self) {
        match self.popup_stack.last() {
            Some(&level) => self.open_popups.truncate(level),
            None => log::warn!("close_current_popup outside of a popup"),
        }
    }

    /// Whether the press that started this frame closed the popup `id`.
    pub(crate) fn popup_closed_by_press(&self, id: WidgetId) -> bool {
        self.closed_popups.contains(&id)
    }

    pub(crate) fn close_all_popups(&mut self) {
        self.open_popups.clear();
    }

    /// A press landed on `hovered` (or on nothing): keep the popup levels up
    /// to the one that was hit and close the rest.
    pub(crate) fn close_popups_outside(&mut self, hovered: Option<WindowIdx>) {
        if self.open_popups.is_empty() {
            return;
        }
        let root = hovered.map(|h| self.windows[h.0].root);
        let keep = self
            .open_popups
            .iter()
            .rposition(|p| p.window.is_some() && p.window == root)
            .map_or(0, |level| level + 1);
        if keep < self.open_popups.len() {
            log::trace!("closing {} popup(s)", self.open_popups.len() - keep);
            self.closed_popups.extend(self.open_popups.drain(keep..).map(|p| p.id));
        }
    }
}

