//! The UI context: every piece of retained state, and the entry point for
//! all window, layout and widget calls.
//!
//! A frame looks like:
//!
//! ```rust,ignore
//! for ev in host_events { ctx.input_mut().apply_event(ev); }
//! ctx.new_frame(dt);
//! if ctx.begin_window("Tools", None, WindowFlags::empty()) {
//!     ctx.layout_dynamic(0.0, 2);
//!     if ctx.button("Run") { /* ... */ }
//!     ctx.checkbox("Verbose", &mut verbose);
//!     ctx.end_window();
//! }
//! ctx.render();
//! renderer.draw(ctx.draw_list().submitted());
//! ```

mod current;
mod frame;
mod interaction;
mod layout_api;

pub use current::{install_context, take_context, with_context};
pub use interaction::ButtonState;

use tessel_engine::coords::{Rect, Vec2};
use tessel_engine::input::Input;
use tessel_engine::paint::Color;
use tessel_engine::scene::{DrawList, LayerId};
use tessel_engine::text::TextMeasure;

use crate::id::{hash_str, IdStack, WidgetId};
use crate::layout::LayoutMetrics;
use crate::painter::Painter;
use crate::storage::Storage;
use crate::style::{Style, ThemeColor};
use crate::widgets::input_text::TextEditState;
use crate::widgets::tabs::TabBar;
use crate::window::focus::FocusOrder;
use crate::window::{NextWindowData, PopupRef, Window, WindowFlags, WindowIdx};

/// Hover/active state of the most recently placed widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PrevItemData {
    pub hovered: bool,
    pub active: bool,
}

/// All retained UI state.
pub struct Context {
    pub(crate) style: Style,
    pub(crate) color_stack: Vec<(ThemeColor, Color)>,

    pub(crate) input: Input,
    pub(crate) draw_list: DrawList,
    pub(crate) text: Box<dyn TextMeasure>,
    pub(crate) bg_layer: LayerId,
    pub(crate) fg_layer: LayerId,
    pub(crate) debug_layer: LayerId,

    pub(crate) ids: IdStack,
    pub(crate) hovered_id: Option<WidgetId>,
    pub(crate) active_id: Option<WidgetId>,
    pub(crate) next_hovered_id: Option<WidgetId>,
    pub(crate) next_active_id: Option<WidgetId>,
    /// The active widget was evaluated this frame.
    pub(crate) active_id_alive: bool,
    /// Other widgets may take the hover while the active one is idle.
    pub(crate) active_id_allow_overlap: bool,
    pub(crate) prev_item: PrevItemData,

    pub(crate) windows: Vec<Window>,
    /// Window name hash → arena index.
    pub(crate) window_lookup: Storage,
    pub(crate) focus: FocusOrder,
    /// Windows drawn last frame, back to front.
    pub(crate) draw_order: Vec<WindowIdx>,
    /// Windows currently between begin and end.
    pub(crate) window_stack: Vec<WindowIdx>,
    pub(crate) hovered_window: Option<WindowIdx>,
    pub(crate) active_window: Option<WindowIdx>,
    pub(crate) moving_window: Option<WindowIdx>,
    pub(crate) sizing_window: Option<WindowIdx>,
    pub(crate) scrolling_window: Option<WindowIdx>,
    pub(crate) wheeling_window: Option<WindowIdx>,
    pub(crate) next_window: NextWindowData,
    pub(crate) tooltip: WindowIdx,
    /// Open popups, outermost first.
    pub(crate) open_popups: Vec<PopupRef>,
    /// Levels of the popups currently between begin and end.
    pub(crate) popup_stack: Vec<usize>,
    /// Popup windows begun this frame, in begin order.
    pub(crate) popup_order: Vec<WindowIdx>,
    /// Popups closed by this frame's press outside them.
    pub(crate) closed_popups: Vec<WidgetId>,

    /// Edit buffer of the text field holding the keyboard.
    pub(crate) text_input: Option<TextEditState>,

    pub(crate) tab_bars: Vec<TabBar>,
    pub(crate) tab_bar_stack: Vec<usize>,

    /// The current mouse press started over a window.
    pub(crate) mouse_owned: bool,
    pub(crate) frame_count: u64,
}

impl Context {
    /// Creates a context measuring text with `text`.
    pub fn new(text: Box<dyn TextMeasure>) -> Self {
        Self::with_style(text, Style::default())
    }

    pub fn with_style(text: Box<dyn TextMeasure>, style: Style) -> Self {
        let mut draw_list = DrawList::new();
        let bg_layer = draw_list.request_layer("ui bg");
        let fg_layer = draw_list.request_layer("ui fg");
        let debug_layer = draw_list.request_layer("ui debug");

        let tooltip = WindowIdx(0);
        let tooltip_id = WidgetId::from_raw(hash_str("##tooltip", 0));
        let mut tooltip_window = Window::new(
            tooltip_id,
            "##tooltip",
            tooltip,
            draw_list.request_layer("tooltip bg"),
            draw_list.request_layer("tooltip fg"),
        );
        tooltip_window.flags = WindowFlags::TOOLTIP
            | WindowFlags::AUTO_SIZE
            | WindowFlags::NO_TITLE_BAR
            | WindowFlags::NO_RESIZE
            | WindowFlags::NO_MOVE
            | WindowFlags::NO_COLLAPSE;

        Self {
            style,
            color_stack: Vec::new(),
            input: Input::new(),
            draw_list,
            text,
            bg_layer,
            fg_layer,
            debug_layer,
            ids: IdStack::new(),
            hovered_id: None,
            active_id: None,
            next_hovered_id: None,
            next_active_id: None,
            active_id_alive: false,
            active_id_allow_overlap: false,
            prev_item: PrevItemData::default(),
            windows: vec![tooltip_window],
            window_lookup: Storage::new(),
            focus: FocusOrder::default(),
            draw_order: Vec::new(),
            window_stack: Vec::new(),
            hovered_window: None,
            active_window: None,
            moving_window: None,
            sizing_window: None,
            scrolling_window: None,
            wheeling_window: None,
            next_window: NextWindowData::default(),
            tooltip,
            open_popups: Vec::new(),
            popup_stack: Vec::new(),
            popup_order: Vec::new(),
            closed_popups: Vec::new(),
            text_input: None,
            tab_bars: Vec::new(),
            tab_bar_stack: Vec::new(),
            mouse_owned: false,
            frame_count: 0,
        }
    }

    // ── host access ───────────────────────────────────────────────────────

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[inline]
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    #[inline]
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Feed host events here between frames.
    #[inline]
    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Global layers drawn below / above every window.
    pub fn global_layers(&self) -> (LayerId, LayerId, LayerId) {
        (self.bg_layer, self.fg_layer, self.debug_layer)
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Measures `text` with the style font, ignoring any `##` suffix.
    pub fn text_size(&self, text: &str) -> Vec2 {
        let style = &self.style;
        self.text.text_size(style.font, style.font_size, crate::id::visible_label(text), None)
    }

    /// True while the UI owns the mouse and the host should ignore it.
    pub fn wants_mouse_capture(&self) -> bool {
        self.active_id.is_some()
            || self.moving_window.is_some()
            || self.sizing_window.is_some()
            || (self.mouse_owned && self.input.is_mouse_down(tessel_engine::input::MouseButton::Left))
            || self.hovered_window.is_some()
    }

    /// True while a widget is active (a text field being edited, a slider
    /// being dragged) and the host should not act on key presses itself.
    pub fn wants_keyboard_capture(&self) -> bool {
        self.active_id.is_some() || self.text_input.is_some()
    }

    /// True while a text field is being edited; hosts may show an on-screen
    /// keyboard or enable IME.
    pub fn wants_text_input(&self) -> bool {
        self.text_input.as_ref().is_some_and(|s| !s.read_only())
    }

    pub fn hovered_id(&self) -> Option<WidgetId> {
        self.hovered_id
    }

    pub fn active_id(&self) -> Option<WidgetId> {
        self.active_id
    }

    // ── ids ───────────────────────────────────────────────────────────────

    /// Identity `label` would get in the current scope.
    pub fn get_id(&self, label: &str) -> WidgetId {
        self.ids.id_of(label)
    }

    pub fn push_id_str(&mut self, label: &str) {
        let id = self.ids.id_of(label);
        self.ids.push(id);
    }

    pub fn push_id_int(&mut self, value: i32) {
        let id = self.ids.id_of_bytes(&value.to_le_bytes());
        self.ids.push(id);
    }

    /// Scopes by the address of `value`.
    pub fn push_id_ptr<T: ?Sized>(&mut self, value: &T) {
        let addr = value as *const T as *const () as usize;
        let id = self.ids.id_of_bytes(&addr.to_le_bytes());
        self.ids.push(id);
    }

    pub fn pop_id(&mut self) {
        self.ids.pop();
    }

    #[inline]
    pub fn id_stack_depth(&self) -> usize {
        self.ids.depth()
    }

    // ── theme colors ──────────────────────────────────────────────────────

    /// Overrides a theme color until the matching [`pop_theme_color`](Self::pop_theme_color).
    pub fn push_theme_color(&mut self, slot: ThemeColor, color: Color) {
        let previous = self.style.colors[slot];
        self.color_stack.push((slot, previous));
        self.style.colors[slot] = color;
    }

    /// Restores the last `count` overridden colors.
    ///
    /// # Panics
    /// Panics when more colors are popped than were pushed.
    pub fn pop_theme_color(&mut self, count: usize) {
        assert!(
            count <= self.color_stack.len(),
            "pop_theme_color({count}) with only {} colors pushed",
            self.color_stack.len()
        );
        for _ in 0..count {
            if let Some((slot, color)) = self.color_stack.pop() {
                self.style.colors[slot] = color;
            }
        }
    }

    // ── last item ─────────────────────────────────────────────────────────

    pub fn was_last_item_hovered(&self) -> bool {
        self.prev_item.hovered
    }

    pub fn was_last_item_active(&self) -> bool {
        self.prev_item.active
    }

    /// Rectangle of the last widget placed in the current window.
    pub fn last_item_rect(&self) -> Rect {
        self.cur_win().layout.last_item
    }

    // ── window arena ──────────────────────────────────────────────────────

    /// Top-level window by name.
    pub fn find_window(&self, name: &str) -> Option<&Window> {
        let key = hash_str(name, 0);
        self.window_lookup.index(key).map(|i| &self.windows[i])
    }

    pub fn window_at(&self, idx: WindowIdx) -> &Window {
        &self.windows[idx.0]
    }

    /// Top-level windows, back to front.
    pub fn windows_in_focus_order(&self) -> impl Iterator<Item = &Window> + '_ {
        self.focus.as_slice().iter().map(|idx| &self.windows[idx.0])
    }

    pub fn current_window(&self) -> Option<WindowIdx> {
        self.window_stack.last().copied()
    }

    pub fn hovered_window(&self) -> Option<WindowIdx> {
        self.hovered_window
    }

    pub fn moving_window(&self) -> Option<WindowIdx> {
        self.moving_window
    }

    pub fn sizing_window(&self) -> Option<WindowIdx> {
        self.sizing_window
    }

    pub fn scrolling_window(&self) -> Option<WindowIdx> {
        self.scrolling_window
    }

    // ── internal helpers ──────────────────────────────────────────────────

    /// # Panics
    /// Panics outside of a `begin_window` / `end_window` pair.
    pub(crate) fn current(&self) -> WindowIdx {
        match self.window_stack.last() {
            Some(&idx) => idx,
            None => panic!("no window is open; widgets must be placed between begin_window and end_window"),
        }
    }

    #[inline]
    pub(crate) fn cur_win(&self) -> &Window {
        &self.windows[self.current().0]
    }

    #[inline]
    pub(crate) fn cur_win_mut(&mut self) -> &mut Window {
        let idx = self.current();
        &mut self.windows[idx.0]
    }

    #[inline]
    pub(crate) fn metrics(&self) -> LayoutMetrics {
        self.cur_win().layout_metrics(&self.style)
    }

    /// Top-left of the next widget in the current window.
    pub fn cursor_pos(&self) -> Vec2 {
        self.cur_win().layout.cursor_pos(self.style.indent)
    }

    /// Size the current row gives the next widget.
    pub fn calculate_item_size(&self, default_height: f32) -> Vec2 {
        let m = self.metrics();
        self.cur_win().layout.item_size(&m, default_height)
    }

    /// Consumes one layout cell of the given size.
    pub fn advance_cursor(&mut self, width: f32, height: f32) {
        let m = self.metrics();
        self.cur_win_mut().layout.advance(width, height, &m);
    }

    /// Whether an item at `pos` of `size` is vertically inside the current window.
    pub(crate) fn should_render(&self, pos: Vec2, size: Vec2) -> bool {
        let w = self.cur_win();
        !(pos.y + size.y < w.pos.y || pos.y > w.pos.y + w.size.y)
    }

    #[inline]
    pub(crate) fn frame_height(&self) -> f32 {
        self.style.frame_height()
    }

    /// Painter for the current window's foreground layer.
    pub(crate) fn painter(&mut self) -> Painter<'_> {
        let idx = self.current();
        let layer = self.windows[idx.0].fg_layer;
        Painter::new(&mut self.draw_list, layer, &self.style)
    }

    pub(crate) fn painter_on(&mut self, layer: LayerId) -> Painter<'_> {
        Painter::new(&mut self.draw_list, layer, &self.style)
    }

    /// Window-local storage of the current window.
    pub(crate) fn storage_mut(&mut self) -> &mut Storage {
        &mut self.cur_win_mut().storage
    }
}
