use tessel_engine::coords::{Rect, Vec2};
use tessel_engine::input::MouseButton;

use crate::window::{WindowFlags, WindowIdx};

use super::{Context, PrevItemData};

/// Pixels scrolled per wheel line.
const WHEEL_SCROLL_SPEED: f32 = 10.0;
/// Pointer travel before a title-bar press turns into a move.
const MOVE_DRAG_THRESHOLD: f32 = 2.0;

impl Context {
    /// Starts a frame: advances the clock, clears the draw list and decides
    /// who owns a fresh mouse press.
    pub fn new_frame(&mut self, dt: f32) {
        self.frame_count += 1;
        self.input.new_frame(dt);
        self.draw_list.begin_frame();
        self.prev_item = PrevItemData::default();
        self.next_window = Default::default();
        self.popup_order.clear();
        self.closed_popups.clear();

        // Hover is re-evaluated here so events that arrived since the last
        // frame are tested against last frame's window layout.
        self.hovered_window = self.find_hovered_window();
        self.wheeling_window = match self.hovered_window {
            Some(idx)
                if self.input.mouse_wheel() != 0.0
                    && !self.windows[idx.0].flags.contains(WindowFlags::AUTO_SIZE) =>
            {
                Some(idx)
            }
            _ => None,
        };

        if self.input.is_mouse_clicked(MouseButton::Left) {
            self.mouse_owned = self.hovered_window.is_some();
            if self.hovered_window.is_none() {
                self.active_window = None;
            }
            self.close_popups_outside(self.hovered_window);
        }
    }

    /// Submits every layer in paint order and closes the frame.
    ///
    /// After this returns, [`draw_list().submitted()`](tessel_engine::scene::DrawList::submitted)
    /// holds the frame's output back to front.
    pub fn render(&mut self) {
        self.draw_list.submit_layer(self.bg_layer);

        for idx in self.collect_draw_order() {
            let w = &mut self.windows[idx.0];
            if w.hide_frames > 0 {
                w.hide_frames -= 1;
                continue;
            }
            let (bg, fg) = (w.bg_layer, w.fg_layer);
            self.draw_list.submit_layer(bg);
            self.draw_list.submit_layer(fg);
        }

        let tooltip = &self.windows[self.tooltip.0];
        if tooltip.active {
            let (bg, fg) = (tooltip.bg_layer, tooltip.fg_layer);
            self.draw_list.submit_layer(bg);
            self.draw_list.submit_layer(fg);
        }

        self.draw_list.submit_layer(self.fg_layer);
        self.draw_list.submit_layer(self.debug_layer);

        self.end_frame();
    }

    /// Commits interaction state and applies window focus, moves and
    /// scrolling. Called by [`render`](Self::render); call it directly only
    /// when the frame is not drawn.
    pub fn end_frame(&mut self) {
        if !self.window_stack.is_empty() {
            log::warn!("end_frame with {} window(s) still open", self.window_stack.len());
        }
        if !self.ids.is_empty() {
            log::warn!("end_frame with {} unpopped id(s)", self.ids.depth());
        }
        debug_assert!(self.window_stack.is_empty(), "begin_window without matching end_window");
        debug_assert!(self.ids.is_empty(), "push_id without matching pop_id");
        debug_assert!(self.color_stack.is_empty(), "push_theme_color without matching pop_theme_color");
        debug_assert!(self.popup_stack.is_empty(), "begin_popup without matching end_popup");
        self.window_stack.clear();
        self.ids.clear();
        self.popup_stack.clear();

        // ── interaction ids ───────────────────────────────────────────────
        if !self.active_id_alive && self.next_active_id == self.active_id {
            self.next_active_id = None;
        }
        self.hovered_id = self.next_hovered_id.take();
        self.active_id = self.next_active_id;
        self.active_id_alive = false;
        if self.text_input.as_ref().map(|s| s.id) != self.active_id {
            self.text_input = None;
        }
        if self.text_input.is_none() {
            self.active_id_allow_overlap = false;
        }

        // ── draw order and hover ──────────────────────────────────────────
        self.draw_order = self.collect_draw_order();
        for w in &mut self.windows {
            w.active = false;
        }

        let viewport = self.input.viewport();
        if viewport.is_valid() {
            for &idx in &self.draw_order {
                let w = &mut self.windows[idx.0];
                if w.pos.x > viewport.width {
                    w.pos.x = viewport.width - w.size.x * 0.5;
                } else if w.pos.x + w.size.x < 0.0 {
                    w.pos.x = -w.size.x * 0.5;
                }
                if w.pos.y > viewport.height {
                    w.pos.y = (viewport.height - w.size.y * 0.5).max(0.0);
                } else if w.pos.y < 0.0 {
                    w.pos.y = 0.0;
                }
            }
        }

        self.hovered_window = self.find_hovered_window();

        if !self.input.is_mouse_down(MouseButton::Left) {
            self.moving_window = None;
            self.sizing_window = None;
            self.scrolling_window = None;
        }

        // ── activation ────────────────────────────────────────────────────
        if self.input.is_mouse_clicked(MouseButton::Left)
            && let Some(idx) = self.hovered_window
        {
            self.activate_window(idx);
        }

        if let Some(front) = self.focus.apply() {
            log::trace!("focused window {:?}", self.windows[front.0].name);
            for (order, &idx) in self.focus.as_slice().iter().enumerate() {
                self.windows[idx.0].focus_order = order;
            }
        }

        // ── wheel and move ────────────────────────────────────────────────
        if let Some(idx) = self.wheeling_window {
            let wheel = self.input.mouse_wheel();
            let w = &mut self.windows[idx.0];
            w.scroll.y -= wheel * WHEEL_SCROLL_SPEED;
            w.clamp_scroll();
        }

        if let Some(idx) = self.moving_window
            && self.input.is_mouse_dragging(MouseButton::Left, MOVE_DRAG_THRESHOLD)
            && !self.windows[idx.0].flags.contains(WindowFlags::NO_MOVE)
        {
            let delta = self.input.mouse_drag_delta(MouseButton::Left, MOVE_DRAG_THRESHOLD);
            let inside = viewport.contains(self.input.mouse_pos());
            if inside {
                let w = &mut self.windows[idx.0];
                w.pos += delta;
                if viewport.is_valid() {
                    let half_w = w.size.x * 0.5;
                    let max_y = (viewport.height - w.title_bar_height * 0.5).max(0.0);
                    w.pos = w.pos.clamp(
                        Vec2::new(-half_w, 0.0),
                        Vec2::new(viewport.width - half_w, max_y),
                    );
                }
                self.input.reset_mouse_drag_delta(MouseButton::Left);
            }
        }

        self.input.end_frame();
    }

    /// A primary press landed on `idx`: make it the active window, raise its
    /// root, and start a move when the press is on the title bar and no
    /// widget claimed it.
    fn activate_window(&mut self, idx: WindowIdx) {
        self.active_window = Some(idx);
        self.mouse_owned = true;

        let w = &self.windows[idx.0];
        let root = w.root;
        self.focus.request(root);

        let title = Rect::new(w.pos.x + 2.0, w.pos.y, w.size.x - 4.0, w.title_bar_height);
        let grabs_title = w.title_bar_height > 0.0
            && !w.flags.contains(WindowFlags::NO_MOVE)
            && title.contains(self.input.mouse_pos())
            && self.active_id.is_none();
        if grabs_title {
            self.moving_window = Some(idx);
        }
    }

    /// Windows begun this frame, back to front: roots in focus order, then
    /// popups in the order they were begun, each followed by its children
    /// depth-first.
    pub(crate) fn collect_draw_order(&self) -> Vec<WindowIdx> {
        fn visit(ctx: &Context, idx: WindowIdx, out: &mut Vec<WindowIdx>) {
            out.push(idx);
            for &child in &ctx.windows[idx.0].children {
                if ctx.windows[child.0].active {
                    visit(ctx, child, out);
                }
            }
        }

        let mut out = Vec::new();
        for &root in self.focus.as_slice() {
            if self.windows[root.0].active {
                visit(self, root, &mut out);
            }
        }
        for &popup in &self.popup_order {
            if self.windows[popup.0].active {
                visit(self, popup, &mut out);
            }
        }
        out
    }

    /// Topmost window of the last drawn frame under the pointer.
    pub(crate) fn find_hovered_window(&self) -> Option<WindowIdx> {
        if !self.input.has_pointer() {
            return None;
        }
        let mouse = self.input.mouse_pos();
        self.draw_order.iter().rev().copied().find(|&idx| {
            let w = &self.windows[idx.0];
            let mut bounds = w.outer_rect_clipped;
            if !w.flags.contains(WindowFlags::NO_RESIZE) {
                bounds = bounds.expand(2.0);
            }
            bounds.contains(mouse)
        })
    }
}
