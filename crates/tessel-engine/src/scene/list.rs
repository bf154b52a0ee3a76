use crate::coords::Rect;

use super::DrawCmd;

/// Handle to a layer created with [`DrawList::request_layer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LayerId(usize);

/// A single draw item: command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

#[derive(Debug)]
struct Layer {
    name: String,
    items: Vec<DrawItem>,
}

/// Layered draw stream for a frame.
///
/// Widgets record into a window's layers in any order; the frame controller
/// then decides paint order by submitting layers one after another. Submitted
/// items are what the host renderer consumes.
///
/// # Clipping
///
/// Use [`push_clip`] / [`pop_clip`] to scope draw commands to a scissor rect.
/// With `accumulate` the new clip is intersected with its parent, otherwise it
/// replaces it until popped.
///
/// ```ignore
/// draw_list.push_clip(scroll_container_rect, true);
/// // ... add children ...
/// draw_list.pop_clip();
/// ```
///
/// [`push_clip`]: DrawList::push_clip
/// [`pop_clip`]: DrawList::pop_clip
#[derive(Debug, Default)]
pub struct DrawList {
    layers: Vec<Layer>,
    submitted: Vec<DrawItem>,

    /// Stack of active scissor rects (logical pixels).
    /// The top is always the current effective clip.
    clip_stack: Vec<Rect>,

    frame: u64,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty layer. Names are for diagnostics and need not be unique.
    pub fn request_layer(&mut self, name: impl Into<String>) -> LayerId {
        let id = LayerId(self.layers.len());
        self.layers.push(Layer { name: name.into(), items: Vec::new() });
        id
    }

    pub fn layer_name(&self, layer: LayerId) -> &str {
        &self.layers[layer.0].name
    }

    /// Items recorded into `layer` and not yet submitted.
    pub fn layer_items(&self, layer: LayerId) -> &[DrawItem] {
        &self.layers[layer.0].items
    }

    /// Starts a new frame: drops everything recorded or submitted last frame.
    pub fn begin_frame(&mut self) {
        debug_assert!(self.clip_stack.is_empty(), "frame started with {} clip rects pushed", self.clip_stack.len());
        for layer in &mut self.layers {
            layer.items.clear();
        }
        self.submitted.clear();
        self.clip_stack.clear();
        self.frame += 1;
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Records a draw command into `layer` under the current clip rect.
    #[inline]
    pub fn push(&mut self, layer: LayerId, cmd: DrawCmd) {
        let clip_rect = self.clip_stack.last().copied();
        self.layers[layer.0].items.push(DrawItem { cmd, clip_rect });
    }

    /// Begins a scissor region. All draw commands added until [`pop_clip`](Self::pop_clip)
    /// are clipped to `rect` (intersected with the parent clip when `accumulate`).
    ///
    /// Calls must be balanced with `pop_clip`.
    #[inline]
    pub fn push_clip(&mut self, rect: Rect, accumulate: bool) {
        let effective = match self.clip_stack.last() {
            Some(&parent) if accumulate => parent.clip_to(rect),
            _ => rect,
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region started by `push_clip`.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Current effective clip rect.
    #[inline]
    pub fn clip_rect(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Moves the layer's items to the end of the submitted stream.
    pub fn submit_layer(&mut self, layer: LayerId) {
        let items = &mut self.layers[layer.0].items;
        self.submitted.append(items);
    }

    /// Items handed to the renderer this frame, in paint order.
    #[inline]
    pub fn submitted(&self) -> &[DrawItem] {
        &self.submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── layers ────────────────────────────────────────────────────────────

    #[test]
    fn submission_order_defines_paint_order() {
        let mut list = DrawList::new();
        let back = list.request_layer("back");
        let front = list.request_layer("front");

        list.add_rect_filled(front, r(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        list.add_rect_filled(back, r(5.0, 5.0, 1.0, 1.0), Color::BLACK);

        list.submit_layer(back);
        list.submit_layer(front);

        let items = list.submitted();
        assert_eq!(items.len(), 2);
        assert!(matches!(&items[0].cmd, DrawCmd::Rect(c) if c.color == Color::BLACK));
        assert!(list.layer_items(back).is_empty());
    }

    #[test]
    fn begin_frame_clears_unsubmitted_layers() {
        let mut list = DrawList::new();
        let layer = list.request_layer("l");
        list.add_line(layer, Vec2::zero(), Vec2::new(1.0, 1.0), Color::WHITE, 1.0);
        list.begin_frame();
        assert!(list.layer_items(layer).is_empty());
        assert_eq!(list.frame_count(), 1);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn accumulated_clip_intersects_parent() {
        let mut list = DrawList::new();
        list.push_clip(r(0.0, 0.0, 100.0, 100.0), true);
        list.push_clip(r(50.0, 50.0, 100.0, 100.0), true);
        assert_eq!(list.clip_rect(), Some(r(50.0, 50.0, 50.0, 50.0)));
        list.pop_clip();
        list.pop_clip();
        assert_eq!(list.clip_rect(), None);
    }

    #[test]
    fn non_accumulated_clip_replaces_parent() {
        let mut list = DrawList::new();
        list.push_clip(r(0.0, 0.0, 10.0, 10.0), false);
        list.push_clip(r(50.0, 50.0, 10.0, 10.0), false);
        assert_eq!(list.clip_rect(), Some(r(50.0, 50.0, 10.0, 10.0)));
        list.pop_clip();
        list.pop_clip();
    }

    #[test]
    fn items_capture_clip_at_record_time() {
        let mut list = DrawList::new();
        let layer = list.request_layer("l");
        list.push_clip(r(0.0, 0.0, 10.0, 10.0), true);
        list.add_rect_filled(layer, r(0.0, 0.0, 50.0, 50.0), Color::WHITE);
        list.pop_clip();
        list.add_rect_filled(layer, r(0.0, 0.0, 50.0, 50.0), Color::WHITE);

        let items = list.layer_items(layer);
        assert_eq!(items[0].clip_rect, Some(r(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(items[1].clip_rect, None);
    }

    #[test]
    #[should_panic(expected = "pop_clip called without matching push_clip")]
    #[cfg(debug_assertions)]
    fn unbalanced_pop_clip_panics_in_debug() {
        DrawList::new().pop_clip();
    }
}
