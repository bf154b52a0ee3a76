//! Public row entry points. Each opens a row on the current window's
//! layout state; see [`crate::layout`] for how rows size and wrap.

use crate::layout::{resolve_template, LayoutRow, RowSystem, RowType, TemplateEntry};
use crate::window::DEFAULT_ROW_WIDTH;

use super::Context;

impl Context {
    fn begin_row(&mut self, row: LayoutRow) {
        let spacing_y = self.style.item_spacing.y;
        self.cur_win_mut().layout.begin_row(row, spacing_y);
    }

    /// Closes an explicitly ended row and returns to the default row.
    fn end_row(&mut self, system: RowSystem, call: &str) {
        let spacing_y = self.style.item_spacing.y;
        let layout = &mut self.cur_win_mut().layout;
        assert_eq!(layout.row.system, system, "{call} called while a {:?} row is open", layout.row.system);
        if layout.row.is_partially_filled() {
            layout.fold_row(spacing_y);
        }
        layout.set_row(LayoutRow::static_width(0.0, DEFAULT_ROW_WIDTH, 1));
    }

    fn assert_row(&self, system: RowSystem, call: &str) {
        let open = self.cur_win().layout.row.system;
        assert_eq!(open, system, "{call} called while a {open:?} row is open");
    }

    // ── dynamic / static / array ──────────────────────────────────────────

    /// `columns` equal columns sharing the window width. A `height` of 0
    /// uses each widget's default height.
    pub fn layout_dynamic(&mut self, height: f32, columns: u32) {
        self.begin_row(LayoutRow::dynamic(height, columns.max(1)));
    }

    /// `columns` columns of `width` pixels.
    pub fn layout_static(&mut self, height: f32, width: f32, columns: u32) {
        self.begin_row(LayoutRow::static_width(height, width, columns.max(1)));
    }

    /// One column per entry of `sizes`: ratios when `row_type` is dynamic,
    /// pixels when static.
    pub fn layout_row(&mut self, row_type: RowType, height: f32, sizes: &[f32]) {
        self.begin_row(LayoutRow::array(row_type, height, sizes));
    }

    // ── explicit push ─────────────────────────────────────────────────────

    pub fn layout_row_begin(&mut self, row_type: RowType, height: f32, columns: u32) {
        self.begin_row(LayoutRow::new(RowSystem::RowPush, row_type, height, columns));
    }

    /// Width of the next column: a ratio or pixels, per the row type.
    pub fn layout_row_push(&mut self, width: f32) {
        self.assert_row(RowSystem::RowPush, "layout_row_push");
        self.cur_win_mut().layout.row.width = width;
    }

    pub fn layout_row_end(&mut self) {
        self.end_row(RowSystem::RowPush, "layout_row_end");
    }

    // ── template ──────────────────────────────────────────────────────────

    pub fn layout_template_begin(&mut self, height: f32) {
        self.begin_row(LayoutRow::new(RowSystem::Template, RowType::Static, height, 0));
    }

    /// A column of at least `min_width` pixels that grows with the window.
    pub fn layout_template_push_variable(&mut self, min_width: f32) {
        self.push_template(TemplateEntry::Variable(min_width), "layout_template_push_variable");
    }

    /// A column that takes what the other columns leave.
    pub fn layout_template_push_dynamic(&mut self) {
        self.push_template(TemplateEntry::Dynamic, "layout_template_push_dynamic");
    }

    /// A column of exactly `width` pixels.
    pub fn layout_template_push_static(&mut self, width: f32) {
        self.push_template(TemplateEntry::Static(width), "layout_template_push_static");
    }

    fn push_template(&mut self, entry: TemplateEntry, call: &str) {
        self.assert_row(RowSystem::Template, call);
        let row = &mut self.cur_win_mut().layout.row;
        row.template.push(entry);
        row.columns = row.template.len() as u32;
    }

    /// Resolves the pushed columns against the available width. The row
    /// then fills and wraps like a static row.
    pub fn layout_template_end(&mut self) {
        self.assert_row(RowSystem::Template, "layout_template_end");
        let m = self.metrics();
        let layout = &mut self.cur_win_mut().layout;
        let available = layout.available_width(&m, layout.row.columns);
        let sizes = resolve_template(&layout.row.template, available);
        log::trace!("template {:?} resolved to {sizes:?} in {available}px", layout.row.template);
        layout.row.sizes = sizes;
    }

    // ── freeform space ────────────────────────────────────────────────────

    /// Opens a region of `height` where widgets are placed explicitly with
    /// [`layout_space_push`](Self::layout_space_push).
    pub fn layout_space_begin(&mut self, row_type: RowType, height: f32, widgets: u32) {
        let mut row = LayoutRow::new(RowSystem::Space, row_type, height, widgets);
        row.specified_height = height;
        self.begin_row(row);
    }

    /// Places the next widget at `(x, y)` with size `(w, h)`. Values are
    /// fractions of the available width and the region height for a
    /// dynamic region, pixels for a static one.
    pub fn layout_space_push(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.assert_row(RowSystem::Space, "layout_space_push");
        let m = self.metrics();
        let layout = &mut self.cur_win_mut().layout;
        let (x_unit, y_unit) = match layout.row.row_type {
            RowType::Dynamic => (layout.available_width(&m, 1), layout.row.specified_height),
            RowType::Static => (1.0, 1.0),
        };
        let start = layout.row.row_start_x + layout.extra_indent;
        let row = &mut layout.row;
        row.horizontal_offset = start + x * x_unit;
        row.vertical_offset = y * y_unit;
        row.width = w;
        row.height = h * y_unit;
    }

    /// Closes the region; the cursor continues below its full height.
    pub fn layout_space_end(&mut self) {
        self.assert_row(RowSystem::Space, "layout_space_end");
        let layout = &mut self.cur_win_mut().layout;
        let region = layout.row.specified_height;
        layout.row.max_height = layout.row.max_height.max(region);
        self.end_row(RowSystem::Space, "layout_space_end");
    }

    // ── scopes and spacing ────────────────────────────────────────────────

    /// Opens a nested region under the last placed item.
    pub(crate) fn push_layout_scope(&mut self) {
        let m = self.metrics();
        let layout = &mut self.cur_win_mut().layout;
        let item = layout.last_item;
        layout.push_scope(item, &m);
    }

    pub(crate) fn pop_layout_scope(&mut self) {
        let spacing_y = self.style.item_spacing.y;
        self.cur_win_mut().layout.pop_scope(spacing_y);
    }

    /// Moves the next row down by twice the vertical item spacing.
    pub fn vertical_spacing(&mut self) {
        let gap = self.style.item_spacing.y * 2.0;
        self.cur_win_mut().layout.row_pos.y += gap;
    }

    /// Shifts following rows right by `amount` (0 means `style.indent`).
    pub fn indent(&mut self, amount: f32) {
        let amount = if amount == 0.0 { self.style.indent } else { amount };
        let layout = &mut self.cur_win_mut().layout;
        layout.extra_indent += amount;
        layout.row.horizontal_offset += amount;
    }

    pub fn unindent(&mut self, amount: f32) {
        let amount = if amount == 0.0 { self.style.indent } else { amount };
        let layout = &mut self.cur_win_mut().layout;
        layout.extra_indent -= amount;
        layout.row.horizontal_offset -= amount;
    }

    /// Depth of nested layout regions in the current window.
    pub fn layout_scope_depth(&self) -> usize {
        self.cur_win().layout.scope_depth()
    }
}
