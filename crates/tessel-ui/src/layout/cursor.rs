use tessel_engine::coords::{Rect, Vec2};

use super::{LayoutRow, RowSystem, RowType};

/// Window and style measurements the row engine sizes against.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct LayoutMetrics {
    pub window_width: f32,
    pub horizontal_padding: f32,
    pub spacing: Vec2,
    pub indent: f32,
    /// Width taken by the vertical scrollbar gutter, 0 when hidden.
    pub scrollbar_gutter: f32,
}

/// Per-window transient layout state, reset by every `begin_window`.
#[derive(Debug, Clone, Default)]
pub(crate) struct LayoutState {
    pub cursor_start: Vec2,
    pub row_pos: Vec2,
    pub cursor_max: Vec2,
    pub extra_indent: f32,
    pub tree_depth: u32,
    pub row: LayoutRow,
    pub row_stack: Vec<LayoutRow>,
    pub cursor_stack: Vec<Vec2>,
    pub last_item: Rect,
}

impl LayoutState {
    pub fn reset(&mut self, start: Vec2) {
        self.cursor_start = start;
        self.row_pos = start;
        self.cursor_max = start;
        self.extra_indent = 0.0;
        self.tree_depth = 0;
        self.row = LayoutRow::default();
        self.row_stack.clear();
        self.cursor_stack.clear();
        self.last_item = Rect::from_origin_size(start, Vec2::zero());
    }

    /// Top-left of the next widget.
    #[inline]
    pub fn cursor_pos(&self, indent: f32) -> Vec2 {
        Vec2::new(
            self.row_pos.x + self.row.horizontal_offset + self.tree_depth as f32 * indent,
            self.row_pos.y + self.row.vertical_offset,
        )
    }

    /// Width shared by `columns` columns after padding, spacing, gutter and indent.
    pub fn available_width(&self, m: &LayoutMetrics, columns: u32) -> f32 {
        m.window_width
            - 2.0 * m.horizontal_padding
            - m.spacing.x * columns.saturating_sub(1) as f32
            - m.scrollbar_gutter
            - self.tree_depth as f32 * m.indent
    }

    /// Size of the next widget under the current row strategy.
    pub fn item_size(&self, m: &LayoutMetrics, default_height: f32) -> Vec2 {
        let row = &self.row;
        let height = if row.height > 0.0 { row.height } else { default_height };
        let col = row.current_column as usize;

        let width = match row.system {
            RowSystem::Template => row.sizes.get(col).copied().unwrap_or(0.0),
            RowSystem::Space => match row.row_type {
                RowType::Dynamic => row.width * self.available_width(m, 1),
                RowType::Static => row.width,
            },
            RowSystem::Array => {
                let size = row.sizes.get(col).copied().unwrap_or(0.0);
                self.scale_width(m, size)
            }
            _ => self.scale_width(m, row.width),
        };
        Vec2::new(width, height)
    }

    fn scale_width(&self, m: &LayoutMetrics, width: f32) -> f32 {
        match self.row.row_type {
            RowType::Dynamic => width * self.available_width(m, self.row.columns),
            RowType::Static => width,
        }
    }

    /// Records a placed widget and moves to the next column, wrapping when the
    /// row is full.
    ///
    /// # Panics
    /// Panics when more widgets are placed than an explicit push row declared.
    pub fn advance(&mut self, width: f32, height: f32, m: &LayoutMetrics) {
        self.last_item = Rect::from_origin_size(self.cursor_pos(m.indent), Vec2::new(width, height));

        let row = &mut self.row;
        row.current_column += 1;
        row.max_width = row.max_width.max(row.horizontal_offset + width);
        row.max_height = row.max_height.max(row.vertical_offset + height);

        if row.current_column < row.columns {
            row.horizontal_offset += width + m.spacing.x;
        }

        assert!(
            !(row.system == RowSystem::RowPush && row.current_column > row.columns),
            "layout row overflow: {} widgets placed in a {}-column row",
            row.current_column,
            row.columns
        );

        if row.current_column >= row.columns && row.system.wraps() {
            self.fold_row(m.spacing.y);
        }
    }

    /// Closes the current row: folds its extent into the content accumulator
    /// and moves the row origin below it.
    pub fn fold_row(&mut self, spacing_y: f32) {
        self.cursor_max.x = self.cursor_max.x.max(self.row_pos.x + self.row.max_width);
        self.row_pos.y += self.row.max_height + spacing_y;
        self.cursor_max.y = self.cursor_max.y.max(self.row_pos.y);

        let row = &mut self.row;
        row.current_column = 0;
        row.max_width = 0.0;
        row.max_height = 0.0;
        row.horizontal_offset = row.row_start_x + self.extra_indent;
        row.vertical_offset = 0.0;
    }

    /// Replaces the current row without closing it.
    pub fn set_row(&mut self, mut row: LayoutRow) {
        row.horizontal_offset = row.row_start_x + self.extra_indent;
        self.row = row;
    }

    /// Opens a new row, closing a partially filled one first.
    pub fn begin_row(&mut self, row: LayoutRow, spacing_y: f32) {
        if self.row.is_partially_filled() {
            self.fold_row(spacing_y);
        }
        self.set_row(row);
    }

    /// Opens a nested region below `item` (a header, tree node or tab bar
    /// that was just placed). The current row and origin are saved.
    pub fn push_scope(&mut self, item: Rect, m: &LayoutMetrics) {
        let origin = Vec2::new(
            item.origin.x - self.tree_depth as f32 * m.indent - self.extra_indent,
            item.max().y + m.spacing.y,
        );
        let inner = match self.row.system {
            RowSystem::RowPush | RowSystem::Space => LayoutRow::default(),
            _ => LayoutRow {
                current_column: 0,
                max_width: 0.0,
                max_height: 0.0,
                vertical_offset: 0.0,
                ..self.row.clone()
            },
        };
        let saved = std::mem::take(&mut self.row);
        self.row_stack.push(saved);
        self.cursor_stack.push(self.row_pos);
        self.row_pos = origin;
        self.set_row(inner);
    }

    /// Closes the region opened by [`push_scope`](Self::push_scope) and
    /// continues the saved row below the region's content.
    ///
    /// # Panics
    /// Panics when no region is open.
    pub fn pop_scope(&mut self, spacing_y: f32) {
        let (Some(row), Some(saved)) = (self.row_stack.pop(), self.cursor_stack.pop()) else {
            panic!("layout scope underflow: closing a region that was never opened");
        };
        if self.row.is_partially_filled() {
            self.fold_row(spacing_y);
        }
        let child_end = self.row_pos.y;

        self.row = row;
        if self.row.current_column == 0 {
            self.row_pos = Vec2::new(saved.x, child_end);
        } else {
            self.row_pos = saved;
            self.row.max_height = self.row.max_height.max(child_end - saved.y - spacing_y);
        }
    }

    /// Moves the row origin down over `rows` rows of `pitch` pixels that are
    /// not laid out, counting them as content.
    pub fn skip_rows(&mut self, rows: usize, pitch: f32) {
        if rows == 0 {
            return;
        }
        self.row_pos.y += rows as f32 * pitch;
        self.cursor_max.y = self.cursor_max.y.max(self.row_pos.y);
    }

    #[inline]
    pub fn scope_depth(&self) -> usize {
        self.row_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(width: f32) -> LayoutMetrics {
        LayoutMetrics {
            window_width: width,
            horizontal_padding: 5.0,
            spacing: Vec2::new(8.0, 4.0),
            indent: 15.0,
            scrollbar_gutter: 0.0,
        }
    }

    fn state() -> LayoutState {
        let mut s = LayoutState::default();
        s.reset(Vec2::new(100.0, 100.0));
        s
    }

    // ── sizing ────────────────────────────────────────────────────────────

    #[test]
    fn dynamic_columns_share_available_width() {
        let mut s = state();
        s.set_row(LayoutRow::dynamic(0.0, 2));
        let size = s.item_size(&metrics(400.0), 21.0);
        assert_eq!(size, Vec2::new((400.0 - 10.0 - 8.0) / 2.0, 21.0));
    }

    #[test]
    fn scrollbar_gutter_and_tree_depth_shrink_dynamic_width() {
        let mut s = state();
        s.tree_depth = 2;
        let mut m = metrics(400.0);
        m.scrollbar_gutter = 12.0;
        assert_eq!(s.item_size(&m, 21.0).x, 400.0 - 10.0 - 12.0 - 30.0);
    }

    #[test]
    fn explicit_row_height_overrides_default() {
        let mut s = state();
        s.set_row(LayoutRow::static_width(40.0, 120.0, 1));
        assert_eq!(s.item_size(&metrics(400.0), 21.0), Vec2::new(120.0, 40.0));
    }

    #[test]
    fn array_row_reads_per_column_ratio() {
        let mut s = state();
        s.set_row(LayoutRow::array(RowType::Dynamic, 0.0, &[0.25, 0.75]));
        let m = metrics(408.0);
        assert_eq!(s.item_size(&m, 10.0).x, 0.25 * 390.0);
        s.advance(97.5, 10.0, &m);
        assert_eq!(s.item_size(&m, 10.0).x, 0.75 * 390.0);
    }

    // ── advancing / wrapping ──────────────────────────────────────────────

    #[test]
    fn wrap_moves_row_down_and_folds_extent() {
        let mut s = state();
        let m = metrics(400.0);
        s.set_row(LayoutRow::static_width(0.0, 50.0, 2));
        s.advance(50.0, 20.0, &m);
        assert_eq!(s.cursor_pos(m.indent), Vec2::new(158.0, 100.0));
        s.advance(50.0, 30.0, &m);

        assert_eq!(s.row.current_column, 0);
        assert_eq!(s.row_pos, Vec2::new(100.0, 134.0));
        assert_eq!(s.cursor_max, Vec2::new(208.0, 134.0));
        assert_eq!(s.last_item, Rect::new(158.0, 100.0, 50.0, 30.0));
    }

    #[test]
    fn push_row_does_not_wrap() {
        let mut s = state();
        let m = metrics(400.0);
        s.set_row(LayoutRow::new(RowSystem::RowPush, RowType::Static, 0.0, 1));
        s.advance(50.0, 20.0, &m);
        assert_eq!(s.row.current_column, 1);
        assert_eq!(s.row_pos.y, 100.0);
    }

    #[test]
    #[should_panic(expected = "layout row overflow")]
    fn push_row_overflow_panics() {
        let mut s = state();
        let m = metrics(400.0);
        s.set_row(LayoutRow::new(RowSystem::RowPush, RowType::Static, 0.0, 1));
        s.advance(50.0, 20.0, &m);
        s.advance(50.0, 20.0, &m);
    }

    #[test]
    fn begin_row_closes_partial_row() {
        let mut s = state();
        let m = metrics(400.0);
        s.set_row(LayoutRow::static_width(0.0, 50.0, 3));
        s.advance(50.0, 20.0, &m);
        s.begin_row(LayoutRow::dynamic(0.0, 1), m.spacing.y);
        assert_eq!(s.row_pos.y, 124.0);
        assert_eq!(s.row.horizontal_offset, 0.0);
    }

    #[test]
    fn extra_indent_applies_to_new_rows() {
        let mut s = state();
        s.extra_indent = 15.0;
        s.set_row(LayoutRow::dynamic(0.0, 1));
        assert_eq!(s.cursor_pos(15.0).x, 115.0);
    }

    // ── scopes ────────────────────────────────────────────────────────────

    #[test]
    fn scope_in_single_column_row_continues_below_children() {
        let mut s = state();
        let m = metrics(400.0);
        s.set_row(LayoutRow::static_width(0.0, 300.0, 1));
        s.advance(300.0, 21.0, &m);
        let header = s.last_item;
        s.push_scope(header, &m);
        assert_eq!(s.row_pos, Vec2::new(100.0, 125.0));
        assert_eq!(s.scope_depth(), 1);

        s.advance(300.0, 21.0, &m);
        s.advance(300.0, 21.0, &m);
        s.pop_scope(m.spacing.y);

        assert_eq!(s.scope_depth(), 0);
        assert_eq!(s.row_pos, Vec2::new(100.0, 175.0));
        assert_eq!(s.row.width, 300.0);
    }

    #[test]
    fn scope_in_multi_column_row_raises_row_height() {
        let mut s = state();
        let m = metrics(400.0);
        s.set_row(LayoutRow::static_width(0.0, 100.0, 2));
        s.advance(100.0, 21.0, &m);
        let header = s.last_item;
        s.push_scope(header, &m);
        s.advance(100.0, 21.0, &m);
        s.pop_scope(m.spacing.y);

        assert_eq!(s.row_pos.y, 100.0);
        // child content ended at 100 + 25 + 25 = 150
        assert_eq!(s.row.max_height, 46.0);
        s.advance(100.0, 21.0, &m);
        assert_eq!(s.row_pos.y, 150.0);
    }

    #[test]
    fn tree_depth_indents_children() {
        let mut s = state();
        let m = metrics(400.0);
        s.set_row(LayoutRow::dynamic(0.0, 1));
        s.advance(390.0, 21.0, &m);
        let node = s.last_item;
        s.push_scope(node, &m);
        s.tree_depth += 1;
        assert_eq!(s.cursor_pos(m.indent).x, 115.0);
        s.tree_depth -= 1;
        s.pop_scope(m.spacing.y);
        assert_eq!(s.cursor_pos(m.indent).x, 100.0);
    }

    #[test]
    fn skipped_rows_count_as_content() {
        let mut s = state();
        s.skip_rows(10, 25.0);
        assert_eq!(s.row_pos.y, 350.0);
        assert_eq!(s.cursor_max.y, 350.0);
        s.skip_rows(0, 25.0);
        assert_eq!(s.row_pos.y, 350.0);
    }

    #[test]
    #[should_panic(expected = "layout scope underflow")]
    fn pop_without_scope_panics() {
        state().pop_scope(4.0);
    }
}
