//! Layout rows.
//!
//! A window is filled row by row. The call that opens a row picks one of six
//! strategies ([`RowSystem`]); every widget then asks the row for its size and
//! reports back through `advance`, which moves the cursor and wraps to a new
//! row once the declared column count is reached.
//!
//! ```text
//!  row_pos ─┐
//!           ▼
//!           ┌────────┐ spacing.x ┌────────┐
//!           │ col 0  │           │ col 1  │     max_height
//!           └────────┘           └────────┘
//!                 spacing.y
//!  next row ─► ...
//! ```

mod cursor;
mod template;

pub(crate) use cursor::{LayoutMetrics, LayoutState};
pub use template::{resolve_template, TemplateEntry, DYNAMIC_MIN_WIDTH};

/// How column widths are interpreted.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RowType {
    /// Widths are ratios of the available window width.
    #[default]
    Dynamic,
    /// Widths are pixels.
    Static,
}

/// Layout strategy of the current row.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RowSystem {
    /// Every column gets the same ratio.
    #[default]
    Dynamic,
    /// Every column gets the same pixel width.
    Static,
    /// Widths pushed one column at a time; no implicit wrap.
    RowPush,
    /// Per-column sizes or ratios supplied up front.
    Array,
    /// Static / variable / dynamic column descriptors.
    Template,
    /// Freeform placement inside a region; no implicit wrap.
    Space,
}

impl RowSystem {
    /// Whether filling the last column starts a new row automatically.
    #[inline]
    pub fn wraps(self) -> bool {
        !matches!(self, RowSystem::RowPush | RowSystem::Space)
    }
}

/// The row currently being filled.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub row_type: RowType,
    pub system: RowSystem,
    /// Widget height; 0 means each widget's default height.
    pub height: f32,
    /// Height unit for freeform space offsets.
    pub specified_height: f32,
    /// Ratio or pixel width for dynamic/static/push/space rows.
    pub width: f32,
    pub columns: u32,
    pub current_column: u32,
    pub max_width: f32,
    pub max_height: f32,
    pub horizontal_offset: f32,
    pub vertical_offset: f32,
    pub row_start_x: f32,
    /// Array sizes or ratios, or resolved template widths.
    pub sizes: Vec<f32>,
    /// Template column descriptors, consumed by `layout_template_end`.
    pub template: Vec<TemplateEntry>,
}

impl Default for LayoutRow {
    /// A single full-width dynamic column sized by each widget's default height.
    fn default() -> Self {
        Self::new(RowSystem::Dynamic, RowType::Dynamic, 0.0, 1)
    }
}

impl LayoutRow {
    pub fn new(system: RowSystem, row_type: RowType, height: f32, columns: u32) -> Self {
        Self {
            row_type,
            system,
            height,
            specified_height: height,
            width: if columns > 0 { 1.0 / columns as f32 } else { 0.0 },
            columns,
            current_column: 0,
            max_width: 0.0,
            max_height: 0.0,
            horizontal_offset: 0.0,
            vertical_offset: 0.0,
            row_start_x: 0.0,
            sizes: Vec::new(),
            template: Vec::new(),
        }
    }

    pub fn dynamic(height: f32, columns: u32) -> Self {
        Self::new(RowSystem::Dynamic, RowType::Dynamic, height, columns)
    }

    pub fn static_width(height: f32, width: f32, columns: u32) -> Self {
        Self { width, ..Self::new(RowSystem::Static, RowType::Static, height, columns) }
    }

    pub fn array(row_type: RowType, height: f32, sizes: &[f32]) -> Self {
        Self {
            sizes: sizes.to_vec(),
            ..Self::new(RowSystem::Array, row_type, height, sizes.len() as u32)
        }
    }

    /// True once at least one widget was placed and the row has not wrapped.
    #[inline]
    pub fn is_partially_filled(&self) -> bool {
        self.current_column > 0 || self.max_height > 0.0
    }
}
