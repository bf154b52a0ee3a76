//! Visible-range iteration over long lists of equal-height rows.

use std::ops::Range;

use crate::context::Context;

/// Lays out only the rows of a long list that intersect the window's clip
/// region and skips the cursor over the rest, so content size and scroll
/// range still cover the whole list.
///
/// # Example
/// ```rust,ignore
/// let mut clipper = ListClipper::new(lines.len());
/// while clipper.step(&mut ctx) {
///     for i in clipper.display_range() {
///         ctx.text(&lines[i]);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListClipper {
    count: usize,
    display: Range<usize>,
    pitch: f32,
    steps: u32,
}

impl ListClipper {
    /// A clipper over `count` single-column rows of the current row height
    /// (the frame height when the row has none).
    pub fn new(count: usize) -> Self {
        Self { count, display: 0..0, pitch: 0.0, steps: 0 }
    }

    /// Overrides the row height.
    pub fn with_item_height(count: usize, height: f32) -> Self {
        Self { pitch: height, ..Self::new(count) }
    }

    /// Rows to lay out during the current step.
    #[inline]
    pub fn display_range(&self) -> Range<usize> {
        self.display.clone()
    }

    /// Advances the clipper. The first call skips rows above the clip region
    /// and returns true with the visible rows in [`display_range`](Self::display_range);
    /// the second skips the rows below and returns false.
    pub fn step(&mut self, ctx: &mut Context) -> bool {
        self.steps += 1;
        match self.steps {
            1 if self.count > 0 => {
                let row_h = ctx.calculate_item_size(ctx.style().frame_height()).y;
                if self.pitch <= 0.0 {
                    self.pitch = row_h;
                }
                let pitch = self.pitch + ctx.style().item_spacing.y;
                let window = ctx.cur_win();
                let clip = window.inner_clip_rect;
                let start_y = window.layout.row_pos.y;

                self.display = visible_rows(self.count, pitch, start_y, clip.origin.y, clip.max().y);
                ctx.cur_win_mut().layout.skip_rows(self.display.start, pitch);
                self.pitch = pitch;
                true
            }
            2 => {
                let below = self.count - self.display.end;
                ctx.cur_win_mut().layout.skip_rows(below, self.pitch);
                self.display = 0..0;
                false
            }
            _ => {
                self.display = 0..0;
                false
            }
        }
    }
}

/// Indices of rows of `pitch` starting at `start_y` that overlap `[top, bottom)`.
fn visible_rows(count: usize, pitch: f32, start_y: f32, top: f32, bottom: f32) -> Range<usize> {
    if pitch <= 0.0 {
        return 0..count;
    }
    let first = ((top - start_y) / pitch).floor().max(0.0) as usize;
    let last = ((bottom - start_y) / pitch).ceil().max(0.0) as usize;
    let first = first.min(count);
    first..last.clamp(first, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_above_and_below_are_skipped() {
        // rows of 25px from y=100; clip shows 300..400
        assert_eq!(visible_rows(100, 25.0, 100.0, 300.0, 400.0), 8..12);
    }

    #[test]
    fn list_starting_below_clip_shows_nothing() {
        assert_eq!(visible_rows(10, 25.0, 500.0, 0.0, 400.0), 0..0);
    }

    #[test]
    fn range_is_capped_at_count() {
        assert_eq!(visible_rows(3, 25.0, 0.0, 0.0, 1000.0), 0..3);
    }

    #[test]
    fn zero_count_finishes_immediately() {
        let c = ListClipper::new(0);
        assert_eq!(c.display_range(), 0..0);
    }
}
