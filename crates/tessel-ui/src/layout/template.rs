/// Smallest width a dynamic template column is ever given.
pub const DYNAMIC_MIN_WIDTH: f32 = 10.0;

/// One column of a template row.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TemplateEntry {
    /// Exactly this many pixels.
    Static(f32),
    /// At least this many pixels; grows with the even split.
    Variable(f32),
    /// Whatever remains after static and variable columns.
    Dynamic,
}

/// Resolves template columns against `available` pixels.
///
/// Static columns are taken off the top. The rest is split evenly between
/// variable and dynamic columns; a variable column whose minimum exceeds the
/// split keeps its minimum, and the difference is taken from the dynamic
/// columns only, which never drop below [`DYNAMIC_MIN_WIDTH`]. Columns are
/// visited left to right.
pub fn resolve_template(entries: &[TemplateEntry], available: f32) -> Vec<f32> {
    let static_total: f32 = entries
        .iter()
        .map(|e| match e {
            TemplateEntry::Static(w) => *w,
            _ => 0.0,
        })
        .sum();
    let flexible = entries.iter().filter(|e| !matches!(e, TemplateEntry::Static(_))).count();
    let dynamic = entries.iter().filter(|e| matches!(e, TemplateEntry::Dynamic)).count();

    let split = if flexible > 0 { (available - static_total) / flexible as f32 } else { 0.0 };

    let mut shortfall = 0.0;
    let mut widths: Vec<f32> = entries
        .iter()
        .map(|e| match *e {
            TemplateEntry::Static(w) => w,
            TemplateEntry::Variable(min) if min > split => {
                shortfall += min - split;
                min
            }
            TemplateEntry::Variable(_) => split,
            TemplateEntry::Dynamic => 0.0,
        })
        .collect();

    if dynamic > 0 {
        let share = (split - shortfall / dynamic as f32).max(DYNAMIC_MIN_WIDTH);
        for (w, e) in widths.iter_mut().zip(entries) {
            if matches!(e, TemplateEntry::Dynamic) {
                *w = share;
            }
        }
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemplateEntry::{Dynamic, Static, Variable};

    fn mixed() -> [TemplateEntry; 3] {
        [Static(100.0), Variable(500.0), Dynamic]
    }

    // ── mixed static / variable / dynamic ─────────────────────────────────

    #[test]
    fn dynamic_absorbs_remainder_when_minimum_exceeds_split() {
        assert_eq!(resolve_template(&mixed(), 1000.0), vec![100.0, 500.0, 400.0]);
    }

    #[test]
    fn starvation_keeps_minimum_and_floors_dynamic() {
        assert_eq!(resolve_template(&mixed(), 400.0), vec![100.0, 500.0, 10.0]);
    }

    #[test]
    fn plenty_of_room_splits_evenly() {
        assert_eq!(resolve_template(&mixed(), 1200.0), vec![100.0, 550.0, 550.0]);
    }

    #[test]
    fn static_column_is_exact_at_any_width() {
        for w in [0.0, 50.0, 333.0, 10_000.0] {
            let widths = resolve_template(&mixed(), w);
            assert_eq!(widths[0], 100.0);
            assert!(widths[1] >= 500.0);
            assert!(widths[2] >= DYNAMIC_MIN_WIDTH);
        }
    }

    // ── degenerate shapes ─────────────────────────────────────────────────

    #[test]
    fn all_variable_is_even_split_with_protected_minimums() {
        let widths = resolve_template(&[Variable(100.0), Variable(300.0)], 500.0);
        assert_eq!(widths, vec![250.0, 300.0]);
    }

    #[test]
    fn shortfall_spreads_over_dynamic_columns() {
        let widths = resolve_template(&[Variable(400.0), Dynamic, Dynamic], 900.0);
        // split 300, shortfall 100 → each dynamic loses 50.
        assert_eq!(widths, vec![400.0, 250.0, 250.0]);
    }

    #[test]
    fn only_static_columns() {
        assert_eq!(resolve_template(&[Static(20.0), Static(30.0)], 10.0), vec![20.0, 30.0]);
    }

    #[test]
    fn empty_template_resolves_to_nothing() {
        assert!(resolve_template(&[], 100.0).is_empty());
    }
}
