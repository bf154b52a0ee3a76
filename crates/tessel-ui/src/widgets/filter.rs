//! Text filter: a comma separated pattern list typed into a text field.
//!
//! `"mesh,light"` passes anything containing either word, `"-debug"` drops
//! anything containing `debug`, and an empty pattern passes everything.
//! Matching ignores ASCII case.

use crate::context::Context;

use super::input_text::InputTextFlags;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    input: String,
    include: Vec<String>,
    exclude: Vec<String>,
}

impl TextFilter {
    pub fn new(pattern: &str) -> Self {
        let mut filter = Self { input: pattern.to_owned(), ..Self::default() };
        filter.build();
        filter
    }

    /// Re-parses the pattern text. Called by [`Context::text_filter`] after
    /// every edit; call it after changing [`input_mut`](Self::input_mut).
    pub fn build(&mut self) {
        self.include.clear();
        self.exclude.clear();
        for term in self.input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match term.strip_prefix('-') {
                Some(rest) if !rest.trim().is_empty() => self.exclude.push(rest.trim().to_ascii_lowercase()),
                Some(_) => {}
                None => self.include.push(term.to_ascii_lowercase()),
            }
        }
    }

    pub fn pass_filter(&self, text: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        let text = text.to_ascii_lowercase();
        if self.exclude.iter().any(|t| text.contains(t.as_str())) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|t| text.contains(t.as_str()))
    }

    /// True when the pattern has at least one term.
    pub fn is_active(&self) -> bool {
        !self.include.is_empty() || !self.exclude.is_empty()
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.build();
    }

    pub fn as_str(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }
}

impl Context {
    /// A text field editing `filter`'s pattern. Returns true when the pattern
    /// changed this frame.
    pub fn text_filter(&mut self, label: &str, filter: &mut TextFilter) -> bool {
        let changed = self.input_text(label, &mut filter.input, InputTextFlags::empty());
        if changed {
            filter.build();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_passes_everything() {
        let filter = TextFilter::new("  , ");
        assert!(!filter.is_active());
        assert!(filter.pass_filter("anything"));
    }

    #[test]
    fn include_terms_match_any_case_insensitively() {
        let filter = TextFilter::new("mesh, Light");
        assert!(filter.pass_filter("SkinnedMesh"));
        assert!(filter.pass_filter("point light"));
        assert!(!filter.pass_filter("camera"));
    }

    #[test]
    fn exclude_terms_win_over_includes() {
        let filter = TextFilter::new("mesh,-debug");
        assert!(filter.pass_filter("mesh"));
        assert!(!filter.pass_filter("debug mesh"));

        let only_exclude = TextFilter::new("-tmp");
        assert!(only_exclude.pass_filter("scene"));
        assert!(!only_exclude.pass_filter("scene.tmp"));
    }

    #[test]
    fn lone_dash_is_ignored_and_clear_resets() {
        let mut filter = TextFilter::new("-");
        assert!(!filter.is_active());
        *filter.input_mut() = "abc".into();
        filter.build();
        assert!(filter.is_active());
        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter.as_str(), "");
    }
}
