//! Window focus (z-) order.
//!
//! Top-level windows are kept oldest-focused first; the last entry is drawn
//! on top and wins hover tests. A press on a window requests focus for its
//! root, and [`FocusOrder::apply`] splices that root to the end at end of
//! frame. Other windows keep their relative order.

use super::WindowIdx;

#[derive(Debug, Default, Clone)]
pub(crate) struct FocusOrder {
    order: Vec<WindowIdx>,
    requested: Option<WindowIdx>,
}

impl FocusOrder {
    /// Appends a newly created root window on top.
    pub fn register(&mut self, idx: WindowIdx) {
        debug_assert!(!self.order.contains(&idx), "window {idx:?} registered twice");
        self.order.push(idx);
    }

    /// Requests that `idx` be brought to the front at the next [`apply`](Self::apply).
    #[inline]
    pub fn request(&mut self, idx: WindowIdx) {
        self.requested = Some(idx);
    }

    /// Applies a pending request. Returns the promoted window, if any moved.
    pub fn apply(&mut self) -> Option<WindowIdx> {
        let idx = self.requested.take()?;
        self.promote(idx).then_some(idx)
    }

    /// Moves `idx` to the front. Returns false when it already was, or is unknown.
    pub fn promote(&mut self, idx: WindowIdx) -> bool {
        match self.order.iter().position(|&w| w == idx) {
            Some(pos) if pos + 1 != self.order.len() => {
                self.order.remove(pos);
                self.order.push(idx);
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn position(&self, idx: WindowIdx) -> Option<usize> {
        self.order.iter().position(|&w| w == idx)
    }

    #[inline]
    pub fn front(&self) -> Option<WindowIdx> {
        self.order.last().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[WindowIdx] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(ids: &[usize]) -> FocusOrder {
        let mut f = FocusOrder::default();
        for &i in ids {
            f.register(WindowIdx(i));
        }
        f
    }

    fn raw(f: &FocusOrder) -> Vec<usize> {
        f.as_slice().iter().map(|w| w.0).collect()
    }

    #[test]
    fn promote_moves_to_front_preserving_others() {
        let mut f = order(&[0, 1, 2, 3]);
        assert!(f.promote(WindowIdx(1)));
        assert_eq!(raw(&f), vec![0, 2, 3, 1]);
        assert_eq!(f.front(), Some(WindowIdx(1)));
    }

    #[test]
    fn promote_front_is_noop() {
        let mut f = order(&[0, 1]);
        assert!(!f.promote(WindowIdx(1)));
        assert_eq!(raw(&f), vec![0, 1]);
    }

    #[test]
    fn request_applies_once() {
        let mut f = order(&[0, 1, 2]);
        f.request(WindowIdx(0));
        assert_eq!(f.apply(), Some(WindowIdx(0)));
        assert_eq!(f.apply(), None);
        assert_eq!(raw(&f), vec![1, 2, 0]);
        assert_eq!(f.position(WindowIdx(2)), Some(1));
    }
}
