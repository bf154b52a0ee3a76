//! Widget identity: seeded CRC32 label hashing and the ID stack.
//!
//! A label hashes together with the top of the ID stack, so identical labels
//! in different windows, tree nodes or tabs get different identities.
//!
//! Label conventions:
//! - `"Save##toolbar"`: everything after `##` is hashed but never displayed.
//! - `"Save###save"`: hashing restarts at `###`, so the id depends only on
//!   the suffix and the visible text can change freely.

use std::fmt;

/// 32-bit hashed widget identity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct WidgetId(u32);

impl WidgetId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Identity `n` slots after this one. Used for the fixed family of
    /// window handles (resize grips, scrollbars) derived from a window id.
    #[inline]
    pub const fn offset(self, n: u32) -> Self {
        Self(self.0.wrapping_add(n))
    }
}

impl fmt::Debug for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WidgetId({:#010x})", self.0)
    }
}

const CRC32_LUT: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

#[inline]
fn crc_step(crc: u32, byte: u8) -> u32 {
    (crc >> 8) ^ CRC32_LUT[((crc & 0xFF) ^ u32::from(byte)) as usize]
}

/// Hashes a label. A `"###"` marker resets the hash to the seed.
pub fn hash_str(label: &str, seed: u32) -> u32 {
    let seed = !seed;
    let bytes = label.as_bytes();
    let mut crc = seed;
    for (i, &c) in bytes.iter().enumerate() {
        if c == b'#' && bytes.get(i + 1) == Some(&b'#') && bytes.get(i + 2) == Some(&b'#') {
            crc = seed;
        }
        crc = crc_step(crc, c);
    }
    !crc
}

/// Plain seeded CRC32 over raw bytes.
pub fn hash_bytes(data: &[u8], seed: u32) -> u32 {
    !data.iter().fold(!seed, |crc, &c| crc_step(crc, c))
}

/// The displayed part of a label: everything before the first `##`.
pub fn visible_label(label: &str) -> &str {
    match label.find("##") {
        Some(end) => &label[..end],
        None => label,
    }
}

/// LIFO of scope hashes. The top seeds every label hash.
#[derive(Debug, Default, Clone)]
pub struct IdStack {
    stack: Vec<WidgetId>,
}

impl IdStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, id: WidgetId) {
        self.stack.push(id);
    }

    /// # Panics
    /// Panics when the stack is empty; every pop must match a push.
    pub fn pop(&mut self) -> WidgetId {
        match self.stack.pop() {
            Some(id) => id,
            None => panic!("id stack underflow: pop without a matching push"),
        }
    }

    #[inline]
    pub fn top(&self) -> Option<WidgetId> {
        self.stack.last().copied()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Seed for hashes computed in the current scope (0 at the root).
    #[inline]
    pub fn seed(&self) -> u32 {
        self.top().map_or(0, WidgetId::raw)
    }

    /// Identity of `label` in the current scope.
    #[inline]
    pub fn id_of(&self, label: &str) -> WidgetId {
        WidgetId(hash_str(label, self.seed()))
    }

    /// Identity of raw bytes (integers, pointers) in the current scope.
    #[inline]
    pub fn id_of_bytes(&self, data: &[u8]) -> WidgetId {
        WidgetId(hash_bytes(data, self.seed()))
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hashing ───────────────────────────────────────────────────────────

    #[test]
    fn unseeded_hash_is_standard_crc32() {
        assert_eq!(hash_str("123456789", 0), 0xCBF4_3926);
        assert_eq!(hash_bytes(b"123456789", 0), 0xCBF4_3926);
    }

    #[test]
    fn seed_changes_hash() {
        assert_ne!(hash_str("OK", 1), hash_str("OK", 2));
    }

    #[test]
    fn triple_hash_resets_to_seed() {
        assert_eq!(hash_str("Play###media", 7), hash_str("Pause###media", 7));
        assert_eq!(hash_str("Play###media", 7), hash_str("###media", 7));
        assert_ne!(hash_str("Play##a", 7), hash_str("Pause##a", 7));
    }

    #[test]
    fn visible_label_hides_suffix() {
        assert_eq!(visible_label("Save##toolbar"), "Save");
        assert_eq!(visible_label("Play###media"), "Play");
        assert_eq!(visible_label("##hidden"), "");
        assert_eq!(visible_label("plain"), "plain");
    }

    // ── stack ─────────────────────────────────────────────────────────────

    #[test]
    fn same_label_different_scope_differs() {
        let mut ids = IdStack::new();
        ids.push(WidgetId::from_raw(hash_str("Window A", 0)));
        let a = ids.id_of("OK");
        ids.pop();
        ids.push(WidgetId::from_raw(hash_str("Window B", 0)));
        let b = ids.id_of("OK");
        assert_ne!(a, b);
    }

    #[test]
    fn root_scope_uses_zero_seed() {
        let ids = IdStack::new();
        assert_eq!(ids.id_of("x").raw(), hash_str("x", 0));
    }

    #[test]
    #[should_panic(expected = "id stack underflow")]
    fn pop_empty_panics() {
        IdStack::new().pop();
    }
}
