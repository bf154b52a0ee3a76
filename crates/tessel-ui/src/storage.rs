//! Keyed storage: a sorted association list from a 32-bit key to a small
//! tagged value.
//!
//! Lookup is a binary search; insertion happens at the lower-bound position so
//! the list stays sorted. Entries are never removed. Widget identity is small
//! and stable over a session, so the list stays short.

/// Tagged value held by [`Storage`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageValue {
    Int(i32),
    Float(f32),
    Bool(bool),
    /// Index into a context-owned arena (e.g. the window list).
    Index(usize),
}

#[derive(Debug, Default, Clone)]
pub struct Storage {
    entries: Vec<(u32, StorageValue)>,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `key`, or where it would be inserted.
    #[inline]
    fn lower_bound(&self, key: u32) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&key, |&(k, _)| k)
    }

    /// Raw value for `key`, if present.
    pub fn get(&self, key: u32) -> Option<StorageValue> {
        self.lower_bound(key).ok().map(|i| self.entries[i].1)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: u32, value: StorageValue) {
        match self.lower_bound(key) {
            Ok(i) => self.entries[i].1 = value,
            Err(i) => self.entries.insert(i, (key, value)),
        }
    }

    /// Mutable slot for `key`, inserting `default` on a miss.
    pub fn get_or_insert(&mut self, key: u32, default: StorageValue) -> &mut StorageValue {
        let i = match self.lower_bound(key) {
            Ok(i) => i,
            Err(i) => {
                self.entries.insert(i, (key, default));
                i
            }
        };
        &mut self.entries[i].1
    }

    // ── typed accessors ───────────────────────────────────────────────────

    pub fn int(&self, key: u32, default: i32) -> i32 {
        match self.get(key) {
            Some(StorageValue::Int(v)) => v,
            _ => default,
        }
    }

    pub fn float(&self, key: u32, default: f32) -> f32 {
        match self.get(key) {
            Some(StorageValue::Float(v)) => v,
            _ => default,
        }
    }

    pub fn bool(&self, key: u32, default: bool) -> bool {
        match self.get(key) {
            Some(StorageValue::Bool(v)) => v,
            _ => default,
        }
    }

    pub fn index(&self, key: u32) -> Option<usize> {
        match self.get(key) {
            Some(StorageValue::Index(v)) => Some(v),
            _ => None,
        }
    }

    pub fn set_int(&mut self, key: u32, value: i32) {
        self.set(key, StorageValue::Int(value));
    }

    pub fn set_float(&mut self, key: u32, value: f32) {
        self.set(key, StorageValue::Float(value));
    }

    pub fn set_bool(&mut self, key: u32, value: bool) {
        self.set(key, StorageValue::Bool(value));
    }

    pub fn set_index(&mut self, key: u32, value: usize) {
        self.set(key, StorageValue::Index(value));
    }

    /// Mutable int slot. A slot holding another variant is reset to `default`.
    pub fn int_mut(&mut self, key: u32, default: i32) -> &mut i32 {
        let slot = self.get_or_insert(key, StorageValue::Int(default));
        if !matches!(slot, StorageValue::Int(_)) {
            *slot = StorageValue::Int(default);
        }
        match slot {
            StorageValue::Int(v) => v,
            _ => unreachable!(),
        }
    }

    /// Mutable float slot. A slot holding another variant is reset to `default`.
    pub fn float_mut(&mut self, key: u32, default: f32) -> &mut f32 {
        let slot = self.get_or_insert(key, StorageValue::Float(default));
        if !matches!(slot, StorageValue::Float(_)) {
            *slot = StorageValue::Float(default);
        }
        match slot {
            StorageValue::Float(v) => v,
            _ => unreachable!(),
        }
    }

    /// Mutable bool slot. A slot holding another variant is reset to `default`.
    pub fn bool_mut(&mut self, key: u32, default: bool) -> &mut bool {
        let slot = self.get_or_insert(key, StorageValue::Bool(default));
        if !matches!(slot, StorageValue::Bool(_)) {
            *slot = StorageValue::Bool(default);
        }
        match slot {
            StorageValue::Bool(v) => v,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(s: &Storage) -> Vec<u32> {
        s.entries.iter().map(|&(k, _)| k).collect()
    }

    #[test]
    fn miss_yields_default() {
        let s = Storage::new();
        assert_eq!(s.int(42, -1), -1);
        assert_eq!(s.float(42, 0.5), 0.5);
        assert!(s.bool(42, true));
        assert_eq!(s.index(42), None);
    }

    #[test]
    fn inserts_keep_keys_sorted() {
        let mut s = Storage::new();
        for k in [50, 10, 30, 20, 40] {
            s.set_int(k, k as i32);
        }
        assert_eq!(keys(&s), vec![10, 20, 30, 40, 50]);
        assert_eq!(s.int(30, 0), 30);
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut s = Storage::new();
        s.set_float(7, 1.0);
        s.set_float(7, 2.0);
        assert_eq!(s.len(), 1);
        assert_eq!(s.float(7, 0.0), 2.0);
    }

    #[test]
    fn mut_slot_inserts_default_once() {
        let mut s = Storage::new();
        *s.bool_mut(9, false) = true;
        assert!(*s.bool_mut(9, false));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn typed_read_of_other_variant_yields_default() {
        let mut s = Storage::new();
        s.set_bool(3, true);
        assert_eq!(s.int(3, 11), 11);
        *s.int_mut(3, 5) += 1;
        assert_eq!(s.int(3, 0), 6);
    }
}
