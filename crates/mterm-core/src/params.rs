//! Numeric parameters collected while parsing a control sequence.
//!
//! Items are appended by the parser as digits and `;` separators arrive, then
//! read back by the terminal either by index (cursor motions, erase modes) or
//! by consuming them front to back (SGR, mode lists).

use smallvec::SmallVec;

/// Upper bound on collected items. Separators past this are dropped.
pub const MAX_PARAMS: usize = 32;

/// Ordered parameter list with a read cursor for front-to-back consumption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    items: SmallVec<[u16; 16]>,
    consumed: usize,
}

impl Params {
    /// Create an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from literal values (mostly useful in tests).
    #[must_use]
    pub fn from_slice(values: &[u16]) -> Self {
        let mut params = Self::new();
        for &v in values.iter().take(MAX_PARAMS) {
            params.add_item(v);
        }
        params
    }

    /// Append an item. Ignored once [`MAX_PARAMS`] items are held.
    pub fn add_item(&mut self, value: u16) {
        if self.items.len() < MAX_PARAMS {
            self.items.push(value);
        }
    }

    /// Replace the most recently added item, or add one if the list is empty.
    pub fn alter_item(&mut self, value: u16) {
        match self.items.last_mut() {
            Some(last) => *last = value,
            None => self.items.push(value),
        }
    }

    /// Item at `index`, or `default` when fewer items were collected.
    #[must_use]
    pub fn item(&self, index: usize, default: u16) -> u16 {
        self.items.get(index).copied().unwrap_or(default)
    }

    /// Like [`item`](Self::item), but an explicit `0` reads as `1`.
    ///
    /// ANSI movement counts treat zero as one.
    #[must_use]
    pub fn item_default_one_if_zero(&self, index: usize, default: u16) -> u16 {
        match self.items.get(index) {
            None => default,
            Some(0) => 1,
            Some(&v) => v,
        }
    }

    /// Pop the first unconsumed item.
    pub fn consume_item(&mut self) -> Option<u16> {
        let value = self.items.get(self.consumed).copied()?;
        self.consumed += 1;
        Some(value)
    }

    /// Items not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &[u16] {
        &self.items[self.consumed.min(self.items.len())..]
    }

    /// Consume `count` items at once (saturating at the end of the list).
    pub fn skip(&mut self, count: usize) {
        self.consumed = (self.consumed + count).min(self.items.len());
    }

    /// Clear all items and the read cursor.
    pub fn reset(&mut self) {
        self.items.clear();
        self.consumed = 0;
    }

    /// Number of collected items, consumed or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the list is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_PARAMS
    }

    /// Last collected item.
    #[must_use]
    pub fn last(&self) -> Option<u16> {
        self.items.last().copied()
    }

    /// All collected items in order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.items.iter().copied()
    }

    /// All collected items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u16] {
        &self.items
    }
}
