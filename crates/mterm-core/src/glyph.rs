//! Screen cell value and the hyperlink registry cells point into.

use std::collections::HashMap;

use crate::format::Format;

/// Hyperlink identifier stored in a glyph. Zero means "no link".
pub type HyperlinkId = u16;

/// One screen cell: a rune, its format and an optional hyperlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub rune: char,
    pub format: Format,
    pub hyperlink: HyperlinkId,
}

impl Default for Glyph {
    fn default() -> Self {
        Self::blank(Format::default())
    }
}

impl Glyph {
    #[must_use]
    pub fn new(rune: char, format: Format) -> Self {
        Self {
            rune,
            format,
            hyperlink: 0,
        }
    }

    /// An erased cell carrying `format` (so erased areas keep the background).
    #[must_use]
    pub fn blank(format: Format) -> Self {
        Self::new(' ', format)
    }

    #[must_use]
    pub fn with_hyperlink(mut self, id: HyperlinkId) -> Self {
        self.hyperlink = id;
        self
    }

    /// Whether this is a space with no link.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rune == ' ' && self.hyperlink == 0
    }
}

/// Interns OSC 8 URIs so glyphs only carry a small id.
///
/// Released ids go on a free list and are handed out again before the
/// registry grows. The owner decides which ids are still referenced, see
/// [`retain`](Self::retain).
#[derive(Debug, Clone)]
pub struct HyperlinkRegistry {
    /// Index 0 is reserved for "no link"; `None` marks a free slot.
    slots: Vec<Option<String>>,
    lookup: HashMap<String, HyperlinkId>,
    free_list: Vec<HyperlinkId>,
    limit: usize,
}

impl Default for HyperlinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HyperlinkRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(usize::from(HyperlinkId::MAX))
    }

    /// A registry handing out at most `limit` live ids (capped at the id space).
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            slots: vec![None],
            lookup: HashMap::new(),
            free_list: Vec::new(),
            limit: limit.min(usize::from(HyperlinkId::MAX)),
        }
    }

    /// Id for `uri`, allocating one if needed.
    ///
    /// Empty URIs and an exhausted id space both return 0.
    pub fn intern(&mut self, uri: &str) -> HyperlinkId {
        if uri.is_empty() {
            return 0;
        }
        if let Some(&id) = self.lookup.get(uri) {
            return id;
        }
        let id = if let Some(id) = self.free_list.pop() {
            id
        } else if self.slots.len() <= self.limit
            && let Ok(id) = HyperlinkId::try_from(self.slots.len())
        {
            self.slots.push(None);
            id
        } else {
            tracing::debug!(uri, live = self.lookup.len(), "hyperlink registry full");
            return 0;
        };
        self.slots[usize::from(id)] = Some(uri.to_string());
        self.lookup.insert(uri.to_string(), id);
        id
    }

    /// URI for a non-zero id.
    #[must_use]
    pub fn get(&self, id: HyperlinkId) -> Option<&str> {
        self.slots.get(usize::from(id))?.as_deref()
    }

    /// Free `id` for reuse. Zero and unknown ids are ignored.
    pub fn release(&mut self, id: HyperlinkId) {
        let Some(slot) = self.slots.get_mut(usize::from(id)) else {
            return;
        };
        if let Some(uri) = slot.take() {
            self.lookup.remove(&uri);
            self.free_list.push(id);
        }
    }

    /// Release every live id for which `live` returns false.
    ///
    /// Returns how many ids were freed.
    pub fn retain(&mut self, mut live: impl FnMut(HyperlinkId) -> bool) -> usize {
        let mut released = 0;
        for idx in 1..self.slots.len() {
            let Ok(id) = HyperlinkId::try_from(idx) else {
                break;
            };
            if self.slots[idx].is_some() && !live(id) {
                self.release(id);
                released += 1;
            }
        }
        released
    }

    /// Number of registered URIs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
