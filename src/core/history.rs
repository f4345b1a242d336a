//! Browser-style navigation history over address fragments

/// Strip the leading `#` of an address fragment
#[must_use]
pub fn normalize_fragment(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

/// Linear history of fragments with a cursor, like a browser tab's session history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl NavigationHistory {
    /// Start a history at the given fragment (`""` for none, `#` optional)
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![normalize_fragment(initial).to_string()],
            cursor: 0,
        }
    }

    /// Fragment of the current entry, without `#`; empty when the address has none
    #[must_use]
    pub fn current_fragment(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Navigate to a fragment, discarding any forward entries.
    ///
    /// Setting the fragment it already has does not create an entry. Returns
    /// `true` when an entry was added.
    pub fn push(&mut self, fragment: &str) -> bool {
        let fragment = normalize_fragment(fragment);
        if fragment == self.current_fragment() {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor += 1;
        true
    }

    /// Step back one entry and return the fragment landed on
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current_fragment())
    }

    /// Step forward one entry and return the fragment landed on
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current_fragment())
    }

    /// Number of entries in the session
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history has no entries; never the case after [`new`](Self::new)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new("")
    }
}
