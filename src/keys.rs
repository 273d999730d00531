//! Key rotation for values that carry several comma-separated keys.
//!
//! `BBM_OPENAI_API_KEY=sk-a,sk-b` spreads requests across both keys.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRing {
    keys: Vec<String>,
    next: usize,
}

impl KeyRing {
    /// Split a resolved value into keys.
    ///
    /// Entries are trimmed and blank entries dropped. Returns `None` if no key remains.
    ///
    /// ```
    /// use bbm_keys::keys::KeyRing;
    ///
    /// let mut ring = KeyRing::parse("sk-a, sk-b").unwrap();
    /// assert_eq!(ring.next_key(), "sk-a");
    /// assert_eq!(ring.next_key(), "sk-b");
    /// assert_eq!(ring.next_key(), "sk-a");
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        let keys: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect();
        if keys.is_empty() {
            return None;
        }
        Some(Self { keys, next: 0 })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false: `parse` never builds an empty ring.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The next key, round-robin from the first.
    pub fn next_key(&mut self) -> &str {
        let index = self.next;
        self.next = (self.next + 1) % self.keys.len();
        &self.keys[index]
    }
}
