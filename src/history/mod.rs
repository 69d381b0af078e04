//! Browser-style history stack.
//!
//! Models the only persistence the system has: a stack of URL entries with a
//! cursor. Pushing while the cursor sits mid-stack truncates the forward
//! tail, exactly like `history.pushState`. Moving the cursor does not
//! resolve anything by itself - the router treats a moved cursor as a
//! popstate signal and re-resolves.

use url::Url;

use crate::core::HashFragment;

/// History stack with a cursor into it. Never empty.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Url>,
    index: usize,
}

impl History {
    /// Start a session at the given URL.
    pub fn new(initial: Url) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Start a session from a URL string (convenience for hosts and tests).
    pub fn start(initial: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(initial)?))
    }

    /// Push a new entry, truncating any forward tail.
    pub fn push(&mut self, url: Url) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index += 1;
    }

    /// Push a new entry for the current URL with its fragment set to the
    /// given route key (percent-encoded at the boundary). This is
    /// `history.pushState` with `#key` - no reload implied.
    pub fn push_fragment(&mut self, key: &str) {
        let mut url = self.current().clone();
        url.set_fragment(Some(&HashFragment::from_key(key).to_encoded()));
        self.push(url);
    }

    /// Move the cursor one entry back. Returns whether it moved.
    pub fn back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor one entry forward. Returns whether it moved.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// The entry the cursor points at.
    pub fn current(&self) -> &Url {
        &self.entries[self.index]
    }

    /// Decoded fragment of the current entry (empty for a bare URL).
    pub fn current_fragment(&self) -> HashFragment {
        HashFragment::from_browser(self.current().fragment().unwrap_or(""))
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The stack always holds at least the initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> History {
        History::start("https://physics110.example.edu/").unwrap()
    }

    #[test]
    fn test_initial_state() {
        let mut history = history();
        assert_eq!(history.len(), 1);
        assert!(history.current_fragment().is_empty());
        assert!(!history.back());
    }

    #[test]
    fn test_push_fragment() {
        let mut history = history();
        history.push_fragment("lectures");
        assert_eq!(history.current_fragment(), "lectures");
        assert_eq!(history.current().fragment(), Some("lectures"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = history();
        history.push_fragment("lectures");
        history.push_fragment("homework");

        assert!(history.back());
        assert_eq!(history.current_fragment(), "lectures");
        assert!(history.forward());
        assert_eq!(history.current_fragment(), "homework");
        assert!(!history.forward());
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let mut history = history();
        assert!(!history.back());
        assert!(history.current_fragment().is_empty());
    }

    #[test]
    fn test_push_truncates_forward_tail() {
        let mut history = history();
        history.push_fragment("lectures");
        history.push_fragment("homework");
        history.back();
        history.push_fragment("quizzes");

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_fragment(), "quizzes");
        assert!(!history.forward());
    }

    #[test]
    fn test_fragment_encoding_at_boundary() {
        let mut history = history();
        history.push_fragment("week 3");
        // Encoded in the URL, decoded when read back
        assert_eq!(history.current().fragment(), Some("week%203"));
        assert_eq!(history.current_fragment(), "week 3");
    }
}
