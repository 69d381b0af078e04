//! Hash fragment type for type-safe route keys.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: Decode on input, encode on output

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded hash fragment (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Never carries the leading `#`
/// - Never carries a query string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashFragment(Arc<str>);

impl HashFragment {
    /// Create from a browser location hash (strip leading `#` and query
    /// string, decode percent-encoding).
    pub fn from_browser(raw: &str) -> Self {
        use percent_encoding::percent_decode_str;
        let raw = raw.strip_prefix('#').unwrap_or(raw);
        // Strip query string before decoding
        let fragment = raw.split('?').next().unwrap_or(raw);
        let decoded = percent_decode_str(fragment)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| fragment.to_string());
        Self(Arc::from(decoded.trim()))
    }

    /// Create from a trusted route key (already decoded).
    pub fn from_key(key: &str) -> Self {
        Self(Arc::from(key.trim()))
    }

    /// Get the decoded fragment as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the fragment is empty (bare URL, no hash).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode for browser (percent-encode non-ASCII and special characters).
    /// Does not include the leading `#`.
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
        utf8_percent_encode(&self.0, NON_ALPHANUMERIC).to_string()
    }
}

impl std::fmt::Display for HashFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for HashFragment {
    fn default() -> Self {
        Self(Arc::from(""))
    }
}

impl AsRef<str> for HashFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for HashFragment {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HashFragment {
    fn from(s: &str) -> Self {
        Self::from_browser(s)
    }
}

impl From<String> for HashFragment {
    fn from(s: String) -> Self {
        Self::from_browser(&s)
    }
}

impl PartialEq<str> for HashFragment {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for HashFragment {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for HashFragment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HashFragment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_browser(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_browser_strips_hash() {
        let fragment = HashFragment::from_browser("#lectures");
        assert_eq!(fragment.as_str(), "lectures");
    }

    #[test]
    fn test_from_browser_bare_key() {
        let fragment = HashFragment::from_browser("lectures");
        assert_eq!(fragment.as_str(), "lectures");
    }

    #[test]
    fn test_from_browser_empty() {
        assert!(HashFragment::from_browser("").is_empty());
        assert!(HashFragment::from_browser("#").is_empty());
    }

    #[test]
    fn test_from_browser_strips_query() {
        let fragment = HashFragment::from_browser("#lectures?week=3");
        assert_eq!(fragment.as_str(), "lectures");
    }

    #[test]
    fn test_from_browser_percent_decoded() {
        let fragment = HashFragment::from_browser("#%E4%B8%AD%E6%96%87");
        assert_eq!(fragment.as_str(), "中文");
    }

    #[test]
    fn test_from_browser_invalid_utf8_preserved() {
        let fragment = HashFragment::from_browser("#%FF");
        assert_eq!(fragment.as_str(), "%FF");
    }

    #[test]
    fn test_to_encoded() {
        let fragment = HashFragment::from_key("中文");
        assert_eq!(fragment.to_encoded(), "%E4%B8%AD%E6%96%87");
    }

    #[test]
    fn test_encoded_roundtrip() {
        let fragment = HashFragment::from_key("week 3");
        let back = HashFragment::from_browser(&fragment.to_encoded());
        assert_eq!(back, fragment);
    }

    #[test]
    fn test_equality_with_str() {
        let fragment = HashFragment::from_browser("#home");
        assert_eq!(fragment, "home");
        assert_ne!(fragment, "lectures");
    }

    #[test]
    fn test_serialize_deserialize() {
        let fragment = HashFragment::from_key("lectures");
        let json = serde_json::to_string(&fragment).unwrap();
        assert_eq!(json, r#""lectures""#);

        let parsed: HashFragment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fragment);
    }

    #[test]
    fn test_display() {
        let fragment = HashFragment::from_browser("#home");
        assert_eq!(format!("{}", fragment), "home");
    }
}
