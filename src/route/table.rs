//! Immutable route table with a designated fallback key.
//!
//! The table is the only source of valid navigation targets. It is built
//! once, validated at construction, and never mutated afterwards. Validation
//! guarantees the fallback key is present, which is what makes the runtime
//! "always recover to the fallback" policy sound.

use rustc_hash::FxHashMap;
use thiserror::Error;

// ============================================================================
// RouteTableError
// ============================================================================

/// Errors detected when building a route table
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route table is empty")]
    Empty,

    #[error("fallback route `{0}` is not in the table")]
    MissingFallback(String),

    #[error("duplicate route key `{0}`")]
    DuplicateKey(String),

    #[error("route `{0}` has an empty section id")]
    EmptySection(String),
}

// ============================================================================
// Route
// ============================================================================

/// A single route entry: target section plus optional page title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Identifier of the section element this route shows
    pub section: String,
    /// Configured page title; `None` falls back to the table's base title
    pub title: Option<String>,
}

// ============================================================================
// RouteTable
// ============================================================================

/// Fixed route-key -> section mapping, immutable after construction
///
/// Keys iterate in insertion order (nav display order). Lookups go through
/// a hash map.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: FxHashMap<String, Route>,
    order: Vec<String>,
    fallback: String,
    /// Cached copy of the fallback's entry so resolution never needs a
    /// fallible second lookup
    fallback_route: Route,
    base_title: String,
}

impl RouteTable {
    /// Start building a table with the given fallback key.
    pub fn builder(fallback: impl Into<String>) -> RouteTableBuilder {
        RouteTableBuilder {
            routes: FxHashMap::default(),
            order: Vec::new(),
            fallback: fallback.into(),
            base_title: String::new(),
        }
    }

    /// Check whether a key is a valid navigation target.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.routes.contains_key(key)
    }

    /// Section id for a key, if the key is in the table.
    pub fn section_for(&self, key: &str) -> Option<&str> {
        self.routes.get(key).map(|r| r.section.as_str())
    }

    /// Page title for a key: configured title, or the base title for
    /// untitled and unknown keys.
    pub fn title_for(&self, key: &str) -> &str {
        self.routes
            .get(key)
            .and_then(|r| r.title.as_deref())
            .unwrap_or(&self.base_title)
    }

    /// Resolve a requested key to a table entry, degrading to the fallback
    /// for unknown keys. Total by construction: the fallback entry is cached.
    pub fn resolve(&self, requested: &str) -> (&str, &Route) {
        match self.routes.get_key_value(requested) {
            Some((key, route)) => (key.as_str(), route),
            None => (self.fallback.as_str(), &self.fallback_route),
        }
    }

    /// The designated fallback key.
    #[inline]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// The base page title (used when a route has no configured title).
    #[inline]
    pub fn base_title(&self) -> &str {
        &self.base_title
    }

    /// Route keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// A validated table is never empty, but the accessor keeps clippy and
    /// callers honest.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ============================================================================
// RouteTableBuilder
// ============================================================================

/// Builder for [`RouteTable`] with construction-time validation
pub struct RouteTableBuilder {
    routes: FxHashMap<String, Route>,
    order: Vec<String>,
    fallback: String,
    base_title: String,
}

impl RouteTableBuilder {
    /// Set the base page title.
    pub fn base_title(mut self, title: impl Into<String>) -> Self {
        self.base_title = title.into();
        self
    }

    /// Add a route without a configured title.
    pub fn route(self, key: impl Into<String>, section: impl Into<String>) -> Self {
        self.push(key.into(), section.into(), None)
    }

    /// Add a route with a configured page title.
    pub fn titled_route(
        self,
        key: impl Into<String>,
        section: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.push(key.into(), section.into(), Some(title.into()))
    }

    fn push(mut self, key: String, section: String, title: Option<String>) -> Self {
        // Duplicates are caught in build() so the builder chain stays infallible
        self.order.push(key.clone());
        self.routes.insert(key, Route { section, title });
        self
    }

    /// Validate and build the table.
    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        if self.order.is_empty() {
            return Err(RouteTableError::Empty);
        }
        if self.order.len() != self.routes.len() {
            // Find the first key that appears twice in insertion order
            let mut seen = FxHashMap::default();
            for key in &self.order {
                if seen.insert(key.clone(), ()).is_some() {
                    return Err(RouteTableError::DuplicateKey(key.clone()));
                }
            }
        }
        for key in &self.order {
            if self.routes[key].section.is_empty() {
                return Err(RouteTableError::EmptySection(key.clone()));
            }
        }
        let Some(fallback_route) = self.routes.get(&self.fallback).cloned() else {
            return Err(RouteTableError::MissingFallback(self.fallback));
        };
        Ok(RouteTable {
            routes: self.routes,
            order: self.order,
            fallback: self.fallback,
            fallback_route,
            base_title: self.base_title,
        })
    }
}
