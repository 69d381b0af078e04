//! View Operations
//!
//! Individual page update operations produced by route resolution. The JSON
//! form (tagged with `op`) is stable so a host can ship resolutions to a
//! real browser client over a side channel instead of applying them to the
//! in-memory document.

use serde::{Deserialize, Serialize};

// =============================================================================
// View Operation
// =============================================================================

/// A single desired-state operation for the page
///
/// All operations target elements by id or href, never by position, so the
/// order they apply in never drifts and every one of them is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ViewOp {
    /// Make a section visible (`section-active` on, `section-hidden` off)
    Show {
        /// Section element id
        section: String,
    },

    /// Hide a section (`section-hidden` on, `section-active` off)
    Hide {
        /// Section element id
        section: String,
    },

    /// Mark the nav link with this href as the active one
    Highlight {
        /// Anchor href, including the leading `#`
        href: String,
    },

    /// Clear the active mark from nav links with this href
    Dim {
        /// Anchor href, including the leading `#`
        href: String,
    },

    /// Set the document title
    Title {
        /// New title text
        text: String,
    },

    /// Smooth-scroll the viewport to the top
    Scroll,

    /// Hide the mobile menu (no-op when already hidden or absent)
    CloseMenu,
}

// =============================================================================
// Constructors
// =============================================================================

impl ViewOp {
    /// Create a show-section operation
    pub fn show(section: impl Into<String>) -> Self {
        Self::Show {
            section: section.into(),
        }
    }

    /// Create a hide-section operation
    pub fn hide(section: impl Into<String>) -> Self {
        Self::Hide {
            section: section.into(),
        }
    }

    /// Create a highlight-nav-link operation
    pub fn highlight(href: impl Into<String>) -> Self {
        Self::Highlight { href: href.into() }
    }

    /// Create a dim-nav-link operation
    pub fn dim(href: impl Into<String>) -> Self {
        Self::Dim { href: href.into() }
    }

    /// Create a set-title operation
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title { text: text.into() }
    }
}
