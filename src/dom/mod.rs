//! In-memory page document.
//!
//! `PageDom` is the thin adapter between pure route resolution and an actual
//! page: a flat node arena with parent links carrying only what navigation
//! cares about (tag, id, class list, anchor href). It answers the router's
//! queries (sections, nav links, menu, closest ancestor anchor for click
//! delegation) and applies [`ViewOp`]s with missing-element tolerance.
//!
//! Build one by hand with [`PageDom::push_element`] or from markup with
//! [`scan`].

mod scan;

pub use scan::scan;

use smallvec::SmallVec;

use crate::view::ViewOp;

/// Presentation class for the visible section
pub const SECTION_ACTIVE: &str = "section-active";
/// Presentation class for hidden sections
pub const SECTION_HIDDEN: &str = "section-hidden";
/// Active-state class for the current nav link
pub const NAV_ACTIVE: &str = "active";
/// Hidden-state class for the mobile menu
pub const MENU_HIDDEN: &str = "hidden";

/// Class marking highlightable navigation links
pub const NAV_LINK_CLASS: &str = "nav-link";
/// Id suffix identifying route target sections
pub const SECTION_SUFFIX: &str = "-section";
/// Id of the optional mobile menu element
pub const MOBILE_MENU_ID: &str = "mobile-menu";
/// Id of the optional mobile menu toggle button
pub const MOBILE_MENU_BUTTON_ID: &str = "mobile-menu-button";

// ============================================================================
// Nodes
// ============================================================================

/// Handle to a node in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: SmallVec<[String; 4]>,
    href: Option<String>,
    parent: Option<NodeId>,
}

// ============================================================================
// PageDom
// ============================================================================

/// Flat document model owned exclusively by the router
#[derive(Debug, Clone, Default)]
pub struct PageDom {
    nodes: Vec<Node>,
    title: String,
    /// Number of scroll-to-top requests applied (observable effect)
    scrolls: usize,
}

impl PageDom {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the arena.
    pub fn push_element(
        &mut self,
        tag: impl Into<String>,
        id: Option<&str>,
        classes: &[&str],
        href: Option<&str>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let node = Node {
            tag: tag.into(),
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            href: href.map(str::to_string),
            parent,
        };
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// First element with the given id.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(NodeId)
    }

    /// Ids of all route target sections (`*-section` naming convention),
    /// in document order.
    pub fn section_ids(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter_map(|n| n.id.as_deref())
            .filter(|id| id.ends_with(SECTION_SUFFIX))
            .map(str::to_string)
            .collect()
    }

    /// Hrefs of all highlightable nav links (`.nav-link` with an href),
    /// in document order.
    pub fn nav_hrefs(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|n| n.classes.iter().any(|c| c == NAV_LINK_CLASS))
            .filter_map(|n| n.href.clone())
            .collect()
    }

    /// Closest ancestor-or-self anchor carrying an in-page hash href.
    ///
    /// This is the delegation filter for a single document-wide click
    /// listener: it survives dynamically added links and ignores everything
    /// that is not an in-page hash anchor.
    pub fn closest_hash_anchor(&self, target: NodeId) -> Option<&str> {
        let mut cursor = Some(target);
        while let Some(NodeId(index)) = cursor {
            let node = self.nodes.get(index)?;
            if node.tag == "a"
                && let Some(href) = node.href.as_deref()
                && href.starts_with('#')
            {
                return Some(href);
            }
            cursor = node.parent;
        }
        None
    }

    /// First anchor whose href matches exactly.
    pub fn anchor_by_href(&self, href: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.tag == "a" && n.href.as_deref() == Some(href))
            .map(NodeId)
    }

    /// Ids of sections currently carrying the active class, in document
    /// order. The navigation invariant is that this has exactly one entry
    /// after any completed resolution (or zero if the target element is
    /// absent).
    pub fn visible_sections(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.classes.iter().any(|c| c == SECTION_ACTIVE))
            .filter_map(|n| n.id.as_deref())
            .filter(|id| id.ends_with(SECTION_SUFFIX))
            .collect()
    }

    /// Hrefs of nav links currently marked active.
    pub fn active_nav_hrefs(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.tag == "a" && n.classes.iter().any(|c| c == NAV_ACTIVE))
            .filter_map(|n| n.href.as_deref())
            .collect()
    }

    /// Whether the element with this id carries the class. `false` when the
    /// element is absent.
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.element_by_id(id)
            .map(|NodeId(index)| self.nodes[index].classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Current document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// How many scroll-to-top requests have been applied.
    pub fn scroll_count(&self) -> usize {
        self.scrolls
    }

    // ------------------------------------------------------------------------
    // Class mutation
    // ------------------------------------------------------------------------

    fn add_class(&mut self, NodeId(index): NodeId, class: &str) {
        let node = &mut self.nodes[index];
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, NodeId(index): NodeId, class: &str) {
        self.nodes[index].classes.retain(|c| c != class);
    }

    fn toggle_class(&mut self, id: NodeId, class: &str) {
        let NodeId(index) = id;
        if self.nodes[index].classes.iter().any(|c| c == class) {
            self.remove_class(id, class);
        } else {
            self.add_class(id, class);
        }
    }

    /// Toggle the mobile menu's hidden class. No-op when the page has no
    /// menu element.
    pub fn toggle_menu(&mut self) {
        if let Some(menu) = self.element_by_id(MOBILE_MENU_ID) {
            self.toggle_class(menu, MENU_HIDDEN);
        }
    }

    /// Whether the mobile menu is currently visible.
    pub fn menu_visible(&self) -> bool {
        self.element_by_id(MOBILE_MENU_ID).is_some() && !self.has_class(MOBILE_MENU_ID, MENU_HIDDEN)
    }

    // ------------------------------------------------------------------------
    // Applying view operations
    // ------------------------------------------------------------------------

    /// Apply one operation. Operations against elements the page does not
    /// have are silent no-ops, never errors.
    pub fn apply(&mut self, op: &ViewOp) {
        match op {
            ViewOp::Show { section } => {
                if let Some(node) = self.element_by_id(section) {
                    self.remove_class(node, SECTION_HIDDEN);
                    self.add_class(node, SECTION_ACTIVE);
                }
            }
            ViewOp::Hide { section } => {
                if let Some(node) = self.element_by_id(section) {
                    self.remove_class(node, SECTION_ACTIVE);
                    self.add_class(node, SECTION_HIDDEN);
                }
            }
            ViewOp::Highlight { href } => {
                if let Some(node) = self.anchor_by_href(href) {
                    self.add_class(node, NAV_ACTIVE);
                }
            }
            ViewOp::Dim { href } => {
                if let Some(node) = self.anchor_by_href(href) {
                    self.remove_class(node, NAV_ACTIVE);
                }
            }
            ViewOp::Title { text } => {
                self.title = text.clone();
            }
            ViewOp::Scroll => {
                self.scrolls += 1;
            }
            ViewOp::CloseMenu => {
                if let Some(menu) = self.element_by_id(MOBILE_MENU_ID)
                    && self.menu_visible()
                {
                    self.add_class(menu, MENU_HIDDEN);
                }
            }
        }
    }

    /// Apply a whole resolution in order.
    pub fn apply_all(&mut self, ops: &[ViewOp]) {
        for op in ops {
            self.apply(op);
        }
    }
}
