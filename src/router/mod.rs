//! The router - hash navigation to visible-section updates.
//!
//! Owns the route table, the page model, the history stack, and the
//! current-route scalar. Every trigger (history change, delegated click,
//! menu button) is handled synchronously to completion; resolution itself is
//! pure ([`crate::view::resolve`]) and the router only applies the result.

mod navigator;

pub use navigator::Navigator;

use crate::core::HashFragment;
use crate::dom::{NodeId, PageDom};
use crate::history::History;
use crate::log;
use crate::route::RouteTable;
use crate::view::{self, ViewOp};

// ============================================================================
// Events
// ============================================================================

/// Browser-level signals the host forwards to the router
///
/// Clicks arrive document-wide and undelegated; the router filters them by
/// the closest ancestor hash anchor, so dynamically added links keep
/// working without per-element listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The history cursor moved (popstate)
    HistoryChanged,
    /// A click landed on this element
    Click { target: NodeId },
    /// The mobile menu button was pressed
    MenuButton,
}

// ============================================================================
// Router
// ============================================================================

/// Hash-fragment router over an in-memory page
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    dom: PageDom,
    history: History,
    current: String,
}

impl Router {
    /// Construct the router and resolve whatever route the initial URL
    /// encodes, so deep links and reloads land on the right section.
    pub fn new(table: RouteTable, dom: PageDom, history: History) -> Self {
        let current = table.fallback().to_string();
        let mut router = Self {
            table,
            dom,
            history,
            current,
        };
        router.resolve_current_route();
        router
    }

    /// Navigate to a route key.
    ///
    /// Known keys push a new history entry (no reload), re-resolve, and
    /// close the mobile menu. Unknown keys log a warning and degrade to the
    /// fallback route; the table guarantees the fallback exists, and the
    /// guard below keeps even a broken invariant from recursing.
    pub fn navigate_to(&mut self, key: &str) {
        if self.table.contains(key) {
            self.history.push_fragment(key);
            self.resolve_current_route();
            self.close_mobile_menu();
        } else {
            log!("router"; "route not found: {key}");
            let fallback = self.table.fallback().to_string();
            if key != fallback && self.table.contains(&fallback) {
                self.navigate_to(&fallback);
            }
        }
    }

    /// Re-resolve from the current history entry and apply the result:
    /// one active section, siblings hidden, nav link highlighted, title set,
    /// viewport scrolled to top.
    pub fn resolve_current_route(&mut self) {
        let fragment = self.history.current_fragment();
        let plan = view::resolve(&self.table, &fragment);
        if plan.fell_back {
            log!("router"; "route not found: {fragment}, showing `{}`", plan.route);
        }

        let sections = self.dom.section_ids();
        let nav_hrefs = self.dom.nav_hrefs();
        let ops = plan.ops(&sections, &nav_hrefs);
        self.dom.apply_all(&ops);
        self.current = plan.route;
    }

    /// Handle a forwarded browser signal. Returns `true` when the event was
    /// consumed (the host should suppress the default action).
    pub fn handle_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::HistoryChanged => {
                self.resolve_current_route();
                true
            }
            UiEvent::Click { target } => {
                let Some(href) = self.dom.closest_hash_anchor(target) else {
                    return false;
                };
                let key = HashFragment::from_browser(href).as_str().to_string();
                self.navigate_to(&key);
                true
            }
            UiEvent::MenuButton => {
                self.toggle_mobile_menu();
                true
            }
        }
    }

    /// Show or hide the mobile menu. No-op when the page has none.
    pub fn toggle_mobile_menu(&mut self) {
        self.dom.toggle_menu();
    }

    /// Hide the mobile menu. Idempotent; no-op when hidden or absent.
    pub fn close_mobile_menu(&mut self) {
        self.dom.apply(&ViewOp::CloseMenu);
    }

    /// Move the history cursor back and re-resolve (the host-side analogue
    /// of the browser back button firing popstate).
    pub fn back(&mut self) -> bool {
        if self.history.back() {
            self.resolve_current_route();
            true
        } else {
            false
        }
    }

    /// Move the history cursor forward and re-resolve.
    pub fn forward(&mut self) -> bool {
        if self.history.forward() {
            self.resolve_current_route();
            true
        } else {
            false
        }
    }

    /// The current route key.
    pub fn current_route(&self) -> &str {
        &self.current
    }

    /// Whether a key is a valid navigation target.
    pub fn route_exists(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// The route table navigation resolves against.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The page model (sections, nav links, menu, title).
    pub fn dom(&self) -> &PageDom {
        &self.dom
    }

    /// The history stack.
    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MENU_HIDDEN, MOBILE_MENU_ID, SECTION_ACTIVE, SECTION_HIDDEN};

    fn table() -> RouteTable {
        RouteTable::builder("home")
            .base_title("Physics 110: Introductory Mechanics")
            .route("home", "home-section")
            .titled_route(
                "lectures",
                "lectures-section",
                "Lectures - Physics 110: Introductory Mechanics",
            )
            .build()
            .unwrap()
    }

    fn page() -> PageDom {
        let mut dom = PageDom::new();
        let nav = dom.push_element("nav", None, &[], None, None);
        dom.push_element("a", None, &["nav-link"], Some("#home"), Some(nav));
        dom.push_element("a", None, &["nav-link"], Some("#lectures"), Some(nav));
        dom.push_element("section", Some("home-section"), &[], None, None);
        dom.push_element("section", Some("lectures-section"), &[], None, None);
        dom.push_element("div", Some(MOBILE_MENU_ID), &[MENU_HIDDEN], None, None);
        dom
    }

    fn router() -> Router {
        let history = History::start("https://physics110.example.edu/").unwrap();
        Router::new(table(), page(), history)
    }

    fn router_at(url: &str) -> Router {
        Router::new(table(), page(), History::start(url).unwrap())
    }

    #[test]
    fn test_initial_resolution_uses_fallback() {
        let router = router();
        assert_eq!(router.current_route(), "home");
        assert!(router.dom().has_class("home-section", SECTION_ACTIVE));
        assert!(router.dom().has_class("lectures-section", SECTION_HIDDEN));
    }

    #[test]
    fn test_deep_link_resolves_on_construction() {
        let router = router_at("https://physics110.example.edu/#lectures");
        assert_eq!(router.current_route(), "lectures");
        assert!(router.dom().has_class("lectures-section", SECTION_ACTIVE));
        assert_eq!(
            router.dom().title(),
            "Lectures - Physics 110: Introductory Mechanics"
        );
    }

    #[test]
    fn test_navigate_known_route() {
        let mut router = router();
        router.navigate_to("lectures");

        assert_eq!(router.current_route(), "lectures");
        assert!(router.dom().has_class("lectures-section", SECTION_ACTIVE));
        assert!(router.dom().has_class("home-section", SECTION_HIDDEN));
        assert_eq!(router.history().current_fragment(), "lectures");
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn test_navigate_unknown_ends_at_fallback() {
        let mut router = router();
        router.navigate_to("bogus");

        assert_eq!(router.current_route(), "home");
        assert!(router.dom().has_class("home-section", SECTION_ACTIVE));
        // The bogus key never reached the history stack
        assert_eq!(router.history().current_fragment(), "home");
    }

    #[test]
    fn test_navigation_is_idempotent() {
        let mut router = router();
        router.navigate_to("lectures");
        let title_before = router.dom().title().to_string();
        router.navigate_to("lectures");

        assert_eq!(router.current_route(), "lectures");
        assert!(router.dom().has_class("lectures-section", SECTION_ACTIVE));
        assert!(!router.dom().has_class("lectures-section", SECTION_HIDDEN));
        assert_eq!(router.dom().title(), title_before);
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut router = router();
        router.toggle_mobile_menu();
        assert!(router.dom().menu_visible());

        router.navigate_to("lectures");
        assert!(!router.dom().menu_visible());
    }

    #[test]
    fn test_popstate_resolution() {
        let mut router = router();
        router.navigate_to("lectures");
        assert!(router.back());

        assert_eq!(router.current_route(), "home");
        assert!(router.dom().has_class("home-section", SECTION_ACTIVE));

        assert!(router.forward());
        assert_eq!(router.current_route(), "lectures");
    }

    #[test]
    fn test_click_delegation_on_hash_anchor() {
        let mut router = router();
        let target = router.dom().anchor_by_href("#lectures").unwrap();

        assert!(router.handle_event(UiEvent::Click { target }));
        assert_eq!(router.current_route(), "lectures");
        assert_eq!(router.dom().visible_sections(), vec!["lectures-section"]);
    }

    #[test]
    fn test_click_on_plain_element_not_consumed() {
        let mut router = router();
        let nav = router.dom().element_by_id("home-section").unwrap();
        assert!(!router.handle_event(UiEvent::Click { target: nav }));
        assert_eq!(router.current_route(), "home");
    }

    #[test]
    fn test_menu_button_event_toggles() {
        let mut router = router();
        assert!(router.handle_event(UiEvent::MenuButton));
        assert!(router.dom().menu_visible());
        assert!(router.handle_event(UiEvent::MenuButton));
        assert!(!router.dom().menu_visible());
    }

    #[test]
    fn test_nav_highlight_moves() {
        let mut router = router();
        router.navigate_to("lectures");
        assert_eq!(router.dom().active_nav_hrefs(), vec!["#lectures"]);

        router.navigate_to("home");
        assert_eq!(router.dom().active_nav_hrefs(), vec!["#home"]);
    }

    #[test]
    fn test_exactly_one_visible_section_per_route() {
        let mut router = router();
        for key in ["home", "lectures", "home"] {
            router.navigate_to(key);
            assert_eq!(router.dom().visible_sections().len(), 1);
        }
    }

    #[test]
    fn test_scroll_happens_per_resolution() {
        let mut router = router();
        let initial = router.dom().scroll_count();
        router.navigate_to("lectures");
        assert_eq!(router.dom().scroll_count(), initial + 1);
    }
}
