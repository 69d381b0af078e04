//! Cloneable navigation handle.
//!
//! The original design reached the router through a well-known global; here
//! the handle is constructed once at application start and passed to
//! whatever needs navigation. The detached form covers the same "no active
//! instance" fallback: it assigns the hash directly to a history stack
//! without route validation or resolution.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::history::History;
use crate::router::Router;

/// Shared handle to the application's router
///
/// Cheap to clone; every navigation resolves to completion under one lock
/// acquisition.
#[derive(Clone)]
pub struct Navigator {
    inner: Arc<Inner>,
}

enum Inner {
    Router(Mutex<Router>),
    Detached(Mutex<History>),
}

impl Navigator {
    /// Wrap a constructed router.
    pub fn new(router: Router) -> Self {
        Self {
            inner: Arc::new(Inner::Router(Mutex::new(router))),
        }
    }

    /// Handle with no active router: navigation falls back to direct hash
    /// assignment on the history stack.
    pub fn detached(history: History) -> Self {
        Self {
            inner: Arc::new(Inner::Detached(Mutex::new(history))),
        }
    }

    /// Navigate to a route key.
    ///
    /// With an active router this is [`Router::navigate_to`], fallback
    /// included. Detached, the key goes into the hash verbatim - the
    /// browser-side anchor behavior the original fell back to.
    pub fn navigate_to(&self, key: &str) {
        match &*self.inner {
            Inner::Router(router) => router.lock().navigate_to(key),
            Inner::Detached(history) => history.lock().push_fragment(key),
        }
    }

    /// Current route key, when an active router is attached.
    pub fn current_route(&self) -> Option<String> {
        match &*self.inner {
            Inner::Router(router) => Some(router.lock().current_route().to_string()),
            Inner::Detached(_) => None,
        }
    }

    /// Decoded fragment of the current history entry.
    pub fn current_fragment(&self) -> crate::core::HashFragment {
        match &*self.inner {
            Inner::Router(router) => router.lock().history().current_fragment(),
            Inner::Detached(history) => history.lock().current_fragment(),
        }
    }

    /// Run a closure against the router, when one is attached.
    pub fn with_router<R>(&self, f: impl FnOnce(&mut Router) -> R) -> Option<R> {
        match &*self.inner {
            Inner::Router(router) => Some(f(&mut router.lock())),
            Inner::Detached(_) => None,
        }
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &*self.inner {
            Inner::Router(_) => f.write_str("Navigator(router)"),
            Inner::Detached(_) => f.write_str("Navigator(detached)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::PageDom;
    use crate::route::RouteTable;

    fn router() -> Router {
        let table = RouteTable::builder("home")
            .route("home", "home-section")
            .route("lectures", "lectures-section")
            .build()
            .unwrap();
        let mut dom = PageDom::new();
        dom.push_element("section", Some("home-section"), &[], None, None);
        dom.push_element("section", Some("lectures-section"), &[], None, None);
        let history = History::start("https://physics110.example.edu/").unwrap();
        Router::new(table, dom, history)
    }

    #[test]
    fn test_attached_delegates() {
        let nav = Navigator::new(router());
        nav.navigate_to("lectures");
        assert_eq!(nav.current_route().as_deref(), Some("lectures"));
        assert_eq!(nav.current_fragment(), "lectures");
    }

    #[test]
    fn test_attached_falls_back_on_unknown() {
        let nav = Navigator::new(router());
        nav.navigate_to("bogus");
        assert_eq!(nav.current_route().as_deref(), Some("home"));
    }

    #[test]
    fn test_detached_assigns_hash_verbatim() {
        let history = History::start("https://physics110.example.edu/").unwrap();
        let nav = Navigator::detached(history);
        // No validation without a router - the key lands in the hash as-is
        nav.navigate_to("bogus");
        assert_eq!(nav.current_route(), None);
        assert_eq!(nav.current_fragment(), "bogus");
    }

    #[test]
    fn test_clones_share_state() {
        let nav = Navigator::new(router());
        let other = nav.clone();
        other.navigate_to("lectures");
        assert_eq!(nav.current_route().as_deref(), Some("lectures"));
    }

    #[test]
    fn test_with_router() {
        let nav = Navigator::new(router());
        let exists = nav.with_router(|r| r.route_exists("lectures"));
        assert_eq!(exists, Some(true));

        let history = History::start("https://physics110.example.edu/").unwrap();
        let detached = Navigator::detached(history);
        assert_eq!(detached.with_router(|r| r.route_exists("lectures")), None);
    }
}
