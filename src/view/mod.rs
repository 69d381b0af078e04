//! Pure route resolution.
//!
//! `resolve()` is a pure function of (route table, requested fragment) that
//! returns a [`ViewPlan`] - a description of the desired page state. It never
//! touches a document; a thin adapter ([`crate::dom::PageDom::apply`])
//! applies the plan's operations to the real tree. This keeps the only
//! meaningfully testable logic free of environment dependencies.

mod op;

pub use op::ViewOp;

use serde::{Deserialize, Serialize};

use crate::core::HashFragment;
use crate::route::RouteTable;

// ============================================================================
// ViewPlan
// ============================================================================

/// Desired page state for one resolved route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPlan {
    /// Resolved route key (fallback already applied)
    pub route: String,
    /// Section id to make active
    pub section: String,
    /// Href of the nav link to highlight (`#<route>`)
    pub nav_href: String,
    /// Resolved document title
    pub title: String,
    /// Whether the requested fragment was unknown and the fallback took over
    pub fell_back: bool,
}

/// Resolve a requested fragment against the table.
///
/// An empty fragment means the bare URL and resolves to the fallback key
/// without counting as a failure; an unknown non-empty fragment degrades to
/// the fallback with `fell_back` set so the caller can log a diagnostic.
pub fn resolve(table: &RouteTable, requested: &HashFragment) -> ViewPlan {
    let wanted = if requested.is_empty() {
        table.fallback()
    } else {
        requested.as_str()
    };
    let fell_back = !table.contains(wanted);
    let (route, entry) = table.resolve(wanted);

    ViewPlan {
        route: route.to_string(),
        section: entry.section.clone(),
        nav_href: format!("#{route}"),
        title: entry
            .title
            .clone()
            .unwrap_or_else(|| table.base_title().to_string()),
        fell_back,
    }
}

impl ViewPlan {
    /// Expand the plan into operations against a concrete page: hide every
    /// sibling section, show the target, re-highlight the nav links, set the
    /// title, scroll to top.
    ///
    /// Sections and nav hrefs the page does not have simply produce no ops;
    /// ops targeting elements the page lost since scanning are tolerated at
    /// apply time.
    pub fn ops(&self, sections: &[String], nav_hrefs: &[String]) -> Vec<ViewOp> {
        let mut ops = Vec::with_capacity(sections.len() + nav_hrefs.len() + 3);
        for section in sections {
            if *section != self.section {
                ops.push(ViewOp::hide(section));
            }
        }
        ops.push(ViewOp::show(&self.section));
        for href in nav_hrefs {
            if *href != self.nav_href {
                ops.push(ViewOp::dim(href));
            }
        }
        ops.push(ViewOp::highlight(&self.nav_href));
        ops.push(ViewOp::title(&self.title));
        ops.push(ViewOp::Scroll);
        ops
    }
}
