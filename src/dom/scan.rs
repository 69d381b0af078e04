//! Build a [`PageDom`] from page markup.
//!
//! Scanning keeps only what navigation cares about: element tags, ids, class
//! lists, anchor hrefs, parent links, and the `<title>` text. Everything
//! else in the markup is ignored.

use super::{NodeId, PageDom};

/// Scan an HTML document into a page model.
///
/// Markup the parser rejects yields an empty document; navigation against an
/// empty document degrades to no-ops, matching the missing-element policy.
pub fn scan(html: &str) -> PageDom {
    let mut page = PageDom::new();

    let Ok(dom) = tl::parse(html, tl::ParserOptions::default()) else {
        crate::debug!("scan"; "markup rejected by parser, page model is empty");
        return page;
    };

    let parser = dom.parser();
    for handle in dom.children() {
        walk(&mut page, *handle, parser, None);
    }

    crate::debug!("scan"; "{} elements, {} sections, {} nav links",
        page.len(), page.section_ids().len(), page.nav_hrefs().len());
    page
}

/// Record one element and recurse into its children.
fn walk(page: &mut PageDom, handle: tl::NodeHandle, parser: &tl::Parser, parent: Option<NodeId>) {
    let Some(node) = handle.get(parser) else {
        return;
    };
    let tl::Node::Tag(tag) = node else {
        // Text and comments carry nothing navigation needs
        return;
    };

    let name = tag.name().as_utf8_str().to_lowercase();

    let mut id = None;
    let mut classes: Vec<String> = Vec::new();
    let mut href = None;
    for (key, value) in tag.attributes().iter() {
        let value = value.map(|v| v.to_string()).unwrap_or_default();
        match key.as_ref() {
            "id" => id = Some(value),
            "class" => classes = value.split_whitespace().map(str::to_string).collect(),
            "href" => href = Some(value),
            _ => {}
        }
    }

    if name == "title" {
        page.set_title(tag.inner_text(parser).trim());
    }

    let class_refs: Vec<&str> = classes.iter().map(String::as_str).collect();
    let node_id = page.push_element(name.as_str(), id.as_deref(), &class_refs, href.as_deref(), parent);

    for child_handle in tag.children().top().iter() {
        walk(page, *child_handle, parser, Some(node_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MENU_HIDDEN, MOBILE_MENU_ID, SECTION_ACTIVE, SECTION_HIDDEN};

    const PAGE: &str = r##"
        <html>
        <head><title>Physics 110: Introductory Mechanics</title></head>
        <body>
            <nav>
                <a href="#home" class="nav-link active">Home</a>
                <a href="#lectures" class="nav-link">Lectures</a>
                <a href="https://example.com" class="nav-link">External</a>
            </nav>
            <button id="mobile-menu-button">menu</button>
            <div id="mobile-menu" class="hidden">
                <a href="#lectures" class="nav-link">Lectures</a>
            </div>
            <section id="home-section" class="section-active">welcome</section>
            <section id="lectures-section" class="section-hidden">
                <span><a href="#home"><i>back home</i></a></span>
            </section>
        </body>
        </html>
    "##;

    #[test]
    fn test_scan_discovers_sections() {
        let dom = scan(PAGE);
        assert_eq!(dom.section_ids(), vec!["home-section", "lectures-section"]);
        assert!(dom.has_class("home-section", SECTION_ACTIVE));
        assert!(dom.has_class("lectures-section", SECTION_HIDDEN));
    }

    #[test]
    fn test_scan_discovers_nav_links() {
        let dom = scan(PAGE);
        // Every .nav-link with an href, including the external one and the
        // duplicate inside the mobile menu
        assert_eq!(
            dom.nav_hrefs(),
            vec!["#home", "#lectures", "https://example.com", "#lectures"]
        );
    }

    #[test]
    fn test_scan_discovers_menu() {
        let dom = scan(PAGE);
        assert!(dom.element_by_id(MOBILE_MENU_ID).is_some());
        assert!(dom.has_class(MOBILE_MENU_ID, MENU_HIDDEN));
        assert!(!dom.menu_visible());
    }

    #[test]
    fn test_scan_reads_title() {
        let dom = scan(PAGE);
        assert_eq!(dom.title(), "Physics 110: Introductory Mechanics");
    }

    #[test]
    fn test_scanned_ancestors_support_delegation() {
        let dom = scan(PAGE);
        // The <i> inside the nested anchor delegates up to href="#home"
        let delegated = (0..dom.len())
            .map(NodeId)
            .filter(|id| dom.closest_hash_anchor(*id) == Some("#home"))
            .count();
        // both #home anchors plus the <i> inside the nested one
        assert_eq!(delegated, 3);
    }

    #[test]
    fn test_scan_empty_input() {
        let dom = scan("");
        assert!(dom.is_empty());
        assert!(dom.section_ids().is_empty());
    }
}
