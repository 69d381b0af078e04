//! hashnav - hash-fragment router for single-page sites.
//!
//! Maps URL hash fragments to visible page sections: one active section at a
//! time, nav link highlighting, per-route document titles, browser-style
//! history, and a mobile menu toggle. Route resolution is a pure function of
//! the route table and the requested fragment; a thin in-memory document
//! adapter applies the result, and the same operations serialize to JSON for
//! hosts that drive a real browser.
//!
//! # Example
//!
//! ```
//! use hashnav::{History, RouteTable, Router};
//!
//! let table = RouteTable::builder("home")
//!     .base_title("Physics 110: Introductory Mechanics")
//!     .route("home", "home-section")
//!     .titled_route(
//!         "lectures",
//!         "lectures-section",
//!         "Lectures - Physics 110: Introductory Mechanics",
//!     )
//!     .build()
//!     .unwrap();
//!
//! let dom = hashnav::dom::scan(
//!     r##"<body>
//!         <a class="nav-link" href="#home">Home</a>
//!         <a class="nav-link" href="#lectures">Lectures</a>
//!         <section id="home-section"></section>
//!         <section id="lectures-section"></section>
//!     </body>"##,
//! );
//! let history = History::start("https://physics110.example.edu/").unwrap();
//!
//! let mut router = Router::new(table, dom, history);
//! router.navigate_to("lectures");
//!
//! assert_eq!(router.current_route(), "lectures");
//! assert_eq!(router.dom().visible_sections(), vec!["lectures-section"]);
//! ```

pub mod config;
pub mod core;
pub mod dom;
pub mod history;
pub mod logger;
pub mod route;
pub mod router;
pub mod view;

pub use crate::core::HashFragment;
pub use config::{ConfigError, NavConfig, RouteConfig};
pub use dom::{NodeId, PageDom};
pub use history::History;
pub use route::{Route, RouteTable, RouteTableBuilder, RouteTableError};
pub use router::{Navigator, Router, UiEvent};
pub use view::{ViewOp, ViewPlan};
