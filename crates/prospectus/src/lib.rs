//! Interactive core of the Daffodil International College site.
//!
//! The page is static markup except for three pieces of behavior, each
//! modelled here as plain state driven by UI events:
//!
//! - **Carousel**: the auto-advancing hero slideshow with arrows, dots,
//!   drag-to-swipe and pause-on-hover
//! - **Scroll-Spy**: maps the scroll offset to the active page section
//! - **Navigation**: the header menu with hover submenus on desktop and a
//!   single-open accordion on compact layouts
//!
//! [`Page`](page::Page) owns all three, routes [`PageEvent`](page::PageEvent)s
//! to them and produces a [`PageSnapshot`](page::PageSnapshot) for rendering.
//! Content comes from an explicit [`SiteConfig`](config::SiteConfig).
//!
//! # Example
//!
//! ```
//! use prospectus::prelude::*;
//! use std::time::Instant;
//!
//! let now = Instant::now();
//! let mut page = Page::new(SiteConfig::default())?;
//! page.start(now);
//!
//! page.dispatch(PageEvent::MobileMenuToggled, now)?;
//! page.dispatch(PageEvent::NavToggled(2), now)?;
//! page.dispatch(PageEvent::NavLinkFollowed { item: 2, link: 0 }, now)?;
//!
//! let snapshot = page.snapshot();
//! assert!(!snapshot.mobile_menu_open);
//! assert!(snapshot.navigation[2].expanded);
//! # Ok::<(), prospectus::Error>(())
//! ```

pub mod carousel;
pub mod config;
mod error;
pub mod navigation;
pub mod page;
pub mod prelude;
pub mod scroll_spy;

pub use error::{Error, Result};
