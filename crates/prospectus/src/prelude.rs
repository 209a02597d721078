//! Prelude module for Prospectus.
//!
//! ```ignore
//! use prospectus::prelude::*;
//! ```

pub use crate::carousel::{Carousel, CarouselState, DragOutcome, Slide};
pub use crate::config::{CarouselConfig, ScrollSpyConfig, SectionConfig, SiteConfig};
pub use crate::navigation::{NavEntryView, NavItem, NavLink, NavigationMenu};
pub use crate::page::{Page, PageEvent, PageSnapshot};
pub use crate::scroll_spy::{ScrollSpy, Section};
pub use crate::{Error, Result};

pub use prospectus_core::{Signal, TimerId, TimerManager};
