//! Page composition and event dispatch.
//!
//! [`Page`] is the single owner of all interactive state. The host rendering
//! layer feeds it raw UI events through [`Page::dispatch`], drives its timers
//! through [`Page::tick`], and reads a [`PageSnapshot`] for each render.
//!
//! # Example
//!
//! ```
//! use prospectus::config::SiteConfig;
//! use prospectus::page::{Page, PageEvent};
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut page = Page::new(SiteConfig::default()).unwrap();
//! page.start(start);
//!
//! page.dispatch(PageEvent::SectionLaidOut { id: "about".into(), top: 900.0 }, start).unwrap();
//! page.dispatch(PageEvent::Scroll { offset: 850.0 }, start).unwrap();
//! assert_eq!(page.snapshot().active_section, "about");
//!
//! page.tick(start + Duration::from_secs(7));
//! assert_eq!(page.snapshot().slide_index, 1);
//! ```

use std::time::{Duration, Instant};

use prospectus_core::TimerManager;
use prospectus_core::logging::targets;
use serde::Serialize;

use crate::carousel::{Carousel, Slide};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::navigation::{NavEntryView, NavigationMenu};
use crate::scroll_spy::ScrollSpy;

/// A raw UI event routed to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The document scrolled to `offset`.
    Scroll {
        /// Scroll offset from the document origin.
        offset: f32,
    },
    /// Layout placed section `id` at `top`.
    SectionLaidOut {
        /// Section id.
        id: String,
        /// Top offset from the document origin.
        top: f32,
    },
    /// The pointer moved over the hero carousel.
    HeroPointerEntered,
    /// The pointer left the hero carousel.
    HeroPointerLeft,
    /// A horizontal drag on the hero ended.
    HeroDragReleased {
        /// Horizontal distance moved; negative is leftwards.
        delta_x: f32,
    },
    /// The next-slide arrow was pressed.
    NextSlide,
    /// The previous-slide arrow was pressed.
    PreviousSlide,
    /// A slide indicator dot was pressed.
    GoToSlide(usize),
    /// The pointer moved onto a desktop navigation item.
    NavPointerEntered(usize),
    /// The pointer left a desktop navigation item.
    NavPointerLeft(usize),
    /// A compact navigation item was tapped.
    NavToggled(usize),
    /// The compact menu button was tapped.
    MobileMenuToggled,
    /// A submenu link was followed.
    NavLinkFollowed {
        /// Top-level item index.
        item: usize,
        /// Submenu link index.
        link: usize,
    },
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    /// The slide on display, if there are any slides.
    pub slide: Option<Slide>,
    /// Index of the slide on display.
    pub slide_index: usize,
    /// Number of slides.
    pub slide_count: usize,
    /// Whether auto-advance is suspended.
    pub carousel_paused: bool,
    /// The section the reader is looking at.
    pub active_section: String,
    /// The navigation tree annotated with active, hover and expanded flags.
    pub navigation: Vec<NavEntryView>,
    /// Whether the compact navigation drawer is open.
    pub mobile_menu_open: bool,
}

/// The interactive page.
pub struct Page {
    config: SiteConfig,
    timers: TimerManager,
    carousel: Carousel,
    scroll_spy: ScrollSpy,
    navigation: NavigationMenu,
}

impl Page {
    /// Build a page from a validated copy of `config`.
    pub fn new(config: SiteConfig) -> Result<Self> {
        config.validate()?;
        let carousel = Carousel::new(config.slides.clone(), &config.carousel);
        let scroll_spy =
            ScrollSpy::new(config.scroll_sections(), config.scroll_spy.activation_offset)?;
        let navigation = NavigationMenu::new(config.navigation.clone());

        Ok(Self {
            config,
            timers: TimerManager::new(),
            carousel,
            scroll_spy,
            navigation,
        })
    }

    /// Get the configuration the page was built from.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Get the hero carousel.
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Get the scroll-spy.
    pub fn scroll_spy(&self) -> &ScrollSpy {
        &self.scroll_spy
    }

    /// Get the navigation menu.
    pub fn navigation(&self) -> &NavigationMenu {
        &self.navigation
    }

    /// Start autonomous behavior (the carousel timer).
    pub fn start(&mut self, now: Instant) {
        tracing::debug!(target: targets::PAGE, "page started");
        self.carousel.start(&mut self.timers, now);
    }

    /// Disarm every timer. No state changes after this without new events.
    pub fn teardown(&mut self) {
        tracing::debug!(target: targets::PAGE, "page torn down");
        self.carousel.stop(&mut self.timers);
        self.timers.clear();
    }

    /// How long the host loop may sleep before the next [`tick`](Self::tick).
    pub fn time_until_next_tick(&mut self, now: Instant) -> Option<Duration> {
        self.timers.time_until_next(now)
    }

    /// Fire every timer due at `now`.
    ///
    /// Returns the number of timers that fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let fired = self.timers.process_expired(now);
        for &id in &fired {
            if !self.carousel.handle_timer(id) {
                tracing::trace!(target: targets::PAGE, ?id, "timer without owner");
            }
        }
        fired.len()
    }

    /// Route a UI event to the component that owns it.
    ///
    /// A rejected event (an out-of-range index or unknown section) leaves the
    /// page unchanged.
    pub fn dispatch(&mut self, event: PageEvent, now: Instant) -> Result<()> {
        tracing::trace!(target: targets::PAGE, ?event, "dispatch");
        match event {
            PageEvent::Scroll { offset } => {
                self.scroll_spy.on_scroll(offset);
            }
            PageEvent::SectionLaidOut { id, top } => {
                self.scroll_spy.set_section_top(&id, top)?;
                self.scroll_spy.refresh();
            }
            PageEvent::HeroPointerEntered => self.carousel.pointer_entered(&mut self.timers),
            PageEvent::HeroPointerLeft => self.carousel.pointer_left(&mut self.timers, now),
            PageEvent::HeroDragReleased { delta_x } => {
                self.carousel.on_drag_release(delta_x);
            }
            PageEvent::NextSlide => self.carousel.advance(),
            PageEvent::PreviousSlide => self.carousel.retreat(),
            PageEvent::GoToSlide(index) => self.carousel.jump_to(index)?,
            PageEvent::NavPointerEntered(index) => self.navigation.pointer_entered(index)?,
            PageEvent::NavPointerLeft(index) => self.navigation.pointer_left(index),
            PageEvent::NavToggled(index) => {
                self.navigation.toggle_expanded(index)?;
            }
            PageEvent::MobileMenuToggled => {
                self.navigation.toggle_mobile_menu();
            }
            PageEvent::NavLinkFollowed { item, link } => {
                let target = self.navigation.follow_link(item, link)?;
                tracing::debug!(target: targets::PAGE, section = %target, "navigating");
            }
        }
        Ok(())
    }

    /// Capture the render state.
    pub fn snapshot(&self) -> PageSnapshot {
        let active_section = self.scroll_spy.active_section().to_string();
        PageSnapshot {
            slide: self.carousel.current_slide().cloned(),
            slide_index: self.carousel.current_index(),
            slide_count: self.carousel.slide_count(),
            carousel_paused: self.carousel.is_paused(),
            navigation: self.navigation.view(&active_section),
            active_section,
            mobile_menu_open: self.navigation.is_mobile_open(),
        }
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("carousel", &self.carousel)
            .field("scroll_spy", &self.scroll_spy)
            .field("navigation", &self.navigation)
            .finish()
    }
}
