//! Hero carousel engine.
//!
//! This module provides [`Carousel`], which cycles through a fixed ordered list
//! of [`Slide`]s automatically on a repeating timer and on user command.
//!
//! # Example
//!
//! ```
//! use prospectus::carousel::{Carousel, Slide};
//! use prospectus::config::CarouselConfig;
//! use prospectus_core::TimerManager;
//! use std::time::Instant;
//!
//! let slides = vec![
//!     Slide::new("/hero/a.jpg", "First", "Welcome"),
//!     Slide::new("/hero/b.jpg", "Second", "Explore"),
//! ];
//! let mut timers = TimerManager::new();
//! let mut carousel = Carousel::new(slides, &CarouselConfig::default());
//! carousel.start(&mut timers, Instant::now());
//!
//! carousel.advance();
//! assert_eq!(carousel.current_index(), 1);
//! carousel.advance();
//! assert_eq!(carousel.current_index(), 0);
//! ```

use std::time::{Duration, Instant};

use prospectus_core::logging::targets;
use prospectus_core::{Signal, TimerId, TimerManager};
use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use crate::error::{Error, Result};

/// One carousel entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Image reference handed to the rendering layer.
    pub image_source: String,
    /// Alternative text for the image.
    pub alt_text: String,
    /// Headline shown over the image.
    pub caption: String,
}

impl Slide {
    /// Create a slide.
    pub fn new(
        image_source: impl Into<String>,
        alt_text: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            image_source: image_source.into(),
            alt_text: alt_text.into(),
            caption: caption.into(),
        }
    }
}

/// The mutable part of the carousel, as seen by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    /// Index of the slide on display.
    pub current_index: usize,
    /// Whether automatic advancing is suspended.
    pub is_paused: bool,
}

/// What a drag release did to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dragged left past the threshold.
    Advanced,
    /// Dragged right past the threshold.
    Retreated,
    /// Within the threshold; the slide snaps back.
    SnappedBack,
}

/// Auto-advancing slide carousel.
///
/// The automatic cadence is independent of manual navigation: `advance`,
/// `retreat` and `jump_to` never re-arm the timer. Resuming after a pause
/// arms a fresh interval. An empty carousel, or one configured with a zero
/// interval, never arms a timer.
///
/// # Signals
///
/// - `current_changed(usize)`: Emitted when the displayed slide changes
/// - `paused_changed(bool)`: Emitted when the pause state changes
pub struct Carousel {
    slides: Vec<Slide>,
    current_index: usize,
    paused: bool,
    interval: Duration,
    drag_threshold: f32,
    pause_on_hover: bool,
    /// Set between `start` and `stop`.
    running: bool,
    timer: Option<TimerId>,

    /// Signal emitted when the current slide changes.
    pub current_changed: Signal<usize>,
    /// Signal emitted when the carousel is paused or resumed.
    pub paused_changed: Signal<bool>,
}

impl Carousel {
    /// Create a carousel over `slides`, showing the first slide.
    pub fn new(slides: Vec<Slide>, config: &CarouselConfig) -> Self {
        Self {
            slides,
            current_index: 0,
            paused: false,
            interval: config.interval(),
            drag_threshold: config.drag_threshold,
            pause_on_hover: config.pause_on_hover,
            running: false,
            timer: None,
            current_changed: Signal::new(),
            paused_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get all slides in display order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the index of the slide on display.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Get the slide on display, or `None` for an empty carousel.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current_index)
    }

    /// Check whether automatic advancing is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Check whether the auto-advance timer is armed.
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Get the auto-advance interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Snapshot the mutable state.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index,
            is_paused: self.paused,
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn set_current_index(&mut self, index: usize) {
        if index == self.current_index {
            return;
        }
        tracing::debug!(
            target: targets::CAROUSEL,
            from = self.current_index,
            to = index,
            "slide changed"
        );
        self.current_index = index;
        self.current_changed.emit(index);
    }

    /// Show the next slide, wrapping to the first after the last.
    pub fn advance(&mut self) {
        let count = self.slides.len();
        if count == 0 {
            return;
        }
        self.set_current_index((self.current_index + 1) % count);
    }

    /// Show the previous slide, wrapping to the last before the first.
    pub fn retreat(&mut self) {
        let count = self.slides.len();
        if count == 0 {
            return;
        }
        self.set_current_index((self.current_index + count - 1) % count);
    }

    /// Show the slide at `index`.
    ///
    /// Out-of-range indices are rejected and leave the carousel unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        let len = self.slides.len();
        if index >= len {
            tracing::debug!(target: targets::CAROUSEL, index, len, "jump rejected");
            return Err(Error::OutOfRange { index, len });
        }
        self.set_current_index(index);
        Ok(())
    }

    /// Apply a drag gesture released after moving `delta_x` horizontally.
    ///
    /// Dragging left beyond the threshold advances, dragging right beyond it
    /// retreats. Anything shorter snaps back.
    pub fn on_drag_release(&mut self, delta_x: f32) -> DragOutcome {
        if self.slides.is_empty() {
            return DragOutcome::SnappedBack;
        }
        if delta_x < -self.drag_threshold {
            self.advance();
            DragOutcome::Advanced
        } else if delta_x > self.drag_threshold {
            self.retreat();
            DragOutcome::Retreated
        } else {
            DragOutcome::SnappedBack
        }
    }

    // =========================================================================
    // Timer Control
    // =========================================================================

    /// Start automatic advancing.
    ///
    /// Arms the timer unless the carousel is paused or empty.
    pub fn start(&mut self, timers: &mut TimerManager, now: Instant) {
        self.running = true;
        self.arm(timers, now);
    }

    /// Stop automatic advancing and release the timer.
    pub fn stop(&mut self, timers: &mut TimerManager) {
        self.running = false;
        self.disarm(timers);
    }

    /// Suspend automatic advancing.
    pub fn pause(&mut self, timers: &mut TimerManager) {
        self.disarm(timers);
        if !self.paused {
            self.paused = true;
            tracing::debug!(target: targets::CAROUSEL, "carousel paused");
            self.paused_changed.emit(true);
        }
    }

    /// Resume automatic advancing with a fresh interval starting at `now`.
    pub fn resume(&mut self, timers: &mut TimerManager, now: Instant) {
        if self.paused {
            self.paused = false;
            tracing::debug!(target: targets::CAROUSEL, "carousel resumed");
            self.paused_changed.emit(false);
        }
        self.arm(timers, now);
    }

    /// The pointer moved over the carousel.
    pub fn pointer_entered(&mut self, timers: &mut TimerManager) {
        if self.pause_on_hover {
            self.pause(timers);
        }
    }

    /// The pointer left the carousel.
    pub fn pointer_left(&mut self, timers: &mut TimerManager, now: Instant) {
        if self.pause_on_hover {
            self.resume(timers, now);
        }
    }

    /// Handle a fired timer.
    ///
    /// Returns `true` if the timer belonged to this carousel and it advanced.
    pub fn handle_timer(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) || self.paused {
            return false;
        }
        tracing::trace!(target: targets::CAROUSEL, "auto-advance");
        self.advance();
        true
    }

    fn arm(&mut self, timers: &mut TimerManager, now: Instant) {
        if !self.running
            || self.paused
            || self.slides.is_empty()
            || self.interval.is_zero()
            || self.timer.is_some()
        {
            return;
        }
        self.timer = Some(timers.start_repeating(now, self.interval));
    }

    fn disarm(&mut self, timers: &mut TimerManager) {
        if let Some(id) = self.timer.take() {
            // The page may already have cleared every timer on teardown.
            let _ = timers.stop(id);
        }
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("slide_count", &self.slides.len())
            .field("current_index", &self.current_index)
            .field("paused", &self.paused)
            .field("armed", &self.timer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn slides(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide::new(format!("/hero/{i}.jpg"), format!("Slide {i}"), format!("S{i}")))
            .collect()
    }

    fn config() -> CarouselConfig {
        CarouselConfig {
            interval_ms: 5000,
            drag_threshold: 100.0,
            pause_on_hover: true,
        }
    }

    #[test]
    fn test_advance_wraps_around() {
        for count in 1..6 {
            let mut carousel = Carousel::new(slides(count), &config());
            carousel.jump_to(count / 2).unwrap();
            let start = carousel.current_index();
            for _ in 0..count {
                carousel.advance();
            }
            assert_eq!(carousel.current_index(), start);
        }
    }

    #[test]
    fn test_advance_retreat_symmetry() {
        let mut carousel = Carousel::new(slides(4), &config());
        for start in 0..4 {
            carousel.jump_to(start).unwrap();
            carousel.advance();
            carousel.retreat();
            assert_eq!(carousel.current_index(), start);
            carousel.retreat();
            carousel.advance();
            assert_eq!(carousel.current_index(), start);
        }
    }

    #[test]
    fn test_advance_advance_retreat() {
        let mut carousel = Carousel::new(slides(3), &config());
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.current_index(), 2);
        carousel.retreat();
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.current_slide().unwrap().caption, "S1");
    }

    #[test]
    fn test_retreat_from_first_wraps_to_last() {
        let mut carousel = Carousel::new(slides(4), &config());
        carousel.retreat();
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut carousel = Carousel::new(slides(3), &config());
        carousel.jump_to(1).unwrap();

        let err = carousel.jump_to(3).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_drag_threshold() {
        let mut carousel = Carousel::new(slides(3), &config());

        assert_eq!(carousel.on_drag_release(-150.0), DragOutcome::Advanced);
        assert_eq!(carousel.current_index(), 1);

        assert_eq!(carousel.on_drag_release(-50.0), DragOutcome::SnappedBack);
        assert_eq!(carousel.current_index(), 1);

        assert_eq!(carousel.on_drag_release(-100.0), DragOutcome::SnappedBack);
        assert_eq!(carousel.on_drag_release(100.0), DragOutcome::SnappedBack);

        assert_eq!(carousel.on_drag_release(150.0), DragOutcome::Retreated);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let mut carousel = Carousel::new(Vec::new(), &config());

        carousel.start(&mut timers, start);
        assert!(!carousel.is_armed());
        assert_eq!(timers.active_count(), 0);

        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.current_slide().is_none());
        assert!(carousel.jump_to(0).is_err());
        assert_eq!(carousel.on_drag_release(-500.0), DragOutcome::SnappedBack);
    }

    #[test]
    fn test_timer_advances_on_interval() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let mut carousel = Carousel::new(slides(3), &config());
        carousel.start(&mut timers, start);

        let fired = timers.process_expired(start + Duration::from_millis(4999));
        assert!(fired.is_empty());

        for id in timers.process_expired(start + Duration::from_secs(5)) {
            assert!(carousel.handle_timer(id));
        }
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_pause_blocks_auto_advance() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let mut carousel = Carousel::new(slides(3), &config());
        carousel.start(&mut timers, start);

        carousel.pause(&mut timers);
        assert!(carousel.is_paused());
        assert!(!carousel.is_armed());
        assert!(timers.process_expired(start + Duration::from_secs(3600)).is_empty());
        assert_eq!(carousel.current_index(), 0);

        let resumed_at = start + Duration::from_secs(3600);
        carousel.resume(&mut timers, resumed_at);
        assert!(timers.process_expired(resumed_at + Duration::from_secs(4)).is_empty());
        for id in timers.process_expired(resumed_at + Duration::from_secs(5)) {
            carousel.handle_timer(id);
        }
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_manual_navigation_does_not_reset_timer() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let mut carousel = Carousel::new(slides(4), &config());
        carousel.start(&mut timers, start);

        carousel.jump_to(2).unwrap();
        // The tick scheduled at start still lands at start + 5s.
        for id in timers.process_expired(start + Duration::from_secs(5)) {
            carousel.handle_timer(id);
        }
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn test_hover_pauses_only_when_enabled() {
        let start = Instant::now();
        let mut timers = TimerManager::new();

        let mut carousel = Carousel::new(slides(2), &config());
        carousel.start(&mut timers, start);
        carousel.pointer_entered(&mut timers);
        assert!(carousel.is_paused());
        carousel.pointer_left(&mut timers, start);
        assert!(!carousel.is_paused());
        assert!(carousel.is_armed());

        let mut no_hover = CarouselConfig::default();
        no_hover.pause_on_hover = false;
        let mut carousel = Carousel::new(slides(2), &no_hover);
        carousel.start(&mut timers, start);
        carousel.pointer_entered(&mut timers);
        assert!(!carousel.is_paused());
    }

    #[test]
    fn test_zero_interval_never_arms() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let zero = CarouselConfig {
            interval_ms: 0,
            ..config()
        };
        let mut carousel = Carousel::new(slides(2), &zero);

        carousel.start(&mut timers, start);
        carousel.pause(&mut timers);
        carousel.resume(&mut timers, start);
        assert!(!carousel.is_armed());
        assert_eq!(timers.active_count(), 0);
        assert!(timers.process_expired(start).is_empty());

        carousel.advance();
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_foreign_timer_ignored() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let other = timers.start_one_shot(start, Duration::from_secs(1));
        let mut carousel = Carousel::new(slides(2), &config());
        carousel.start(&mut timers, start);

        assert!(!carousel.handle_timer(other));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_stop_disarms() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let mut carousel = Carousel::new(slides(2), &config());
        carousel.start(&mut timers, start);
        assert_eq!(timers.active_count(), 1);

        carousel.stop(&mut timers);
        assert!(!carousel.is_armed());
        assert_eq!(timers.active_count(), 0);

        // Resuming a stopped carousel does not re-arm it.
        carousel.pause(&mut timers);
        carousel.resume(&mut timers, start);
        assert!(!carousel.is_armed());
    }

    #[test]
    fn test_signals() {
        let mut timers = TimerManager::new();
        let mut carousel = Carousel::new(slides(3), &config());
        let changes = Arc::new(AtomicUsize::new(0));
        let pauses = Arc::new(AtomicUsize::new(0));

        let changes_clone = changes.clone();
        carousel.current_changed.connect(move |_| {
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });
        let pauses_clone = pauses.clone();
        carousel.paused_changed.connect(move |_| {
            pauses_clone.fetch_add(1, Ordering::SeqCst);
        });

        carousel.advance();
        carousel.jump_to(1).unwrap();
        carousel.jump_to(0).unwrap();
        assert_eq!(changes.load(Ordering::SeqCst), 2);

        carousel.pause(&mut timers);
        carousel.pause(&mut timers);
        carousel.resume(&mut timers, Instant::now());
        assert_eq!(pauses.load(Ordering::SeqCst), 2);
    }
}
