//! Scroll-driven active section tracking.
//!
//! [`ScrollSpy`] maps a continuous scroll offset to exactly one declared section
//! id, which the navigation header uses for highlighting.
//!
//! A section is a candidate once the scroll offset reaches its top minus the
//! activation offset. Sections are scanned in document order and the last
//! candidate wins, so the active section is the lowest one whose start has been
//! passed. When nothing qualifies, the first declared section is active.

use prospectus_core::Signal;
use prospectus_core::logging::targets;

use crate::error::{Error, Result};

/// A tracked page section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: String,
    /// Top offset from the document origin; `None` until laid out.
    top: Option<f32>,
}

impl Section {
    /// Create a section that has not been laid out yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            top: None,
        }
    }

    /// Create a section with a known top offset.
    pub fn with_top(id: impl Into<String>, top: f32) -> Self {
        Self {
            id: id.into(),
            top: Some(top),
        }
    }

    /// The section identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The measured top offset, if any.
    pub fn top(&self) -> Option<f32> {
        self.top
    }
}

/// Select the active section index for a scroll offset.
///
/// Sections without a measured top are skipped. Returns `0` when no section
/// qualifies.
pub fn select_active(sections: &[Section], scroll_offset: f32, activation_offset: f32) -> usize {
    sections
        .iter()
        .enumerate()
        .rev()
        .find(|(_, section)| {
            section
                .top
                .is_some_and(|top| scroll_offset >= top - activation_offset)
        })
        .map_or(0, |(index, _)| index)
}

/// Tracks which section the reader is looking at.
///
/// # Signals
///
/// - `active_changed(String)`: Emitted when the active section id changes
pub struct ScrollSpy {
    sections: Vec<Section>,
    activation_offset: f32,
    scroll_offset: f32,
    active: usize,

    /// Signal emitted when the active section changes.
    pub active_changed: Signal<String>,
}

impl ScrollSpy {
    /// Create a scroll-spy over `sections` in document order.
    ///
    /// The first section is active until the reader scrolls.
    pub fn new(sections: Vec<Section>, activation_offset: f32) -> Result<Self> {
        if sections.is_empty() {
            return Err(Error::NoSections);
        }
        let mut spy = Self {
            sections,
            activation_offset,
            scroll_offset: 0.0,
            active: 0,
            active_changed: Signal::new(),
        };
        spy.active = spy.evaluate();
        Ok(spy)
    }

    /// Get the tracked sections.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Get the id of the active section.
    pub fn active_section(&self) -> &str {
        &self.sections[self.active].id
    }

    /// Get the index of the active section.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Get the last observed scroll offset.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Check whether `id` names a tracked section.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    fn evaluate(&self) -> usize {
        select_active(&self.sections, self.scroll_offset, self.activation_offset)
    }

    fn set_active(&mut self, index: usize) {
        if index == self.active {
            return;
        }
        self.active = index;
        let id = self.sections[index].id.clone();
        tracing::debug!(target: targets::SCROLL_SPY, section = %id, "active section changed");
        self.active_changed.emit(id);
    }

    /// Record where a section starts after layout or resize.
    ///
    /// Does not re-evaluate; call [`refresh`](Self::refresh) once layout settles.
    pub fn set_section_top(&mut self, id: &str, top: f32) -> Result<()> {
        let index = self
            .position(id)
            .ok_or_else(|| Error::UnknownSection(id.to_string()))?;
        self.sections[index].top = Some(top);
        tracing::trace!(target: targets::SCROLL_SPY, section = id, top, "section laid out");
        Ok(())
    }

    /// Handle a scroll event and return the active section id.
    pub fn on_scroll(&mut self, scroll_offset: f32) -> &str {
        self.scroll_offset = scroll_offset;
        self.refresh()
    }

    /// Re-evaluate against the last scroll offset.
    pub fn refresh(&mut self) -> &str {
        let index = self.evaluate();
        self.set_active(index);
        self.active_section()
    }

    /// Mark a section active directly.
    ///
    /// An unknown id falls back to the first declared section.
    pub fn activate(&mut self, id: &str) -> &str {
        let index = match self.position(id) {
            Some(index) => index,
            None => {
                tracing::warn!(
                    target: targets::SCROLL_SPY,
                    section = id,
                    "unknown section, falling back to first"
                );
                0
            }
        };
        self.set_active(index);
        self.active_section()
    }
}

impl std::fmt::Debug for ScrollSpy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSpy")
            .field("sections", &self.sections)
            .field("activation_offset", &self.activation_offset)
            .field("scroll_offset", &self.scroll_offset)
            .field("active", &self.active_section())
            .finish()
    }
}
