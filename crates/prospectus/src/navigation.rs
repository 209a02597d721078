//! Navigation menu model.
//!
//! This module provides [`NavigationMenu`], the two-level header menu. It has
//! two interaction modes sharing one static item tree:
//!
//! - **Desktop**: hovering an item reveals its submenu. Visibility is derived
//!   from pointer focus; no open state is stored.
//! - **Compact**: the menu drawer opens and closes explicitly, and tapping an
//!   item expands its submenu accordion-style, so at most one item is expanded.
//!
//! Highlighting comes from the scroll-spy: an item is active when its target
//! section equals the active section. Items sharing a target are active
//! together.

use prospectus_core::Signal;
use prospectus_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Strip the leading `#` from an in-page anchor.
fn anchor_target(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// A submenu link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display text.
    pub label: String,
    /// In-page anchor, e.g. `#academics`.
    pub href: String,
}

impl NavLink {
    /// Create a submenu link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// The section id this link scrolls to.
    pub fn target_section(&self) -> &str {
        anchor_target(&self.href)
    }
}

/// A top-level navigation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display text.
    pub label: String,
    /// In-page anchor. Items without one never highlight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Submenu links in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<NavLink>,
}

impl NavItem {
    /// Create an item without a submenu.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            submenu: Vec::new(),
        }
    }

    /// Add a submenu link (builder pattern).
    pub fn with_link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.submenu.push(NavLink::new(label, href));
        self
    }

    /// The section id this item scrolls to, if any.
    pub fn target_section(&self) -> Option<&str> {
        self.href.as_deref().map(anchor_target)
    }

    /// Check whether this item has a submenu.
    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

/// A navigation item annotated for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntryView {
    /// Display text.
    pub label: String,
    /// Anchor the item links to.
    pub href: Option<String>,
    /// The item's target is the active section.
    pub active: bool,
    /// Desktop: the pointer is over the item and it has a submenu.
    pub submenu_visible: bool,
    /// Compact: the item is the expanded accordion entry.
    pub expanded: bool,
    /// Submenu links.
    pub submenu: Vec<NavLink>,
}

/// Header navigation state.
///
/// # Signals
///
/// - `expanded_changed(Option<usize>)`: Emitted when the expanded compact item changes
/// - `mobile_open_changed(bool)`: Emitted when the compact drawer opens or closes
pub struct NavigationMenu {
    items: Vec<NavItem>,
    /// Item under the pointer (desktop).
    hovered: Option<usize>,
    /// Expanded accordion item (compact).
    expanded: Option<usize>,
    mobile_open: bool,

    /// Signal emitted when the expanded item changes.
    pub expanded_changed: Signal<Option<usize>>,
    /// Signal emitted when the compact drawer opens or closes.
    pub mobile_open_changed: Signal<bool>,
}

impl NavigationMenu {
    /// Create a menu over a static item tree.
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            hovered: None,
            expanded: None,
            mobile_open: false,
            expanded_changed: Signal::new(),
            mobile_open_changed: Signal::new(),
        }
    }

    /// Get the item tree.
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    // =========================================================================
    // Highlighting
    // =========================================================================

    /// Check whether the item at `index` targets `active_section`.
    pub fn is_item_active(&self, index: usize, active_section: &str) -> bool {
        self.items
            .get(index)
            .and_then(NavItem::target_section)
            .is_some_and(|target| target == active_section)
    }

    /// Indices of every item targeting `active_section`.
    pub fn active_indices(&self, active_section: &str) -> Vec<usize> {
        (0..self.items.len())
            .filter(|&index| self.is_item_active(index, active_section))
            .collect()
    }

    // =========================================================================
    // Desktop Hover
    // =========================================================================

    /// The pointer moved onto the item at `index`.
    pub fn pointer_entered(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.hovered = Some(index);
        Ok(())
    }

    /// The pointer left the item at `index`.
    ///
    /// Ignored if another item has taken the hover since.
    pub fn pointer_left(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    /// Get the item under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Check whether the desktop submenu of the item at `index` is visible.
    pub fn is_submenu_visible(&self, index: usize) -> bool {
        self.hovered == Some(index) && self.items.get(index).is_some_and(NavItem::has_submenu)
    }

    // =========================================================================
    // Compact Accordion
    // =========================================================================

    /// Toggle the compact submenu of the item at `index`.
    ///
    /// Expanding an item collapses whichever item was expanded before.
    /// Returns the expanded item afterwards.
    pub fn toggle_expanded(&mut self, index: usize) -> Result<Option<usize>> {
        self.check_index(index)?;
        let next = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        self.set_expanded(next);
        Ok(next)
    }

    /// Collapse any expanded item.
    pub fn collapse(&mut self) {
        self.set_expanded(None);
    }

    fn set_expanded(&mut self, expanded: Option<usize>) {
        if self.expanded == expanded {
            return;
        }
        tracing::debug!(target: targets::NAVIGATION, ?expanded, "accordion changed");
        self.expanded = expanded;
        self.expanded_changed.emit(expanded);
    }

    /// Get the expanded item.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Check whether the item at `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Check whether the compact drawer is open.
    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    /// Open or close the compact drawer.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.set_mobile_open(!self.mobile_open);
        self.mobile_open
    }

    /// Close the compact drawer.
    pub fn close_mobile_menu(&mut self) {
        self.set_mobile_open(false);
    }

    fn set_mobile_open(&mut self, open: bool) {
        if self.mobile_open == open {
            return;
        }
        tracing::debug!(target: targets::NAVIGATION, open, "mobile menu toggled");
        self.mobile_open = open;
        self.mobile_open_changed.emit(open);
    }

    /// Follow submenu link `link` of item `item`.
    ///
    /// Closes the compact drawer and returns the target section id.
    pub fn follow_link(&mut self, item: usize, link: usize) -> Result<String> {
        self.check_index(item)?;
        let submenu = &self.items[item].submenu;
        let target = submenu
            .get(link)
            .map(|l| l.target_section().to_string())
            .ok_or(Error::OutOfRange {
                index: link,
                len: submenu.len(),
            })?;
        self.close_mobile_menu();
        Ok(target)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Annotate every item for rendering against `active_section`.
    pub fn view(&self, active_section: &str) -> Vec<NavEntryView> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| NavEntryView {
                label: item.label.clone(),
                href: item.href.clone(),
                active: self.is_item_active(index, active_section),
                submenu_visible: self.is_submenu_visible(index),
                expanded: self.is_expanded(index),
                submenu: item.submenu.clone(),
            })
            .collect()
    }
}

impl std::fmt::Debug for NavigationMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationMenu")
            .field("items", &self.items.len())
            .field("hovered", &self.hovered)
            .field("expanded", &self.expanded)
            .field("mobile_open", &self.mobile_open)
            .finish()
    }
}
