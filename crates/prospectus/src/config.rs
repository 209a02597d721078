//! Site configuration.
//!
//! [`SiteConfig`] is the immutable description of the page: hero slides,
//! declared sections, the navigation tree and interaction tuning. The default
//! configuration is the built-in Daffodil International College site; a TOML
//! file may replace any part of it.
//!
//! # Loading
//!
//! ```ignore
//! use prospectus::config::SiteConfig;
//!
//! let config = SiteConfig::load("site.toml")?;
//! config.validate()?;
//! ```
//!
//! # File Format
//!
//! ```toml
//! [carousel]
//! interval_ms = 5000
//!
//! [[slides]]
//! image_source = "/hero/campus.jpg"
//! alt_text = "Campus"
//! caption = "Welcome"
//!
//! [[sections]]
//! id = "hero"
//!
//! [[navigation]]
//! label = "Notice Board"
//! href = "#news"
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use prospectus_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::carousel::Slide;
use crate::error::{Error, Result};
use crate::navigation::{NavItem, NavLink};
use crate::scroll_spy::Section;

/// Default auto-advance interval.
pub const DEFAULT_INTERVAL_MS: u64 = 7000;

/// Default horizontal drag distance that changes slides.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 100.0;

/// Default distance above a section's top at which it becomes active.
pub const DEFAULT_ACTIVATION_OFFSET: f32 = 100.0;

/// Hero carousel tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Milliseconds between automatic advances.
    pub interval_ms: u64,
    /// Drag distance beyond which a release changes slides.
    pub drag_threshold: f32,
    /// Pause while the pointer is over the carousel.
    pub pause_on_hover: bool,
}

impl CarouselConfig {
    /// The auto-advance interval.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            pause_on_hover: true,
        }
    }
}

/// Scroll-spy tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    /// A section activates this far before the scroll offset reaches its top.
    pub activation_offset: f32,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            activation_offset: DEFAULT_ACTIVATION_OFFSET,
        }
    }
}

/// A page section declared by the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Anchor id, e.g. `facilities`.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub label: String,
}

impl SectionConfig {
    /// Create a section declaration.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Complete page description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Hero carousel tuning.
    pub carousel: CarouselConfig,
    /// Scroll-spy tuning.
    pub scroll_spy: ScrollSpyConfig,
    /// Hero slides in display order.
    pub slides: Vec<Slide>,
    /// Page sections in document order.
    pub sections: Vec<SectionConfig>,
    /// Header navigation tree.
    pub navigation: Vec<NavItem>,
}

impl SiteConfig {
    /// Parse a config from TOML text.
    ///
    /// Omitted tables and fields keep their default values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading site config");
        Self::from_toml_str(&text)
    }

    /// Serialize this config as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the config for constraint violations.
    ///
    /// An empty slide list and navigation targets without a matching section
    /// are allowed but logged.
    pub fn validate(&self) -> Result<()> {
        if self.carousel.interval_ms == 0 {
            return Err(Error::invalid_config("carousel.interval_ms must be positive"));
        }
        let threshold = self.carousel.drag_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(Error::invalid_config(format!(
                "carousel.drag_threshold must be a non-negative number, got {threshold}"
            )));
        }
        if !self.scroll_spy.activation_offset.is_finite() {
            return Err(Error::invalid_config(
                "scroll_spy.activation_offset must be finite",
            ));
        }

        if self.sections.is_empty() {
            return Err(Error::NoSections);
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.is_empty() {
                return Err(Error::invalid_config("section ids must not be empty"));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(Error::invalid_config(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }

        if self.slides.is_empty() {
            tracing::warn!(target: targets::CONFIG, "no hero slides, carousel will stay inert");
        }

        for item in &self.navigation {
            let targets_iter = item
                .target_section()
                .into_iter()
                .chain(item.submenu.iter().map(NavLink::target_section));
            for target in targets_iter {
                if !seen.contains(target) {
                    tracing::warn!(
                        target: targets::CONFIG,
                        item = %item.label,
                        section = target,
                        "navigation target has no matching section"
                    );
                }
            }
        }

        Ok(())
    }

    /// Build the scroll-spy section list in document order.
    pub fn scroll_sections(&self) -> Vec<Section> {
        self.sections.iter().map(|s| Section::new(&s.id)).collect()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            scroll_spy: ScrollSpyConfig::default(),
            slides: default_slides(),
            sections: default_sections(),
            navigation: default_navigation(),
        }
    }
}

fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "/Hero Corusel/alumni&teachers.jpg",
            "Alumni and teachers at Daffodil International College",
            "Celebrating Alumni & Faculty",
        ),
        Slide::new(
            "/Hero Corusel/chairmanvisit.jpg",
            "Chairman visit at Daffodil International College",
            "Leadership & Vision",
        ),
        Slide::new(
            "/Hero Corusel/CSEAllSemester.jpg",
            "CSE All Semesters",
            "Empowering Tech Innovators",
        ),
        Slide::new(
            "/Hero Corusel/StudentsAchivments.jpg",
            "Student achievements",
            "Inspiring Future Leaders",
        ),
    ]
}

fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig::new("hero", "Home"),
        SectionConfig::new("about", "Why Choose Us"),
        SectionConfig::new("facilities", "Facilities"),
        SectionConfig::new("academics", "Academics"),
        SectionConfig::new("testimonials", "Testimonials"),
        SectionConfig::new("news", "News"),
    ]
}

fn default_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new("About", "#about")
            .with_link("Our Story", "#about")
            .with_link("Opportunities", "#facilities")
            .with_link("Get in Touch", "#contact")
            .with_link("Help Center", "#news"),
        NavItem::new("Admission", "#apply")
            .with_link("How to Get Admitted?", "#apply")
            .with_link("Apply Online", "#apply")
            .with_link("Tuition & Fees", "#academics"),
        NavItem::new("Academic", "#academics")
            .with_link("Programs & Courses", "#academics")
            .with_link("Academic Resources", "#academics")
            .with_link("Student Guidelines", "#academics")
            .with_link("Classrooms & Facilities", "#facilities")
            .with_link("Clubs & Activities", "#testimonials"),
        NavItem::new("Administration", "#news")
            .with_link("Meet the Leadership", "#news")
            .with_link("Explore Faculty", "#academics")
            .with_link("Connect with Staff", "#news")
            .with_link("Access Departments", "#academics"),
        NavItem::new("Campus", "#hero")
            .with_link("Explore Media", "#hero")
            .with_link("Read the Blog", "#news")
            .with_link("View Gallery", "#hero"),
        NavItem::new("Notice Board", "#news"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_is_valid() {
        let config = SiteConfig::default();
        config.validate().unwrap();
        assert_eq!(config.slides.len(), 4);
        assert_eq!(config.sections[0].id, "hero");
        assert_eq!(config.navigation.len(), 6);
        assert_eq!(config.carousel.interval(), Duration::from_secs(7));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [carousel]
            interval_ms = 5000
            "#,
        )
        .unwrap();

        assert_eq!(config.carousel.interval_ms, 5000);
        assert_eq!(config.carousel.drag_threshold, DEFAULT_DRAG_THRESHOLD);
        assert!(config.carousel.pause_on_hover);
        assert_eq!(config.sections, default_sections());
    }

    #[test]
    fn test_full_toml() {
        let config = SiteConfig::from_toml_str(
            r##"
            [scroll_spy]
            activation_offset = 80.0

            [[slides]]
            image_source = "/a.jpg"
            alt_text = "A"
            caption = "First"

            [[sections]]
            id = "hero"

            [[sections]]
            id = "news"
            label = "News"

            [[navigation]]
            label = "Campus"
            href = "#hero"
            submenu = [{ label = "Blog", href = "#news" }]

            [[navigation]]
            label = "Portal"
            "##,
        )
        .unwrap();

        config.validate().unwrap();
        assert_eq!(config.scroll_spy.activation_offset, 80.0);
        assert_eq!(config.slides, vec![Slide::new("/a.jpg", "A", "First")]);
        assert_eq!(config.sections[0].label, "");
        assert_eq!(config.navigation[0].submenu[0].target_section(), "news");
        assert_eq!(config.navigation[1].href, None);
    }

    #[test]
    fn test_malformed_toml() {
        let err = SiteConfig::from_toml_str("[carousel\ninterval_ms = 1").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));

        let err = SiteConfig::from_toml_str("[carousel]\ninterval_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_tuning() {
        let mut config = SiteConfig::default();
        config.carousel.interval_ms = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = SiteConfig::default();
        config.carousel.drag_threshold = -1.0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = SiteConfig::default();
        config.scroll_spy.activation_offset = f32::NAN;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_sections() {
        let mut config = SiteConfig::default();
        config.sections.clear();
        assert!(matches!(config.validate(), Err(Error::NoSections)));

        let mut config = SiteConfig::default();
        config.sections.push(SectionConfig::new("news", "Again"));
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = SiteConfig::default();
        config.sections.push(SectionConfig::new("", "Blank"));
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_allows_empty_slides() {
        let mut config = SiteConfig::default();
        config.slides.clear();
        config.validate().unwrap();
    }

    #[test]
    fn test_toml_round_trip_of_default() {
        let config = SiteConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(SiteConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_scroll_sections_follow_declaration_order() {
        let ids: Vec<_> = SiteConfig::default()
            .scroll_sections()
            .iter()
            .map(|s| s.id().to_string())
            .collect();
        assert_eq!(
            ids,
            ["hero", "about", "facilities", "academics", "testimonials", "news"]
        );
    }
}
