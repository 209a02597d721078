//! Logging facilities for Prospectus.
//!
//! Prospectus uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; hosts that want output install one themselves:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("prospectus=debug")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "prospectus_core";
    /// Timer system target.
    pub const TIMER: &str = "prospectus_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "prospectus_core::signal";
    /// Hero carousel target.
    pub const CAROUSEL: &str = "prospectus::carousel";
    /// Scroll-spy target.
    pub const SCROLL_SPY: &str = "prospectus::scroll_spy";
    /// Navigation menu target.
    pub const NAVIGATION: &str = "prospectus::navigation";
    /// Page event dispatch target.
    pub const PAGE: &str = "prospectus::page";
    /// Site configuration target.
    pub const CONFIG: &str = "prospectus::config";
}
