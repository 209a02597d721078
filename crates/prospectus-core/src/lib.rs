//! Core systems for Prospectus.
//!
//! This crate provides the event-loop primitives the site model is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification for the rendering layer
//! - **Timers**: One-shot and repeating timers driven by an explicit clock
//! - **Logging**: `tracing` target names per subsystem
//!
//! # Timer Example
//!
//! ```
//! use prospectus_core::TimerManager;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut timers = TimerManager::new();
//! let id = timers.start_repeating(start, Duration::from_secs(7));
//!
//! assert!(timers.process_expired(start).is_empty());
//! assert_eq!(timers.process_expired(start + Duration::from_secs(7)), vec![id]);
//! ```

mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{Result, TimerError};
pub use signal::{ConnectionId, Signal};
pub use timer::{TimerId, TimerKind, TimerManager};
