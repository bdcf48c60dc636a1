//! Utility Module
//!
//! - [`Timer`]: frame timing for the playback loop

pub mod time;

pub use time::Timer;
