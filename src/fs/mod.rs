//! Filesystem utilities for promptplan.
//!
//! Output files are written whole, so an interrupted run never leaves a
//! truncated prompt file behind.

mod atomic;

pub use atomic::write_new_file;
