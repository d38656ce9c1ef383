//! Utility functions for display formatting.

pub mod format;

pub use format::{format_date, percentage, progress_bar, truncate_string};
