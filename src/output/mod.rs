//! Terminal output formatting
//!
//! Display utilities for CLI results and the share summary.

pub mod display;
pub mod formatters;
pub mod share;

pub use display::{print_classification, print_state};
pub use share::{ShareItem, share_items, share_json};
