//! Top-level pages.

pub mod dashboard;
