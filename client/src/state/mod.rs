//! Client-side state that is not part of the shared core.
//!
//! DESIGN
//! ======
//! The menu store and dialog state are the core crate's `MenuStore` and
//! `Modal`, each provided as its own signal. Page-level flags live here.

pub mod status;
