//! Networking for the `/foods` REST collection.

pub mod api;
