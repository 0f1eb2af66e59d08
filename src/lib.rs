//! # menu
//!
//! Shared core for the food-menu manager: the `Food` record, the keyed local
//! store that mirrors the remote `/foods` collection, the add/edit modal state
//! machine, form parsing, and the page controller that applies remote results
//! to local state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client/` renders this state in the browser and `cli/` drives the same
//! controller from a terminal. Neither front end mutates the store directly;
//! both go through the reducers in [`controller`].

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod food;
pub mod form;
pub mod modal;
pub mod notice;
pub mod store;

pub use api::{ApiError, FoodApi};
pub use config::MenuConfig;
pub use controller::Controller;
pub use error::MenuError;
pub use food::{Food, FoodId, FoodPatch, NewFood, Price};
pub use form::{FoodForm, FormError};
pub use modal::{Modal, Phase};
pub use notice::{Notice, Operation};
pub use store::{MenuStore, Upsert};
