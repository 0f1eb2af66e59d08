//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they render props and report user actions
//! through callbacks. Only `notice_bar` reads shared context directly.

pub mod food_card;
pub mod food_modal;
pub mod header;
pub mod notice_bar;
