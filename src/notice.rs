//! User-visible failure notices.

use std::fmt;

/// Page operation a notice refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Update,
    Toggle,
    Delete,
}

impl Operation {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Load => "load the menu",
            Self::Add => "add the dish",
            Self::Update => "save the dish",
            Self::Toggle => "change availability",
            Self::Delete => "delete the dish",
        }
    }
}

/// A failed operation reported to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub operation: Operation,
    pub message: String,
}

impl Notice {
    /// Build a notice and log the failure.
    pub fn failed(operation: Operation, error: &impl fmt::Display) -> Self {
        tracing::warn!(?operation, %error, "menu operation failed");
        Self {
            operation,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not {}: {}", self.operation.describe(), self.message)
    }
}
