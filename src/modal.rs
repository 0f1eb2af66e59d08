//! Add/edit dialog state and the page phase derived from it.
//!
//! The editing target lives inside [`Modal::Editing`], so a target exists
//! exactly while the edit dialog is open and is dropped when it closes.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::error::MenuError;
use crate::food::Food;

/// Which dialog, if any, is currently open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Adding,
    Editing(Food),
}

impl Modal {
    /// Open the add dialog.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::ModalBusy`] if another dialog is open.
    pub fn open_add(&mut self) -> Result<(), MenuError> {
        self.ensure_closed()?;
        *self = Self::Adding;
        Ok(())
    }

    /// Open the edit dialog with `food` as the editing target.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::ModalBusy`] if another dialog is open.
    pub fn open_edit(&mut self, food: Food) -> Result<(), MenuError> {
        self.ensure_closed()?;
        *self = Self::Editing(food);
        Ok(())
    }

    /// Close whatever is open. Used for both cancel and successful submit.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn is_adding(&self) -> bool {
        matches!(self, Self::Adding)
    }

    #[must_use]
    pub fn editing_target(&self) -> Option<&Food> {
        match self {
            Self::Editing(food) => Some(food),
            _ => None,
        }
    }

    fn ensure_closed(&self) -> Result<(), MenuError> {
        if self.is_open() {
            return Err(MenuError::ModalBusy);
        }
        Ok(())
    }
}

/// Page controller phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    LoadingList,
    Idle,
    AddModalOpen,
    EditModalOpen,
}

impl Phase {
    /// Derive the phase from the load flag and the dialog state.
    #[must_use]
    pub fn of(loaded: bool, modal: &Modal) -> Self {
        match (loaded, modal) {
            (false, _) => Self::LoadingList,
            (true, Modal::Closed) => Self::Idle,
            (true, Modal::Adding) => Self::AddModalOpen,
            (true, Modal::Editing(_)) => Self::EditModalOpen,
        }
    }
}
