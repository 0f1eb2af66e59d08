//! Crate-level error type.

use crate::api::ApiError;
use crate::food::FoodId;
use crate::form::FormError;

/// Errors surfaced by the page controller.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// The remote collection rejected or failed the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The submitted form did not produce a valid record.
    #[error(transparent)]
    Form(#[from] FormError),

    /// A modal is already open; only one may be open at a time.
    #[error("another dialog is already open")]
    ModalBusy,

    /// The initial list has not been fetched yet.
    #[error("menu is still loading")]
    NotLoaded,

    /// No dialog is open for the submission.
    #[error("no {0} dialog is open")]
    NoDialog(&'static str),

    /// The id is not in the local store.
    #[error("food {0} not found")]
    UnknownFood(FoodId),
}
