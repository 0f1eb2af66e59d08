//! Page controller: runs remote operations and folds their results into
//! local state.
//!
//! DESIGN
//! ======
//! The `apply_*` reducers are the only code that changes the store or closes
//! a dialog in response to a remote result. The browser UI calls them from
//! its spawned tasks with its own signals; [`Controller`] calls them for the
//! CLI and tests. Local state changes only after the server has answered.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::api::{ApiError, FoodApi};
use crate::error::MenuError;
use crate::food::{Food, FoodId, FoodPatch};
use crate::form::{FoodForm, check_patch};
use crate::modal::{Modal, Phase};
use crate::notice::{Notice, Operation};
use crate::store::{MenuStore, Upsert};

/// Replace the store with a fresh list response.
pub fn apply_loaded(store: &mut MenuStore, result: Result<Vec<Food>, ApiError>) -> Option<Notice> {
    match result {
        Ok(foods) => {
            *store = MenuStore::from_foods(foods);
            tracing::debug!(count = store.len(), "menu loaded");
            None
        }
        Err(error) => Some(Notice::failed(Operation::Load, &error)),
    }
}

/// Append a created record and close the add dialog. On failure the dialog
/// stays open with its input.
pub fn apply_added(
    store: &mut MenuStore,
    modal: &mut Modal,
    result: Result<Food, ApiError>,
) -> Option<Notice> {
    match result {
        Ok(food) => {
            let (id, name) = (food.id, food.name.clone());
            match store.upsert(food) {
                Upsert::Inserted => tracing::info!(%id, %name, "food added"),
                Upsert::Replaced => tracing::debug!(%id, "created food was already listed"),
            }
            modal.close();
            None
        }
        Err(error) => Some(Notice::failed(Operation::Add, &error)),
    }
}

/// Replace the edited record by id and close the edit dialog. On failure the
/// dialog stays open.
pub fn apply_updated(
    store: &mut MenuStore,
    modal: &mut Modal,
    result: Result<Food, ApiError>,
) -> Option<Notice> {
    match result {
        Ok(food) => {
            let id = food.id;
            if !store.replace(food) {
                tracing::debug!(%id, "updated food no longer listed");
            }
            tracing::info!(%id, "food updated");
            modal.close();
            None
        }
        Err(error) => Some(Notice::failed(Operation::Update, &error)),
    }
}

/// Replace a record after an availability toggle.
pub fn apply_toggled(store: &mut MenuStore, result: Result<Food, ApiError>) -> Option<Notice> {
    match result {
        Ok(food) => {
            tracing::info!(id = %food.id, available = food.available, "availability changed");
            store.replace(food);
            None
        }
        Err(error) => Some(Notice::failed(Operation::Toggle, &error)),
    }
}

/// Remove `id` once the server confirmed the delete. A failed delete leaves
/// the store untouched.
pub fn apply_deleted(
    store: &mut MenuStore,
    id: FoodId,
    result: Result<(), ApiError>,
) -> Option<Notice> {
    match result {
        Ok(()) => {
            if store.remove(id).is_some() {
                tracing::info!(%id, "food deleted");
            }
            None
        }
        Err(error) => Some(Notice::failed(Operation::Delete, &error)),
    }
}

/// Owns the remote client, the local store, the dialog state and pending
/// notices for one page.
pub struct Controller<A> {
    api: A,
    store: MenuStore,
    modal: Modal,
    loaded: bool,
    notices: Vec<Notice>,
}

impl<A: FoodApi> Controller<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: MenuStore::new(),
            modal: Modal::Closed,
            loaded: false,
            notices: Vec::new(),
        }
    }

    /// Controller for one-off operations that do not need the list, such as
    /// an add or a delete from the terminal. The store starts empty and the
    /// page counts as loaded.
    #[must_use]
    pub fn without_list(api: A) -> Self {
        Self {
            loaded: true,
            ..Self::new(api)
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::of(self.loaded, &self.modal)
    }

    #[must_use]
    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    #[must_use]
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Drain pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Fetch the list. The page leaves the loading phase whether or not the
    /// fetch succeeded; a failure leaves the store empty and posts a notice.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Api`] if the list request failed.
    pub async fn load(&mut self) -> Result<(), MenuError> {
        let result = self.api.list().await;
        self.loaded = true;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        let notice = apply_loaded(&mut self.store, result);
        self.settle(notice, outcome)
    }

    /// # Errors
    ///
    /// Returns [`MenuError::NotLoaded`] before the list arrived and
    /// [`MenuError::ModalBusy`] if a dialog is open.
    pub fn open_add(&mut self) -> Result<(), MenuError> {
        self.ensure_loaded()?;
        self.modal.open_add()
    }

    /// Open the edit dialog with the listed record `id` as target.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::UnknownFood`] for an unlisted id, plus the
    /// [`Controller::open_add`] errors.
    pub fn open_edit(&mut self, id: FoodId) -> Result<(), MenuError> {
        self.ensure_loaded()?;
        let food = self.store.get(id).cloned().ok_or(MenuError::UnknownFood(id))?;
        self.modal.open_edit(food)
    }

    /// Close the open dialog without submitting.
    pub fn cancel(&mut self) {
        self.modal.close();
    }

    /// Submit the add dialog.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::NoDialog`] when the add dialog is not open,
    /// [`MenuError::Form`] for invalid input and [`MenuError::Api`] when the
    /// create failed. The dialog stays open on any error.
    pub async fn submit_add(&mut self, form: &FoodForm) -> Result<Food, MenuError> {
        if !self.modal.is_adding() {
            return Err(MenuError::NoDialog("add"));
        }
        let body = form
            .to_new_food()
            .map_err(|error| self.reject(Operation::Add, error))?;
        let result = self.api.create(&body).await;
        let outcome = result.clone();
        let notice = apply_added(&mut self.store, &mut self.modal, result);
        self.settle(notice, outcome)
    }

    /// Submit the edit dialog. Every field the dialog holds is merged over
    /// the editing target, so an emptied image or description is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::NoDialog`] when the edit dialog is not open,
    /// [`MenuError::Form`] for invalid input and [`MenuError::Api`] when the
    /// update failed. The dialog stays open on any error.
    pub async fn submit_edit(&mut self, form: &FoodForm) -> Result<Food, MenuError> {
        if self.modal.editing_target().is_none() {
            return Err(MenuError::NoDialog("edit"));
        }
        let patch = form
            .to_patch()
            .map_err(|error| self.reject(Operation::Update, error))?;
        self.submit_patch(&patch).await
    }

    /// Apply `patch` to the editing target and send the merged record. Fields
    /// left `None` keep their value. An empty patch closes the dialog
    /// without a request.
    ///
    /// # Errors
    ///
    /// Same as [`Controller::submit_edit`]; a blank supplied name is
    /// rejected as [`MenuError::Form`].
    pub async fn submit_patch(&mut self, patch: &FoodPatch) -> Result<Food, MenuError> {
        let target = self
            .modal
            .editing_target()
            .cloned()
            .ok_or(MenuError::NoDialog("edit"))?;
        check_patch(patch).map_err(|error| self.reject(Operation::Update, error))?;
        if patch.is_empty() {
            tracing::debug!(id = %target.id, "edit changed nothing");
            self.modal.close();
            return Ok(target);
        }
        let body = target.merged(patch);
        let result = self.api.update(target.id, &body).await;
        let outcome = result.clone();
        let notice = apply_updated(&mut self.store, &mut self.modal, result);
        self.settle(notice, outcome)
    }

    /// Flip availability of a listed record.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::UnknownFood`] for an unlisted id and
    /// [`MenuError::Api`] when the update failed.
    pub async fn toggle_available(&mut self, id: FoodId) -> Result<Food, MenuError> {
        self.ensure_loaded()?;
        let food = self.store.get(id).ok_or(MenuError::UnknownFood(id))?;
        let body = food.toggled();
        let result = self.api.update(id, &body).await;
        let outcome = result.clone();
        let notice = apply_toggled(&mut self.store, result);
        self.settle(notice, outcome)
    }

    /// Delete `id` remotely, then locally. An id missing from the store is
    /// still sent to the server; locally it is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Api`] when the delete failed; the store is then
    /// unchanged.
    pub async fn delete(&mut self, id: FoodId) -> Result<(), MenuError> {
        let result = self.api.delete(id).await;
        let outcome = result.clone();
        let notice = apply_deleted(&mut self.store, id, result);
        self.settle(notice, outcome)
    }

    fn ensure_loaded(&self) -> Result<(), MenuError> {
        if self.loaded {
            Ok(())
        } else {
            Err(MenuError::NotLoaded)
        }
    }

    fn reject(&mut self, operation: Operation, error: impl Into<MenuError>) -> MenuError {
        let error = error.into();
        self.notices.push(Notice::failed(operation, &error));
        error
    }

    fn settle<T>(
        &mut self,
        notice: Option<Notice>,
        outcome: Result<T, ApiError>,
    ) -> Result<T, MenuError> {
        self.notices.extend(notice);
        outcome.map_err(MenuError::from)
    }
}
