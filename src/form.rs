//! Raw add/edit form fields and their conversion into request bodies.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::food::{Food, FoodPatch, InvalidPrice, NewFood, Price};

/// Validation failure for a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error(transparent)]
    InvalidPrice(#[from] InvalidPrice),
}

/// The four text inputs shared by the add and edit dialogs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoodForm {
    pub image: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl FoodForm {
    /// Prefill from an existing record for the edit dialog.
    #[must_use]
    pub fn from_food(food: &Food) -> Self {
        Self {
            image: food.image.clone(),
            name: food.name.clone(),
            price: food.price.to_string(),
            description: food.description.clone(),
        }
    }

    /// Build the create body for an add submission.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Missing`] for a blank name or price and
    /// [`FormError::InvalidPrice`] when the price does not parse.
    pub fn to_new_food(&self) -> Result<NewFood, FormError> {
        let (name, price) = self.required()?;
        Ok(NewFood::new(
            name,
            self.image.trim(),
            price,
            self.description.trim(),
        ))
    }

    /// Build the patch for an edit submission.
    ///
    /// The edit dialog starts prefilled from the record, so every field it
    /// holds is supplied. An emptied image or description clears that field.
    ///
    /// # Errors
    ///
    /// Same as [`FoodForm::to_new_food`].
    pub fn to_patch(&self) -> Result<FoodPatch, FormError> {
        let (name, price) = self.required()?;
        Ok(FoodPatch {
            image: Some(self.image.trim().to_owned()),
            name: Some(name.to_owned()),
            price: Some(price),
            description: Some(self.description.trim().to_owned()),
            available: None,
        })
    }

    fn required(&self) -> Result<(&str, Price), FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Missing("name"));
        }
        if self.price.trim().is_empty() {
            return Err(FormError::Missing("price"));
        }
        Ok((name, self.price.parse()?))
    }
}

/// Check a patch built outside the dialog: a supplied name must not be blank.
///
/// # Errors
///
/// Returns [`FormError::Missing`] for a blank supplied name.
pub fn check_patch(patch: &FoodPatch) -> Result<(), FormError> {
    match &patch.name {
        Some(name) if name.trim().is_empty() => Err(FormError::Missing("name")),
        _ => Ok(()),
    }
}
