//! Local mirror of the remote food collection.
//!
//! DESIGN
//! ======
//! Records are keyed by id with a separate insertion-order index, so "one
//! record per id" holds by construction and display order is the order in
//! which ids were first seen.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::food::{Food, FoodId};

/// Outcome of [`MenuStore::upsert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

/// Ordered, id-keyed set of food records currently displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuStore {
    order: Vec<FoodId>,
    items: HashMap<FoodId, Food>,
}

impl MenuStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list response. A repeated id overwrites the earlier record
    /// but keeps its first position.
    #[must_use]
    pub fn from_foods(foods: Vec<Food>) -> Self {
        let mut store = Self::new();
        for food in foods {
            let id = food.id;
            if store.upsert(food) == Upsert::Replaced {
                tracing::debug!(%id, "duplicate id in list response");
            }
        }
        store
    }

    /// Append a new record or replace the existing one with the same id.
    pub fn upsert(&mut self, food: Food) -> Upsert {
        let id = food.id;
        if self.items.insert(id, food).is_some() {
            Upsert::Replaced
        } else {
            self.order.push(id);
            Upsert::Inserted
        }
    }

    /// Replace the record with the same id. Returns `false` and leaves the
    /// store untouched when the id is absent.
    pub fn replace(&mut self, food: Food) -> bool {
        match self.items.get_mut(&food.id) {
            Some(slot) => {
                *slot = food;
                true
            }
            None => false,
        }
    }

    /// Remove a record by id. Absent ids are a no-op.
    pub fn remove(&mut self, id: FoodId) -> Option<Food> {
        let removed = self.items.remove(&id)?;
        self.order.retain(|existing| *existing != id);
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, id: FoodId) -> Option<&Food> {
        self.items.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in display order.
    #[must_use]
    pub fn ids(&self) -> &[FoodId] {
        &self.order
    }

    /// Records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Food> + '_ {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Food> {
        self.iter().cloned().collect()
    }
}
