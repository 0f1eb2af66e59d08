use super::*;
use crate::food::{FoodId, Price};

fn pizza() -> Food {
    Food {
        id: FoodId(1),
        name: "Pizza".to_owned(),
        image: String::new(),
        price: Price::from_cents(1990),
        description: String::new(),
        available: true,
    }
}

// =============================================================
// Modal transitions
// =============================================================

#[test]
fn modal_default_is_closed() {
    let modal = Modal::default();
    assert!(!modal.is_open());
    assert!(modal.editing_target().is_none());
}

#[test]
fn open_add_from_closed() {
    let mut modal = Modal::Closed;
    modal.open_add().unwrap();
    assert!(modal.is_adding());
}

#[test]
fn open_edit_holds_target() {
    let mut modal = Modal::Closed;
    modal.open_edit(pizza()).unwrap();
    assert_eq!(modal.editing_target(), Some(&pizza()));
}

#[test]
fn opening_while_open_is_rejected() {
    let mut modal = Modal::Adding;
    assert!(matches!(modal.open_edit(pizza()), Err(MenuError::ModalBusy)));
    assert!(matches!(modal.open_add(), Err(MenuError::ModalBusy)));
    assert!(modal.is_adding());
}

#[test]
fn close_drops_editing_target() {
    let mut modal = Modal::Editing(pizza());
    modal.close();
    assert_eq!(modal, Modal::Closed);
    assert!(modal.editing_target().is_none());
}

// =============================================================
// Phase
// =============================================================

#[test]
fn phase_is_loading_until_list_arrives() {
    assert_eq!(Phase::of(false, &Modal::Closed), Phase::LoadingList);
    assert_eq!(Phase::default(), Phase::LoadingList);
}

#[test]
fn phase_follows_modal_once_loaded() {
    assert_eq!(Phase::of(true, &Modal::Closed), Phase::Idle);
    assert_eq!(Phase::of(true, &Modal::Adding), Phase::AddModalOpen);
    assert_eq!(Phase::of(true, &Modal::Editing(pizza())), Phase::EditModalOpen);
}
