use super::*;
use menu::Price;

fn soup() -> Food {
    Food {
        id: FoodId(3),
        name: "Soup".to_owned(),
        image: String::new(),
        price: Price::from_cents(1500),
        description: "Onion".to_owned(),
        available: true,
    }
}

// =============================================================
// Late submit results
// =============================================================

#[test]
fn late_add_lists_record_but_keeps_newer_dialog_open() {
    let mut store = MenuStore::new();
    let mut modal = Modal::Adding;

    let notice = guard_dialog(false, &mut modal, |m| apply_added(&mut store, m, Ok(soup())));

    assert!(notice.is_none());
    assert!(store.get(FoodId(3)).is_some());
    assert_eq!(modal, Modal::Adding);
}

#[test]
fn late_update_keeps_other_edit_dialog_open() {
    let mut store = MenuStore::from_foods(vec![soup()]);
    let other = Food { id: FoodId(9), name: "Tea".to_owned(), ..soup() };
    let mut modal = Modal::Editing(other.clone());
    let renamed = Food { name: "Broth".to_owned(), ..soup() };

    guard_dialog(false, &mut modal, |m| apply_updated(&mut store, m, Ok(renamed)));

    assert_eq!(store.get(FoodId(3)).map(|f| f.name.as_str()), Some("Broth"));
    assert_eq!(modal, Modal::Editing(other));
}

#[test]
fn current_submit_closes_its_dialog() {
    let mut store = MenuStore::new();
    let mut modal = Modal::Adding;

    guard_dialog(true, &mut modal, |m| apply_added(&mut store, m, Ok(soup())));

    assert_eq!(modal, Modal::Closed);
}
