use super::*;

fn pizza() -> Food {
    Food {
        id: FoodId(1),
        name: "Pizza".to_owned(),
        image: "https://img.test/pizza.png".to_owned(),
        price: Price::from_cents(1990),
        description: "Mozzarella".to_owned(),
        available: true,
    }
}

// =============================================================
// Price
// =============================================================

#[test]
fn price_parses_dot_and_comma_decimals() {
    assert_eq!("19.90".parse::<Price>().unwrap(), Price::from_cents(1990));
    assert_eq!("19,9".parse::<Price>().unwrap(), Price::from_cents(1990));
    assert_eq!(" 7 ".parse::<Price>().unwrap(), Price::from_cents(700));
}

#[test]
fn price_rejects_blank_negative_and_garbage() {
    assert!("".parse::<Price>().is_err());
    assert!("   ".parse::<Price>().is_err());
    assert!("-1".parse::<Price>().is_err());
    assert!("abc".parse::<Price>().is_err());
    assert!("inf".parse::<Price>().is_err());
}

#[test]
fn price_text_rounds_on_typed_digits() {
    assert_eq!("1.005".parse::<Price>().unwrap(), Price::from_cents(101));
    assert_eq!("0.125".parse::<Price>().unwrap(), Price::from_cents(13));
    assert_eq!("2.994".parse::<Price>().unwrap(), Price::from_cents(299));
    assert_eq!("0,995".parse::<Price>().unwrap(), Price::from_cents(100));
    assert_eq!(".5".parse::<Price>().unwrap(), Price::from_cents(50));
    assert_eq!("12.".parse::<Price>().unwrap(), Price::from_cents(1200));
}

#[test]
fn price_text_rejects_signs_exponents_and_extra_separators() {
    assert!("+1".parse::<Price>().is_err());
    assert!("1e2".parse::<Price>().is_err());
    assert!("1.2.3".parse::<Price>().is_err());
    assert!(".".parse::<Price>().is_err());
    assert!("99999999999999999999".parse::<Price>().is_err());
}

#[test]
fn price_rounds_to_nearest_cent() {
    assert_eq!(Price::from_decimal(19.9), Some(Price::from_cents(1990)));
    assert_eq!(Price::from_decimal(0.125), Some(Price::from_cents(13)));
    assert_eq!(Price::from_decimal(-0.5), None);
    assert_eq!(Price::from_decimal(f64::NAN), None);
}

#[test]
fn price_display_and_label_use_two_decimals() {
    let price = Price::from_cents(905);
    assert_eq!(price.to_string(), "9.05");
    assert_eq!(price.label(), "R$ 9.05");
}

#[test]
fn price_deserializes_from_number_or_string() {
    let from_number: Price = serde_json::from_str("19.9").unwrap();
    let from_text: Price = serde_json::from_str("\"19.90\"").unwrap();
    assert_eq!(from_number, from_text);
}

#[test]
fn price_deserialize_rejects_negative_number() {
    assert!(serde_json::from_str::<Price>("-3").is_err());
}

#[test]
fn price_serializes_as_json_number() {
    let json = serde_json::to_value(Price::from_cents(2500)).unwrap();
    assert_eq!(json, serde_json::json!(25.0));
}

// =============================================================
// Food wire shape
// =============================================================

#[test]
fn food_deserializes_server_record() {
    let food: Food = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Pizza",
        "image": "https://img.test/pizza.png",
        "price": "19.90",
        "description": "Mozzarella",
        "available": true
    }))
    .unwrap();
    assert_eq!(food, pizza());
}

#[test]
fn food_missing_available_defaults_to_true() {
    let food: Food = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Soup",
        "price": 5
    }))
    .unwrap();
    assert!(food.available);
    assert!(food.image.is_empty());
    assert!(food.description.is_empty());
}

#[test]
fn food_serializes_with_numeric_price() {
    let json = serde_json::to_value(pizza()).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["price"], 19.9);
    assert_eq!(json["available"], true);
}

// =============================================================
// Merge / toggle
// =============================================================

#[test]
fn merged_replaces_only_supplied_fields() {
    let patch = FoodPatch {
        price: Some(Price::from_cents(2500)),
        ..FoodPatch::default()
    };
    let merged = pizza().merged(&patch);
    assert_eq!(merged.price, Price::from_cents(2500));
    assert_eq!(merged.name, "Pizza");
    assert_eq!(merged.description, "Mozzarella");
    assert_eq!(merged.id, FoodId(1));
}

#[test]
fn merged_with_empty_patch_is_identity() {
    assert!(FoodPatch::default().is_empty());
    assert_eq!(pizza().merged(&FoodPatch::default()), pizza());
}

#[test]
fn toggled_flips_availability_only() {
    let toggled = pizza().toggled();
    assert!(!toggled.available);
    assert_eq!(toggled.toggled(), pizza());
}

#[test]
fn new_food_forces_available_on_the_wire() {
    let body = NewFood::new("Burger", "", Price::from_cents(990), "Beef");
    assert!(body.available());
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["available"], true);
    assert_eq!(json["price"], 9.9);
    assert!(json.get("id").is_none());
}

#[test]
fn food_id_parses_from_text() {
    assert_eq!(" 42".parse::<FoodId>().unwrap(), FoodId(42));
    assert!("x".parse::<FoodId>().is_err());
}
