use super::*;
use menu::{ApiError, Food, NewFood};
use std::sync::{Arc, Mutex};

/// Server whose list endpoint is down; every other call succeeds.
#[derive(Default)]
struct ListDownApi {
    requests: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait(?Send)]
impl FoodApi for ListDownApi {
    async fn list(&self) -> Result<Vec<Food>, ApiError> {
        self.requests.lock().unwrap().push("GET".to_owned());
        Err(ApiError::Status { status: 503, body: String::new() })
    }

    async fn create(&self, food: &NewFood) -> Result<Food, ApiError> {
        self.requests.lock().unwrap().push("POST".to_owned());
        Ok(Food {
            id: FoodId(7),
            name: food.name.clone(),
            image: food.image.clone(),
            price: food.price,
            description: food.description.clone(),
            available: food.available(),
        })
    }

    async fn update(&self, _id: FoodId, food: &Food) -> Result<Food, ApiError> {
        self.requests.lock().unwrap().push("PUT".to_owned());
        Ok(food.clone())
    }

    async fn delete(&self, _id: FoodId) -> Result<(), ApiError> {
        self.requests.lock().unwrap().push("DELETE".to_owned());
        Ok(())
    }
}

fn parse(args: &[&str]) -> Command {
    let mut argv = vec!["menu-cli"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().command
}

#[test]
fn parses_add_with_defaults() {
    let cli = Cli::try_parse_from(["menu-cli", "add", "--name", "Burger", "--price", "9.90"]).unwrap();
    let Command::Add(args) = cli.command else {
        panic!("expected add command");
    };
    let form = args.to_form();
    assert_eq!(form.name, "Burger");
    assert_eq!(form.price, "9.90");
    assert!(form.image.is_empty());
    assert!(form.description.is_empty());
}

#[test]
fn add_requires_name_and_price() {
    assert!(Cli::try_parse_from(["menu-cli", "add", "--name", "Burger"]).is_err());
    assert!(Cli::try_parse_from(["menu-cli", "add", "--price", "1"]).is_err());
}

#[test]
fn edit_keeps_omitted_flags_apart_from_empty_ones() {
    let Command::Edit(args) = parse(&["edit", "1", "--price", "25", "--description", ""]) else {
        panic!("expected edit command");
    };
    assert_eq!(args.id, FoodId(1));
    let patch = args.to_patch();
    assert_eq!(patch.price, Some(Price::from_cents(2500)));
    assert_eq!(patch.description.as_deref(), Some(""));
    assert!(patch.name.is_none());
    assert!(patch.image.is_none());
}

#[test]
fn edit_rejects_unparseable_price() {
    assert!(Cli::try_parse_from(["menu-cli", "edit", "1", "--price", "cheap"]).is_err());
}

#[test]
fn only_list_edit_and_toggle_fetch_the_list_first() {
    assert!(parse(&["list"]).needs_list());
    assert!(parse(&["edit", "1"]).needs_list());
    assert!(parse(&["toggle", "1"]).needs_list());
    assert!(!parse(&["delete", "1"]).needs_list());
    assert!(!parse(&["add", "--name", "Tea", "--price", "2"]).needs_list());
}

#[tokio::test]
async fn delete_and_add_work_while_list_is_down() {
    let api = ListDownApi::default();
    let requests = Arc::clone(&api.requests);
    let mut controller = Controller::without_list(api);
    dispatch(&mut controller, parse(&["delete", "1"])).await.unwrap();
    dispatch(&mut controller, parse(&["add", "--name", "Tea", "--price", "2"]))
        .await
        .unwrap();
    assert_eq!(*requests.lock().unwrap(), ["DELETE", "POST"]);
}

#[tokio::test]
async fn list_reports_a_failed_fetch() {
    let mut controller = Controller::new(ListDownApi::default());
    let err = dispatch(&mut controller, parse(&["list"])).await.unwrap_err();
    assert!(matches!(err, CliError::Menu(MenuError::Api(ApiError::Status { status: 503, .. }))));
    assert_eq!(controller.take_notices().len(), 1);
}

#[test]
fn toggle_and_delete_take_numeric_ids() {
    let cli = Cli::try_parse_from(["menu-cli", "toggle", "3"]).unwrap();
    assert!(matches!(cli.command, Command::Toggle { id: FoodId(3) }));
    let cli = Cli::try_parse_from(["menu-cli", "delete", "4"]).unwrap();
    assert!(matches!(cli.command, Command::Delete { id: FoodId(4) }));
    assert!(Cli::try_parse_from(["menu-cli", "delete", "pizza"]).is_err());
}

#[test]
fn base_url_flag_overrides_config() {
    let cli = Cli::try_parse_from(["menu-cli", "--base-url", "http://api.test/", "list"]).unwrap();
    let config = resolve_config(&cli, MenuConfig::default());
    assert_eq!(config.base_url, "http://api.test");
}
