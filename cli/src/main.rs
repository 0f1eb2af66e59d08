mod rest;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use menu::{Controller, FoodApi, FoodForm, FoodId, FoodPatch, MenuConfig, MenuError, Price};
use serde::Serialize;

use crate::rest::RestFoodApi;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("command failed; see the notice above")]
    Reported,
}

#[derive(Parser, Debug)]
#[command(name = "menu-cli", about = "Manage the food menu through its REST API")]
struct Cli {
    /// API base URL; defaults to `MENU_API_BASE_URL` or http://localhost:3333.
    #[arg(long, env = "MENU_API_BASE_URL")]
    base_url: Option<String>,

    /// Log each request and every failure to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every dish.
    List,
    /// Create a dish; it starts out available.
    Add(AddArgs),
    /// Change fields of a dish; omitted flags keep their value and an empty
    /// `--image` or `--description` clears it.
    Edit(EditArgs),
    /// Flip a dish between available and unavailable.
    Toggle { id: FoodId },
    /// Remove a dish.
    Delete { id: FoodId },
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    price: String,
    #[arg(long, default_value = "")]
    image: String,
    #[arg(long, default_value = "")]
    description: String,
}

impl AddArgs {
    fn to_form(&self) -> FoodForm {
        FoodForm {
            image: self.image.clone(),
            name: self.name.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct EditArgs {
    id: FoodId,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    price: Option<Price>,
    #[arg(long)]
    image: Option<String>,
    #[arg(long)]
    description: Option<String>,
}

impl EditArgs {
    fn to_patch(&self) -> FoodPatch {
        let trimmed = |value: &Option<String>| value.as_deref().map(|v| v.trim().to_owned());
        FoodPatch {
            image: trimmed(&self.image),
            name: trimmed(&self.name),
            price: self.price,
            description: trimmed(&self.description),
            available: None,
        }
    }
}

impl Command {
    /// Whether the command works on the listed records.
    fn needs_list(&self) -> bool {
        matches!(self, Self::List | Self::Edit(_) | Self::Toggle { .. })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::ERROR };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let config = resolve_config(&cli, MenuConfig::from_env());

    match run(config, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Reported) => ExitCode::FAILURE,
        Err(error) => {
            tracing::error!(%error, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(cli: &Cli, config: MenuConfig) -> MenuConfig {
    match &cli.base_url {
        Some(base_url) => config.with_base_url(base_url),
        None => config,
    }
}

async fn run(config: MenuConfig, command: Command) -> Result<(), CliError> {
    tracing::debug!(base_url = %config.base_url, "using menu API");
    let api = RestFoodApi::new(&config)?;
    let mut controller = if command.needs_list() {
        Controller::new(api)
    } else {
        Controller::without_list(api)
    };

    let result = dispatch(&mut controller, command).await;
    let notices = controller.take_notices();
    for notice in &notices {
        eprintln!("{notice}");
    }
    if notices.is_empty() { result } else { result.map_err(|_| CliError::Reported) }
}

async fn dispatch<A: FoodApi>(
    controller: &mut Controller<A>,
    command: Command,
) -> Result<(), CliError> {
    if command.needs_list() {
        controller.load().await?;
    }

    match command {
        Command::List => print_json(&controller.store().to_vec()),
        Command::Add(args) => {
            controller.open_add()?;
            let created = controller.submit_add(&args.to_form()).await?;
            print_json(&created)
        }
        Command::Edit(args) => {
            controller.open_edit(args.id)?;
            let updated = controller.submit_patch(&args.to_patch()).await?;
            print_json(&updated)
        }
        Command::Toggle { id } => {
            let toggled = controller.toggle_available(id).await?;
            print_json(&toggled)
        }
        Command::Delete { id } => {
            controller.delete(id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
