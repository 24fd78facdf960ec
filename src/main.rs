//! Gridpick CLI application entry point
//!
//! A scripted front end for the kiosk's picker state machine.
//!
//! # Usage
//!
//! ```bash
//! # List the groups in the location store
//! gridpick groups
//!
//! # Print the second page of the delivery grid
//! gridpick show Delivery_Location --page 2
//!
//! # Replay picker commands
//! gridpick replay Base_Locations next "select:Base 17" confirm
//!
//! # Start a delivery and print the request
//! gridpick deliver "Table 4" --return-to "Base 2"
//! ```
//!
//! # Configuration
//!
//! Settings live in `~/.config/gridpick/config.toml` on Linux and are created
//! with defaults on first run. The location store defaults to
//! `<data dir>/gridpick/locations.json`; built-in locations are used when it
//! is missing or unreadable.

use gridpick::{
    GridpickError,
    catalog::{LocationStore, defaults},
    cli::{Cli, Commands},
    commands,
    config::KioskConfig,
    delivery::DeliveryScreen,
    output::StdoutWriter,
};
use std::path::Path;

type Result<T> = std::result::Result<T, GridpickError>;

fn load_config(cli: &Cli) -> Result<KioskConfig> {
    let config = match &cli.config {
        Some(path) => KioskConfig::load_from(path)?,
        None => KioskConfig::load()?,
    };
    Ok(config)
}

fn load_store(path: &Path) -> LocationStore {
    LocationStore::open(path).unwrap_or_else(|e| {
        log::info!("{e}; using built-in locations");
        defaults::store()
    })
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let quiet = cli.quiet || config.quiet;
    let output = StdoutWriter::new(quiet);

    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => config.resolve_store_path()?,
    };
    log::debug!("using location store {}", store_path.display());

    match cli.command {
        Commands::Groups => commands::groups(&load_store(&store_path), &output),
        Commands::Show { group, page } => commands::show(
            &load_store(&store_path),
            &group,
            page,
            config.main_picker()?,
            &output,
        ),
        Commands::Replay {
            group,
            commands: script,
            json,
        } => commands::replay(
            &load_store(&store_path),
            &group,
            &script,
            config.main_picker()?,
            json,
            &output,
        ),
        Commands::Deliver { table, return_to } => {
            let screen = DeliveryScreen::open(&store_path, config.main_picker()?, config.popup_picker()?);
            commands::deliver(screen, &table, return_to.as_deref(), &output)
        }
    }
}

fn main() {
    let cli = Cli::parse_args();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
