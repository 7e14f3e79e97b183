//! Command-line front end for the hero catalog.
//!
//! # Responsibility
//! - Act as the presentation consumer of `heroes_core`.
//! - Print each view followed by the notification log.

mod views;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use heroes_core::config::DEFAULT_RESOURCE_PATH;
use heroes_core::{
    init_logging, init_stderr_logging, HeroClientConfig, HeroId, HeroService, HeroTransport,
    HttpHeroTransport, MessageLog, NewHero, Route,
};
use log::warn;

const STDERR_LOG_LEVEL: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "heroes", version, about = "Browse and edit the hero catalog")]
struct Cli {
    /// Server base URL; defaults to `HEROES_API_URL` or http://localhost:3000.
    #[arg(long)]
    base_url: Option<String>,

    /// Collection path under the base URL.
    #[arg(long)]
    resource_path: Option<String>,

    /// Diagnostic log level (trace|debug|info|warn|error).
    #[arg(long, env = "HEROES_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; stderr when unset.
    #[arg(long, env = "HEROES_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every hero.
    List,
    /// Show the top heroes.
    Dashboard,
    /// Show one hero.
    Detail { id: HeroId },
    /// Create a hero.
    Add { name: String },
    /// Rename a hero and save it.
    Rename { id: HeroId, name: String },
    /// Delete a hero.
    Delete { id: HeroId },
    /// Find heroes by name.
    Search { term: String },
    /// Open a view by route path, e.g. `detail/12`.
    Open { route: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    start_logging(&cli)?;

    let config = match &cli.base_url {
        Some(base_url) => HeroClientConfig::new(
            base_url,
            cli.resource_path.as_deref().unwrap_or(DEFAULT_RESOURCE_PATH),
        )?,
        None => HeroClientConfig::from_env()?,
    };

    let messages = MessageLog::new();
    let service = HeroService::new(HttpHeroTransport::new(config), messages.clone());

    let output = run(&service, resolve_route(cli.command)?).await;
    print!("{output}");
    print!("{}", views::render_messages(&messages.entries()));
    Ok(())
}

fn start_logging(cli: &Cli) -> Result<()> {
    let result = match &cli.log_dir {
        Some(dir) => init_logging(
            cli.log_level
                .as_deref()
                .unwrap_or(heroes_core::default_log_level()),
            dir,
        ),
        None => init_stderr_logging(cli.log_level.as_deref().unwrap_or(STDERR_LOG_LEVEL)),
    };
    result.map_err(|err| anyhow!(err))
}

/// Replaces `open <route>` with the command for the routed view.
fn resolve_route(command: Command) -> Result<Command> {
    let Command::Open { route } = command else {
        return Ok(command);
    };
    Ok(match Route::parse(&route)? {
        Route::Dashboard => Command::Dashboard,
        Route::Heroes => Command::List,
        Route::Detail(id) => Command::Detail { id },
    })
}

async fn run<T: HeroTransport>(service: &HeroService<T>, command: Command) -> String {
    match command {
        Command::List => views::render_list("My Heroes", &service.get_heroes().await),
        Command::Dashboard => {
            let heroes = service.get_heroes().await;
            views::render_list("Top Heroes", views::dashboard_heroes(&heroes))
        }
        Command::Detail { id } => views::render_detail(service.get_hero(id).await.as_ref()),
        Command::Add { name } => {
            let Some(name) = views::normalize_hero_name(&name) else {
                warn!("event=hero_add module=cli status=rejected reason=blank_name");
                return "hero name cannot be blank\n".to_string();
            };
            views::render_detail(service.add_hero(&NewHero::new(name)).await.as_ref())
        }
        Command::Rename { id, name } => {
            let Some(name) = views::normalize_hero_name(&name) else {
                return "hero name cannot be blank\n".to_string();
            };
            let Some(hero) = service.get_hero(id).await else {
                return views::render_detail(None);
            };
            service.update_hero(&hero.renamed(name)).await;
            // Show what the server holds now, so a failed save leaves the old name.
            views::render_detail(service.get_hero(id).await.as_ref())
        }
        Command::Delete { id } => {
            service.delete_hero(id).await;
            views::render_list("My Heroes", &service.get_heroes().await)
        }
        Command::Search { term } => {
            views::render_list("Search Results", &service.search_heroes(&term).await)
        }
        Command::Open { route } => format!("route `{route}` was not resolved\n"),
    }
}
