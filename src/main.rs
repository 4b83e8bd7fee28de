use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_tracker::api::state::AppState;
use league_tracker::api::build_router;
use league_tracker::config::AppConfig;
use league_tracker::import::import_file;
use league_tracker::models::{Match, Membership, Team};
use league_tracker::standings::compute_standings;
use league_tracker::storage::{
    read_competitions, resolve_competition_id, EntityType, JsonlReader, StorageConfig,
};

#[derive(Parser)]
#[command(name = "league-tracker")]
#[command(about = "Competition standings and match statistics engine")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path
    #[arg(long, default_value = "./data")]
    data_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Import a competition snapshot file
    Import {
        /// Path to the snapshot JSON document
        file: String,

        /// Parse and resolve but don't write
        #[arg(long)]
        dry_run: bool,
    },

    /// Print a competition's standings table
    Table {
        /// Competition id or slug
        competition: String,

        /// Restrict to a single group
        #[arg(long)]
        group: Option<String>,
    },

    /// List registered competitions
    Competitions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting league-tracker v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Serve { host, port } => {
            let config_path = PathBuf::from(&cli.config);
            let app_config = if config_path.exists() {
                AppConfig::from_file(&config_path)?
            } else {
                AppConfig::default()
            };
            let host = host.unwrap_or(app_config.server.host);
            let port = port.unwrap_or(app_config.server.port);

            let storage = StorageConfig::new(PathBuf::from(&cli.data_dir));
            let state = AppState {
                storage: Arc::new(storage),
            };
            let app = build_router(state);

            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Standings API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Import { file, dry_run } => {
            let storage = StorageConfig::new(PathBuf::from(&cli.data_dir));
            match import_file(&storage, Path::new(&file), dry_run) {
                Ok(summary) => {
                    println!("\n=== Import Results ===");
                    println!(
                        "Competition: {} ({})",
                        summary.competition.name, summary.competition.slug
                    );
                    println!("Teams:       {}", summary.teams);
                    println!("Rounds:      {}", summary.rounds);
                    println!("Matches:     {}", summary.matches);
                    if dry_run {
                        println!("\n(dry run - no data written to disk)");
                    }
                }
                Err(e) => {
                    tracing::error!("Import failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Table { competition, group } => {
            let storage = StorageConfig::new(PathBuf::from(&cli.data_dir));
            let competition_id = resolve_competition_id(&storage, &competition)?;

            let teams: Vec<Team> =
                JsonlReader::for_entity(&storage, EntityType::Team, &competition_id).read_all()?;
            let memberships: Vec<Membership> =
                JsonlReader::for_entity(&storage, EntityType::Membership, &competition_id)
                    .read_all()?;
            let matches: Vec<Match> =
                JsonlReader::for_entity(&storage, EntityType::Match, &competition_id).read_all()?;

            let table = compute_standings(&teams, &memberships, &matches, group.as_deref());
            if table.is_empty() {
                println!("No standings for competition: {}", competition);
                return Ok(());
            }

            let header = format!(
                "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  {}",
                "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts", "Form"
            );
            let mut last_group: Option<String> = None;
            let mut first = true;
            for entry in &table {
                if first || entry.group_name != last_group {
                    if !first {
                        println!();
                    }
                    if let Some(g) = &entry.group_name {
                        println!("=== Group {} ===", g);
                    }
                    println!("{}", header);
                    last_group = entry.group_name.clone();
                    first = false;
                }
                println!(
                    "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  {}",
                    entry.position,
                    entry.team.name,
                    entry.played,
                    entry.won,
                    entry.drawn,
                    entry.lost,
                    entry.goals_for,
                    entry.goals_against,
                    entry.goal_difference,
                    entry.points,
                    entry.form
                );
            }
        }
        Commands::Competitions => {
            let storage = StorageConfig::new(PathBuf::from(&cli.data_dir));
            let registry = read_competitions(&storage)?;
            if registry.is_empty() {
                println!("No competitions registered.");
                println!("Use `import` to load a competition snapshot.");
            } else {
                println!("=== Competitions ({}) ===\n", registry.len());
                for c in &registry {
                    let competition_id = c.id.as_str();
                    let teams = JsonlReader::<Team>::for_entity(
                        &storage,
                        EntityType::Team,
                        competition_id,
                    )
                    .read_all()
                    .map(|v| v.len())
                    .unwrap_or(0);
                    let matches = JsonlReader::<Match>::for_entity(
                        &storage,
                        EntityType::Match,
                        competition_id,
                    )
                    .read_all()
                    .map(|v| v.len())
                    .unwrap_or(0);
                    println!("  {} [{}] — {} teams, {} matches", c.name, c.slug, teams, matches);
                    println!("    ID: {}", c.id);
                }
            }
        }
    }

    Ok(())
}
