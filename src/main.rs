use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use disc_league::error::LeagueError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_DATA: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the league standings (default if no subcommand)
    Standings,
    /// Show which players count toward each team's total
    Breakdown {
        /// Only show this owner's team
        owner: Option<String>,
    },
    /// Interactively create a league config file
    Init {
        /// Overwrite an existing config without asking
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "disc-league")]
#[command(about = "Fantasy disc golf league standings from live DGPT rankings", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ./teams.json, then ~/.config/disc-league/league.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn exit_code(err: &LeagueError) -> i32 {
    match err {
        LeagueError::Config(_)
        | LeagueError::AmbiguousMatch { .. }
        | LeagueError::InsufficientRoster { .. } => EXIT_CONFIG,
        LeagueError::Fetch { .. } => EXIT_NETWORK,
        LeagueError::Parse(_) | LeagueError::DuplicateRanking { .. } => EXIT_DATA,
    }
}

fn fail(err: LeagueError) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(exit_code(&err));
}

#[tokio::main]
async fn main() {
    disc_league::rankings::install_crypto_provider();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Standings);
    let config_path = cli.config.map(PathBuf::from);
    let start_time = Instant::now();

    if let Commands::Init { force } = command {
        if let Err(e) = disc_league::config::run_init_wizard(config_path, force) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = disc_league::config::load_config(config_path).unwrap_or_else(|e| fail(e));

    if cli.verbose {
        eprintln!("Loaded {} teams from config", config.teams.len());
        for team in &config.teams {
            eprintln!(
                "  {}: {} MPO, {} FPO",
                team.owner,
                team.rosters.mpo.len(),
                team.rosters.fpo.len()
            );
        }
    }

    if config.teams.is_empty() {
        eprintln!("No teams configured in config file.");
        eprintln!("Add teams to your config:");
        eprintln!("  teams:");
        eprintln!("    Ann:");
        eprintln!("      mpo: [\"Player 1\", \"Player 2\", \"Player 3\", \"Player 4\"]");
        eprintln!("      fpo: [\"Player 5\", \"Player 6\"]");
        std::process::exit(EXIT_CONFIG);
    }

    let store = disc_league::roster::RosterStore::load(&config).unwrap_or_else(|e| fail(e));

    // Validate rosters before touching the network
    if let Err(errors) = store.validate() {
        eprintln!("Roster errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let client = match disc_league::rankings::create_client(config.request_timeout()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {:#}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    let standings =
        disc_league::fetch::fetch_and_score_league(&client, &config, store, cli.verbose)
            .await
            .unwrap_or_else(|e| fail(e));

    for unranked in &standings.report.unranked {
        eprintln!(
            "Warning: {} player '{}' ({}) not found in rankings, scored as 0",
            unranked.division, unranked.name, unranked.owner
        );
    }

    let use_colors = !cli.no_color && disc_league::output::should_use_colors();

    match command {
        Commands::Breakdown { owner } => {
            let selected: Vec<_> = standings
                .scores
                .iter()
                .enumerate()
                .filter(|(_, score)| owner.as_deref().map_or(true, |o| score.owner == o))
                .collect();

            if selected.is_empty() {
                eprintln!(
                    "No team owned by '{}'. Owners: {}",
                    owner.as_deref().unwrap_or_default(),
                    standings
                        .teams
                        .iter()
                        .map(|t| t.owner.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                std::process::exit(EXIT_CONFIG);
            }

            let blocks: Vec<_> = selected
                .into_iter()
                .map(|(idx, score)| {
                    disc_league::output::format_breakdown(idx + 1, score, use_colors)
                })
                .collect();
            println!("{}", blocks.join("\n\n"));
        }
        _ => {
            println!(
                "{}",
                disc_league::output::format_standings(&standings.teams, use_colors)
            );
        }
    }

    if cli.verbose {
        eprintln!();
        eprintln!(
            "Total: {} teams in {:?}",
            standings.teams.len(),
            start_time.elapsed()
        );
    }

    std::process::exit(EXIT_SUCCESS);
}
