use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{ensure_parent_dir, get_config_path, ConfigFormat, LeagueConfig, TeamConfig, TeamRosters};
use crate::division::Division;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Split a comma-separated line of player names, dropping blanks.
fn split_names(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ask for one division's roster until it has enough players to score.
fn prompt_roster(owner: &str, division: Division) -> Result<Vec<String>> {
    let needed = division.top_count();
    loop {
        let line = prompt(&format!(
            "  {} {} players (comma-separated, at least {}): ",
            owner, division, needed
        ))?;
        let names = split_names(&line);
        if names.len() >= needed {
            return Ok(names);
        }
        println!("  Need at least {} players, got {}. Try again.", needed, names.len());
    }
}

/// Serialize and atomically write a league config.
pub fn write_config(path: &Path, config: &LeagueConfig) -> Result<()> {
    let text = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .context("Failed to serialize config")?,
        ConfigFormat::Yaml => serde_saphyr::to_string(config)
            .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?,
    };

    ensure_parent_dir(path)?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}

/// Run the interactive init wizard to create a league config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
/// `force` skips the overwrite confirmation.
pub fn run_init_wizard(default_path: Option<PathBuf>, force: bool) -> Result<()> {
    println!();
    println!("Disc League Configuration Wizard");
    println!("================================");
    println!();
    println!(
        "Each team scores its top {} {} and top {} {} players.",
        Division::Mpo.top_count(),
        Division::Mpo,
        Division::Fpo.top_count(),
        Division::Fpo
    );
    println!("Player names must match the ranking pages exactly (the trailing '*' is ignored).");
    println!();

    let mut teams: Vec<TeamConfig> = Vec::new();
    loop {
        let owner = loop {
            let o = prompt("Team owner: ")?;
            if o.is_empty() {
                println!("  Owner name is required.");
            } else if teams.iter().any(|t| t.owner == o) {
                println!("  '{}' already has a team.", o);
            } else {
                break o;
            }
        };

        let mpo = prompt_roster(&owner, Division::Mpo)?;
        let fpo = prompt_roster(&owner, Division::Fpo)?;
        teams.push(TeamConfig {
            owner,
            rosters: TeamRosters { mpo, fpo },
        });

        if !prompt_yes_no("Add another team?", true)? {
            break;
        }
        println!();
    }

    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() && !force {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let config = LeagueConfig {
        sources: None,
        request_timeout_secs: None,
        teams,
    };
    write_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `disc-league` to see the standings.");

    Ok(())
}
