mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::{LeagueConfig, SourcesConfig, TeamConfig, TeamRosters};

use schema::{RosterMap, TopLevelKeys};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LeagueError;

/// Roster file read from the working directory when present
pub const LOCAL_CONFIG_FILE: &str = "teams.json";

/// Get the config directory path (~/.config/disc-league/)
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("disc-league")
}

/// Default config file path.
///
/// `./teams.json` wins when it exists, otherwise ~/.config/disc-league/league.yaml
pub fn get_config_path() -> PathBuf {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        local
    } else {
        get_config_dir().join("league.yaml")
    }
}

/// Ensure the parent directory of `path` exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Config file syntax, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse config text in the given format.
///
/// Accepts the full layout (`teams:` plus optional settings) or a plain
/// roster file whose top level is the owner map itself.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<LeagueConfig, LeagueError> {
    match format {
        ConfigFormat::Json => {
            let roster_map = serde_json::from_str::<TopLevelKeys>(content)
                .is_ok_and(|keys| keys.is_roster_map());
            if roster_map {
                serde_json::from_str::<RosterMap>(content).map(LeagueConfig::from)
            } else {
                serde_json::from_str(content)
            }
            .map_err(|e| LeagueError::Config(format!("invalid JSON: {}", e)))
        }
        ConfigFormat::Yaml => {
            let roster_map = serde_saphyr::from_str::<TopLevelKeys>(content)
                .is_ok_and(|keys| keys.is_roster_map());
            if roster_map {
                serde_saphyr::from_str::<RosterMap>(content).map(LeagueConfig::from)
            } else {
                serde_saphyr::from_str(content)
            }
            .map_err(|e| LeagueError::Config(format!("invalid YAML: {}", e)))
        }
    }
}

/// Load the league configuration from a YAML or JSON file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses [`get_config_path`]
///
/// # Errors
///
/// Returns [`LeagueError::Config`] if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The content does not match the schema (missing division keys,
///   non-string player names, duplicate owners, unknown keys)
pub fn load_config(path: Option<PathBuf>) -> Result<LeagueConfig, LeagueError> {
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        return Err(LeagueError::Config(format!(
            "config file not found at {}. Run `disc-league init` to create one",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(&config_path).map_err(|e| {
        LeagueError::Config(format!(
            "failed to read config file at {}: {}",
            config_path.display(),
            e
        ))
    })?;

    parse_config(&content, ConfigFormat::from_path(&config_path)).map_err(|e| match e {
        LeagueError::Config(msg) => {
            LeagueError::Config(format!("{} in {}", msg, config_path.display()))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("teams.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("TEAMS.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("league.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("league")), ConfigFormat::Yaml);
    }

    #[test]
    fn test_parse_json_config() {
        let json = r#"{"teams": {"Ann": {"mpo": ["P1", "P2", "P3", "P4"], "fpo": ["F1", "F2"]}}}"#;
        let config = parse_config(json, ConfigFormat::Json).unwrap();
        assert_eq!(config.teams.len(), 1);
        assert_eq!(config.teams[0].owner, "Ann");
    }

    #[test]
    fn test_parse_plain_roster_json() {
        let json = r#"{"Ann": {"mpo": ["P1","P2","P3","P4"], "fpo": ["F1","F2"]},
                       "Ben": {"mpo": ["P5","P6","P7","P8"], "fpo": ["F3","F4"]}}"#;
        let config = parse_config(json, ConfigFormat::Json).unwrap();
        let owners: Vec<_> = config.teams.iter().map(|t| t.owner.as_str()).collect();
        assert_eq!(owners, vec!["Ann", "Ben"]);
        assert_eq!(config.teams[0].rosters.mpo, vec!["P1", "P2", "P3", "P4"]);
        assert_eq!(config.source_url(crate::division::Division::Fpo), "https://statmando.com/rankings/dgpt/fpo");
    }

    #[test]
    fn test_parse_plain_roster_yaml() {
        let yaml = "Ann:\n  mpo: [P1, P2, P3, P4]\n  fpo: [F1, F2]\n";
        let config = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.teams[0].owner, "Ann");
        assert_eq!(config.teams[0].rosters.fpo, vec!["F1", "F2"]);
    }

    #[test]
    fn test_plain_roster_schema_still_checked() {
        let json = r#"{"Ann": {"mpo": ["P1","P2","P3","P4"]}}"#;
        assert!(matches!(
            parse_config(json, ConfigFormat::Json),
            Err(LeagueError::Config(_))
        ));
        let json = r#"{"Ann": {"mpo": ["P1",2,"P3","P4"], "fpo": ["F1","F2"]}}"#;
        assert!(parse_config(json, ConfigFormat::Json).is_err());
    }

    #[test]
    fn test_load_plain_teams_json_file() {
        let path = env::temp_dir().join(format!("disc-league-plain-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"Ann": {"mpo": ["P1","P2","P3","P4"], "fpo": ["F1","F2"]}}"#,
        )
        .unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.teams.len(), 1);
        assert_eq!(config.teams[0].owner, "Ann");
    }

    #[test]
    fn test_load_missing_file() {
        let path = env::temp_dir().join("disc-league-test-does-not-exist.yaml");
        let err = load_config(Some(path)).unwrap_err();
        assert!(matches!(err, LeagueError::Config(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_malformed_file_names_path() {
        let path = env::temp_dir().join(format!("disc-league-bad-{}.json", std::process::id()));
        fs::write(&path, r#"{"teams": {"Ann": {"mpo": []}}}"#).unwrap();

        let err = load_config(Some(path.clone())).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(matches!(err, LeagueError::Config(_)));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_load_yaml_file() {
        let path = env::temp_dir().join(format!("disc-league-ok-{}.yaml", std::process::id()));
        fs::write(
            &path,
            "teams:\n  Ann:\n    mpo: [P1, P2, P3, P4]\n    fpo: [F1, F2]\n",
        )
        .unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.teams[0].rosters.fpo, vec!["F1", "F2"]);
    }
}
