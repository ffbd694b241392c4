//! Host configuration: a RON file in the user's config directory, overridden
//! by command-line flags.

use clap::Parser;
use popout_timer::{SessionInfo, Task};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "popout-timer";
const CONFIG_FILE_NAME: &str = "config.ron";

/// Default countdown length: one 25 minute block.
const DEFAULT_DURATION_SECS: f64 = 25.0 * 60.0;

/// Command-line flags.
#[derive(Debug, Default, Parser)]
#[command(name = "popout-timer", version, about = "Floating study timer")]
pub struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Countdown length in seconds
    #[arg(long)]
    pub duration: Option<f64>,
    /// Title of the task being timed
    #[arg(long)]
    pub task: Option<String>,
    /// Session number shown under the timer
    #[arg(long)]
    pub session: Option<u32>,
}

/// Errors that can occur when loading the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: ron::de::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timer_duration_secs: f64,
    pub task_title: Option<String>,
    pub session_number: Option<u32>,
    pub allocated_hours: Option<f64>,
    /// Whether the popout is open when the app starts
    pub open_on_start: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timer_duration_secs: DEFAULT_DURATION_SECS,
            task_title: None,
            session_number: None,
            allocated_hours: None,
            open_on_start: true,
        }
    }
}

impl AppConfig {
    /// Applies command-line overrides on top of the file values.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(duration) = cli.duration {
            self.timer_duration_secs = duration;
        }
        if let Some(task) = &cli.task {
            self.task_title = Some(task.clone());
        }
        if let Some(session) = cli.session {
            self.session_number = Some(session);
        }
        self
    }

    pub fn task(&self) -> Option<Task> {
        self.task_title
            .as_ref()
            .map(|title| Task { title: title.clone() })
    }

    /// Session descriptor, present when either session field is configured.
    pub fn session(&self) -> Option<SessionInfo> {
        if self.session_number.is_none() && self.allocated_hours.is_none() {
            return None;
        }
        Some(SessionInfo {
            allocated_hours: self.allocated_hours.unwrap_or(0.0),
            session_number: self.session_number,
        })
    }
}

/// Returns the default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads the config file at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    ron::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the effective config. Load failures fall back to the defaults and
/// are returned alongside so the caller can report them.
pub fn resolve(cli: &Cli) -> (AppConfig, Option<ConfigError>) {
    let path = cli.config.clone().or_else(default_config_path);
    let (config, error) = match path {
        Some(path) => match load_config(&path) {
            Ok(config) => (config, None),
            Err(err) => {
                log::warn!("{err}");
                (AppConfig::default(), Some(err))
            }
        },
        None => {
            log::warn!("No config directory available, using defaults");
            (AppConfig::default(), None)
        }
    };
    (config.with_cli(cli), error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config() {
        let config: AppConfig =
            ron::from_str("(task_title: Some(\"Linear algebra\"), session_number: Some(3))")
                .unwrap();
        assert_eq!(config.task_title.as_deref(), Some("Linear algebra"));
        assert_eq!(config.session_number, Some(3));
        assert_eq!(config.timer_duration_secs, DEFAULT_DURATION_SECS);
        assert!(config.open_on_start);
    }

    #[test]
    fn cli_overrides_file_values() {
        let file = AppConfig {
            timer_duration_secs: 600.0,
            task_title: Some("Reading".into()),
            ..AppConfig::default()
        };
        let cli = Cli {
            duration: Some(90.0),
            task: Some("Essay".into()),
            ..Cli::default()
        };
        let config = file.with_cli(&cli);
        assert_eq!(config.timer_duration_secs, 90.0);
        assert_eq!(config.task().map(|t| t.title), Some("Essay".to_string()));
    }

    #[test]
    fn cli_flags_parse() {
        let cli = Cli::parse_from(["popout-timer", "--duration", "120", "--session", "2"]);
        assert_eq!(cli.duration, Some(120.0));
        assert_eq!(cli.session, Some(2));
        assert!(cli.task.is_none());
    }

    #[test]
    fn session_only_when_configured() {
        assert_eq!(AppConfig::default().session(), None);

        let config = AppConfig {
            session_number: Some(4),
            ..AppConfig::default()
        };
        assert_eq!(
            config.session(),
            Some(SessionInfo {
                allocated_hours: 0.0,
                session_number: Some(4),
            })
        );
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("popout-timer-test-missing/config.ron");
        let config = load_config(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn invalid_file_reports_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "popout-timer-test-invalid-{}.ron",
            std::process::id()
        ));
        std::fs::write(&path, "(timer_duration_secs: \"soon\")").unwrap();
        let result = load_config(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
