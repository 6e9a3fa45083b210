//! CLI argument definitions for the Parley demo.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use parley_core::config::ParleyConfig;

/// Parley: a line-oriented conversation demo over stdin/stdout.
#[derive(Parser, Debug, Default)]
#[command(name = "parley", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Seed for the example answers shown by duration prompts.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Print plain text without colors.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > PARLEY_CONFIG env var > ~/.parley/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("PARLEY_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config: &ParleyConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.general.log_level.clone())
    }

    /// Fold the display and example flags into `config`.
    pub fn apply_overrides(&self, config: &mut ParleyConfig) {
        if let Some(seed) = self.seed {
            config.time.example_seed = Some(seed);
        }
        if self.no_color {
            config.display.color = false;
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".parley").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".parley").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::parse_from([
            "parley",
            "-c",
            "/tmp/parley.toml",
            "-l",
            "debug",
            "--seed",
            "42",
            "--no-color",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/parley.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.seed, Some(42));
        assert!(args.no_color);
    }

    #[test]
    fn test_config_flag_wins() {
        let args = CliArgs::parse_from(["parley", "--config", "custom.toml"]);
        assert_eq!(args.resolve_config_path(), PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_default_config_path_is_toml() {
        let path = default_config_path();
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        let config = ParleyConfig::default();
        let args = CliArgs::parse_from(["parley"]);
        assert_eq!(args.resolve_log_level(&config), "info");

        let args = CliArgs::parse_from(["parley", "-l", "trace"]);
        assert_eq!(args.resolve_log_level(&config), "trace");
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = ParleyConfig::default();
        let args = CliArgs::parse_from(["parley", "--seed", "7", "--no-color"]);
        args.apply_overrides(&mut config);

        assert_eq!(config.time.example_seed, Some(7));
        assert!(!config.display.color);
    }

    #[test]
    fn test_no_flags_leave_config_untouched() {
        let mut config = ParleyConfig::default();
        CliArgs::parse_from(["parley"]).apply_overrides(&mut config);
        assert_eq!(config, ParleyConfig::default());
    }
}
