use crate::config::{Config, API_KEY_ENV};
use crate::i18n::Locale;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sign in to an Identity Toolkit (Firebase Authentication) account from the terminal
#[derive(Parser, Debug)]
#[command(name = "signin", version, about = "Sign in to an Identity Toolkit account from the terminal", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of ~/.config/signin/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Pre-fill the email field
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Language of the messages (en, ru); overrides the config file
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<Locale>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the configuration file location and effective settings
    Config,
    /// Print the log file location
    Logs,
}

impl Cli {
    /// Config file selected by `--config` or the default location
    pub fn config_path(&self) -> PathBuf {
        self.config
            .as_deref()
            .map(crate::utils::expand_path)
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Load the config file and apply command-line overrides
    pub fn load_config(&self) -> Result<Config> {
        let config_path = self.config_path();
        let mut config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        Ok(config)
    }

    /// Theme after applying `--no-colors` and `NO_COLOR`
    pub fn theme_type(&self, config: &Config) -> ThemeType {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if self.no_colors || no_color_env {
            ThemeType::NoColor
        } else {
            config.theme.parse().unwrap_or_default()
        }
    }

    /// Run a subcommand. Returns false when the TUI should start instead.
    pub fn execute(&self) -> Result<bool> {
        match self.command {
            Some(Commands::Config) => self.cmd_config().map(|_| true),
            Some(Commands::Logs) => Self::cmd_logs().map(|_| true),
            None => Ok(false),
        }
    }

    fn cmd_config(&self) -> Result<()> {
        let config_path = self.config_path();
        let config = self.load_config()?;
        for line in describe_config(&config_path, &config) {
            println!("{}", line);
        }
        Ok(())
    }

    fn cmd_logs() -> Result<()> {
        let log_file = crate::utils::get_log_dir().join("signin.log");
        println!("{}", log_file.display());
        Ok(())
    }
}

/// Human-readable summary of the effective settings; the API key is never printed
fn describe_config(config_path: &std::path::Path, config: &Config) -> Vec<String> {
    let api_key = match (
        std::env::var(API_KEY_ENV).is_ok_and(|v| !v.trim().is_empty()),
        config.auth.resolved_api_key().is_some(),
    ) {
        (true, _) => format!("set (from {})", API_KEY_ENV),
        (false, true) => "set".to_string(),
        (false, false) => "not set".to_string(),
    };

    vec![
        config_path.display().to_string(),
        format!("endpoint:        {}", config.auth.endpoint),
        format!("api key:         {}", api_key),
        format!("timeout:         {}s", config.auth.timeout_secs),
        format!("locale:          {}", config.locale),
        format!("submit delay:    {}ms", config.submit_delay_ms),
        format!("theme:           {}", config.theme),
        format!("keymap preset:   {}", config.keymap.preset.name()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "signin",
            "--email",
            "me@example.com",
            "--locale",
            "ru",
            "--no-colors",
        ]);
        assert_eq!(cli.email.as_deref(), Some("me@example.com"));
        assert_eq!(cli.locale, Some(Locale::Ru));
        assert!(cli.no_colors);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_config_subcommand() {
        let cli = Cli::parse_from(["signin", "config", "--config", "/tmp/x.toml"]);
        assert!(matches!(cli.command, Some(Commands::Config)));
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/x.toml"));
    }

    #[test]
    fn test_rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["signin", "--locale", "fr"]).is_err());
    }

    #[test]
    fn test_describe_config_hides_api_key() {
        let mut config = Config::default();
        config.auth.api_key = Some("super-secret-key".to_string());
        let lines = describe_config(std::path::Path::new("/tmp/config.toml"), &config);
        assert!(lines.iter().all(|line| !line.contains("super-secret-key")));
        assert!(lines.iter().any(|line| line.starts_with("locale:")));
    }
}
