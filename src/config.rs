//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "focus-spark")]
#[command(about = "A session server for a motivational focus timer")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Focus session length in minutes
    #[arg(short, long, default_value = "25")]
    pub focus_minutes: u64,

    /// How long a reward ad overlay stays up, in seconds
    #[arg(long, default_value = "3")]
    pub ad_seconds: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Reject settings the timer cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if self.focus_minutes == 0 {
            return Err("--focus-minutes must be at least 1".to_string());
        }
        if self.focus_minutes.checked_mul(60).is_none() {
            return Err(format!(
                "--focus-minutes must be at most {}",
                u64::MAX / 60
            ));
        }
        Ok(())
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Session length in seconds; saturates for values `validate` rejects
    pub fn focus_seconds(&self) -> u64 {
        self.focus_minutes.saturating_mul(60)
    }

    pub fn ad_duration(&self) -> Duration {
        Duration::from_secs(self.ad_seconds)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_standard_pomodoro() {
        let config = Config::try_parse_from(["focus-spark"]).unwrap();
        assert_eq!(config.focus_seconds(), 1500);
        assert_eq!(config.ad_duration(), Duration::from_secs(3));
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_length_session_is_rejected() {
        let config = Config::try_parse_from(["focus-spark", "--focus-minutes", "0"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_session_is_rejected() {
        let too_long = (u64::MAX / 60 + 1).to_string();
        let config = Config::try_parse_from(["focus-spark", "--focus-minutes", &too_long]).unwrap();
        assert!(config.validate().is_err());
        assert_eq!(config.focus_seconds(), u64::MAX);

        let longest = (u64::MAX / 60).to_string();
        let config = Config::try_parse_from(["focus-spark", "--focus-minutes", &longest]).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.focus_seconds(), u64::MAX / 60 * 60);
    }

    #[test]
    fn verbose_switches_to_debug() {
        let config = Config::try_parse_from(["focus-spark", "-v", "-p", "8080"]).unwrap();
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.port, 8080);
    }
}
