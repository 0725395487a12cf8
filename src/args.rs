//! Command-line argument parsing and processing.
//!
//! Service flags are mutually exclusive and resolved by priority rather than
//! position: help, then version, then sun, time and alarms. Anything the
//! parser does not recognise turns the whole invocation into a silent no-op,
//! as does an invocation without a service flag.

use chrono::{DateTime, Utc};

use crate::time_source;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Sun report for the configured locale
    Sun,
    /// Current local time at the configured locale
    Time,
    /// Today's alarms for the configured locale
    Alarms,
    /// No service requested, or the arguments were not understood
    Nothing,
}

/// Result of parsing command-line arguments.
#[derive(Debug, PartialEq)]
pub struct ParsedArgs {
    pub action: CliAction,
    /// Directory holding `astronomical.toml`, from `--config`
    pub config_dir: Option<String>,
    /// Fixed UTC instant to evaluate services at, from `--at`
    pub at: Option<DateTime<Utc>>,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments, program name first
    ///   (typically from std::env::args())
    ///
    /// # Returns
    /// ParsedArgs containing the determined action
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut display_help = false;
        let mut display_version = false;
        let mut sun = false;
        let mut time = false;
        let mut alarms = false;
        let mut unknown_arg_found = false;
        let mut config_dir: Option<String> = None;
        let mut at: Option<DateTime<Utc>> = None;

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            match args_vec[i].as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-v" => display_version = true,
                "--sun" | "-s" => sun = true,
                "--time" | "-t" => time = true,
                "--alarms" | "-a" => alarms = true,
                "--config" | "-c" => match args_vec.get(i + 1) {
                    Some(dir) if !dir.starts_with('-') => {
                        config_dir = Some(dir.clone());
                        i += 1;
                    }
                    _ => unknown_arg_found = true,
                },
                "--at" => match args_vec.get(i + 1).map(|s| time_source::parse_datetime(s)) {
                    Some(Ok(instant)) => {
                        at = Some(instant);
                        i += 1;
                    }
                    _ => unknown_arg_found = true,
                },
                _ => unknown_arg_found = true,
            }
            i += 1;
        }

        let action = if unknown_arg_found {
            CliAction::Nothing
        } else if display_help {
            CliAction::ShowHelp
        } else if display_version {
            CliAction::ShowVersion
        } else if sun {
            CliAction::Sun
        } else if time {
            CliAction::Time
        } else if alarms {
            CliAction::Alarms
        } else {
            CliAction::Nothing
        };

        ParsedArgs {
            action,
            config_dir,
            at,
        }
    }

    /// Parse arguments from the process environment.
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Prints the bare version number.
pub fn display_version_info() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("astronomical [OPTIONS] <SERVICE>");
    log_block_start!("Services (first match wins):");
    log_indented!("-s, --sun              Sunrise, sunset and the sun's position");
    log_indented!("-t, --time             Current local time at the locale");
    log_indented!("-a, --alarms           Today's alarms from the configured rules");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("    --at <datetime>    Evaluate at a fixed UTC instant");
    log_indented!("                       Format: \"YYYY-MM-DD HH:MM:SS\"");
    log_indented!("-h, --help             Print help information");
    log_indented!("-v, --version          Print version information");
    log_block_start!("Environment:");
    log_indented!("LOG_LEVEL              DEBUG, INFO, WARNING, ERROR or CRITICAL");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn action_of(args: &[&str]) -> CliAction {
        ParsedArgs::parse(args.iter()).action
    }

    #[test]
    fn test_parse_no_args() {
        let parsed = ParsedArgs::parse(vec!["astronomical"]);
        assert_eq!(
            parsed,
            ParsedArgs {
                action: CliAction::Nothing,
                config_dir: None,
                at: None,
            }
        );
    }

    #[test]
    fn test_parse_service_flags() {
        assert_eq!(action_of(&["astronomical", "-s"]), CliAction::Sun);
        assert_eq!(action_of(&["astronomical", "--sun"]), CliAction::Sun);
        assert_eq!(action_of(&["astronomical", "-t"]), CliAction::Time);
        assert_eq!(action_of(&["astronomical", "--time"]), CliAction::Time);
        assert_eq!(action_of(&["astronomical", "-a"]), CliAction::Alarms);
        assert_eq!(action_of(&["astronomical", "--alarms"]), CliAction::Alarms);
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(action_of(&["astronomical", "-h"]), CliAction::ShowHelp);
        assert_eq!(action_of(&["astronomical", "--help"]), CliAction::ShowHelp);
        assert_eq!(action_of(&["astronomical", "-v"]), CliAction::ShowVersion);
        assert_eq!(
            action_of(&["astronomical", "--version"]),
            CliAction::ShowVersion
        );
    }

    #[test]
    fn test_priority_ignores_position() {
        assert_eq!(action_of(&["astronomical", "-a", "-s"]), CliAction::Sun);
        assert_eq!(action_of(&["astronomical", "-t", "-s", "-a"]), CliAction::Sun);
        assert_eq!(action_of(&["astronomical", "-a", "-t"]), CliAction::Time);
        assert_eq!(action_of(&["astronomical", "-s", "-v"]), CliAction::ShowVersion);
        assert_eq!(action_of(&["astronomical", "-v", "-h"]), CliAction::ShowHelp);
    }

    #[test]
    fn test_unknown_argument_does_nothing() {
        assert_eq!(action_of(&["astronomical", "--moon"]), CliAction::Nothing);
        assert_eq!(action_of(&["astronomical", "-s", "extra"]), CliAction::Nothing);
        assert_eq!(action_of(&["astronomical", "-v", "-x"]), CliAction::Nothing);
    }

    #[test]
    fn test_parse_config_dir() {
        let parsed = ParsedArgs::parse(vec!["astronomical", "-c", "/tmp/astro", "-t"]);
        assert_eq!(parsed.action, CliAction::Time);
        assert_eq!(parsed.config_dir.as_deref(), Some("/tmp/astro"));

        let parsed = ParsedArgs::parse(vec!["astronomical", "-s", "--config", "conf"]);
        assert_eq!(parsed.action, CliAction::Sun);
        assert_eq!(parsed.config_dir.as_deref(), Some("conf"));
    }

    #[test]
    fn test_config_without_directory_does_nothing() {
        assert_eq!(action_of(&["astronomical", "-s", "--config"]), CliAction::Nothing);
        assert_eq!(action_of(&["astronomical", "-c", "-s"]), CliAction::Nothing);
    }

    #[test]
    fn test_parse_at() {
        let parsed = ParsedArgs::parse(vec!["astronomical", "--at", "2024-06-21 04:30:00", "-a"]);
        assert_eq!(parsed.action, CliAction::Alarms);
        assert_eq!(
            parsed.at,
            Some(Utc.with_ymd_and_hms(2024, 6, 21, 4, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_invalid_at_does_nothing() {
        assert_eq!(action_of(&["astronomical", "-s", "--at"]), CliAction::Nothing);
        assert_eq!(
            action_of(&["astronomical", "-s", "--at", "tomorrow"]),
            CliAction::Nothing
        );
        assert_eq!(
            action_of(&["astronomical", "-s", "--at", "2024-02-30 00:00:00"]),
            CliAction::Nothing
        );
    }
}
