//! Startup configuration for taskmate.
//!
//! Precedence (highest to lowest): CLI flags > environment > defaults.

use std::env;

/// Default backing-file path, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "tasks.txt";

/// Environment variable overriding the backing-file path.
pub const DATA_FILE_ENV: &str = "TASKMATE_FILE";

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the backing file holding the saved task list.
    pub data_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration from CLI args and the process environment.
    pub fn load(cli: &CliArgs) -> Self {
        Self::resolve(cli, env::var(DATA_FILE_ENV).ok())
    }

    /// Resolve from explicit sources. Takes the env value as a parameter so
    /// tests do not have to mutate process-wide environment state.
    fn resolve(cli: &CliArgs, env_file: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(file) = env_file {
            config.data_file = file;
        }
        if let Some(ref file) = cli.file {
            config.data_file = file.clone();
        }
        config
    }
}

/// Raw CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// `-h` / `--help`
    pub help: bool,
    /// `-V` / `--version`
    pub version: bool,
    /// `-f` / `--file <PATH>`
    pub file: Option<String>,
}

/// Parse CLI arguments from an iterator.
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    // Skip program name
    args.next();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            "-f" | "--file" => cli.file = args.next(),
            _ => {}
        }
    }
    cli
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CliArgs {
        let mut full = vec!["taskmate".to_string()];
        full.extend(list.iter().map(|s| s.to_string()));
        parse_args(full)
    }

    #[test]
    fn test_default_data_file() {
        let config = Config::resolve(&CliArgs::default(), None);
        assert_eq!(config.data_file, DEFAULT_DATA_FILE);
    }

    #[test]
    fn test_env_overrides_default() {
        let config = Config::resolve(&CliArgs::default(), Some("/tmp/env.txt".into()));
        assert_eq!(config.data_file, "/tmp/env.txt");
    }

    #[test]
    fn test_cli_overrides_env() {
        let cli = args(&["--file", "/tmp/cli.txt"]);
        let config = Config::resolve(&cli, Some("/tmp/env.txt".into()));
        assert_eq!(config.data_file, "/tmp/cli.txt");
    }

    #[test]
    fn test_parse_args_flags() {
        let cli = args(&["-h"]);
        assert!(cli.help);

        let cli = args(&["--version"]);
        assert!(cli.version);

        let cli = args(&["-f", "mine.txt"]);
        assert_eq!(cli.file.as_deref(), Some("mine.txt"));
    }

    #[test]
    fn test_parse_args_ignores_unknown() {
        let cli = args(&["--wat", "-f", "mine.txt"]);
        assert_eq!(cli.file.as_deref(), Some("mine.txt"));
        assert!(!cli.help);
    }
}
