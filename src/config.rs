// config.rs

use std::num::NonZeroUsize;
use std::str::FromStr;

use argh::FromArgs;
use log::LevelFilter;

use crate::error::ConfigError;
use crate::history::DEFAULT_CAPACITY;

pub const LOG_ENV: &str = "MYSH_LOG";

#[derive(FromArgs, Debug, PartialEq)]
/// A small interactive shell with bounded history and !N re-execution.
pub struct Cli {
    /// how many commands to remember (positive, default 10)
    #[argh(option, short = 'h', from_str_fn(parse_capacity))]
    pub history: Option<NonZeroUsize>,

    /// start with verbose mode on
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

fn parse_capacity(value: &str) -> Result<NonZeroUsize, String> {
    value
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| ConfigError::InvalidCapacity(value.to_string()).to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub capacity: NonZeroUsize,
    pub verbose: bool,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            verbose: false,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Combines parsed flags with the value of `MYSH_LOG`, if set.
    pub fn from_cli(cli: Cli, log_env: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let log_level = match log_env.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => LevelFilter::from_str(value)
                .map_err(|_| ConfigError::InvalidLogLevel(value.to_string()))?,
            None => defaults.log_level,
        };
        Ok(Self {
            capacity: cli.history.unwrap_or(defaults.capacity),
            verbose: cli.verbose,
            log_level,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let cli: Cli = argh::from_env();
        let log_env = std::env::var(LOG_ENV).ok();
        Self::from_cli(cli, log_env.as_deref())
    }
}
