use std::ffi::OsString;

use clap::Parser;
use clap::builder::FalseyValueParser;
use log::LevelFilter;

/// Environment variable holding the log level
pub const LOG_ENV: &str = "JOBQ_LOG";

/// Environment variable that turns off screen clearing when set
pub const NO_CLEAR_ENV: &str = "JOBQ_NO_CLEAR";

/// Interactive job queue simulator.
#[derive(Parser, Debug)]
#[command(name = "jobq", version, about)]
pub struct Args {
    /// Do not clear the terminal before each redraw.
    #[arg(
        long,
        env = NO_CLEAR_ENV,
        action = clap::ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_clear: bool,

    /// Maximum level written to stderr.
    #[arg(long, env = LOG_ENV, value_enum, ignore_case = true, default_value = "warn")]
    pub log: LogLevel,
}

/// Log levels accepted on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Shell settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Clear the terminal before each redraw
    pub clear_screen: bool,

    /// Maximum level passed to the logger
    pub log_level: LevelFilter,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            log_level: LogLevel::default().into(),
        }
    }
}

impl From<Args> for ShellConfig {
    fn from(args: Args) -> Self {
        Self {
            clear_screen: !args.no_clear,
            log_level: args.log.into(),
        }
    }
}

impl ShellConfig {
    /// Defaults, then environment, then command line. Exits with usage on
    /// bad input.
    pub fn load() -> Self {
        Args::parse().into()
    }

    /// Same as [`ShellConfig::load`] over an explicit argument list.
    /// The first item is the program name.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Args::try_parse_from(args).map(Into::into)
    }
}
