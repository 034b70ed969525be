use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use crate::error::Error;
use clap::arg_enum;
use derivative::*;
use log::LevelFilter;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

/// How many test suites to ask the service for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit {
    All,
    Count(u32),
}

#[derive(StructOpt, Debug, Default, Clone, PartialEq)]
pub struct SuiteFilter {
    /// The name of the test suite
    #[structopt(long, short = "n")]
    pub name: Option<String>,

    /// The name of the tree/job
    #[structopt(long, short = "r")]
    pub tree: Option<String>,

    /// The kernel version
    #[structopt(long, short = "k")]
    pub kernel: Option<String>,

    /// The name of the defconfig
    #[structopt(long, short = "d")]
    pub defconfig: Option<String>,

    /// The name of the board
    #[structopt(long, short = "b")]
    pub board: Option<String>,
}

#[derive(StructOpt, Derivative)]
#[derivative(Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// The API token to use
    #[derivative(Debug = "ignore")]
    #[structopt(long, short = "t", env = "KCI_API_TOKEN", hide_env_values = true)]
    pub token: String,

    #[structopt(flatten)]
    pub filter: SuiteFilter,

    /// How many test suite results to retrieve, use "all" to retrieve all of them
    #[structopt(long, short = "l", default_value = "5")]
    pub limit: Limit,

    /// Settings file with the backend location. Supported: YAML, JSON, TOML, HJSON
    #[structopt(long, short = "c", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,
}

impl FromStr for Limit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Limit::All);
        }
        s.trim()
            .parse::<u32>()
            .map(Limit::Count)
            .map_err(|_| Error::InvalidLimit(s.to_owned()))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Limit::All => f.write_str("all"),
            Limit::Count(count) => write!(f, "{}", count),
        }
    }
}

impl Into<LevelFilter> for LogLevel {
    fn into(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
