use std::{fmt::Display, fmt::Formatter, str::FromStr};

use clap::Parser;
use log::{info, LevelFilter};

/// Environment variable holding the log level. The command line has no room for a verbosity flag.
pub const LOG_ENV: &str = "BURROWS_LOG";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }

    /// Read the verbosity from a log level name. Unknown or missing names give Warnings.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("off") | Some("quiet") => Verbosity::Quiet,
            Some("error") => Verbosity::Errors,
            Some("info") => Verbosity::Info,
            Some("debug") => Verbosity::Debug,
            Some("trace") => Verbosity::Trace,
            _ => Verbosity::Warnings,
        }
    }
}

/// Encode (`-`) or decode (`+`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Mode::Encode),
            "+" => Ok(Mode::Decode),
            other => Err(format!(
                "Bad command line argument: {} (use - to encode, + to decode)",
                other
            )),
        }
    }
}

/// Command line: one mode flag, data on stdin, result on stdout.
#[derive(Parser, Debug)]
#[clap(about, disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// `-` to encode, `+` to decode
    pub mode: Mode,
}

#[derive(Debug)]
pub struct BwOpts {
    /// Encode/Decode
    pub op_mode: Mode,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl BwOpts {
    pub fn new(op_mode: Mode) -> Self {
        Self {
            op_mode,
            verbose: Verbosity::Warnings,
        }
    }
}

/// Parse the command line and environment. A missing or bad mode flag exits here, before any
/// data is read.
pub fn bwopts_init() -> BwOpts {
    let args = Args::parse();
    let mut cli = BwOpts::new(args.mode);
    cli.verbose = Verbosity::from_env_value(std::env::var(LOG_ENV).ok().as_deref());

    // Set the log level
    log::set_max_level(cli.verbose.level_filter());
    info!("Operational mode set to {}", cli.op_mode);
    cli
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mode_test() {
        assert_eq!("-".parse::<Mode>(), Ok(Mode::Encode));
        assert_eq!("+".parse::<Mode>(), Ok(Mode::Decode));
        assert!("".parse::<Mode>().is_err());
        assert!("-d".parse::<Mode>().is_err());
    }

    #[test]
    fn args_test() {
        assert_eq!(Args::try_parse_from(["bw", "-"]).unwrap().mode, Mode::Encode);
        assert_eq!(Args::try_parse_from(["bw", "+"]).unwrap().mode, Mode::Decode);
        assert!(Args::try_parse_from(["bw"]).is_err());
        assert!(Args::try_parse_from(["bw", "x"]).is_err());
        assert!(Args::try_parse_from(["bw", "-", "+"]).is_err());
    }

    #[test]
    fn no_help_or_version_flags_test() {
        // These must be usage errors (stderr, non-zero exit), not help or version output.
        for flag in ["-V", "--version", "-h", "--help"] {
            let err = Args::try_parse_from(["bw", flag]).unwrap_err();
            assert!(err.use_stderr(), "{}", flag);
            assert_ne!(err.exit_code(), 0, "{}", flag);
        }
    }

    #[test]
    fn verbosity_test() {
        assert_eq!(Verbosity::from_env_value(None), Verbosity::Warnings);
        assert_eq!(Verbosity::from_env_value(Some("DEBUG")), Verbosity::Debug);
        assert_eq!(Verbosity::from_env_value(Some("off")), Verbosity::Quiet);
        assert_eq!(Verbosity::from_env_value(Some("nonsense")), Verbosity::Warnings);
        assert_eq!(Verbosity::Trace.level_filter(), LevelFilter::Trace);
    }
}
