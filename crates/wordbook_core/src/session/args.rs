//! Command-line argument parsing.
//!
//! Invocation is `program <dictionary-key> <mode>` with `mode` one of
//! `-find` or `-write`. Both positionals accept leading hyphens, so mode
//! tokens are values, not flags. Clap's own help and error output is never
//! shown; every failure maps to `UsageError` and the fixed `USAGE` text.

use clap::{Arg, ArgMatches, Command};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Usage text printed on any malformed invocation.
pub const USAGE: &str = "Usage: program <dictionary> <mode>
Dictionaries: en-ru, de-ru, fr-ru
Modes: -find, -write
Example: program en-ru -find
";

const EXPECTED_ARGUMENTS: usize = 2;
const DICTIONARY_ARG: &str = "dictionary";
const MODE_ARG: &str = "mode";

/// Interactive mode run against the selected dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read-only lookups.
    Find,
    /// Insert-or-overwrite additions.
    Write,
}

impl Mode {
    /// Parses the command-line form (`-find` / `-write`).
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "-find" => Some(Self::Find),
            "-write" => Some(Self::Write),
            _ => None,
        }
    }

    /// Parses the switch-prompt form (`find` / `write`).
    pub fn from_answer(value: &str) -> Option<Self> {
        match value {
            "find" => Some(Self::Find),
            "write" => Some(Self::Write),
            _ => None,
        }
    }

    /// Name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::Write => "write",
        }
    }
}

/// Validated command-line request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub dictionary_key: String,
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Argument count other than two (program name excluded).
    WrongArgumentCount(usize),
    /// Second argument is not `-find` or `-write`.
    UnknownMode(String),
}

impl Display for UsageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongArgumentCount(count) => write!(
                f,
                "expected {EXPECTED_ARGUMENTS} arguments, got {count}"
            ),
            Self::UnknownMode(mode) => write!(f, "Unknown mode '{mode}'"),
        }
    }
}

impl Error for UsageError {}

/// Parses arguments that follow the program name.
///
/// # Errors
/// - `WrongArgumentCount` unless exactly two arguments are given.
/// - `UnknownMode` when the mode token is not recognized.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation, UsageError> {
    let matches = command()
        .try_get_matches_from(args.iter().map(|arg| arg.as_ref().to_string()))
        .map_err(|_| UsageError::WrongArgumentCount(args.len()))?;

    let key = positional(&matches, DICTIONARY_ARG);
    let mode = positional(&matches, MODE_ARG);
    let mode = Mode::from_flag(&mode).ok_or(UsageError::UnknownMode(mode))?;

    Ok(Invocation {
        dictionary_key: key,
        mode,
    })
}

fn command() -> Command {
    Command::new("program")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new(DICTIONARY_ARG)
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(Arg::new(MODE_ARG).required(true).allow_hyphen_values(true))
}

// Both positionals are `required`, so a successful match always holds them.
fn positional(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}
