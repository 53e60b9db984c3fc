//! Command line parsing.

use std::error::Error;
use std::fmt;

use smallvec::SmallVec;

/// Most arguments a command line yields, command name included.
pub const MAX_ARGS: usize = 16;

/// Arguments of one command line, borrowed from the line.
pub type Args<'a> = SmallVec<[&'a str; MAX_ARGS]>;

/// Split `line` on spaces and tabs.
///
/// Runs of separators collapse. Anything after the [`MAX_ARGS`]th
/// argument is dropped.
pub fn parse_args(line: &str) -> Args<'_> {
    line.split([' ', '\t'])
        .filter(|arg| !arg.is_empty())
        .take(MAX_ARGS)
        .collect()
}

/// A recognized shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// List the commands.
    Help,
    /// Clear the terminal.
    Clear,
    /// Print the arguments joined by single spaces.
    Echo(String),
    /// List the files.
    Ls,
    /// Print a file's content.
    Cat(&'a str),
    /// Create or overwrite a file.
    Edit {
        /// Target file.
        name: &'a str,
        /// Remaining arguments joined by single spaces.
        content: String,
    },
    /// Delete a file.
    Rm(&'a str),
    /// Print table and heap diagnostics.
    Stat,
    /// Anything else, carrying the command word.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Interpret parsed arguments.
    ///
    /// Returns `Ok(None)` for an empty line. Extra arguments to commands
    /// that take none are ignored.
    pub fn parse(args: &[&'a str]) -> Result<Option<Self>, UsageError> {
        let Some((&word, rest)) = args.split_first() else {
            return Ok(None);
        };
        let command = match word {
            "help" => Self::Help,
            "clear" => Self::Clear,
            "echo" => Self::Echo(rest.join(" ")),
            "ls" => Self::Ls,
            "cat" => Self::Cat(rest.first().copied().ok_or(UsageError::Cat)?),
            "edit" => match rest {
                [name, content @ ..] if !content.is_empty() => Self::Edit {
                    name: *name,
                    content: content.join(" "),
                },
                _ => return Err(UsageError::Edit),
            },
            "rm" => Self::Rm(rest.first().copied().ok_or(UsageError::Rm)?),
            "stat" => Self::Stat,
            other => Self::Unknown(other),
        };
        Ok(Some(command))
    }
}

/// A known command was given too few arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageError {
    /// `cat` without a file name.
    Cat,
    /// `edit` without a file name or content.
    Edit,
    /// `rm` without a file name.
    Rm,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cat => write!(f, "Usage: cat <filename>"),
            Self::Edit => write!(f, "Usage: edit <filename> <content>"),
            Self::Rm => write!(f, "Usage: rm <filename>"),
        }
    }
}

impl Error for UsageError {}
