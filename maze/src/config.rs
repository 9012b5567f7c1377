use std::fmt;
use std::path::PathBuf;

use maze_search::{Strategy, UnknownStrategy};

pub const USAGE: &str = "\
Usage: maze [OPTIONS] FILE

Solve the maze in FILE ('A' start, 'B' goal, spaces open, anything else wall).

Options:
  -s, --strategy <NAME>  dfs, bfs, astar or all [default: astar]
  -e, --explored         mark explored cells in the solved maze
      --plain            disable colours (also when NO_COLOR is set)
  -h, --help             print this help
";

/// Which strategies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    One(Strategy),
    All,
}

/// Command-line configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub selection: Selection,
    pub show_explored: bool,
    pub styled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// `--help` was requested.
    Help,
    MissingValue(String),
    MissingFile,
    UnexpectedArgument(String),
    Strategy(UnknownStrategy),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => f.write_str("help requested"),
            Self::MissingValue(flag) => write!(f, "{flag} requires a value"),
            Self::MissingFile => f.write_str("no maze file given"),
            Self::UnexpectedArgument(arg) => write!(f, "unexpected argument: {arg}"),
            Self::Strategy(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl Config {
    /// Build the configuration from arguments (program name excluded).
    /// `no_color` reflects the `NO_COLOR` environment variable.
    pub fn from_args<I>(args: I, no_color: bool) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut path = None;
        let mut selection = Selection::One(Strategy::AStar);
        let mut show_explored = false;
        let mut styled = !no_color;

        let mut argv = args.into_iter();
        while let Some(arg) = argv.next() {
            match arg.as_str() {
                "-s" | "--strategy" => {
                    let value = argv.next().ok_or(ArgsError::MissingValue(arg))?;
                    selection = if value.eq_ignore_ascii_case("all") {
                        Selection::All
                    } else {
                        Selection::One(value.parse().map_err(ArgsError::Strategy)?)
                    };
                }
                "-e" | "--explored" => show_explored = true,
                "--plain" => styled = false,
                "-h" | "--help" => return Err(ArgsError::Help),
                s if s.starts_with('-') && s.len() > 1 => {
                    return Err(ArgsError::UnexpectedArgument(arg));
                }
                _ if path.is_none() => path = Some(PathBuf::from(arg)),
                _ => return Err(ArgsError::UnexpectedArgument(arg)),
            }
        }

        Ok(Self {
            path: path.ok_or(ArgsError::MissingFile)?,
            selection,
            show_explored,
            styled,
        })
    }
}
