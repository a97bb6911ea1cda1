//! Interactive command parsing.

use thiserror::Error;

use crate::comments::SortOrder;
use crate::config::SearchMode;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A plain line: search for it (may be blank, which the session rejects).
    Search(String),
    /// `:open N`
    Open(usize),
    /// `:mode exact|fuzzy`
    Mode(SearchMode),
    /// `:comment NAME | TEXT`
    Comment { name: String, text: String },
    /// `:sort asc|desc|none`
    Sort(SortOrder),
    /// `:comments`
    ListComments,
    /// `:help`
    Help,
    /// `:quit` / `:q`
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command ':{0}' (try :help)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
Type a country name to search, or one of:
  :open N                 open the N-th country of the region list
  :mode exact|fuzzy       switch search strategy
  :comment NAME | TEXT    post a comment
  :sort asc|desc|none     sort comments by time
  :comments               show comments
  :quit                   exit";

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let Some(rest) = line.trim_start().strip_prefix(':') else {
            return Ok(Command::Search(line.to_string()));
        };
        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest.trim(), ""),
        };

        match name {
            "open" | "o" => args
                .parse()
                .map(Command::Open)
                .map_err(|_| CommandError::Usage(":open N")),
            "mode" => match args {
                "exact" => Ok(Command::Mode(SearchMode::Exact)),
                "fuzzy" => Ok(Command::Mode(SearchMode::Fuzzy)),
                _ => Err(CommandError::Usage(":mode exact|fuzzy")),
            },
            "comment" => match args.split_once('|') {
                Some((name, text)) => Ok(Command::Comment {
                    name: name.to_string(),
                    text: text.to_string(),
                }),
                None => Err(CommandError::Usage(":comment NAME | TEXT")),
            },
            "sort" => match args {
                "asc" | "ascending" => Ok(Command::Sort(SortOrder::Ascending)),
                "desc" | "descending" => Ok(Command::Sort(SortOrder::Descending)),
                "none" | "" => Ok(Command::Sort(SortOrder::Unsorted)),
                _ => Err(CommandError::Usage(":sort asc|desc|none")),
            },
            "comments" => Ok(Command::ListComments),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_are_searches() {
        assert_eq!(
            Command::parse("United Kingdom").unwrap(),
            Command::Search("United Kingdom".into())
        );
        assert_eq!(Command::parse("  ").unwrap(), Command::Search("  ".into()));
    }

    #[test]
    fn test_open() {
        assert_eq!(Command::parse(":open 3").unwrap(), Command::Open(3));
        assert_eq!(Command::parse(":o 12").unwrap(), Command::Open(12));
        assert_eq!(
            Command::parse(":open three"),
            Err(CommandError::Usage(":open N"))
        );
        assert_eq!(Command::parse(":open"), Err(CommandError::Usage(":open N")));
    }

    #[test]
    fn test_mode() {
        assert_eq!(
            Command::parse(":mode fuzzy").unwrap(),
            Command::Mode(SearchMode::Fuzzy)
        );
        assert!(Command::parse(":mode loose").is_err());
    }

    #[test]
    fn test_comment_keeps_raw_fields() {
        // trimming and validation belong to the comment form
        assert_eq!(
            Command::parse(":comment Ana | Nice flag").unwrap(),
            Command::Comment {
                name: "Ana ".into(),
                text: " Nice flag".into()
            }
        );
        assert_eq!(
            Command::parse(":comment Ana"),
            Err(CommandError::Usage(":comment NAME | TEXT"))
        );
    }

    #[test]
    fn test_sort() {
        assert_eq!(
            Command::parse(":sort asc").unwrap(),
            Command::Sort(SortOrder::Ascending)
        );
        assert_eq!(
            Command::parse(":sort descending").unwrap(),
            Command::Sort(SortOrder::Descending)
        );
        assert_eq!(
            Command::parse(":sort").unwrap(),
            Command::Sort(SortOrder::Unsorted)
        );
        assert!(Command::parse(":sort random").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse(":fly"),
            Err(CommandError::Unknown("fly".into()))
        );
        assert_eq!(Command::parse(":q").unwrap(), Command::Quit);
    }
}
