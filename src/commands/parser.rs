//! Command parsing.

use crate::error::{CommandError, CommandResult};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ADD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^add\s+(\S+)\s+(\S+)(?:\s+(\S+))?$").expect("Failed to compile add regex")
});

static CHANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^change\s+(\S+)\s+(\S+)\s+(\S+)$").expect("Failed to compile change regex")
});

static REMOVE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^remove\s+(\S+)$").expect("Failed to compile remove regex"));

static FIND_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^find(?:\s+(.*))?$").expect("Failed to compile find regex"));

static SEARCH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^search\s+(\S+)$").expect("Failed to compile search regex"));

const ADD_USAGE: &str = "add [name] [12-digit phone] [YYYY-MM-DD]";
const CHANGE_USAGE: &str = "change [name] [old phone] [new phone]";
const REMOVE_USAGE: &str = "remove [name]";
const SEARCH_USAGE: &str = "search [part of name or phone]";

/// A parsed user command. Field values are raw text, validated later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    ShowAll,
    ShowInParts,
    Remove {
        name: String,
    },
    Find {
        query: String,
    },
    Search {
        query: String,
    },
    Help,
    Exit,
}

/// Parse one line of input. Keywords are case-insensitive.
///
/// # Errors
///
/// `CommandError::Unrecognized` for unknown keywords and
/// `CommandError::InvalidArguments` when a known command has the wrong
/// number of arguments.
pub fn parse(input: &str) -> CommandResult<Command> {
    let line = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let lower = line.to_lowercase();

    match lower.as_str() {
        "hello" => return Ok(Command::Hello),
        "show all" => return Ok(Command::ShowAll),
        "show in parts" => return Ok(Command::ShowInParts),
        "help" => return Ok(Command::Help),
        "exit" | "close" | "good bye" => return Ok(Command::Exit),
        _ => {}
    }

    let keyword = lower.split(' ').next().unwrap_or_default();
    match keyword {
        "add" => {
            let caps = captures(&ADD_REGEX, &line, "add", ADD_USAGE)?;
            Ok(Command::Add {
                name: group(&caps, 1),
                phone: group(&caps, 2),
                birthday: caps.get(3).map(|m| m.as_str().to_string()),
            })
        }
        "change" => {
            let caps = captures(&CHANGE_REGEX, &line, "change", CHANGE_USAGE)?;
            Ok(Command::Change {
                name: group(&caps, 1),
                old_phone: group(&caps, 2),
                new_phone: group(&caps, 3),
            })
        }
        "remove" => {
            let caps = captures(&REMOVE_REGEX, &line, "remove", REMOVE_USAGE)?;
            Ok(Command::Remove {
                name: group(&caps, 1),
            })
        }
        "find" => {
            let query = FIND_REGEX
                .captures(&line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            Ok(Command::Find { query })
        }
        "search" => {
            let caps = captures(&SEARCH_REGEX, &line, "search", SEARCH_USAGE)?;
            Ok(Command::Search {
                query: group(&caps, 1),
            })
        }
        _ => Err(CommandError::Unrecognized(line)),
    }
}

fn captures<'a>(
    regex: &Regex,
    line: &'a str,
    command: &'static str,
    usage: &'static str,
) -> CommandResult<Captures<'a>> {
    regex
        .captures(line)
        .ok_or(CommandError::InvalidArguments { command, usage })
}

fn group(caps: &Captures<'_>, index: usize) -> String {
    caps.get(index)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("hello").unwrap(), Command::Hello);
        assert_eq!(parse("  Show   ALL ").unwrap(), Command::ShowAll);
        assert_eq!(parse("show in parts").unwrap(), Command::ShowInParts);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("Good Bye").unwrap(), Command::Exit);
        assert_eq!(parse("close").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse("add Alice 123456789012 1990-05-17").unwrap(),
            Command::Add {
                name: "Alice".to_string(),
                phone: "123456789012".to_string(),
                birthday: Some("1990-05-17".to_string()),
            }
        );
        assert_eq!(
            parse("ADD Bob 987654321098").unwrap(),
            Command::Add {
                name: "Bob".to_string(),
                phone: "987654321098".to_string(),
                birthday: None,
            }
        );
    }

    #[test]
    fn test_parse_add_missing_phone() {
        assert!(matches!(
            parse("add Alice"),
            Err(CommandError::InvalidArguments { command: "add", .. })
        ));
    }

    #[test]
    fn test_parse_change() {
        assert_eq!(
            parse("change Alice 111111111111 222222222222").unwrap(),
            Command::Change {
                name: "Alice".to_string(),
                old_phone: "111111111111".to_string(),
                new_phone: "222222222222".to_string(),
            }
        );
        assert!(parse("change Alice 111111111111").is_err());
    }

    #[test]
    fn test_parse_remove_and_search() {
        assert_eq!(
            parse("remove Alice").unwrap(),
            Command::Remove {
                name: "Alice".to_string()
            }
        );
        assert_eq!(
            parse("search 123").unwrap(),
            Command::Search {
                query: "123".to_string()
            }
        );
        assert!(parse("remove").is_err());
    }

    #[test]
    fn test_parse_find_keeps_rest_of_line() {
        assert_eq!(
            parse("find alice 1990").unwrap(),
            Command::Find {
                query: "alice 1990".to_string()
            }
        );
        assert_eq!(
            parse("find").unwrap(),
            Command::Find {
                query: String::new()
            }
        );
    }

    #[test]
    fn test_parse_unrecognized() {
        assert!(matches!(parse("dance"), Err(CommandError::Unrecognized(_))));
        assert!(matches!(parse(""), Err(CommandError::Unrecognized(_))));
        assert!(matches!(parse("show"), Err(CommandError::Unrecognized(_))));
    }
}
