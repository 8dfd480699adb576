//! Parsing of interactive commands.

use thiserror::Error;
use todo_core::{TodoAction, TodoId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward an action to the store.
    Action(TodoAction),
    /// Re-render the current state without touching the store.
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a todo id")]
    BadId(String),
}

pub const HELP: &str = "\
commands:
  load           fetch the first 10 todos
  list           show the current list
  add <title>    create a todo
  toggle <id>    flip a todo's completed flag
  rm <id>        delete a todo
  quit           exit";

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "" => Err(ParseError::Empty),
        "load" | "reload" => Ok(Command::Action(TodoAction::LoadAll)),
        "list" | "ls" => Ok(Command::Show),
        "add" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("add"));
            }
            Ok(Command::Action(TodoAction::Add {
                title: rest.to_string(),
            }))
        }
        "toggle" => Ok(Command::Action(TodoAction::ToggleCompleted {
            id: parse_id("toggle", rest)?,
        })),
        "rm" | "remove" => Ok(Command::Action(TodoAction::Remove {
            id: parse_id("rm", rest)?,
        })),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

fn parse_id(command: &'static str, raw: &str) -> Result<TodoId, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    raw.parse::<u64>()
        .map(TodoId)
        .map_err(|_| ParseError::BadId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_the_whole_title() {
        assert_eq!(
            parse_command("add  buy oat milk ").unwrap(),
            Command::Action(TodoAction::Add {
                title: "buy oat milk".to_string()
            })
        );
    }

    #[test]
    fn ids_are_numeric() {
        assert_eq!(
            parse_command("toggle 3").unwrap(),
            Command::Action(TodoAction::ToggleCompleted { id: TodoId(3) })
        );
        assert_eq!(
            parse_command("rm 12").unwrap(),
            Command::Action(TodoAction::Remove { id: TodoId(12) })
        );
        assert_eq!(parse_command("rm x").unwrap_err(), ParseError::BadId("x".to_string()));
    }

    #[test]
    fn missing_arguments_are_reported() {
        assert_eq!(parse_command("add").unwrap_err(), ParseError::MissingArgument("add"));
        assert_eq!(
            parse_command("toggle").unwrap_err(),
            ParseError::MissingArgument("toggle")
        );
    }

    #[test]
    fn simple_words() {
        assert_eq!(parse_command("load").unwrap(), Command::Action(TodoAction::LoadAll));
        assert_eq!(parse_command("list").unwrap(), Command::Show);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("   ").unwrap_err(), ParseError::Empty);
        assert!(matches!(parse_command("frobnicate"), Err(ParseError::Unknown(_))));
    }
}
