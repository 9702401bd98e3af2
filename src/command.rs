//! Parsing of interactive user commands.
//!
//! One line of user input maps to one [`Command`]. Task numbers are the
//! 1-based numbers shown in the listing; the command loop converts to
//! 0-based list indices.

use chrono::NaiveDate;

use crate::storage::DATE_FORMAT_MSG;
use crate::task::Task;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the task list.
    List,
    /// Add a task (already constructed from the input).
    Add(Task),
    /// Mark task number `n` as done.
    Done(usize),
    /// Mark task number `n` as not done.
    Undone(usize),
    /// Delete task number `n`.
    Delete(usize),
    /// Search task descriptions for a keyword.
    Find(String),
    /// Show command help.
    Help,
    /// End the session.
    Bye,
}

/// Error for input that does not parse to a command.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandError(pub String);

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for CommandError {}

/// Parse one line of user input.
pub fn parse(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    let (word, rest) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };

    match word {
        "list" => Ok(Command::List),
        "todo" => {
            if rest.is_empty() {
                Err(CommandError("the description of a todo cannot be empty".into()))
            } else {
                Ok(Command::Add(Task::todo(rest)))
            }
        }
        "deadline" => {
            parse_dated(rest, "/by").map(|(desc, date)| Command::Add(Task::deadline(desc, date)))
        }
        "event" => {
            parse_dated(rest, "/at").map(|(desc, date)| Command::Add(Task::event(desc, date)))
        }
        "done" => parse_number(rest, "done").map(Command::Done),
        "undone" => parse_number(rest, "undone").map(Command::Undone),
        "delete" => parse_number(rest, "delete").map(Command::Delete),
        "find" => {
            if rest.is_empty() {
                Err(CommandError("find needs a keyword".into()))
            } else {
                Ok(Command::Find(rest.to_string()))
            }
        }
        "help" => Ok(Command::Help),
        "bye" => Ok(Command::Bye),
        "" => Err(CommandError("type a command, or `help` to list them".into())),
        _ => Err(CommandError(format!("unknown command: {}", word))),
    }
}

/// Parse `<description> <marker> <date>` for the deadline/event commands.
fn parse_dated(rest: &str, marker: &str) -> Result<(String, NaiveDate), CommandError> {
    let (description, date_str) = rest.split_once(marker).ok_or_else(|| {
        CommandError(format!("expected `{} <YYYY-MM-DD>` after the description", marker))
    })?;

    let description = description.trim();
    if description.is_empty() {
        return Err(CommandError("the description cannot be empty".into()));
    }

    let date: NaiveDate = date_str
        .trim()
        .parse()
        .map_err(|_| CommandError(DATE_FORMAT_MSG.to_string()))?;

    Ok((description.to_string(), date))
}

/// Parse a 1-based task number argument.
fn parse_number(rest: &str, command: &str) -> Result<usize, CommandError> {
    let number: usize = rest
        .parse()
        .map_err(|_| CommandError(format!("`{}` needs a task number", command)))?;
    if number == 0 {
        return Err(CommandError("task numbers start at 1".into()));
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskKind;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_list_help_bye() {
        assert_eq!(parse("list").unwrap(), Command::List);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("  bye  ").unwrap(), Command::Bye);
    }

    #[test]
    fn test_parse_todo() {
        let cmd = parse("todo read book").unwrap();
        assert_eq!(cmd, Command::Add(Task::todo("read book")));
    }

    #[test]
    fn test_parse_todo_empty_description() {
        let err = parse("todo").unwrap_err();
        assert!(err.0.contains("description"));
        assert!(parse("todo    ").is_err());
    }

    #[test]
    fn test_parse_deadline() {
        let cmd = parse("deadline submit report /by 2024-01-15").unwrap();
        assert_eq!(
            cmd,
            Command::Add(Task::deadline("submit report", date("2024-01-15")))
        );
    }

    #[test]
    fn test_parse_event() {
        let cmd = parse("event team lunch /at 2024-02-01").unwrap();
        match cmd {
            Command::Add(task) => {
                assert_eq!(task.description, "team lunch");
                assert_eq!(task.kind, TaskKind::Event(date("2024-02-01")));
            }
            other => panic!("expected add, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_deadline_missing_by() {
        let err = parse("deadline submit report").unwrap_err();
        assert!(err.0.contains("/by"));
    }

    #[test]
    fn test_parse_deadline_bad_date() {
        let err = parse("deadline submit report /by 15/01/2024").unwrap_err();
        assert_eq!(err.0, DATE_FORMAT_MSG);
    }

    #[test]
    fn test_parse_event_missing_description() {
        let err = parse("event /at 2024-02-01").unwrap_err();
        assert!(err.0.contains("description"));
    }

    #[test]
    fn test_parse_numbered_commands() {
        assert_eq!(parse("done 3").unwrap(), Command::Done(3));
        assert_eq!(parse("undone 1").unwrap(), Command::Undone(1));
        assert_eq!(parse("delete 12").unwrap(), Command::Delete(12));
    }

    #[test]
    fn test_parse_bad_task_numbers() {
        assert!(parse("done").is_err());
        assert!(parse("done abc").is_err());
        let err = parse("delete 0").unwrap_err();
        assert!(err.0.contains("start at 1"));
    }

    #[test]
    fn test_parse_find() {
        assert_eq!(parse("find book").unwrap(), Command::Find("book".into()));
        assert!(parse("find").is_err());
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        let err = parse("frobnicate now").unwrap_err();
        assert!(err.0.contains("unknown command"));
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
    }
}
