use crate::core::{SpecialistStatus, StatusFilter};
use crate::utils::error::{Result, TrackerError};

/// One user intent typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `list` uses the active filter; `list <STATUS|ALL>` is a one-off view.
    List(Option<StatusFilter>),
    Filter(StatusFilter),
    Stats,
    Activity,
    View(String),
    Show,
    Close,
    Status { id: String, status: SpecialistStatus },
    Note(String),
    Regenerate,
    Copy,
    Insights,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => {
            if rest.is_empty() {
                Command::List(None)
            } else {
                Command::List(Some(rest.parse()?))
            }
        }
        "filter" => Command::Filter(required(rest, "filter <STATUS|ALL>")?.parse()?),
        "stats" => Command::Stats,
        "activity" => Command::Activity,
        "view" | "open" => Command::View(required(rest, "view <id>")?.to_string()),
        "show" => Command::Show,
        "close" => Command::Close,
        "status" => {
            let usage = "status <id> <STATUS>";
            let (id, status) = required(rest, usage)?
                .split_once(char::is_whitespace)
                .ok_or_else(|| usage_error(usage))?;
            Command::Status {
                id: id.to_string(),
                status: status.parse()?,
            }
        }
        // Note text is kept as typed; the store trims and rejects blank notes.
        "note" => Command::Note(rest.to_string()),
        "regen" | "regenerate" => Command::Regenerate,
        "copy" => Command::Copy,
        "insights" => Command::Insights,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(TrackerError::ValidationError {
                message: format!("Unknown command '{}'", other),
            })
        }
    };

    Ok(Some(command))
}

fn required<'a>(rest: &'a str, usage: &str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(usage_error(usage))
    } else {
        Ok(rest)
    }
}

fn usage_error(usage: &str) -> TrackerError {
    TrackerError::ValidationError {
        message: format!("Usage: {}", usage),
    }
}
