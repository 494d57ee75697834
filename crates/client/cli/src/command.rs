//! Script command parsing.
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! pickup w3      # world instance ids accept an optional `w` prefix
//! drop #10       # item ids accept an optional `#` prefix; omit to drop nothing
//! fire
//! wait 3000      # milliseconds
//! status
//! world
//! save
//! ```

use std::time::Duration;

use game_core::{ItemHandle, WorldItemId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Pickup(WorldItemId),
    Drop(Option<ItemHandle>),
    Fire,
    Wait(Duration),
    Status,
    World,
    Save,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid {what} `{value}`")]
    InvalidArgument { what: &'static str, value: String },

    #[error("`{0}` takes no further arguments")]
    TrailingInput(&'static str),
}

/// Parses one script line. `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = strip_comment(line).trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();
    let rest = words.next();

    let (name, command) = match head.to_ascii_lowercase().as_str() {
        "pickup" => {
            let value = argument.ok_or(ParseError::MissingArgument {
                command: "pickup",
                expected: "a world instance id",
            })?;
            ("pickup", Command::Pickup(parse_world_id(value)?))
        }
        "drop" => {
            let selected = argument.map(parse_item_id).transpose()?;
            ("drop", Command::Drop(selected))
        }
        "wait" => {
            let value = argument.ok_or(ParseError::MissingArgument {
                command: "wait",
                expected: "a duration in milliseconds",
            })?;
            let millis = value
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidArgument {
                    what: "duration",
                    value: value.to_string(),
                })?;
            ("wait", Command::Wait(Duration::from_millis(millis)))
        }
        "fire" => no_argument("fire", Command::Fire, argument)?,
        "status" => no_argument("status", Command::Status, argument)?,
        "world" => no_argument("world", Command::World, argument)?,
        "save" => no_argument("save", Command::Save, argument)?,
        _ => return Err(ParseError::UnknownCommand(head.to_string())),
    };

    if rest.is_some() {
        return Err(ParseError::TrailingInput(name));
    }
    Ok(Some(command))
}

/// Cuts a `#` comment. A line that starts with `#` is always a comment;
/// elsewhere a `#` glued to a number (`#10`) is an item id.
fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    let mut previous = ' ';
    for (index, ch) in line.char_indices() {
        if ch == '#' && previous.is_whitespace() {
            let next = line[index + 1..].chars().next();
            if !next.is_some_and(|next| next.is_ascii_digit()) {
                return &line[..index];
            }
        }
        previous = ch;
    }
    line
}

fn no_argument(
    name: &'static str,
    command: Command,
    argument: Option<&str>,
) -> Result<(&'static str, Command), ParseError> {
    match argument {
        Some(_) => Err(ParseError::TrailingInput(name)),
        None => Ok((name, command)),
    }
}

fn parse_world_id(value: &str) -> Result<WorldItemId, ParseError> {
    value
        .strip_prefix('w')
        .unwrap_or(value)
        .parse::<u32>()
        .map(WorldItemId)
        .map_err(|_| ParseError::InvalidArgument {
            what: "world instance id",
            value: value.to_string(),
        })
}

fn parse_item_id(value: &str) -> Result<ItemHandle, ParseError> {
    value
        .strip_prefix('#')
        .unwrap_or(value)
        .parse::<u32>()
        .map(ItemHandle)
        .map_err(|_| ParseError::InvalidArgument {
            what: "item id",
            value: value.to_string(),
        })
}
