// Line-based console input: one command per line, mapped onto client events.

use crate::domain::{BossId, PlayerAction};
use crate::use_cases::ClientEvent;
use std::fmt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub const USAGE: &str = "commands: create <name> | load <name> | save | start <boss> | \
left | right | jump | attack | dash | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Event(ClientEvent),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    MissingArgument(&'static str),
    Unknown(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::MissingArgument(command) => write!(f, "`{command}` needs an argument"),
            ParseError::Unknown(command) => write!(f, "unknown command `{command}`"),
        }
    }
}

impl std::error::Error for ParseError {}

pub fn parse_line(line: &str) -> Result<ConsoleCommand, ParseError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let event = match verb.to_ascii_lowercase().as_str() {
        "" => return Err(ParseError::Empty),
        "help" | "?" => return Ok(ConsoleCommand::Help),
        "quit" | "exit" => return Ok(ConsoleCommand::Quit),
        // Profile names are sent as typed; the server decides what is valid.
        "create" => ClientEvent::CreateProfile {
            name: rest.to_string(),
        },
        "load" => ClientEvent::LoadProfile {
            name: required(rest, "load")?.to_string(),
        },
        "save" => ClientEvent::SaveProfile,
        "start" => ClientEvent::StartRun {
            boss: BossId::new(required(rest, "start")?),
        },
        "left" => control(PlayerAction::MoveLeft),
        "right" => control(PlayerAction::MoveRight),
        other => match PlayerAction::from_id(other) {
            Some(action) => control(action),
            None => return Err(ParseError::Unknown(other.to_string())),
        },
    };

    Ok(ConsoleCommand::Event(event))
}

fn control(action: PlayerAction) -> ClientEvent {
    ClientEvent::Control { action }
}

fn required<'a>(arg: &'a str, command: &'static str) -> Result<&'a str, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    Ok(arg)
}

/// Reads commands until EOF or `quit`, forwarding events to the client loop.
///
/// Returning drops `events_tx`, which is what shuts the client loop down.
pub async fn forward_lines<R>(reader: R, events_tx: mpsc::Sender<ClientEvent>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("console input reached EOF");
                break;
            }
            Err(e) => {
                warn!(error = %e, "failed to read console input");
                break;
            }
        };

        match parse_line(&line) {
            Ok(ConsoleCommand::Event(event)) => {
                if events_tx.send(event).await.is_err() {
                    warn!("client loop closed; console exiting");
                    break;
                }
            }
            Ok(ConsoleCommand::Help) => println!("{USAGE}"),
            Ok(ConsoleCommand::Quit) => break,
            Err(ParseError::Empty) => {}
            Err(e) => println!("{e}; {USAGE}"),
        }
    }
}
