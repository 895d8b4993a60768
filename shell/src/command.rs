use std::fmt;

use process::{JobQueue, Pid, ProcessControlBlock, ProcessState};

/// One menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `e [code]`; without a code the shell asks for one
    Enqueue(Option<ProcessState>),
    /// `d`
    Dequeue,
    /// `i <pid>`; the pid may also follow on the next line
    Info(Pid),
    /// `s`
    Sort,
    /// `q`
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let action = words.next().ok_or(CommandError::Empty)?;

        match action {
            "e" => Ok(Command::Enqueue(words.next().map(parse_state))),
            "d" => Ok(Command::Dequeue),
            "i" => {
                let word = words.next().ok_or(CommandError::MissingId)?;
                parse_pid(word).map(Command::Info)
            }
            "s" => Ok(Command::Sort),
            "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// State from the first character of `word`; anything unknown is `Invalid`
pub fn parse_state(word: &str) -> ProcessState {
    word.trim()
        .chars()
        .next()
        .map(ProcessState::from_code)
        .unwrap_or_default()
}

/// Pid typed as a decimal number
pub fn parse_pid(word: &str) -> Result<Pid, CommandError> {
    let word = word.trim();
    word.parse().map_err(|_| CommandError::BadId(word.to_string()))
}

/// What a dispatched command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Enqueued(Pid),
    Dequeued(Option<Pid>),
    Info {
        pid: Pid,
        pcb: Option<ProcessControlBlock>,
    },
    Sorted,
    Quit,
}

/// Runs `command` against the queue. An enqueue that never got a state code
/// stores an `Invalid` job.
pub fn dispatch(queue: &mut JobQueue, command: Command) -> Outcome {
    match command {
        Command::Enqueue(state) => Outcome::Enqueued(queue.enqueue(state.unwrap_or_default())),
        Command::Dequeue => Outcome::Dequeued(queue.dequeue()),
        Command::Info(pid) => Outcome::Info {
            pid,
            pcb: queue.info(pid).copied(),
        },
        Command::Sort => {
            queue.sort();
            Outcome::Sorted
        }
        Command::Quit => Outcome::Quit,
    }
}

/// Why a line is not a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingId,
    BadId(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(action) => write!(f, "unknown action `{}`", action),
            CommandError::MissingId => write!(f, "missing pid"),
            CommandError::BadId(word) => write!(f, "`{}` is not a pid", word),
        }
    }
}

impl std::error::Error for CommandError {}
