use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::num::ParseIntError;
use core::str::FromStr;

use crate::clock::Timestamp;

/// Process states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcessState {
    New,       // Just created
    Idle,      // Created, not asking for the CPU
    Ready,     // Waiting for the CPU
    Running,   // Currently executing
    Suspended, // Paused until resumed
    #[default]
    Invalid, // Malformed or unrecognized
}

impl ProcessState {
    pub const ALL: [ProcessState; 6] = [
        ProcessState::New,
        ProcessState::Idle,
        ProcessState::Ready,
        ProcessState::Running,
        ProcessState::Suspended,
        ProcessState::Invalid,
    ];

    /// Maps a one-character state code to a state.
    ///
    /// `n` new, `i` idle, `d` ready, `r` running, `s` suspended. Any other
    /// character gives [`ProcessState::Invalid`].
    pub fn from_code(code: char) -> Self {
        match code {
            'n' => ProcessState::New,
            'i' => ProcessState::Idle,
            'd' => ProcessState::Ready,
            'r' => ProcessState::Running,
            's' => ProcessState::Suspended,
            _ => ProcessState::Invalid,
        }
    }

    /// Code accepted by [`ProcessState::from_code`]; `Invalid` has none
    pub fn code(self) -> Option<char> {
        match self {
            ProcessState::New => Some('n'),
            ProcessState::Idle => Some('i'),
            ProcessState::Ready => Some('d'),
            ProcessState::Running => Some('r'),
            ProcessState::Suspended => Some('s'),
            ProcessState::Invalid => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProcessState::New => "NEW",
            ProcessState::Idle => "IDLE",
            ProcessState::Ready => "READY",
            ProcessState::Running => "RUNNING",
            ProcessState::Suspended => "SUSPENDED",
            ProcessState::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Process identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pid(pub usize);

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Pid {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Pid)
    }
}

/// Process Control Block
///
/// Identity is the pid alone: two blocks with the same pid compare equal
/// whatever their state or time, and blocks order by pid. The pid is fixed at
/// construction.
#[derive(Debug, Clone, Copy)]
pub struct ProcessControlBlock {
    /// Process ID
    pid: Pid,

    /// Lifecycle state chosen at creation
    state: ProcessState,

    /// Creation time
    time: Timestamp,
}

impl ProcessControlBlock {
    pub fn new(pid: Pid, state: ProcessState, time: Timestamp) -> Self {
        Self { pid, state, time }
    }

    /// A lookup needle that only carries a pid
    pub fn key(pid: Pid) -> Self {
        Self::new(pid, ProcessState::Invalid, Timestamp::default())
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn time(&self) -> Timestamp {
        self.time
    }
}

impl PartialEq for ProcessControlBlock {
    fn eq(&self, other: &Self) -> bool {
        self.pid == other.pid
    }
}

impl Eq for ProcessControlBlock {}

impl PartialOrd for ProcessControlBlock {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProcessControlBlock {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pid.cmp(&other.pid)
    }
}

impl Hash for ProcessControlBlock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pid.hash(state);
    }
}

/// A block prints as its pid, which is what the job chain shows
impl fmt::Display for ProcessControlBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pid, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_codes() {
        assert_eq!(ProcessState::from_code('n'), ProcessState::New);
        assert_eq!(ProcessState::from_code('i'), ProcessState::Idle);
        assert_eq!(ProcessState::from_code('d'), ProcessState::Ready);
        assert_eq!(ProcessState::from_code('r'), ProcessState::Running);
        assert_eq!(ProcessState::from_code('s'), ProcessState::Suspended);
        assert_eq!(ProcessState::from_code('x'), ProcessState::Invalid);
        assert_eq!(ProcessState::from_code('N'), ProcessState::Invalid);
    }

    #[test]
    fn test_codes_round_trip_through_every_state() {
        for state in ProcessState::ALL {
            match state.code() {
                Some(code) => assert_eq!(ProcessState::from_code(code), state),
                None => assert_eq!(state, ProcessState::Invalid),
            }
        }
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(ProcessState::Running.to_string(), "RUNNING");
        assert_eq!(ProcessState::Suspended.label(), "SUSPENDED");
        assert_eq!(ProcessState::default().label(), "INVALID");
    }

    #[test]
    fn test_equality_is_by_pid() {
        let a = ProcessControlBlock::new(Pid(3), ProcessState::New, Timestamp(10));
        let b = ProcessControlBlock::new(Pid(3), ProcessState::Running, Timestamp(99));
        let c = ProcessControlBlock::new(Pid(4), ProcessState::New, Timestamp(10));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(ProcessControlBlock::key(Pid(3)), a);
    }

    #[test]
    fn test_ordering_is_by_pid() {
        let low = ProcessControlBlock::new(Pid(1), ProcessState::Suspended, Timestamp(50));
        let high = ProcessControlBlock::new(Pid(2), ProcessState::New, Timestamp(0));
        assert!(low < high);
    }

    #[test]
    fn test_display_and_parse() {
        let pcb = ProcessControlBlock::new(Pid(7), ProcessState::Idle, Timestamp(0));
        assert_eq!(pcb.to_string(), "7");
        assert_eq!("42".parse::<Pid>(), Ok(Pid(42)));
        assert!("-1".parse::<Pid>().is_err());
    }
}
