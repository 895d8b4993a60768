//! Process records and the FIFO job queue that holds them
//!
//! - [`pcb`]: process control blocks and their states
//! - [`pid`]: the pid allocator
//! - [`clock`]: creation timestamps
//! - [`queue`]: the job queue on top of [`common::collections::LinkedList`]

pub mod clock;
pub mod pcb;
pub mod pid;
pub mod queue;

pub use clock::{Clock, FixedClock, SystemClock, Timestamp};
pub use pcb::{Pid, ProcessControlBlock, ProcessState};
pub use pid::PidAllocator;
pub use queue::JobQueue;
