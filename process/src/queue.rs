use std::fmt;

use common::collections::{Iter, LinkedList};

use crate::clock::{Clock, SystemClock};
use crate::pcb::{Pid, ProcessControlBlock, ProcessState};
use crate::pid::PidAllocator;

/// FIFO queue of process control blocks.
///
/// New jobs go to the tail, `dequeue` always takes the head. The queue owns
/// the pid allocator and the clock that stamp each new job.
pub struct JobQueue {
    jobs: LinkedList<ProcessControlBlock>,
    pids: PidAllocator,
    clock: Box<dyn Clock>,
}

impl JobQueue {
    /// Empty queue on the wall clock, first pid 0
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self::with_parts(PidAllocator::new(), clock)
    }

    pub fn with_parts(pids: PidAllocator, clock: Box<dyn Clock>) -> Self {
        Self {
            jobs: LinkedList::new(),
            pids,
            clock,
        }
    }

    /// Creates a job in `state`, stamps it with the current time and
    /// appends it. Returns the new job's pid.
    pub fn enqueue(&mut self, state: ProcessState) -> Pid {
        let pcb = self.pids.spawn(state, self.clock.now());
        log::debug!(
            "[jobq] enqueue #{} state={} time={}",
            pcb.pid(),
            pcb.state(),
            pcb.time()
        );
        self.jobs.append(pcb);
        pcb.pid()
    }

    /// Removes the job at the head. Returns its pid, or `None` on an empty
    /// queue.
    pub fn dequeue(&mut self) -> Option<Pid> {
        let pid = self.jobs.front().map(ProcessControlBlock::pid);
        match pid {
            Some(pid) => log::debug!("[jobq] dequeue #{}", pid),
            None => log::trace!("[jobq] dequeue on empty queue"),
        }
        self.jobs.remove_at(0);
        pid
    }

    /// Removes the job at `position`; out-of-range positions are ignored
    pub fn remove_at(&mut self, position: isize) {
        if position < 0 || position as usize >= self.jobs.len() {
            log::trace!(
                "[jobq] ignoring removal at {} ({} jobs)",
                position,
                self.jobs.len()
            );
        }
        self.jobs.remove_at(position);
    }

    /// Looks up a job by pid
    pub fn info(&self, pid: Pid) -> Option<&ProcessControlBlock> {
        let found = self.jobs.search(&ProcessControlBlock::key(pid));
        if found.is_none() {
            log::trace!("[jobq] no job #{}", pid);
        }
        found
    }

    /// Orders the jobs by pid
    pub fn sort(&mut self) {
        self.jobs.sort();
        log::debug!("[jobq] sorted {} jobs", self.jobs.len());
    }

    pub fn clear(&mut self) {
        log::debug!("[jobq] clearing {} jobs", self.jobs.len());
        self.jobs.clear();
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, ProcessControlBlock> {
        self.jobs.iter()
    }

    pub fn jobs(&self) -> &LinkedList<ProcessControlBlock> {
        &self.jobs
    }

    /// Pid the next enqueued job will get
    pub fn next_pid(&self) -> Pid {
        self.pids.peek()
    }
}

impl Default for JobQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the chain of pids, `0 -> 1 -> nullptr`
impl fmt::Display for JobQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.jobs, f)
    }
}

impl fmt::Debug for JobQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobQueue")
            .field("jobs", &self.jobs.len())
            .field("next_pid", &self.pids.peek())
            .finish()
    }
}
