use crate::clock::Timestamp;
use crate::pcb::{Pid, ProcessControlBlock, ProcessState};

/// Hands out process ids in increasing order.
///
/// Ids are never recycled: once handed out, an id stays used even after its
/// job leaves the queue. Each allocator counts on its own, so two queues (or
/// two tests) never share a counter.
#[derive(Debug, Clone)]
pub struct PidAllocator {
    next: usize,
}

impl PidAllocator {
    /// Allocator whose first id is 0
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    pub const fn starting_at(first: usize) -> Self {
        Self { next: first }
    }

    pub fn alloc(&mut self) -> Pid {
        let pid = Pid(self.next);
        self.next += 1;
        pid
    }

    /// The id the next `alloc` will return
    pub fn peek(&self) -> Pid {
        Pid(self.next)
    }

    /// Builds a block with a freshly allocated pid
    pub fn spawn(&mut self, state: ProcessState, time: Timestamp) -> ProcessControlBlock {
        ProcessControlBlock::new(self.alloc(), state, time)
    }
}

impl Default for PidAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pids_are_unique_and_increasing() {
        let mut pids = PidAllocator::new();
        let allocated: Vec<Pid> = (0..50).map(|_| pids.alloc()).collect();
        assert_eq!(allocated[0], Pid(0));
        assert!(allocated.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut pids = PidAllocator::starting_at(10);
        assert_eq!(pids.peek(), Pid(10));
        assert_eq!(pids.peek(), Pid(10));
        assert_eq!(pids.alloc(), Pid(10));
        assert_eq!(pids.peek(), Pid(11));
    }

    #[test]
    fn test_spawn_uses_next_pid() {
        let mut pids = PidAllocator::new();
        let first = pids.spawn(ProcessState::Ready, Timestamp(5));
        let second = pids.spawn(ProcessState::Ready, Timestamp(5));
        assert_eq!(first.pid(), Pid(0));
        assert_eq!(second.pid(), Pid(1));
        assert_eq!(first.state(), ProcessState::Ready);
        assert_eq!(first.time(), Timestamp(5));
    }

    #[test]
    fn test_allocators_are_independent() {
        let mut a = PidAllocator::new();
        let mut b = PidAllocator::new();
        a.alloc();
        a.alloc();
        assert_eq!(b.alloc(), Pid(0));
    }
}
