//! Shared building blocks for the job queue workspace
//!
//! - [`collections`]: the arena-backed doubly-linked list that stores jobs
//! - [`sync`]: a reader/writer wrapper for sharing a list between threads

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod collections;
pub mod sync;
