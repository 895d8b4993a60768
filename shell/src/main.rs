//! Interactive job queue simulator
//!
//! Keeps a FIFO queue of process control blocks and lets the user enqueue,
//! dequeue, inspect and sort them from a text menu.

mod command;
mod config;
mod console;
mod error;
mod logger;
mod session;

use std::io;

use process::JobQueue;

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::session::Session;

fn main() -> Result<(), ShellError> {
    let config = ShellConfig::load();
    logger::init(config.log_level)?;
    log::info!("[shell] starting, {:?}", config);

    let mut queue = JobQueue::new();
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), config);
    session.run(&mut queue)?;

    log::info!("[shell] {} jobs left at exit", queue.len());
    Ok(())
}
