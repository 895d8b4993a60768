use std::io::{BufRead, Write};

use process::{JobQueue, Pid, ProcessState};

use crate::command::{self, Command, CommandError, Outcome};
use crate::config::ShellConfig;
use crate::console;
use crate::error::ShellError;

/// Interactive menu loop over one input and one output stream
pub struct Session<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Redraws the menu and runs commands until `q` or end of input
    pub fn run(&mut self, queue: &mut JobQueue) -> Result<(), ShellError> {
        loop {
            if self.config.clear_screen {
                console::clear_screen(&mut self.output)?;
            }
            console::draw_menu(&mut self.output, queue)?;

            let Some(line) = self.read_line()? else {
                log::info!("[shell] end of input");
                break;
            };

            let command = match Command::parse(&line) {
                Ok(Command::Enqueue(None)) => match self.ask_state()? {
                    Some(state) => Command::Enqueue(Some(state)),
                    None => break,
                },
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(CommandError::MissingId) => match self.ask_pid()? {
                    Some(Ok(pid)) => Command::Info(pid),
                    Some(Err(err)) => {
                        self.reject(err)?;
                        continue;
                    }
                    None => break,
                },
                Err(err) => {
                    self.reject(err)?;
                    continue;
                }
            };

            match command::dispatch(queue, command) {
                Outcome::Info { pid, pcb } => {
                    console::job_info(&mut self.output, pid, pcb.as_ref())?;
                    self.pause()?;
                }
                Outcome::Quit => break,
                Outcome::Enqueued(_) | Outcome::Dequeued(_) | Outcome::Sorted => {}
            }
        }

        console::exiting(&mut self.output)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next input line without its line ending, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Next line with something on it; blank lines are skipped
    fn read_word(&mut self) -> Result<Option<String>, ShellError> {
        while let Some(line) = self.read_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn ask_state(&mut self) -> Result<Option<ProcessState>, ShellError> {
        console::state_prompt(&mut self.output)?;
        Ok(self.read_word()?.map(|line| command::parse_state(&line)))
    }

    /// Pid for an `i` typed on its own, read from the following lines
    fn ask_pid(&mut self) -> Result<Option<Result<Pid, CommandError>>, ShellError> {
        Ok(self.read_word()?.map(|line| command::parse_pid(&line)))
    }

    fn reject(&mut self, err: CommandError) -> Result<(), ShellError> {
        log::debug!("[shell] rejected input: {}", err);
        console::invalid_operation(&mut self.output)?;
        self.pause()
    }

    /// Waits for any line; end of input does not wait
    fn pause(&mut self) -> Result<(), ShellError> {
        console::continue_prompt(&mut self.output)?;
        self.read_line()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use process::{FixedClock, Timestamp};
    use std::io::Cursor;

    fn run(input: &str, queue: &mut JobQueue) -> String {
        let config = ShellConfig {
            clear_screen: false,
            ..ShellConfig::default()
        };
        let mut session = Session::new(Cursor::new(input.as_bytes()), Vec::new(), config);
        session.run(queue).unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    fn queue() -> JobQueue {
        JobQueue::with_clock(Box::new(FixedClock(Timestamp(1_600_000_000))))
    }

    #[test]
    fn test_enqueue_dequeue_info_quit() {
        let mut q = queue();
        let text = run("e n\ne\nr\nd\ni 1\n\nq\n", &mut q);

        assert!(text.contains("Jobs List : nullptr\n"));
        assert!(text.contains("Jobs List : 0 -> nullptr\n"));
        assert!(text.contains("ENTER STATE:"));
        assert!(text.contains("Jobs List : 0 -> 1 -> nullptr\n"));
        assert!(text.contains("Jobs List : 1 -> nullptr\n"));
        assert!(text.contains("State : RUNNING\n"));
        assert!(text.contains("Time  : 1600000000\n"));
        assert!(text.ends_with("Exiting...\n"));

        assert_eq!(q.len(), 1);
        assert_eq!(q.info(Pid(1)).map(|p| p.state()), Some(ProcessState::Running));
    }

    #[test]
    fn test_unknown_input_is_reported() {
        let mut q = queue();
        let text = run("x\n\ni five\n\nq\n", &mut q);
        assert_eq!(text.matches("Invalid Operation").count(), 2);
        assert_eq!(text.matches(console::CONTINUE).count(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn test_missing_job() {
        let mut q = queue();
        let text = run("i 4\n\nq\n", &mut q);
        assert!(text.contains("PCB #4 Not found!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut q = queue();
        let text = run("e s\n", &mut q);
        assert!(text.ends_with("Exiting...\n"));
        assert_eq!(q.len(), 1);

        // Input ending at the state prompt enqueues nothing.
        let mut q = queue();
        run("e\n", &mut q);
        assert!(q.is_empty());
    }

    #[test]
    fn test_info_id_on_following_line() {
        let mut q = queue();
        q.enqueue(ProcessState::Idle);

        let text = run("i\n\n0\n\nq\n", &mut q);
        assert!(text.contains("---- PCB INFO ----\n"));
        assert!(text.contains("State : IDLE\n"));
        assert!(!text.contains("Invalid Operation"));

        let text = run("i\nzero\n\nq\n", &mut q);
        assert_eq!(text.matches("Invalid Operation").count(), 1);

        let text = run("i\n", &mut q);
        assert!(text.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_state_prompt_skips_blank_lines() {
        let mut q = queue();
        run("e\n\n  \nd\nq\n", &mut q);
        assert_eq!(q.len(), 1);
        assert_eq!(q.info(Pid(0)).map(|p| p.state()), Some(ProcessState::Ready));
    }

    #[test]
    fn test_blank_lines_only_redraw() {
        let mut q = queue();
        let text = run("\n\nq\n", &mut q);
        assert_eq!(text.matches("Jobs List : nullptr").count(), 3);
        assert!(!text.contains("Invalid Operation"));
    }
}
