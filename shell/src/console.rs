use std::io::{self, Write};

use process::{JobQueue, Pid, ProcessControlBlock};

const MENU: &str = r"
+-------------------------------------+
|           Enter an action           |
+-------------------------------------+
| e   -> enqueue new PCB              |
| d   -> dequeue PCB                  |
| i 5 -> print pcb's info given id=5  |
| s   -> sort jobs by id              |
| q   -> quit                         |
+-------------------------------------+
";

const STATE_PROMPT: &str = r"
    ENTER STATE:
        n -> New
        i -> Idle
        d -> Ready
        r -> Running
        s -> Suspended
";

pub const CONTINUE: &str = "Press Any Key To Continue...";

// ============================================================================
// Screen
// ============================================================================

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    cfg_if::cfg_if! {
        if #[cfg(windows)] {
            out.flush()?;
            std::process::Command::new("cmd").args(["/C", "cls"]).status()?;
            Ok(())
        } else {
            // Erase display, cursor home
            out.write_all(b"\x1B[2J\x1B[1;1H")?;
            out.flush()
        }
    }
}

/// Help box followed by the current job chain
pub fn draw_menu<W: Write>(out: &mut W, queue: &JobQueue) -> io::Result<()> {
    write!(out, "{}", MENU)?;
    writeln!(out, "Jobs List : {}", queue)?;
    out.flush()
}

pub fn state_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", STATE_PROMPT)?;
    out.flush()
}

// ============================================================================
// Messages
// ============================================================================

pub fn job_info<W: Write>(
    out: &mut W,
    pid: Pid,
    pcb: Option<&ProcessControlBlock>,
) -> io::Result<()> {
    match pcb {
        Some(pcb) => {
            writeln!(out, "---- PCB INFO ----")?;
            writeln!(out, "id    : #{}", pcb.pid())?;
            writeln!(out, "State : {}", pcb.state())?;
            writeln!(out, "Time  : {}", pcb.time())?;
            writeln!(out, "------------------------------")
        }
        None => writeln!(out, "PCB #{} Not found!", pid),
    }
}

pub fn invalid_operation<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Invalid Operation")
}

pub fn continue_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", CONTINUE)?;
    out.flush()
}

pub fn exiting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Exiting...")?;
    out.flush()
}
