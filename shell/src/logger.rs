use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::ShellError;

/// Writes `LEVEL message` lines to stderr so they stay out of the menu
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = write_record(&mut io::stderr().lock(), record);
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn write_record<W: Write>(out: &mut W, record: &Record<'_>) -> io::Result<()> {
    writeln!(out, "{:<5} {}", record.level(), record.args())
}

/// Installs the stderr logger. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), ShellError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use std::error::Error;

    fn render(level: Level, args: std::fmt::Arguments<'_>) -> String {
        let mut out = Vec::new();
        let record = Record::builder()
            .level(level)
            .target("jobq")
            .args(args)
            .build();
        write_record(&mut out, &record).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_record_format() {
        assert_eq!(
            render(Level::Warn, format_args!("[jobq] queue empty")),
            "WARN  [jobq] queue empty\n"
        );
        assert_eq!(
            render(Level::Debug, format_args!("[shell] pid {}", 3)),
            "DEBUG [shell] pid 3\n"
        );
    }

    // The only test that touches the global logger.
    #[test]
    fn test_init_sets_level_once() {
        init(LevelFilter::Debug).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Debug);

        let debug = Metadata::builder().level(Level::Debug).build();
        let trace = Metadata::builder().level(Level::Trace).build();
        assert!(LOGGER.enabled(&debug));
        assert!(!LOGGER.enabled(&trace));

        let err = init(LevelFilter::Trace).unwrap_err();
        assert!(matches!(err, ShellError::Logger(_)));
        assert!(err.source().is_some());
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
