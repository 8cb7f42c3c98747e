use console::{measure_text_width, Term};
use std::{
    io,
    sync::atomic::{AtomicBool, Ordering},
};

/// Width of the right-aligned prefix column
const PREFIX_LEN: usize = 10;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Writes prefixed, human-facing lines to stderr, keeping stdout for results
pub struct Writer {
    term: Term,
}

impl Writer {
    pub fn new() -> Self {
        Writer {
            term: Term::stderr(),
        }
    }

    pub fn writeln(&self, prefix: &str, msg: &str) -> io::Result<()> {
        let prefix = gen_prefix(prefix);
        // Indent continuation lines so they line up with the message
        let indent = " ".repeat(measure_text_width(&prefix));
        for (i, line) in msg.lines().enumerate() {
            if i == 0 {
                self.term.write_line(&format!("{prefix}{line}"))?;
            } else {
                self.term.write_line(&format!("{indent}{line}"))?;
            }
        }
        Ok(())
    }
}

pub fn gen_prefix(prefix: &str) -> String {
    let width = measure_text_width(prefix);
    if width >= PREFIX_LEN {
        format!("{prefix} ")
    } else {
        format!("{}{prefix} ", " ".repeat(PREFIX_LEN - width))
    }
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        if $crate::cli::verbose() {
            $crate::WRITER
                .writeln(&::console::style("DEBUG").dim().to_string(), &format!($($arg)+))
                .ok();
        }
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::WRITER
            .writeln(&::console::style("INFO").blue().bold().to_string(), &format!($($arg)+))
            .ok();
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::WRITER
            .writeln(&::console::style("SUCCESS").green().bold().to_string(), &format!($($arg)+))
            .ok();
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::WRITER
            .writeln(&::console::style("WARNING").yellow().bold().to_string(), &format!($($arg)+))
            .ok();
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::WRITER
            .writeln(&::console::style("ERROR").red().bold().to_string(), &format!($($arg)+))
            .ok();
    };
}

#[macro_export]
macro_rules! due_to {
    ($($arg:tt)+) => {
        $crate::WRITER
            .writeln(&::console::style("DUE TO").yellow().bold().to_string(), &format!($($arg)+))
            .ok();
    };
}
