//! Dispatch from validated arguments to rendered output and exit status.

use std::io::{self, Write};

use chrono::Datelike;

use crate::args::{DateSource, Invocation, parse_invocation};
use crate::error::CalError;
use crate::formatter::{render_month, render_year};
use crate::types::ColumnsMode;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Diagnostic lines start with this program name.
pub const PROGRAM_NAME: &str = "Cal";

/// Everything one invocation produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: Vec<String>,
    pub stderr: Option<String>,
    pub exit_code: i32,
}

impl Outcome {
    pub fn success(lines: Vec<String>) -> Self {
        Outcome {
            stdout: lines,
            stderr: None,
            exit_code: EXIT_SUCCESS,
        }
    }

    /// Diagnostic line only; standard output stays empty.
    pub fn failure(error: &CalError) -> Self {
        Outcome {
            stdout: Vec::new(),
            stderr: Some(format!("{}: {}", PROGRAM_NAME, error)),
            exit_code: EXIT_FAILURE,
        }
    }

    /// Write rendered lines to `out` and the diagnostic, if any, to `err`.
    pub fn write_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        for line in &self.stdout {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        if let Some(message) = &self.stderr {
            writeln!(err, "{}", message)?;
            err.flush()?;
        }
        Ok(())
    }
}

/// Turns a command line into calendar output.
pub struct Router<D> {
    clock: D,
    columns: ColumnsMode,
}

impl<D: DateSource> Router<D> {
    pub fn new(clock: D) -> Self {
        Router {
            clock,
            columns: ColumnsMode::default(),
        }
    }

    /// Months per row used by the year view.
    pub fn with_columns(mut self, columns: ColumnsMode) -> Self {
        self.columns = columns;
        self
    }

    /// Validate `args` and render; nothing is written anywhere.
    pub fn dispatch<S: AsRef<str>>(&self, args: &[S]) -> Outcome {
        match parse_invocation(args) {
            Ok(invocation) => Outcome::success(self.render(invocation)),
            Err(error) => {
                tracing::debug!(%error, "argument validation failed");
                Outcome::failure(&error)
            }
        }
    }

    pub fn render(&self, invocation: Invocation) -> Vec<String> {
        tracing::debug!(?invocation, "rendering calendar");

        match invocation {
            Invocation::CurrentMonth => {
                let today = self.clock.today();
                render_month(today.month(), today.year())
            }
            Invocation::Year(year) => render_year(year, self.columns.months_per_row()),
            Invocation::Month { month, year } => render_month(month, year),
        }
    }

    /// Dispatch and write the outcome; returns the exit status.
    pub fn execute<S, O, E>(&self, args: &[S], out: &mut O, err: &mut E) -> io::Result<i32>
    where
        S: AsRef<str>,
        O: Write,
        E: Write,
    {
        let outcome = self.dispatch(args);
        outcome.write_to(out, err)?;
        Ok(outcome.exit_code)
    }
}
