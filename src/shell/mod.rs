use std::io::{BufRead, Write};

use crate::{
    core::commands::{CommandError, CommandExecutor, Status},
    error::ShellError,
    flags::Flags,
    highlight::Highlighter,
    input::{tokenize, LineReader},
};

/// The read, tokenize, dispatch loop over one input and two output streams.
pub struct Shell<R, O, E> {
    flags: Flags,
    reader: LineReader<R>,
    out: O,
    err: E,
    executor: CommandExecutor,
    highlighter: Highlighter,
}

impl<R: BufRead, O: Write, E: Write> Shell<R, O, E> {
    pub fn new(flags: Flags, input: R, out: O, err: E) -> Self {
        Shell {
            flags,
            reader: LineReader::new(input),
            out,
            err,
            executor: CommandExecutor::new(),
            highlighter: Highlighter::plain(),
        }
    }

    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Runs until `exit` or end-of-input and returns the process exit code.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            write!(self.out, "{}", self.flags.prompt()).map_err(ShellError::Write)?;
            self.out.flush().map_err(ShellError::Write)?;

            let Some(line) = self.reader.read_line().map_err(ShellError::Read)? else {
                log::debug!("end of input");
                writeln!(self.out).map_err(ShellError::Write)?;
                self.out.flush().map_err(ShellError::Write)?;
                return Ok(0);
            };

            if let Status::Exit(code) = self.execute_line(&line) {
                self.out.flush().map_err(ShellError::Write)?;
                return Ok(code);
            }
        }
    }

    /// Tokenizes and dispatches one line. Failures are reported, never returned.
    pub fn execute_line(&mut self, line: &[u8]) -> Status {
        let tokens = tokenize(line);
        match self.executor.execute(&tokens, &mut self.out) {
            Ok(status) => status,
            Err(e) => {
                let command = tokens.command().unwrap_or_default().to_string_lossy();
                self.report(&command, &e);
                Status::Continue
            }
        }
    }

    fn report(&mut self, command: &str, error: &CommandError) {
        let message = format!("{}: {}", command, error);
        // Best effort: a broken diagnostic stream must not stop the loop.
        let _ = self.out.flush();
        let _ = writeln!(self.err, "{}", self.highlighter.highlight_error(&message));
    }
}
