use super::{Command, CommandError, Context, Status};
use crate::input::TokenList;

/// Ends the shell with a failure status. Arguments are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _tokens: &TokenList, _ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        Ok(Status::Exit(libc::EXIT_FAILURE))
    }
}
