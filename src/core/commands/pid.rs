use super::{Command, CommandError, Context, Status};
use crate::input::TokenList;
use std::os::unix::process::parent_id;

#[derive(Debug, Clone, Copy, Default)]
pub struct PidCommand;

impl PidCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PidCommand {
    fn execute(&self, _tokens: &TokenList, ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        writeln!(ctx.out, "The PID of the shell is {}", std::process::id())?;
        Ok(Status::Continue)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PpidCommand;

impl PpidCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PpidCommand {
    fn execute(&self, _tokens: &TokenList, ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        writeln!(ctx.out, "The PPID of the shell is {}", parent_id())?;
        Ok(Status::Continue)
    }
}
