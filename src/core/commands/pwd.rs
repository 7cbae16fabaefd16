use super::{Command, CommandError, Context, Status};
use crate::input::TokenList;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

/// Prints `PWD` as the environment reports it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, _tokens: &TokenList, ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        let pwd = ctx.env.var(OsStr::new("PWD"))?;
        ctx.write_line(pwd.as_bytes())?;
        Ok(Status::Continue)
    }
}
