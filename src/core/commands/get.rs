use super::{Command, CommandError, Context, Status};
use crate::input::TokenList;
use std::os::unix::ffi::OsStrExt;

#[derive(Debug, Clone, Copy, Default)]
pub struct GetCommand;

impl GetCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for GetCommand {
    fn execute(&self, tokens: &TokenList, ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        let Some(name) = tokens.get(1) else {
            writeln!(ctx.out, "please enter a variable")?;
            return Ok(Status::Continue);
        };

        match ctx.env.var(name) {
            Ok(value) => ctx.write_line(value.as_bytes())?,
            Err(_) => writeln!(ctx.out, "unable to find variable")?,
        }
        Ok(Status::Continue)
    }
}
