use super::{Command, CommandError, Context, Status};
use crate::input::TokenList;
use std::path::PathBuf;

/// `cd [dir]`. Without a directory goes to `HOME`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, tokens: &TokenList, ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        let target = match tokens.get(1) {
            Some(path) => PathBuf::from(path),
            None => ctx.env.home_dir()?,
        };

        let current = ctx.env.change_dir(&target)?;
        log::debug!("cwd is now {}", current.display());
        Ok(Status::Continue)
    }
}
