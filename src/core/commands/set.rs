use super::{Command, CommandError, Context, Status};
use crate::input::TokenList;

/// `set NAME [VALUE]`. Without a value the variable is bound to its own name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetCommand;

impl SetCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetCommand {
    fn execute(&self, tokens: &TokenList, ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        let Some(name) = tokens.get(1) else {
            writeln!(ctx.out, "please enter a variable")?;
            return Ok(Status::Continue);
        };

        let value = tokens.get(2).unwrap_or(name);
        ctx.env.set_var(name, value)?;
        Ok(Status::Continue)
    }
}
