use std::ffi::OsStr;
use std::io::Write;

mod cd;
mod exit;
mod get;
mod pid;
mod pwd;
mod set;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use get::GetCommand;
pub use pid::{PidCommand, PpidCommand};
pub use pwd::PwdCommand;
pub use set::SetCommand;

use crate::core::env::{EnvError, Environment};
use crate::input::TokenList;
use crate::process::{Launcher, ProcessError};

#[derive(Debug)]
pub enum CommandError {
    Env(EnvError),
    Process(ProcessError),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Env(err) => write!(f, "{}", err),
            CommandError::Process(err) => write!(f, "{}", err),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Env(err) => Some(err),
            CommandError::Process(err) => Some(err),
            CommandError::IoError(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::Env(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Process(err)
    }
}

/// What the command loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Exit(i32),
}

/// Everything a built-in may touch besides its tokens.
pub struct Context<'a> {
    pub env: &'a Environment,
    pub out: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    pub fn new(env: &'a Environment, out: &'a mut dyn Write) -> Self {
        Self { env, out }
    }

    /// Writes raw bytes followed by a newline.
    pub fn write_line(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.out.write_all(bytes)?;
        self.out.write_all(b"\n")
    }
}

pub trait Command {
    /// `tokens[0]` is the built-in's own name.
    fn execute(&self, tokens: &TokenList, ctx: &mut Context<'_>) -> Result<Status, CommandError>;
}

#[derive(Debug, Clone, Copy)]
pub enum Builtin {
    Cd(CdCommand),
    Exit(ExitCommand),
    Pid(PidCommand),
    Ppid(PpidCommand),
    Pwd(PwdCommand),
    Get(GetCommand),
    Set(SetCommand),
}

impl Command for Builtin {
    fn execute(&self, tokens: &TokenList, ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        match self {
            Builtin::Cd(cmd) => cmd.execute(tokens, ctx),
            Builtin::Exit(cmd) => cmd.execute(tokens, ctx),
            Builtin::Pid(cmd) => cmd.execute(tokens, ctx),
            Builtin::Ppid(cmd) => cmd.execute(tokens, ctx),
            Builtin::Pwd(cmd) => cmd.execute(tokens, ctx),
            Builtin::Get(cmd) => cmd.execute(tokens, ctx),
            Builtin::Set(cmd) => cmd.execute(tokens, ctx),
        }
    }
}

/// Built-ins in lookup order. Fixed for the life of the process.
pub const BUILTINS: [(&str, Builtin); 7] = [
    ("cd", Builtin::Cd(CdCommand)),
    ("exit", Builtin::Exit(ExitCommand)),
    ("pid", Builtin::Pid(PidCommand)),
    ("ppid", Builtin::Ppid(PpidCommand)),
    ("pwd", Builtin::Pwd(PwdCommand)),
    ("get", Builtin::Get(GetCommand)),
    ("set", Builtin::Set(SetCommand)),
];

/// First exact, case-sensitive match in `BUILTINS`.
pub fn lookup(name: &OsStr) -> Option<Builtin> {
    BUILTINS
        .iter()
        .find(|(builtin_name, _)| OsStr::new(builtin_name) == name)
        .map(|(_, builtin)| *builtin)
}

/// Routes a token list to a built-in or to the launcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor {
    env: Environment,
    launcher: Launcher,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
            launcher: Launcher::new(),
        }
    }

    pub fn execute(&self, tokens: &TokenList, out: &mut dyn Write) -> Result<Status, CommandError> {
        let Some(name) = tokens.command() else {
            return Ok(Status::Continue);
        };

        if let Some(builtin) = lookup(name) {
            log::debug!("builtin: {}", name.to_string_lossy());
            let mut ctx = Context::new(&self.env, out);
            return builtin.execute(tokens, &mut ctx);
        }

        // Anything we printed must reach the terminal before the child's output.
        out.flush()?;
        log::debug!("external: {}", name.to_string_lossy());
        let outcome = self.launcher.launch(tokens)?;
        if !outcome.success() {
            log::debug!("{} finished with {:?}", name.to_string_lossy(), outcome);
        }
        Ok(Status::Continue)
    }
}

/// Runs one command line through `cmd`, returning its result and stdout.
#[cfg(test)]
pub(crate) fn run_builtin(cmd: &impl Command, line: &str) -> (Result<Status, CommandError>, String) {
    let env = Environment::new();
    let mut out = Vec::new();
    let result = {
        let mut ctx = Context::new(&env, &mut out);
        cmd.execute(&crate::input::tokenize(line.as_bytes()), &mut ctx)
    };
    (result, String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::tokenize;

    fn dispatch(line: &str) -> (Result<Status, CommandError>, String) {
        let executor = CommandExecutor::new();
        let mut out = Vec::new();
        let result = executor.execute(&tokenize(line.as_bytes()), &mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_registry_order() {
        let names: Vec<&str> = BUILTINS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["cd", "exit", "pid", "ppid", "pwd", "get", "set"]);
    }

    #[test]
    fn test_builtin_command_detection() {
        for name in ["cd", "exit", "pid", "ppid", "pwd", "get", "set"] {
            assert!(lookup(OsStr::new(name)).is_some(), "{}", name);
        }
        for name in ["PID", "pi", "pidx", ""] {
            assert!(lookup(OsStr::new(name)).is_none(), "{}", name);
        }
    }

    #[test]
    fn test_lookup_distinguishes_shared_prefixes() {
        assert!(matches!(lookup(OsStr::new("pid")), Some(Builtin::Pid(_))));
        assert!(matches!(lookup(OsStr::new("ppid")), Some(Builtin::Ppid(_))));
        assert!(matches!(lookup(OsStr::new("pwd")), Some(Builtin::Pwd(_))));
    }

    #[test]
    fn test_empty_tokens_are_a_no_op() {
        let (result, out) = dispatch(" \t\r\n");
        assert!(matches!(result, Ok(Status::Continue)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_builtin_wins_over_launcher() {
        let (result, out) = dispatch("pid");
        assert!(matches!(result, Ok(Status::Continue)));
        assert_eq!(out, format!("The PID of the shell is {}\n", std::process::id()));
    }

    #[test]
    fn test_exit_is_dispatched() {
        let (result, _) = dispatch("exit");
        assert!(matches!(result, Ok(Status::Exit(code)) if code != 0));
    }

    #[test]
    fn test_unknown_command_goes_to_launcher() {
        let (result, out) = dispatch("pidx");
        assert!(matches!(
            result,
            Err(CommandError::Process(ProcessError::CommandNotFound(_)))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_case_sensitive_dispatch() {
        let (result, _) = dispatch("EXIT");
        assert!(matches!(
            result,
            Err(CommandError::Process(ProcessError::CommandNotFound(_)))
        ));
    }

    #[test]
    fn test_external_command_status_is_absorbed() {
        let (result, _) = dispatch("false");
        assert!(matches!(result, Ok(Status::Continue)));
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::Env(EnvError::VarNotFound("PWD".to_string())),
            CommandError::Process(ProcessError::CommandNotFound("x".to_string())),
            CommandError::IoError(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "io error",
            )),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
