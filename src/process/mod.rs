use std::fmt;

pub mod launcher;

pub use launcher::{ExitOutcome, Launcher};

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    PermissionDenied(String),
    Spawn(String, std::io::Error),
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(_) => write!(f, "command not found"),
            ProcessError::PermissionDenied(_) => write!(f, "permission denied"),
            ProcessError::Spawn(_, e) => write!(f, "failed to start: {}", e),
            ProcessError::Wait(e) => write!(f, "failed to wait for child: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Spawn(_, e) | ProcessError::Wait(e) => Some(e),
            _ => None,
        }
    }
}

impl ProcessError {
    pub(crate) fn from_spawn(command: &std::ffi::OsStr, e: std::io::Error) -> Self {
        let command = command.to_string_lossy().into_owned();
        match e.kind() {
            std::io::ErrorKind::NotFound => ProcessError::CommandNotFound(command),
            std::io::ErrorKind::PermissionDenied => ProcessError::PermissionDenied(command),
            _ => ProcessError::Spawn(command, e),
        }
    }
}
