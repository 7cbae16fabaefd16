mod paths;
mod vars;

use std::path::PathBuf;

/// Accessor for the process-wide environment store and working directory.
/// Holds no state of its own; every call goes straight to the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl Environment {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug)]
pub enum EnvError {
    HomeDirNotFound,
    VarNotFound(String),
    InvalidName(String),
    InvalidValue(&'static str),
    ChangeDir { path: PathBuf, source: std::io::Error },
    IoError(std::io::Error),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::HomeDirNotFound => write!(f, "home directory not found"),
            EnvError::VarNotFound(var) => write!(f, "environment variable not found: {}", var),
            EnvError::InvalidName(name) => write!(f, "invalid variable name: {:?}", name),
            EnvError::InvalidValue(val) => write!(f, "invalid value: {}", val),
            EnvError::ChangeDir { path, source } => write!(f, "{}: {}", path.display(), source),
            EnvError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for EnvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnvError::ChangeDir { source, .. } => Some(source),
            EnvError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EnvError {
    fn from(e: std::io::Error) -> Self {
        EnvError::IoError(e)
    }
}
