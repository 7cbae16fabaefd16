/// Failures that end the command loop. Everything else is reported and absorbed.
#[derive(Debug)]
pub enum ShellError {
    Read(std::io::Error),
    Write(std::io::Error),
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Read(e) => write!(f, "failed to read input: {}", e),
            ShellError::Write(e) => write!(f, "failed to write output: {}", e),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Read(e) | ShellError::Write(e) => Some(e),
        }
    }
}
