use std::fmt;

pub const DEFAULT_PROMPT: &str = "308sh> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    InvalidArguments,
    InvalidArgumentCount,
}

impl fmt::Display for FlagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagError::InvalidArguments => write!(f, "Invalid arguments"),
            FlagError::InvalidArgumentCount => write!(f, "Invalid number of arguments"),
        }
    }
}

impl std::error::Error for FlagError {}

/// Startup configuration. Built once and borrowed by the command loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    prompt: String,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Flags {
    /// Accepts either no arguments or exactly `-p <prompt>`.
    pub fn parse(args: &[String]) -> Result<Self, FlagError> {
        match args {
            [] => Ok(Self::default()),
            [flag, prompt] if flag == "-p" => Ok(Self::with_prompt(prompt)),
            [_, _] => Err(FlagError::InvalidArguments),
            _ => Err(FlagError::InvalidArgumentCount),
        }
    }

    pub fn with_prompt(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_prompt() {
        let flags = Flags::parse(&[]).unwrap();
        assert_eq!(flags.prompt(), "308sh> ");
    }

    #[test]
    fn test_custom_prompt() {
        let flags = Flags::parse(&args(&["-p", "my> "])).unwrap();
        assert_eq!(flags.prompt(), "my> ");
    }

    #[test]
    fn test_empty_custom_prompt() {
        let flags = Flags::parse(&args(&["-p", ""])).unwrap();
        assert_eq!(flags.prompt(), "");
    }

    #[test]
    fn test_wrong_flag() {
        assert_eq!(
            Flags::parse(&args(&["-q", "x"])),
            Err(FlagError::InvalidArguments)
        );
        // Prefix matches are not enough.
        assert_eq!(
            Flags::parse(&args(&["-px", "x"])),
            Err(FlagError::InvalidArguments)
        );
    }

    #[test]
    fn test_wrong_count() {
        assert_eq!(
            Flags::parse(&args(&["-p"])),
            Err(FlagError::InvalidArgumentCount)
        );
        assert_eq!(
            Flags::parse(&args(&["-p", "a", "b"])),
            Err(FlagError::InvalidArgumentCount)
        );
    }

    #[test]
    fn test_flag_error_display() {
        assert_eq!(FlagError::InvalidArguments.to_string(), "Invalid arguments");
        assert_eq!(
            FlagError::InvalidArgumentCount.to_string(),
            "Invalid number of arguments"
        );
    }
}
