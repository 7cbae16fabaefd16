use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

/// Space, tab, carriage return, newline and bell.
pub const DELIMITERS: [u8; 5] = [b' ', b'\t', b'\r', b'\n', 0x07];

/// One parsed command line: the command name followed by its arguments.
/// Tokens are copied byte for byte from the line and are never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<OsString>,
}

impl TokenList {
    pub fn command(&self) -> Option<&OsStr> {
        self.get(0)
    }

    /// `None` at and past the end of the list.
    pub fn get(&self, index: usize) -> Option<&OsStr> {
        self.tokens.get(index).map(OsString::as_os_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn as_slice(&self) -> &[OsString] {
        &self.tokens
    }
}

impl<S: Into<OsString>> FromIterator<S> for TokenList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(Into::into)
                .filter(|t: &OsString| !t.is_empty())
                .collect(),
        }
    }
}

pub fn tokenize(line: &[u8]) -> TokenList {
    line.split(|byte| DELIMITERS.contains(byte))
        .filter(|token| !token.is_empty())
        .map(OsStr::from_bytes)
        .collect()
}
