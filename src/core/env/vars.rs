use super::{EnvError, Environment};
use std::env;
use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

impl Environment {
    /// Values come back as raw OS strings; nothing is decoded.
    pub fn var(&self, name: &OsStr) -> Result<OsString, EnvError> {
        env::var_os(name).ok_or_else(|| EnvError::VarNotFound(name.to_string_lossy().into_owned()))
    }

    /// Rejects what the OS store cannot hold instead of letting `set_var` panic.
    pub fn set_var(&self, name: &OsStr, value: &OsStr) -> Result<(), EnvError> {
        let bytes = name.as_bytes();
        if bytes.is_empty() || bytes.contains(&b'=') || bytes.contains(&0) {
            return Err(EnvError::InvalidName(name.to_string_lossy().into_owned()));
        }
        if value.as_bytes().contains(&0) {
            return Err(EnvError::InvalidValue("contains a NUL byte"));
        }

        env::set_var(name, value);
        Ok(())
    }
}
