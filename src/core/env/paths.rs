use super::{EnvError, Environment};
use std::env;
use std::path::{Path, PathBuf};

impl Environment {
    /// `HOME` first, then the account database.
    pub fn home_dir(&self) -> Result<PathBuf, EnvError> {
        env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .ok_or(EnvError::HomeDirNotFound)
    }

    pub fn current_dir(&self) -> Result<PathBuf, EnvError> {
        Ok(env::current_dir()?)
    }

    /// Changes directory and keeps `PWD` in step with it.
    pub fn change_dir(&self, path: &Path) -> Result<PathBuf, EnvError> {
        env::set_current_dir(path).map_err(|source| EnvError::ChangeDir {
            path: path.to_path_buf(),
            source,
        })?;

        let current = self.current_dir()?;
        env::set_var("PWD", &current);
        Ok(current)
    }
}
