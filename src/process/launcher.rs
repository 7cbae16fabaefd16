use std::io;
use std::process::{Command, Stdio};

use super::ProcessError;
use crate::input::TokenList;

/// How a launched child finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Exited(i32),
    Signaled(i32),
}

impl ExitOutcome {
    pub fn success(&self) -> bool {
        matches!(self, ExitOutcome::Exited(0))
    }
}

/// Runs external programs one at a time, blocking until each one is gone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Launcher;

impl Launcher {
    pub fn new() -> Self {
        Self
    }

    /// `tokens[0]` is looked up on `PATH`; the whole list becomes argv.
    pub fn launch(&self, tokens: &TokenList) -> Result<ExitOutcome, ProcessError> {
        let args = tokens.as_slice();
        let Some((program, rest)) = args.split_first() else {
            return Ok(ExitOutcome::Exited(0));
        };

        let child = Command::new(program)
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ProcessError::from_spawn(program, e))?;

        let pid = child.id() as libc::pid_t;
        log::debug!("spawned {} as pid {}", program.to_string_lossy(), pid);

        wait_for_exit(pid)
    }
}

/// Stops and continues do not end the wait; only exit or a fatal signal does.
fn wait_for_exit(pid: libc::pid_t) -> Result<ExitOutcome, ProcessError> {
    let mut status: libc::c_int = 0;
    loop {
        // SAFETY: `pid` is our own unreaped child and `status` outlives the call.
        let rc = unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED) };
        if rc == -1 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(ProcessError::Wait(err));
        }

        if libc::WIFEXITED(status) {
            let code = libc::WEXITSTATUS(status);
            log::debug!("pid {} exited with {}", pid, code);
            return Ok(ExitOutcome::Exited(code));
        }
        if libc::WIFSIGNALED(status) {
            let sig = libc::WTERMSIG(status);
            log::debug!("pid {} killed by signal {}", pid, sig);
            return Ok(ExitOutcome::Signaled(sig));
        }
        if libc::WIFSTOPPED(status) {
            log::debug!("pid {} stopped by signal {}", pid, libc::WSTOPSIG(status));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::tokenize;
    use std::ffi::{OsStr, OsString};
    use std::os::unix::ffi::OsStrExt;

    #[test]
    fn test_launch_success() {
        let outcome = Launcher::new().launch(&tokenize(b"true")).unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(0));
        assert!(outcome.success());
    }

    #[test]
    fn test_launch_failure_status() {
        let outcome = Launcher::new().launch(&tokenize(b"false")).unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(1));
        assert!(!outcome.success());
    }

    #[test]
    fn test_arguments_are_passed() {
        let outcome = Launcher::new().launch(&tokenize(b"test a = a")).unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(0));
        let outcome = Launcher::new().launch(&tokenize(b"test a = b")).unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(1));
    }

    #[test]
    fn test_non_utf8_argument_reaches_child() {
        let tokens: TokenList = vec![
            OsString::from("sh"),
            OsString::from("-c"),
            OsString::from(r#"test "$1" = "$(printf 'a\377b')""#),
            OsString::from("sh"),
            OsStr::from_bytes(b"a\xffb").to_os_string(),
        ]
        .into_iter()
        .collect();
        let outcome = Launcher::new().launch(&tokens).unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(0));
    }

    #[test]
    fn test_killed_by_signal() {
        let tokens: TokenList = ["sh", "-c", "kill -9 $$"].into_iter().collect();
        let outcome = Launcher::new().launch(&tokens).unwrap();
        assert_eq!(outcome, ExitOutcome::Signaled(libc::SIGKILL));
    }

    #[test]
    fn test_stop_does_not_end_wait() {
        // The child stops itself and a background helper resumes it.
        let tokens: TokenList = ["sh", "-c", "(sleep 1; kill -CONT $$) & kill -STOP $$; exit 3"]
            .into_iter()
            .collect();
        let outcome = Launcher::new().launch(&tokens).unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(3));
    }

    #[test]
    fn test_command_not_found() {
        let result = Launcher::new().launch(&tokenize(b"doesnotexist123"));
        assert!(matches!(result, Err(ProcessError::CommandNotFound(cmd)) if cmd == "doesnotexist123"));
    }

    #[test]
    fn test_permission_denied() {
        // Directories cannot be executed.
        let dir = std::env::temp_dir();
        let tokens: TokenList = [dir].into_iter().collect();
        let result = Launcher::new().launch(&tokens);
        assert!(matches!(result, Err(ProcessError::PermissionDenied(_))));
    }

    #[test]
    fn test_empty_tokens_do_nothing() {
        let outcome = Launcher::new().launch(&TokenList::default()).unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(0));
    }
}
