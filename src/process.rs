// process.rs

use std::ffi::CString;
use std::fmt;

use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{execvp, fork, write, ForkResult, Pid};

use crate::error::SpawnError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Exited(i32),
    Signaled(Signal),
}

impl ChildStatus {
    pub fn success(self) -> bool {
        matches!(self, ChildStatus::Exited(0))
    }
}

impl fmt::Display for ChildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildStatus::Exited(code) => write!(f, "exited with {code}"),
            ChildStatus::Signaled(sig) => write!(f, "killed by {sig:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub pid: i32,
    pub status: ChildStatus,
}

/// Runs an external command to completion.
pub trait Launcher {
    fn spawn_and_wait(&mut self, argv: &[String]) -> Result<ExitOutcome, SpawnError>;
}

/// fork + execvp + waitpid. One child at a time, waited unconditionally.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForkExec;

impl Launcher for ForkExec {
    fn spawn_and_wait(&mut self, argv: &[String]) -> Result<ExitOutcome, SpawnError> {
        let args = to_cstrings(argv)?;
        let program = args.first().ok_or(SpawnError::EmptyCommand)?;
        // Everything the child touches is built before fork.
        let prefix = format!("     {}: ", argv[0]);

        match unsafe { fork() } {
            Ok(ForkResult::Child) => {
                let errno = match execvp(program, &args) {
                    Err(errno) => errno,
                    Ok(never) => match never {},
                };
                let _ = write(libc::STDERR_FILENO, prefix.as_bytes());
                let _ = write(libc::STDERR_FILENO, errno.desc().as_bytes());
                let _ = write(libc::STDERR_FILENO, b"\n");
                unsafe { libc::_exit(1) }
            }
            Ok(ForkResult::Parent { child }) => {
                log::debug!("spawned {:?} as pid {}", argv, child);
                wait_for(child)
            }
            Err(errno) => {
                log::warn!("fork failed for {:?}: {}", argv, errno);
                Err(SpawnError::Fork(errno))
            }
        }
    }
}

fn to_cstrings(argv: &[String]) -> Result<Vec<CString>, SpawnError> {
    if argv.is_empty() {
        return Err(SpawnError::EmptyCommand);
    }
    argv.iter()
        .map(|arg| CString::new(arg.as_str()).map_err(|_| SpawnError::InvalidArgument(arg.clone())))
        .collect()
}

fn wait_for(child: Pid) -> Result<ExitOutcome, SpawnError> {
    loop {
        match waitpid(child, None) {
            Ok(WaitStatus::Exited(pid, code)) => {
                return Ok(ExitOutcome { pid: pid.as_raw(), status: ChildStatus::Exited(code) });
            }
            Ok(WaitStatus::Signaled(pid, sig, _core)) => {
                return Ok(ExitOutcome { pid: pid.as_raw(), status: ChildStatus::Signaled(sig) });
            }
            Ok(other) => log::debug!("pid {child}: ignoring wait status {other:?}"),
            Err(Errno::EINTR) => continue,
            Err(errno) => {
                log::warn!("waitpid({child}) failed: {errno}");
                return Err(SpawnError::Wait(errno));
            }
        }
    }
}
