// error.rs

use nix::errno::Errno;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("history size must be a positive integer, got `{0}`")]
    InvalidCapacity(String),
    #[error("unknown log level `{0}` in MYSH_LOG")]
    InvalidLogLevel(String),
}

/// Why a `!N` reference could not be resolved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BangError {
    #[error("!{0}: not a command number")]
    Malformed(String),
    #[error("!{0}: no such command in history")]
    NotInHistory(String),
    #[error("!{0}: a command cannot re-run itself")]
    SelfReference(usize),
    #[error("!{0}: history entry is empty")]
    Empty(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("nothing to run")]
    EmptyCommand,
    #[error("argument contains a NUL byte: {0:?}")]
    InvalidArgument(String),
    #[error("fork failed: {0}")]
    Fork(Errno),
    #[error("waiting for child failed: {0}")]
    Wait(Errno),
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Bang(#[from] BangError),
    #[error(transparent)]
    Spawn(#[from] SpawnError),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Errors that leave the session usable; the read loop reports them
    /// and prompts again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ShellError::Io(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
            _ => true,
        }
    }
}
