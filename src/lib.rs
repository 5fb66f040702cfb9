//! mysh: an interactive shell with a bounded command history.
//!
//! Lines are recorded in a fixed-capacity [`history::History`], then either
//! handled by a built-in (`help`, `history`, `quit`, `verbose`, `!N`) or run
//! as an external program through a [`process::Launcher`], one child at a
//! time. [`shell::Shell`] holds the session; [`repl::run`] drives it from a
//! [`repl::LineSource`].

pub mod bang;
pub mod builtins;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod parser;
pub mod process;
pub mod repl;
pub mod shell;
pub mod util;

pub use error::{BangError, ConfigError, ShellError, SpawnError};
pub use history::History;
pub use shell::{Outcome, Shell};
