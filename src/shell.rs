// shell.rs

use std::io::{self, Write};

use itertools::Itertools;

use crate::bang::{self, Resolved};
use crate::builtins::{parse_switch, Builtin, Command, HELP_TEXT};
use crate::error::{ShellError, SpawnError};
use crate::history::History;
use crate::parser::{is_blank, leading_token, tokenize};
use crate::process::{ExitOutcome, Launcher};

const INDENT: &str = "     ";

/// What handling one line amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line; nothing stored, nothing run.
    Skipped,
    Builtin(Builtin),
    /// `verbose` got neither `on` nor `off`.
    VerboseUnchanged,
    Child(ExitOutcome),
    Quit,
}

/// Session state: history, flags, and the collaborators that run
/// commands and receive output.
pub struct Shell<L, W> {
    history: History,
    verbose: bool,
    running: bool,
    launcher: L,
    out: W,
}

impl<L: Launcher, W: Write> Shell<L, W> {
    pub fn new(history: History, verbose: bool, launcher: L, out: W) -> Self {
        Self {
            history,
            verbose,
            running: true,
            launcher,
            out,
        }
    }

    pub fn prompt(&self) -> String {
        format!("mysh[{}]> ", self.history.total_seen())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Stores `line` in history and runs it.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, ShellError> {
        if is_blank(line) {
            return Ok(Outcome::Skipped);
        }
        let line = line.trim_end_matches(['\r', '\n']);
        let ordinal = self.history.append(line);
        log::debug!("#{ordinal}: {line:?}");

        if self.verbose {
            writeln!(self.out, "{INDENT}Command Entered (Verbatim): {line}")?;
            writeln!(
                self.out,
                "{INDENT}Command (Arguments Stripped): {}",
                leading_token(line).unwrap_or_default()
            )?;
        }

        match Command::classify(tokenize(line)) {
            Command::Builtin(builtin, args) => self.run_builtin(builtin, &args),
            Command::Bang(numeral, args) => self.run_bang(&numeral, &args, ordinal),
            Command::External(argv) => self.run_external(&argv),
            Command::Empty => Ok(Outcome::Skipped),
        }
    }

    /// Ends the session the way `quit` does. Used on end-of-input.
    pub fn shutdown(&mut self) {
        self.history.release();
        self.running = false;
    }

    fn announce(&mut self, name: &str) -> io::Result<()> {
        if self.verbose {
            writeln!(self.out, "{INDENT}COMMAND: {name} => processing!")?;
        }
        Ok(())
    }

    fn run_builtin(&mut self, builtin: Builtin, args: &[String]) -> Result<Outcome, ShellError> {
        self.announce(builtin.name())?;
        match builtin {
            Builtin::Help => {
                self.out.write_all(HELP_TEXT.as_bytes())?;
            }
            Builtin::History => {
                for (ordinal, line) in self.history.iter() {
                    writeln!(self.out, "{ordinal}: {line}")?;
                }
            }
            Builtin::Quit => {
                self.shutdown();
                return Ok(Outcome::Quit);
            }
            Builtin::Verbose => match parse_switch(args.first().map(String::as_str)) {
                Some(on) => {
                    log::debug!("verbose {}", if on { "on" } else { "off" });
                    self.verbose = on;
                }
                None => return Ok(Outcome::VerboseUnchanged),
            },
        }
        Ok(Outcome::Builtin(builtin))
    }

    /// `args` are the words after `!N` on the line being dispatched; a
    /// resolved built-in sees these, never the stored entry's arguments.
    fn run_bang(&mut self, numeral: &str, args: &[String], own_ordinal: usize) -> Result<Outcome, ShellError> {
        self.announce("bang")?;
        match bang::resolve(&self.history, numeral, own_ordinal) {
            Resolved::Builtin(builtin) => self.run_builtin(builtin, args),
            Resolved::External(argv) => self.run_external(&argv),
            Resolved::Invalid(err) => Err(err.into()),
        }
    }

    fn run_external(&mut self, argv: &[String]) -> Result<Outcome, ShellError> {
        if argv.is_empty() {
            return Err(SpawnError::EmptyCommand.into());
        }
        if self.verbose {
            writeln!(self.out, "{INDENT}Input command tokens:")?;
            let listing = argv.iter().enumerate().map(|(i, t)| format!("{i}:{t}")).join("\n");
            writeln!(self.out, "{listing}")?;
        }
        // The child inherits our stdout; anything buffered must land first.
        self.out.flush()?;

        let outcome = self.launcher.spawn_and_wait(argv)?;
        log::debug!("pid {} {}", outcome.pid, outcome.status);
        if self.verbose {
            writeln!(self.out, "{INDENT}Parent waited on pid: {}", outcome.pid)?;
            writeln!(self.out, "{INDENT}Child exit status: {}", outcome.status)?;
        }
        Ok(Outcome::Child(outcome))
    }
}
