// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::os::unix::fs::PermissionsExt;

use crate::builtins::Builtin;

/// Tab completion for the first word (built-ins, then executables on
/// `PATH`) and for the `verbose` switch.
#[derive(Debug, Default)]
pub struct ShellHelper;

impl ShellHelper {
    pub fn new() -> Self {
        Self
    }

    fn command_candidates(prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = Builtin::ALL
            .iter()
            .map(|b| b.name())
            .filter(|name| name.starts_with(prefix))
            .map(str::to_owned)
            .collect();
        if let Ok(path_var) = std::env::var("PATH") {
            for dir in std::env::split_paths(&path_var) {
                let Ok(entries) = std::fs::read_dir(dir) else {
                    continue;
                };
                for entry in entries.flatten() {
                    let file_name = entry.file_name();
                    let Some(name) = file_name.to_str() else {
                        continue;
                    };
                    if !name.starts_with(prefix) {
                        continue;
                    }
                    let executable = entry
                        .metadata()
                        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
                        .unwrap_or(false);
                    if executable {
                        names.push(name.to_string());
                    }
                }
            }
        }
        names.sort();
        names.dedup();
        names
    }
}

/// Candidates for completing `line[..pos]`, with the byte offset the
/// replacement starts at.
pub fn candidates(line: &str, pos: usize) -> (usize, Vec<String>) {
    let before = &line[..pos];
    let word_len: usize = before
        .chars()
        .rev()
        .take_while(|c| !c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    let start = pos - word_len;
    let word = &before[start..];
    let preceding: Vec<&str> = before[..start].split_whitespace().collect();
    match preceding.as_slice() {
        [] => (start, ShellHelper::command_candidates(word)),
        ["verbose"] => (
            start,
            ["on", "off"]
                .iter()
                .filter(|s| s.starts_with(word))
                .map(|s| s.to_string())
                .collect(),
        ),
        _ => (pos, Vec::new()),
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let (start, names) = candidates(line, pos);
        let pairs = names
            .into_iter()
            .map(|n| Pair {
                display: n.clone(),
                replacement: format!("{} ", n),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for ShellHelper {}
