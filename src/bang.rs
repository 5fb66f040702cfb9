// bang.rs

use crate::builtins::{Builtin, Command};
use crate::error::BangError;
use crate::history::History;
use crate::parser::tokenize;

/// A `!N` reference after lookup, consumed once by the dispatcher.
///
/// A resolved built-in carries no arguments: `verbose` reads its switch from
/// the `!N` line being dispatched, not from the stored entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Builtin(Builtin),
    External(Vec<String>),
    Invalid(BangError),
}

/// Resolves the text after `!` against `history`.
///
/// `own_ordinal` is the ordinal the `!N` line itself was stored under; it
/// has already been appended when this runs, so it is always in the
/// window and has to be rejected explicitly.
pub fn resolve(history: &History, numeral: &str, own_ordinal: usize) -> Resolved {
    if numeral.is_empty() || !numeral.bytes().all(|b| b.is_ascii_digit()) {
        return Resolved::Invalid(BangError::Malformed(numeral.to_string()));
    }
    // All digits but past usize: no command can ever carry that ordinal.
    let Ok(target) = numeral.parse::<usize>() else {
        return Resolved::Invalid(BangError::NotInHistory(numeral.to_string()));
    };
    if target == own_ordinal {
        return Resolved::Invalid(BangError::SelfReference(target));
    }
    let Some(line) = history.get(target) else {
        return Resolved::Invalid(BangError::NotInHistory(numeral.to_string()));
    };
    log::debug!("bang: !{target} -> {line:?}");

    match Command::classify(tokenize(line)) {
        Command::Builtin(builtin, _) => Resolved::Builtin(builtin),
        Command::External(tokens) => Resolved::External(tokens),
        // A stored `!M` is not re-resolved; it goes to exec like any other word.
        Command::Bang(..) => Resolved::External(tokenize(line)),
        Command::Empty => Resolved::Invalid(BangError::Empty(target)),
    }
}
