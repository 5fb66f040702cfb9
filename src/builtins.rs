// builtins.rs

use std::fmt;
use std::str::FromStr;

pub const BANG: char = '!';

pub const HELP_TEXT: &str = "\
Internal Commands:
!N:      Re-execute the Nth command in the history list where N is a
         positive integer.
help:    Outputs this text.
history: Outputs the list of commands entered. Only 'remembers' a
         certain number of commands. The value can be set when first
         running the shell using the -h flag and specifying a
         positive integer afterwards. The default integer is 10.
quit:    Releases the command history and then cleanly terminates
         the shell.
verbose: Toggle verbose mode in the shell. Can be set when the shell
         is first run by using the -v flag. Verbose takes 'on' or
         'off' as arguments.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Help,
    History,
    Quit,
    Verbose,
}

impl Builtin {
    pub const ALL: [Builtin; 4] = [Builtin::Help, Builtin::History, Builtin::Quit, Builtin::Verbose];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Help => "help",
            Builtin::History => "history",
            Builtin::Quit => "quit",
            Builtin::Verbose => "verbose",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotBuiltin;

impl FromStr for Builtin {
    type Err = NotBuiltin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "help" => Ok(Builtin::Help),
            "history" => Ok(Builtin::History),
            "quit" => Ok(Builtin::Quit),
            "verbose" => Ok(Builtin::Verbose),
            _ => Err(NotBuiltin),
        }
    }
}

/// Argument to the `verbose` built-in.
pub fn parse_switch(arg: Option<&str>) -> Option<bool> {
    match arg {
        Some("on") => Some(true),
        Some("off") => Some(false),
        _ => None,
    }
}

/// What a tokenized line asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Builtin(Builtin, Vec<String>),
    /// Text following the `!` marker, not yet validated, and the rest of
    /// the `!N` line.
    Bang(String, Vec<String>),
    External(Vec<String>),
    Empty,
}

impl Command {
    pub fn classify(mut tokens: Vec<String>) -> Command {
        let Some(first) = tokens.first() else {
            return Command::Empty;
        };
        if let Some(numeral) = first.strip_prefix(BANG) {
            let numeral = numeral.to_string();
            tokens.remove(0);
            return Command::Bang(numeral, tokens);
        }
        match first.parse::<Builtin>() {
            Ok(builtin) => {
                tokens.remove(0);
                Command::Builtin(builtin, tokens)
            }
            Err(NotBuiltin) => Command::External(tokens),
        }
    }
}
