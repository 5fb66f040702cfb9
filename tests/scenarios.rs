use std::num::NonZeroUsize;

use mysh::builtins::{Builtin, HELP_TEXT};
use mysh::process::{ChildStatus, ExitOutcome, ForkExec, Launcher};
use mysh::repl::{self, ScriptedSource};
use mysh::{BangError, History, Outcome, Shell, ShellError, SpawnError};

#[derive(Default)]
struct Recorder {
    runs: Vec<Vec<String>>,
}

impl Launcher for Recorder {
    fn spawn_and_wait(&mut self, argv: &[String]) -> Result<ExitOutcome, SpawnError> {
        self.runs.push(argv.to_vec());
        Ok(ExitOutcome {
            pid: 100 + self.runs.len() as i32,
            status: ChildStatus::Exited(0),
        })
    }
}

fn shell(capacity: usize, verbose: bool) -> Shell<Recorder, Vec<u8>> {
    let history = History::new(NonZeroUsize::new(capacity).unwrap());
    Shell::new(history, verbose, Recorder::default(), Vec::new())
}

/// Runs `lines` through the read loop; returns the shell, prompts and stdout.
fn session(capacity: usize, lines: &[&str]) -> (Shell<Recorder, Vec<u8>>, Vec<String>, String) {
    let mut sh = shell(capacity, false);
    let mut input = ScriptedSource::new(lines.iter().copied());
    repl::run(&mut sh, &mut input).unwrap();
    let out = String::from_utf8(sh.output().clone()).unwrap();
    (sh, input.prompts().to_vec(), out)
}

#[test]
fn scenario_a_eviction_shows_last_three() {
    let mut sh = shell(3, false);
    for line in ["echo x", "echo y", "echo z", "echo w"] {
        sh.handle_line(line).unwrap();
    }
    let listed: Vec<_> = sh.history().iter().collect();
    assert_eq!(listed, vec![(2, "echo y"), (3, "echo z"), (4, "echo w")]);
    assert_eq!(sh.history().get(1), None);
}

#[test]
fn scenario_a_history_builtin_output() {
    let (sh, _, out) = session(3, &["echo x", "echo y", "echo z", "echo w", "history"]);
    assert_eq!(out, "3: echo z\n4: echo w\n5: history\n");
    assert_eq!(sh.launcher().runs.len(), 4);
}

#[test]
fn scenario_b_bang_reruns_help() {
    let (sh, _, out) = session(10, &["help", "!1"]);
    assert_eq!(out, format!("{HELP_TEXT}{HELP_TEXT}"));
    assert!(sh.launcher().runs.is_empty());
}

#[test]
fn scenario_b_resolves_to_builtin_outcome() {
    let mut sh = shell(10, false);
    assert_eq!(sh.handle_line("help").unwrap(), Outcome::Builtin(Builtin::Help));
    assert_eq!(sh.handle_line("!1").unwrap(), Outcome::Builtin(Builtin::Help));
    assert_eq!(sh.history().total_seen(), 2);
    assert_eq!(sh.history().get(2), Some("!1"));
}

#[test]
fn scenario_c_verbose_prints_tokens_before_running() {
    let mut sh = shell(10, false);
    sh.handle_line("verbose on").unwrap();
    sh.handle_line("ls -a").unwrap();
    let out = String::from_utf8(sh.output().clone()).unwrap();
    let expected = concat!(
        "     Command Entered (Verbatim): ls -a\n",
        "     Command (Arguments Stripped): ls\n",
        "     Input command tokens:\n",
        "0:ls\n",
        "1:-a\n",
        "     Parent waited on pid: 101\n",
        "     Child exit status: exited with 0\n",
    );
    assert_eq!(out, expected);
    assert_eq!(sh.launcher().runs, vec![vec!["ls".to_string(), "-a".to_string()]]);
}

#[test]
fn scenario_d_out_of_range_bang_is_not_fatal() {
    let (sh, prompts, out) = session(10, &["echo a", "!99", "echo b"]);
    assert_eq!(prompts[..4], ["mysh[0]> ", "mysh[1]> ", "mysh[2]> ", "mysh[3]> "]);
    assert_eq!(out, "");
    assert_eq!(sh.launcher().runs.len(), 2);

    let mut sh = shell(10, false);
    sh.handle_line("echo a").unwrap();
    let before = sh.history().total_seen();
    let err = sh.handle_line("!99").unwrap_err();
    assert!(matches!(err, ShellError::Bang(BangError::NotInHistory(ref n)) if n == "99"));
    assert!(sh.is_running());
    assert_eq!(sh.history().total_seen(), before + 1);
}

#[test]
fn scenario_e_quit_ends_the_loop() {
    let mut sh = shell(10, false);
    let mut input = ScriptedSource::new(["echo a", "quit", "echo never"]);
    repl::run(&mut sh, &mut input).unwrap();
    assert!(!sh.is_running());
    assert!(sh.history().is_empty());
    assert_eq!(input.remaining(), 1);
    assert_eq!(sh.launcher().runs.len(), 1);
}

#[test]
fn end_of_input_behaves_like_quit() {
    let (sh, prompts, _) = session(10, &["echo a"]);
    assert!(!sh.is_running());
    assert!(sh.history().is_empty());
    assert_eq!(prompts, ["mysh[0]> ", "mysh[1]> "]);
}

#[test]
fn blank_lines_do_not_advance_the_prompt() {
    let (_, prompts, _) = session(10, &["", "   ", "echo a"]);
    assert_eq!(prompts, ["mysh[0]> ", "mysh[0]> ", "mysh[0]> ", "mysh[1]> "]);
}

#[test]
fn bang_indices_follow_eviction() {
    let mut sh = shell(2, false);
    sh.handle_line("echo one").unwrap();
    sh.handle_line("echo two").unwrap();
    // storing `!2` evicts ordinal 1
    sh.handle_line("!2").unwrap();
    assert_eq!(sh.launcher().runs.last().unwrap(), &vec!["echo".to_string(), "two".to_string()]);
    let err = sh.handle_line("!1").unwrap_err();
    assert!(matches!(err, ShellError::Bang(BangError::NotInHistory(ref n)) if n == "1"));
}

#[test]
fn real_processes_run_to_completion() {
    let history = History::new(NonZeroUsize::new(5).unwrap());
    let mut sh = Shell::new(history, false, ForkExec, Vec::new());
    match sh.handle_line("true").unwrap() {
        Outcome::Child(outcome) => assert_eq!(outcome.status, ChildStatus::Exited(0)),
        other => panic!("expected a child, got {other:?}"),
    }
    match sh.handle_line("false").unwrap() {
        Outcome::Child(outcome) => assert_ne!(outcome.status, ChildStatus::Exited(0)),
        other => panic!("expected a child, got {other:?}"),
    }
    match sh.handle_line("mysh-no-such-program --flag").unwrap() {
        Outcome::Child(outcome) => assert_eq!(outcome.status, ChildStatus::Exited(1)),
        other => panic!("expected a child, got {other:?}"),
    }
    assert!(sh.is_running());
    assert_eq!(sh.history().total_seen(), 3);
}
