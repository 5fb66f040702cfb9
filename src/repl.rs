// repl.rs

use std::collections::VecDeque;
use std::io::Write;

use anyhow::Context as _;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};

use crate::completion::ShellHelper;
use crate::process::Launcher;
use crate::shell::Shell;
use crate::util::report_error;

/// Where command lines come from. `None` means end of input.
pub trait LineSource {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

pub struct RustylineSource {
    editor: Editor<ShellHelper, DefaultHistory>,
}

impl RustylineSource {
    /// `recall` caps the arrow-key history kept by the line editor.
    pub fn new(recall: usize) -> anyhow::Result<Self> {
        let config = Config::builder()
            .completion_type(CompletionType::List)
            .max_history_size(recall)
            .context("configuring line editor")?
            .build();
        let mut editor = Editor::with_config(config).context("creating line editor")?;
        editor.set_helper(Some(ShellHelper::new()));
        Ok(Self { editor })
    }
}

impl LineSource for RustylineSource {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("reading command line"),
        }
    }
}

/// Feeds a fixed list of lines and remembers every prompt shown.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// Prompts, reads and dispatches until `quit` or end of input.
pub fn run<L, W, S>(shell: &mut Shell<L, W>, input: &mut S) -> anyhow::Result<()>
where
    L: Launcher,
    W: Write,
    S: LineSource,
{
    while shell.is_running() {
        let prompt = shell.prompt();
        let Some(line) = input.next_line(&prompt)? else {
            log::debug!("end of input");
            shell.shutdown();
            break;
        };
        if let Err(err) = shell.handle_line(&line) {
            if !err.is_recoverable() {
                return Err(err).context("writing shell output");
            }
            log::debug!("recoverable: {err:?}");
            report_error(&err);
        }
    }
    Ok(())
}
