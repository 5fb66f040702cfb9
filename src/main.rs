use std::io;

use mysh::config::Config;
use mysh::process::ForkExec;
use mysh::repl::{self, RustylineSource};
use mysh::{logging, History, Shell};

fn main() -> anyhow::Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("mysh: {err}");
            std::process::exit(1);
        }
    };
    logging::init(config.log_level);
    log::debug!("starting with {config:?}");

    let history = History::new(config.capacity);
    let mut shell = Shell::new(history, config.verbose, ForkExec, io::stdout());
    let mut input = RustylineSource::new(config.capacity.get())?;
    repl::run(&mut shell, &mut input)
}
