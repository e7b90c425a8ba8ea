mod commands;
mod terminal;

use anyhow::Context;
use commands::CommandLine;
use greeter_common::config::Config;
use greeter_core::greeter::Greeter;
use greeter_core::log::TracingLog;
use terminal::{dialog::TerminalDialog, logging, print};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);
    print::header("greeting", cfg.quiet);

    let mut greeter = Greeter::new(TerminalDialog::new(&cfg), TracingLog);
    let outcome = greeter.run().context("greeting cycle failed")?;
    debug!(?outcome, "cycle finished");

    print::end_of_program(cfg.quiet);
    Ok(())
}
