use clap::Parser;
use greeter_common::config::Config;

#[derive(Parser)]
#[command(name = "greeter")]
#[command(about = "Asks for your name and says hello.")]
pub struct CommandLine {
    /// Less output (-q hides the banner, -qq also hides diagnostics)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// More diagnostics (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Do not wait for a key press after showing a message
    #[arg(long)]
    pub no_wait: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            no_wait: self.no_wait,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
