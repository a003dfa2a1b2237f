mod batch;
mod cli;
mod config;

use clap::Parser;
use env_logger::Env;

use batch::ConsoleReporter;
use cli::Cli;
use cli::commands::generate::handle_generate_command;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let reporter = ConsoleReporter::new();

    if let Err(err) = handle_generate_command(&cli.generate, &reporter) {
        log::debug!("Generation failed: {:?}", err);
        reporter.error(&err);
        std::process::exit(1);
    }
}
