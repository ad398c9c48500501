use clap::Parser;
use tracing_subscriber::EnvFilter;

mod automaton;
mod cli;
mod dna;
mod file_reader;
mod report;
mod scan;
mod verbose;

#[cfg(test)]
mod test_utils;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    scan::run(&cli)
}
