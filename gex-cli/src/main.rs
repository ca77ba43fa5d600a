use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod commands;
mod fs;

use std::io::{self, Write};

use clap::{CommandFactory, Parser};

use self::{
    cli::Cli,
    commands::{Config, merge},
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    let stdout = io::stdout().lock();
    run(cli, stdout)
}

fn run<W>(cli: Cli, mut help_writer: W) -> anyhow::Result<()>
where
    W: Write,
{
    if !cli.has_sources() {
        Cli::command().write_help(&mut help_writer)?;
        return Ok(());
    }

    merge(Config::from(cli))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_without_sources() -> anyhow::Result<()> {
        for args in [&["gex", "-c", "-t"][..], &["gex", "-r", ""][..]] {
            let cli = Cli::try_parse_from(args)?;

            let mut buf = Vec::new();
            run(cli, &mut buf)?;

            let help = String::from_utf8(buf)?;
            assert!(help.contains("Usage:"));
            assert!(help.contains("--file_index"));
        }

        Ok(())
    }
}
