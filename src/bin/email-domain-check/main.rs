use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use mailtools::{build_resolver, read_emails, validate_emails};

mod args;
mod output;

use args::Cli;
use output::Report;

fn main() -> ExitCode {
    let cli = Cli::parse();
    mailtools::logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let path = &cli.file;
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }

    let lines = read_emails(path).with_context(|| format!("open {}", path.display()))?;
    let resolver = build_resolver()?;

    // stop at the first unreadable line, report it after the flush
    let mut read_error = None;
    let emails = lines.map_while(|line| line.map_err(|err| read_error = Some(err)).ok());

    let mut report = Report::new(cli.format, io::stdout().lock());
    for verdict in validate_emails(emails, &resolver) {
        report.push(verdict)?;
    }
    report.finish()?;

    if let Some(err) = read_error {
        return Err(err).with_context(|| format!("read {}", path.display()));
    }
    Ok(())
}
