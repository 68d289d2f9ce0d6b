use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "email-domain-check",
    version,
    about = "Vérifie les enregistrements MX du domaine de chaque adresse d'une liste."
)]
pub struct Cli {
    /// fichier d'adresses, une par ligne (`#` = commentaire)
    pub file: PathBuf,

    /// format: tsv|json|ndjson
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    /// logs plus détaillés sur stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        mailtools::cli::parse_or_exit()
    }
}
