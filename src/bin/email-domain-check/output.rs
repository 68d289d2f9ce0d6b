use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use mailtools::Verdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<email>\t<STATUS>` per line
    Tsv,
    /// one JSON array once every address is checked
    Json,
    /// one JSON object per line
    Ndjson,
}

/// Writes verdicts as they arrive (tsv, ndjson) or at the end (json).
pub struct Report<W: Write> {
    format: OutputFormat,
    out: W,
    pending: Vec<Verdict>,
}

impl<W: Write> Report<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self {
            format,
            out,
            pending: Vec::new(),
        }
    }

    pub fn push(&mut self, verdict: Verdict) -> Result<()> {
        match self.format {
            OutputFormat::Tsv => writeln!(self.out, "{}", verdict.to_tsv())?,
            OutputFormat::Ndjson => writeln!(self.out, "{}", serde_json::to_string(&verdict)?)?,
            OutputFormat::Json => self.pending.push(verdict),
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        if self.format == OutputFormat::Json {
            writeln!(self.out, "{}", serde_json::to_string_pretty(&self.pending)?)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
