use clap::Parser;

/// Parse the command line, exiting with code 1 on usage errors (0 for
/// `--help`/`--version`).
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}
