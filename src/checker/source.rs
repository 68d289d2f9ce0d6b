use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

const COMMENT_MARKER: char = '#';

/// Lazy reader over a line-oriented list of addresses.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
pub struct EmailLines<R> {
    lines: Lines<R>,
}

impl<R: BufRead> EmailLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for EmailLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            let candidate = line.trim();
            if candidate.is_empty() || candidate.starts_with(COMMENT_MARKER) {
                continue;
            }
            return Some(Ok(candidate.to_string()));
        }
    }
}

/// Open `path` and iterate over its address lines.
pub fn read_emails(path: &Path) -> io::Result<EmailLines<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(EmailLines::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn collect(input: &str) -> Vec<String> {
        EmailLines::new(Cursor::new(input))
            .collect::<io::Result<Vec<_>>>()
            .expect("in-memory read")
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let out = collect("a@x.com\n\n   \n# header\n  #indented comment\nb@y.org\n");
        assert_eq!(out, vec!["a@x.com", "b@y.org"]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let out = collect("  spaced@x.com \t\r\n");
        assert_eq!(out, vec!["spaced@x.com"]);
    }

    #[test]
    fn hash_inside_line_is_kept() {
        let out = collect("odd#local@x.com\n");
        assert_eq!(out, vec!["odd#local@x.com"]);
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "# list\nuser@valid.com\n\nbroken-email\n").expect("write");
        let out = read_emails(file.path())
            .expect("open")
            .collect::<io::Result<Vec<_>>>()
            .expect("read");
        assert_eq!(out, vec!["user@valid.com", "broken-email"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = read_emails(&dir.path().join("absent.txt"))
            .err()
            .expect("missing file must fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn invalid_utf8_surfaces_as_error() {
        let bytes: &[u8] = b"ok@x.com\n\xff\xfe@bad\n";
        let mut lines = EmailLines::new(Cursor::new(bytes));
        assert_eq!(lines.next().expect("first").expect("utf8"), "ok@x.com");
        assert!(lines.next().expect("second").is_err());
    }
}
