use std::fs;
use std::io;
use std::path::Path;

/// Longest text a single `sendMessage` call accepts, in characters.
pub const TELEGRAM_MAX_LENGTH: usize = 4096;

/// Keep at most [`TELEGRAM_MAX_LENGTH`] characters. Plain prefix cut.
pub fn truncate_text(text: &str) -> &str {
    match text.char_indices().nth(TELEGRAM_MAX_LENGTH) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

/// Read a UTF-8 file and truncate it to the message limit.
pub fn read_text(path: &Path) -> io::Result<String> {
    let mut text = fs::read_to_string(path)?;
    let keep = truncate_text(&text).len();
    text.truncate(keep);
    Ok(text)
}
