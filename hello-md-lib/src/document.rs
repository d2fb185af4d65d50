//! Pure rendering of the hello-world document from a timestamp.

use chrono::NaiveDateTime;

/// Leading part of every generated filename.
pub const FILENAME_PREFIX: &str = "hello_world_";

/// Extension of every generated filename (without the dot).
pub const FILENAME_EXTENSION: &str = "md";

/// Markdown heading at the top of the document.
pub const HEADING: &str = "# Hello World";

/// Greeting line at the bottom of the document.
pub const GREETING: &str = "**Message:** Hello World!";

/// strftime pattern embedded in the filename.
const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// strftime pattern for the "Generated at" line.
const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filename and markdown body derived from a single timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelloDocument {
    pub filename: String,
    pub content: String,
}

impl HelloDocument {
    pub fn for_timestamp(ts: &NaiveDateTime) -> Self {
        let filename = format!(
            "{}{}.{}",
            FILENAME_PREFIX,
            ts.format(FILENAME_TIMESTAMP_FORMAT),
            FILENAME_EXTENSION
        );
        let content = format!(
            "{}\n\nGenerated at: {}\n\n{}\n",
            HEADING,
            ts.format(DISPLAY_TIMESTAMP_FORMAT),
            GREETING
        );
        Self { filename, content }
    }
}

/// Check whether `name` looks like `hello_world_YYYYMMDD_HHMMSS.md`.
pub fn is_hello_filename(name: &str) -> bool {
    let Some(rest) = name.strip_prefix(FILENAME_PREFIX) else {
        return false;
    };
    let Some(stamp) = rest
        .strip_suffix(FILENAME_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
    else {
        return false;
    };
    let bytes = stamp.as_bytes();
    bytes.len() == 15
        && bytes[8] == b'_'
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[9..].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
