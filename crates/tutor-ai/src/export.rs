//! Plain-text transcript export.
//!
//! Layout: a title line, a rule of 60 `=`, a blank line, then one
//! `"<You|Tutor>: <text>"` block per turn, each followed by a blank line.
//! The output depends only on the transcript, so repeated exports of the
//! same transcript are byte-identical.

use std::fmt::Write as _;
use std::path::Path;

use crate::Turn;

pub const LOG_TITLE: &str = "Personal Learning Tutor - Session Log";

/// Render `transcript` in the export layout.
pub fn render_log(transcript: &[Turn]) -> String {
    let mut out = String::new();
    out.push_str(LOG_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(60));
    out.push_str("\n\n");
    for turn in transcript {
        // Writing to a String cannot fail.
        let _ = write!(out, "{}: {}\n\n", turn.speaker().label(), turn.text());
    }
    out
}

/// Write `transcript` to `path`, replacing any existing file.
pub fn write_log(path: &Path, transcript: &[Turn]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, render_log(transcript))
}
