//! System clipboard access for the typed text.

use anyhow::Result;

/// Copies `text` to the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_text(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .map_err(|e| anyhow::anyhow!("Failed to copy to clipboard: {e}"))
}

/// Copies `text` to the system clipboard.
#[cfg(not(feature = "clipboard"))]
pub fn copy_text(_text: &str) -> Result<()> {
    anyhow::bail!("Clipboard support was not compiled in (enable the `clipboard` feature)")
}

/// Short preview of copied text for the status bar.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    let single_line = text.replace('\n', " ⏎ ");
    if single_line.chars().count() > max_chars {
        let head: String = single_line.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        single_line
    }
}
