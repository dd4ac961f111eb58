//! System clipboard.

use anyhow::{Context, Result};
use tracing::debug;

/// Writes `text` to the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard is not available")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")?;
    debug!(bytes = text.len(), "copied to clipboard");
    Ok(())
}
