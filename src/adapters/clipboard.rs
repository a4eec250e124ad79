use crate::domain::ports::Clipboard;
use crate::utils::error::{Result, TrackerError};

/// The desktop clipboard via `arboard`. Opened per write; best effort.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| TrackerError::ClipboardError {
            message: e.to_string(),
        })?;
        clipboard
            .set_text(text)
            .map_err(|e| TrackerError::ClipboardError {
                message: e.to_string(),
            })
    }
}
