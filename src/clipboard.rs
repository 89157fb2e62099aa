//! System clipboard adapter.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub struct Clipboard(ClipboardContext);

impl Clipboard {
    pub fn open() -> Result<Self> {
        ClipboardContext::new()
            .map(Clipboard)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }

    pub fn copy(&mut self, text: &str) -> Result<()> {
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // Some backends only take ownership once the contents are read back
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

/// Open the clipboard and copy `text` in one step.
pub fn copy(text: &str) -> Result<()> {
    Clipboard::open()?.copy(text)
}
