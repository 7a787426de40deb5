//! Backdrop drawn behind the main menu.
use std::path::Path;

use anyhow::{Context, Result};

/// Rows of text painted (dimmed) behind the main menu options.
///
/// Passed explicitly into the menu handler; nothing reads it from a global.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuBackground {
    rows: Vec<String>,
}

const BUILTIN: &str = r"
        ____________________________________________________________
       /                                                            \
      |    +--+    +--+    +--+    +--+    +--+    +--+    +--+      |
      |    |  |    |  |    |  |    |  |    |  |    |  |    |  |      |
      |    |  |    |  |    |  |    |  |    |  |    |  |    |  |      |
      |  __|  |____|  |____|  |____|  |____|  |____|  |____|  |__    |
      | |                                                        |   |
      | |   .    .    .    .    .    .    .    .    .    .    .  |   |
      | |                                                        |   |
      | |   .    .    .    .    .    .    .    .    .    .    .  |   |
      | |________________________________________________________|   |
       \____________________________________________________________/
";

impl MenuBackground {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_owned).collect())
    }

    /// Load a plain-text backdrop, one row per line.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading menu background {}", path.display()))?;
        Ok(Self::from_text(&text))
    }

    pub fn builtin() -> Self {
        Self::from_text(BUILTIN)
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_keeps_one_row_per_line() {
        let background = MenuBackground::from_text("ab\n\ncd");
        assert_eq!(background.rows(), ["ab", "", "cd"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MenuBackground::load(&dir.path().join("menu.txt")).is_err());
    }
}
