use std::path::Path;

use relative_path::{RelativePath, RelativePathBuf};

/// A markdown document under the notes root, as listed by the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl MarkdownFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = relative_path
            .as_str()
            .strip_suffix(".md")
            .unwrap_or(relative_path.as_str())
            .to_string();

        Self {
            relative_path,
            display_name,
        }
    }

    /// Builds from an absolute path found while scanning `notes_root`.
    ///
    /// `None` if the path is outside the root or not valid UTF-8.
    pub fn from_scanned(notes_root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(notes_root).ok()?;
        let relative = RelativePathBuf::from_path(relative).ok()?;
        Some(Self::new(relative))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Relative path without the `.md` extension.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl From<&str> for MarkdownFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
