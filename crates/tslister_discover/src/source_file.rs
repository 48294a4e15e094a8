//! In-memory representation of a discovered source file.

use std::path::{Path, PathBuf};

use crate::error::DiscoverError;

/// A source file read into memory for one listing run.
///
/// Immutable once loaded; lives only for the duration of a single call into
/// the type lister.
#[derive(Debug)]
pub struct SourceFile {
    /// Filesystem path of the file.
    pub path: PathBuf,
    /// The full text content of the file.
    pub content: String,
}

impl SourceFile {
    /// Reads the file at `path` into memory.
    pub fn load(path: &Path) -> Result<Self, DiscoverError> {
        let content = std::fs::read_to_string(path).map_err(|e| DiscoverError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Reads every file in `paths`, preserving order.
    ///
    /// Any read failure aborts the whole load; a partially loaded set would
    /// produce a misleading type list.
    pub fn load_all(paths: &[PathBuf]) -> Result<Vec<Self>, DiscoverError> {
        paths.iter().map(|p| Self::load(p)).collect()
    }

    /// The path with backslashes normalized to forward slashes, as embedded
    /// in the assembled script.
    pub fn script_path(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Widget.ts");
        fs::write(&path, "class Widget {}").unwrap();

        let file = SourceFile::load(&path).unwrap();
        assert_eq!(file.content, "class Widget {}");
        assert_eq!(file.path, path);
    }

    #[test]
    fn load_missing_file_errors() {
        let err = SourceFile::load(Path::new("/nonexistent/Widget.ts")).unwrap_err();
        assert!(matches!(err, DiscoverError::Io { .. }));
    }

    #[test]
    fn load_all_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.ts");
        let b = dir.path().join("b.ts");
        fs::write(&a, "// a").unwrap();
        fs::write(&b, "// b").unwrap();

        let files = SourceFile::load_all(&[b.clone(), a.clone()]).unwrap();
        assert_eq!(files[0].path, b);
        assert_eq!(files[1].path, a);
    }

    #[test]
    fn load_all_fails_on_any_missing() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.ts");
        fs::write(&a, "// a").unwrap();
        let missing = dir.path().join("gone.ts");

        assert!(SourceFile::load_all(&[a, missing]).is_err());
    }

    #[test]
    fn script_path_uses_forward_slashes() {
        let file = SourceFile {
            path: PathBuf::from(r"Modules\Sub\Widget.ts"),
            content: String::new(),
        };
        assert_eq!(file.script_path(), "Modules/Sub/Widget.ts");
    }
}
