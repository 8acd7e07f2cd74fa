//! Where book texts come from.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Extension of book files, compared case-insensitively.
pub const BOOK_EXTENSION: &str = "txt";

/// A selected book whose text can be read on any thread.
pub trait BookSource: Send + Sync {
    /// Identifier used in log lines and output file names.
    fn id(&self) -> &str;

    /// Reads the whole text.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Read`] if the text is missing or not valid UTF-8.
    fn read(&self) -> Result<String>;
}

/// A plain-text book on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFile {
    id: String,
    path: PathBuf,
}
impl BookFile {
    /// The identifier is the file name without its extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default();
        Self { id, path }
    }

    /// The book titled `title` inside `folder`.
    pub fn in_folder(folder: impl AsRef<Path>, title: impl AsRef<str>) -> Self {
        let path = folder.as_ref().join(format!("{}.{BOOK_EXTENSION}", title.as_ref()));
        Self {
            id: title.as_ref().to_string(),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
impl BookSource for BookFile {
    fn id(&self) -> &str {
        &self.id
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read(&self) -> Result<String> {
        let bytes = fs::read(&self.path).or_raise(|| ErrorKind::Read(self.id.clone()))?;
        String::from_utf8(bytes).or_raise(|| ErrorKind::Read(self.id.clone()))
    }
}

/// A book already held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBook {
    id: String,
    text: String,
}
impl TextBook {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
impl BookSource for TextBook {
    fn id(&self) -> &str {
        &self.id
    }

    fn read(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Lists the books of a folder, sorted by identifier. Subfolders are not
/// searched.
#[instrument(skip_all, fields(folder = %folder.as_ref().display()))]
pub fn list_books(folder: impl AsRef<Path>) -> Result<Vec<BookFile>> {
    let folder = folder.as_ref();
    let entries = fs::read_dir(folder).or_raise(|| ErrorKind::ListBooks(folder.to_path_buf()))?;
    let mut books = Vec::new();
    for entry in entries {
        let path = entry.or_raise(|| ErrorKind::ListBooks(folder.to_path_buf()))?.path();
        let is_book = path.is_file()
            && path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case(BOOK_EXTENSION));
        if is_book {
            books.push(BookFile::new(path));
        }
    }
    books.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::debug!(books = books.len(), "Listed books");
    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_books() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("西游记.txt"), "话说天下大势。").unwrap();
        fs::write(dir.path().join("红楼梦.TXT"), "满纸荒唐言。").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let books = list_books(dir.path()).unwrap();
        let ids: Vec<_> = books.iter().map(|book| book.id()).collect();
        let mut expected = vec!["西游记", "红楼梦"];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_list_missing_folder() {
        let dir = TempDir::new().unwrap();
        let err = list_books(dir.path().join("missing")).unwrap_err();
        assert!(matches!(*err, ErrorKind::ListBooks(_)));
    }

    #[test]
    fn test_read_book_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("book.txt"), "你好。").unwrap();
        let book = BookFile::in_folder(dir.path(), "book");
        assert_eq!(book.id(), "book");
        assert_eq!(book.read().unwrap(), "你好。");
    }

    #[test]
    fn test_read_errors() {
        let dir = TempDir::new().unwrap();
        let missing = BookFile::in_folder(dir.path(), "missing");
        assert_eq!(*missing.read().unwrap_err(), ErrorKind::Read("missing".to_string()));

        fs::write(dir.path().join("binary.txt"), [0xFF, 0xFE, 0x00, 0xC3]).unwrap();
        let binary = BookFile::new(dir.path().join("binary.txt"));
        assert_eq!(*binary.read().unwrap_err(), ErrorKind::Read("binary".to_string()));
    }
}
