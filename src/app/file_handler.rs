//! Provides utility functions for the file system operations of a splice run.
//!
//! This includes reading target files, deriving the `~` sibling used as a
//! temporary file, and replacing a target through write-then-rename so a
//! reader of the original path never sees a half-written file.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::{Path, PathBuf};

use super::error::AppError;
use super::verbose_eprintln;

/// Reads a target file as UTF-8 text.
///
/// # Errors
/// Returns `AppError::ReadTarget` if the file cannot be read and
/// `AppError::TargetNotUtf8` if its bytes are not valid UTF-8.
pub fn read_target(path: &Path) -> Result<String, AppError> {
    let bytes = fs::read(path).map_err(|source| AppError::ReadTarget {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| AppError::TargetNotUtf8 {
        path: path.to_path_buf(),
    })
}

/// Returns the temporary sibling for `path`: the same name with `~` appended.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push("~");
    PathBuf::from(raw)
}

/// Writes string content to a specified file, creating or overwriting it.
///
/// The content goes through a `BufWriter`, which is flushed and the file
/// synced before returning so a following rename publishes complete data.
///
/// # Errors
/// Returns an `IoError` if any file operation (opening, writing, flushing) fails.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true) // Create if it doesn't exist.
        .write(true)
        .truncate(true) // Truncate to 0 bytes if it exists.
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

/// Replaces `path` with `content` through its `~` sibling.
///
/// The sibling is written in full, given the original's permissions, then
/// renamed over `path`. If any step fails the sibling is removed and the
/// original is left as it was.
///
/// # Errors
/// Returns the first `IoError` hit while writing, setting permissions or renaming.
pub fn replace_file_atomically(path: &Path, content: &str, quiet_mode: bool) -> Result<(), IoError> {
    let temp_path = temp_path_for(path);

    let result = write_content_to_file(&temp_path, content)
        .and_then(|()| copy_permissions(path, &temp_path))
        .and_then(|()| fs::rename(&temp_path, path));

    if result.is_err() {
        if let Err(e) = fs::remove_file(&temp_path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                verbose_eprintln!(
                    quiet_mode,
                    "Failed to remove temporary file {}: {}",
                    temp_path.display(),
                    e
                );
            }
        }
    }
    result
}

fn copy_permissions(from: &Path, to: &Path) -> Result<(), IoError> {
    let permissions = fs::metadata(from)?.permissions();
    fs::set_permissions(to, permissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_temp_path_appends_tilde() {
        assert_eq!(
            temp_path_for(Path::new("src/isa/x86/binemit.rs")),
            PathBuf::from("src/isa/x86/binemit.rs~")
        );
    }

    #[test]
    fn test_read_target_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_target(&temp.path().join("absent.rs")).unwrap_err();
        assert!(matches!(err, AppError::ReadTarget { .. }));
    }

    #[test]
    fn test_read_target_rejects_non_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob.rs");
        fs::write(&path, [0xc3, 0x28]).unwrap();

        let err = read_target(&path).unwrap_err();
        assert!(matches!(err, AppError::TargetNotUtf8 { .. }));
    }

    #[test]
    fn test_replace_file_atomically_swaps_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lib.rs");
        fs::write(&path, "old").unwrap();

        replace_file_atomically(&path, "new", true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp_path_for(&path).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_replace_file_atomically_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("script.rs");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o750)).unwrap();

        replace_file_atomically(&path, "new", true).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o750);
    }

    #[test]
    fn test_replace_file_atomically_cleans_up_on_failure() {
        let temp = TempDir::new().unwrap();
        // The original is gone, so copying its permissions fails after the sibling is written.
        let path = temp.path().join("vanished.rs");

        let err = replace_file_atomically(&path, "content", true);

        assert!(err.is_err());
        assert!(!temp_path_for(&path).exists());
        assert!(!path.exists());
    }
}
