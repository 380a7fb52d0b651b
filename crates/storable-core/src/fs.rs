//! Filesystem utilities for atomic replacement of store files.

use std::fs;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Replace `destination` with `data` without ever exposing a partial file.
///
/// The bytes go to a sibling temp file first, which is synced and then renamed
/// over the destination. Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the parent cannot be created, the temp file cannot be
/// written, or the final rename fails.
pub fn write_atomic(destination: &Path, data: &[u8]) -> io::Result<()> {
    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let filename = destination
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid store filename"))?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::other(format!("System time error: {}", e)))?
        .as_nanos();
    let temp_path = parent.join(format!(".{}.{}.{}.tmp", filename, std::process::id(), nanos));

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;
    if let Err(err) = file.write_all(data).and_then(|_| file.sync_all()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(file);

    rename_with_fallback(&temp_path, destination)
}

/// Move `temp_path` over `destination`.
///
/// A plain `rename` is tried first; on POSIX it swaps the file in place. If it
/// fails (Windows refuses to overwrite), `destination` is deleted and the
/// rename retried, so the replacement is no longer atomic on that path. The
/// temp file is removed when both attempts fail.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    let Err(first) = fs::rename(temp_path, destination) else {
        return Ok(());
    };
    let _ = fs::remove_file(destination);
    match fs::rename(temp_path, destination) {
        Ok(()) => Ok(()),
        Err(second) => {
            let _ = fs::remove_file(temp_path);
            Err(io::Error::new(
                second.kind(),
                format!(
                    "Could not move {} to {} ({}; after removing target: {})",
                    temp_path.display(),
                    destination.display(),
                    first,
                    second
                ),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_parents() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("nested").join("store.json");

        write_atomic(&dest, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "{}");
    }

    #[test]
    fn test_write_atomic_replaces_and_leaves_no_temp() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("store.json");
        fs::write(&dest, "old").unwrap();

        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_rename_overwrites_existing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("dest.txt");
        fs::write(&dest, "old").unwrap();
        fs::write(&temp, "new").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_rename_removes_temp_and_keeps_target() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("occupied");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("inner.txt"), "kept").unwrap();
        fs::write(&temp, "new").unwrap();

        let err = rename_with_fallback(&temp, &dest).unwrap_err();

        assert!(err.to_string().contains("after removing target"));
        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(dest.join("inner.txt")).unwrap(), "kept");
    }
}
