use super::NotebookStore;
use crate::error::{NbresetError, Result};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

/// Follow symlinks so the real file gets replaced, not the link.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn write_replacement(target: &Path, content: &[u8]) -> io::Result<()> {
    let existing = fs::metadata(target).ok();
    if existing.is_some() {
        // Refuse what an in-place open for writing would refuse.
        OpenOptions::new().write(true).open(target)?;
    }

    let file_name = target
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let tmp_path = parent_dir(target).join(format!(
        ".{}-{}.tmp",
        file_name.to_string_lossy(),
        Uuid::new_v4()
    ));

    let result = fs::write(&tmp_path, content)
        .and_then(|_| match &existing {
            Some(meta) => fs::set_permissions(&tmp_path, meta.permissions()),
            None => Ok(()),
        })
        .and_then(|_| fs::rename(&tmp_path, target));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

impl NotebookStore for FsStore {
    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| NbresetError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<()> {
        let target = resolve_target(path);
        write_replacement(&target, content).map_err(|source| NbresetError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn leftover_tmp_files(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect()
    }

    #[test]
    fn test_read_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = FsStore::new()
            .read_text(&dir.path().join("missing.ipynb"))
            .unwrap_err();
        assert!(matches!(err, NbresetError::Read { .. }));
    }

    #[test]
    fn test_read_invalid_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.ipynb");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = FsStore::new().read_text(&path).unwrap_err();
        assert!(matches!(err, NbresetError::Read { .. }));
    }

    #[test]
    fn test_write_atomic_replaces_content_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nb.ipynb");
        fs::write(&path, "a much longer original content than the replacement").unwrap();

        FsStore::new().write_atomic(&path, b"short").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
        assert!(leftover_tmp_files(dir.path()).is_empty());
    }

    #[test]
    fn test_write_atomic_into_missing_dir_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("nb.ipynb");

        let err = FsStore::new().write_atomic(&path, b"{}").unwrap_err();
        assert!(matches!(err, NbresetError::Write { .. }));
        assert!(leftover_tmp_files(dir.path()).is_empty());
    }

    #[test]
    fn test_write_atomic_on_read_only_file_matches_in_place_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locked.ipynb");
        fs::write(&path, "original").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();
        // Privileged users can still open read-only files for writing.
        let writable = OpenOptions::new().write(true).open(&path).is_ok();

        let result = FsStore::new().write_atomic(&path, b"new");

        if writable {
            assert!(result.is_ok());
            assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        } else {
            assert!(matches!(result, Err(NbresetError::Write { .. })));
            assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        }
        assert!(leftover_tmp_files(dir.path()).is_empty());

        let mut perms = fs::metadata(&path).unwrap().permissions();
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        fs::set_permissions(&path, perms).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_follows_symlink() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.ipynb");
        let link = dir.path().join("link.ipynb");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        FsStore::new().write_atomic(&link, b"new").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nb.ipynb");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        FsStore::new().write_atomic(&path, b"new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn test_parent_dir_of_bare_file_name() {
        assert_eq!(parent_dir(Path::new("nb.ipynb")), Path::new("."));
        assert_eq!(parent_dir(Path::new("a/nb.ipynb")), Path::new("a"));
    }
}
