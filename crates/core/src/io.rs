//! Output file handling.

use std::{
    fs::{Permissions, create_dir_all, metadata, read},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::Builder;

use crate::{
    config::{DEFAULT_FILE_MODE, TEMP_FILE_PREFIX},
    error::{Error, Result},
};

/// A generated module's destination.
///
/// Writes are staged in a scratch file next to the destination and renamed
/// over it, so readers see either the old contents or the new ones.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file exists and already holds exactly `data`.
    pub fn has_contents(&self, data: impl AsRef<[u8]>) -> bool {
        read(&self.path).is_ok_and(|current| current == data.as_ref())
    }

    /// Replace the file's contents in one rename.
    ///
    /// The new file keeps the permissions of the one it replaces, or gets
    /// [`DEFAULT_FILE_MODE`] when there was none. On failure the scratch file
    /// is removed and the destination keeps whatever it held before.
    pub fn write_atomic(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.ensure_parent_dir()?;
        let emission = |source: io::Error| Error::Emission { path: self.path.clone(), source };

        let mut staged = Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(".tmp")
            .tempfile_in(self.parent_dir())
            .map_err(emission)?;
        if let Some(permissions) = self.permissions() {
            staged.as_file().set_permissions(permissions).map_err(emission)?;
        }
        staged.write_all(data.as_ref()).map_err(emission)?;
        staged.as_file().sync_all().map_err(emission)?;
        staged.persist(&self.path).map_err(|e| emission(e.error))?;
        Ok(())
    }

    /// Create parent directory if it doesn't exist.
    pub fn ensure_parent_dir(&self) -> Result<()> {
        let parent = self.parent_dir();
        create_dir_all(parent)
            .map_err(|source| Error::Emission { path: parent.to_path_buf(), source })
    }

    /// Permissions for the file about to replace this one.
    fn permissions(&self) -> Option<Permissions> {
        match metadata(&self.path) {
            Ok(existing) if existing.is_file() => Some(existing.permissions()),
            _ => default_permissions(),
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(DEFAULT_FILE_MODE))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

impl AsRef<Path> for OutputFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{read_dir, read_to_string, write};

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = tempdir().unwrap();
        let file = OutputFile::new(dir.path().join("nested/fonts.ts"));
        file.write_atomic("export {}\n").unwrap();
        assert_eq!(read_to_string(file.path()).unwrap(), "export {}\n");
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fonts.ts");
        write(&path, "old").unwrap();
        OutputFile::new(&path).write_atomic("new").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "new");
        assert_eq!(read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_failure_leaves_no_scratch_file() {
        let dir = tempdir().unwrap();
        // Renaming a file over a directory fails.
        let target = dir.path().join("fonts.ts");
        std::fs::create_dir(&target).unwrap();

        let result = OutputFile::new(&target).write_atomic("new");
        assert!(matches!(result, Err(Error::Emission { .. })));
        assert!(target.is_dir());
        assert_eq!(read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::{fs::set_permissions, os::unix::fs::PermissionsExt};

        let dir = tempdir().unwrap();
        for existing in [0o644, 0o640, 0o664] {
            let path = dir.path().join("fonts.ts");
            write(&path, "old").unwrap();
            set_permissions(&path, Permissions::from_mode(existing)).unwrap();

            OutputFile::new(&path).write_atomic("new").unwrap();
            assert_eq!(mode(&path), existing);
            assert_eq!(read_to_string(&path).unwrap(), "new");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_new_file_mode() {
        let dir = tempdir().unwrap();
        let file = OutputFile::new(dir.path().join("fonts.ts"));
        file.write_atomic("new").unwrap();
        assert_eq!(mode(file.path()), DEFAULT_FILE_MODE);
    }

    #[test]
    fn test_has_contents() {
        let dir = tempdir().unwrap();
        let file = OutputFile::new(dir.path().join("fonts.ts"));
        assert!(!file.has_contents("a"));
        file.write_atomic("a").unwrap();
        assert!(file.has_contents("a"));
        assert!(!file.has_contents("b"));
    }
}
