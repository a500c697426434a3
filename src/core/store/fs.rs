//! Filesystem primitives for the env store.
//!
//! Reads map a missing file to `StoreError::NotFound`; writes go through a
//! sibling temp file and a rename so readers never see a truncated file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::core::constants::TEMP_SUFFIX;
use crate::error::{Result, StoreError};

/// Read a file to a string.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the file does not exist, or
/// `StoreError::Read` for any other I/O failure.
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf()).into()
        } else {
            StoreError::Read {
                path: path.to_path_buf(),
                source,
            }
            .into()
        }
    })
}

/// Replace a file's contents atomically.
///
/// Writes `<path>.<pid>.tmp` in the same directory, syncs it, then renames
/// it over `path`. The temp file is removed if any step fails. Concurrent
/// writers each rename a complete file; the last rename wins.
///
/// # Errors
///
/// Returns `StoreError::Write` if the temp file cannot be written or renamed.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = temp_path(path);
    trace!(tmp = %tmp.display(), "writing temp file");

    let result = write_synced(&tmp, contents).and_then(|()| fs::rename(&tmp, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::Write {
            path: path.to_path_buf(),
            source,
        }
        .into());
    }

    Ok(())
}

fn write_synced(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.create(true).truncate(true).write(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    // A stale temp file from an earlier crash keeps its old mode.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Per-process sibling of `path`, so concurrent writers never share a temp file.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}{}", std::process::id(), TEMP_SUFFIX));
    PathBuf::from(name)
}
