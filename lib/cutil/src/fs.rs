//! File system utilities.

use std::{
    fs, io,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Returns the directory a file lives in.
///
/// A bare file name such as `out.ppm` has an empty parent, which is resolved to `.`.
///
/// # Examples
///
/// ```
/// use cutil::fs::parent_dir;
/// use std::path::Path;
///
/// assert_eq!(parent_dir("out.ppm"), Path::new("."));
/// assert_eq!(parent_dir("/tmp/out.ppm"), Path::new("/tmp"));
/// ```
pub fn parent_dir(path: impl AsRef<Path>) -> PathBuf {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Writes `contents` to `path` so readers never observe a partially written file.
///
/// The data goes to a temporary file in the destination directory first, which is then
/// renamed over `path`. On failure the temporary file is removed and `path` is untouched.
///
/// # Arguments
///
/// * `path` - Destination file
/// * `contents` - Bytes to write
///
/// # Returns
///
/// Returns `Ok(())` on success, or an IO error if the directory is missing or unwritable.
///
/// # Examples
///
/// ```no_run
/// use cutil::fs::write_atomic;
///
/// write_atomic("/path/to/output.ppm", "P3\n0 0\n255\n").unwrap();
/// ```
pub fn write_atomic(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    let path = path.as_ref();
    let mut file = NamedTempFile::new_in(parent_dir(path))?;
    file.write_all(contents.as_ref())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Checks if a file exists at the specified path.
///
/// Returns `false` for directories.
pub fn file_exist(path: impl AsRef<Path>) -> bool {
    fs::metadata(path)
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}
