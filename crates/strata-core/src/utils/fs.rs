use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Overwrite `path` with `contents`, replacing the file atomically.
///
/// The parent directory must already exist.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    if !parent.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("directory '{}' does not exist", parent.display()),
        ));
    }

    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(contents)?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write the decimal process id to `path`.
pub fn write_pid_file<P: AsRef<Path>>(path: P, pid: u32) -> io::Result<()> {
    write_atomic(path, pid.to_string().as_bytes())
}

/// Read back a process id written by [`write_pid_file`].
pub fn read_pid_file<P: AsRef<Path>>(path: P) -> io::Result<u32> {
    let content = fs::read_to_string(path)?;
    content
        .trim()
        .parse::<u32>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
