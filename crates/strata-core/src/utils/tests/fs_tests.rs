use std::fs;

use tempfile::tempdir;

use crate::utils::fs::{read_pid_file, write_atomic, write_pid_file};

#[test]
fn test_write_pid_file_overwrites() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("pid");
    fs::write(&path, "999999999 stale").expect("Failed to seed pid file");

    write_pid_file(&path, 4242).expect("write_pid_file failed");

    assert_eq!(fs::read_to_string(&path).unwrap(), "4242");
    assert_eq!(read_pid_file(&path).unwrap(), 4242);
}

#[test]
fn test_write_atomic_requires_parent() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("missing").join("pid");

    let result = write_atomic(&path, b"1");

    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn test_read_pid_file_rejects_garbage() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("pid");
    fs::write(&path, "not a pid").expect("Failed to write file");

    assert!(read_pid_file(&path).is_err());
}
