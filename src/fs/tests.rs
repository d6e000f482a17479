#![cfg(test)]

use std::fs::File;
use std::path::Path;

use super::*;
use super::panic::{BadAddrPanic, Panic, UnexpectedErrorPanic};
use crate::util::panic::assert_panics;

#[test]
fn test_ensure_folder_creates_parents() {
    let root = tempfile::tempdir().expect("temp dir should be creatable");
    let nested = root.path().join("a/b/c");

    let created = ensure_folder(&nested).expect("nested folders should be created");
    assert_eq!(created, nested, "The given path should be handed back.");
    assert!(nested.is_dir());
    assert!(root.path().join("a/b").is_dir(), "Missing parents should be created too.");

    assert_eq!(
        ensure_folder(&nested).expect("an existing folder is fine"),
        nested,
        "Ensuring an existing folder should be a no-op."
    );
}

#[test]
fn test_ensure_folder_refuses_files() {
    let root = tempfile::tempdir().expect("temp dir should be creatable");
    let file = root.path().join("file");
    File::create(&file).expect("file should be creatable");

    assert!(
        ensure_folder(&file).is_err_and(|e| e.is_not_a_directory()),
        "A regular file isn't a folder."
    );
    assert!(
        ensure_folder(file.join("child")).is_err_and(|e| e.is_non_dir_component()),
        "A folder can't be created inside a file."
    );
}

#[test]
fn test_ensure_folder_nul_byte() {
    assert!(
        ensure_folder(Path::new("bad\0path")).is_err_and(|e| e.is_nul_byte()),
        "Paths with interior nul bytes can't be passed to the OS."
    );
}

#[test]
fn test_impossible_errors_panic() {
    assert_panics!({ UnexpectedErrorPanic(libc::EINVAL).panic() });
    assert_panics!({ BadAddrPanic.panic() }, "A bad address should never be returned quietly.");
    assert_eq!(UnexpectedErrorPanic(libc::EINVAL).to_string(), "unexpected OS error with code: 22");
}
