use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{c_int, mode_t};

use super::error::*;
use super::panic::{BadAddrPanic, Panic, UnexpectedErrorPanic};

/// Permissions for new folders, before the process umask is applied.
const FOLDER_MODE: mode_t = 0o777;

pub(crate) fn err_no() -> c_int {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

pub(crate) fn pathname(path: &Path) -> Result<CString, NulByteError> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| NulByteError)
}

/// Returns whether `path` is a directory, following symlinks, or [`None`] if nothing exists there.
pub(crate) fn is_dir(path: &Path) -> Result<Option<bool>, StatError> {
    let pathname = pathname(path)?;

    let mut raw_meta: MaybeUninit<libc::stat> = MaybeUninit::uninit();
    // SAFETY: pathname is a valid nul-terminated string and raw_meta is valid for writes of a
    // stat struct.
    if unsafe { libc::stat(pathname.as_ptr(), raw_meta.as_mut_ptr()) } == -1 {
        match err_no() {
            libc::ENOENT => return Ok(None),
            libc::EACCES => Err(NoSearchError)?,
            libc::ELOOP => Err(ExcessiveLinksError)?,
            libc::ENAMETOOLONG => Err(PathLengthError)?,
            libc::ENOTDIR => Err(NonDirComponentError)?,
            libc::ENOMEM => Err(OOMError)?,
            libc::EOVERFLOW => Err(MetadataOverflowError)?,
            libc::EFAULT => BadAddrPanic.panic(),
            e => UnexpectedErrorPanic(e).panic(),
        }
    }
    // SAFETY: stat either initializes raw_meta or returns an error and we return early.
    let raw = unsafe { raw_meta.assume_init() };

    Ok(Some((raw.st_mode & libc::S_IFMT) == libc::S_IFDIR))
}

/// Creates a single folder. The parent must already exist. Succeeds if a folder is already there,
/// which can happen if someone else creates it first.
pub(crate) fn mkdir(path: &Path) -> Result<(), EnsureFolderError> {
    let pathname = pathname(path)?;

    // SAFETY: pathname is a valid nul-terminated string.
    if unsafe { libc::mkdir(pathname.as_ptr(), FOLDER_MODE) } == -1 {
        match err_no() {
            libc::EEXIST => match is_dir(path)? {
                Some(true) => (),
                _ => Err(NotADirectoryError)?,
            },
            libc::EACCES | libc::EPERM => Err(PermissionError)?,
            libc::EROFS => Err(ReadOnlyFSError)?,
            libc::ELOOP => Err(ExcessiveLinksError)?,
            libc::ENAMETOOLONG => Err(PathLengthError)?,
            libc::ENOENT => Err(MissingComponentError)?,
            libc::ENOTDIR => Err(NonDirComponentError)?,
            libc::EMLINK => Err(LinkCountError)?,
            libc::ENOSPC | libc::EDQUOT => Err(StorageExhaustedError)?,
            libc::ENOMEM => Err(OOMError)?,
            libc::EFAULT => BadAddrPanic.panic(),
            e => UnexpectedErrorPanic(e).panic(),
        }
    }

    Ok(())
}
