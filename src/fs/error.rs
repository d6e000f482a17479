use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error)]
#[display("path contains an interior nul byte")]
pub struct NulByteError;

#[derive(Debug, Display, Error)]
#[display("path exists but is not a directory")]
pub struct NotADirectoryError;

#[derive(Debug, Display, Error)]
#[display("search permission is denied for one of the directories in the provided path")]
pub struct NoSearchError;

#[derive(Debug, Display, Error)]
#[display("write permission is denied for the parent directory")]
pub struct PermissionError;

#[derive(Debug, Display, Error)]
#[display("path is on a read-only filesystem")]
pub struct ReadOnlyFSError;

#[derive(Debug, Display, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Error)]
#[display("parent directory has too many links")]
pub struct LinkCountError;

#[derive(Debug, Display, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Error)]
#[display("file metadata would overflow capacity")]
pub struct MetadataOverflowError;

#[derive(Debug, Display, Error)]
#[display("out of memory")]
pub struct OOMError;

/// Errors that can occur while checking for a folder.
#[derive(Debug, Display, From, Error, IsVariant)]
pub enum StatError {
    NulByte(NulByteError),
    NoSearch(NoSearchError),
    ExcessiveLinks(ExcessiveLinksError),
    PathLength(PathLengthError),
    NonDirComponent(NonDirComponentError),
    MetadataOverflow(MetadataOverflowError),
    OOM(OOMError),
}

/// Errors that can occur while making sure a folder exists, see
/// [`ensure_folder`](super::ensure_folder).
#[derive(Debug, Display, From, Error, IsVariant)]
pub enum EnsureFolderError {
    NulByte(NulByteError),
    NotADirectory(NotADirectoryError),
    NoSearch(NoSearchError),
    Permission(PermissionError),
    ReadOnlyFS(ReadOnlyFSError),
    ExcessiveLinks(ExcessiveLinksError),
    PathLength(PathLengthError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    LinkCount(LinkCountError),
    StorageExhausted(StorageExhaustedError),
    MetadataOverflow(MetadataOverflowError),
    OOM(OOMError),
}

impl From<StatError> for EnsureFolderError {
    fn from(value: StatError) -> Self {
        match value {
            StatError::NulByte(e) => e.into(),
            StatError::NoSearch(e) => e.into(),
            StatError::ExcessiveLinks(e) => e.into(),
            StatError::PathLength(e) => e.into(),
            StatError::NonDirComponent(e) => e.into(),
            StatError::MetadataOverflow(e) => e.into(),
            StatError::OOM(e) => e.into(),
        }
    }
}
