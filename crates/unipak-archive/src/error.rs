use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("{} is not a gzip-compressed unity package", path.display())]
    NotAPackage { path: PathBuf },

    #[error("failed to unpack archive: {source}")]
    Unpack { source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
