use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ArchiveRead(#[from] unipak_archive::Error),

    #[error("container '{id}' has no pathname metadata")]
    MissingPathMetadata { id: String },

    #[error("containers '{first}' and '{second}' both resolve to '{path}'")]
    DuplicateDestination {
        path: String,
        first: String,
        second: String,
    },

    #[error("container '{id}' resolves outside the output tree: '{path}'")]
    UnresolvablePath { id: String, path: String },

    #[error("output dir {} exists, refusing to overwrite", path.display())]
    DestinationExists { path: PathBuf },

    #[error("failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn filesystem_error_names_the_failing_path() {
        let err = Error::Filesystem {
            action: "remove staging dir",
            path: PathBuf::from("/tmp/unipak-abc123"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("remove staging dir"));
        assert!(message.contains("/tmp/unipak-abc123"));
    }
}
