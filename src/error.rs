use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("an empty filename is not allowed")]
    EmptyPath,

    #[error("conf file \"{}\" not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("cannot parse files of type \"{tag}\"")]
    UnsupportedFormat { tag: String },

    #[error("failed to parse \"{}\". Reason: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("failed to read \"{}\". Reason: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
