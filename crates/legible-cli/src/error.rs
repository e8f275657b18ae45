use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read palette {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid color {name:?}: {source}")]
    InvalidColor {
        name: String,
        #[source]
        source: legible_core::Error,
    },
    #[error("invalid visual config: {0}")]
    InvalidConfig(#[source] legible_core::Error),
    #[error("palette needs at least one foreground and one background")]
    EmptyPalette,
}
