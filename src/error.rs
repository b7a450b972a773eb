use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error for {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("face {face} references {kind} {index}, but only {count} are defined")]
    IndexOutOfRange { face: usize, kind: &'static str, index: usize, count: usize },

    #[error("texture {} has no texels", path.display())]
    EmptyTexture { path: PathBuf },

    #[error("failed to start render workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
