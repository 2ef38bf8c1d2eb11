use std::{
    io,
    path::PathBuf,
};

use image::ImageError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombineError{
    #[error("no files given")]
    NoFiles,

    #[error("too many files given: {count}, at most {max} are allowed")]
    TooManyFiles{ count: usize, max: usize },

    #[error("unable to access {}", path.display())]
    Io{ path: PathBuf, source: io::Error },

    #[error("unable to decode {}", path.display())]
    Decode{ path: PathBuf, source: ImageError },

    #[error("total height and width cannot be 0")]
    EmptyDimensions,

    #[error("combined canvas does not fit in 32 bit dimensions")]
    CanvasTooLarge,

    #[error("unsupported side '{0}': choose bottom or right")]
    UnsupportedMode(String),

    #[error("unsupported format '{0}': choose png or jpg")]
    UnsupportedFormat(String),

    #[error("unable to place {} on the canvas", path.display())]
    Placement{ path: PathBuf, source: ImageError },

    #[error("unable to encode {}", path.display())]
    Encode{ path: PathBuf, source: ImageError },
}

impl CombineError{
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self{
        Self::Io{ path: path.into(), source }
    }
}
