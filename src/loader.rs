use crate::error::CombineError;

use image::{
    DynamicImage,
    GenericImageView,
    ImageReader,
};

use std::{
    fs,
    io,
    path::{ Path, PathBuf },
};

/// One decoded input image. Never mutated after loading.
#[derive(Debug, Clone)]
pub struct ImageDescriptor{
    pub image: DynamicImage,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ImageDescriptor{
    pub fn new(image: DynamicImage, path: impl Into<PathBuf>) -> Self{
        let (width, height) = image.dimensions();
        Self{ image, path: path.into(), width, height }
    }
}

/// Opens and decodes a single file. The format is sniffed from the content,
/// the extension is only a fallback.
pub fn load(path: &Path) -> Result<ImageDescriptor, CombineError>{
    if path.is_dir() {
        return Err(CombineError::io(path, io::Error::other("is a directory")));
    }
    // the reader, and the file handle inside it, is dropped when decode returns
    let image = ImageReader::open(path)
        .map_err(|e| CombineError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| CombineError::io(path, e))?
        .decode()
        .map_err(|e| CombineError::Decode{ path: path.to_path_buf(), source: e })?;
    let descriptor = ImageDescriptor::new(image, path);
    log::debug!(
        "loaded {} ({}x{})",
        path.display(), descriptor.width, descriptor.height,
    );
    Ok(descriptor)
}

/// Loads every input in order. Directories are skipped, anything else that
/// cannot be read or decoded aborts the whole set.
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<ImageDescriptor>, CombineError>{
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let meta = fs::metadata(path).map_err(|e| CombineError::io(path, e))?;
        if meta.is_dir() {
            log::debug!("skipping directory {}", path.display());
            continue;
        }
        images.push(load(path)?);
    }
    Ok(images)
}
