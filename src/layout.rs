use crate::{
    config::StackMode,
    error::CombineError,
    loader::ImageDescriptor,
};

/// Sums and maxima over a set of images. Both sums are always computed; which
/// one sizes the canvas depends on the stacking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions{
    pub total_height: u32,
    pub total_width: u32,
    pub max_height: u32,
    pub max_width: u32,
}

impl Dimensions{
    /// Canvas (width, height) for the given mode.
    pub fn canvas_size(&self, mode: StackMode) -> (u32, u32){
        match mode {
            StackMode::Bottom => (self.max_width, self.total_height),
            StackMode::Right => (self.total_width, self.max_height),
        }
    }
}

pub fn aggregate(images: &[ImageDescriptor]) -> Result<Dimensions, CombineError>{
    aggregate_sizes(images.iter().map(|d| (d.width, d.height)))
}

/// Same as `aggregate`, over bare (width, height) pairs.
pub fn aggregate_sizes<I>(sizes: I) -> Result<Dimensions, CombineError>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut dims = Dimensions::default();
    for (w, h) in sizes {
        dims.total_height = dims.total_height.checked_add(h).ok_or(CombineError::CanvasTooLarge)?;
        dims.total_width = dims.total_width.checked_add(w).ok_or(CombineError::CanvasTooLarge)?;
        dims.max_height = dims.max_height.max(h);
        dims.max_width = dims.max_width.max(w);
    }
    if dims.total_height == 0 && dims.total_width == 0 {
        return Err(CombineError::EmptyDimensions);
    }
    Ok(dims)
}
