use crate::{
    config::StackMode,
    error::CombineError,
    layout,
    loader::ImageDescriptor,
};

use image::{
    GenericImage,
    RgbaImage,
};

/// Builds the combined canvas. Images are copied, not blended, into
/// consecutive regions along the stacking axis; whatever they leave uncovered
/// on the cross axis stays transparent.
pub fn compose(images: &[ImageDescriptor], mode: StackMode) -> Result<RgbaImage, CombineError>{
    let dims = layout::aggregate(images)?;
    log::debug!("{dims:?}");
    let (w, h) = dims.canvas_size(mode);
    log::debug!("canvas {w}x{h} ({mode})");
    let mut canvas = RgbaImage::new(w, h);

    let (mut x, mut y) = (0u32, 0u32);
    for d in images {
        canvas.copy_from(&d.image, x, y)
            .map_err(|e| CombineError::Placement{ path: d.path.clone(), source: e })?;
        match mode {
            StackMode::Bottom => y += d.height,
            StackMode::Right => x += d.width,
        }
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests{
    use super::*;

    use image::{ DynamicImage, Rgba };

    fn solid(w: u32, h: u32, px: [u8; 4], name: &str) -> ImageDescriptor{
        let img = RgbaImage::from_pixel(w, h, Rgba(px));
        ImageDescriptor::new(DynamicImage::ImageRgba8(img), name)
    }

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    #[test]
    fn bottom_stacks_rows(){
        let images = [solid(50, 100, RED, "a"), solid(50, 100, BLUE, "b")];
        let canvas = compose(&images, StackMode::Bottom).unwrap();
        assert_eq!(canvas.dimensions(), (50, 200));
        assert_eq!(canvas.get_pixel(0, 0).0, RED);
        assert_eq!(canvas.get_pixel(49, 99).0, RED);
        assert_eq!(canvas.get_pixel(0, 100).0, BLUE);
        assert_eq!(canvas.get_pixel(49, 199).0, BLUE);
    }

    #[test]
    fn right_places_columns(){
        let images = [solid(50, 100, RED, "a"), solid(50, 100, BLUE, "b")];
        let canvas = compose(&images, StackMode::Right).unwrap();
        assert_eq!(canvas.dimensions(), (100, 100));
        assert_eq!(canvas.get_pixel(49, 99).0, RED);
        assert_eq!(canvas.get_pixel(50, 0).0, BLUE);
        assert_eq!(canvas.get_pixel(99, 99).0, BLUE);
    }

    #[test]
    fn narrower_images_leave_transparent_padding(){
        let images = [solid(10, 5, RED, "wide"), solid(4, 5, BLUE, "narrow")];
        let canvas = compose(&images, StackMode::Bottom).unwrap();
        assert_eq!(canvas.dimensions(), (10, 10));
        assert_eq!(canvas.get_pixel(3, 9).0, BLUE);
        assert_eq!(canvas.get_pixel(4, 9).0, CLEAR);
        assert_eq!(canvas.get_pixel(9, 5).0, CLEAR);
    }

    #[test]
    fn pixels_are_copied_not_blended(){
        let half = [200, 100, 50, 128];
        let images = [solid(2, 2, half, "a")];
        let canvas = compose(&images, StackMode::Right).unwrap();
        assert_eq!(canvas.get_pixel(1, 1).0, half);
    }

    #[test]
    fn order_follows_input(){
        let images = [solid(3, 3, BLUE, "first"), solid(3, 3, RED, "second")];
        let canvas = compose(&images, StackMode::Right).unwrap();
        assert_eq!(canvas.get_pixel(0, 0).0, BLUE);
        assert_eq!(canvas.get_pixel(3, 0).0, RED);
    }

    #[test]
    fn empty_set_fails_before_allocating(){
        assert!(matches!(compose(&[], StackMode::Bottom), Err(CombineError::EmptyDimensions)));
    }
}
