use crate::{
    config::OutputFormat,
    error::CombineError,
};

use image::{
    codecs::{ jpeg::JpegEncoder, png::PngEncoder },
    DynamicImage,
    ExtendedColorType,
    ImageEncoder,
    ImageResult,
    RgbaImage,
};

use std::{
    fs::File,
    io::{ BufWriter, Write },
    path::Path,
};

/// Serializes the canvas into `writer`. Jpeg has no alpha channel, so the
/// canvas is flattened to rgb first and transparent padding comes out black.
pub fn write_canvas<W: Write>(canvas: RgbaImage, format: OutputFormat, writer: W) -> ImageResult<()>{
    let (w, h) = canvas.dimensions();
    match format {
        OutputFormat::Png => {
            PngEncoder::new(writer).write_image(canvas.as_raw(), w, h, ExtendedColorType::Rgba8)
        },
        OutputFormat::Jpeg{ quality } => {
            let rgb = DynamicImage::ImageRgba8(canvas).into_rgb8();
            JpegEncoder::new_with_quality(writer, quality)
                .write_image(rgb.as_raw(), w, h, ExtendedColorType::Rgb8)
        },
    }
}

/// Creates (or truncates) `out` and writes the canvas to it. The format is
/// already known to be valid here, so a file is only created when there is
/// something to write.
pub fn encode(canvas: RgbaImage, format: OutputFormat, out: &Path) -> Result<(), CombineError>{
    let file = File::create(out).map_err(|e| CombineError::io(out, e))?;
    let mut writer = BufWriter::new(file);
    write_canvas(canvas, format, &mut writer)
        .map_err(|e| CombineError::Encode{ path: out.to_path_buf(), source: e })?;
    writer.flush().map_err(|e| CombineError::io(out, e))?;
    Ok(())
}
