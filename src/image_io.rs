//! PNG container read/write through the `image` crate.

use std::path::Path;

use image::{io::Reader, ColorType, ImageFormat};

use crate::{
    codec::Raster,
    error::{PixelDnaError, Result},
};

/// Decode an image and convert it to RGB8 whatever its stored layout.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path = path.as_ref();
    let img = Reader::open(path)
        .map_err(|e| PixelDnaError::unreadable(path, e))?
        .with_guessed_format()
        .map_err(|e| PixelDnaError::unreadable(path, e))?
        .decode()
        .map_err(|e| PixelDnaError::unreadable(path, e))?
        .to_rgb8();
    let (width, height) = img.dimensions();
    log::debug!("Loaded {width}x{height} image from {path:?}");
    Raster::from_raw(width as usize, height as usize, img.into_raw())
        .ok_or_else(|| PixelDnaError::unreadable(path, "pixel buffer does not match dimensions"))
}

pub fn save<P: AsRef<Path>>(path: P, raster: &Raster) -> Result<()> {
    let path = path.as_ref();
    let width = u32::try_from(raster.width())
        .map_err(|_| PixelDnaError::write_failure(path, "image too wide"))?;
    let height = u32::try_from(raster.height())
        .map_err(|_| PixelDnaError::write_failure(path, "image too tall"))?;
    image::save_buffer_with_format(
        path,
        raster.data(),
        width,
        height,
        ColorType::Rgb8,
        ImageFormat::Png,
    )
    .map_err(|e| PixelDnaError::write_failure(path, e))
}
