//! Desktop image decoding
//!
//! Decoding a full-resolution wallpaper is CPU-bound and blocking; callers run
//! it on tokio's blocking pool.

use image::{ImageError, ImageReader};
use std::path::Path;
use tracing::debug;

use super::resize::SourceImage;
use crate::error::{PreviewError, Result};

/// Decode the image at `path`
///
/// The format is sniffed from the file contents, so a wallpaper saved under
/// the wrong extension still decodes.
///
/// # Returns
/// * `Ok(SourceImage)` - RGBA pixels at the image's native size
/// * `Err(PreviewError::ImageDecode)` - missing, unreadable or corrupt file
pub fn decode_source(path: &Path) -> Result<SourceImage> {
    let decode_error = |source| PreviewError::ImageDecode {
        path: path.to_path_buf(),
        source,
    };
    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| decode_error(ImageError::IoError(err)))?
        .decode()
        .map_err(decode_error)?;

    let pixels = decoded.to_rgba8();
    debug!(
        "Decoded desktop image {}: {}x{}",
        path.display(),
        pixels.width(),
        pixels.height()
    );

    Ok(SourceImage::new(pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallpaper.png");
        RgbaImage::from_pixel(48, 30, Rgba([0, 128, 255, 255]))
            .save(&path)
            .unwrap();

        let source = decode_source(&path).unwrap();
        assert_eq!((source.width(), source.height()), (48, 30));
        assert_eq!(source.pixels().get_pixel(0, 0).0, [0, 128, 255, 255]);
    }

    #[test]
    fn test_format_sniffed_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("wallpaper.png");
        RgbaImage::from_pixel(20, 10, Rgba([10, 20, 30, 255]))
            .save(&png)
            .unwrap();
        let misnamed = dir.path().join("wallpaper.jpg");
        fs::rename(&png, &misnamed).unwrap();

        let source = decode_source(&misnamed).unwrap();
        assert_eq!((source.width(), source.height()), (20, 10));
        assert_eq!(source.pixels().get_pixel(5, 5).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_missing_file() {
        let result = decode_source(Path::new("/nonexistent/wallpaper.png"));
        assert!(matches!(result, Err(PreviewError::ImageDecode { .. })));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallpaper.png");
        fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(
            decode_source(&path),
            Err(PreviewError::ImageDecode { .. })
        ));
    }
}
