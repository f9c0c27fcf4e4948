//! PNG adapter for the `PlaceholderSink` port.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::CardgenError;
use crate::ports::PlaceholderSink;

/// Transparent white: full-intensity RGB with a zero alpha channel.
const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Writes blank placeholders as RGBA PNG files.
///
/// PNG encoding is deterministic, so re-running against the same
/// configuration overwrites each file with byte-identical content.
#[derive(Debug, Default)]
pub struct PngSink;

impl PlaceholderSink for PngSink {
    fn write_blank(&self, width: u32, height: u32, path: &Path) -> Result<(), CardgenError> {
        let raster = RgbaImage::from_pixel(width, height, TRANSPARENT_WHITE);
        raster
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| CardgenError::WriteImage { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn writes_fully_transparent_png() {
        let dir = scratch_dir("cardgen_png_sink_test");
        let path = dir.join("blank.png");

        PngSink.write_blank(80, 120, &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.dimensions(), (80, 120));
        assert!(img.to_rgba8().pixels().all(|p| *p == Rgba([255, 255, 255, 0])));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn overwrite_is_byte_identical() {
        let dir = scratch_dir("cardgen_png_idempotent_test");
        let path = dir.join("blank.png");

        PngSink.write_blank(80, 120, &path).unwrap();
        let first = std::fs::read(&path).unwrap();
        PngSink.write_blank(80, 120, &path).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_parent_directory_errors() {
        let path = std::env::temp_dir().join("cardgen_png_no_such_dir/blank.png");

        let err = PngSink.write_blank(80, 120, &path).unwrap_err();
        assert!(matches!(err, CardgenError::WriteImage { .. }));
    }
}
