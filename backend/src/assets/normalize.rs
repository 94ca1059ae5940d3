use common::model::asset::{CANONICAL_HEIGHT, CANONICAL_WIDTH};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, ImageResult};
use std::path::Path;

/// Resizes the image at `path` to exactly 768x1024 and writes it back over
/// the original file.
///
/// The aspect ratio is not preserved. The input is decoded by content, so a
/// PNG saved as `.jpg` still loads; the output format follows the extension
/// and falls back to whatever format was detected.
pub fn resize_to_canonical(path: &Path) -> ImageResult<()> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let detected = reader.format();
    let image = reader.decode()?;

    let format = ImageFormat::from_path(path).or_else(|e| detected.ok_or(e))?;
    let resized = image.resize_exact(CANONICAL_WIDTH, CANONICAL_HEIGHT, FilterType::CatmullRom);

    // JPEG has no alpha channel.
    let resized = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(resized.to_rgb8()),
        _ => resized,
    };
    resized.save_with_format(path, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn stretches_to_canonical_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tall.png");
        RgbImage::from_pixel(300, 900, Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        resize_to_canonical(&path).unwrap();

        let resized = image::open(&path).unwrap();
        assert_eq!(resized.dimensions(), (CANONICAL_WIDTH, CANONICAL_HEIGHT));
    }

    #[test]
    fn resizing_twice_keeps_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        RgbImage::from_pixel(640, 480, Rgb([200, 100, 50]))
            .save(&path)
            .unwrap();

        resize_to_canonical(&path).unwrap();
        resize_to_canonical(&path).unwrap();

        let resized = image::open(&path).unwrap();
        assert_eq!(resized.dimensions(), (CANONICAL_WIDTH, CANONICAL_HEIGHT));
    }

    #[test]
    fn png_content_under_jpg_name_is_rewritten_as_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mislabelled.jpg");
        RgbaImage::from_pixel(50, 50, Rgba([0, 255, 0, 128]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        resize_to_canonical(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let resized = image::load_from_memory(&bytes).unwrap();
        assert_eq!(resized.dimensions(), (CANONICAL_WIDTH, CANONICAL_HEIGHT));
    }

    #[test]
    fn unknown_extension_keeps_detected_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.bin");
        RgbImage::from_pixel(10, 10, Rgb([1, 2, 3]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        resize_to_canonical(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn corrupt_upload_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(resize_to_canonical(&path).is_err());
    }
}
