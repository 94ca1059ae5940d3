use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fs;
use std::io;
use std::path::Path;

const FALLBACK_MIME: &str = "image/jpeg";

/// An image ready to be dropped into an `<img src="data:...">` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime: &'static str,
    pub base64: String,
}

impl EncodedImage {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mime = image::guess_format(bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or(FALLBACK_MIME);
        Self {
            mime,
            base64: BASE64.encode(bytes),
        }
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// Reads the file at `path` and base64 encodes it.
pub fn encode_file(path: &Path) -> io::Result<EncodedImage> {
    Ok(EncodedImage::from_bytes(&fs::read(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    #[test]
    fn png_bytes_get_png_mime() {
        let mut png = Vec::new();
        RgbImage::from_pixel(4, 4, Rgb([255, 0, 0]))
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();

        let encoded = EncodedImage::from_bytes(&png);
        assert_eq!(encoded.mime, "image/png");
        assert_eq!(BASE64.decode(&encoded.base64).unwrap(), png);
        assert!(encoded.data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn unknown_bytes_fall_back_to_jpeg() {
        let encoded = EncodedImage::from_bytes(b"abc");
        assert_eq!(encoded.mime, "image/jpeg");
        assert_eq!(encoded.base64, "YWJj");
    }
}
