/// An image file received from the browser, held in memory until both
/// parts of the form have arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Filename the image is stored under. Already stripped of anything
    /// that could escape the asset directory.
    pub filename: String,
    /// Raw bytes exactly as uploaded. Nothing checks that they are an image.
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}
