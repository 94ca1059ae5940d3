use thiserror::Error;

/// Reasons a `/submit` request can fail.
///
/// `MissingUpload` and `Multipart` are the client's fault and become `400`.
/// The rest become a generic `500`.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Both cloth and model images must be uploaded.")]
    MissingUpload,
    #[error("Invalid multipart payload: {0}")]
    Multipart(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Worker failed: {0}")]
    Worker(String),
}

impl SubmitError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, SubmitError::MissingUpload | SubmitError::Multipart(_))
    }
}
