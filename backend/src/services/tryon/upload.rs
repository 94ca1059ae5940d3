//! Reads the `cloth` and `model` parts of the submit form into memory.
//!
//! Both parts are fully buffered before anything is written to disk. This is
//! what guarantees that a form missing one of the two images leaves the asset
//! directories untouched.

use crate::error::SubmitError;
use actix_multipart::Multipart;
use common::model::asset::AssetKind;
use common::model::upload::UploadedImage;
use futures_util::StreamExt;
use sanitize_filename::sanitize;

/// The two images of one submission.
#[derive(Debug)]
pub struct Uploads {
    pub cloth: UploadedImage,
    pub model: UploadedImage,
}

/// Collects the form parts. A part only counts when it carries a filename
/// that survives sanitizing; when a field is repeated, the first occurrence
/// with a usable filename wins.
///
/// # Returns
/// - `Ok(Uploads)` when both fields were found.
/// - `Err(SubmitError::MissingUpload)` when either is absent or unnamed.
/// - `Err(SubmitError::Multipart)` when the payload cannot be parsed.
pub async fn read_uploads(mut payload: Multipart) -> Result<Uploads, SubmitError> {
    let mut cloth: Option<UploadedImage> = None;
    let mut model: Option<UploadedImage> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| SubmitError::Multipart(e.to_string()))?;
        let kind = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .and_then(AssetKind::from_field_name);
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(sanitize)
            .unwrap_or_default();

        let slot = match kind {
            Some(AssetKind::Cloth) if cloth.is_none() => &mut cloth,
            Some(AssetKind::Model) if model.is_none() => &mut model,
            // Unknown field, or a slot already filled: drain it and move on.
            _ => {
                while let Some(chunk) = field.next().await {
                    chunk.map_err(|e| SubmitError::Multipart(e.to_string()))?;
                }
                continue;
            }
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk.map_err(|e| SubmitError::Multipart(e.to_string()))?);
        }

        if !filename.is_empty() {
            *slot = Some(UploadedImage::new(filename, bytes));
        }
    }

    match (cloth, model) {
        (Some(cloth), Some(model)) => Ok(Uploads { cloth, model }),
        _ => Err(SubmitError::MissingUpload),
    }
}
