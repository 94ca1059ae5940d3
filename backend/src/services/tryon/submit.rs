//! # Submit Service
//!
//! `POST /submit`: the whole try-on round trip for one form submission.
//!
//! ## Workflow
//!
//! 1.  **Upload**: `upload::read_uploads` buffers the `cloth` and `model` parts.
//!     If either is missing the request ends here with `400` and nothing on disk
//!     has changed.
//!
//! 2.  **Blocking pipeline**: the remaining steps run inside
//!     `tokio::task::spawn_blocking` and the response waits for all of them:
//!     - save the garment to `assets/cloth/<name>` and the person to
//!       `assets/image/<name>`, replacing files of the same name;
//!     - resize both in place to 768x1024;
//!     - rewrite `inputs/test_pairs.txt` with `"<model> <cloth>"`;
//!     - run the `TryOnPipeline`, which leaves its result at `output/tryon.jpg`;
//!     - read the result back and base64 encode it.
//!
//! 3.  **Response**: the landing page is rendered with the result as a data URI.
//!
//! Any I/O or image error after validation is answered with a bare `500`.
//! Whatever was written before the failure stays on disk.

use crate::assets::inline::{encode_file, EncodedImage};
use crate::assets::layout::AssetLayout;
use crate::assets::normalize::resize_to_canonical;
use crate::error::SubmitError;
use crate::pipeline::TryOnPipeline;
use crate::services::tryon::page;
use crate::services::tryon::upload::{read_uploads, Uploads};
use crate::state::TryOnState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::asset::AssetKind;
use common::model::pairing::PairingRecord;
use log::{debug, error, info, warn};
use uuid::Uuid;

/// The Actix web handler for `POST /submit`.
///
/// # Returns
/// - `200 OK` with the landing page and the inline result.
/// - `400 Bad Request` with a plain-text message for a missing image or an
///   unreadable form.
/// - `500 Internal Server Error` for anything that fails afterwards.
pub async fn process(state: web::Data<TryOnState>, payload: Multipart) -> impl Responder {
    let request_id = Uuid::new_v4();
    match submit(&state, payload, request_id).await {
        Ok(result) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(page::render(Some(&result))),
        Err(e) if e.is_client_error() => {
            warn!("[{}] Rejected submission: {}", request_id, e);
            HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(e.to_string())
        }
        Err(e) => {
            error!("[{}] Submission failed: {}", request_id, e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Internal Server Error")
        }
    }
}

async fn submit(
    state: &TryOnState,
    payload: Multipart,
    request_id: Uuid,
) -> Result<EncodedImage, SubmitError> {
    let uploads = read_uploads(payload).await?;
    let layout = state.layout.clone();
    let pipeline = state.pipeline.clone();

    tokio::task::spawn_blocking(move || {
        run_pipeline(&layout, pipeline.as_ref(), &uploads, request_id)
    })
    .await
    .map_err(|e| SubmitError::Worker(e.to_string()))?
}

/// Runs every filesystem step of a submission, in order, on the calling thread.
fn run_pipeline(
    layout: &AssetLayout,
    pipeline: &dyn TryOnPipeline,
    uploads: &Uploads,
    request_id: Uuid,
) -> Result<EncodedImage, SubmitError> {
    let cloth_path = layout.save_asset(AssetKind::Cloth, &uploads.cloth)?;
    let model_path = layout.save_asset(AssetKind::Model, &uploads.model)?;
    debug!(
        "[{}] Saved {} and {}",
        request_id,
        cloth_path.display(),
        model_path.display()
    );

    resize_to_canonical(&cloth_path)?;
    resize_to_canonical(&model_path)?;
    debug!("[{}] Resized both assets", request_id);

    let record = PairingRecord::new(&uploads.model.filename, &uploads.cloth.filename);
    layout.write_pairing(&record)?;
    debug!("[{}] Pairing record is now '{}'", request_id, record);

    let output_path = layout.output_path();
    pipeline.process(&model_path, &cloth_path, &output_path)?;

    let result = encode_file(&output_path)?;
    info!(
        "[{}] Try-on done for model '{}' and cloth '{}'",
        request_id, uploads.model.filename, uploads.cloth.filename
    );
    Ok(result)
}
