//! # Try-On Service Module
//!
//! The landing page and the form it posts to.
//!
//! ## Sub-modules:
//! - `home`: renders the empty landing page.
//! - `submit`: saves and normalizes the two uploads, records the pairing, runs
//!   the try-on pipeline and renders the page again with the result inline.
//! - `upload`: buffers the `cloth` and `model` multipart fields in memory.
//! - `page`: fills the landing page template.

mod home;
mod page;
mod submit;
mod upload;

use actix_web::web::{get, post, ServiceConfig};

/// Registers the try-on routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**:
///     - **Handler**: `home::process`
///     - **Description**: The upload form with no result image.
///
/// *   **`POST /submit`**:
///     - **Handler**: `submit::process`
///     - **Description**: Expects a multipart form with `cloth` and `model` file
///       fields. Answers `400` with a plain-text message when either is missing,
///       otherwise `200` with the landing page showing the try-on result.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("/", get().to(home::process))
        .route("/submit", post().to(submit::process));
}
