pub mod static_files;
pub mod tryon;

use actix_web::web;

/// Registers every route the server exposes. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    tryon::configure_routes(cfg);
    static_files::configure_routes(cfg);
}
