use crate::services::tryon::page;
use actix_web::{HttpResponse, Responder};

/// `GET /`: the upload form without a result.
pub async fn process() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page::render(None))
}
