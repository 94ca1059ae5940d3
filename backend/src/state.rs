//! Shared application state handed to every worker as `web::Data<TryOnState>`.

use crate::assets::layout::AssetLayout;
use crate::pipeline::TryOnPipeline;
use std::sync::Arc;

#[derive(Clone)]
pub struct TryOnState {
    /// Where uploads, the pairing record and the output artifact are written.
    pub layout: AssetLayout,
    /// The try-on step run after both assets are normalized.
    pub pipeline: Arc<dyn TryOnPipeline>,
}

impl TryOnState {
    pub fn new(layout: AssetLayout, pipeline: Arc<dyn TryOnPipeline>) -> Self {
        Self { layout, pipeline }
    }
}
