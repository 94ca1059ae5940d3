//! The try-on step.
//!
//! A pipeline receives the resized person and garment images on disk and must
//! leave its result at the output path. The server only depends on
//! `TryOnPipeline`, so a model-backed implementation can replace `CopyPipeline`
//! in `main.rs` without touching the handler.

mod copy;

pub use copy::CopyPipeline;

use std::io;
use std::path::Path;

pub trait TryOnPipeline: Send + Sync {
    /// Produces the try-on result for `model` wearing `cloth` at `output`,
    /// replacing whatever was there before.
    fn process(&self, model: &Path, cloth: &Path, output: &Path) -> io::Result<()>;
}
