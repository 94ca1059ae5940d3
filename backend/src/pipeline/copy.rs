use crate::pipeline::TryOnPipeline;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Placeholder pipeline: the "result" is the person image, copied byte for byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyPipeline;

impl TryOnPipeline for CopyPipeline {
    fn process(&self, model: &Path, cloth: &Path, output: &Path) -> io::Result<()> {
        debug!(
            "No try-on model configured, copying {} as the result for {}",
            model.display(),
            cloth.display()
        );
        fs::copy(model, output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_exact_copy_of_person_image() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("person.jpg");
        let cloth = dir.path().join("shirt.png");
        let output = dir.path().join("tryon.jpg");
        fs::write(&model, b"person bytes").unwrap();
        fs::write(&cloth, b"shirt bytes").unwrap();
        fs::write(&output, b"stale result from an earlier request").unwrap();

        CopyPipeline.process(&model, &cloth, &output).unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"person bytes");
    }

    #[test]
    fn missing_person_image_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CopyPipeline.process(
            &dir.path().join("absent.jpg"),
            &dir.path().join("shirt.png"),
            &dir.path().join("tryon.jpg"),
        );
        assert!(result.is_err());
    }
}
