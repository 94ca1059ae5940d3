use std::fmt;

/// Links the person image and the garment image of the latest submission.
///
/// Written as a single line, person first:
///
/// ```text
/// person.jpg shirt.png
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingRecord {
    pub model_filename: String,
    pub cloth_filename: String,
}

impl PairingRecord {
    pub fn new(model_filename: impl Into<String>, cloth_filename: impl Into<String>) -> Self {
        Self {
            model_filename: model_filename.into(),
            cloth_filename: cloth_filename.into(),
        }
    }

    /// The record as it is written to disk, newline included.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for PairingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.model_filename, self.cloth_filename)
    }
}
