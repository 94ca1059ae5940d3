use common::model::asset::AssetKind;
use common::model::pairing::PairingRecord;
use common::model::upload::UploadedImage;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const PAIRING_FILE: [&str; 2] = ["inputs", "test_pairs.txt"];
const OUTPUT_FILE: [&str; 2] = ["output", "tryon.jpg"];

/// Fixed file layout below the configured base directory:
///
/// ```text
/// <base>/assets/cloth/<filename>
/// <base>/assets/image/<filename>
/// <base>/inputs/test_pairs.txt
/// <base>/output/tryon.jpg
/// ```
#[derive(Debug, Clone)]
pub struct AssetLayout {
    base_dir: PathBuf,
}

impl AssetLayout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn asset_dir(&self, kind: AssetKind) -> PathBuf {
        kind.directory()
            .iter()
            .fold(self.base_dir.clone(), |path, segment| path.join(segment))
    }

    pub fn asset_path(&self, kind: AssetKind, filename: &str) -> PathBuf {
        self.asset_dir(kind).join(filename)
    }

    pub fn pairing_path(&self) -> PathBuf {
        self.base_dir.join(PAIRING_FILE[0]).join(PAIRING_FILE[1])
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(OUTPUT_FILE[0]).join(OUTPUT_FILE[1])
    }

    /// Creates every directory the pipeline writes into. Existing directories
    /// are left alone.
    pub fn ensure_directories(&self) -> io::Result<()> {
        for kind in AssetKind::ALL {
            fs::create_dir_all(self.asset_dir(kind))?;
        }
        fs::create_dir_all(self.base_dir.join(PAIRING_FILE[0]))?;
        fs::create_dir_all(self.base_dir.join(OUTPUT_FILE[0]))?;
        Ok(())
    }

    /// Writes the upload under its filename, replacing any asset of the same
    /// kind and name.
    pub fn save_asset(&self, kind: AssetKind, upload: &UploadedImage) -> io::Result<PathBuf> {
        let path = self.asset_path(kind, &upload.filename);
        fs::write(&path, &upload.bytes)?;
        Ok(path)
    }

    /// Truncates the pairing file and writes `record` as its only line.
    pub fn write_pairing(&self, record: &PairingRecord) -> io::Result<()> {
        fs::write(self.pairing_path(), record.to_line())
    }
}
