/// Width every stored asset is normalized to, in pixels.
pub const CANONICAL_WIDTH: u32 = 768;
/// Height every stored asset is normalized to, in pixels.
pub const CANONICAL_HEIGHT: u32 = 1024;

/// The two kinds of image a submission carries.
///
/// Each kind maps to one multipart field name and one directory under the
/// base directory. Assets of the same kind share a directory and are keyed
/// only by filename, so a later upload with the same name replaces the
/// earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Garment photo, uploaded as `cloth`.
    Cloth,
    /// Person photo, uploaded as `model`.
    Model,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Cloth, AssetKind::Model];

    /// Multipart form field the browser sends this image under.
    pub fn field_name(self) -> &'static str {
        match self {
            AssetKind::Cloth => "cloth",
            AssetKind::Model => "model",
        }
    }

    /// Directory segments below the base directory.
    pub fn directory(self) -> [&'static str; 2] {
        match self {
            AssetKind::Cloth => ["assets", "cloth"],
            AssetKind::Model => ["assets", "image"],
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        assert_eq!(AssetKind::from_field_name("cloth"), Some(AssetKind::Cloth));
        assert_eq!(AssetKind::from_field_name("model"), Some(AssetKind::Model));
        assert_eq!(AssetKind::from_field_name("person"), None);
    }

    #[test]
    fn person_images_live_under_assets_image() {
        assert_eq!(AssetKind::Model.directory(), ["assets", "image"]);
        assert_eq!(AssetKind::Cloth.directory(), ["assets", "cloth"]);
    }
}
