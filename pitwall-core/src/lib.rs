use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod error;
pub mod fields;
pub mod metadata;
pub mod util;
pub mod year;

pub use error::MetadataError;
pub use metadata::{DESCRIPTION_PLACEHOLDER, Metadata, parse_metadata};
pub use year::Year;

/// Placeholder stored in place of missing names, brands and classes.
pub const UNKNOWN: &str = "Unknown";

/// A livery variant of a car and its preview image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinPreview {
    /// Skin folder name
    pub name: String,
    /// First `preview*` file in the skin folder, if any
    pub image_path: Option<PathBuf>,
}

/// A car discovered under the cars content folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRecord {
    /// Car folder name (e.g., "ks_ford_gt40")
    pub id: String,

    /// Display name, or "Unknown"
    pub name: String,

    /// Manufacturer, derived from the name when not declared
    pub brand: String,

    /// Racing class (e.g., "GT3"), or "Unknown"
    pub class: String,

    /// Free-text description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Spec sheet as declared by the vendor (bhp, torque, weight, ...)
    pub specs: metadata::Metadata,

    pub year: Year,

    pub tags: Vec<String>,

    /// Preview of the first skin that has one
    pub image_path: Option<PathBuf>,

    /// Brand badge resolved from the badge directories
    pub brand_image_path: Option<PathBuf>,

    pub skins: Vec<SkinPreview>,

    /// Number of skin folders, with or without preview
    pub total_skins: usize,

    /// Absolute car folder, for opening in a file manager
    pub folder_path: PathBuf,
}

impl CarRecord {
    /// Build a record from parsed `ui_car.json`, with no images attached.
    ///
    /// Missing fields are replaced with placeholders so consumers never need
    /// to check name, brand, class, year or tags for absence.
    pub fn from_metadata(
        id: impl Into<String>,
        folder_path: impl Into<PathBuf>,
        metadata: &Metadata,
    ) -> Self {
        Self {
            id: id.into(),
            name: fields::string_field(metadata, "name").unwrap_or_else(|| UNKNOWN.to_string()),
            brand: fields::derive_brand(metadata),
            class: fields::string_field(metadata, "class").unwrap_or_else(|| UNKNOWN.to_string()),
            description: fields::string_field(metadata, "description").unwrap_or_default(),
            specs: fields::object_field(metadata, "specs"),
            year: Year::from_value(metadata.get("year")),
            tags: fields::tags_field(metadata, "tags"),
            image_path: None,
            brand_image_path: None,
            skins: Vec::new(),
            total_skins: 0,
            folder_path: folder_path.into(),
        }
    }

    /// Attach skins; the primary image becomes the first skin preview found.
    pub fn with_skins(mut self, skins: Vec<SkinPreview>) -> Self {
        self.image_path = skins.iter().find_map(|s| s.image_path.clone());
        self.total_skins = skins.len();
        self.skins = skins;
        self
    }

    pub fn with_brand_image(mut self, path: Option<PathBuf>) -> Self {
        self.brand_image_path = path;
        self
    }

    /// A spec sheet value rendered as text (e.g., `spec("bhp")`).
    pub fn spec(&self, key: &str) -> Option<String> {
        fields::text_field(&self.specs, key)
    }
}

/// One layout of a track discovered under the tracks content folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    /// Display name, or "Unknown"
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub country: Option<String>,

    pub city: Option<String>,

    /// Declared length, as written by the vendor (e.g., "7004m")
    pub length: Option<String>,

    /// Number of pit boxes
    pub pitboxes: Option<String>,

    pub year: Year,

    pub tags: Vec<String>,

    /// Track folder name (e.g., "spa")
    pub base_folder: String,

    /// Layout subfolder name; `None` for a track without named layouts
    pub layout_folder: Option<String>,

    /// `outline.png` beside the metadata file
    pub outline_path: Option<PathBuf>,

    /// `preview.png` beside the metadata file
    pub preview_path: Option<PathBuf>,

    /// Directory holding the metadata file used for this record
    pub folder_path: PathBuf,
}

impl TrackRecord {
    /// Build a record from parsed `ui_track.json`, with no images attached.
    pub fn from_metadata(
        base_folder: impl Into<String>,
        layout_folder: Option<String>,
        folder_path: impl Into<PathBuf>,
        metadata: &Metadata,
    ) -> Self {
        Self {
            name: fields::string_field(metadata, "name").unwrap_or_else(|| UNKNOWN.to_string()),
            description: fields::string_field(metadata, "description").unwrap_or_default(),
            country: fields::string_field(metadata, "country"),
            city: fields::string_field(metadata, "city"),
            length: fields::text_field(metadata, "length"),
            pitboxes: fields::text_field(metadata, "pitboxes"),
            year: Year::from_value(metadata.get("year")),
            tags: fields::tags_field(metadata, "tags"),
            base_folder: base_folder.into(),
            layout_folder,
            outline_path: None,
            preview_path: None,
            folder_path: folder_path.into(),
        }
    }

    pub fn with_outline(mut self, path: Option<PathBuf>) -> Self {
        self.outline_path = path;
        self
    }

    pub fn with_preview(mut self, path: Option<PathBuf>) -> Self {
        self.preview_path = path;
        self
    }

    /// Identifier unique across layouts: `base` or `base/layout`.
    pub fn id(&self) -> String {
        match &self.layout_folder {
            Some(layout) => format!("{}/{}", self.base_folder, layout),
            None => self.base_folder.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
