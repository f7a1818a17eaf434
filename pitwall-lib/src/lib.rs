//! Content library for a racing simulator install.
//!
//! Scans the cars and tracks content folders into [`CarRecord`]s and
//! [`TrackRecord`]s, resolves brand badges, and filters the results the way
//! the browser views do. Scans are pure reads of the file system: every path
//! they need is passed in, nothing is looked up globally.

pub mod badge;
pub mod country;
pub mod error;
pub mod query;
pub mod scanner;
pub mod settings;

pub use badge::BadgeResolver;
pub use error::ScanError;
pub use query::{CarFacets, CarQuery, ContentKind, TrackFacets, TrackQuery, results_summary};
pub use scanner::{TrackLayouts, detect_layouts, load_metadata, scan_cars, scan_tracks};
pub use settings::{ContentPaths, Settings};

pub use pitwall_core::{
    CarRecord, DESCRIPTION_PLACEHOLDER, Metadata, MetadataError, SkinPreview, TrackRecord, UNKNOWN,
    Year, parse_metadata,
};
