//! Directory scanner for car and track content folders.
//!
//! Each immediate subfolder of the content root is one candidate item. A
//! folder without the expected metadata file is simply not an item; a folder
//! whose metadata cannot be read or parsed is logged and skipped. Nothing
//! that goes wrong with one item stops the scan.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pitwall_core::util::{SNIPPET_CHARS, decode_text, snippet};
use pitwall_core::{CarRecord, Metadata, SkinPreview, TrackRecord, parse_metadata};

use crate::badge::BadgeResolver;
use crate::error::ScanError;

/// Car metadata, relative to the car folder's `ui/` directory.
pub const CAR_METADATA: &str = "ui_car.json";
/// Track metadata file name, in `ui/` or `ui/<layout>/`.
pub const TRACK_METADATA: &str = "ui_track.json";
/// Plan-view image of a track layout, beside its metadata.
pub const TRACK_OUTLINE: &str = "outline.png";
/// Screenshot of a track layout, beside its metadata.
pub const TRACK_PREVIEW: &str = "preview.png";

/// Scratch folder some track tools leave inside `ui/`; never a layout.
const TMP_FOLDER: &str = "tmp";

/// Scan a cars content folder.
///
/// Returns one record per subfolder holding `ui/ui_car.json`, sorted by
/// folder name. A missing root yields an empty list.
pub fn scan_cars(root: &Path, badges: &BadgeResolver) -> Vec<CarRecord> {
    let Some(folders) = content_folders(root) else {
        return Vec::new();
    };

    let mut cars = Vec::new();
    for folder in &folders {
        match read_car(folder, badges) {
            Ok(Some(car)) => cars.push(car),
            Ok(None) => {}
            Err(e) => log::warn!("Skipping car '{}': {}", folder_name(folder), e),
        }
    }

    log::debug!(
        "Found {} cars in {} folders under {}",
        cars.len(),
        folders.len(),
        root.display()
    );
    cars
}

/// Scan a tracks content folder.
///
/// Returns one record per track layout (see [`detect_layouts`]), ordered by
/// track folder then layout folder. A missing root yields an empty list.
pub fn scan_tracks(root: &Path) -> Vec<TrackRecord> {
    let Some(folders) = content_folders(root) else {
        return Vec::new();
    };

    let mut tracks = Vec::new();
    for folder in &folders {
        let base = folder_name(folder);
        let layouts = match detect_layouts(folder) {
            Ok(l) => l,
            Err(e) => {
                log::warn!("Skipping track '{}': {}", base, e);
                continue;
            }
        };

        for (layout, dir) in layouts.sources() {
            match read_track_layout(&base, layout, dir) {
                Ok(track) => tracks.push(track),
                Err(e) => log::warn!(
                    "Skipping track '{}': {}",
                    layout.map_or_else(|| base.clone(), |l| format!("{}/{}", base, l)),
                    e
                ),
            }
        }
    }

    log::debug!(
        "Found {} track layouts in {} folders under {}",
        tracks.len(),
        folders.len(),
        root.display()
    );
    tracks
}

/// Where the metadata for one track layout lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataSource {
    /// The layout folder has its own `ui_track.json`
    Own(PathBuf),
    /// The layout folder borrows `ui/ui_track.json`
    Shared(PathBuf),
}

impl MetadataSource {
    /// Directory holding the metadata file (and the outline next to it).
    pub fn dir(&self) -> &Path {
        match self {
            Self::Own(dir) | Self::Shared(dir) => dir,
        }
    }
}

/// A named layout and the metadata describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSource {
    pub layout: String,
    pub source: MetadataSource,
}

/// How a track folder lays out its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackLayouts {
    /// `ui/` has layout subfolders; one record per usable layout
    PerLayout(Vec<LayoutSource>),
    /// Only `ui/ui_track.json`; one record without a layout name
    Single(PathBuf),
    /// No `ui/` folder or no usable metadata; not a track
    Absent,
}

impl TrackLayouts {
    /// `(layout name, metadata directory)` for every record this track produces.
    pub fn sources(&self) -> Vec<(Option<&str>, &Path)> {
        match self {
            Self::PerLayout(layouts) => layouts
                .iter()
                .map(|l| (Some(l.layout.as_str()), l.source.dir()))
                .collect(),
            Self::Single(dir) => vec![(None, dir.as_path())],
            Self::Absent => Vec::new(),
        }
    }
}

/// Work out which layouts a track folder has and where their metadata lives.
///
/// Precedence: layout subfolders of `ui/` (other than `tmp`) each use their
/// own `ui_track.json`, falling back to the shared `ui/ui_track.json`; a
/// layout with neither is dropped. Without layout subfolders, the shared file
/// alone makes a single-layout track.
pub fn detect_layouts(track_folder: &Path) -> io::Result<TrackLayouts> {
    let ui = track_folder.join("ui");
    if !ui.is_dir() {
        return Ok(TrackLayouts::Absent);
    }

    let has_shared = ui.join(TRACK_METADATA).is_file();
    let layout_dirs: Vec<PathBuf> = subdirectories(&ui)?
        .into_iter()
        .filter(|d| !folder_name(d).eq_ignore_ascii_case(TMP_FOLDER))
        .collect();

    if layout_dirs.is_empty() {
        return Ok(if has_shared {
            TrackLayouts::Single(ui)
        } else {
            TrackLayouts::Absent
        });
    }

    let layouts: Vec<LayoutSource> = layout_dirs
        .into_iter()
        .filter_map(|dir| {
            let layout = folder_name(&dir);
            let source = if dir.join(TRACK_METADATA).is_file() {
                MetadataSource::Own(dir)
            } else if has_shared {
                MetadataSource::Shared(ui.clone())
            } else {
                return None;
            };
            Some(LayoutSource { layout, source })
        })
        .collect();

    Ok(if layouts.is_empty() {
        TrackLayouts::Absent
    } else {
        TrackLayouts::PerLayout(layouts)
    })
}

fn read_car(folder: &Path, badges: &BadgeResolver) -> Result<Option<CarRecord>, ScanError> {
    let metadata_path = folder.join("ui").join(CAR_METADATA);
    if !metadata_path.is_file() {
        return Ok(None);
    }

    let metadata = load_metadata(&metadata_path)?;
    let car = CarRecord::from_metadata(folder_name(folder), folder, &metadata);
    let skins = read_skins(&folder.join("skins"))?;
    let brand_image = badges.find(&car.brand);

    Ok(Some(car.with_skins(skins).with_brand_image(brand_image)))
}

fn read_track_layout(
    base: &str,
    layout: Option<&str>,
    dir: &Path,
) -> Result<TrackRecord, ScanError> {
    let metadata = load_metadata(&dir.join(TRACK_METADATA))?;
    Ok(
        TrackRecord::from_metadata(base, layout.map(str::to_string), dir, &metadata)
            .with_outline(existing_file(dir.join(TRACK_OUTLINE)))
            .with_preview(existing_file(dir.join(TRACK_PREVIEW))),
    )
}

/// Read and tolerantly parse one metadata file.
pub fn load_metadata(path: &Path) -> Result<Metadata, ScanError> {
    let bytes = fs::read(path).map_err(|e| ScanError::io(path, e))?;
    let text = decode_text(&bytes);
    parse_metadata(&text).map_err(|source| ScanError::Metadata {
        path: path.to_path_buf(),
        snippet: snippet(&text, SNIPPET_CHARS),
        source,
    })
}

/// Every skin folder, with its preview image when it has one.
fn read_skins(skins_dir: &Path) -> Result<Vec<SkinPreview>, ScanError> {
    if !skins_dir.is_dir() {
        return Ok(Vec::new());
    }

    let dirs = subdirectories(skins_dir).map_err(|e| ScanError::io(skins_dir, e))?;
    Ok(dirs
        .into_iter()
        .map(|dir| SkinPreview {
            name: folder_name(&dir),
            image_path: find_skin_preview(&dir),
        })
        .collect())
}

/// First file (by name) starting with "preview", any case, that is not a `.psd`.
fn find_skin_preview(dir: &Path) -> Option<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            log::debug!("Cannot list skin folder {}: {}", dir.display(), e);
            return None;
        }
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files.into_iter().find(|p| is_skin_preview(p))
}

fn is_skin_preview(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let lower = name.to_lowercase();
    lower.starts_with("preview") && !lower.ends_with(".psd")
}

/// Sorted subfolders of a content root, or `None` when the root is unusable.
fn content_folders(root: &Path) -> Option<Vec<PathBuf>> {
    if !root.is_dir() {
        log::warn!("Content folder not found: {}", root.display());
        return None;
    }
    match subdirectories(root) {
        Ok(folders) => Some(folders),
        Err(e) => {
            log::warn!("Failed to list {}: {}", root.display(), e);
            None
        }
    }
}

/// Immediate subdirectories of `dir`, sorted by path.
fn subdirectories(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(dir)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn existing_file(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
