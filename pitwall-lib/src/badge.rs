//! Brand badge lookup.
//!
//! Badges are small logo images named after the manufacturer, kept in a
//! user-override directory and a default directory. File names are rarely
//! an exact match for the brand string found in car metadata ("Mercedes-AMG"
//! vs `mercedes_amg.png`), so several match rules are tried in turn.

use std::path::{Path, PathBuf};

/// Image extensions recognized as badges, in lookup order.
pub const BADGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg", "webp"];

/// Resolves brand names to badge image paths.
#[derive(Debug, Clone, Default)]
pub struct BadgeResolver {
    dirs: Vec<PathBuf>,
}

impl BadgeResolver {
    /// Create a resolver searching `dirs` in order (user override first).
    pub fn new(dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            dirs: dirs.into_iter().collect(),
        }
    }

    /// The directories searched, in order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Find the badge image for `brand`.
    ///
    /// Each directory is searched fully, first with the brand as written and
    /// then with [`normalize_brand`], before moving on to the next directory.
    pub fn find(&self, brand: &str) -> Option<PathBuf> {
        let brand = brand.trim();
        if brand.is_empty() {
            return None;
        }
        let normalized = normalize_brand(brand);

        for dir in &self.dirs {
            if !dir.is_dir() {
                continue;
            }
            let files = image_files(dir);
            for candidate in [brand, normalized.as_str()] {
                if let Some(found) = match_in_dir(dir, &files, candidate) {
                    log::debug!("Badge for '{}': {}", brand, found.display());
                    return Some(found);
                }
            }
        }
        None
    }
}

/// Normalize a brand into the file-name style used by badge packs.
///
/// Lowercase, whitespace to `_`, anything other than word characters and
/// `-` dropped, repeated `_` or `-` collapsed (e.g. "Mercedes-AMG" →
/// "mercedes-amg", "Alfa  Romeo" → "alfa_romeo").
pub fn normalize_brand(brand: &str) -> String {
    let mut out = String::with_capacity(brand.len());
    for c in brand.trim().to_lowercase().chars() {
        let c = if c.is_whitespace() { '_' } else { c };
        if !(c.is_alphanumeric() || c == '_' || c == '-') {
            continue;
        }
        if (c == '_' || c == '-') && out.ends_with(c) {
            continue;
        }
        out.push(c);
    }
    out
}

/// Lowercase `s` and collapse every run of non-alphanumeric characters to one space.
fn word_form(s: &str) -> String {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn match_in_dir(dir: &Path, files: &[PathBuf], candidate: &str) -> Option<PathBuf> {
    if candidate.is_empty() {
        return None;
    }

    // Exact file name
    if !candidate.contains(&['/', '\\'][..]) {
        for ext in BADGE_EXTENSIONS {
            let path = dir.join(format!("{}.{}", candidate, ext));
            if path.is_file() {
                return Some(path);
            }
        }
    }

    // Case-insensitive stem
    let lower = candidate.to_lowercase();
    if let Some(path) = files
        .iter()
        .find(|p| file_stem(p).is_some_and(|s| s.to_lowercase() == lower))
    {
        return Some(path.clone());
    }

    // Same words, so "BMW Alpina" never stands in for "BMW"
    let words = word_form(candidate);
    if words.is_empty() {
        return None;
    }
    files
        .iter()
        .find(|p| file_stem(p).is_some_and(|s| word_form(s) == words))
        .cloned()
}

fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Badge image files in `dir`, sorted for a stable pick among equals.
fn image_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            log::debug!("Cannot list badge directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_badge_extension(p))
        .collect();
    files.sort();
    files
}

fn has_badge_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            BADGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(e))
        })
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "tests/badge_tests.rs"]
mod tests;
