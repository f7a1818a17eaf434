//! Search, filters and facets over scanned records.
//!
//! The free-text search is a case-insensitive substring match. Filters are
//! exact (ignoring case for text) and combine with AND.

use std::collections::BTreeSet;
use std::fmt;

use pitwall_core::{CarRecord, TrackRecord, Year};

/// What a result list contains, for summary wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Cars,
    Tracks,
}

impl ContentKind {
    /// Singular or plural noun for `count` items.
    pub fn noun(self, count: usize) -> &'static str {
        match (self, count) {
            (Self::Cars, 1) => "car",
            (Self::Cars, _) => "cars",
            (Self::Tracks, 1) => "track",
            (Self::Tracks, _) => "tracks",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun(0))
    }
}

/// Search and filters for the car list. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarQuery {
    pub search: Option<String>,
    pub year: Option<i32>,
    pub class: Option<String>,
    pub brand: Option<String>,
}

impl CarQuery {
    pub fn matches(&self, car: &CarRecord) -> bool {
        let search_ok = search_term(&self.search).is_none_or(|term| {
            contains(&car.name, &term)
                || contains(&car.brand, &term)
                || contains(&car.class, &term)
                || car.tags.iter().any(|t| contains(t, &term))
        });

        search_ok
            && year_matches(self.year, car.year)
            && text_matches(self.class.as_deref(), Some(car.class.as_str()))
            && text_matches(self.brand.as_deref(), Some(car.brand.as_str()))
    }

    /// The cars matching this query, in input order.
    pub fn apply<'a>(&self, cars: &'a [CarRecord]) -> Vec<&'a CarRecord> {
        cars.iter().filter(|c| self.matches(c)).collect()
    }

    /// Active filters, described for [`results_summary`].
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(term) = search_term(&self.search) {
            parts.push(format!("\"{}\"", term));
        }
        if let Some(year) = self.year {
            parts.push(format!("Year: {}", year));
        }
        if let Some(class) = active(&self.class) {
            parts.push(format!("Class: {}", class));
        }
        if let Some(brand) = active(&self.brand) {
            parts.push(format!("Brand: {}", brand));
        }
        parts
    }
}

/// Search and filters for the track list. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackQuery {
    pub search: Option<String>,
    pub year: Option<i32>,
    pub country: Option<String>,
}

impl TrackQuery {
    pub fn matches(&self, track: &TrackRecord) -> bool {
        let search_ok = search_term(&self.search).is_none_or(|term| {
            contains(&track.name, &term)
                || contains(&track.description, &term)
                || track.country.as_deref().is_some_and(|c| contains(c, &term))
                || track.city.as_deref().is_some_and(|c| contains(c, &term))
                || track.tags.iter().any(|t| contains(t, &term))
        });

        search_ok
            && year_matches(self.year, track.year)
            && text_matches(self.country.as_deref(), track.country.as_deref())
    }

    /// The tracks matching this query, in input order.
    pub fn apply<'a>(&self, tracks: &'a [TrackRecord]) -> Vec<&'a TrackRecord> {
        tracks.iter().filter(|t| self.matches(t)).collect()
    }

    /// Active filters, described for [`results_summary`].
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(term) = search_term(&self.search) {
            parts.push(format!("\"{}\"", term));
        }
        if let Some(year) = self.year {
            parts.push(format!("Year: {}", year));
        }
        if let Some(country) = active(&self.country) {
            parts.push(format!("Country: {}", country));
        }
        parts
    }
}

/// Lowercased, trimmed search term; `None` when blank.
fn search_term(search: &Option<String>) -> Option<String> {
    active(search).map(str::to_lowercase)
}

fn active(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

fn year_matches(wanted: Option<i32>, year: Year) -> bool {
    wanted.is_none_or(|y| year == Year::Known(y))
}

fn text_matches(wanted: Option<&str>, value: Option<&str>) -> bool {
    match wanted.map(str::trim).filter(|w| !w.is_empty()) {
        None => true,
        Some(w) => value.is_some_and(|v| v.trim().eq_ignore_ascii_case(w)),
    }
}

/// Sort cars by display name, ignoring case.
pub fn sort_cars_by_name(cars: &mut [CarRecord]) {
    cars.sort_by_cached_key(|c| c.name.to_lowercase());
}

/// Sort tracks by display name, ignoring case. Layouts of one track that
/// share a name keep their folder order.
pub fn sort_tracks_by_name(tracks: &mut [TrackRecord]) {
    tracks.sort_by_cached_key(|t| t.name.to_lowercase());
}

/// Distinct filter values present in a car list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFacets {
    /// Newest first
    pub years: Vec<i32>,
    pub classes: Vec<String>,
    pub brands: Vec<String>,
}

impl CarFacets {
    pub fn from_cars(cars: &[CarRecord]) -> Self {
        Self {
            years: years_newest_first(cars.iter().map(|c| c.year)),
            classes: sorted_unique(cars.iter().map(|c| c.class.as_str())),
            brands: sorted_unique(cars.iter().map(|c| c.brand.as_str())),
        }
    }
}

/// Distinct filter values present in a track list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackFacets {
    /// Newest first
    pub years: Vec<i32>,
    pub countries: Vec<String>,
}

impl TrackFacets {
    pub fn from_tracks(tracks: &[TrackRecord]) -> Self {
        Self {
            years: years_newest_first(tracks.iter().map(|t| t.year)),
            countries: sorted_unique(tracks.iter().filter_map(|t| t.country.as_deref())),
        }
    }
}

fn years_newest_first(years: impl Iterator<Item = Year>) -> Vec<i32> {
    let set: BTreeSet<i32> = years.filter_map(|y| y.value()).collect();
    set.into_iter().rev().collect()
}

fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.filter(|v| !v.is_empty()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// One-line description of a result list.
///
/// `All cars (A-Z) - 3 cars found` when no filter is active, otherwise
/// `Search results for "gt", Year: 2020 - 1 car found`.
pub fn results_summary(kind: ContentKind, filters: &[String], count: usize) -> String {
    let head = if filters.is_empty() {
        format!("All {} (A-Z)", kind)
    } else {
        format!("Search results for {}", filters.join(", "))
    };
    format!("{} - {} {} found", head, count, kind.noun(count))
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
