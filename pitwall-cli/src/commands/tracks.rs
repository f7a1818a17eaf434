use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pitwall_lib::country::flag_code;
use pitwall_lib::query::sort_tracks_by_name;
use pitwall_lib::{ContentKind, TrackFacets, TrackQuery, TrackRecord, results_summary, scan_tracks};

use crate::spinner::ScanSpinner;
use crate::{CliError, Context};

/// Run the tracks command.
pub(crate) fn run_tracks(
    ctx: &Context,
    dir: Option<PathBuf>,
    query: &TrackQuery,
    json: bool,
) -> Result<(), CliError> {
    let root = ctx.content_dir(ContentKind::Tracks, dir)?;

    let spinner = ScanSpinner::start(format!("Scanning {}", root.display()), ctx.quiet || json);
    let mut tracks = scan_tracks(&root);
    spinner.finish();

    sort_tracks_by_name(&mut tracks);
    let matches = query.apply(&tracks);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if tracks.is_empty() {
        log::info!(
            "{}",
            format!("No tracks found in {}", root.display())
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("Check that your Assetto Corsa folder is correctly configured.");
        return Ok(());
    }

    let facets = TrackFacets::from_tracks(&tracks);
    log::debug!("Countries: {}", facets.countries.join(", "));

    log::info!(
        "{}",
        results_summary(ContentKind::Tracks, &query.describe(), matches.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if matches.is_empty() {
        log::info!(
            "{}",
            "No tracks found matching your search.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for track in matches {
        print_track(track, &root);
    }

    Ok(())
}

fn print_track(track: &TrackRecord, root: &std::path::Path) {
    let flag = track
        .country
        .as_deref()
        .and_then(flag_code)
        .map(|code| format!("[{}] ", code))
        .unwrap_or_default();
    let location = match (&track.city, &track.country) {
        (Some(city), Some(country)) => format!("{}, {}", city, country),
        (None, Some(country)) => country.clone(),
        (Some(city), None) => city.clone(),
        (None, None) => "Unknown location".to_string(),
    };

    log::info!(
        "  {} {}",
        track.name.if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", track.id()).if_supports_color(Stdout, |t| t.dimmed()),
    );

    let mut details = vec![format!("{}{}", flag, location)];
    if let Some(length) = &track.length {
        details.push(length.clone());
    }
    if let Some(pitboxes) = &track.pitboxes {
        details.push(format!("{} pits", pitboxes));
    }
    details.push(track.year.to_string());
    log::info!("    {}", details.join(" | ").if_supports_color(Stdout, |t| t.cyan()));

    if track.outline_path.is_none() {
        log::debug!(
            "    No outline in {}",
            crate::short_path(&track.folder_path, root)
        );
    }
}
