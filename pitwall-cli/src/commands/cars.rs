use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pitwall_lib::query::sort_cars_by_name;
use pitwall_lib::settings::badge_dirs;
use pitwall_lib::{
    BadgeResolver, CarFacets, CarQuery, CarRecord, ContentKind, Year, results_summary, scan_cars,
};

use crate::spinner::ScanSpinner;
use crate::{CliError, Context};

/// Run the cars command.
pub(crate) fn run_cars(
    ctx: &Context,
    dir: Option<PathBuf>,
    query: &CarQuery,
    json: bool,
) -> Result<(), CliError> {
    let root = ctx.content_dir(ContentKind::Cars, dir)?;
    let badges = BadgeResolver::new(badge_dirs(&ctx.settings));

    let spinner = ScanSpinner::start(format!("Scanning {}", root.display()), ctx.quiet || json);
    let mut cars = scan_cars(&root, &badges);
    spinner.finish();

    sort_cars_by_name(&mut cars);
    let matches = query.apply(&cars);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if cars.is_empty() {
        log::info!(
            "{}",
            format!("No cars found in {}", root.display()).if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("Check that your Assetto Corsa folder is correctly configured.");
        return Ok(());
    }

    let facets = CarFacets::from_cars(&cars);
    log::debug!("Classes: {}", facets.classes.join(", "));
    log::debug!("Brands: {}", facets.brands.join(", "));

    log::info!(
        "{}",
        results_summary(ContentKind::Cars, &query.describe(), matches.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if matches.is_empty() {
        log::info!(
            "{}",
            "No cars found matching your search.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for car in matches {
        print_car(car);
    }

    Ok(())
}

fn print_car(car: &CarRecord) {
    let year = match car.year {
        Year::Known(y) => y.to_string(),
        Year::Unknown => "----".to_string(),
    };
    let skins = match car.total_skins {
        1 => "1 skin".to_string(),
        n => format!("{} skins", n),
    };
    let badge = if car.brand_image_path.is_some() { "" } else { " (no badge)" };

    log::info!(
        "  {} {}",
        car.name.if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", car.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "    {} | {} | {} | {}{}",
        year,
        car.class.if_supports_color(Stdout, |t| t.cyan()),
        car.brand,
        skins,
        badge.if_supports_color(Stdout, |t| t.dimmed()),
    );
    if let Some(bhp) = car.spec("bhp") {
        log::debug!("    Power: {}", bhp);
    }
}
