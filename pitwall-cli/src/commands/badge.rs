use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pitwall_lib::BadgeResolver;
use pitwall_lib::badge::normalize_brand;
use pitwall_lib::settings::badge_dirs;

use crate::{CliError, Context};

/// Resolve and print the badge image for a brand.
pub(crate) fn run_badge(ctx: &Context, brand: &str) -> Result<(), CliError> {
    let resolver = BadgeResolver::new(badge_dirs(&ctx.settings));
    if resolver.dirs().is_empty() {
        return Err(CliError::config("No badge directories could be determined"));
    }

    match resolver.find(brand) {
        Some(path) => log::info!("{}", path.display()),
        None => {
            log::info!(
                "{}",
                format!("No badge found for '{}'", brand).if_supports_color(Stdout, |t| t.yellow()),
            );
            log::info!("  Normalized name: {}", normalize_brand(brand));
            log::info!("  Searched:");
            for dir in resolver.dirs() {
                let status = if dir.is_dir() { "" } else { " (not found)" };
                log::info!(
                    "    {}{}",
                    dir.display(),
                    status.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
    }
    Ok(())
}
