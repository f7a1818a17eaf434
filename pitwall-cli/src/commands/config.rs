use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pitwall_lib::ContentKind;
use pitwall_lib::settings::{self, badge_dirs};

use crate::Context;

/// Show the settings file and the folders it resolves to.
pub(crate) fn run_config_show(ctx: &Context) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "pitwall Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    log_path("install", ctx.install.as_deref());
    for kind in [ContentKind::Cars, ContentKind::Tracks] {
        let dir = settings::content_dir(kind, None, ctx.install.as_deref(), &ctx.settings);
        log_path(&format!("{} folder", kind.noun(1)), dir.as_deref());
    }
    for (label, dir) in ["user badges", "default badges"].iter().zip(badge_dirs(&ctx.settings)) {
        log_path(label, Some(&dir));
    }

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

fn log_path(label: &str, path: Option<&Path>) {
    let label = format!("{}:", label);
    match path {
        Some(p) if p.exists() => log::info!(
            "  {:<16} {}",
            label.if_supports_color(Stdout, |t| t.cyan()),
            p.display(),
        ),
        Some(p) => log::info!(
            "  {:<16} {} {}",
            label.if_supports_color(Stdout, |t| t.cyan()),
            p.display(),
            "(missing)".if_supports_color(Stdout, |t| t.yellow()),
        ),
        None => log::info!(
            "  {:<16} {}",
            label.if_supports_color(Stdout, |t| t.cyan()),
            "not set".if_supports_color(Stdout, |t| t.yellow()),
        ),
    }
}
