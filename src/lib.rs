pub mod console;
pub mod core;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod utils;

use crate::console::ConsoleDialogs;
use crate::core::context::LauncherContext;
use crate::core::locale::{language_code, system_culture};
use crate::core::registry::AppRegistry;
use crate::core::resolver::Resolver;
use crate::core::update::{spawn_update_check, FeedChecker};
use crate::i18n::BuiltinText;
use crate::models::error::SError;
use crate::models::paths;
use crate::utils::icon::FileIconSource;
use crate::utils::process::ProcessChecker;
use crate::utils::thread::with_arc;
use camino::Utf8Path;
use std::sync::Arc;
use sysinfo::System;
use tracing::{info, warn};

/// Startup sequence after logging is up: single-instance guard, resources,
/// config resolution, then the update check in the background.
pub async fn run(app_dir: &Utf8Path) -> Result<(), SError> {
    let mut sys = System::new();
    if ProcessChecker::another_instance_running(&mut sys) {
        info!("Another launcher instance is running, exiting");
        return Err(SError::AlreadyRunning);
    }

    let resources = paths::resources_dir();
    if let Err(e) = std::fs::create_dir_all(&resources) {
        warn!("Cannot create resource directory {resources}: {e}");
    }

    let culture = system_culture();
    let text = Arc::new(BuiltinText::new(language_code(&culture))?);
    let ctx = LauncherContext::new(
        app_dir,
        culture,
        text,
        Arc::new(ConsoleDialogs),
        Arc::new(FileIconSource),
    );

    let config = Resolver::new(&ctx).resolve();
    let registry = AppRegistry::new(ctx, config);

    // Not awaited; see core::update.
    let _update = spawn_update_check(&registry, Arc::new(FeedChecker::default()));

    show_summary(&registry, &resources);
    Ok(())
}

fn show_summary(registry: &AppRegistry, resources: &Utf8Path) {
    let app_dir = &registry.context.app_dir;
    with_arc(&registry.config, |config| {
        match config.executable_path(app_dir) {
            Some(exe) if exe.is_file() => println!("Game: {exe}"),
            Some(exe) => println!("Game: {exe} (missing)"),
            None => println!("Game: not configured"),
        }
        println!("Language: {}", config.language);
        for group in &config.mod_groups {
            println!("- {} [{}]", group.name, group.id);
            println!("    {}", group.description);
            println!("    enable:  {}", group.enable_mods.join(", "));
            println!("    disable: {}", group.disable_mods.join(", "));
            println!("    cover:   {}", group.cover_path(resources));
        }
    });
}
