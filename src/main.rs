mod app_logic;
mod core;
mod ipc;
mod platform_layer;
mod ui_description_layer;

use crate::app_logic::ShellAppLogic;
use crate::core::{config, constants, DiskDevToolsInstaller, RuntimeConfig};
use crate::platform_layer::{Platform, PlatformInterface};

use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::sync::{Arc, Mutex};

fn main() {
    init_logging();

    let runtime_config = RuntimeConfig::from_env();
    let platform = Platform::current();
    log::info!(
        "Main: Starting {} shell on {:?} (dev mode: {}).",
        constants::APP_DISPLAY_NAME,
        platform,
        runtime_config.dev_mode
    );

    let installer = DiskDevToolsInstaller::new(runtime_config.devtools_bundle_dir.clone());
    let logic = ShellAppLogic::new(platform, runtime_config, Box::new(installer));

    let interface = PlatformInterface::new(platform);
    interface.run(Arc::new(Mutex::new(logic)))
}

fn init_logging() {
    let level = std::env::var(config::ENV_LOG)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(log::LevelFilter::Info);
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}
