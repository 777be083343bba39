mod app;
mod config;
mod host;
mod input;
mod menu;
mod monitor;
mod nav;
mod paths;
mod render;
mod scroll;
mod ui;
mod util;

use crate::app::OverlayApp;
use crate::config::{load_cfg, save_cfg};
use crate::monitor::*;
use crate::paths::{PATH_DATA, PATH_SETTINGS};
use crate::util::msg;

use std::path::PathBuf;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Display detection goes through x11 like the rest of the sdl stack
    unsafe {
        std::env::set_var("SDL_VIDEODRIVER", "x11");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match CliArgs::parse(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE_TEXT);
            std::process::exit(1);
        }
    };
    if cli.help {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    if let Err(e) = std::fs::create_dir_all(&*PATH_DATA) {
        log::warn!("Failed to create {}: {}", PATH_DATA.display(), e);
    }

    let mut config = load_cfg();
    if !PATH_SETTINGS.exists() {
        if let Err(e) = save_cfg(&config) {
            log::warn!("Failed to write default settings: {}", e);
        }
    }
    if let Some(cores) = cli.cores {
        config.cores_dir = cores;
    }
    if let Some(roms) = cli.roms {
        config.roms_dir = roms;
    }

    let monitors = get_monitors_sdl().unwrap_or_else(|e| {
        log::warn!("Display detection failed: {}", e);
        Vec::new()
    });
    for monitor in &monitors {
        log::info!(
            "Monitor detected: {} ({}x{})",
            monitor.name(),
            monitor.width(),
            monitor.height()
        );
    }
    let scale = zoom_for(monitors.first(), cli.fullscreen);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([800.0, 560.0])
            .with_min_inner_size([480.0, 320.0])
            .with_fullscreen(cli.fullscreen),
        ..Default::default()
    };

    log::info!(
        "Starting overlay (session {})",
        if cli.session { "running" } else { "idle" }
    );

    let session = cli.session;
    let result = eframe::run_native(
        "Retro Overlay",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_zoom_factor(scale);
            crate::ui::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(OverlayApp::new(config, session)))
        }),
    );

    if let Err(e) = &result {
        log::error!("Overlay failed: {}", e);
        msg("Error", &format!("Overlay failed to start: {}", e));
    }
    result
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    help: bool,
    fullscreen: bool,
    session: bool,
    cores: Option<PathBuf>,
    roms: Option<PathBuf>,
}

impl CliArgs {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut cli = CliArgs::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" => cli.help = true,
                "--fullscreen" => cli.fullscreen = true,
                "--session" => cli.session = true,
                "--cores" => cli.cores = Some(Self::value(arg, iter.next())?),
                "--roms" => cli.roms = Some(Self::value(arg, iter.next())?),
                other => return Err(format!("Unknown option: {}", other)),
            }
        }
        Ok(cli)
    }

    fn value(flag: &str, next: Option<&String>) -> Result<PathBuf, String> {
        next.map(PathBuf::from)
            .ok_or_else(|| format!("{} needs a directory", flag))
    }
}

static USAGE_TEXT: &str = r#"
Usage: retro-overlay [OPTIONS]

Options:
    --session             A core is running; open on the quick menu and allow hiding the overlay
    --cores <dir>         Directory browsed by "Load Core"
    --roms <dir>          Directory browsed by "Load Game"
    --fullscreen          Start the overlay in fullscreen mode
    --help                Show this text
"#;
