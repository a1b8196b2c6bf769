//! Movie App - browse a movie catalog, filter it and open a movie's details

// Hide console window on Windows release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Use mimalloc for faster memory allocation (Linux, macOS)
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use eframe::egui;
use log::{info, warn};
use std::path::PathBuf;

mod app;
mod catalog;
mod config;
mod filter;
mod logging;
mod models;
mod router;

use app::MovieApp;
use catalog::Catalog;
use config::AppConfig;
use router::Route;

#[derive(Parser, Debug)]
#[command(name = "movie_app", version, about = "Browse and filter a movie catalog")]
struct Cli {
    /// Catalog JSON file (overrides `catalog_path` in the config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Route to open at startup, e.g. `/movie/3`
    route: Option<String>,
}

/// Application icon: film frame with sprocket holes on a purple gradient
fn load_icon() -> egui::IconData {
    let size: usize = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let nx = x as f32 / size as f32;
            let ny = y as f32 / size as f32;

            let corner_radius = 0.125;
            let dx = (corner_radius - nx).max(nx - (1.0 - corner_radius)).max(0.0);
            let dy = (corner_radius - ny).max(ny - (1.0 - corner_radius)).max(0.0);
            if dx * dx + dy * dy > corner_radius * corner_radius {
                continue; // transparent corner
            }

            let in_strip = (0.06..=0.22).contains(&nx) || (0.78..=0.94).contains(&nx);
            let hole_row = (ny * 6.0).fract();
            let in_hole = ((0.11..=0.17).contains(&nx) || (0.83..=0.89).contains(&nx))
                && hole_row > 0.35
                && hole_row < 0.75;
            let in_frame = (0.28..=0.72).contains(&nx) && (0.2..=0.8).contains(&ny);

            let (r, g, b) = if in_hole {
                (255, 255, 255)
            } else if in_strip {
                (26, 26, 46)
            } else if in_frame {
                (245, 197, 24)
            } else {
                let t = nx * 0.5 + ny * 0.5;
                (
                    (102.0 + (118.0 - 102.0) * t) as u8,
                    (126.0 + (75.0 - 126.0) * t) as u8,
                    (234.0 + (162.0 - 234.0) * t) as u8,
                )
            };

            rgba[idx] = r;
            rgba[idx + 1] = g;
            rgba[idx + 2] = b;
            rgba[idx + 3] = 255;
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}

fn main() -> Result<(), eframe::Error> {
    logging::setup_logging();
    let cli = Cli::parse();

    info!("Movie App {} starting", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    let catalog_path = cli.catalog.or_else(|| config.catalog_path.clone());
    let catalog = Catalog::load(catalog_path.as_deref());

    let initial = match cli.route.as_deref() {
        Some(path) => Route::parse(path).unwrap_or_else(|| {
            warn!("Unknown route {:?}, opening the catalog", path);
            Route::Catalog
        }),
        None => Route::Catalog,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([800.0, 500.0])
            .with_icon(load_icon()),
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        "Movie App",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if config.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(MovieApp::new(catalog, config, initial)))
        }),
    )
}
