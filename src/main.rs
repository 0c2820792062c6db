//! # Goban Viewer Entry Point
//!
//! Loads the board images, binds a macroquad window as the drawing surface,
//! and repaints the board every frame.

use clap::Parser;
use goban::{
    Board, BoardRenderer, BoardTextures, BwBoard, GobanResult, MacroquadSurface, Placement,
    RenderConfig, Side,
};
use macroquad::prelude::*;
use std::path::PathBuf;
#[cfg(feature = "dev-tools")]
use tracing::{error, info, warn, Level};

#[cfg(not(feature = "dev-tools"))]
use log::{error, info, warn};

/// Command line arguments for the board viewer.
#[derive(Parser, Debug)]
#[command(name = "goban")]
#[command(about = "Display a Go board position in a window")]
#[command(version)]
struct Args {
    /// Board position as {"black": [...], "white": [...]} JSON
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// JSON file with image paths and board size
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Goban".to_string(),
        window_width: goban::config::SURFACE_WIDTH as i32,
        window_height: goban::config::SURFACE_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> GobanResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Goban viewer v{}", goban::VERSION);

    if let Err(e) = run_viewer(&args).await {
        error!("Viewer stopped: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> GobanResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .init();
    }

    Ok(())
}

/// Row 0, columns 0 to 8, all dark: the layout check drawn when no board is given.
fn demo_placements() -> Vec<Placement> {
    (0..goban::config::GRID_EXTENT as i32)
        .map(|col| Placement::new(0, col, Side::Dark))
        .collect()
}

/// Resolves the placements to draw from the command line.
fn load_placements(args: &Args, config: &RenderConfig) -> GobanResult<Vec<Placement>> {
    match &args.board {
        Some(path) => {
            let bw = BwBoard::load(path)?;
            let board = Board::from_bw(&bw, config.board_size)?;
            info!("Loaded {} stones from {}", board.stone_count(), path.display());
            Ok(board.placements())
        }
        None => Ok(demo_placements()),
    }
}

/// Main display loop.
async fn run_viewer(args: &Args) -> GobanResult<()> {
    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    let placements = load_placements(args, &config)?;

    info!("Loading board textures");
    let textures = BoardTextures::load(&config)?;

    let mut surface = MacroquadSurface::new();
    let mut renderer = BoardRenderer::initialize(
        &mut surface,
        &textures.background,
        &textures.light,
        &textures.dark,
    )?;

    // Off-surface placements are reported by the first pass and left out of
    // the per-frame redraw.
    let summary = renderer.render_full_board(&placements);
    if !summary.is_complete() {
        warn!(
            "{} of {} stones cannot be shown",
            summary.skipped.len(),
            placements.len()
        );
    }
    let placements = summary.drawn_placements(&placements);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Viewer closed");
            break;
        }

        renderer.render_full_board(&placements);

        next_frame().await;
    }

    Ok(())
}
