//! # Headless Board Renderer
//!
//! Renders a board position to a PNG file without opening a window.
//!
//! ```text
//! goban-render demos/problem.json --config demos/render.json --ascii -o problem.png
//! ```
//!
//! `demos/render.json` points at `assets/img/`; the images themselves are not
//! shipped, so pass `--background`, `--light` and `--dark` or supply them there.

use clap::Parser;
use goban::{
    load_rgba, Board, BoardRenderer, BwBoard, GobanResult, RasterSurface, RenderConfig,
};
use log::{info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments for the headless renderer.
#[derive(Parser, Debug)]
#[command(name = "goban-render")]
#[command(about = "Render a Go board position to an image file")]
#[command(version)]
struct Args {
    /// Board position as {"black": [...], "white": [...]} JSON
    board: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "board.png")]
    output: PathBuf,

    /// JSON file with image paths and board size
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Background image, overrides the config
    #[arg(long)]
    background: Option<PathBuf>,

    /// Light stone image, overrides the config
    #[arg(long)]
    light: Option<PathBuf>,

    /// Dark stone image, overrides the config
    #[arg(long)]
    dark: Option<PathBuf>,

    /// Board size used to read "A1" style labels, overrides the config
    #[arg(long)]
    size: Option<usize>,

    /// Print the position as ASCII art
    #[arg(long)]
    ascii: bool,

    /// Also write the position back out as SGF-labelled JSON
    #[arg(long, value_name = "PATH")]
    save_position: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn resolve_config(args: &Args) -> GobanResult<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    if let Some(path) = &args.background {
        config.background = path.clone();
    }
    if let Some(path) = &args.light {
        config.light_stone = path.clone();
    }
    if let Some(path) = &args.dark {
        config.dark_stone = path.clone();
    }
    if let Some(size) = args.size {
        config.board_size = size;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> GobanResult<()> {
    let config = resolve_config(args)?;

    let bw = BwBoard::load(&args.board)?;
    let board = Board::from_bw(&bw, config.board_size)?;
    info!(
        "Loaded {} stones on a {}x{} board",
        board.stone_count(),
        board.size(),
        board.size()
    );

    if args.ascii {
        println!("{}", board.ascii_board());
    }

    if let Some(path) = &args.save_position {
        BwBoard::from_board(&board).save(path)?;
        info!("Wrote position to {}", path.display());
    }

    let background = load_rgba(&config.background)?;
    let light = load_rgba(&config.light_stone)?;
    let dark = load_rgba(&config.dark_stone)?;

    let mut surface = RasterSurface::new(0, 0);
    let summary = {
        let mut renderer = BoardRenderer::initialize(&mut surface, &background, &light, &dark)?;
        renderer.render_full_board(&board.placements())
    };

    if !summary.is_complete() {
        warn!(
            "{} of {} stones not drawn",
            summary.skipped.len(),
            board.stone_count()
        );
    }

    surface.save(&args.output)
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .format_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
