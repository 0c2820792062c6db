//! Integration tests for the position and config shipped in `demos/`.

use goban::{
    Board, BoardRenderer, BwBoard, GobanResult, LabeledImage, RecordingSurface, RenderConfig,
};
use std::path::{Path, PathBuf};

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn test_demo_config_loads() -> GobanResult<()> {
    let config = RenderConfig::load(demo("render.json"))?;
    assert_eq!(config.board_size, 9);
    assert_eq!(config.dark_stone, PathBuf::from("assets/img/B_stone.png"));
    Ok(())
}

#[test]
fn test_demo_problem_position() -> GobanResult<()> {
    let config = RenderConfig::load(demo("render.json"))?;
    let board = Board::from_bw(&BwBoard::load(demo("problem.json"))?, config.board_size)?;

    assert_eq!(board.stone_count(), 9);
    let ascii = board.ascii_board();
    let rows: Vec<&str> = ascii.lines().collect();
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[2], "..###....");
    assert_eq!(rows[3], ".#OOO#...");
    assert_eq!(rows[4], "..O......");
    assert!(rows
        .iter()
        .enumerate()
        .filter(|(row, _)| !(2..=4).contains(row))
        .all(|(_, line)| *line == "........."));
    Ok(())
}

#[test]
fn test_demo_problem_draws_every_stone() -> GobanResult<()> {
    let board = Board::from_bw(&BwBoard::load(demo("problem.json"))?, 9)?;
    let background = LabeledImage::new("bg", 450, 450);
    let light = LabeledImage::new("white", 64, 64);
    let dark = LabeledImage::new("black", 64, 64);

    let mut surface = RecordingSurface::new();
    let summary = {
        let mut renderer = BoardRenderer::initialize(&mut surface, &background, &light, &dark)?;
        renderer.render_full_board(&board.placements())
    };

    assert!(summary.is_complete());
    assert_eq!(summary.draw_calls(), 10);
    assert_eq!(
        surface.drawn_labels(),
        vec!["black", "black", "black", "black", "white", "white", "white", "black", "white"]
    );
    Ok(())
}
