//! # Board Renderer
//!
//! Paints the board background and stone tokens onto a bound surface.

use super::{GridGeometry, ImageResource, PixelRect, ResourceKind, Surface};
use crate::game::{Placement, Side};
use crate::{GobanError, GobanResult};

/// Renders a board onto a surface it borrows for its whole lifetime.
///
/// The surface and the three images belong to the host; the renderer holds
/// references bound once by [`BoardRenderer::initialize`] and keeps no other
/// state between calls.
///
/// # Examples
///
/// ```
/// use goban::{BoardRenderer, LabeledImage, Placement, RecordingSurface, Side};
///
/// let mut surface = RecordingSurface::new();
/// let background = LabeledImage::new("bg", 450, 450);
/// let light = LabeledImage::new("white", 64, 64);
/// let dark = LabeledImage::new("black", 64, 64);
///
/// let mut renderer = BoardRenderer::initialize(&mut surface, &background, &light, &dark).unwrap();
/// let summary = renderer.render_full_board(&[Placement::new(0, 0, Side::Dark)]);
/// assert_eq!(summary.draw_calls(), 2);
/// ```
pub struct BoardRenderer<'a, S: Surface> {
    surface: &'a mut S,
    background: &'a S::Image,
    light: &'a S::Image,
    dark: &'a S::Image,
    geometry: GridGeometry,
}

/// Outcome of a full board pass.
#[derive(Debug, Default)]
pub struct RenderSummary {
    /// Tokens drawn onto the surface
    pub tokens_drawn: usize,
    /// Placements that could not be drawn, with the reason
    pub skipped: Vec<(Placement, GobanError)>,
}

impl RenderSummary {
    /// Draw calls issued: one background paint plus one per drawn token.
    pub fn draw_calls(&self) -> usize {
        1 + self.tokens_drawn
    }

    /// Returns true if every placement was drawn.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// The placements from this pass that were drawn, in their original order.
    ///
    /// Redrawing only these gives the same picture without skipping (and
    /// logging) the same placements again.
    pub fn drawn_placements(&self, placements: &[Placement]) -> Vec<Placement> {
        placements
            .iter()
            .filter(|placement| !self.skipped.iter().any(|(skipped, _)| skipped == *placement))
            .copied()
            .collect()
    }
}

impl<'a, S: Surface> BoardRenderer<'a, S> {
    /// Binds the surface and images and sizes the surface to 450x450.
    ///
    /// Fails if any image has no pixels yet.
    pub fn initialize(
        surface: &'a mut S,
        background: &'a S::Image,
        light: &'a S::Image,
        dark: &'a S::Image,
    ) -> GobanResult<Self> {
        Self::with_geometry(surface, background, light, dark, GridGeometry::STANDARD)
    }

    /// Like [`BoardRenderer::initialize`] with an explicit layout.
    pub fn with_geometry(
        surface: &'a mut S,
        background: &'a S::Image,
        light: &'a S::Image,
        dark: &'a S::Image,
        geometry: GridGeometry,
    ) -> GobanResult<Self> {
        for (kind, image) in [
            (ResourceKind::Background, background),
            (ResourceKind::LightToken, light),
            (ResourceKind::DarkToken, dark),
        ] {
            if !image.is_ready() {
                return Err(GobanError::ResourceNotReady(kind));
            }
        }

        surface.set_size(geometry.surface_width, geometry.surface_height);
        log::info!(
            "Board renderer bound to a {}x{} surface",
            geometry.surface_width,
            geometry.surface_height
        );

        Ok(Self {
            surface,
            background,
            light,
            dark,
            geometry,
        })
    }

    /// The layout in use.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// The bound surface.
    pub fn surface(&self) -> &S {
        &*self.surface
    }

    /// Pixel rectangle of a cell. No bounds check.
    pub fn cell_rect(&self, row: i32, col: i32) -> PixelRect {
        self.geometry.cell_rect(row, col)
    }

    fn token_image(&self, side: Side) -> &'a S::Image {
        match side {
            Side::Dark => self.dark,
            Side::Light => self.light,
        }
    }

    /// Draws one token.
    ///
    /// Fails without drawing if the token would not lie fully on the surface.
    pub fn draw_token(&mut self, row: i32, col: i32, side: Side) -> GobanResult<()> {
        let rect = self.cell_rect(row, col);
        let (width, height) = self.surface.size();
        if !rect.is_within(width, height) {
            return Err(GobanError::OffSurface { row, col });
        }

        let image = self.token_image(side);
        log::trace!(
            "Drawing {:?} token at ({}, {}) into {:?}",
            side,
            row,
            col,
            rect
        );
        self.surface.draw_image(image, rect);
        Ok(())
    }

    /// Paints the background, then every placement in order.
    ///
    /// Later placements paint over earlier ones. A placement that cannot be
    /// drawn is logged and recorded; the rest are still drawn.
    pub fn render_full_board(&mut self, placements: &[Placement]) -> RenderSummary {
        let mut summary = RenderSummary::default();

        self.surface.fill(self.background);

        for placement in placements {
            match self.draw_token(placement.row, placement.col, placement.side) {
                Ok(()) => summary.tokens_drawn += 1,
                Err(e) => {
                    log::warn!("Skipping placement {:?}: {}", placement, e);
                    summary.skipped.push((*placement, e));
                }
            }
        }

        log::debug!(
            "Rendered board: {} tokens drawn, {} skipped",
            summary.tokens_drawn,
            summary.skipped.len()
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{DrawCommand, LabeledImage, RecordingSurface};

    struct Images {
        background: LabeledImage,
        light: LabeledImage,
        dark: LabeledImage,
    }

    fn images() -> Images {
        Images {
            background: LabeledImage::new("bg", 450, 450),
            light: LabeledImage::new("white", 32, 32),
            dark: LabeledImage::new("black", 32, 32),
        }
    }

    #[test]
    fn test_initialize_sizes_surface() {
        let images = images();
        let mut surface = RecordingSurface::new();
        {
            let renderer = BoardRenderer::initialize(
                &mut surface,
                &images.background,
                &images.light,
                &images.dark,
            )
            .unwrap();
            assert_eq!(renderer.surface().size(), (450, 450));
        }
        assert_eq!(
            surface.commands(),
            &[DrawCommand::Resize {
                width: 450,
                height: 450
            }]
        );
    }

    #[test]
    fn test_initialize_rejects_unready_images() {
        let images = images();
        let empty = LabeledImage::new("empty", 0, 0);
        let mut surface = RecordingSurface::new();

        let error =
            BoardRenderer::initialize(&mut surface, &images.background, &empty, &images.dark)
                .err();
        assert!(matches!(
            error,
            Some(GobanError::ResourceNotReady(ResourceKind::LightToken))
        ));

        let error =
            BoardRenderer::initialize(&mut surface, &empty, &images.light, &images.dark).err();
        assert!(matches!(
            error,
            Some(GobanError::ResourceNotReady(ResourceKind::Background))
        ));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_draw_token_selects_image_by_side() {
        let images = images();
        let mut surface = RecordingSurface::new();
        {
            let mut renderer = BoardRenderer::initialize(
                &mut surface,
                &images.background,
                &images.light,
                &images.dark,
            )
            .unwrap();
            renderer.draw_token(0, 0, Side::Dark).unwrap();
            renderer.draw_token(1, 2, Side::Light).unwrap();
        }

        assert_eq!(surface.drawn_labels(), vec!["black", "white"]);
        assert_eq!(
            surface.commands()[2],
            DrawCommand::Draw {
                image: "white".to_string(),
                rect: PixelRect::new(45, 25, 60, 40),
            }
        );
    }

    #[test]
    fn test_draw_token_off_surface() {
        let images = images();
        let mut surface = RecordingSurface::new();
        {
            let mut renderer = BoardRenderer::initialize(
                &mut surface,
                &images.background,
                &images.light,
                &images.dark,
            )
            .unwrap();
            assert!(matches!(
                renderer.draw_token(-1, 0, Side::Dark),
                Err(GobanError::OffSurface { row: -1, col: 0 })
            ));
            assert!(matches!(
                renderer.draw_token(0, 22, Side::Light),
                Err(GobanError::OffSurface { row: 0, col: 22 })
            ));
            assert!(renderer.draw_token(21, 21, Side::Light).is_ok());
        }
        assert_eq!(surface.drawn_labels(), vec!["white"]);
    }

    #[test]
    fn test_empty_board_paints_background_only() {
        let images = images();
        let mut surface = RecordingSurface::new();
        let summary = {
            let mut renderer = BoardRenderer::initialize(
                &mut surface,
                &images.background,
                &images.light,
                &images.dark,
            )
            .unwrap();
            renderer.render_full_board(&[])
        };

        assert_eq!(summary.draw_calls(), 1);
        assert!(summary.is_complete());
        assert_eq!(surface.paint_count(), 1);
        assert_eq!(
            surface.commands()[1],
            DrawCommand::Fill {
                image: "bg".to_string()
            }
        );
    }

    #[test]
    fn test_one_paint_per_placement() {
        let images = images();
        let placements: Vec<Placement> = (0..9)
            .map(|col| Placement::new(0, col, Side::Dark))
            .collect();
        let mut surface = RecordingSurface::new();
        let summary = {
            let mut renderer = BoardRenderer::initialize(
                &mut surface,
                &images.background,
                &images.light,
                &images.dark,
            )
            .unwrap();
            renderer.render_full_board(&placements)
        };

        assert_eq!(summary.tokens_drawn, 9);
        assert_eq!(summary.draw_calls(), 10);
        assert_eq!(surface.paint_count(), 10);
        assert_eq!(
            surface.commands().last(),
            Some(&DrawCommand::Draw {
                image: "black".to_string(),
                rect: PixelRect::new(165, 5, 180, 20),
            })
        );
    }

    #[test]
    fn test_bad_placement_does_not_stop_the_pass() {
        let images = images();
        let placements = [
            Placement::new(0, 0, Side::Dark),
            Placement::new(0, 40, Side::Dark),
            Placement::new(1, 1, Side::Light),
        ];
        let mut surface = RecordingSurface::new();
        let summary = {
            let mut renderer = BoardRenderer::initialize(
                &mut surface,
                &images.background,
                &images.light,
                &images.dark,
            )
            .unwrap();
            renderer.render_full_board(&placements)
        };

        assert_eq!(summary.tokens_drawn, 2);
        assert!(!summary.is_complete());
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].0, placements[1]);
        assert_eq!(surface.drawn_labels(), vec!["black", "white"]);
        assert_eq!(
            summary.drawn_placements(&placements),
            vec![placements[0], placements[2]]
        );
    }

    #[test]
    fn test_redrawing_drawn_placements_skips_nothing() {
        let images = images();
        let placements = [
            Placement::new(-1, 0, Side::Light),
            Placement::new(2, 2, Side::Dark),
        ];
        let mut surface = RecordingSurface::new();
        let mut renderer = BoardRenderer::initialize(
            &mut surface,
            &images.background,
            &images.light,
            &images.dark,
        )
        .unwrap();

        let first = renderer.render_full_board(&placements);
        let drawable = first.drawn_placements(&placements);
        assert_eq!(drawable, vec![placements[1]]);

        let second = renderer.render_full_board(&drawable);
        assert!(second.is_complete());
        assert_eq!(second.tokens_drawn, first.tokens_drawn);
    }
}
