//! Card rendering: paints the title, grid and questions onto one canvas.

use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::errors::BingoError;
use crate::layout::{best_rectangle_shape, CardDimensions, CardLayout, FitRange, Typeface};
use crate::render::text::{draw_question, draw_text_line, INK};

/// Background color of the canvas.
pub const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Size the title is drawn at.
pub const TITLE_SIZE: u32 = 36;

/// Everything needed to turn a question list into a card image.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    pub title: String,
    pub title_face: Typeface,
    pub body_face: Typeface,
    pub dims: CardDimensions,
    pub body_range: FitRange,
}

impl CardRenderer {
    pub fn new(title: impl Into<String>, title_face: Typeface, body_face: Typeface) -> Self {
        CardRenderer {
            title: title.into(),
            title_face,
            body_face,
            dims: CardDimensions::default(),
            body_range: FitRange::default(),
        }
    }

    /// Lays out `questions` on the most square grid and renders the card.
    ///
    /// Questions are placed row-major, left to right, top to bottom.
    pub fn render(&self, questions: &[String]) -> Result<(CardLayout, RgbaImage), BingoError> {
        let count = i64::try_from(questions.len())
            .map_err(|_| BingoError::InvalidInput("too many questions".to_string()))?;
        let shape = best_rectangle_shape(count)?;
        let layout = CardLayout::new(shape, self.dims);
        debug!(
            rows = shape.rows,
            cols = shape.cols,
            cells = shape.cells(),
            min_size = self.body_range.min(),
            start_size = self.body_range.start(),
            width = layout.width,
            height = layout.height,
            "Card layout resolved"
        );

        let mut image = RgbaImage::from_pixel(layout.width, layout.height, PAPER);
        self.draw_title(&mut image, &layout);
        draw_grid(&mut image, &layout);

        for (question, cell) in questions.iter().zip(layout.cells()) {
            draw_question(&mut image, question, cell, &self.body_face, self.body_range);
        }

        Ok((layout, image))
    }

    fn draw_title(&self, image: &mut RgbaImage, layout: &CardLayout) {
        let font = self.title_face.at_size(TITLE_SIZE);
        let bbox = font.measure(&self.title);
        let (x, y) = layout.title_origin(bbox.width(), bbox.height());
        draw_text_line(image, &font, &self.title, x, y, INK);
    }
}

/// Strokes the `rows + 1` horizontal and `cols + 1` vertical separators.
pub fn draw_grid(image: &mut RgbaImage, layout: &CardLayout) {
    let stroke = layout.dims.line_width;
    let (top, bottom) = (layout.grid_top(), layout.grid_bottom());
    let (left, right) = (layout.grid_left(), layout.grid_right());

    for x in layout.vertical_lines() {
        fill_rect(image, x, top, stroke, bottom - top + 1, INK);
    }
    for y in layout.horizontal_lines() {
        fill_rect(image, left, y, right - left + 1, stroke, INK);
    }
}

/// Fills a rectangle, clipped to the canvas.
fn fill_rect(image: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let x_end = x.saturating_add(width).min(image.width());
    let y_end = y.saturating_add(height).min(image.height());
    for py in y..y_end {
        for px in x..x_end {
            image.put_pixel(px, py, color);
        }
    }
}

/// Encodes `image` as PNG at `path`.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), BingoError> {
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> CardRenderer {
        CardRenderer::new("Christmas Bingo", Typeface::Builtin, Typeface::Builtin)
    }

    fn questions(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Question number {i}")).collect()
    }

    #[test]
    fn test_render_twelve_questions_is_three_by_four() {
        let (layout, image) = renderer().render(&questions(12)).unwrap();
        assert_eq!((layout.shape.rows, layout.shape.cols), (3, 4));
        assert_eq!(image.dimensions(), (640, 590));
    }

    #[test]
    fn test_render_draws_separators() {
        let (layout, image) = renderer().render(&questions(6)).unwrap();
        for x in layout.vertical_lines() {
            assert_eq!(*image.get_pixel(x, layout.grid_top() + 3), INK, "vertical at {x}");
            assert_eq!(*image.get_pixel(x + 1, layout.grid_bottom()), INK);
        }
        for y in layout.horizontal_lines() {
            assert_eq!(*image.get_pixel(layout.grid_left() + 3, y), INK, "horizontal at {y}");
        }
    }

    #[test]
    fn test_render_leaves_padding_blank() {
        let (_, image) = renderer().render(&questions(4)).unwrap();
        for x in 0..image.width() {
            assert_eq!(*image.get_pixel(x, 0), PAPER);
            assert_eq!(*image.get_pixel(x, image.height() - 1), PAPER);
        }
    }

    #[test]
    fn test_render_paints_title_in_band() {
        let r = renderer();
        let (layout, image) = r.render(&questions(4)).unwrap();
        let inked = (layout.dims.padding..layout.grid_top())
            .flat_map(|y| (0..image.width()).map(move |x| (x, y)))
            .any(|(x, y)| *image.get_pixel(x, y) != PAPER);
        assert!(inked, "title band should contain ink");
    }

    #[test]
    fn test_render_with_outline_faces() {
        let face = crate::layout::font_metrics::test_fonts::dejavu_sans();
        let r = CardRenderer::new("Christmas Bingo", face.clone(), face);
        let (layout, image) = r.render(&questions(12)).unwrap();
        assert_eq!(image.dimensions(), (640, 590));
        for cell in layout.cells() {
            let inked = (cell.y + 3..cell.y + cell.size - 3)
                .flat_map(|y| (cell.x + 3..cell.x + cell.size - 3).map(move |x| (x, y)))
                .any(|(x, y)| image.get_pixel(x, y)[0] < 128);
            assert!(inked, "cell at ({}, {}) should hold text", cell.x, cell.y);
        }
    }

    #[test]
    fn test_render_empty_question_list_is_invalid() {
        let err = renderer().render(&[]).unwrap_err();
        assert!(matches!(err, BingoError::InvalidInput(_)), "got {err:?}");
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut image = RgbaImage::from_pixel(4, 4, PAPER);
        fill_rect(&mut image, 2, 2, 10, 10, INK);
        assert_eq!(*image.get_pixel(3, 3), INK);
        assert_eq!(*image.get_pixel(1, 1), PAPER);
    }

    #[test]
    fn test_save_png_round_trips_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.png");
        let image = RgbaImage::from_pixel(30, 20, PAPER);
        save_png(&image, &path).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (30, 20));
    }

    #[test]
    fn test_save_png_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("card.png");
        let image = RgbaImage::from_pixel(2, 2, PAPER);
        assert!(matches!(save_png(&image, &path), Err(BingoError::Image(_))));
    }
}
