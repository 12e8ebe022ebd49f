//! Text painting: single lines and centered cell text.

use image::{Rgba, RgbaImage};
use tracing::warn;

use crate::layout::{center_offset, fit_text, Cell, FitRange, Font, Typeface};

/// Ink color for all text and lines.
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Paints `line` with its top-left origin at (`x`, `y`). Pixels outside the
/// canvas are clipped.
pub fn draw_text_line(
    image: &mut RgbaImage,
    font: &Font,
    line: &str,
    x: i32,
    y: i32,
    ink: Rgba<u8>,
) {
    let (width, height) = image.dimensions();
    font.draw_line(line, |px, py, coverage| {
        let (cx, cy) = (x + px, y + py);
        if cx < 0 || cy < 0 || cx >= width as i32 || cy >= height as i32 {
            return;
        }
        blend(image.get_pixel_mut(cx as u32, cy as u32), ink, coverage);
    });
}

/// Alpha-blends `ink` over `pixel` with the given coverage.
fn blend(pixel: &mut Rgba<u8>, ink: Rgba<u8>, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0) * (ink[3] as f32 / 255.0);
    for channel in 0..3 {
        let under = pixel[channel] as f32;
        let over = ink[channel] as f32;
        pixel[channel] = (under + (over - under) * alpha).round() as u8;
    }
    let under_alpha = pixel[3] as f32 / 255.0;
    pixel[3] = ((alpha + under_alpha * (1.0 - alpha)) * 255.0).round() as u8;
}

/// Fits `question` into `cell` and paints it centered.
///
/// The line block is centered vertically; each line is centered horizontally
/// on its own. Text that overflows at the minimum size is still drawn.
pub fn draw_question(
    image: &mut RgbaImage,
    question: &str,
    cell: Cell,
    face: &Typeface,
    range: FitRange,
) {
    let fitted = fit_text(question, cell.text_area, cell.text_area, face, range);
    if !fitted.fits {
        warn!(
            question,
            size = fitted.font.size(),
            width = fitted.block_width,
            height = fitted.block_height,
            "Question overflows its cell at the minimum font size"
        );
    }

    let line_height = fitted.font.line_height();
    let total_height = line_height * fitted.lines.len() as u32;
    let mut line_y = cell.y as i32 + center_offset(cell.size, total_height);

    for line in &fitted.lines {
        let line_width = fitted.font.line_width(line);
        let line_x = cell.x as i32 + center_offset(cell.size, line_width);
        draw_text_line(image, &fitted.font, line, line_x, line_y, INK);
        line_y += line_height as i32;
    }
}
