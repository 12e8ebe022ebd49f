//! Fit-to-cell text sizing: finds the largest font size at which wrapped text
//! fits a bounded region.
//!
//! # Search
//! - Text is wrapped once at [`WRAP_WIDTH`] characters; wrapping never changes
//!   with the font size.
//! - Sizes are tried from `start` down to `min`, one point at a time. The first
//!   size whose block fits both dimensions wins.
//! - If nothing fits, the `min` layout is returned anyway. Callers decide
//!   whether to log the overflow; fitting never fails.
//!
//! A linear scan is enough: the range is a few dozen sizes and runs once per cell.

use crate::errors::BingoError;
use crate::layout::font_metrics::{Font, Typeface};
use crate::layout::wrap::{wrap, WRAP_WIDTH};

/// Smallest size tried when no explicit minimum is given.
pub const DEFAULT_MIN_SIZE: u32 = 8;

/// Size the search starts from for cell text.
pub const DEFAULT_START_SIZE: u32 = 24;

/// Inclusive font size range for the search, `min <= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitRange {
    start: u32,
    min: u32,
}

impl FitRange {
    pub fn new(start: u32, min: u32) -> Result<Self, BingoError> {
        if min == 0 {
            return Err(BingoError::InvalidInput(
                "minimum font size must be at least 1".to_string(),
            ));
        }
        if start < min {
            return Err(BingoError::InvalidInput(format!(
                "start font size {start} is below the minimum {min}"
            )));
        }
        Ok(FitRange { start, min })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn min(&self) -> u32 {
        self.min
    }
}

impl Default for FitRange {
    fn default() -> Self {
        FitRange {
            start: DEFAULT_START_SIZE,
            min: DEFAULT_MIN_SIZE,
        }
    }
}

/// Result of a fit: the chosen font, its wrapped lines, and the block size.
#[derive(Debug, Clone)]
pub struct FittedText {
    pub font: Font,
    pub lines: Vec<String>,
    pub block_width: u32,
    pub block_height: u32,
    /// False when even the minimum size overflows the region.
    pub fits: bool,
}

/// Block dimensions of `lines` at `font`: (widest line, line height × line count).
pub fn measure_block(font: &Font, lines: &[String]) -> (u32, u32) {
    let width = lines.iter().map(|l| font.line_width(l)).max().unwrap_or(0);
    let height = font.line_height() * lines.len() as u32;
    (width, height)
}

/// Finds the largest size in `range` at which `text` fits `max_width × max_height`.
pub fn fit_text(
    text: &str,
    max_width: u32,
    max_height: u32,
    face: &Typeface,
    range: FitRange,
) -> FittedText {
    let lines = wrap(text, WRAP_WIDTH);

    let mut size = range.start;
    let mut font = face.at_size(size);

    loop {
        let (block_width, block_height) = measure_block(&font, &lines);
        let fits = block_width <= max_width && block_height <= max_height;

        if fits || size <= range.min {
            return FittedText {
                font,
                lines,
                block_width,
                block_height,
                fits,
            };
        }

        size -= 1;
        font = face.at_size(size);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::test_fonts;

    const SAMPLES: &[&str] = &[
        "",
        "Cat",
        "Has a pet cat",
        "Has travelled to another continent this year",
        "Can name all twelve reindeer without looking it up, in order, twice",
        "Supercalifragilisticexpialidocious",
    ];

    #[test]
    fn test_range_rejects_start_below_min() {
        assert!(matches!(
            FitRange::new(6, 8),
            Err(BingoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_range_rejects_zero_min() {
        assert!(FitRange::new(10, 0).is_err());
    }

    #[test]
    fn test_range_defaults() {
        let range = FitRange::default();
        assert_eq!(range.start(), 24);
        assert_eq!(range.min(), 8);
        assert_eq!(FitRange::new(36, 8).unwrap().start(), 36);
    }

    #[test]
    fn test_short_text_in_large_cell_keeps_start_size() {
        let fitted = fit_text("Has a pet cat", 1000, 1000, &Typeface::Builtin, FitRange::default());
        assert_eq!(fitted.font.size(), 24);
        assert_eq!(fitted.lines, vec!["Has a pet cat"]);
        assert!(fitted.fits);
    }

    #[test]
    fn test_long_text_in_large_cell_uses_wrap_width_lines() {
        let text = "Has travelled to another continent this year";
        let fitted = fit_text(text, 10_000, 10_000, &Typeface::Builtin, FitRange::default());
        assert_eq!(fitted.font.size(), 24);
        assert_eq!(fitted.lines, wrap(text, WRAP_WIDTH));
    }

    #[test]
    fn test_shrinks_until_it_fits() {
        // Builtin face: "Has travelled to" is 16 chars. At 2x scale that is
        // 190px, at 1x it is 95px, so a 140px cell forces the 1x sizes (<= 15).
        let fitted = fit_text(
            "Has travelled to another continent this year",
            140,
            140,
            &Typeface::Builtin,
            FitRange::default(),
        );
        assert!(fitted.fits);
        assert_eq!(fitted.font.size(), 15, "largest 1x size should win");
        assert!(fitted.block_width <= 140);
        assert!(fitted.block_height <= 140);
    }

    #[test]
    fn test_overflow_returns_min_size_layout() {
        let fitted = fit_text(
            "Has travelled to another continent this year",
            10,
            10,
            &Typeface::Builtin,
            FitRange::new(20, 9).unwrap(),
        );
        assert!(!fitted.fits);
        assert_eq!(fitted.font.size(), 9);
        assert_eq!(fitted.lines.len(), 3);
    }

    #[test]
    fn test_start_equal_to_min_tries_exactly_one_size() {
        let fitted = fit_text("Cat", 1, 1, &Typeface::Builtin, FitRange::new(12, 12).unwrap());
        assert_eq!(fitted.font.size(), 12);
        assert!(!fitted.fits);
    }

    #[test]
    fn test_empty_text_fits_immediately() {
        let fitted = fit_text("", 0, 0, &Typeface::Builtin, FitRange::default());
        assert!(fitted.fits);
        assert!(fitted.lines.is_empty());
        assert_eq!(fitted.font.size(), 24);
    }

    #[test]
    fn test_size_always_within_range() {
        let range = FitRange::new(30, 10).unwrap();
        for text in SAMPLES {
            for cell in [1_u32, 20, 60, 140, 400] {
                let fitted = fit_text(text, cell, cell, &Typeface::Builtin, range);
                let size = fitted.font.size();
                assert!(
                    (range.min()..=range.start()).contains(&size),
                    "size {size} outside range for {text:?} in {cell}px"
                );
            }
        }
    }

    #[test]
    fn test_fit_is_idempotent() {
        for text in SAMPLES {
            let a = fit_text(text, 140, 140, &Typeface::Builtin, FitRange::default());
            let b = fit_text(text, 140, 140, &Typeface::Builtin, FitRange::default());
            assert_eq!(a.font.size(), b.font.size());
            assert_eq!(a.lines, b.lines);
            assert_eq!((a.block_width, a.block_height), (b.block_width, b.block_height));
        }
    }

    #[test]
    fn test_chosen_size_is_largest_fitting() {
        for text in SAMPLES {
            let fitted = fit_text(text, 140, 140, &Typeface::Builtin, FitRange::default());
            if fitted.fits && fitted.font.size() < 24 {
                let bigger = Typeface::Builtin.at_size(fitted.font.size() + 1);
                let (w, h) = measure_block(&bigger, &fitted.lines);
                assert!(w > 140 || h > 140, "size + 1 should overflow for {text:?}");
            }
        }
    }

    #[test]
    fn test_outline_fit_stays_in_range_and_is_largest() {
        let face = test_fonts::dejavu_sans();
        let range = FitRange::new(30, 8).unwrap();
        for text in SAMPLES {
            for cell in [20_u32, 60, 140, 400] {
                let fitted = fit_text(text, cell, cell, &face, range);
                let size = fitted.font.size();
                assert!(
                    (range.min()..=range.start()).contains(&size),
                    "size {size} outside range for {text:?} in {cell}px"
                );
                if fitted.fits {
                    assert!(fitted.block_width <= cell && fitted.block_height <= cell);
                    if size < range.start() {
                        let (w, h) = measure_block(&face.at_size(size + 1), &fitted.lines);
                        assert!(w > cell || h > cell, "size + 1 fits for {text:?} in {cell}px");
                    }
                } else {
                    assert_eq!(size, range.min());
                }
            }
        }
    }

    #[test]
    fn test_outline_fit_shrinks_as_cell_shrinks() {
        let face = test_fonts::dejavu_sans();
        let text = "Has travelled to another continent this year";
        let sizes: Vec<u32> = [400_u32, 200, 140, 100, 60]
            .iter()
            .map(|&cell| fit_text(text, cell, cell, &face, FitRange::default()).font.size())
            .collect();
        assert!(
            sizes.windows(2).all(|w| w[0] >= w[1]),
            "sizes should not grow as the cell shrinks: {sizes:?}"
        );
        assert_eq!(sizes[0], DEFAULT_START_SIZE);
        assert!(sizes[4] < DEFAULT_START_SIZE);
    }

    #[test]
    fn test_outline_block_width_is_widest_line() {
        let font = test_fonts::dejavu_sans().at_size(20);
        let lines = vec!["ii".to_string(), "WWWW".to_string(), "ab".to_string()];
        let (width, height) = measure_block(&font, &lines);
        assert_eq!(width, font.line_width("WWWW"));
        assert_eq!(height, 3 * font.line_height());
    }

    #[test]
    fn test_measure_block_uses_widest_line() {
        let font = Typeface::Builtin.at_size(8);
        let lines = vec!["ab".to_string(), "abcd".to_string()];
        assert_eq!(measure_block(&font, &lines), (23, 14));
    }
}
