//! Font faces, sized fonts and pixel measurement.
//!
//! A [`Typeface`] is size-independent (a loaded outline font or the built-in
//! bitmap face). A [`Font`] pairs a typeface with an integer size and answers
//! every measurement question the layout code asks:
//! - `measure(text)` is the ink box of a single line drawn at the origin
//! - `line_height()` is the ascent-to-descent extent of the reference glyph `A`
//!
//! Coordinates follow a top-left anchor: the origin is the top of the line box
//! and y grows downward.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ab_glyph::{point, Font as _, FontArc, GlyphId, PxScale, ScaleFont as _};
use tracing::{debug, warn};

use crate::errors::BingoError;
use crate::layout::builtin_font;

/// Reference glyph used for line height.
const REFERENCE_GLYPH: &str = "A";

// ────────────────────────────────────────────────────────────────────────────
// Font roles and fallback policy
// ────────────────────────────────────────────────────────────────────────────

/// Where a font is used on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// Banner text above the grid.
    Title,
    /// Question text inside the cells.
    Body,
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontRole::Title => f.write_str("title"),
            FontRole::Body => f.write_str("body"),
        }
    }
}

/// What to do when a role's font file cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFallback {
    /// Use the built-in bitmap face and keep going.
    Builtin,
    /// Fail with `BingoError::Font`.
    Error,
}

impl FromStr for FontFallback {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "builtin" => Ok(FontFallback::Builtin),
            "error" => Ok(FontFallback::Error),
            other => Err(BingoError::InvalidInput(format!(
                "unknown font fallback '{other}' (expected 'builtin' or 'error')"
            ))),
        }
    }
}

/// A font file plus the fallback declared for its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub path: PathBuf,
    pub fallback: FontFallback,
}

impl FontSpec {
    pub fn new(path: impl Into<PathBuf>, fallback: FontFallback) -> Self {
        FontSpec {
            path: path.into(),
            fallback,
        }
    }

    /// Loads the typeface for `role`, applying the declared fallback on failure.
    pub fn load(&self, role: FontRole) -> Result<Typeface, BingoError> {
        match Typeface::from_file(&self.path) {
            Ok(face) => {
                debug!(role = %role, path = %self.path.display(), "Loaded font");
                Ok(face)
            }
            Err(e) => match self.fallback {
                FontFallback::Builtin => {
                    warn!(role = %role, error = %e, "Font unavailable, using built-in face");
                    Ok(Typeface::Builtin)
                }
                FontFallback::Error => Err(e),
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Typeface and sized font
// ────────────────────────────────────────────────────────────────────────────

/// A size-independent font face.
#[derive(Clone)]
pub enum Typeface {
    /// A TrueType/OpenType outline font.
    Outline(FontArc),
    /// The built-in 5×7 bitmap face.
    Builtin,
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typeface::Outline(_) => f.write_str("Typeface::Outline"),
            Typeface::Builtin => f.write_str("Typeface::Builtin"),
        }
    }
}

impl Typeface {
    /// Reads and parses an outline font file.
    pub fn from_file(path: &Path) -> Result<Self, BingoError> {
        let bytes = std::fs::read(path).map_err(|e| BingoError::Font {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let font = FontArc::try_from_vec(bytes).map_err(|e| BingoError::Font {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Typeface::Outline(font))
    }

    /// Instantiates this face at `size`.
    pub fn at_size(&self, size: u32) -> Font {
        Font {
            face: self.clone(),
            size,
        }
    }
}

/// Ink box of a line of text, relative to the line origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }
}

/// A typeface at a concrete size.
#[derive(Debug, Clone)]
pub struct Font {
    face: Typeface,
    size: u32,
}

impl Font {
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Ink box of `text` laid out on a single line at the origin.
    pub fn measure(&self, text: &str) -> TextBox {
        match &self.face {
            Typeface::Outline(font) => measure_outline(font, self.size, text),
            Typeface::Builtin => {
                let scale = builtin_font::scale_for_size(self.size);
                let width = builtin_font::text_width(text, scale);
                if width == 0 {
                    return TextBox::default();
                }
                TextBox {
                    left: 0,
                    top: 0,
                    right: width as i32,
                    bottom: builtin_font::line_height(scale) as i32,
                }
            }
        }
    }

    /// Pixel width of a single line.
    pub fn line_width(&self, line: &str) -> u32 {
        self.measure(line).width()
    }

    /// Vertical extent of the reference glyph; used as the line pitch.
    pub fn line_height(&self) -> u32 {
        self.measure(REFERENCE_GLYPH).height()
    }

    /// Rasterizes `line` with its origin at (0, 0), calling `plot(x, y, coverage)`
    /// for every touched pixel. Coverage is in `0.0..=1.0`.
    pub fn draw_line(&self, line: &str, mut plot: impl FnMut(i32, i32, f32)) {
        match &self.face {
            Typeface::Outline(font) => {
                for_each_glyph(font, self.size, line, |outlined| {
                    let bounds = outlined.px_bounds();
                    let (ox, oy) = (bounds.min.x as i32, bounds.min.y as i32);
                    outlined.draw(|x, y, c| plot(ox + x as i32, oy + y as i32, c));
                });
            }
            Typeface::Builtin => {
                let scale = builtin_font::scale_for_size(self.size) as i32;
                let advance = builtin_font::GLYPH_ADVANCE as i32 * scale;
                for (i, ch) in line.chars().enumerate() {
                    let gx = i as i32 * advance;
                    for col in 0..builtin_font::GLYPH_COLUMNS {
                        for row in 0..builtin_font::GLYPH_ROWS {
                            if !builtin_font::is_set(ch, col, row) {
                                continue;
                            }
                            let (px, py) = (gx + col as i32 * scale, row as i32 * scale);
                            for dy in 0..scale {
                                for dx in 0..scale {
                                    plot(px + dx, py + dy, 1.0);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Outline helpers
// ────────────────────────────────────────────────────────────────────────────

/// Scale at which one em is `size` pixels.
///
/// `PxScale` measures ascent-to-descent height, so the em size is converted
/// through the font's own height/em ratio.
fn px_scale(font: &FontArc, size: u32) -> PxScale {
    let em = size as f32;
    match font.units_per_em() {
        Some(units_per_em) => PxScale::from(em * font.height_unscaled() / units_per_em),
        None => PxScale::from(em),
    }
}

/// Lays out `text` on one line (baseline at the ascent) and hands every
/// outlined glyph to `visit`. Returns the caret position after the last glyph.
fn for_each_glyph(
    font: &FontArc,
    size: u32,
    text: &str,
    mut visit: impl FnMut(ab_glyph::OutlinedGlyph),
) -> f32 {
    let scale = px_scale(font, size);
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0_f32;
    let mut previous: Option<GlyphId> = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        if let Some(outlined) = font.outline_glyph(glyph) {
            visit(outlined);
        }
        caret += scaled.h_advance(id);
        previous = Some(id);
    }
    caret
}

fn measure_outline(font: &FontArc, size: u32, text: &str) -> TextBox {
    let mut ink: Option<(f32, f32, f32, f32)> = None;
    let caret = for_each_glyph(font, size, text, |outlined| {
        let b = outlined.px_bounds();
        ink = Some(match ink {
            None => (b.min.x, b.min.y, b.max.x, b.max.y),
            Some((l, t, r, bt)) => (
                l.min(b.min.x),
                t.min(b.min.y),
                r.max(b.max.x),
                bt.max(b.max.y),
            ),
        });
    });

    match ink {
        None if caret <= 0.0 => TextBox::default(),
        // Whitespace only: advance width, no height.
        None => TextBox {
            left: 0,
            top: 0,
            right: caret.ceil() as i32,
            bottom: 0,
        },
        Some((l, t, r, b)) => TextBox {
            left: l.floor() as i32,
            top: t.floor() as i32,
            right: r.max(caret).ceil() as i32,
            bottom: b.ceil() as i32,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
