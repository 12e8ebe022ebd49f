// Card layout: grid planning, text wrapping, font measurement, fit-to-cell sizing.
// Everything here is pure; pixels are only touched in `render`.

pub mod builtin_font;
pub mod card;
pub mod fit;
pub mod font_metrics;
pub mod grid;
pub mod wrap;

// Re-export the public API consumed by render and generation.
pub use card::{center_offset, CardDimensions, CardLayout, Cell};
pub use fit::{fit_text, FitRange};
pub use font_metrics::{Font, FontFallback, FontRole, FontSpec, Typeface};
pub use grid::{best_rectangle_shape, GridShape};
