// Raster output: canvas painting and PNG encoding.

pub mod card;
pub mod text;

pub use card::{save_png, CardRenderer};
