//! Card generation: orchestrates one run of the tool.
//!
//! Flow: load questions → load fonts → for each card: shuffle → render → save.
//!
//! Every card gets its own shuffle from the same random source, so cards from
//! one pool are usually distinct. Repeats are possible and not deduplicated.

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::BingoError;
use crate::layout::{FontRole, GridShape};
use crate::questions::{load_questions, shuffled};
use crate::render::{save_png, CardRenderer};

/// Base name used when none is given on the command line.
pub const DEFAULT_CARD_NAME: &str = "card_bingo";

/// One card written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCard {
    pub index: usize,
    pub path: PathBuf,
    pub shape: GridShape,
}

/// File name for the card at `index`.
///
/// Index 0 has no suffix; every other index is suffixed `_<index>`, whatever
/// the total count. Downstream tooling relies on this exact pattern.
pub fn card_file_name(base: &str, index: usize) -> String {
    if index == 0 {
        format!("{base}.png")
    } else {
        format!("{base}_{index}.png")
    }
}

/// Renders `count` cards from `questions` into `output_dir`.
///
/// The directory is created if missing; an existing directory is fine.
pub fn generate_cards<R: Rng + ?Sized>(
    questions: &[String],
    renderer: &CardRenderer,
    output_dir: &Path,
    name: &str,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GeneratedCard>, BingoError> {
    if count == 0 {
        warn!("Card count is 0, nothing to generate");
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(output_dir).map_err(|e| BingoError::io(output_dir, e))?;

    let mut cards = Vec::with_capacity(count);
    for index in 0..count {
        let order = shuffled(questions, rng);
        let (layout, image) = renderer.render(&order)?;

        let path = output_dir.join(card_file_name(name, index));
        save_png(&image, &path)?;
        debug!(
            index,
            rows = layout.shape.rows,
            cols = layout.shape.cols,
            path = %path.display(),
            "Card written"
        );

        cards.push(GeneratedCard {
            index,
            path,
            shape: layout.shape,
        });
    }

    Ok(cards)
}

/// Runs a full generation from configuration: loads the question pool and
/// both fonts, then writes `config.count` cards named after `config.name`.
pub fn bingo<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
) -> Result<Vec<GeneratedCard>, BingoError> {
    let questions = load_questions(&config.questions_path)?;

    let title_face = config.title_font.load(FontRole::Title)?;
    let body_face = config.body_font.load(FontRole::Body)?;

    let mut renderer = CardRenderer::new(config.title.clone(), title_face, body_face);
    renderer.dims = config.dims;
    renderer.body_range = config.body_range;

    generate_cards(
        &questions,
        &renderer,
        &config.output_dir,
        &config.name,
        config.count,
        rng,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
