//! Grid shape planning: picks the most square (rows, cols) tiling for a card.
//!
//! Only exact factorizations are considered, so `rows * cols == n` always holds.
//! A prime `n` degenerates to a single row `(1, n)`.

use crate::errors::BingoError;

/// A (rows, cols) tiling with `rows <= cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    /// Number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }
}

/// Finds the factor pair of `n` with the smallest `|rows - cols|`.
///
/// Candidates are `(i, n / i)` for every divisor `i` in `1..=√n`, scanned in
/// ascending order. Ties keep the first candidate found (smallest `rows`).
pub fn best_rectangle_shape(n: i64) -> Result<GridShape, BingoError> {
    if n <= 0 {
        return Err(BingoError::InvalidInput(format!(
            "item count must be positive, got {n}"
        )));
    }

    (1..)
        .take_while(|i: &i64| i.saturating_mul(*i) <= n)
        .filter(|i| n % i == 0)
        .map(|i| (i, n / i))
        .min_by_key(|(rows, cols)| (cols - rows).abs())
        .map(|(rows, cols)| GridShape {
            rows: rows as usize,
            cols: cols as usize,
        })
        .ok_or_else(|| BingoError::InvalidInput(format!("no factorization found for {n}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
