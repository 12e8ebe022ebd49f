//! Card geometry: canvas size, title band, grid separators and cell origins.
//!
//! Pure arithmetic over a [`GridShape`] and [`CardDimensions`]; the renderer
//! only paints what this module computes.

use crate::layout::grid::GridShape;

/// Fixed pixel dimensions of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDimensions {
    /// Side of each square cell.
    pub cell_size: u32,
    /// Height of the band reserved for the title above the grid.
    pub title_height: u32,
    /// Margin around the whole card.
    pub padding: u32,
    /// Stroke width of the grid separators.
    pub line_width: u32,
    /// Inset subtracted from the cell on each axis for the text area.
    pub text_inset: u32,
}

impl Default for CardDimensions {
    fn default() -> Self {
        CardDimensions {
            cell_size: 150,
            title_height: 100,
            padding: 20,
            line_width: 2,
            text_inset: 10,
        }
    }
}

/// One square cell of the grid and the text area inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub text_area: u32,
}

/// Resolved layout of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub shape: GridShape,
    pub dims: CardDimensions,
    pub width: u32,
    pub height: u32,
}

impl CardLayout {
    pub fn new(shape: GridShape, dims: CardDimensions) -> Self {
        let width = dims.cell_size * shape.cols as u32 + 2 * dims.padding;
        let height = dims.cell_size * shape.rows as u32 + dims.title_height + 2 * dims.padding;
        CardLayout {
            shape,
            dims,
            width,
            height,
        }
    }

    /// Top edge of the grid.
    pub fn grid_top(&self) -> u32 {
        self.dims.title_height + self.dims.padding
    }

    /// Bottom edge of the grid.
    pub fn grid_bottom(&self) -> u32 {
        self.height - self.dims.padding
    }

    /// Left edge of the grid.
    pub fn grid_left(&self) -> u32 {
        self.dims.padding
    }

    /// Right edge of the grid.
    pub fn grid_right(&self) -> u32 {
        self.width - self.dims.padding
    }

    /// x positions of the `cols + 1` vertical separators.
    pub fn vertical_lines(&self) -> Vec<u32> {
        (0..=self.shape.cols as u32)
            .map(|x| x * self.dims.cell_size + self.dims.padding)
            .collect()
    }

    /// y positions of the `rows + 1` horizontal separators.
    pub fn horizontal_lines(&self) -> Vec<u32> {
        (0..=self.shape.rows as u32)
            .map(|y| y * self.dims.cell_size + self.grid_top())
            .collect()
    }

    /// Top-left corner of every cell in row-major order.
    pub fn cell_origins(&self) -> Vec<(u32, u32)> {
        (0..self.shape.rows as u32)
            .flat_map(|row| {
                (0..self.shape.cols as u32).map(move |col| {
                    (
                        col * self.dims.cell_size + self.dims.padding,
                        row * self.dims.cell_size + self.grid_top(),
                    )
                })
            })
            .collect()
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> Vec<Cell> {
        let text_area = self.text_area();
        self.cell_origins()
            .into_iter()
            .map(|(x, y)| Cell {
                x,
                y,
                size: self.dims.cell_size,
                text_area,
            })
            .collect()
    }

    /// Side of the text area inside a cell.
    pub fn text_area(&self) -> u32 {
        self.dims.cell_size.saturating_sub(self.dims.text_inset)
    }

    /// Top-left of a title whose ink box is `title_width × title_height`.
    pub fn title_origin(&self, title_width: u32, title_height: u32) -> (i32, i32) {
        let x = (self.width as i32 - title_width as i32).div_euclid(2);
        let y = self.dims.padding as i32
            + (self.dims.title_height as i32 - title_height as i32).div_euclid(2);
        (x, y)
    }
}

/// Offset that centers `content` within `container` (floor division, may be negative).
pub fn center_offset(container: u32, content: u32) -> i32 {
    (container as i32 - content as i32).div_euclid(2)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
