/// A grid coordinate, 0-indexed.
///
/// Signed so that neighbor offsets can step past the top/left edge before
/// the engine filters them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub column: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Cell under a pixel position, `None` when the position is left of or
    /// above the window
    pub fn from_pixel(x: f64, y: f64, tile_size: u32) -> Option<Self> {
        if x < 0.0 || y < 0.0 || tile_size == 0 {
            return None;
        }
        let tile = tile_size as i64;
        let column = x as i64 / tile;
        let row = y as i64 / tile;
        Some(Self::new(
            i32::try_from(column).ok()?,
            i32::try_from(row).ok()?,
        ))
    }

    /// Shift by a neighbor offset, `None` if either coordinate overflows
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(
            self.column.checked_add(dx)?,
            self.row.checked_add(dy)?,
        ))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((column, row): (i32, i32)) -> Self {
        Self::new(column, row)
    }
}
