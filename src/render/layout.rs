//! Screen-coordinate to cell mapping.

use crate::games::reversi::{EDGE, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Where the board sits on screen, in pixels.
///
/// Clicks outside the board map to `None` and never reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenLayout {
    /// Left edge of the board.
    offset_x: i32,
    /// Top edge of the board.
    offset_y: i32,
    /// Board width.
    width: i32,
    /// Board height.
    height: i32,
}

impl ScreenLayout {
    /// Creates a layout with the board's top-left corner at `(offset_x, offset_y)`.
    pub fn new(offset_x: i32, offset_y: i32, width: i32, height: i32) -> Self {
        Self {
            offset_x,
            offset_y,
            width,
            height,
        }
    }

    /// Maps a pixel to the cell under it.
    #[instrument(level = "trace", skip(self))]
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Position> {
        let dx = x - self.offset_x;
        let dy = y - self.offset_y;
        if dx < 0 || dy < 0 || dx >= self.width || dy >= self.height {
            trace!("Click outside board");
            return None;
        }
        let column = dx * i32::from(EDGE) / self.width;
        let row = dy * i32::from(EDGE) / self.height;
        Position::checked(i8::try_from(column).ok()?, i8::try_from(row).ok()?).ok()
    }

    /// Top-left pixel of `position`'s square, or `None` off the board.
    pub fn cell_origin(&self, position: Position) -> Option<(i32, i32)> {
        if !position.is_on_board() {
            return None;
        }
        Some((
            self.offset_x + i32::from(position.column) * self.width / i32::from(EDGE),
            self.offset_y + i32::from(position.row) * self.height / i32::from(EDGE),
        ))
    }
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::new(40, 80, 400, 400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_squares_are_fifty_pixels() {
        let layout = ScreenLayout::default();
        assert_eq!(layout.cell_at(40, 80), Some(Position::new(0, 0)));
        assert_eq!(layout.cell_at(89, 129), Some(Position::new(0, 0)));
        assert_eq!(layout.cell_at(90, 80), Some(Position::new(1, 0)));
        assert_eq!(layout.cell_at(439, 479), Some(Position::new(7, 7)));
        assert_eq!(layout.cell_at(165, 310), Some(Position::new(2, 4)));
    }

    #[test]
    fn test_outside_board_is_none() {
        let layout = ScreenLayout::default();
        assert_eq!(layout.cell_at(39, 100), None);
        assert_eq!(layout.cell_at(100, 79), None);
        assert_eq!(layout.cell_at(440, 100), None);
        assert_eq!(layout.cell_at(100, 480), None);
        assert_eq!(layout.cell_at(-5, -5), None);
    }

    #[test]
    fn test_cell_origin_inverts_cell_at() {
        let layout = ScreenLayout::new(0, 0, 800, 400);
        for position in Position::all() {
            let (x, y) = layout.cell_origin(position).expect("on board");
            assert_eq!(layout.cell_at(x, y), Some(position));
        }
        assert_eq!(layout.cell_origin(Position::new(8, 0)), None);
    }
}
