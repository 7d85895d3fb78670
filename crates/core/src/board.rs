//! Board module - manages the game grid
//!
//! The grid is `width` columns by `height` visible rows, plus `BUFFER_ROWS`
//! hidden rows above the visible area where pieces spawn. Storage is a single
//! flat vector allocated once per board, row-major.
//!
//! Coordinates: (x, y) with x in `0..width` (left to right) and y in
//! `-BUFFER_ROWS..height` (top to bottom). Anything above the buffer is open
//! space, anything beside the walls or below the floor is solid. Locking
//! discards minos above the visible grid, so in play the buffer stays empty.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BUFFER_ROWS};

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Stored rows first cover the buffer, then the visible grid
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given visible dimensions
    pub fn new(width: u8, height: u8) -> Self {
        let rows = height as usize + BUFFER_ROWS as usize;
        Self {
            width,
            height,
            cells: vec![None; width as usize * rows],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Visible rows (the buffer is not counted)
    pub fn height(&self) -> u8 {
        self.height
    }

    fn stored_rows(&self) -> usize {
        self.height as usize + BUFFER_ROWS as usize
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        let row = y as i16 + BUFFER_ROWS as i16;
        if x < 0 || x as i16 >= self.width as i16 || row < 0 || row as usize >= self.stored_rows() {
            return None;
        }
        Some(row as usize * self.width as usize + x as usize)
    }

    /// Get the stored cell at (x, y); `None` when the position is not stored
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the stored cell at (x, y); returns false when the position is not stored
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a mino may occupy (x, y).
    ///
    /// The side walls and the floor are solid; the space above the buffer is open.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x as i16 >= self.width as i16 || y as i16 >= self.height as i16 {
            return false;
        }
        if (y as i16) < -(BUFFER_ROWS as i16) {
            return true;
        }
        matches!(self.get(x, y), Some(None))
    }

    /// Whether (x, y) holds a locked mino
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether (x, y) lies inside the visible grid
    pub fn is_visible(&self, x: i8, y: i8) -> bool {
        x >= 0 && (x as i16) < self.width as i16 && y >= 0 && (y as i16) < self.height as i16
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        let Some(start) = self.index(0, y) else {
            return false;
        };
        self.cells[start..start + self.width as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Clear all full rows and return their y coordinates (sorted bottom to top)
    ///
    /// Rows above a cleared row drop down by the number of cleared rows below
    /// them, including rows that were still in the buffer. Compaction is a
    /// single bottom-up pass with a write cursor.
    ///
    /// At most four rows are cleared per call, the most a single piece can
    /// complete. Boards filled through [`Board::set`] with more full rows
    /// trip a debug assertion; in release builds the extra rows stay.
    pub fn clear_full_rows(&mut self) -> ArrayVec<i8, 4> {
        let mut cleared = ArrayVec::new();
        let width = self.width as usize;
        let rows = self.stored_rows();
        let mut write_row = rows;

        for read_row in (0..rows).rev() {
            let start = read_row * width;
            let full = self.cells[start..start + width].iter().all(|c| c.is_some());
            debug_assert!(!(full && cleared.is_full()), "more than four full rows");
            if full && !cleared.is_full() {
                cleared.push(read_row as i8 - BUFFER_ROWS as i8);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    self.cells
                        .copy_within(start..start + width, write_row * width);
                }
            }
        }

        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }

        cleared
    }

    /// Lock a piece onto the board at given origin with given shape
    ///
    /// Minos above the visible grid are discarded, so play never leaves
    /// anything in the buffer rows. Returns false (and writes nothing) if any
    /// mino is not free.
    pub fn lock_piece(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) -> bool {
        if !shape.iter().all(|&(dx, dy)| self.is_free(x + dx, y + dy)) {
            return false;
        }

        for &(dx, dy) in shape {
            if y + dy >= 0 {
                self.set(x + dx, y + dy, Some(kind));
            }
        }
        true
    }

    /// Number of locked minos inside the visible grid
    pub fn visible_filled(&self) -> usize {
        let skip = BUFFER_ROWS as usize * self.width as usize;
        self.cells[skip..].iter().filter(|c| c.is_some()).count()
    }

    /// Encode the visible rows as cell codes (`0` empty, `1..=7` kind) into `out`.
    ///
    /// `out` is resized to `width * height`; its allocation is reused.
    pub fn write_visible_u8(&self, out: &mut Vec<u8>) {
        let skip = BUFFER_ROWS as usize * self.width as usize;
        out.clear();
        out.extend(
            self.cells[skip..]
                .iter()
                .map(|c| c.map_or(0, |kind| kind.code())),
        );
    }

    /// All stored cells, buffer rows first
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows describing the bottom of the visible grid.
    ///
    /// Each row is `width` characters; `.` is empty and a piece letter is a
    /// locked mino. The last row given becomes the floor row.
    #[cfg(test)]
    pub fn from_rows(width: u8, height: u8, rows: &[&str]) -> Self {
        let mut board = Self::new(width, height);
        let top = height as usize - rows.len();
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width as usize);
            for (x, ch) in row.chars().enumerate() {
                let cell = PieceKind::from_str(&ch.to_string());
                board.set(x as i8, (top + i) as i8, cell);
            }
        }
        board
    }
}
