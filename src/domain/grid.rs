use super::{Cell, EngineError};

/// Smallest dimension that still leaves an interior inside the dead border.
pub const MIN_SIZE: usize = 3;

/// Grid manages the square cellular automaton field.
///
/// The outermost ring of cells is a permanent dead border: evolution only
/// visits interior cells, so neighbor counting never needs wraparound or
/// bounds checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new `size`×`size` grid with all cells dead
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size < MIN_SIZE {
            return Err(EngineError::InvalidSize { size, min: MIN_SIZE });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Dead; size * size],
        })
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert (row, col) to the row-major index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position; positions outside the grid are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.size && col < self.size {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// True for cells on row/column 0 or N-1
    pub const fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == self.size - 1 || col == self.size - 1
    }

    /// Check the dead-border invariant
    pub fn border_is_dead(&self) -> bool {
        self.iter_cells()
            .filter(|&(row, col, _)| self.is_border(row, col))
            .all(|(_, _, cell)| !cell.is_alive())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors of an interior cell.
    ///
    /// Callers must not pass a border cell; the border is never evaluated.
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        debug_assert!(!self.is_border(row, col));

        (row - 1..=row + 1)
            .flat_map(|r| (col - 1..=col + 1).map(move |c| (r, c)))
            .filter(|&(r, c)| r != row || c != col)
            .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
            .count() as u8
    }

    /// Pure evolution - returns the next generation as a new grid
    pub fn evolve(&self) -> Self {
        let mut next = self.clone();
        self.evolve_into(&mut next);
        next
    }

    /// Write the next generation into `next`, reusing its allocation.
    ///
    /// Every read comes from `self`, so updates are simultaneous. Border
    /// cells are copied through unchanged.
    pub fn evolve_into(&self, next: &mut Grid) {
        next.size = self.size;
        next.cells.clone_from(&self.cells);

        for row in 1..self.size - 1 {
            for col in 1..self.size - 1 {
                let idx = self.index(row, col);
                next.cells[idx] = self.cells[idx].evolve(self.count_live_neighbors(row, col));
            }
        }
    }

    /// Iterate over rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows()
            .enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().map(move |(col, &cell)| (row, col, cell)))
    }

    /// Row-major intensity bytes (255 alive, 0 dead) for image-style sinks
    pub fn to_intensity(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.intensity()).collect()
    }
}
