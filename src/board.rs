//! Board state: a fixed-size grid of cells plus the player to move.
//!
//! Points are `(row, col)` pairs with row 0 at the top of the board, the
//! same orientation the board is printed in.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::constants::{DELTA, EMPTY, STONE_BLACK, STONE_WHITE};
use crate::error::DiagramError;

/// A point on the board as `(row, col)`.
pub type Point = (usize, usize);

/// Stone color, also used for the player to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Occupancy of a single board point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Row-major rows x cols storage shared by the board, visited sets and
/// the legality cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, (row, col): Point) -> bool {
        row < self.rows && col < self.cols
    }

    fn idx(&self, (row, col): Point) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, pt: Point) -> Option<&T> {
        if !self.in_bounds(pt) {
            return None;
        }
        self.cells.get(self.idx(pt))
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let cols = self.cols;
        (0..self.rows * self.cols).map(move |i| (i / cols, i % cols))
    }

    /// The in-bounds orthogonal neighbors of `pt` (North, South, West, East).
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + use<T> {
        let (rows, cols) = (self.rows, self.cols);
        DELTA.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < rows && c < cols).then_some((r, c))
        })
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, pt: Point) -> &T {
        let i = self.idx(pt);
        &self.cells[i]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, pt: Point) -> &mut T {
        let i = self.idx(pt);
        &mut self.cells[i]
    }
}

impl Grid<bool> {
    /// Set every point that is set in `other` (set union).
    pub fn union_with(&mut self, other: &Grid<bool>) {
        for (a, &b) in self.cells.iter_mut().zip(&other.cells) {
            *a |= b;
        }
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }
}

/// The board: cell occupancy and the player to move.
///
/// Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Grid<Cell>,
    to_move: Color,
}

impl Board {
    /// An empty `rows` x `cols` board with Black to move.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Grid::new(rows, cols),
            to_move: Color::Black,
        }
    }

    /// Build a board from a text diagram, one string per row, top row first.
    ///
    /// `X` is Black, `O` is White and `.` is empty; spaces are ignored.
    pub fn from_diagram(diagram: &[&str], to_move: Color) -> Result<Self, DiagramError> {
        let lines: Vec<Vec<char>> = diagram
            .iter()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(DiagramError::Empty);
        }

        let mut board = Board::new(rows, cols);
        board.to_move = to_move;
        for (row, line) in lines.iter().enumerate() {
            if line.len() != cols {
                return Err(DiagramError::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, &ch) in line.iter().enumerate() {
                board.cells[(row, col)] = match ch {
                    STONE_BLACK => Cell::Black,
                    STONE_WHITE => Cell::White,
                    EMPTY => Cell::Empty,
                    other => return Err(DiagramError::UnknownSymbol { row, col, symbol: other }),
                };
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    pub fn in_bounds(&self, pt: Point) -> bool {
        self.cells.in_bounds(pt)
    }

    /// The cell at `pt`, or `None` when `pt` is off the board.
    pub fn get(&self, pt: Point) -> Option<Cell> {
        self.cells.get(pt).copied()
    }

    /// Overwrite the cell at `pt`. Off-board points are ignored.
    pub fn set(&mut self, pt: Point, cell: Cell) {
        if self.in_bounds(pt) {
            self.cells[pt] = cell;
        }
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub(crate) fn set_to_move(&mut self, color: Color) {
        self.to_move = color;
    }

    pub fn neighbors(&self, pt: Point) -> impl Iterator<Item = Point> + use<> {
        self.cells.neighbors(pt)
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        self.cells.points()
    }

    /// A visited grid with this board's dimensions, all unset.
    pub fn visited_grid(&self) -> Grid<bool> {
        Grid::new(self.rows(), self.cols())
    }

    /// Number of stones of `color` on the board.
    pub fn stone_count(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.points().filter(|&pt| self.cells[pt] == cell).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let ch = match self.cells[(row, col)] {
                    Cell::Black => STONE_BLACK,
                    Cell::White => STONE_WHITE,
                    Cell::Empty => EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
