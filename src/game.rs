//! The turn controller: owns the board and the per-turn legality cache.
//!
//! This is the surface a front end talks to. It asks [`Game::is_legal`]
//! as often as it likes (the answer is cached for the turn), commits a move
//! with [`Game::commit_move`], and reads the board back for display.

use log::debug;

use crate::board::{Board, Cell, Color, Point};
use crate::capture::resolve_captures;
use crate::error::MoveError;
use crate::legality::{self, Legality, LegalityCache};

/// What a committed move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Where the stone was placed
    pub point: Point,
    /// Color of the placed stone
    pub color: Color,
    /// Enemy stones removed, in row-major order
    pub captured: Vec<Point>,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    cache: LegalityCache,
}

impl Game {
    /// An empty `rows` x `cols` game with Black to move.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_board(Board::new(rows, cols))
    }

    /// Continue from an arbitrary position; the board decides who moves.
    pub fn with_board(board: Board) -> Self {
        let cache = LegalityCache::new(board.rows(), board.cols());
        Self { board, cache }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// The cell at `(row, col)`; off-board points read as empty.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.board.get((row, col)).unwrap_or_default()
    }

    pub fn active_player(&self) -> Color {
        self.board.to_move()
    }

    /// The legality answers cached for the current turn.
    pub fn cache(&self) -> &LegalityCache {
        &self.cache
    }

    /// Whether the active player may play at `(row, col)`.
    pub fn is_legal(&mut self, row: usize, col: usize) -> bool {
        self.classify(row, col).is_legal()
    }

    /// Classify a candidate move for the active player.
    pub fn classify(&mut self, row: usize, col: usize) -> Legality {
        legality::classify(&mut self.board, &mut self.cache, (row, col))
    }

    /// Every legal point for the active player, in row-major order.
    pub fn legal_moves(&mut self) -> Vec<Point> {
        self.board
            .points()
            .filter(|&(row, col)| self.is_legal(row, col))
            .collect()
    }

    /// Place a stone for the active player, remove captured groups and pass
    /// the turn.
    ///
    /// Illegal moves are rejected with the game left untouched.
    pub fn commit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let point = (row, col);
        match self.classify(row, col) {
            Legality::Legal => {}
            Legality::OutOfBounds => return Err(MoveError::OutOfBounds(point)),
            Legality::Occupied => return Err(MoveError::Occupied(point)),
            Legality::Suicide => return Err(MoveError::Suicide(point)),
        }

        let color = self.active_player();
        self.board.set(point, Cell::from(color));
        let captured = resolve_captures(&mut self.board, point, color);
        debug!("{color} plays {point:?}, {} captured", captured.len());
        self.end_turn();

        Ok(MoveOutcome {
            point,
            color,
            captured,
        })
    }

    /// Hand the move to the other player and drop the legality cache.
    pub fn end_turn(&mut self) {
        let next = self.active_player().opponent();
        self.board.set_to_move(next);
        self.cache = LegalityCache::new(self.rows(), self.cols());
    }
}
