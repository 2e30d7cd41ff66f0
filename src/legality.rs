//! Move legality with a per-turn cache.
//!
//! Legality is queried far more often than moves are made (a front end may
//! ask about the hovered point every frame), so answers are memoized per
//! point until the turn changes.

use log::trace;

use crate::board::{Board, Cell, Grid, Point};
use crate::liberty::group_is_surrounded;

/// Classification of a candidate move for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legality {
    Legal,
    OutOfBounds,
    Occupied,
    /// The stone would have no liberties and captures nothing.
    Suicide,
}

impl Legality {
    pub fn is_legal(self) -> bool {
        self == Legality::Legal
    }
}

/// Memoized legality answers for the current turn.
///
/// `legal[pt]` is only meaningful when `evaluated[pt]` is set. The cache
/// assumes the board does not change while it is alive; replace it with a
/// fresh one whenever the turn passes.
#[derive(Clone, Debug)]
pub struct LegalityCache {
    evaluated: Grid<bool>,
    legal: Grid<bool>,
}

impl LegalityCache {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            evaluated: Grid::new(rows, cols),
            legal: Grid::new(rows, cols),
        }
    }

    /// The cached answer for `pt`, if it has been evaluated this turn.
    pub fn lookup(&self, pt: Point) -> Option<bool> {
        match self.evaluated.get(pt) {
            Some(true) => Some(self.legal[pt]),
            _ => None,
        }
    }

    fn store(&mut self, pt: Point, legal: bool) {
        self.evaluated[pt] = true;
        self.legal[pt] = legal;
    }

    /// Number of points evaluated this turn.
    pub fn evaluated_count(&self) -> usize {
        self.evaluated.count()
    }
}

/// Check whether the player to move may play at `pt`.
pub fn is_legal(board: &mut Board, cache: &mut LegalityCache, pt: Point) -> bool {
    classify(board, cache, pt).is_legal()
}

/// Classify a candidate move for the player to move.
///
/// Off-board and occupied points are rejected without touching the cache.
/// Otherwise the cached answer is used if present; if not, the move is
/// evaluated by trial placement and the answer stored.
///
/// The board is restored before returning.
pub fn classify(board: &mut Board, cache: &mut LegalityCache, pt: Point) -> Legality {
    match board.get(pt) {
        None => return Legality::OutOfBounds,
        Some(cell) if !cell.is_empty() => return Legality::Occupied,
        Some(_) => {}
    }

    let legal = match cache.lookup(pt) {
        Some(legal) => {
            trace!("legality cache hit at {pt:?}: {legal}");
            legal
        }
        None => {
            let legal = trial_placement(board, pt);
            cache.store(pt, legal);
            legal
        }
    };

    if legal { Legality::Legal } else { Legality::Suicide }
}

/// Place the mover's stone at the empty point `pt`, decide legality, and
/// clear the point again.
///
/// A stone whose group has liberties is legal. A surrounded stone is legal
/// only if some adjacent enemy group is itself surrounded with the stone in
/// place. Each enemy group is checked on its own, nothing is removed, and
/// the placed group is not re-checked afterwards.
fn trial_placement(board: &mut Board, pt: Point) -> bool {
    board.set(pt, Cell::from(board.to_move()));
    let legal = placed_stone_is_legal(board, pt);
    board.set(pt, Cell::Empty);
    legal
}

fn placed_stone_is_legal(board: &Board, pt: Point) -> bool {
    let color = board.to_move();
    if !group_is_surrounded(board, pt, color) {
        return true;
    }
    let enemy = color.opponent();
    board
        .neighbors(pt)
        .any(|n| board.get(n) == Some(Cell::from(enemy)) && group_is_surrounded(board, n, enemy))
}
