//! Capture resolution after a stone is placed.

use log::debug;

use crate::board::{Board, Cell, Color, Point};
use crate::liberty::has_no_liberties;

/// Remove every enemy group adjacent to `placed` that has no liberties.
///
/// `placed` must hold a stone of `color`. Each neighboring enemy group is
/// searched with a visited grid seeded from the stones already found dead,
/// so a group reached from two directions is walked only once. All dead
/// stones are removed together after the four directions are checked.
///
/// Returns the removed points in row-major order.
pub fn resolve_captures(board: &mut Board, placed: Point, color: Color) -> Vec<Point> {
    let enemy = color.opponent();
    let mut dead = board.visited_grid();

    for n in board.neighbors(placed) {
        if board.get(n) != Some(Cell::from(enemy)) {
            continue;
        }
        let mut visited = dead.clone();
        if has_no_liberties(board, n, enemy, &mut visited) {
            dead.union_with(&visited);
        }
    }

    let removed: Vec<Point> = board.points().filter(|&pt| dead[pt]).collect();
    for &pt in &removed {
        board.set(pt, Cell::Empty);
    }
    if !removed.is_empty() {
        debug!("{color} at {placed:?} captured {} {enemy} stone(s)", removed.len());
    }
    removed
}
