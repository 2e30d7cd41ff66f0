//! Group liberty detection.
//!
//! A group is the maximal set of same-colored stones connected through
//! shared edges. A group with no empty neighbor has no liberties and is
//! captured.

use crate::board::{Board, Cell, Color, Grid, Point};

/// Check whether the group of `color` containing `origin` has no liberties.
///
/// The traversal walks outward from `origin`:
/// - off-board or already visited points contribute nothing,
/// - stones of the opposite color bound the group,
/// - an empty point is a liberty and ends the search with `false`,
/// - stones of `color` are marked in `visited` and their neighbors explored.
///
/// `origin` is expected to hold `color` (or be the point just played). When
/// the result is `true`, `visited` holds every stone of the group, which lets
/// callers collect the group or reuse the set for a later search.
pub fn has_no_liberties(
    board: &Board,
    origin: Point,
    color: Color,
    visited: &mut Grid<bool>,
) -> bool {
    let own = Cell::from(color);
    let mut stack = vec![origin];

    while let Some(pt) = stack.pop() {
        let Some(cell) = board.get(pt) else {
            continue;
        };
        if visited[pt] {
            continue;
        }
        if cell.is_empty() {
            return false;
        }
        if cell != own {
            continue;
        }
        visited[pt] = true;
        stack.extend(board.neighbors(pt));
    }
    true
}

/// Convenience wrapper using a fresh visited grid.
pub fn group_is_surrounded(board: &Board, origin: Point, color: Color) -> bool {
    let mut visited = board.visited_grid();
    has_no_liberties(board, origin, color, &mut visited)
}
