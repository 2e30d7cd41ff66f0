//! Goban: the rules of Go on a fixed-size board.
//!
//! This crate decides whether a stone may be placed at a point, and once a
//! move is committed, which enemy stones are captured. Drawing the board and
//! reading input are left to a front end; a GTP server is included as one.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and rendering symbols
//! - [`board`] - Board state (cells and the player to move)
//! - [`liberty`] - Group liberty detection
//! - [`legality`] - Move legality with a per-turn cache
//! - [`capture`] - Removal of captured groups
//! - [`game`] - Turn controller tying the pieces together
//! - [`gtp`] - Go Text Protocol front end
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use goban::board::{Cell, Color};
//! use goban::game::Game;
//!
//! let mut game = Game::new(9, 9);
//! assert!(game.is_legal(4, 4));
//!
//! let outcome = game.commit_move(4, 4).unwrap();
//! assert!(outcome.captured.is_empty());
//! assert_eq!(game.cell_at(4, 4), Cell::Black);
//! assert_eq!(game.active_player(), Color::White);
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod error;
pub mod game;
pub mod gtp;
pub mod legality;
pub mod liberty;
