//! Board dimensions and protocol constants.
//!
//! The default board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! The rule engine itself accepts any size at construction; the features
//! only pick the size the CLI and the GTP server start with.
//!
//! ```sh
//! cargo build                                               # 9x9 (default)
//! cargo build --no-default-features --features board13x13   # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Smallest board the text front end accepts.
pub const MIN_SIZE: usize = 2;

/// Largest board the text front end accepts (25 column letters, `I` skipped).
pub const MAX_SIZE: usize = 25;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Row/column offsets to the orthogonal neighbors.
/// Order: North, South, West, East
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Text Rendering
// =============================================================================

/// Column letters used by GTP vertices (`I` is skipped).
pub const COLUMN_LETTERS: &[u8; MAX_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';
