//! Go Text Protocol (GTP) front end.
//!
//! GTP is a line-based protocol Go GUIs use to talk to engines. This module
//! exposes the rule engine over GTP version 2 so a GUI (Sabaki, GoGui, ...)
//! can act as the board display and the input device.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start a new empty game on a size x size board
//! - `clear_board` - Start a new empty game on the current board size
//! - `play <color> <vertex>` - Play a move for the side to move
//! - `genmove <color>` - Play a random legal move for the side to move
//! - `is_legal <color> <vertex>` - `1` if the move is legal, `0` otherwise
//! - `showboard` - Print the board
//!
//! Passing is not part of the rules implemented here, so `play <color> pass`
//! is rejected.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::board::{Board, Cell, Color, Point};
use crate::constants::{COLUMN_LETTERS, EMPTY, MAX_SIZE, MIN_SIZE, N, STONE_BLACK, STONE_WHITE};
use crate::error::{SizeError, VertexError};
use crate::game::Game;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "is_legal",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// Parse a GTP vertex (e.g. `D4`) on a `rows` x `cols` board.
///
/// Columns are letters starting at `A` with `I` skipped; rows are numbered
/// from 1 at the bottom edge.
pub fn parse_vertex(s: &str, rows: usize, cols: usize) -> Result<Point, VertexError> {
    let malformed = || VertexError::Malformed(s.to_string());

    let mut chars = s.chars();
    let letter = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
    let col = COLUMN_LETTERS
        .iter()
        .position(|&c| char::from(c) == letter)
        .ok_or_else(malformed)?;
    let digits = chars.as_str();
    let well_formed = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !(digits.len() > 1 && digits.starts_with('0'));
    if !well_formed {
        return Err(malformed());
    }
    let number: usize = digits.parse().map_err(|_| malformed())?;

    if col >= cols || number == 0 || number > rows {
        return Err(VertexError::OffBoard(s.to_string()));
    }
    Ok((rows - number, col))
}

/// Format a point as a GTP vertex on a board with `rows` rows.
pub fn vertex_to_string((row, col): Point, rows: usize) -> Result<String, VertexError> {
    let letter = COLUMN_LETTERS
        .get(col)
        .ok_or(VertexError::NoColumnLetter(col))?;
    Ok(format!("{}{}", char::from(*letter), rows - row))
}

/// Check that a size x size board can be addressed with GTP vertices.
pub fn check_size(size: usize) -> Result<usize, SizeError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(SizeError(size))
    }
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

/// Render the board with GTP column letters and row numbers.
pub fn render_board(board: &Board) -> String {
    let rows = board.rows();
    let letters: String = (0..board.cols())
        .map(|col| {
            let letter = COLUMN_LETTERS.get(col).map_or('?', |&c| char::from(c));
            format!(" {letter}")
        })
        .collect();

    let mut out = format!("  {letters}\n");
    for row in 0..rows {
        out.push_str(&format!("{:>2} ", rows - row));
        for col in 0..board.cols() {
            let ch = match board.get((row, col)) {
                Some(Cell::Black) => STONE_BLACK,
                Some(Cell::White) => STONE_WHITE,
                _ => EMPTY,
            };
            out.push(ch);
            out.push(' ');
        }
        out.push_str(&format!("{}\n", rows - row));
    }
    out.push_str(&format!("  {letters}"));
    out
}

/// GTP engine state.
pub struct GtpEngine {
    /// Current game
    game: Game,
    /// Random source for `genmove`
    rng: fastrand::Rng,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create a new GTP engine on the default board size.
    pub fn new() -> Self {
        Self::build(N, fastrand::Rng::new())
    }

    /// Create a new GTP engine on a size x size board.
    pub fn with_size(size: usize) -> Result<Self, SizeError> {
        Ok(Self::build(check_size(size)?, fastrand::Rng::new()))
    }

    /// Create an engine whose `genmove` choices are reproducible.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, SizeError> {
        Ok(Self::build(check_size(size)?, fastrand::Rng::with_seed(seed)))
    }

    fn build(size: usize, rng: fastrand::Rng) -> Self {
        Self {
            game: Game::new(size, size),
            rng,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the GTP command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the GTP command loop on arbitrary streams until `quit` or EOF.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                // A bare id still gets an answer
                Self::respond(&mut output, id, false, "missing command")?;
                continue;
            };
            let command = command.to_lowercase();

            debug!("gtp < {command_line}");
            let (success, message) = self.execute(&command, args);
            if !success {
                warn!("gtp command {command:?} failed: {message}");
            }
            Self::respond(&mut output, id, success, &message)?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    fn respond<W: Write>(
        output: &mut W,
        id: Option<u32>,
        success: bool,
        message: &str,
    ) -> io::Result<()> {
        let prefix = if success { '=' } else { '?' };
        let id_str = id.map(|i| i.to_string()).unwrap_or_default();
        write!(output, "{prefix}{id_str} {message}\n\n")?;
        output.flush()
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Check that `arg` names the side to move.
    fn expect_to_move(&self, arg: &str) -> Result<Color, String> {
        let color = parse_color(arg).ok_or_else(|| format!("invalid color: {arg}"))?;
        let to_move = self.game.active_player();
        if color != to_move {
            return Err(format!("it is {to_move}'s turn, not {color}'s"));
        }
        Ok(color)
    }

    fn vertex(&self, arg: &str) -> Result<Point, String> {
        if arg.eq_ignore_ascii_case("pass") {
            return Err("pass is not supported".to_string());
        }
        parse_vertex(arg, self.game.rows(), self.game.cols()).map_err(|e| e.to_string())
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match self.dispatch(command, args) {
            Ok(response) => (true, response),
            Err(message) => (false, message),
        }
    }

    fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<String, String> {
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("2".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let cmd = args.first().ok_or("missing argument")?;
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                Ok(known.to_string())
            }

            "quit" => Ok(String::new()),

            "boardsize" => {
                let arg = args.first().ok_or("missing argument")?;
                let size: usize = arg.parse().map_err(|_| "invalid size".to_string())?;
                check_size(size).map_err(|e| e.to_string())?;
                self.game = Game::new(size, size);
                Ok(String::new())
            }

            "clear_board" => {
                self.game = Game::new(self.game.rows(), self.game.cols());
                Ok(String::new())
            }

            "play" => {
                let [color, vertex, ..] = args else {
                    return Err("missing arguments".to_string());
                };
                self.expect_to_move(color)?;
                let (row, col) = self.vertex(vertex)?;
                self.game
                    .commit_move(row, col)
                    .map(|_| String::new())
                    .map_err(|e| e.to_string())
            }

            "genmove" => {
                let color = args.first().ok_or("missing argument")?;
                self.expect_to_move(color)?;

                let moves = self.game.legal_moves();
                if moves.is_empty() {
                    return Ok("resign".to_string());
                }
                let (row, col) = moves[self.rng.usize(..moves.len())];
                self.game.commit_move(row, col).map_err(|e| e.to_string())?;
                vertex_to_string((row, col), self.game.rows()).map_err(|e| e.to_string())
            }

            "is_legal" => {
                let [color, vertex, ..] = args else {
                    return Err("missing arguments".to_string());
                };
                self.expect_to_move(color)?;
                let (row, col) = self.vertex(vertex)?;
                let legal = self.game.is_legal(row, col);
                Ok(if legal { "1" } else { "0" }.to_string())
            }

            "showboard" => Ok(format!("\n{}", render_board(self.game.board()))),

            _ => Err(format!("unknown command: {command}")),
        }
    }
}
