pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 7;

/// Highest pip value on a double-six set.
pub const MAX_PIP: u8 = 6;
/// Number of tiles in a double-six set: (MAX_PIP + 1)(MAX_PIP + 2) / 2.
pub const TILE_COUNT: usize = 28;
/// Sum of every pip in a double-six set.
pub const TOTAL_PIPS: u32 = 168;

/// A team reaching this score ends the match.
pub const WINNING_SCORE: u32 = 200;
pub const CAPICUA_BONUS: u32 = 25;

/// Consecutive passes that block the round (every seat passed once).
pub const PASSES_TO_BLOCK: u8 = PLAYERS as u8;
