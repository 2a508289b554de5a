//! Tile parsing from string representations ("3|5" oriented, "3-5" canonical id)

use std::str::FromStr;

use super::tiles_types::{Tile, TileId};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseTile, format!("Parse tile: {s}"))
}

fn parse_pair(s: &str, sep: char) -> Result<(u8, u8), DomainError> {
    let (left, right) = s.split_once(sep).ok_or_else(|| parse_error(s))?;
    let a = left.trim().parse::<u8>().map_err(|_| parse_error(s))?;
    let b = right.trim().parse::<u8>().map_err(|_| parse_error(s))?;
    Ok((a, b))
}

/// Parses "a|b" keeping orientation, or "a-b".
impl FromStr for Tile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sep = if s.contains('|') { '|' } else { '-' };
        let (a, b) = parse_pair(s, sep)?;
        Tile::new(a, b)
    }
}

/// Parses "low-high"; a reversed pair ("5-3") is accepted and normalised.
impl FromStr for TileId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = parse_pair(s, '-')?;
        Ok(Tile::new(a, b)?.id())
    }
}

/// Non-panicking helper to parse tile tokens (e.g., "6|6", "0-3").
pub fn try_parse_tiles<I, S>(tokens: I) -> Result<Vec<Tile>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Tile>())
        .collect()
}
