//! The two sides of a Thirteen Moves game.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::error::SideParseError;

/// A player: the attacker advances toward row 0, the defender toward the last row.
///
/// Scores are defender-positive, so the defender is the maximizing side in search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Attacker = 0,
    Defender = 1,
}

impl Side {
    /// Total number of sides.
    pub const COUNT: usize = 2;

    /// All sides in index order.
    pub const ALL: [Side; 2] = [Side::Attacker, Side::Defender];

    /// Return the index (0 for Attacker, 1 for Defender).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing side.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }

    /// Return `true` for the side whose wins score positive.
    #[inline]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Side::Defender)
    }

    /// Row delta of a single advance for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Attacker => -1,
            Side::Defender => 1,
        }
    }

    /// The row this side must reach to win.
    #[inline]
    pub const fn goal_row(self) -> u8 {
        match self {
            Side::Attacker => 0,
            Side::Defender => crate::HEIGHT - 1,
        }
    }

    /// Character used in board layouts.
    #[inline]
    pub const fn layout_char(self) -> char {
        match self {
            Side::Attacker => 'a',
            Side::Defender => 'd',
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attacker => f.pad("attacker"),
            Side::Defender => f.pad("defender"),
        }
    }
}

impl FromStr for Side {
    type Err = SideParseError;

    fn from_str(s: &str) -> Result<Side, SideParseError> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "attacker" | "blue" => Ok(Side::Attacker),
            "d" | "defender" | "red" => Ok(Side::Defender),
            _ => Err(SideParseError {
                found: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Side;

    #[test]
    fn index_values() {
        assert_eq!(Side::Attacker.index(), 0);
        assert_eq!(Side::Defender.index(), 1);
    }

    #[test]
    fn flip_roundtrip() {
        assert_eq!(!Side::Attacker, Side::Defender);
        assert_eq!(Side::Defender.flip().flip(), Side::Defender);
    }

    #[test]
    fn defender_maximizes() {
        assert!(Side::Defender.is_maximizing());
        assert!(!Side::Attacker.is_maximizing());
    }

    #[test]
    fn goal_rows_are_opposite_edges() {
        assert_eq!(Side::Attacker.goal_row(), 0);
        assert_eq!(Side::Defender.goal_row(), crate::HEIGHT - 1);
    }

    #[test]
    fn parse_names() {
        assert_eq!("attacker".parse::<Side>().unwrap(), Side::Attacker);
        assert_eq!("D".parse::<Side>().unwrap(), Side::Defender);
        assert_eq!("red".parse::<Side>().unwrap(), Side::Defender);
        assert!("white".parse::<Side>().is_err());
    }
}
