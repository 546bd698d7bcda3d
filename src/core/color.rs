//! Player colors.
//!
//! A color is assigned to a player for a single round. Round order is fixed:
//! the player holding `Red` always moves first, then `Green`, `Blue`, `Yellow`.

use serde::{Deserialize, Serialize};

/// Piece color, one per simultaneous player in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// All colors in round order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Single-letter label used when summarizing a stack.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }

    /// Position of this color in round order.
    #[must_use]
    pub const fn turn_index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Yellow => "YELLOW",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.turn_index(), i);
        }
    }

    #[test]
    fn test_initials() {
        let initials: String = Color::ALL.iter().map(|c| c.initial()).collect();
        assert_eq!(initials, "RGBY");
    }

    #[test]
    fn test_color_serialization() {
        let json = serde_json::to_string(&Color::Yellow).unwrap();
        assert_eq!(json, "\"YELLOW\"");

        let color: Color = serde_json::from_str("\"GREEN\"").unwrap();
        assert_eq!(color, Color::Green);
        assert_eq!(color.to_string(), "GREEN");
    }
}
