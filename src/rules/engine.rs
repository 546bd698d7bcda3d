//! Legal action engine.
//!
//! Given a board, the acting player, the in-progress selection and whether
//! it is that player's turn, compute the cells the next click may land on.
//!
//! ## Rules
//!
//! - Out of turn: nothing is legal.
//! - No selection: the player's own top pieces (candidates to move).
//! - Placed piece selected: in-bounds neighbors (8 directions) that are not
//!   full.
//! - Unplaced pieces staged: every cell with room for all staged pieces.
//!
//! Every function here is pure and returns a fresh set.

use tracing::trace;

use crate::core::{Board, Coord, CoordinateSet, Player, MAX_PLACE_COUNT, STACK_CAPACITY};
use crate::selection::Selection;

/// Neighbor offsets `(d_row, d_col)`: both directions along the horizontal,
/// vertical and both diagonal axes.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Compute the legal target set for the next click.
///
/// ```
/// use stacking_rules::core::{Board, Color, Coord, Player};
/// use stacking_rules::rules::legal_targets;
/// use stacking_rules::selection::Selection;
///
/// let board = Board::empty(4);
/// let player = Player::new("p1", Color::Red, 5);
///
/// let targets = legal_targets(&board, &player, &Selection::unplaced(1).unwrap(), true);
/// assert_eq!(targets.len(), 16);
///
/// let targets = legal_targets(&board, &player, &Selection::unplaced(1).unwrap(), false);
/// assert!(targets.is_empty());
/// ```
#[must_use]
pub fn legal_targets(
    board: &Board,
    player: &Player,
    selection: &Selection,
    is_players_turn: bool,
) -> CoordinateSet {
    if !is_players_turn {
        return CoordinateSet::new();
    }

    let targets = match *selection {
        Selection::None => movable_pieces(board, player),
        Selection::Placed(from) => move_targets(board, from),
        Selection::Unplaced { count } => place_targets(board, player, count.get()),
    };

    trace!(player = %player.id, ?selection, targets = targets.len(), "computed legal targets");
    targets
}

/// Cells whose top piece belongs to `player`.
#[must_use]
pub fn movable_pieces(board: &Board, player: &Player) -> CoordinateSet {
    board
        .cells()
        .filter(|(_, stack)| stack.top() == Some(player.color))
        .map(|(coord, _)| coord)
        .collect()
}

/// Neighbors of `from` that can receive one more piece.
#[must_use]
pub fn move_targets(board: &Board, from: Coord) -> CoordinateSet {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col, board.dimension()))
        .filter(|&to| board.stack(to).height() < STACK_CAPACITY)
        .collect()
}

/// Cells that can take `count` new pieces at once.
///
/// Empty when the player has nothing left to place.
#[must_use]
pub fn place_targets(board: &Board, player: &Player, count: u8) -> CoordinateSet {
    if !player.has_unplaced() {
        return CoordinateSet::new();
    }

    board
        .cells()
        .filter(|(_, stack)| stack.is_empty() || stack.room() >= usize::from(count))
        .map(|(coord, _)| coord)
        .collect()
}

/// How many unplaced pieces `player` may stage together.
#[must_use]
pub fn staging_limit(player: &Player) -> u8 {
    player.num_pieces.min(MAX_PLACE_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn red() -> Player {
        Player::new("red", Color::Red, 5)
    }

    #[test]
    fn test_out_of_turn_is_empty() {
        let board = Board::empty(4)
            .with_stack(Coord::new(0, 0), &[Color::Red])
            .unwrap();

        for selection in [
            Selection::None,
            Selection::Placed(Coord::new(0, 0)),
            Selection::unplaced(2).unwrap(),
        ] {
            assert!(legal_targets(&board, &red(), &selection, false).is_empty());
        }
    }

    #[test]
    fn test_movable_pieces_uses_top_only() {
        let board = Board::empty(4)
            .with_stack(Coord::new(0, 0), &[Color::Red])
            .unwrap()
            .with_stack(Coord::new(1, 1), &[Color::Red, Color::Blue])
            .unwrap()
            .with_stack(Coord::new(2, 3), &[Color::Green, Color::Red])
            .unwrap();

        let set = legal_targets(&board, &red(), &Selection::None, true);
        assert_eq!(set.sorted(), vec![Coord::new(0, 0), Coord::new(2, 3)]);
    }

    #[test]
    fn test_move_targets_corner() {
        let board = Board::empty(4)
            .with_stack(Coord::new(0, 0), &[Color::Red])
            .unwrap();

        let set = move_targets(&board, Coord::new(0, 0));
        assert_eq!(
            set.sorted(),
            vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_move_targets_skip_full() {
        let board = Board::empty(4)
            .with_stack(Coord::new(1, 1), &[Color::Red])
            .unwrap()
            .with_stack(Coord::new(0, 0), &[Color::Blue, Color::Blue, Color::Blue])
            .unwrap()
            .with_stack(Coord::new(2, 2), &[Color::Green, Color::Green])
            .unwrap();

        let set = move_targets(&board, Coord::new(1, 1));
        assert_eq!(set.len(), 7);
        assert!(!set.contains(Coord::new(0, 0)));
        assert!(set.contains(Coord::new(2, 2)));
        assert!(!set.contains(Coord::new(1, 1)));
    }

    #[test]
    fn test_place_targets_by_room() {
        let board = Board::empty(4)
            .with_stack(Coord::new(0, 0), &[Color::Blue])
            .unwrap()
            .with_stack(Coord::new(0, 1), &[Color::Blue, Color::Green])
            .unwrap()
            .with_stack(Coord::new(0, 2), &[Color::Blue, Color::Green, Color::Red])
            .unwrap();

        let one = place_targets(&board, &red(), 1);
        assert_eq!(one.len(), 15);
        assert!(!one.contains(Coord::new(0, 2)));

        let three = place_targets(&board, &red(), 3);
        assert_eq!(three.len(), 13);
        assert!(!three.contains(Coord::new(0, 0)));
    }

    #[test]
    fn test_place_targets_need_pieces() {
        let player = Player::new("red", Color::Red, 0);
        assert!(place_targets(&Board::empty(4), &player, 1).is_empty());
    }

    #[test]
    fn test_staging_limit() {
        assert_eq!(staging_limit(&Player::new("a", Color::Red, 5)), 3);
        assert_eq!(staging_limit(&Player::new("a", Color::Red, 2)), 2);
        assert_eq!(staging_limit(&Player::new("a", Color::Red, 0)), 0);
    }
}
