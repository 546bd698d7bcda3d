//! Affordance highlights for a presentation layer.
//!
//! Mirrors the click transitions: anything that would change the selection
//! when clicked is `Selectable`, anything that would commit or grow a
//! staged group is `Target`. Everything else is `Plain`.

use serde::{Deserialize, Serialize};

use super::machine::{is_last_unplaced, Selection, TurnContext};
use crate::core::{Coord, CoordinateSet};

/// How an affordance should be drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    /// Not clickable.
    #[default]
    Plain,

    /// Starts a selection, or is part of the current one.
    Selectable,

    /// A destination for the current selection.
    Target,
}

/// Highlight for the board cell at `coord`.
///
/// `targets` must be the legal target set for `selection` in `ctx`.
#[must_use]
pub fn cell_highlight(
    selection: &Selection,
    ctx: &TurnContext<'_>,
    targets: &CoordinateSet,
    coord: Coord,
) -> Highlight {
    if !ctx.is_players_turn {
        return Highlight::Plain;
    }

    let is_target = targets.contains(coord);
    match *selection {
        Selection::None if is_target => Highlight::Selectable,
        Selection::Placed(from) if from == coord => Highlight::Selectable,
        Selection::Placed(_) | Selection::Unplaced { .. } if is_target => Highlight::Target,
        _ => Highlight::Plain,
    }
}

/// Highlight for the acting player's unplaced piece at `index`.
#[must_use]
pub fn unplaced_highlight(selection: &Selection, ctx: &TurnContext<'_>, index: usize) -> Highlight {
    if !ctx.is_players_turn {
        return Highlight::Plain;
    }

    let player = ctx.player;
    match selection {
        Selection::None if is_last_unplaced(index, player.num_pieces) => Highlight::Selectable,
        Selection::Unplaced { .. } if selection.is_staged(index, player.num_pieces) => {
            Highlight::Selectable
        }
        Selection::Unplaced { .. } if selection.next_stageable(player) == Some(index) => {
            Highlight::Target
        }
        _ => Highlight::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Color, Player};
    use crate::rules::legal_targets;

    #[test]
    fn test_cell_highlights_without_selection() {
        let board = Board::empty(4)
            .with_stack(Coord::new(0, 0), &[Color::Red])
            .unwrap()
            .with_stack(Coord::new(0, 1), &[Color::Green])
            .unwrap();
        let player = Player::new("p", Color::Red, 5);
        let ctx = TurnContext::new(&board, &player, true);
        let targets = legal_targets(&board, &player, &Selection::None, true);

        let at = |c| cell_highlight(&Selection::None, &ctx, &targets, c);
        assert_eq!(at(Coord::new(0, 0)), Highlight::Selectable);
        assert_eq!(at(Coord::new(0, 1)), Highlight::Plain);
        assert_eq!(at(Coord::new(3, 3)), Highlight::Plain);
    }

    #[test]
    fn test_cell_highlights_with_placed_selection() {
        let board = Board::empty(4)
            .with_stack(Coord::new(0, 0), &[Color::Red])
            .unwrap();
        let player = Player::new("p", Color::Red, 5);
        let ctx = TurnContext::new(&board, &player, true);
        let selection = Selection::Placed(Coord::new(0, 0));
        let targets = legal_targets(&board, &player, &selection, true);

        let at = |c| cell_highlight(&selection, &ctx, &targets, c);
        assert_eq!(at(Coord::new(0, 0)), Highlight::Selectable);
        assert_eq!(at(Coord::new(1, 1)), Highlight::Target);
        assert_eq!(at(Coord::new(2, 2)), Highlight::Plain);
    }

    #[test]
    fn test_unplaced_highlights() {
        let board = Board::empty(4);
        let player = Player::new("p", Color::Red, 5);
        let ctx = TurnContext::new(&board, &player, true);

        let none: Vec<_> = (0..5).map(|i| unplaced_highlight(&Selection::None, &ctx, i)).collect();
        assert_eq!(
            none,
            vec![
                Highlight::Plain,
                Highlight::Plain,
                Highlight::Plain,
                Highlight::Plain,
                Highlight::Selectable
            ]
        );

        let two = Selection::unplaced(2).unwrap();
        let staged: Vec<_> = (0..5).map(|i| unplaced_highlight(&two, &ctx, i)).collect();
        assert_eq!(
            staged,
            vec![
                Highlight::Plain,
                Highlight::Plain,
                Highlight::Target,
                Highlight::Selectable,
                Highlight::Selectable
            ]
        );
    }

    #[test]
    fn test_far_unplaced_index_is_plain() {
        let board = Board::empty(4);
        let player = Player::new("p", Color::Red, 0);
        let ctx = TurnContext::new(&board, &player, true);

        assert_eq!(unplaced_highlight(&Selection::None, &ctx, usize::MAX), Highlight::Plain);
        assert_eq!(unplaced_highlight(&Selection::None, &ctx, 0), Highlight::Plain);
    }

    #[test]
    fn test_plain_out_of_turn() {
        let board = Board::empty(4)
            .with_stack(Coord::new(0, 0), &[Color::Red])
            .unwrap();
        let player = Player::new("p", Color::Red, 5);
        let ctx = TurnContext::new(&board, &player, false);
        let targets = CoordinateSet::new();

        assert_eq!(
            cell_highlight(&Selection::None, &ctx, &targets, Coord::new(0, 0)),
            Highlight::Plain
        );
        assert_eq!(unplaced_highlight(&Selection::None, &ctx, 4), Highlight::Plain);
    }
}
