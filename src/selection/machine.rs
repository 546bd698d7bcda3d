//! Selection state machine.
//!
//! Turns a sequence of clicks into either a refined selection or a commit.
//!
//! ## States
//!
//! - `None`: nothing chosen yet
//! - `Placed(coord)`: one of the player's top pieces is chosen to move
//! - `Unplaced { count }`: `count` unplaced pieces are staged to be placed
//!   together
//!
//! ## Unplaced piece indices
//!
//! A player holding `n` unplaced pieces sees them as indices `0..n`. Only
//! the last one (`n - 1`) can start a selection. Staging grows downward:
//! with `count` staged the staged pieces are `n - count ..= n - 1` and the
//! next stageable piece is `n - 1 - count`.
//!
//! Clicks that match no transition are ignored. The machine never observes
//! turn changes itself; the owner resets it.

use std::num::NonZeroU8;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Board, Coord, CoordinateSet, GameSnapshot, Intent, Player, PlayerId};
use crate::rules::{legal_targets, staging_limit};

/// A player's in-progress, uncommitted choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// No selection in progress.
    #[default]
    None,

    /// A placed top piece chosen to move.
    Placed(Coord),

    /// Unplaced pieces staged to be placed together, `1..=3`.
    Unplaced { count: NonZeroU8 },
}

impl Selection {
    /// Stage `count` unplaced pieces. `None` for a zero count.
    ///
    /// ```
    /// use stacking_rules::selection::Selection;
    ///
    /// assert_eq!(Selection::unplaced(2).map(|s| s.staged_count()), Some(2));
    /// assert_eq!(Selection::unplaced(0), None);
    /// ```
    #[must_use]
    pub fn unplaced(count: u8) -> Option<Self> {
        NonZeroU8::new(count).map(|count| Selection::Unplaced { count })
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Number of staged unplaced pieces, 0 unless unplaced pieces are staged.
    #[must_use]
    pub fn staged_count(&self) -> u8 {
        match *self {
            Selection::Unplaced { count } => count.get(),
            _ => 0,
        }
    }

    /// Check if unplaced piece `index` is part of the staged group.
    #[must_use]
    pub fn is_staged(&self, index: usize, num_pieces: u8) -> bool {
        let n = usize::from(num_pieces);
        match *self {
            Selection::Unplaced { count } => index < n && index + usize::from(count.get()) >= n,
            _ => false,
        }
    }

    /// Index of the unplaced piece that would grow the staged group, if the
    /// group can still grow.
    #[must_use]
    pub fn next_stageable(&self, player: &Player) -> Option<usize> {
        match *self {
            Selection::Unplaced { count } if count.get() < staging_limit(player) => {
                Some(usize::from(player.num_pieces) - 1 - usize::from(count.get()))
            }
            _ => None,
        }
    }

    /// Check the selection still fits `board` and `player`.
    ///
    /// A placed selection must still point at one of the player's top
    /// pieces; a staged count must not exceed what the player can stage.
    #[must_use]
    pub fn fits(&self, board: &Board, player: &Player) -> bool {
        match *self {
            Selection::None => true,
            Selection::Placed(coord) => {
                board.in_bounds(coord) && board.top(coord) == Some(player.color)
            }
            Selection::Unplaced { count } => count.get() <= staging_limit(player),
        }
    }
}

/// Whether `index` is the last of `num_pieces` unplaced pieces, the only one
/// that can start a selection.
pub(super) fn is_last_unplaced(index: usize, num_pieces: u8) -> bool {
    usize::from(num_pieces).checked_sub(1) == Some(index)
}

/// A discrete input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Click {
    /// A board cell, empty or occupied.
    Cell(Coord),

    /// One of the acting player's unplaced pieces, by index.
    UnplacedPiece(usize),
}

/// Result of handling a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The selection changed to the given value.
    Selected(Selection),

    /// The selection was committed; the machine is back to `None`.
    Committed(Intent),

    /// No transition matched; nothing changed.
    Ignored,
}

/// Everything a click is interpreted against.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    pub board: &'a Board,
    pub player: &'a Player,
    pub is_players_turn: bool,
}

impl<'a> TurnContext<'a> {
    #[must_use]
    pub fn new(board: &'a Board, player: &'a Player, is_players_turn: bool) -> Self {
        Self {
            board,
            player,
            is_players_turn,
        }
    }

    /// Context for `player_id` in `snapshot`, or `None` if the snapshot has
    /// no record for that player.
    #[must_use]
    pub fn from_snapshot(snapshot: &'a GameSnapshot, player_id: &PlayerId) -> Option<Self> {
        let player = snapshot.player(player_id)?;
        Some(Self::new(
            &snapshot.board,
            player,
            snapshot.is_players_turn(player_id),
        ))
    }
}

/// Holds the current selection and applies click transitions.
///
/// ```
/// use stacking_rules::core::{Board, Color, Coord, Intent, Player};
/// use stacking_rules::selection::{Click, Selection, SelectionMachine, Transition, TurnContext};
///
/// let board = Board::empty(4);
/// let player = Player::new("p1", Color::Red, 5);
/// let ctx = TurnContext::new(&board, &player, true);
///
/// let mut machine = SelectionMachine::new();
/// machine.handle(Click::UnplacedPiece(4), &ctx);
/// assert_eq!(machine.selection(), Selection::unplaced(1).unwrap());
///
/// let result = machine.handle(Click::Cell(Coord::new(2, 2)), &ctx);
/// assert_eq!(result, Transition::Committed(Intent::Place { row: 2, col: 2, count: 1 }));
/// assert_eq!(machine.selection(), Selection::None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SelectionMachine {
    selection: Selection,
}

impl SelectionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Drop any selection in progress.
    pub fn reset(&mut self) {
        if !self.selection.is_none() {
            debug!(selection = ?self.selection, "selection reset");
        }
        self.selection = Selection::None;
    }

    /// Legal targets for the current selection.
    #[must_use]
    pub fn legal_targets(&self, ctx: &TurnContext<'_>) -> CoordinateSet {
        legal_targets(ctx.board, ctx.player, &self.selection, ctx.is_players_turn)
    }

    /// Apply a click.
    pub fn handle(&mut self, click: Click, ctx: &TurnContext<'_>) -> Transition {
        let transition = if ctx.is_players_turn {
            match click {
                Click::Cell(coord) => self.click_cell(coord, ctx),
                Click::UnplacedPiece(index) => self.click_unplaced(index, ctx.player),
            }
        } else {
            Transition::Ignored
        };

        match transition {
            Transition::Selected(next) => {
                debug!(player = %ctx.player.id, from = ?self.selection, to = ?next, "selection changed");
                self.selection = next;
            }
            Transition::Committed(intent) => {
                debug!(player = %ctx.player.id, ?intent, "selection committed");
                self.selection = Selection::None;
            }
            Transition::Ignored => {
                trace!(player = %ctx.player.id, ?click, selection = ?self.selection, "click ignored");
            }
        }
        transition
    }

    fn click_cell(&self, coord: Coord, ctx: &TurnContext<'_>) -> Transition {
        let targets = self.legal_targets(ctx);

        match self.selection {
            Selection::None if targets.contains(coord) => {
                Transition::Selected(Selection::Placed(coord))
            }
            Selection::Placed(from) if from == coord => Transition::Selected(Selection::None),
            Selection::Placed(from) if targets.contains(coord) => {
                Transition::Committed(Intent::movement(from, coord))
            }
            Selection::Unplaced { count } if targets.contains(coord) => {
                Transition::Committed(Intent::place(coord, count.get()))
            }
            _ => Transition::Ignored,
        }
    }

    fn click_unplaced(&self, index: usize, player: &Player) -> Transition {
        match self.selection {
            Selection::None if is_last_unplaced(index, player.num_pieces) => {
                Transition::Selected(Selection::Unplaced { count: NonZeroU8::MIN })
            }
            Selection::Unplaced { count } if self.selection.is_staged(index, player.num_pieces) => {
                let peeled = Selection::unplaced(count.get() - 1).unwrap_or_default();
                Transition::Selected(peeled)
            }
            Selection::Unplaced { count } if self.selection.next_stageable(player) == Some(index) => {
                match count.checked_add(1) {
                    Some(count) => Transition::Selected(Selection::Unplaced { count }),
                    None => Transition::Ignored,
                }
            }
            _ => Transition::Ignored,
        }
    }
}
