//! Session: one player's view of a running game.
//!
//! Binds a player identity to the latest snapshot, the selection machine
//! and an intent sink. The host feeds it snapshots and clicks; it hands
//! committed intents to the sink and forgets them. If the authority rejects
//! an intent, the next snapshot simply shows the unchanged board and legal
//! targets are recomputed from that.

use tracing::debug;

use super::highlight::{cell_highlight, unplaced_highlight, Highlight};
use super::machine::{Click, Selection, SelectionMachine, Transition, TurnContext};
use crate::core::{Coord, CoordinateSet, GameSnapshot, Intent, PlayerId, RulesConfig};
use crate::error::SnapshotError;

/// Receiver for committed intents.
///
/// Delivery is fire-and-forget: acknowledgement, retries and rejection are
/// the transport's business.
pub trait IntentSink {
    fn submit(&mut self, intent: Intent);
}

impl IntentSink for Vec<Intent> {
    fn submit(&mut self, intent: Intent) {
        self.push(intent);
    }
}

/// A player's session against a stream of snapshots.
///
/// ```
/// use stacking_rules::core::{Board, Color, Coord, GameSnapshot, Intent, Player, RulesConfig};
/// use stacking_rules::selection::{Click, Session};
///
/// let snapshot = GameSnapshot::new(
///     Board::empty(4),
///     [Player::new("me", Color::Red, 5), Player::new("you", Color::Green, 5)],
/// );
///
/// let mut session = Session::new("me", RulesConfig::default(), Vec::new());
/// session.observe(snapshot).unwrap();
///
/// session.click(Click::UnplacedPiece(4));
/// session.click(Click::Cell(Coord::new(2, 2)));
/// assert_eq!(session.sink(), &vec![Intent::Place { row: 2, col: 2, count: 1 }]);
/// ```
#[derive(Debug)]
pub struct Session<S: IntentSink> {
    player_id: PlayerId,
    config: RulesConfig,
    snapshot: Option<GameSnapshot>,
    machine: SelectionMachine,
    sink: S,
}

impl<S: IntentSink> Session<S> {
    pub fn new(player_id: impl Into<PlayerId>, config: RulesConfig, sink: S) -> Self {
        Self {
            player_id: player_id.into(),
            config,
            snapshot: None,
            machine: SelectionMachine::new(),
            sink,
        }
    }

    #[must_use]
    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.machine.selection()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Accept a new snapshot from the authority.
    ///
    /// Invalid snapshots are rejected and the previous one is kept. The
    /// selection is dropped when the active player changed, when it is no
    /// longer this player's turn, or when it no longer fits the new board.
    pub fn observe(&mut self, snapshot: GameSnapshot) -> Result<(), SnapshotError> {
        snapshot.validate(&self.config)?;

        let previous_turn = self
            .snapshot
            .as_ref()
            .and_then(|s| s.current_player_id().cloned());
        let turn_changed = previous_turn.as_ref() != snapshot.current_player_id();

        let keep = !turn_changed
            && snapshot.is_players_turn(&self.player_id)
            && snapshot
                .player(&self.player_id)
                .is_some_and(|p| self.machine.selection().fits(&snapshot.board, p));

        if !keep {
            debug!(player = %self.player_id, turn_changed, "dropping selection on new snapshot");
            self.machine.reset();
        }

        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// Drop the selection in progress.
    pub fn reset(&mut self) {
        self.machine.reset();
    }

    /// Legal targets for the next click. Empty before the first snapshot or
    /// if the snapshot has no record for this player.
    #[must_use]
    pub fn legal_targets(&self) -> CoordinateSet {
        self.context()
            .map(|ctx| self.machine.legal_targets(&ctx))
            .unwrap_or_default()
    }

    /// Apply a click, delivering any commit to the sink.
    pub fn click(&mut self, click: Click) -> Transition {
        let Some(snapshot) = self.snapshot.as_ref() else {
            return Transition::Ignored;
        };
        let Some(ctx) = TurnContext::from_snapshot(snapshot, &self.player_id) else {
            return Transition::Ignored;
        };

        let transition = self.machine.handle(click, &ctx);
        if let Transition::Committed(intent) = transition {
            self.sink.submit(intent);
        }
        transition
    }

    /// Highlight for a board cell.
    #[must_use]
    pub fn cell_highlight(&self, coord: Coord) -> Highlight {
        match self.context() {
            Some(ctx) => {
                let targets = self.machine.legal_targets(&ctx);
                cell_highlight(&self.machine.selection(), &ctx, &targets, coord)
            }
            None => Highlight::Plain,
        }
    }

    /// Highlights for every board cell, row-major.
    #[must_use]
    pub fn cell_highlights(&self) -> Vec<(Coord, Highlight)> {
        let Some(ctx) = self.context() else {
            return Vec::new();
        };
        let targets = self.machine.legal_targets(&ctx);
        let selection = self.machine.selection();

        ctx.board
            .coords()
            .map(|coord| (coord, cell_highlight(&selection, &ctx, &targets, coord)))
            .collect()
    }

    /// Highlight for one of this player's unplaced pieces.
    #[must_use]
    pub fn unplaced_highlight(&self, index: usize) -> Highlight {
        self.context()
            .map(|ctx| unplaced_highlight(&self.machine.selection(), &ctx, index))
            .unwrap_or_default()
    }

    fn context(&self) -> Option<TurnContext<'_>> {
        TurnContext::from_snapshot(self.snapshot.as_ref()?, &self.player_id)
    }
}
