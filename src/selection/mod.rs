//! Selection state machine and the session that drives it.
//!
//! A move or placement can take several clicks to specify. `SelectionMachine`
//! tracks the uncommitted selection between clicks; `Session` binds it to a
//! player, a snapshot stream and an intent sink; `highlight` derives what a
//! presentation layer should draw.
//!
//! ## Example Usage
//!
//! ```
//! use stacking_rules::core::{Board, Color, Coord, Player};
//! use stacking_rules::selection::{Click, Selection, SelectionMachine, TurnContext};
//!
//! let board = Board::empty(4).with_stack(Coord::new(1, 1), &[Color::Red, Color::Red]).unwrap();
//! let player = Player::new("p1", Color::Red, 3);
//! let ctx = TurnContext::new(&board, &player, true);
//!
//! let mut machine = SelectionMachine::new();
//! assert!(machine.legal_targets(&ctx).has(1, 1));
//!
//! machine.handle(Click::Cell(Coord::new(1, 1)), &ctx);
//! assert_eq!(machine.selection(), Selection::Placed(Coord::new(1, 1)));
//! assert_eq!(machine.legal_targets(&ctx).len(), 8);
//! ```

mod highlight;
mod machine;
mod session;

pub use highlight::{cell_highlight, unplaced_highlight, Highlight};
pub use machine::{Click, Selection, SelectionMachine, Transition, TurnContext};
pub use session::{IntentSink, Session};
