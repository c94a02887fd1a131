//! Turn actions: player movement and monster pursuit.
//!
//! # Module Structure
//!
//! - `command`: Input vocabulary (`Direction`, `Command`)
//! - `movement`: Player move resolution (`move_player`, `MoveOutcome`)
//! - `pursuit`: Line-of-sight monster advance (`advance_monsters`)
//!
//! Both operations borrow the map mutably for the duration of the call and
//! never fail; blocked moves and missed captures are ordinary results.

pub mod command;
pub mod movement;
pub mod pursuit;

pub use command::{Command, Direction};
pub use movement::{MoveOutcome, move_player};
pub use pursuit::{SCAN_ORDER, advance_monsters};
