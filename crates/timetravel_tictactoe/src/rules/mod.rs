//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules know nothing about
//! history or whose turn it is; the game state combines them with the cursor.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, detect};
