//! Game rules for tri-tactics.
//!
//! Pure functions over board snapshots. Nothing here knows about turns or
//! players, only marks on the grid.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Direction, evaluate, evaluate_with};
