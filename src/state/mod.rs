//! Search-side view of a match.
//!
//! A `SearchState` is projected from the live pyramid and player boards
//! once per turn and then cloned freely by the search engine. It holds
//! only the facts the engine reads: per-player tallies, a compact copy of
//! the pyramid, the conflict track, whose turn it is and how many rounds
//! the search may look ahead.

pub mod search_state;
pub mod tally;
pub mod view;

pub use search_state::{SearchState, Winner, SCIENCE_VICTORY_TYPES};
pub use tally::{PlayerTally, WonderSummary};
pub use view::{CardView, SlotView};
