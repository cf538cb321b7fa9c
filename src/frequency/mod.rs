//! Word counting and ranking.
//!
//! [`FrequencyTable`] aggregates tokens into per-word counts in one pass;
//! [`Ranker`] then orders the finished table into a [`RankedList`].

pub mod ranker;
pub mod table;

pub use ranker::*;
pub use table::*;
