//! Find groups of five five-letter words that between them use 25 distinct
//! letters.
//!
//! Words become letter bitmasks. Disjoint word pairs are generated once, two
//! disjoint pairs make a quad, and a quad is kept only if its six free letters
//! hold some fifth word. Quads are then expanded back into literal words.

pub mod bits;
pub mod catalog;
pub mod error;
pub mod index;
pub mod output;
pub mod pairs;
pub mod pipeline;
pub mod progress;
pub mod reconstruct;
pub mod shard;
pub mod solution_masks;
pub mod solver;

pub use catalog::WordCatalog;
pub use error::{Error, Result};
pub use pipeline::{run, search, SearchOptions};
pub use reconstruct::Solution;
pub use shard::Shard;
