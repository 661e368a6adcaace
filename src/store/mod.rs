//! Store Module
//!
//! In-process document store for products: insertion-ordered storage,
//! store-assigned ids, a text index and an optional JSON-lines journal.

mod documents;
mod ids;
mod journal;
mod text_index;

pub use documents::ProductStore;
pub use ids::{normalize_id, IdGenerator, ID_LENGTH};
pub use journal::Journal;
pub use text_index::{tokenize, TextIndex, TextQuery};
