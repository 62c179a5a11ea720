// Embedding index
//
// Exact nearest-neighbor search over embedded policy sections, built once at
// startup and immutable afterwards. An index that cannot be built (no
// sections, embedding failure) is a valid empty state, not an error.

pub mod flat;
pub mod store;

pub use flat::FlatIndex;
pub use store::SectionIndex;
