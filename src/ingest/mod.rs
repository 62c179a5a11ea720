// Policy document ingestion
//
// Reads structured policy files from a directory and flattens them into
// searchable section records for the embedding index.

pub mod loader;

pub use loader::{load_policies, Section};
