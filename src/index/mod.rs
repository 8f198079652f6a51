pub mod kmer;
pub mod reference;

pub use kmer::{IndexStats, SequenceIndex};
pub use reference::Reference;
