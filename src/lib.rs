pub mod error;
pub mod seq;
pub mod sequence;

// Re-export the protocol, the extension traits, and the facade at the
// crate root so a single `use lazyseq::*` brings in the whole API.
pub use error::{SequenceError, SequenceResult};
pub use seq::{AdvancedSeqExt, SeqIterator, SeqIteratorExt, SpecializedSeqExt, UtilitySeqExt};
pub use sequence::{empty_sequence, sequence_of, Sequence};
