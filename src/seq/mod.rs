//! The lazy pull engine.
//!
//! This module provides the [`SeqIterator`] pull trait plus the generic
//! stage combinators that realize each operator's semantics over one or
//! more upstream iterators. The combinators compose with zero boxing; the
//! boxed, fluent surface lives in [`crate::sequence`].

pub mod advanced;
pub mod constructors;
pub mod core;
pub mod specialized;
pub mod utility;

// Re-export the protocol and core stages
pub use core::{Filter, FilterMap, Map, SeqIterator, SeqIteratorExt, Skip, SkipWhile, Take, TakeWhile};

// Re-export sources and constructor functions
pub use constructors::{empty, from_iter, generate, iterate, iterate_with, Empty, Generate, Iter, Iterate};

// Re-export multi-source and keyed stages
pub use advanced::{AdvancedSeqExt, Chain, Distinct, DistinctBy, FlatMap, Flatten, Merge, Zip};

// Re-export buffering stages
pub use specialized::{Chunks, Reverse, SortedWith, SpecializedSeqExt};

// Re-export utility stages and draining helpers
pub use utility::{Enumerate, Inspect, UtilitySeqExt};
