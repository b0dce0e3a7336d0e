//! Buffering stage combinators: chunks, sorted replay, reverse replay.
//!
//! The sorting and reversing stages are eager by necessity: a total order
//! cannot be established without seeing every element, so they drain the
//! entire upstream on first pull and replay the buffer. Applied to an
//! infinite source they do not terminate.

use std::cmp::Ordering;
use std::collections::VecDeque;

use super::core::{exhausted, SeqIterator};

// ================================
// Windowing
// ================================

/// Buffers consecutive upstream elements into fixed-size windows. The
/// final window may be shorter and is still yielded.
pub struct Chunks<I> {
    pub(crate) upstream: I,
    pub(crate) size: usize,
}

impl<I: SeqIterator> SeqIterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Vec<I::Item> {
        if !self.upstream.has_next() {
            exhausted()
        }
        let mut window = Vec::with_capacity(self.size);
        while window.len() < self.size && self.upstream.has_next() {
            window.push(self.upstream.next());
        }
        window
    }
}

// ================================
// Drain-and-Replay Stages
// ================================

/// Drains upstream into a buffer on first pull, applies a stable sort
/// with the given three-way comparator, and replays the buffer.
pub struct SortedWith<I: SeqIterator, F> {
    pub(crate) upstream: Option<I>,
    pub(crate) compare: F,
    pub(crate) buffered: VecDeque<I::Item>,
}

impl<I, F> SortedWith<I, F>
where
    I: SeqIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    fn fill(&mut self) {
        if let Some(mut upstream) = self.upstream.take() {
            let mut buffer = Vec::new();
            while upstream.has_next() {
                buffer.push(upstream.next());
            }
            log::trace!("sorted stage buffered {} upstream elements", buffer.len());
            let compare = &mut self.compare;
            buffer.sort_by(|a, b| compare(a, b));
            self.buffered = buffer.into();
        }
    }
}

impl<I, F> SeqIterator for SortedWith<I, F>
where
    I: SeqIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.fill();
        !self.buffered.is_empty()
    }

    fn next(&mut self) -> I::Item {
        self.fill();
        match self.buffered.pop_front() {
            Some(item) => item,
            None => exhausted(),
        }
    }
}

/// Drains upstream into a buffer on first pull and replays it back to
/// front.
pub struct Reverse<I: SeqIterator> {
    pub(crate) upstream: Option<I>,
    pub(crate) buffered: Vec<I::Item>,
}

impl<I: SeqIterator> Reverse<I> {
    fn fill(&mut self) {
        if let Some(mut upstream) = self.upstream.take() {
            while upstream.has_next() {
                self.buffered.push(upstream.next());
            }
            log::trace!("reverse stage buffered {} upstream elements", self.buffered.len());
        }
    }
}

impl<I: SeqIterator> SeqIterator for Reverse<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.fill();
        !self.buffered.is_empty()
    }

    fn next(&mut self) -> I::Item {
        self.fill();
        match self.buffered.pop() {
            Some(item) => item,
            None => exhausted(),
        }
    }
}

// ================================
// Extension Trait
// ================================

pub trait SpecializedSeqExt: SeqIterator + Sized {
    /// Buffer elements into windows of `size`; the final window may be
    /// shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn chunks(self, size: usize) -> Chunks<Self> {
        assert!(size > 0, "chunk size must be positive, got {}", size);
        Chunks { upstream: self, size }
    }

    /// Replay all elements in the order given by `compare`. Eager: drains
    /// the entire upstream on first pull. The sort is stable.
    fn sorted_with<F>(self, compare: F) -> SortedWith<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        SortedWith { upstream: Some(self), compare, buffered: VecDeque::new() }
    }

    /// Replay all elements back to front. Eager: drains the entire
    /// upstream on first pull.
    fn reversed(self) -> Reverse<Self> {
        Reverse { upstream: Some(self), buffered: Vec::new() }
    }
}

impl<I: SeqIterator + Sized> SpecializedSeqExt for I {}
