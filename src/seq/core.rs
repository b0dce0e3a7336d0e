//! Core pull protocol and stage combinators.
//!
//! Every source and every intermediate stage implements [`SeqIterator`], a
//! minimal two-method pull interface. A terminal consumer calls `next` on
//! the outermost stage, which pulls from its upstream stage, recursively
//! down to the original source. Nothing is computed until something pulls.

use std::marker::PhantomData;

/// The pull protocol implemented by every sequence source and stage.
///
/// Contract:
/// - `has_next` is idempotent with respect to position: repeated calls
///   without an intervening `next` return the same answer. Once it has
///   returned `false`, it returns `false` forever.
/// - `next` consumes and advances exactly one logical position. Calling it
///   when `has_next` would return `false` is a protocol violation and
///   panics with a "no such element" message.
///
/// Stages that filter or limit answer `has_next` truthfully by pulling
/// upstream elements ahead of time and caching the first qualifying one,
/// so the paired `next` never re-pulls (skip-ahead-and-cache).
pub trait SeqIterator {
    type Item;

    /// Returns `true` if another element can be pulled.
    fn has_next(&mut self) -> bool;

    /// Pulls the next element and advances one position.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is exhausted.
    fn next(&mut self) -> Self::Item;
}

impl<I: SeqIterator + ?Sized> SeqIterator for Box<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Self::Item {
        (**self).next()
    }
}

/// Shared failure path for `next` on an exhausted iterator.
pub(crate) fn exhausted() -> ! {
    panic!("No such element: next() called on an exhausted sequence iterator")
}

// ================================
// Core Stages
// ================================

pub struct Map<I, U, F> {
    pub(crate) upstream: I,
    pub(crate) f: F,
    pub(crate) _phantom: PhantomData<U>,
}

impl<I, U, F> SeqIterator for Map<I, U, F>
where
    I: SeqIterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next(&mut self) -> U {
        (self.f)(self.upstream.next())
    }
}

pub struct Filter<I: SeqIterator, F> {
    pub(crate) upstream: I,
    pub(crate) predicate: F,
    pub(crate) peeked: Option<I::Item>,
}

impl<I, F> SeqIterator for Filter<I, F>
where
    I: SeqIterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        if self.peeked.is_some() {
            return true;
        }
        while self.upstream.has_next() {
            let item = self.upstream.next();
            if (self.predicate)(&item) {
                self.peeked = Some(item);
                return true;
            }
        }
        false
    }

    fn next(&mut self) -> I::Item {
        if !self.has_next() {
            exhausted()
        }
        self.peeked.take().expect("peeked element present after has_next()")
    }
}

pub struct FilterMap<I, U, F> {
    pub(crate) upstream: I,
    pub(crate) f: F,
    pub(crate) peeked: Option<U>,
}

impl<I, U, F> SeqIterator for FilterMap<I, U, F>
where
    I: SeqIterator,
    F: FnMut(I::Item) -> Option<U>,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        if self.peeked.is_some() {
            return true;
        }
        while self.upstream.has_next() {
            if let Some(mapped) = (self.f)(self.upstream.next()) {
                self.peeked = Some(mapped);
                return true;
            }
        }
        false
    }

    fn next(&mut self) -> U {
        if !self.has_next() {
            exhausted()
        }
        self.peeked.take().expect("peeked element present after has_next()")
    }
}

pub struct Take<I> {
    pub(crate) upstream: I,
    pub(crate) remaining: usize,
}

impl<I: SeqIterator> SeqIterator for Take<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        // Exhausted once the counter hits zero, even if upstream has more.
        self.remaining > 0 && self.upstream.has_next()
    }

    fn next(&mut self) -> I::Item {
        if self.remaining == 0 {
            exhausted()
        }
        self.remaining -= 1;
        self.upstream.next()
    }
}

pub struct Skip<I> {
    pub(crate) upstream: I,
    pub(crate) remaining: usize,
}

impl<I: SeqIterator> SeqIterator for Skip<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        // The leading elements are discarded lazily, on first pull.
        while self.remaining > 0 {
            if !self.upstream.has_next() {
                self.remaining = 0;
                return false;
            }
            self.upstream.next();
            self.remaining -= 1;
        }
        self.upstream.has_next()
    }

    fn next(&mut self) -> I::Item {
        if !self.has_next() {
            exhausted()
        }
        self.upstream.next()
    }
}

pub struct TakeWhile<I: SeqIterator, F> {
    pub(crate) upstream: I,
    pub(crate) predicate: F,
    pub(crate) peeked: Option<I::Item>,
    pub(crate) done: bool,
}

impl<I, F> SeqIterator for TakeWhile<I, F>
where
    I: SeqIterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        if self.peeked.is_some() {
            return true;
        }
        if self.done {
            return false;
        }
        if self.upstream.has_next() {
            let item = self.upstream.next();
            if (self.predicate)(&item) {
                self.peeked = Some(item);
                return true;
            }
        }
        // Stops permanently on the first failure; a later element that
        // would satisfy the predicate is never considered.
        self.done = true;
        false
    }

    fn next(&mut self) -> I::Item {
        if !self.has_next() {
            exhausted()
        }
        self.peeked.take().expect("peeked element present after has_next()")
    }
}

pub struct SkipWhile<I: SeqIterator, F> {
    pub(crate) upstream: I,
    pub(crate) predicate: F,
    pub(crate) peeked: Option<I::Item>,
    pub(crate) skipping: bool,
}

impl<I, F> SeqIterator for SkipWhile<I, F>
where
    I: SeqIterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        if self.peeked.is_some() {
            return true;
        }
        if self.skipping {
            while self.upstream.has_next() {
                let item = self.upstream.next();
                if !(self.predicate)(&item) {
                    // Everything from here on passes through, including
                    // elements the predicate would have rejected.
                    self.skipping = false;
                    self.peeked = Some(item);
                    return true;
                }
            }
            self.skipping = false;
            return false;
        }
        self.upstream.has_next()
    }

    fn next(&mut self) -> I::Item {
        if !self.has_next() {
            exhausted()
        }
        match self.peeked.take() {
            Some(item) => item,
            None => self.upstream.next(),
        }
    }
}

// ================================
// Extension Trait
// ================================

/// Core stage constructors, available on every [`SeqIterator`].
pub trait SeqIteratorExt: SeqIterator + Sized {
    /// Transform every element with `f`.
    fn map<U, F>(self, f: F) -> Map<Self, U, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map { upstream: self, f, _phantom: PhantomData }
    }

    /// Keep only elements satisfying `predicate`.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Filter { upstream: self, predicate, peeked: None }
    }

    /// Transform every element, dropping absent results.
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, U, F>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        FilterMap { upstream: self, f, peeked: None }
    }

    /// Pull at most `n` elements.
    fn take(self, n: usize) -> Take<Self> {
        Take { upstream: self, remaining: n }
    }

    /// Discard the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self> {
        Skip { upstream: self, remaining: n }
    }

    /// Pull elements while `predicate` holds, then stop permanently.
    fn take_while<F>(self, predicate: F) -> TakeWhile<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        TakeWhile { upstream: self, predicate, peeked: None, done: false }
    }

    /// Discard leading elements while `predicate` holds, then pass
    /// everything through.
    fn skip_while<F>(self, predicate: F) -> SkipWhile<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        SkipWhile { upstream: self, predicate, peeked: None, skipping: true }
    }
}

impl<I: SeqIterator + Sized> SeqIteratorExt for I {}
