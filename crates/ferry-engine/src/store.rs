//! Capacity-aware resource stores.
//!
//! Two pool shapes back the simulation's shared resources:
//!
//! - [`ResourceStore`] — unbounded FIFO (the vehicle queue).
//! - [`FilterableResourceStore`] — insertion-ordered set searched by
//!   predicate (the at-dock vessel pool).
//!
//! # Suspension protocol
//!
//! A `get` that cannot complete immediately does not block: it returns
//! [`Acquire::Pending`] carrying a [`WaiterId`], and the caller parks its
//! continuation under that token.  A later `put` that satisfies the earliest
//! compatible waiter returns a [`Handoff`] — the item goes straight to the
//! waiter and never enters the buffer — and the caller resumes the parked
//! continuation at the current instant.  Waiters are serviced strictly in
//! registration order; a waiter whose predicate never matches again simply
//! never resumes, which is acceptable because the run terminates at the
//! horizon regardless.

use std::collections::VecDeque;

/// Token identifying a suspended getter within one store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaiterId(u64);

/// Outcome of a `get`: the item, or a token to resume on.
#[derive(Debug)]
pub enum Acquire<T> {
    Ready(T),
    Pending(WaiterId),
}

/// A `put` that directly satisfied a suspended getter.
#[derive(Debug)]
pub struct Handoff<T> {
    pub waiter: WaiterId,
    pub item: T,
}

// ── ResourceStore ─────────────────────────────────────────────────────────────

/// Unbounded FIFO store.
///
/// `put` appends and immediately satisfies the earliest pending `get`;
/// `get` removes the oldest item or suspends the caller until one is put.
#[derive(Debug)]
pub struct ResourceStore<T> {
    items: VecDeque<T>,
    waiters: VecDeque<WaiterId>,
    next_waiter: u64,
}

impl<T> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceStore<T> {
    pub fn new() -> Self {
        ResourceStore {
            items: VecDeque::new(),
            waiters: VecDeque::new(),
            next_waiter: 0,
        }
    }

    /// Append `item`, or hand it to the earliest pending getter.
    pub fn put(&mut self, item: T) -> Option<Handoff<T>> {
        match self.waiters.pop_front() {
            Some(waiter) => Some(Handoff { waiter, item }),
            None => {
                self.items.push_back(item);
                None
            }
        }
    }

    /// Remove and return the oldest item, or register the caller as a
    /// pending getter.
    pub fn get(&mut self) -> Acquire<T> {
        match self.items.pop_front() {
            Some(item) => Acquire::Ready(item),
            None => {
                let waiter = WaiterId(self.next_waiter);
                self.next_waiter += 1;
                self.waiters.push_back(waiter);
                Acquire::Pending(waiter)
            }
        }
    }

    /// Number of buffered items (pending getters not counted).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ── FilterableResourceStore ───────────────────────────────────────────────────

struct Waiter<T> {
    id: WaiterId,
    predicate: Box<dyn Fn(&T) -> bool>,
}

/// Insertion-ordered store searched by predicate.
///
/// Selection among multiple matches is deterministic: always the first
/// match in insertion order.  This is the canonical tie-break rule for
/// every caller, including "first vessel whose capacity equals the maximum".
pub struct FilterableResourceStore<T> {
    items: Vec<T>,
    waiters: Vec<Waiter<T>>,
    next_waiter: u64,
}

impl<T> Default for FilterableResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FilterableResourceStore<T> {
    pub fn new() -> Self {
        FilterableResourceStore {
            items: Vec::new(),
            waiters: Vec::new(),
            next_waiter: 0,
        }
    }

    /// Add `item`, or hand it to the earliest waiter whose predicate
    /// accepts it.  Every put re-evaluates waiters in registration order.
    pub fn put(&mut self, item: T) -> Option<Handoff<T>> {
        if let Some(pos) = self.waiters.iter().position(|w| (w.predicate)(&item)) {
            let waiter = self.waiters.remove(pos);
            return Some(Handoff {
                waiter: waiter.id,
                item,
            });
        }
        self.items.push(item);
        None
    }

    /// Remove and return the first item (insertion order) satisfying
    /// `predicate`, or register the caller to be woken on future puts.
    pub fn get_where<F>(&mut self, predicate: F) -> Acquire<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        if let Some(pos) = self.items.iter().position(&predicate) {
            return Acquire::Ready(self.items.remove(pos));
        }
        let id = WaiterId(self.next_waiter);
        self.next_waiter += 1;
        self.waiters.push(Waiter {
            id,
            predicate: Box::new(predicate),
        });
        Acquire::Pending(id)
    }

    /// Non-suspending removal of the first item satisfying `predicate`.
    ///
    /// For callers that treat "no match" as an error of their own rather
    /// than a reason to wait.
    pub fn take_first<F>(&mut self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let pos = self.items.iter().position(|item| predicate(item))?;
        Some(self.items.remove(pos))
    }

    /// Iterate items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FilterableResourceStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterableResourceStore")
            .field("items", &self.items)
            .field("waiters", &self.waiters.len())
            .finish()
    }
}
