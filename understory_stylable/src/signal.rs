// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synchronous listener lists.
//!
//! A [`Signal<T>`] lives inside the value `T` it reports on. Emitting lends
//! each listener `&mut T`, so a listener may freely change its target (for
//! example disable a menu item) while the emission is running.
//!
//! Listeners run in registration order. Listeners connected during an
//! emission first run on the next emission; a listener disconnected during an
//! emission is skipped if it has not run yet.
//!
//! Listeners cannot fail. A listener is taken out of its slot only while it
//! runs, so a panicking listener unwinds without leaving the signal in an
//! emitting state: the other listeners stay connected and keep running on
//! later emissions. The panicking listener is dropped during unwinding; its id
//! stays connected to an empty slot until it is disconnected.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

/// Identifies a listener connected to a [`Signal`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener<T> = Box<dyn FnMut(&mut T)>;

/// An ordered list of listeners invoked with `&mut T`.
pub struct Signal<T: ?Sized> {
    // Sorted by id. A slot is empty while its listener runs.
    listeners: Vec<(ListenerId, Option<Listener<T>>)>,
    next_id: u64,
}

impl<T: ?Sized> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let running = self.listeners.iter().filter(|(_, l)| l.is_none()).count();
        f.debug_struct("Signal")
            .field("listeners", &self.len())
            .field("running", &running)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> Signal<T> {
    /// Creates a signal without listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of connected listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if no listener is connected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Appends a listener.
    pub fn connect(&mut self, listener: impl FnMut(&mut T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Some(Box::new(listener))));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not connected.
    ///
    /// A listener may disconnect itself while it runs; it is dropped once it
    /// returns.
    pub fn disconnect(&mut self, id: ListenerId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes all listeners.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    fn index_of(&self, id: ListenerId) -> Option<usize> {
        self.listeners.binary_search_by_key(&id, |(l, _)| *l).ok()
    }

    fn slot(&mut self, id: ListenerId) -> Option<&mut Option<Listener<T>>> {
        let index = self.index_of(id)?;
        Some(&mut self.listeners[index].1)
    }

    /// Invokes every listener of the signal selected from `target`.
    ///
    /// `select` locates the signal inside `target`; it is called again
    /// around each listener because the listener holds `&mut T` while it
    /// runs. The listeners connected when the emission starts are the ones
    /// considered; each is skipped if it was disconnected before its turn or
    /// is already running in an outer emission.
    ///
    /// Returns the number of listeners invoked, or 0 if `select` finds no
    /// signal.
    pub fn emit(target: &mut T, select: fn(&mut T) -> Option<&mut Self>) -> usize {
        let Some(signal) = select(target) else {
            return 0;
        };
        let ids: SmallVec<[ListenerId; 8]> = signal.listeners.iter().map(|(id, _)| *id).collect();

        let mut invoked = 0;
        for id in ids {
            let Some(mut listener) = select(target)
                .and_then(|s| s.slot(id))
                .and_then(Option::take)
            else {
                continue;
            };
            listener(target);
            invoked += 1;
            if let Some(slot) = select(target).and_then(|s| s.slot(id)) {
                *slot = Some(listener);
            }
        }
        invoked
    }
}
