// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving parent handles for ancestor matching.
//!
//! [`Stylable::parent`] only returns a handle. The element tree that owns
//! the elements resolves handles through a [`StylableLookup`], and
//! [`ancestors`] walks the chain nearest-first until a root or a handle that
//! no longer resolves.

use core::fmt;
use core::marker::PhantomData;

use crate::stylable::Stylable;

/// Resolves element handles to elements owned elsewhere.
pub trait StylableLookup<'a, S: Stylable + ?Sized + 'a> {
    /// Looks up the element for `key`, or `None` if it no longer exists.
    fn lookup(&self, key: S::Key) -> Option<&'a S>;
}

impl<'a, S, F> StylableLookup<'a, S> for F
where
    S: Stylable + ?Sized + 'a,
    F: Fn(S::Key) -> Option<&'a S>,
{
    #[inline]
    fn lookup(&self, key: S::Key) -> Option<&'a S> {
        self(key)
    }
}

/// Iterates the ancestors of `element`, nearest first.
///
/// The walk ends at an element without a parent or at the first handle the
/// lookup cannot resolve. The owning tree must not contain parent cycles.
///
/// ```rust
/// use std::borrow::Cow;
/// use understory_stylable::{ClassList, PseudoClassList, Stylable, ancestors};
///
/// struct Node {
///     id: usize,
///     name: &'static str,
///     parent: Option<usize>,
///     classes: ClassList,
///     pseudo_classes: PseudoClassList,
/// }
///
/// impl Stylable for Node {
///     type Key = usize;
///     fn key(&self) -> usize { self.id }
///     fn name(&self) -> Option<&str> { Some(self.name) }
///     fn parent(&self) -> Option<usize> { self.parent }
///     fn classes(&self) -> Cow<'_, ClassList> { Cow::Borrowed(&self.classes) }
///     fn set_classes(&mut self, classes: ClassList) { self.classes = classes; }
///     fn pseudo_classes(&self) -> Cow<'_, PseudoClassList> {
///         Cow::Borrowed(&self.pseudo_classes)
///     }
///     fn set_pseudo_classes(&mut self, p: PseudoClassList) { self.pseudo_classes = p; }
///     fn invalidate(&mut self) {}
/// }
///
/// let node = |id, name, parent| Node {
///     id,
///     name,
///     parent,
///     classes: ClassList::new(),
///     pseudo_classes: PseudoClassList::new(),
/// };
/// let tree = [node(0, "stage", None), node(1, "menu", Some(0)), node(2, "item", Some(1))];
///
/// let names: Vec<_> = ancestors(&tree[2], |key: usize| tree.get(key))
///     .filter_map(|n| n.name())
///     .collect();
/// assert_eq!(names, ["menu", "stage"]);
/// ```
pub fn ancestors<'a, S, L>(element: &S, lookup: L) -> Ancestors<'a, S, L>
where
    S: Stylable + ?Sized + 'a,
    L: StylableLookup<'a, S>,
{
    Ancestors {
        next: element.parent(),
        lookup,
        marker: PhantomData,
    }
}

/// Iterator returned by [`ancestors`].
pub struct Ancestors<'a, S: Stylable + ?Sized, L> {
    next: Option<S::Key>,
    lookup: L,
    marker: PhantomData<&'a S>,
}

impl<'a, S, L> Iterator for Ancestors<'a, S, L>
where
    S: Stylable + ?Sized + 'a,
    L: StylableLookup<'a, S>,
{
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next.take()?;
        let parent = self.lookup.lookup(key)?;
        self.next = parent.parent();
        Some(parent)
    }
}

impl<S: Stylable + ?Sized, L> fmt::Debug for Ancestors<'_, S, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ancestors")
            .field("done", &self.next.is_none())
            .finish_non_exhaustive()
    }
}
