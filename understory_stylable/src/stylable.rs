// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Stylable`] capability.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::error::{ContractViolation, TokenError};
use crate::token::{ClassList, PseudoClassList, TokenList, validate_token};

/// An element that can be selected and restyled by a theme rule engine.
///
/// Implementers provide identity and the two token lists; the single-token
/// editing operations are provided on top of them and behave the same for
/// every implementer. The list getters return a [`Cow`], so an element may
/// lend a stored list or build one from its own state on every call.
///
/// The required setters are plain storage writes. Every provided mutation
/// ([`add_class`](Self::add_class), [`replace_classes`](Self::replace_classes),
/// and their pseudo-class counterparts) calls [`invalidate`](Self::invalidate)
/// after an effective change, so rule engines should mutate through those.
///
/// `invalidate` must not modify the token lists of the same element: the
/// provided operations read, modify and write back the full list.
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use understory_stylable::{ClassList, PseudoClassList, StyleState, Stylable};
///
/// struct Label {
///     id: u32,
///     parent: Option<u32>,
///     style: StyleState,
///     stale: bool,
/// }
///
/// impl Stylable for Label {
///     type Key = u32;
///
///     fn key(&self) -> u32 { self.id }
///     fn name(&self) -> Option<&str> { Some("label") }
///     fn parent(&self) -> Option<u32> { self.parent }
///     fn classes(&self) -> Cow<'_, ClassList> { Cow::Borrowed(self.style.classes()) }
///     fn set_classes(&mut self, classes: ClassList) { self.style.replace_classes(classes); }
///     fn pseudo_classes(&self) -> Cow<'_, PseudoClassList> {
///         Cow::Borrowed(self.style.pseudo_classes())
///     }
///     fn set_pseudo_classes(&mut self, pseudo_classes: PseudoClassList) {
///         self.style.replace_pseudo_classes(pseudo_classes);
///     }
///     fn invalidate(&mut self) { self.stale = true; }
/// }
///
/// let mut label = Label { id: 1, parent: None, style: StyleState::new(), stale: false };
/// label.add_class("title").unwrap();
/// label.add_pseudo_class("hover").unwrap();
/// assert_eq!(label.classes_string(), "title");
/// assert_eq!(label.pseudo_classes_string(), "hover");
/// assert!(label.stale);
/// ```
pub trait Stylable {
    /// Non-owning handle used to refer to other elements, e.g. the parent.
    type Key: Copy + Eq;

    /// Handle of this element.
    fn key(&self) -> Self::Key;

    /// Stable name used by selectors to match this element.
    fn name(&self) -> Option<&str>;

    /// Handle of the parent element, or `None` if this element is a root for
    /// matching purposes.
    fn parent(&self) -> Option<Self::Key>;

    /// Current classes, stored or computed.
    fn classes(&self) -> Cow<'_, ClassList>;

    /// Stores new classes.
    fn set_classes(&mut self, classes: ClassList);

    /// Current pseudo-classes, stored or computed.
    fn pseudo_classes(&self) -> Cow<'_, PseudoClassList>;

    /// Stores new pseudo-classes.
    fn set_pseudo_classes(&mut self, pseudo_classes: PseudoClassList);

    /// Signals that cached style matching for this element is stale.
    ///
    /// The default only reports a [`ContractViolation`]; elements that take
    /// part in styling must override it.
    fn invalidate(&mut self) {
        ContractViolation::of::<Self>("Stylable::invalidate").report();
    }

    /// Returns `true` if `class` is one of the element's classes.
    fn has_class(&self, class: &str) -> bool {
        self.classes().contains(class)
    }

    /// Returns `true` if `pseudo_class` is one of the element's pseudo-classes.
    fn has_pseudo_class(&self, pseudo_class: &str) -> bool {
        self.pseudo_classes().contains(pseudo_class)
    }

    /// Classes serialized as `a.b.c`; empty when there are none.
    fn classes_string(&self) -> String {
        self.classes().to_serialized()
    }

    /// Pseudo-classes serialized as `a:b:c`; empty when there are none.
    fn pseudo_classes_string(&self) -> String {
        self.pseudo_classes().to_serialized()
    }

    /// Adds `class` unless present. Returns `Ok(true)` if the classes changed.
    ///
    /// # Errors
    ///
    /// An empty token or one containing `.` is rejected with a warning and
    /// the element is left untouched.
    fn add_class(&mut self, class: &str) -> Result<bool, TokenError> {
        edit_tokens(self, class, Edit::Add, Self::classes, Self::set_classes)
    }

    /// Removes `class` if present. Returns `Ok(true)` if the classes changed.
    ///
    /// # Errors
    ///
    /// Same as [`add_class`](Self::add_class).
    fn remove_class(&mut self, class: &str) -> Result<bool, TokenError> {
        edit_tokens(self, class, Edit::Remove, Self::classes, Self::set_classes)
    }

    /// Adds `pseudo_class` unless present. Returns `Ok(true)` if the
    /// pseudo-classes changed.
    ///
    /// # Errors
    ///
    /// An empty token or one containing `:` is rejected with a warning and
    /// the element is left untouched.
    fn add_pseudo_class(&mut self, pseudo_class: &str) -> Result<bool, TokenError> {
        edit_tokens(
            self,
            pseudo_class,
            Edit::Add,
            Self::pseudo_classes,
            Self::set_pseudo_classes,
        )
    }

    /// Removes `pseudo_class` if present. Returns `Ok(true)` if the
    /// pseudo-classes changed.
    ///
    /// # Errors
    ///
    /// Same as [`add_pseudo_class`](Self::add_pseudo_class).
    fn remove_pseudo_class(&mut self, pseudo_class: &str) -> Result<bool, TokenError> {
        edit_tokens(
            self,
            pseudo_class,
            Edit::Remove,
            Self::pseudo_classes,
            Self::set_pseudo_classes,
        )
    }

    /// Replaces all classes.
    ///
    /// The new list is always stored, so its order is kept. Invalidates and
    /// returns `true` only if membership changed.
    fn replace_classes(&mut self, classes: ClassList) -> bool {
        let changed = *self.classes() != classes;
        self.set_classes(classes);
        if changed {
            self.invalidate();
        }
        changed
    }

    /// Replaces all pseudo-classes.
    ///
    /// The new list is always stored, so its order is kept. Invalidates and
    /// returns `true` only if membership changed.
    fn replace_pseudo_classes(&mut self, pseudo_classes: PseudoClassList) -> bool {
        let changed = *self.pseudo_classes() != pseudo_classes;
        self.set_pseudo_classes(pseudo_classes);
        if changed {
            self.invalidate();
        }
        changed
    }

    /// Replaces all classes from a serialized `a.b.c` string.
    ///
    /// Malformed input is normalized as by [`TokenList::parse`].
    fn set_classes_str(&mut self, classes: &str) -> bool {
        self.replace_classes(ClassList::parse(classes))
    }

    /// Replaces all pseudo-classes from a serialized `a:b:c` string.
    ///
    /// Malformed input is normalized as by [`TokenList::parse`].
    fn set_pseudo_classes_str(&mut self, pseudo_classes: &str) -> bool {
        self.replace_pseudo_classes(PseudoClassList::parse(pseudo_classes))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Edit {
    Add,
    Remove,
}

fn edit_tokens<S, const SEP: char>(
    element: &mut S,
    token: &str,
    edit: Edit,
    get: fn(&S) -> Cow<'_, TokenList<SEP>>,
    set: fn(&mut S, TokenList<SEP>),
) -> Result<bool, TokenError>
where
    S: Stylable + ?Sized,
{
    if let Err(err) = validate_token(token, SEP) {
        log::warn!(
            "{}: rejected {edit:?} of {token:?}: {err}",
            core::any::type_name::<S>()
        );
        return Err(err);
    }

    let current = get(element);
    if current.contains(token) == (edit == Edit::Add) {
        return Ok(false);
    }

    let mut updated = current.into_owned();
    match edit {
        Edit::Add => updated.insert(token)?,
        Edit::Remove => updated.remove(token)?,
    };
    set(element, updated);
    element.invalidate();
    Ok(true)
}
