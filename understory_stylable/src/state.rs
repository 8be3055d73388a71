// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default class storage for [`Stylable`](crate::Stylable) implementers.

use crate::token::{ClassList, PseudoClassList};

/// Classes and pseudo-classes of one element plus a change revision.
///
/// Elements that keep their styling tokens as plain fields can embed a
/// `StyleState` and forward the [`Stylable`](crate::Stylable) accessors to it.
/// The revision counter increases on every effective change and can be
/// compared by rule engines to skip re-matching unchanged elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleState {
    classes: ClassList,
    pseudo_classes: PseudoClassList,
    revision: u64,
}

impl StyleState {
    /// Creates empty state at revision 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates state with initial classes, at revision 0.
    #[must_use]
    pub fn with_classes(classes: ClassList) -> Self {
        Self {
            classes,
            ..Self::default()
        }
    }

    /// Current classes.
    #[must_use]
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Current pseudo-classes.
    #[must_use]
    pub fn pseudo_classes(&self) -> &PseudoClassList {
        &self.pseudo_classes
    }

    /// Monotonic change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the classes, returning `true` if membership changed.
    pub fn replace_classes(&mut self, classes: ClassList) -> bool {
        if self.classes == classes {
            // Keep the caller's ordering even when membership is unchanged.
            self.classes = classes;
            return false;
        }
        self.classes = classes;
        self.bump();
        true
    }

    /// Replaces the pseudo-classes, returning `true` if membership changed.
    pub fn replace_pseudo_classes(&mut self, pseudo_classes: PseudoClassList) -> bool {
        if self.pseudo_classes == pseudo_classes {
            self.pseudo_classes = pseudo_classes;
            return false;
        }
        self.pseudo_classes = pseudo_classes;
        self.bump();
        true
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
