// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error and diagnostic types.

use core::fmt;

/// Error returned when a token cannot be added to or removed from a token list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenError {
    /// The token was the empty string.
    Empty,
    /// The token contained the list's separator character.
    ContainsSeparator {
        /// The reserved separator of the list (`.` or `:`).
        separator: char,
    },
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("token is empty"),
            Self::ContainsSeparator { separator } => {
                write!(f, "token contains reserved separator {separator:?}")
            }
        }
    }
}

impl core::error::Error for TokenError {}

/// A required capability operation that an implementer did not provide.
///
/// This is never returned to callers. It is reported through the `log`
/// facade and the operation degrades to a neutral value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContractViolation {
    /// Concrete type of the implementer.
    pub type_name: &'static str,
    /// Qualified name of the missing operation, e.g. `Stylable::invalidate`.
    pub operation: &'static str,
}

impl ContractViolation {
    /// Describes a missing `operation` on the implementer `T`.
    #[must_use]
    pub fn of<T: ?Sized>(operation: &'static str) -> Self {
        Self {
            type_name: core::any::type_name::<T>(),
            operation,
        }
    }

    pub(crate) fn report(self) {
        log::warn!("{self}");
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "object of type {} does not implement required operation {}",
            self.type_name, self.operation
        )
    }
}
