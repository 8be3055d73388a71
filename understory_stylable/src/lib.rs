// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Stylable: class state and activation for theme-driven elements.
//!
//! This crate is the state layer between visual elements and an external
//! theme rule engine. It does not render, parse CSS or walk widget trees; it
//! gives elements a uniform way to expose what selectors match against and
//! to be activated by the user.
//!
//! - [`Stylable`]: identity (key, name, parent handle) plus two independent
//!   token lists, *classes* and *pseudo-classes*, with provided single-token
//!   editing that invalidates the element on every effective change.
//! - [`InteractiveItem`]: an enabled flag gating a synchronous `activated`
//!   signal, for things like pop-up menu entries.
//!
//! ## Token lists
//!
//! Rule engines exchange classes as one string: `button.primary` for classes,
//! `hover:focus` for pseudo-classes. [`TokenList`] stores the tokens as an
//! insertion-ordered set and produces that string only at the boundary.
//! Matching is always by whole token:
//!
//! ```rust
//! use understory_stylable::{ClassList, list_contains};
//!
//! let mut classes = ClassList::new();
//! classes.insert("hover").unwrap();
//! classes.insert("active").unwrap();
//! assert_eq!(classes.to_string(), "hover.active");
//!
//! classes.remove("hover").unwrap();
//! assert_eq!(classes.to_string(), "active");
//!
//! assert!(list_contains("b", "a.b.c", '.'));
//! assert!(!list_contains("select", "selected", ':'));
//! ```
//!
//! ## Diagnostics
//!
//! Misuse never aborts the shell. Rejected tokens and missing capability
//! storage are reported through the [`log`] facade as warnings and the
//! operation degrades to a neutral result. Install any `log` backend to see
//! them.
//!
//! ## Threading
//!
//! Everything here runs on the event loop thread. Listeners are
//! `Box<dyn FnMut>` and are not required to be `Send`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod error;
mod interactive;
mod lookup;
mod signal;
mod state;
mod stylable;
#[cfg(test)]
mod test_log;
mod token;

pub use error::{ContractViolation, TokenError};
pub use interactive::{ActivationState, InteractiveItem};
pub use lookup::{Ancestors, StylableLookup, ancestors};
pub use signal::{ListenerId, Signal};
pub use state::StyleState;
pub use stylable::Stylable;
pub use token::{
    CLASS_SEPARATOR, ClassList, PSEUDO_CLASS_SEPARATOR, PseudoClassList, TokenList, list_contains,
    validate_token,
};
