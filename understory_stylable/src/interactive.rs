// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`InteractiveItem`] capability: enabled gating and activation.
//!
//! An item is either enabled or disabled and only changes state through
//! [`InteractiveItem::set_enabled`]. [`InteractiveItem::activate`] checks the
//! state once and, if enabled, emits the `activated` signal to every listener
//! synchronously. A listener that disables the item does not stop the
//! listeners after it.

use crate::error::ContractViolation;
use crate::signal::{ListenerId, Signal};

/// Default storage for [`InteractiveItem`]: the enabled flag and the
/// `activated` signal.
///
/// Items start enabled.
pub struct ActivationState<T: ?Sized> {
    enabled: bool,
    activated: Signal<T>,
}

impl<T: ?Sized> Default for ActivationState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> core::fmt::Debug for ActivationState<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActivationState")
            .field("enabled", &self.enabled)
            .field("activated", &self.activated)
            .finish()
    }
}

impl<T: ?Sized> ActivationState<T> {
    /// Creates enabled state without listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            activated: Signal::new(),
        }
    }

    /// Returns `true` if the item is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the enabled flag, returning `true` if it changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.enabled != enabled;
        self.enabled = enabled;
        changed
    }

    /// The `activated` signal.
    #[must_use]
    pub fn activated(&self) -> &Signal<T> {
        &self.activated
    }

    /// The `activated` signal, mutably.
    pub fn activated_mut(&mut self) -> &mut Signal<T> {
        &mut self.activated
    }
}

/// An element the user can activate, such as a pop-up menu entry.
///
/// Implementers usually embed an [`ActivationState<Self>`] and return it from
/// [`activation_state`](Self::activation_state) and
/// [`activation_state_mut`](Self::activation_state_mut); every other method
/// then works through its default. [`set_enabled`](Self::set_enabled) and
/// [`is_enabled`](Self::is_enabled) may be overridden to add side effects,
/// as long as the flag keeps its meaning.
///
/// Without storage the defaults report a [`ContractViolation`] and act as a
/// disabled item.
///
/// ```rust
/// use understory_stylable::{ActivationState, InteractiveItem};
///
/// #[derive(Default)]
/// struct Entry {
///     activation: ActivationState<Self>,
///     chosen: u32,
/// }
///
/// impl InteractiveItem for Entry {
///     fn activation_state(&self) -> Option<&ActivationState<Self>> {
///         Some(&self.activation)
///     }
///     fn activation_state_mut(&mut self) -> Option<&mut ActivationState<Self>> {
///         Some(&mut self.activation)
///     }
/// }
///
/// let mut entry = Entry::default();
/// entry.connect_activated(|e| e.chosen += 1);
///
/// entry.set_enabled(false);
/// assert!(!entry.activate());
/// entry.set_enabled(true);
/// assert!(entry.activate());
/// assert_eq!(entry.chosen, 1);
/// ```
pub trait InteractiveItem {
    /// Default storage for the enabled flag and the `activated` signal.
    fn activation_state(&self) -> Option<&ActivationState<Self>> {
        None
    }

    /// Mutable access to the default storage.
    fn activation_state_mut(&mut self) -> Option<&mut ActivationState<Self>> {
        None
    }

    /// Returns `true` if the item is enabled.
    fn is_enabled(&self) -> bool {
        match self.activation_state() {
            Some(state) => state.is_enabled(),
            None => {
                ContractViolation::of::<Self>("InteractiveItem::is_enabled").report();
                false
            }
        }
    }

    /// Enables or disables the item.
    fn set_enabled(&mut self, enabled: bool) {
        match self.activation_state_mut() {
            Some(state) => {
                state.set_enabled(enabled);
            }
            None => ContractViolation::of::<Self>("InteractiveItem::set_enabled").report(),
        }
    }

    /// Subscribes to activation. Returns `None` if the item has no storage
    /// for listeners.
    fn connect_activated(&mut self, listener: impl FnMut(&mut Self) + 'static) -> Option<ListenerId>
    where
        Self: Sized,
    {
        match self.activation_state_mut() {
            Some(state) => Some(state.activated_mut().connect(listener)),
            None => {
                ContractViolation::of::<Self>("InteractiveItem::connect_activated").report();
                None
            }
        }
    }

    /// Unsubscribes a listener. Returns `false` if it was not connected.
    fn disconnect_activated(&mut self, id: ListenerId) -> bool {
        self.activation_state_mut()
            .is_some_and(|state| state.activated_mut().disconnect(id))
    }

    /// Activates the item.
    ///
    /// Returns `false` without emitting anything if the item is disabled.
    /// Otherwise emits `activated` once to all current listeners and returns
    /// `true`.
    fn activate(&mut self) -> bool {
        if !self.is_enabled() {
            return false;
        }
        if self.activation_state().is_none() {
            ContractViolation::of::<Self>("InteractiveItem::activate").report();
            return true;
        }
        let invoked = Signal::emit(self, |item| {
            item.activation_state_mut()
                .map(ActivationState::activated_mut)
        });
        log::trace!(
            "{} activated ({invoked} listeners)",
            core::any::type_name::<Self>()
        );
        true
    }
}
