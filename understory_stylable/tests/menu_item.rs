// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_stylable` crate.
//!
//! These model a pop-up menu: entries are both stylable and interactive, and
//! live in a table owned by the menu, which resolves parent handles.

use std::borrow::Cow;

use understory_stylable::{
    ActivationState, ClassList, InteractiveItem, PseudoClassList, StyleState, Stylable,
    TokenError, ancestors,
};

struct MenuItem {
    id: usize,
    name: &'static str,
    parent: Option<usize>,
    style: StyleState,
    activation: ActivationState<Self>,
    invalidations: u32,
    activations: Vec<usize>,
}

impl MenuItem {
    fn new(id: usize, name: &'static str, parent: Option<usize>) -> Self {
        Self {
            id,
            name,
            parent,
            style: StyleState::new(),
            activation: ActivationState::new(),
            invalidations: 0,
            activations: Vec::new(),
        }
    }
}

impl Stylable for MenuItem {
    type Key = usize;

    fn key(&self) -> usize {
        self.id
    }

    fn name(&self) -> Option<&str> {
        Some(self.name)
    }

    fn parent(&self) -> Option<usize> {
        self.parent
    }

    fn classes(&self) -> Cow<'_, ClassList> {
        Cow::Borrowed(self.style.classes())
    }

    fn set_classes(&mut self, classes: ClassList) {
        self.style.replace_classes(classes);
    }

    fn pseudo_classes(&self) -> Cow<'_, PseudoClassList> {
        Cow::Borrowed(self.style.pseudo_classes())
    }

    fn set_pseudo_classes(&mut self, pseudo_classes: PseudoClassList) {
        self.style.replace_pseudo_classes(pseudo_classes);
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}

impl InteractiveItem for MenuItem {
    fn activation_state(&self) -> Option<&ActivationState<Self>> {
        Some(&self.activation)
    }

    fn activation_state_mut(&mut self) -> Option<&mut ActivationState<Self>> {
        Some(&mut self.activation)
    }

    // Disabled entries are greyed out by the theme through `:disabled`.
    fn set_enabled(&mut self, enabled: bool) {
        if !self.activation.set_enabled(enabled) {
            return;
        }
        let result = if enabled {
            self.remove_pseudo_class("disabled")
        } else {
            self.add_pseudo_class("disabled")
        };
        debug_assert_eq!(result, Ok(true), "`disabled` is a valid pseudo-class");
    }
}

fn menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(0, "popup-menu", None),
        MenuItem::new(1, "section", Some(0)),
        MenuItem::new(2, "open", Some(1)),
        MenuItem::new(3, "close", Some(1)),
    ]
}

#[test]
fn class_scenario() {
    let mut item = MenuItem::new(0, "item", None);
    assert_eq!(item.classes_string(), "");

    item.add_class("hover").unwrap();
    assert_eq!(item.classes_string(), "hover");
    item.add_class("active").unwrap();
    assert_eq!(item.classes_string(), "hover.active");
    item.remove_class("hover").unwrap();
    assert_eq!(item.classes_string(), "active");

    assert_eq!(item.invalidations, 3);
    assert_eq!(item.style.revision(), 3);
}

#[test]
fn pseudo_class_scenario() {
    let mut item = MenuItem::new(0, "item", None);
    item.set_pseudo_classes_str("first:last");

    item.remove_pseudo_class("first").unwrap();
    assert_eq!(item.pseudo_classes_string(), "last");
    item.remove_pseudo_class("last").unwrap();
    assert_eq!(item.pseudo_classes_string(), "");
}

#[test]
fn rule_engine_strings_are_normalized() {
    let mut item = MenuItem::new(0, "item", None);
    assert!(item.set_classes_str(".menu..entry.menu."));
    assert_eq!(item.classes_string(), "menu.entry");

    // Same membership, different order: nothing to recompute.
    assert!(!item.set_classes_str("entry.menu"));
    assert_eq!(item.invalidations, 1);
}

#[test]
fn invalid_tokens_leave_item_untouched() {
    let mut item = MenuItem::new(0, "item", None);
    item.add_class("entry").unwrap();

    assert_eq!(item.add_class(""), Err(TokenError::Empty));
    assert_eq!(
        item.remove_class("entry.extra"),
        Err(TokenError::ContainsSeparator { separator: '.' })
    );
    assert_eq!(
        item.add_pseudo_class("hover:focus"),
        Err(TokenError::ContainsSeparator { separator: ':' })
    );

    assert_eq!(item.classes_string(), "entry");
    assert_eq!(item.pseudo_classes_string(), "");
    assert_eq!(item.invalidations, 1);
}

#[test]
fn disabling_greys_out_and_blocks_activation() {
    let mut item = MenuItem::new(2, "open", Some(1));
    item.connect_activated(|item| item.activations.push(item.id));

    item.set_enabled(false);
    assert!(item.has_pseudo_class("disabled"));
    assert!(!item.activate());
    assert!(item.activations.is_empty());

    item.set_enabled(true);
    assert!(!item.has_pseudo_class("disabled"));
    assert!(item.activate());
    assert_eq!(item.activations, [2]);
}

#[test]
fn listener_disabling_item_does_not_cancel_other_listeners() {
    let mut item = MenuItem::new(3, "close", Some(1));
    item.connect_activated(|item| item.set_enabled(false));
    item.connect_activated(|item| item.activations.push(item.id));

    assert!(item.activate());
    assert_eq!(item.activations, [3]);
    assert!(item.has_pseudo_class("disabled"));

    assert!(!item.activate());
    assert_eq!(item.activations, [3]);
}

#[test]
fn ancestors_resolve_through_the_menu_table() {
    let items = menu();
    let names: Vec<&str> = ancestors(&items[2], |key: usize| items.get(key))
        .filter_map(Stylable::name)
        .collect();
    assert_eq!(names, ["section", "popup-menu"]);
}

#[test]
fn removed_parent_is_not_resolved() {
    let mut items = menu();
    // The section is destroyed; its children still carry the stale handle.
    items.truncate(1);
    let orphan = MenuItem::new(2, "open", Some(1));

    assert_eq!(ancestors(&orphan, |key: usize| items.get(key)).count(), 0);
}
