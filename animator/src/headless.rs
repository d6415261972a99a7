//! An in-memory document for running the animator without a browser.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::{Scan, Surface, TargetId, TargetKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub text: String,
    /// Every text written through the surface, oldest first.
    pub text_writes: Vec<String>,
}

impl Element {
    pub fn new(classes: &str) -> Self {
        Self {
            classes: classes.split_whitespace().map(String::from).collect(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn matches(&self, selector: &str) -> bool {
        selector
            .strip_prefix('.')
            .is_some_and(|class| self.has_class(class))
    }
}

/// Elements of the current page. Ids are never reused, including after
/// [`clear`](Self::clear).
#[derive(Default)]
pub struct HeadlessDocument {
    next_id: Cell<u64>,
    elements: RefCell<BTreeMap<TargetId, Element>>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, element: Element) -> TargetId {
        let id = TargetId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.elements.borrow_mut().insert(id, element);
        id
    }

    /// Drop every element, as a navigation replaces the page.
    pub fn clear(&self) {
        self.elements.borrow_mut().clear();
    }

    pub fn element(&self, target: TargetId) -> Option<Element> {
        self.elements.borrow().get(&target).cloned()
    }

    /// Find the tagged elements, in insertion order.
    pub fn scan(&self) -> Scan {
        let mut scan = Scan::default();
        for (id, element) in self.elements.borrow().iter() {
            for kind in TargetKind::ALL {
                if element.matches(kind.selector()) {
                    scan.targets_mut(kind).push(*id);
                }
            }
        }
        scan
    }

    fn with_element(&self, target: TargetId, f: impl FnOnce(&mut Element)) {
        if let Some(element) = self.elements.borrow_mut().get_mut(&target) {
            f(element);
        }
    }
}

impl Surface for HeadlessDocument {
    fn classes(&self, target: TargetId) -> Vec<String> {
        self.element(target).map(|e| e.classes).unwrap_or_default()
    }

    fn attribute(&self, target: TargetId, name: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(&target)?
            .attributes
            .get(name)
            .cloned()
    }

    fn text(&self, target: TargetId) -> String {
        self.element(target).map(|e| e.text).unwrap_or_default()
    }

    fn add_class(&self, target: TargetId, class: &str) {
        self.with_element(target, |element| {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        });
    }

    fn set_style(&self, target: TargetId, property: &str, value: &str) {
        self.with_element(target, |element| {
            element
                .styles
                .insert(property.to_string(), value.to_string());
        });
    }

    fn set_text(&self, target: TargetId, text: &str) {
        self.with_element(target, |element| {
            element.text = text.to_string();
            element.text_writes.push(text.to_string());
        });
    }
}
