// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Presentation markers
//!
//! Consumers key conditional styling off a small fixed set of class tokens.
//! The detection side effect becomes explicit here: [`Markers`] computes the
//! toggles for a detection, and the caller applies them to a [`ClassList`] it
//! owns. Markup is expected to start from `noJs noTouch`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::detect::Detection;

pub const NO_JS: &str = "noJs";
pub const TOUCH: &str = "touch";
pub const NO_TOUCH: &str = "noTouch";
pub const TRANSFORMS_3D: &str = "transforms3d";
pub const NO_TRANSFORMS_3D: &str = "noTransforms3d";

/// An ordered, duplicate-free list of class tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Empty class list
    pub fn new() -> Self {
        ClassList::default()
    }

    /// Parse a space-separated class attribute value.
    pub fn parse(value: &str) -> Self {
        let mut list = ClassList::new();
        for class in value.split_whitespace() {
            list.add(class);
        }
        list
    }

    /// Add a class unless already present.
    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class if present.
    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|existing| existing != class);
    }

    /// Whether the class is present
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate the classes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.classes.join(" "))
    }
}

/// Class toggles a detection implies for the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Classes to add
    pub add: Vec<String>,
    /// Classes to remove
    pub remove: Vec<String>,
}

impl Markers {
    /// Compute the marker toggles for a detection.
    ///
    /// `noJs` is always removed (reaching this code proves scripting ran);
    /// touch and 3D-transform support each flip their marker pair.
    pub fn from_detection(detection: &Detection) -> Self {
        let mut markers = Markers::default();
        markers.remove.push(NO_JS.to_string());

        if detection.features.touch {
            markers.remove.push(NO_TOUCH.to_string());
            markers.add.push(TOUCH.to_string());
        } else {
            markers.remove.push(TOUCH.to_string());
            markers.add.push(NO_TOUCH.to_string());
        }

        if detection.features.transforms_3d {
            markers.remove.push(NO_TRANSFORMS_3D.to_string());
            markers.add.push(TRANSFORMS_3D.to_string());
        } else {
            markers.remove.push(TRANSFORMS_3D.to_string());
            markers.add.push(NO_TRANSFORMS_3D.to_string());
        }

        markers
    }

    /// Apply removals then additions to a class list.
    pub fn apply(&self, list: &mut ClassList) {
        for class in &self.remove {
            list.remove(class);
        }
        for class in &self.add {
            list.add(class);
        }
    }
}
