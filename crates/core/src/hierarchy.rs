//! Declared single-inheritance type hierarchy.
//!
//! The host application tells us which types exist and what each one
//! extends. Presenter resolution and controller filtering both walk this
//! table instead of inspecting types at runtime.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeHierarchy {
    parents: IndexMap<String, Option<String>>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `ty` with an optional parent. Re-declaring replaces the parent.
    pub fn declare(&mut self, ty: impl Into<String>, parent: Option<&str>) -> &mut Self {
        self.parents.insert(ty.into(), parent.map(str::to_string));
        self
    }

    /// Builder-style variant of [`declare`](Self::declare).
    pub fn with(mut self, ty: impl Into<String>, parent: Option<&str>) -> Self {
        self.declare(ty, parent);
        self
    }

    pub fn contains(&self, ty: &str) -> bool {
        self.parents.contains_key(ty)
    }

    pub fn parent(&self, ty: &str) -> Option<&str> {
        self.parents.get(ty).and_then(|p| p.as_deref())
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Merge another hierarchy into this one; its declarations win.
    pub fn extend(&mut self, other: TypeHierarchy) {
        self.parents.extend(other.parents);
    }

    /// Most-specific-first priority list: `ty`, its parent, grandparent, ...
    ///
    /// `ty` itself is always yielded, even when undeclared. The walk stops at
    /// the first repeated type.
    pub fn ancestry<'a>(&'a self, ty: &'a str) -> Ancestry<'a> {
        Ancestry {
            hierarchy: self,
            next: Some(ty),
            seen: HashSet::new(),
        }
    }

    /// Reflexive: every type descends from itself.
    pub fn descends_from(&self, ty: &str, base: &str) -> bool {
        self.ancestry(ty).any(|ancestor| ancestor == base)
    }
}

pub struct Ancestry<'a> {
    hierarchy: &'a TypeHierarchy,
    next: Option<&'a str>,
    seen: HashSet<&'a str>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.seen.insert(current) {
            tracing::warn!("Cycle in type hierarchy at {}", current);
            return None;
        }
        self.next = self.hierarchy.parent(current);
        Some(current)
    }
}
