//! Typed, named declarations that are not callable.

use std::fmt;
use std::sync::Arc;

/// A global variable, either from the manual or from a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub namespace: Option<Arc<str>>,
    /// Declared type spelling.
    pub ty: Arc<str>,
    pub name: Arc<str>,
}

impl Variable {
    pub fn new(
        namespace: Option<Arc<str>>,
        ty: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            namespace,
            ty: ty.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{namespace}::{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A property of an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Name of the owning object.
    pub owner: Arc<str>,
    pub ty: Arc<str>,
    pub name: Arc<str>,
}

impl Property {
    pub fn new(
        owner: impl Into<Arc<str>>,
        ty: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            owner: owner.into(),
            ty: ty.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A member of an enum. The namespace groups members for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub namespace: Arc<str>,
    pub name: Arc<str>,
}

impl EnumMember {
    pub fn new(namespace: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Text to insert: only the first namespace segment qualifies the member.
    pub fn insert_text(&self) -> String {
        let outer = self.namespace.split("::").next().unwrap_or_default();
        format!("{outer}::{}", self.name)
    }
}

impl fmt::Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.namespace, self.name)
    }
}
