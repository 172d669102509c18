//! Objects: documented engine types with their members.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::callable::Callable;
use super::declaration::Property;
use super::signature::Signature;

/// A type known to the knowledge base.
///
/// Also acts as the namespace of its members: methods and properties refer
/// back to it by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub name: Arc<str>,
    properties: Vec<Property>,
    methods: IndexMap<Arc<str>, Callable>,
    constructor: Option<Callable>,
}

impl Object {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            methods: IndexMap::new(),
            constructor: None,
        }
    }

    pub fn add_property(&mut self, ty: impl Into<Arc<str>>, name: impl Into<Arc<str>>) {
        self.properties
            .push(Property::new(self.name.clone(), ty, name));
    }

    /// Add an overload to the method `name`, creating the method on first use.
    pub fn add_method_signature(
        &mut self,
        ty: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        signature: Signature,
    ) {
        let name = name.into();
        let owner = self.name.clone();
        self.methods
            .entry(name.clone())
            .or_insert_with(|| Callable::method(owner, ty, name))
            .add_signature(signature);
    }

    /// Add a constructor overload, creating the constructor on first use.
    pub fn add_constructor_signature(&mut self, signature: Signature) {
        let name = self.name.clone();
        self.constructor
            .get_or_insert_with(|| Callable::constructor(name))
            .add_signature(signature);
    }

    /// Look up a property by name (first declared wins).
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name.as_ref() == name)
    }

    pub fn method(&self, name: &str) -> Option<&Callable> {
        self.methods.get(name)
    }

    pub fn constructor(&self) -> Option<&Callable> {
        self.constructor.as_ref()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Methods in documentation order.
    pub fn methods(&self) -> impl Iterator<Item = &Callable> {
        self.methods.values()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
