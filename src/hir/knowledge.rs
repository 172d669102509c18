//! The knowledge base: every object, function, variable, enum and hook the
//! engine documents.
//!
//! Built once by the manual loader and then only read. A reload builds a new
//! value and replaces the old one wholesale (see
//! [`KnowledgeHandle`](crate::project::KnowledgeHandle)).

use std::sync::Arc;

use indexmap::IndexMap;

use super::callable::Callable;
use super::declaration::{EnumMember, Variable};
use super::object::Object;
use super::signature::Signature;

/// Key of a free function: `namespace::name`, with an empty namespace for
/// global functions (`::name`).
pub fn function_key(namespace: Option<&str>, name: &str) -> String {
    format!("{}::{name}", namespace.unwrap_or_default())
}

/// Free functions keyed by [`function_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionTable {
    functions: IndexMap<Arc<str>, Callable>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, namespace: Option<&str>, name: &str) -> Option<&Callable> {
        self.get_by_key(&function_key(namespace, name))
    }

    pub fn get_by_key(&self, key: &str) -> Option<&Callable> {
        self.functions.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.functions.contains_key(key)
    }

    /// Add an overload, creating the function on first use of its key.
    pub fn add_signature(
        &mut self,
        namespace: Option<&str>,
        ty: &str,
        name: &str,
        signature: Signature,
    ) {
        let key: Arc<str> = Arc::from(function_key(namespace, name));
        self.functions
            .entry(key)
            .or_insert_with(|| Callable::function(namespace.map(Arc::<str>::from), ty, name))
            .add_signature(signature);
    }

    /// Insert a whole callable under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<Arc<str>>, callable: Callable) {
        self.functions.insert(key.into(), callable);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Callable)> {
        self.functions.iter().map(|(key, f)| (key.as_ref(), f))
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Aggregate root of everything loaded from the engine manual.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    objects: IndexMap<Arc<str>, Object>,
    functions: FunctionTable,
    variables: Vec<Variable>,
    enums: Vec<EnumMember>,
    hooks: Vec<Callable>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Building ====================

    /// Insert an object, replacing any object with the same name.
    pub fn insert_object(&mut self, object: Object) {
        self.objects.insert(object.name.clone(), object);
    }

    pub fn functions_mut(&mut self) -> &mut FunctionTable {
        &mut self.functions
    }

    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.push(variable);
    }

    pub fn add_enum_member(&mut self, member: EnumMember) {
        self.enums.push(member);
    }

    pub fn add_hook(&mut self, hook: Callable) {
        self.hooks.push(hook);
    }

    // ==================== Lookups ====================

    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.get(name)
    }

    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.values()
    }

    pub fn function(&self, namespace: Option<&str>, name: &str) -> Option<&Callable> {
        self.functions.get(namespace, name)
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// First global variable named `name` without a namespace.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables
            .iter()
            .find(|v| v.namespace.is_none() && v.name.as_ref() == name)
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn enums(&self) -> &[EnumMember] {
        &self.enums
    }

    pub fn hooks(&self) -> &[Callable] {
        &self.hooks
    }

    /// Number of objects and functions, for load summaries.
    pub fn summary(&self) -> (usize, usize) {
        (self.objects.len(), self.functions.len())
    }
}
