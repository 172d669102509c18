//! Callables: functions, methods, constructors and engine hooks.
//!
//! A callable owns its overload set. Overloads are kept sorted by ascending
//! parameter count so hosts can display them in arity order without sorting.

use std::fmt;
use std::sync::Arc;

use super::signature::Signature;

/// Which kind of callable this is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallableKind {
    /// A free function, optionally inside a namespace.
    Function { namespace: Option<Arc<str>> },
    /// A method; `owner` names the object it belongs to.
    Method { owner: Arc<str> },
    /// An object constructor; the callable's type is the object name.
    Constructor,
    /// An engine hook a script can implement.
    Hook,
}

/// A named callable with its overload set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callable {
    pub kind: CallableKind,
    /// Declared return type spelling.
    pub ty: Arc<str>,
    pub name: Arc<str>,
    signatures: Vec<Signature>,
}

impl Callable {
    fn new(kind: CallableKind, ty: Arc<str>, name: Arc<str>) -> Self {
        Self {
            kind,
            ty,
            name,
            signatures: Vec::new(),
        }
    }

    pub fn function(
        namespace: Option<Arc<str>>,
        ty: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
    ) -> Self {
        Self::new(CallableKind::Function { namespace }, ty.into(), name.into())
    }

    pub fn method(
        owner: impl Into<Arc<str>>,
        ty: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
    ) -> Self {
        Self::new(
            CallableKind::Method {
                owner: owner.into(),
            },
            ty.into(),
            name.into(),
        )
    }

    pub fn constructor(object: impl Into<Arc<str>>) -> Self {
        let object = object.into();
        Self::new(CallableKind::Constructor, object.clone(), object)
    }

    pub fn hook(ty: impl Into<Arc<str>>, name: impl Into<Arc<str>>, signature: Signature) -> Self {
        let mut hook = Self::new(CallableKind::Hook, ty.into(), name.into());
        hook.signatures.push(signature);
        hook
    }

    /// Add an overload, keeping overloads ordered by ascending arity.
    ///
    /// Overloads of equal arity stay in insertion order.
    pub fn add_signature(&mut self, signature: Signature) {
        let at = self
            .signatures
            .partition_point(|existing| existing.arity() <= signature.arity());
        self.signatures.insert(at, signature);
    }

    /// All overloads, ascending by parameter count.
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn namespace(&self) -> Option<&str> {
        match &self.kind {
            CallableKind::Function { namespace } => namespace.as_deref(),
            _ => None,
        }
    }

    /// Label shown for an overload in signature help.
    pub fn signature_label(&self, signature: &Signature) -> String {
        match self.kind {
            CallableKind::Constructor => format!("{}({signature})", self.name),
            _ => format!("{} {}({signature})", self.ty, self.name),
        }
    }

    /// Labels of every overload, in overload order.
    pub fn signature_labels(&self) -> Vec<String> {
        self.signatures
            .iter()
            .map(|signature| self.signature_label(signature))
            .collect()
    }

    /// Snippet inserting a hook implementation with the cursor in its body.
    pub fn hook_snippet(&self) -> Option<String> {
        if self.kind != CallableKind::Hook {
            return None;
        }
        Some(format!("{self}\n{{\n\t$0\n}}"))
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CallableKind::Function {
                namespace: Some(namespace),
            } => write!(f, "{namespace}::{}", self.name),
            CallableKind::Hook => {
                let signature = self.signatures.first().cloned().unwrap_or_default();
                write!(f, "{} {}({signature})", self.ty, self.name)
            }
            _ => write!(f, "{}", self.name),
        }
    }
}
