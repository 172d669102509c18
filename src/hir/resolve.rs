//! Chain resolution: walking a chain segment by segment to the object or
//! callable it ends in.
//!
//! Every segment must resolve to a declared type. The first segment that
//! does not ends the walk with no result; a partially resolved chain never
//! produces a guess.

use super::callable::Callable;
use super::chain::Segment;
use super::declaration::Property;
use super::knowledge::KnowledgeBase;
use super::object::Object;
use super::scope::ScopeContext;
use super::script::ScriptFunctions;
use super::types::true_type;

/// State after walking a chain.
#[derive(Debug, Clone, Copy, Default)]
struct Walk<'a> {
    /// Raw declared type of the last segment.
    ty: Option<&'a str>,
    /// Object named by the normalized type, if the knowledge base has one.
    object: Option<&'a Object>,
    /// Callable resolved by the last segment, if it was a call.
    subroutine: Option<&'a Callable>,
}

/// Resolves chains against one knowledge base, scope and function overlay.
#[derive(Debug, Clone, Copy)]
pub struct ChainResolver<'a> {
    knowledge: &'a KnowledgeBase,
    functions: &'a ScriptFunctions<'a>,
    scope: &'a ScopeContext,
}

impl<'a> ChainResolver<'a> {
    pub fn new(
        knowledge: &'a KnowledgeBase,
        functions: &'a ScriptFunctions<'a>,
        scope: &'a ScopeContext,
    ) -> Self {
        Self {
            knowledge,
            functions,
            scope,
        }
    }

    /// The object the chain evaluates to.
    ///
    /// `None` if any segment fails to resolve, or if the final type is not a
    /// known object (a primitive, say).
    pub fn resolve_object(&self, chain: &[Segment]) -> Option<&'a Object> {
        self.walk(chain)?.object
    }

    /// The callable invoked by the final segment.
    ///
    /// `None` if any segment fails to resolve or the final segment is not a
    /// call. The whole overload set is returned; no overload is picked.
    pub fn resolve_subroutine(&self, chain: &[Segment]) -> Option<&'a Callable> {
        self.walk(chain)?.subroutine
    }

    /// Declared type of the value the chain evaluates to.
    pub fn resolve_type(&self, chain: &[Segment]) -> Option<&'a str> {
        self.walk(chain)?.ty
    }

    /// The property accessed by the final segment of a member chain.
    pub fn resolve_property(&self, chain: &[Segment]) -> Option<&'a Property> {
        let (Segment::Ident(name), receiver) = chain.split_last()? else {
            return None;
        };
        if receiver.is_empty() {
            return None;
        }
        self.resolve_object(receiver)?.property(name)
    }

    fn walk(&self, chain: &[Segment]) -> Option<Walk<'a>> {
        if chain.is_empty() {
            return None;
        }

        let mut state = Walk::default();
        for (index, segment) in chain.iter().enumerate() {
            let Some((ty, subroutine)) = self.step(index, segment, state.object) else {
                tracing::trace!("[CHAIN] Unresolved segment {index} `{segment}`");
                return None;
            };
            state = Walk {
                ty: Some(ty),
                object: self.knowledge.object(true_type(ty)),
                subroutine,
            };
        }
        Some(state)
    }

    /// Declared type of one segment, and the callable if it is a call.
    fn step(
        &self,
        index: usize,
        segment: &Segment,
        object: Option<&'a Object>,
    ) -> Option<(&'a str, Option<&'a Callable>)> {
        match segment {
            Segment::Call(name) if index == 0 => {
                let callable = self.constructor(name).or_else(|| self.function(name))?;
                Some((callable.ty.as_ref(), Some(callable)))
            }
            Segment::Call(name) => {
                let method = object?.method(name)?;
                Some((method.ty.as_ref(), Some(method)))
            }
            Segment::Ident(name) if index == 0 => Some((self.variable_type(name)?, None)),
            Segment::Ident(name) => Some((object?.property(name)?.ty.as_ref(), None)),
        }
    }

    /// A constructor call evaluates to the constructed object.
    fn constructor(&self, name: &str) -> Option<&'a Callable> {
        self.knowledge.object(name)?.constructor()
    }

    /// Free function, `Namespace::name` selecting a namespaced one.
    fn function(&self, name: &str) -> Option<&'a Callable> {
        let (namespace, name) = match name.rsplit_once("::") {
            Some((namespace, name)) => {
                let namespace = namespace.trim_start_matches("::");
                ((!namespace.is_empty()).then_some(namespace), name)
            }
            None => (None, name),
        };
        self.functions.get(namespace, name)
    }

    fn variable_type(&self, name: &str) -> Option<&'a str> {
        self.scope.resolve_local_type(name).or_else(|| {
            self.knowledge
                .variable(name)
                .map(|variable| variable.ty.as_ref())
        })
    }
}
