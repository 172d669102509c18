//! Signature help for the call whose argument list is open at the cursor.

use super::document::OpenDocument;
use crate::base::Position;
use crate::hir::{Callable, ChainResolver, KnowledgeBase, ScriptFunctions, extract_chain_with_args};
use crate::parser::is_inside_string_or_comment;

/// Characters that should trigger a signature help request.
pub const SIGNATURE_HELP_TRIGGERS: &[char] = &['(', ','];

/// One overload of the called function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureInformation {
    /// `returnType name(params)`, or `name(params)` for constructors.
    pub label: String,
    /// Rendered parameters, in order.
    pub parameters: Vec<String>,
    /// Index of the argument being typed. May exceed `parameters.len()`.
    pub active_parameter: usize,
}

/// Every overload of the call at the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureHelp {
    /// Overloads, ascending by parameter count.
    pub signatures: Vec<SignatureInformation>,
    pub active_signature: usize,
    pub active_parameter: usize,
}

impl SignatureHelp {
    /// Help for `callable` with the argument at `active_parameter` being typed.
    ///
    /// No overload is chosen by argument types. The active signature is the
    /// first overload that has a parameter at `active_parameter`.
    pub fn new(callable: &Callable, active_parameter: usize) -> Self {
        let signatures = callable
            .signatures()
            .iter()
            .map(|signature| SignatureInformation {
                label: callable.signature_label(signature),
                parameters: signature.param_labels(),
                active_parameter,
            })
            .collect();

        let active_signature = callable
            .signatures()
            .iter()
            .position(|signature| signature.arity() > active_parameter)
            .unwrap_or(0);

        Self {
            signatures,
            active_signature,
            active_parameter,
        }
    }
}

/// Get signature help at a position.
///
/// Returns `None` outside an argument list, inside strings and comments, or
/// when the called function cannot be resolved.
pub fn signature_help(
    knowledge: &KnowledgeBase,
    document: &OpenDocument,
    position: Position,
) -> Option<SignatureHelp> {
    let text = document.text();
    let offset = position.to_offset(text);
    if is_inside_string_or_comment(&text[..offset]) {
        return None;
    }

    let call = extract_chain_with_args(document.script().sanitized_to(offset))?;

    let functions = ScriptFunctions::from_documents(knowledge.functions(), document.scripts());
    let scope = document.scope_at(offset);
    let resolver = ChainResolver::new(knowledge, &functions, &scope);
    let callable = resolver.resolve_subroutine(&call.chain)?;

    if callable.signatures().is_empty() {
        return None;
    }
    Some(SignatureHelp::new(callable, call.active_parameter()))
}
