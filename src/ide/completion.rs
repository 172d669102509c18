//! Completion suggestions implementation.

use std::sync::Arc;

use super::document::OpenDocument;
use crate::base::Position;
use crate::base::constants::PRIMITIVES;
use crate::base::text_utils::trailing_word_start;
use crate::hir::{
    Callable, CallableKind, ChainResolver, EnumMember, KnowledgeBase, Object, Property,
    ScriptFunctions, Variable, extract_chain,
};
use crate::parser::is_inside_string_or_comment;

/// Characters that should trigger a completion request.
pub const COMPLETION_TRIGGERS: &[char] = &['.'];

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Method,
    Function,
    Variable,
    Class,
    Property,
    Keyword,
    EnumMember,
    Event,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Method => 2,
            CompletionKind::Function => 3,
            CompletionKind::Variable => 6,
            CompletionKind::Class => 7,
            CompletionKind::Property => 10,
            CompletionKind::Keyword => 14,
            CompletionKind::EnumMember => 20,
            CompletionKind::Event => 23,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text shown in the list.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// Whether `insert_text` is a snippet with `$0` style tab stops.
    pub is_snippet: bool,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            insert_text: None,
            is_snippet: false,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    /// Set a snippet as the insert text.
    pub fn with_snippet(mut self, snippet: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(snippet.into());
        self.is_snippet = true;
        self
    }

    pub fn from_object(object: &Object) -> Self {
        Self::new(object.name.clone(), CompletionKind::Class)
    }

    pub fn from_property(property: &Property) -> Self {
        Self::new(property.name.clone(), CompletionKind::Property).with_detail(property.ty.clone())
    }

    pub fn from_variable(variable: &Variable) -> Self {
        Self::new(variable.to_string(), CompletionKind::Variable).with_detail(variable.ty.clone())
    }

    /// Enum members show their full namespace but insert only the first
    /// namespace segment.
    pub fn from_enum_member(member: &EnumMember) -> Self {
        Self::new(member.to_string(), CompletionKind::EnumMember)
            .with_insert_text(member.insert_text())
    }

    /// Methods, functions and hooks. Hooks insert a full implementation.
    pub fn from_callable(callable: &Callable) -> Self {
        if let Some(snippet) = callable.hook_snippet() {
            return Self::new(callable.to_string(), CompletionKind::Event).with_snippet(snippet);
        }

        let item = match callable.kind {
            CallableKind::Method { .. } => Self::new(callable.name.clone(), CompletionKind::Method),
            _ => Self::new(callable.to_string(), CompletionKind::Function),
        };
        match callable.signatures().first() {
            Some(signature) => item.with_detail(callable.signature_label(signature)),
            None => item,
        }
    }
}

/// Completion context, decided from the line text before the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompletionContext {
    /// After `expr.` with an optional partial member name.
    MemberAccess,
    /// At the start of a line where a hook implementation can begin.
    HookOrGeneral,
    /// Anywhere else.
    General,
}

fn determine_context(line: &str) -> CompletionContext {
    let before_word = line[..trailing_word_start(line)].trim_end();
    if before_word.ends_with('.') {
        return CompletionContext::MemberAccess;
    }

    let before_word = before_word.trim_start();
    if before_word.is_empty() || PRIMITIVES.contains(&before_word) {
        CompletionContext::HookOrGeneral
    } else {
        CompletionContext::General
    }
}

/// Get completion suggestions at a position.
///
/// # Arguments
/// * `knowledge` - The loaded knowledge base
/// * `document` - The document containing the cursor
/// * `position` - Cursor position
///
/// # Returns
/// List of completion suggestions; empty inside strings and comments.
pub fn completions(
    knowledge: &KnowledgeBase,
    document: &OpenDocument,
    position: Position,
) -> Vec<CompletionItem> {
    let text = document.text();
    let offset = position.to_offset(text);
    if is_inside_string_or_comment(&text[..offset]) {
        return Vec::new();
    }

    let functions = ScriptFunctions::from_documents(knowledge.functions(), document.scripts());
    let scope = document.scope_at(offset);

    match determine_context(position.line_prefix_of(text)) {
        CompletionContext::MemberAccess => {
            let chain = extract_chain(document.script().sanitized_to(offset));
            if chain.is_empty() {
                return Vec::new();
            }
            let resolver = ChainResolver::new(knowledge, &functions, &scope);
            match resolver.resolve_object(&chain) {
                Some(object) => member_completions(object),
                None => Vec::new(),
            }
        }
        CompletionContext::HookOrGeneral => {
            let mut items: Vec<_> = knowledge
                .hooks()
                .iter()
                .map(CompletionItem::from_callable)
                .collect();
            items.extend(general_completions(knowledge, &functions, &scope.visible_variable_names()));
            items
        }
        CompletionContext::General => {
            general_completions(knowledge, &functions, &scope.visible_variable_names())
        }
    }
}

/// Methods then properties of `object`.
fn member_completions(object: &Object) -> Vec<CompletionItem> {
    object
        .methods()
        .map(CompletionItem::from_callable)
        .chain(object.properties().iter().map(CompletionItem::from_property))
        .collect()
}

fn general_completions(
    knowledge: &KnowledgeBase,
    functions: &ScriptFunctions<'_>,
    variable_names: &[Arc<str>],
) -> Vec<CompletionItem> {
    let mut items = Vec::new();
    items.extend(knowledge.enums().iter().map(CompletionItem::from_enum_member));
    items.extend(functions.iter().map(CompletionItem::from_callable));
    items.extend(knowledge.variables().iter().map(CompletionItem::from_variable));
    items.extend(knowledge.objects().map(CompletionItem::from_object));
    items.extend(
        variable_names
            .iter()
            .map(|name| CompletionItem::new(name.clone(), CompletionKind::Variable)),
    );
    items.extend(keyword_completions());
    items
}

/// Get keyword completions.
fn keyword_completions() -> impl Iterator<Item = CompletionItem> {
    PRIMITIVES
        .iter()
        .map(|keyword| CompletionItem::new(*keyword, CompletionKind::Keyword))
}
