//! Fabricated knowledge bases for resolution tests.

use std::path::Path;

use kagscript::Position;
use kagscript::hir::{Callable, EnumMember, KnowledgeBase, Object, Signature, Variable};
use kagscript::ide::{AnalysisHost, CompletionItem, SignatureHelp};
use kagscript::project::KnowledgeHandle;

use super::cursor::split_cursor;

pub const DOCUMENT_PATH: &str = "Scripts/Test.as";

/// `Blob` with `health: f32`, two constructors and a sprite, plus a few
/// engine functions, hooks, variables and enums.
pub fn blob_knowledge() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();

    let mut blob = Object::new("Blob");
    blob.add_property("f32", "health");
    blob.add_property("Sprite@", "sprite");
    blob.add_constructor_signature(Signature::parse(""));
    blob.add_constructor_signature(Signature::parse("const string &in name, u16 team"));
    blob.add_method_signature("Sprite@", "getSprite", Signature::parse(""));
    blob.add_method_signature("Blob@[]@", "getAttached", Signature::parse(""));
    blob.add_method_signature("void", "server_Hit", Signature::parse("Blob@ target, f32 damage"));
    blob.add_method_signature("void", "server_Hit", Signature::parse("Blob@ target"));
    kb.insert_object(blob);

    let mut sprite = Object::new("Sprite");
    sprite.add_property("bool", "visible");
    sprite.add_method_signature("void", "SetZ", Signature::parse("f32 z"));
    kb.insert_object(sprite);

    let mut array = Object::new("array");
    array.add_method_signature("uint", "length", Signature::parse(""));
    kb.insert_object(array);

    let functions = kb.functions_mut();
    functions.add_signature(None, "Blob@", "getLocalBlob", Signature::parse(""));
    functions.add_signature(None, "void", "print", Signature::parse("const string &in text"));
    functions.add_signature(Some("Maths"), "f32", "Clamp", Signature::parse("f32 v, f32 lo, f32 hi"));

    kb.add_hook(Callable::hook("void", "onInit", Signature::parse("Blob@ this")));
    kb.add_hook(Callable::hook("void", "onTick", Signature::parse("Blob@ this")));
    kb.add_variable(Variable::new(None, "Blob@", "localBlob"));
    kb.add_enum_member(EnumMember::new("Team", "red"));
    kb
}

/// Host with `source` open at [`DOCUMENT_PATH`] and `knowledge` loaded.
pub fn host_with(knowledge: KnowledgeBase, source: &str) -> AnalysisHost {
    let mut host = AnalysisHost::with_knowledge(KnowledgeHandle::with_knowledge(knowledge));
    host.set_file_content(DOCUMENT_PATH, source);
    host
}

/// Completions at the `<CURSOR>` marker against [`blob_knowledge`].
pub fn completions_at(source: &str) -> Vec<CompletionItem> {
    let (text, position) = split_cursor(source);
    completions_in(&mut host_with(blob_knowledge(), &text), position)
}

pub fn completions_in(host: &mut AnalysisHost, position: Position) -> Vec<CompletionItem> {
    host.analysis().completions(Path::new(DOCUMENT_PATH), position)
}

/// Completion labels at the `<CURSOR>` marker.
pub fn completion_labels(source: &str) -> Vec<String> {
    completions_at(source)
        .iter()
        .map(|item| item.label.to_string())
        .collect()
}

/// Signature help at the `<CURSOR>` marker against [`blob_knowledge`].
pub fn signature_help_at(source: &str) -> Option<SignatureHelp> {
    let (text, position) = split_cursor(source);
    let mut host = host_with(blob_knowledge(), &text);
    host.analysis()
        .signature_help(Path::new(DOCUMENT_PATH), position)
}
