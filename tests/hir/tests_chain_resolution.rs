//! Chain resolution through the public API, from cursor text to result.

use kagscript::hir::{
    CallableKind, ChainResolver, ScopeContext, ScriptDocument, ScriptFunctions, Segment,
    extract_chain, extract_chain_with_args,
};

use crate::helpers::cursor::sanitized_to_cursor;
use crate::helpers::knowledge_fixtures::blob_knowledge;

const SCRIPT: &str = "\
Blob@ target;

void onTick(Blob@ this)
{
    Blob b;
    <CURSOR>
}
";

fn ident(name: &str) -> Segment {
    Segment::Ident(name.to_string())
}

fn call(name: &str) -> Segment {
    Segment::Call(name.to_string())
}

/// Run `f` with a resolver scoped at the cursor of `source`.
fn resolve_in<R>(source: &str, f: impl FnOnce(&ChainResolver<'_>) -> R) -> R {
    let kb = blob_knowledge();
    let text = source.replace("<CURSOR>", "");
    let document = ScriptDocument::parse(&text);
    let functions = ScriptFunctions::from_documents(kb.functions(), [&document]);
    let scope = ScopeContext::new(&sanitized_to_cursor(source), document.global_variables());
    f(&ChainResolver::new(&kb, &functions, &scope))
}

// =============================================================================
// RESOLUTION OUTCOMES
// =============================================================================

#[test]
fn test_property_of_local_variable() {
    resolve_in(SCRIPT, |resolver| {
        let property = resolver
            .resolve_property(&[ident("b"), ident("health")])
            .expect("b.health should resolve");
        assert_eq!(property.name.as_ref(), "health");
        assert_eq!(property.ty.as_ref(), "f32");
    });
}

#[test]
fn test_fail_fast_on_unknown_member() {
    resolve_in(SCRIPT, |resolver| {
        let chain = [ident("b"), ident("nonexistent"), ident("health")];
        assert!(resolver.resolve_property(&chain).is_none());
        assert!(resolver.resolve_object(&chain).is_none());
        assert!(resolver.resolve_type(&chain).is_none());
    });
}

#[test]
fn test_constructor_call_yields_object() {
    resolve_in(SCRIPT, |resolver| {
        let object = resolver.resolve_object(&[call("Blob")]).unwrap();
        assert_eq!(object.name.as_ref(), "Blob");
    });
}

#[test]
fn test_global_and_parameter_receivers() {
    resolve_in(SCRIPT, |resolver| {
        assert_eq!(
            resolver
                .resolve_object(&[ident("target"), call("getSprite")])
                .map(|o| o.name.as_ref()),
            Some("Sprite")
        );
        assert_eq!(
            resolver
                .resolve_object(&[ident("this"), ident("sprite")])
                .map(|o| o.name.as_ref()),
            Some("Sprite")
        );
    });
}

#[test]
fn test_array_types_resolve_to_array_object() {
    resolve_in(SCRIPT, |resolver| {
        let object = resolver
            .resolve_object(&[ident("b"), call("getAttached")])
            .unwrap();
        assert_eq!(object.name.as_ref(), "array");
    });
}

#[test]
fn test_subroutine_of_final_segment() {
    resolve_in(SCRIPT, |resolver| {
        let hit = resolver
            .resolve_subroutine(&[ident("b"), call("server_Hit")])
            .unwrap();
        assert!(matches!(&hit.kind, CallableKind::Method { owner } if owner.as_ref() == "Blob"));
        let arities: Vec<_> = hit.signatures().iter().map(|s| s.arity()).collect();
        assert_eq!(arities, vec![1, 2]);

        let clamp = resolver.resolve_subroutine(&[call("Maths::Clamp")]).unwrap();
        assert_eq!(clamp.signatures()[0].arity(), 3);
    });
}

// =============================================================================
// FROM CURSOR TEXT
// =============================================================================

#[test]
fn test_extracted_chain_resolves() {
    let source = "void f(Blob@ blob)\n{\n\tblob.getSprite().<CURSOR>";
    let chain = extract_chain(&sanitized_to_cursor(source));
    assert_eq!(chain, vec![ident("blob"), call("getSprite")]);

    resolve_in(source, |resolver| {
        assert_eq!(
            resolver.resolve_object(&chain).map(|o| o.name.as_ref()),
            Some("Sprite")
        );
    });
}

#[test]
fn test_comment_between_segments_is_ignored() {
    let source = "void f(Blob@ blob)\n{\n\tblob /* sprite */ .sprite.<CURSOR>";
    let chain = extract_chain(&sanitized_to_cursor(source));
    assert_eq!(chain, vec![ident("blob"), ident("sprite")]);
}

#[test]
fn test_open_call_with_nested_arguments() {
    let source = "void f(Blob@ blob)\n{\n\tblob.server_Hit(getLocalBlob(), Maths::Clamp(a, b, c), <CURSOR>";
    let call_site = extract_chain_with_args(&sanitized_to_cursor(source)).unwrap();
    assert_eq!(call_site.chain, vec![ident("blob"), call("server_Hit")]);
    assert_eq!(call_site.active_parameter(), 2);

    resolve_in(source, |resolver| {
        let hit = resolver.resolve_subroutine(&call_site.chain).unwrap();
        assert_eq!(hit.name.as_ref(), "server_Hit");
    });
}
