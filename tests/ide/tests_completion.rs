//! Code completion tests for the IDE layer.
//!
//! These tests verify that completions are suggested while typing,
//! including inside half-written statements.

use kagscript::ide::CompletionKind;

use crate::helpers::knowledge_fixtures::{completion_labels, completions_at};

// =============================================================================
// MEMBER ACCESS
// =============================================================================

#[test]
fn test_members_of_parameter() {
    let labels = completion_labels("void onInit(Blob@ this)\n{\n\tthis.<CURSOR>\n}\n");
    assert_eq!(
        labels,
        vec!["getSprite", "getAttached", "server_Hit", "health", "sprite"]
    );
}

#[test]
fn test_members_while_typing_partial_name() {
    let labels = completion_labels("void onInit(Blob@ this)\n{\n\tthis.getSprite().Se<CURSOR>");
    assert_eq!(labels, vec!["SetZ", "visible"]);
}

#[test]
fn test_members_of_constructed_object() {
    let labels = completion_labels("void f()\n{\n\tBlob(\"name\", 0).<CURSOR>");
    assert!(labels.contains(&"health".to_string()));
}

#[test]
fn test_members_of_engine_function_result() {
    let labels = completion_labels("void f()\n{\n\tgetLocalBlob().sprite.<CURSOR>");
    assert_eq!(labels, vec!["SetZ", "visible"]);
}

#[test]
fn test_member_of_primitive_offers_nothing() {
    assert!(completion_labels("void f(Blob@ b)\n{\n\tb.health.<CURSOR>").is_empty());
}

#[test]
fn test_member_access_on_script_function_result() {
    let source = "Sprite@ findSprite()\n{\n\treturn null;\n}\nvoid f()\n{\n\tfindSprite().<CURSOR>";
    assert_eq!(completion_labels(source), vec!["SetZ", "visible"]);
}

// =============================================================================
// GENERAL AND HOOK COMPLETION
// =============================================================================

#[test]
fn test_hooks_offered_at_top_level() {
    let items = completions_at("void <CURSOR>");
    let hooks: Vec<_> = items
        .iter()
        .filter(|item| item.kind == CompletionKind::Event)
        .map(|item| item.label.as_ref())
        .collect();
    assert_eq!(hooks, vec!["void onInit(Blob@ this)", "void onTick(Blob@ this)"]);
}

#[test]
fn test_hooks_not_offered_mid_statement() {
    let items = completions_at("void f()\n{\n\tBlob@ b = <CURSOR>");
    assert!(items.iter().all(|item| item.kind != CompletionKind::Event));
}

#[test]
fn test_general_items() {
    let items = completions_at("u16 counter;\nvoid f()\n{\n\tint local;\n\tprint(<CURSOR>");
    let find = |label: &str| items.iter().find(|item| item.label.as_ref() == label);

    assert_eq!(find("Team::red").map(|i| i.kind), Some(CompletionKind::EnumMember));
    assert_eq!(find("Maths::Clamp").map(|i| i.kind), Some(CompletionKind::Function));
    assert_eq!(find("localBlob").map(|i| i.kind), Some(CompletionKind::Variable));
    assert_eq!(find("Blob").map(|i| i.kind), Some(CompletionKind::Class));
    assert_eq!(find("counter").map(|i| i.kind), Some(CompletionKind::Variable));
    assert_eq!(find("local").map(|i| i.kind), Some(CompletionKind::Variable));
    assert_eq!(find("u16").map(|i| i.kind), Some(CompletionKind::Keyword));
    assert_eq!(find("f").map(|i| i.kind), Some(CompletionKind::Function));
}

// =============================================================================
// SUPPRESSION
// =============================================================================

#[test]
fn test_no_completion_inside_string() {
    assert!(completions_at("void f(Blob@ b)\n{\n\tprint(\"b.<CURSOR>").is_empty());
}

#[test]
fn test_no_completion_inside_comments() {
    assert!(completions_at("// b.<CURSOR>").is_empty());
    assert!(completions_at("/* b.\n\t<CURSOR>").is_empty());
}

#[test]
fn test_completion_after_closed_comment() {
    let labels = completion_labels("void f(Blob@ b)\n{\n\t/* note */ b.<CURSOR>");
    assert!(labels.contains(&"health".to_string()));
}

#[test]
fn test_members_after_ternary_colon() {
    let labels = completion_labels("void f(Blob@ b, bool flag)\n{\n\tf32 h = flag ? 0 :b.<CURSOR>");
    assert!(labels.contains(&"health".to_string()));
}
