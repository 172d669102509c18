//! Tests for loading the engine manual from disk.

use std::path::Path;

use kagscript::hir::{CallableKind, KnowledgeBase, Signature};
use kagscript::ide::{AnalysisHost, CompletionKind};
use kagscript::project::{ConfigError, KnowledgeHandle, ManualLoader, ProjectConfig};
use tempfile::TempDir;

use crate::helpers::cursor::split_cursor;
use crate::helpers::manual_fixtures::sample_manual;

fn load_sample() -> (TempDir, KnowledgeBase) {
    let manual = sample_manual();
    let config = ProjectConfig::new().with_manual_path(manual.path());
    let loader = ManualLoader::from_config(&config).unwrap();
    let kb = loader.load().unwrap();
    (manual, kb)
}

#[test]
fn test_functions_loaded() {
    let (_manual, kb) = load_sample();

    assert_eq!(kb.functions().len(), 4);
    assert_eq!(kb.function(None, "print").unwrap().signatures().len(), 2);
    assert!(kb.function(None, "Sqrt").is_none());

    let sqrt = kb.function(Some("Maths"), "Sqrt").unwrap();
    assert_eq!(sqrt.namespace(), Some("Maths"));
    assert_eq!(sqrt.ty.as_ref(), "f32");
}

#[test]
fn test_hooks_variables_and_enums_loaded() {
    let (_manual, kb) = load_sample();

    let hooks: Vec<_> = kb.hooks().iter().map(ToString::to_string).collect();
    assert_eq!(
        hooks,
        vec![
            "void onInit(CBlob@ this)",
            "void onTick(CBlob@ this)",
            "bool canBePickedUp(CBlob@ this, CBlob@ byBlob)"
        ]
    );

    assert_eq!(kb.variable("rules").unwrap().ty.as_ref(), "CRules@");
    assert!(kb.variable("tick").is_none());
    assert_eq!(kb.variables()[1].namespace.as_deref(), Some("Engine"));

    let enums: Vec<_> = kb.enums().iter().map(ToString::to_string).collect();
    assert_eq!(enums, vec!["Team::blue", "Team::red", "Hitters::hits::fire"]);
    assert_eq!(kb.enums()[2].insert_text(), "Hitters::fire");
}

#[test]
fn test_objects_loaded() {
    let (_manual, kb) = load_sample();

    let names: Vec<_> = kb.objects().map(|o| o.name.as_ref()).collect();
    assert_eq!(names, vec!["CBlob", "CSprite"]);

    let blob = kb.object("CBlob").unwrap();
    let methods: Vec<_> = blob.methods().map(|m| m.name.as_ref()).collect();
    assert_eq!(methods, vec!["getHealth", "getSprite", "server_Hit"]);

    let hit = blob.method("server_Hit").unwrap();
    assert!(matches!(&hit.kind, CallableKind::Method { owner } if owner.as_ref() == "CBlob"));
    let arities: Vec<_> = hit.signatures().iter().map(Signature::arity).collect();
    assert_eq!(arities, vec![5, 6]);

    let properties: Vec<_> = blob.properties().iter().map(|p| p.name.as_ref()).collect();
    assert_eq!(properties, vec!["server", "health"]);
    assert_eq!(blob.constructor().unwrap().signatures()[0].arity(), 0);
}

#[test]
fn test_missing_files_leave_tables_empty() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("interface")).unwrap();

    let kb = ManualLoader::new(temp.path().join("interface")).load().unwrap();
    assert_eq!(kb.summary(), (0, 0));
    assert!(kb.hooks().is_empty());
}

#[test]
fn test_config_errors_name_their_setting() {
    let temp = TempDir::new().unwrap();

    let unset = ManualLoader::from_config(&ProjectConfig::new()).unwrap_err();
    assert_eq!(unset, ConfigError::ManualPathNotSet);
    assert_eq!(unset.setting_key(), "KAG.manual");

    let config = ProjectConfig::new().with_manual_path(temp.path());
    let missing = ManualLoader::from_config(&config).unwrap_err();
    assert_eq!(missing, ConfigError::ManualPathMissing(temp.path().join("interface")));
}

#[test]
fn test_background_load_publishes_knowledge() {
    let manual = sample_manual();
    let handle = KnowledgeHandle::new();
    assert!(!handle.is_loaded());

    let loader = ManualLoader::new(manual.path().join("interface"));
    handle.load_in_background(loader).join().unwrap().unwrap();

    assert!(handle.is_loaded());
    assert!(handle.snapshot().unwrap().object("CBlob").is_some());
}

#[test]
fn test_loaded_manual_drives_completion() {
    let (_manual, kb) = load_sample();
    let (text, position) =
        split_cursor("void onInit(CBlob@ this)\n{\n\tthis.getSprite().<CURSOR>");

    let mut host = AnalysisHost::with_knowledge(KnowledgeHandle::with_knowledge(kb));
    host.set_file_content("Scripts/Blob.as", &text);
    let items = host
        .analysis()
        .completions(Path::new("Scripts/Blob.as"), position);

    let labels: Vec<_> = items.iter().map(|item| item.label.as_ref()).collect();
    assert_eq!(labels, vec!["SetZ", "isVisible"]);
    assert!(items.iter().all(|item| item.kind == CompletionKind::Method));
}
