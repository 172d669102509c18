//! Loads the engine manual into a [`KnowledgeBase`].
//!
//! The manual is a directory of line-oriented text files, one declaration
//! per line. Blank lines and lines starting with `--` are ignored, as is any
//! line that does not have the expected shape.
//!
//! ```text
//! interface/
//!   Functions.txt     CBlob@ getBlobByNetworkID(u16 netid)
//!   Hooks.txt         void onInit(CBlob@ this)
//!   Variables.txt     CRules@ rules
//!   Enums.txt         Team          (namespace)
//!                         red       (member)
//!   Objects/CBlob.txt <constructor>(), f32 getHealth() const, bool server
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rayon::prelude::*;
use regex::Regex;

use super::config::ProjectConfig;
use super::error::{ConfigError, LoadError};
use crate::base::constants::{
    ANY_OBJECT, DOC_COMMENT_PREFIX, ENUMS_FILE, FUNCTIONS_FILE, HOOKS_FILE, OBJECTS_DIR,
    VARIABLES_FILE,
};
use crate::base::text_utils::is_identifier;
use crate::hir::{Callable, EnumMember, KnowledgeBase, Object, Signature, Variable};

// ==================== Line Grammars ====================

fn function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\S+)\s+(?:(\S+?)::)?(?:::)?(\S+)\((.*)\)(?:\s+const)?$")
            .expect("Invalid manual function regex")
    })
}

fn hook_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\S+)\s+(\S+)\((.*)\)$").expect("Invalid manual hook regex"))
}

fn variable_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:(\S+)::)?(\S+)\s+(\S+)$").expect("Invalid manual variable regex")
    })
}

fn constructor_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^<constructor>\((.*)\)$").expect("Invalid manual constructor regex")
    })
}

fn method_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\S+)\s+(?:::)?(\S+)\((.*)\)(?:\s+const)?$")
            .expect("Invalid manual method regex")
    })
}

fn property_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\S+)\s+(\S+)$").expect("Invalid manual property regex"))
}

/// Trimmed declaration lines: no blanks, no `--` comments.
fn declaration_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(DOC_COMMENT_PREFIX))
}

/// A free function line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLine<'a> {
    pub namespace: Option<&'a str>,
    pub ty: &'a str,
    pub name: &'a str,
    pub signature: Signature,
}

/// `returnType [namespace::][::]name(params) [const]`
pub fn parse_function_line(line: &str) -> Option<FunctionLine<'_>> {
    let caps = function_regex().captures(line)?;
    Some(FunctionLine {
        namespace: caps.get(2).map(|m| m.as_str()),
        ty: caps.get(1)?.as_str(),
        name: caps.get(3)?.as_str(),
        signature: Signature::parse(caps.get(4)?.as_str()),
    })
}

/// `returnType name(params)`
pub fn parse_hook_line(line: &str) -> Option<Callable> {
    let caps = hook_regex().captures(line)?;
    Some(Callable::hook(&caps[1], &caps[2], Signature::parse(&caps[3])))
}

/// `[namespace::]type name`
pub fn parse_variable_line(line: &str) -> Option<Variable> {
    let caps = variable_regex().captures(line)?;
    Some(Variable::new(
        caps.get(1).map(|m| m.as_str().into()),
        &caps[2],
        &caps[3],
    ))
}

/// Enum members of an `Enums.txt` file.
///
/// An unindented single word opens a namespace; indented single words are
/// its members.
pub fn parse_enums(text: &str) -> Vec<EnumMember> {
    let mut members = Vec::new();
    let mut namespace = "";

    for line in text.lines().map(str::trim_end) {
        if line.is_empty() || line.starts_with(DOC_COMMENT_PREFIX) {
            continue;
        }
        let word = line.trim_start();
        if word.contains(char::is_whitespace) {
            continue;
        }
        if word.len() == line.len() {
            namespace = word;
        } else {
            members.push(EnumMember::new(namespace, word));
        }
    }

    members
}

/// An object documentation file.
pub fn parse_object(name: &str, text: &str) -> Object {
    let mut object = Object::new(name);

    for line in declaration_lines(text) {
        if let Some(caps) = constructor_regex().captures(line) {
            object.add_constructor_signature(Signature::parse(&caps[1]));
        } else if let Some(caps) = method_regex().captures(line) {
            object.add_method_signature(&caps[1], &caps[2], Signature::parse(&caps[3]));
        } else if let Some(caps) = property_regex().captures(line) {
            object.add_property(&caps[1], &caps[2]);
        } else {
            tracing::trace!("[MANUAL] Skipping line in {name}: {line}");
        }
    }

    object
}

// ==================== ManualLoader ====================

/// Reads a manual `interface/` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualLoader {
    interface_dir: PathBuf,
}

impl ManualLoader {
    /// Loader for an `interface/` directory.
    pub fn new(interface_dir: impl Into<PathBuf>) -> Self {
        Self {
            interface_dir: interface_dir.into(),
        }
    }

    /// Loader for the manual configured in `config`.
    pub fn from_config(config: &ProjectConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.manual_interface_dir()?))
    }

    pub fn interface_dir(&self) -> &Path {
        &self.interface_dir
    }

    /// Build a knowledge base from the manual.
    ///
    /// A missing documentation file leaves its table empty. Fails only if
    /// the objects directory exists but cannot be listed.
    pub fn load(&self) -> Result<KnowledgeBase, LoadError> {
        let mut kb = KnowledgeBase::new();

        if let Some(text) = self.read(FUNCTIONS_FILE) {
            for line in declaration_lines(&text) {
                if let Some(f) = parse_function_line(line) {
                    kb.functions_mut()
                        .add_signature(f.namespace, f.ty, f.name, f.signature);
                }
            }
        }

        if let Some(text) = self.read(HOOKS_FILE) {
            for hook in declaration_lines(&text).filter_map(parse_hook_line) {
                kb.add_hook(hook);
            }
        }

        if let Some(text) = self.read(VARIABLES_FILE) {
            for variable in declaration_lines(&text).filter_map(parse_variable_line) {
                kb.add_variable(variable);
            }
        }

        if let Some(text) = self.read(ENUMS_FILE) {
            for member in parse_enums(&text) {
                kb.add_enum_member(member);
            }
        }

        for object in self.load_objects()? {
            kb.insert_object(object);
        }

        let (objects, functions) = kb.summary();
        tracing::debug!(
            "[MANUAL] Loaded {objects} objects, {functions} functions from {}",
            self.interface_dir.display()
        );
        Ok(kb)
    }

    fn read(&self, file: &str) -> Option<String> {
        let path = self.interface_dir.join(file);
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("[MANUAL] Cannot read {}: {e}", path.display());
                None
            }
        }
    }

    /// Parse every `Objects/<Name>.txt` in parallel, in file name order.
    fn load_objects(&self) -> Result<Vec<Object>, LoadError> {
        let dir = self.interface_dir.join(OBJECTS_DIR);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("[MANUAL] Missing objects directory {}", dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(LoadError::io(dir, e)),
        };

        let mut files: Vec<(String, PathBuf)> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .filter_map(|path| {
                let name = path.file_stem()?.to_str()?.to_string();
                (is_identifier(&name) && name != ANY_OBJECT).then_some((name, path))
            })
            .collect();
        files.sort();

        Ok(files
            .par_iter()
            .filter_map(|(name, path)| match fs::read_to_string(path) {
                Ok(text) => Some(parse_object(name, &text)),
                Err(e) => {
                    tracing::warn!("[MANUAL] Cannot read {}: {e}", path.display());
                    None
                }
            })
            .collect())
    }
}
