//! Domain constants for KAG AngelScript.

/// Script file extension for game scripts.
pub const SCRIPT_EXTENSION: &str = "as";

/// Primitive type names; offered as keywords and accepted as hook return types.
pub const PRIMITIVES: &[&str] = &[
    "void", "bool", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32",
    "uint64", "s8", "s16", "s32", "s64", "u8", "u16", "u32", "u64", "f32", "f64", "float",
    "double",
];

/// Words that can precede an identifier without declaring it.
pub const NON_TYPE_KEYWORDS: &[&str] = &[
    "return", "else", "case", "default", "if", "while", "for", "do", "switch", "break",
    "continue", "not", "and", "or", "xor", "is", "cast", "const", "in", "out", "inout",
    "shared", "funcdef", "import", "private", "protected", "class", "interface", "namespace",
    "enum", "typedef", "mixin",
];

/// Object documentation file stem that is not a real type.
pub const ANY_OBJECT: &str = "any";

/// Directory under the manual root holding the documentation files.
pub const MANUAL_INTERFACE_DIR: &str = "interface";

/// Directory under the game root holding the base scripts.
pub const BASE_DIR: &str = "Base";

pub const FUNCTIONS_FILE: &str = "Functions.txt";
pub const HOOKS_FILE: &str = "Hooks.txt";
pub const VARIABLES_FILE: &str = "Variables.txt";
pub const ENUMS_FILE: &str = "Enums.txt";
pub const OBJECTS_DIR: &str = "Objects";

/// Line prefix marking a comment in documentation files.
pub const DOC_COMMENT_PREFIX: &str = "--";

/// Returns true if `word` is a keyword that never names a declared type.
pub fn is_non_type_keyword(word: &str) -> bool {
    NON_TYPE_KEYWORDS.contains(&word)
}
