//! Family name → declaration identifier.
//!
//! The rule, applied character by character:
//!
//! - ASCII letters, ASCII digits, `_` and `$` are kept;
//! - anything else (spaces, hyphens, punctuation, non-ASCII) becomes `_`;
//! - a result that starts with a digit, or is a reserved word, gets a leading `_`.
//!
//! So `Bar Baz` → `Bar_Baz`, `42dot Sans` → `_42dot_Sans`, `M PLUS 1p` →
//! `M_PLUS_1p`. Distinct names can meet on the same identifier (`Foo Bar`,
//! `Foo-Bar` and `Foo_Bar` all give `Foo_Bar`); [`IdentifierRegistry`] turns
//! that into an error. Names differing only by a dropped character stay
//! distinct: `AB` → `AB`, `A B` → `A_B`.
//!
//! The registry also refuses identifiers the generated module declares on its
//! own (imported types, helper functions) instead of renaming the family.

use std::collections::{HashMap, HashSet, hash_map::Entry};

use crate::error::{Error, Result};

/// Words that cannot name a function declaration in strict-mode TypeScript.
pub const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Normalize a family name into a declaration-safe identifier.
pub fn normalize_identifier(family: &str) -> Result<String> {
    if family.is_empty() {
        return Err(Error::EmptyFamilyName);
    }

    let mut identifier: String = family
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();

    if identifier.starts_with(|c: char| c.is_ascii_digit())
        || RESERVED_WORDS.contains(&identifier.as_str())
    {
        identifier.insert(0, '_');
    }

    Ok(identifier)
}

/// Identifiers handed out during one generation run.
///
/// Registering a family whose identifier is already taken fails with
/// [`Error::NormalizationCollision`] naming both families, or with
/// [`Error::ModuleNameClash`] when the module itself declares that name.
#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    assigned: HashMap<String, String>,
    declared: HashSet<String>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `names` already declared by the surrounding module.
    pub fn with_declared<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            assigned: HashMap::new(),
            declared: names.into_iter().map(str::to_owned).collect(),
        }
    }

    /// Normalize `family` and claim the identifier.
    pub fn register(&mut self, family: &str) -> Result<String> {
        let identifier = normalize_identifier(family)?;
        if self.declared.contains(&identifier) {
            return Err(Error::ModuleNameClash { family: family.to_owned(), identifier });
        }
        match self.assigned.entry(identifier) {
            Entry::Occupied(taken) => Err(Error::NormalizationCollision {
                first: taken.get().clone(),
                second: family.to_owned(),
                identifier: taken.key().clone(),
            }),
            Entry::Vacant(free) => {
                let identifier = free.key().clone();
                free.insert(family.to_owned());
                Ok(identifier)
            }
        }
    }

    /// Family that owns `identifier`, if any.
    pub fn owner(&self, identifier: &str) -> Option<&str> {
        self.assigned.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
