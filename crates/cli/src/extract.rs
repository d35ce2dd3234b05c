// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regex-based structural extraction from PHP source text.
//!
//! Deliberately not a parser: one top-level class per file, first
//! match wins. Multi-class files, commented-out declarations, and
//! multi-line signatures are out of scope.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// The (namespace, class name) pair identifying the type under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub namespace: String,
    pub class_name: String,
}

#[allow(clippy::expect_used)]
static NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"namespace\s+([^;]+);").expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+([A-Za-z_]\w*)").expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:public|protected|private|static)?\s*function\s*(\w+)\s*\(")
        .expect("valid regex pattern")
});

/// Extract the declared namespace and class name.
///
/// The namespace comes from the first `namespace ...;` declaration;
/// no declaration means extraction fails. The class name comes from
/// the first `class` declaration when one is present, falling back
/// to the file stem. `None` when either part cannot be determined.
pub fn extract_class_info(content: &str, path: &Path) -> Option<ClassInfo> {
    let namespace = NAMESPACE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())?;

    let class_name = CLASS_NAME
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .or_else(|| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(String::from)
        })?;

    if namespace.is_empty() || class_name.is_empty() {
        return None;
    }
    Some(ClassInfo {
        namespace,
        class_name,
    })
}

/// Extract method names eligible for stub generation, in order of
/// first appearance. `__construct` and any `__`-prefixed name are
/// excluded regardless of visibility modifier; duplicate
/// declarations yield duplicate entries. Each retained name is
/// normalized with a lowercase-first transform.
pub fn extract_method_names(content: &str) -> Vec<String> {
    METHOD
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| *name != "__construct" && !name.starts_with("__"))
        .map(lower_first)
        .collect()
}

/// Lowercase the first character, leaving the rest untouched.
fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
