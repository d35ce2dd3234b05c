// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PHPUnit scaffold rendering.
//!
//! Pure string assembly, no I/O. Identical inputs produce
//! byte-identical output. The rendered class stays syntactically
//! valid with an empty method list.

/// Render a complete PHPUnit test class.
///
/// The test namespace is the original namespace with a `\Tests`
/// suffix, the test class is the class name with a `Test` suffix,
/// and each method yields one `test<PascalName>` stub containing a
/// single passing assertion.
pub fn render(namespace: &str, class_name: &str, methods: &[String]) -> String {
    let test_namespace = format!("{namespace}\\Tests");
    let test_class_name = format!("{class_name}Test");
    let stubs: String = methods.iter().map(|method| render_stub(method)).collect();

    format!(
        r"<?php

namespace {test_namespace};

use PHPUnit\Framework\TestCase;

class {test_class_name} extends TestCase {{

  public function setUp(): void {{
    parent::setUp();
    // Setup code here.
  }}
{stubs}
}}
"
    )
}

/// Render one placeholder test method.
fn render_stub(method: &str) -> String {
    let test_name = upper_first(method);
    format!(
        r"
  public function test{test_name}() {{
    // Implement test for {method} here.
    $this->assertTrue(true);
  }}
"
    )
}

/// Uppercase the first character, leaving the rest untouched.
fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
