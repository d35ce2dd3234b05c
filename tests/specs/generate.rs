//! Behavioral specs for `stubgen generate`.

use crate::prelude::*;

const PERSON_PHP: &str = concat!(
    "<?php\n",
    "\n",
    "namespace X\\Models;\n",
    "\n",
    "class Person {\n",
    "\n",
    "  public function __construct() {\n",
    "  }\n",
    "\n",
    "  public function getName() {\n",
    "    return $this->name;\n",
    "  }\n",
    "\n",
    "  public function setName($name) {\n",
    "    $this->name = $name;\n",
    "  }\n",
    "\n",
    "}\n",
);

fn generate(project: &Project, file_path: &str) -> assert_cmd::assert::Assert {
    stubgen_cmd()
        .args(["generate", file_path, "--no-color"])
        .arg("--root")
        .arg(project.path())
        .assert()
}

// =============================================================================
// Happy path
// =============================================================================

/// A one-class source file yields a scaffold with one stub per
/// method, written under tests/src/Unit.
#[test]
fn generate_writes_person_test_scaffold() {
    let project = Project::empty();
    project.file("modules/custom/demo/src/Models/Person.php", PERSON_PHP);

    generate(&project, "web/modules/custom/demo/src/Models/Person.php")
        .success()
        .stdout(predicates::str::contains("Generation is finished!"))
        .stdout(predicates::str::contains("1 source(s) identified"))
        .stdout(predicates::str::contains("1 success(es)"))
        .stdout(predicates::str::contains("0 warning(s)"))
        .stdout(predicates::str::contains("0 error(s)"))
        .stdout(predicates::str::contains("Execution time:"));

    let scaffold = project.read("tests/src/Unit/PersonTest.php");
    assert!(scaffold.contains("namespace X\\Models\\Tests;"));
    assert!(scaffold.contains("class PersonTest extends TestCase {"));
    assert!(scaffold.contains("public function setUp(): void {"));
    assert!(scaffold.contains("public function testGetName() {"));
    assert!(scaffold.contains("public function testSetName() {"));
    assert!(!scaffold.contains("testConstruct"), "constructor must not get a stub");
}

/// Generating twice fully replaces the previous scaffold.
#[test]
fn generate_overwrites_existing_test_file() {
    let project = Project::empty();
    project.file("modules/custom/demo/src/Models/Person.php", PERSON_PHP);
    project.file("tests/src/Unit/PersonTest.php", "OLD SCAFFOLD\n");

    generate(&project, "web/modules/custom/demo/src/Models/Person.php").success();

    let scaffold = project.read("tests/src/Unit/PersonTest.php");
    assert!(!scaffold.contains("OLD SCAFFOLD"), "old content must not survive");
    assert!(scaffold.contains("class PersonTest extends TestCase {"));
}

/// A leading `./` on the input path is tolerated.
#[test]
fn generate_accepts_dot_slash_prefixed_paths() {
    let project = Project::empty();
    project.file("modules/custom/demo/src/Models/Person.php", PERSON_PHP);

    generate(&project, "./web/modules/custom/demo/src/Models/Person.php")
        .success()
        .stdout(predicates::str::contains("1 success(es)"));
}

// =============================================================================
// Failure reporting
// =============================================================================

/// A non-existent input produces exactly one error naming the path,
/// zero sources, and no written file. The run still exits 0.
#[test]
fn generate_missing_input_reports_one_error() {
    let project = Project::empty();

    generate(&project, "web/modules/custom/demo/src/Missing.php")
        .success()
        .stdout(predicates::str::contains("0 source(s) identified"))
        .stdout(predicates::str::contains("0 success(es)"))
        .stdout(predicates::str::contains("1 error(s)"))
        .stdout(predicates::str::contains(
            "- No source to generate tests for: web/modules/custom/demo/src/Missing.php",
        ));

    assert!(!project.path().join("tests").exists(), "nothing should be written");
}

/// An empty source file is reported with its module-relative path.
#[test]
fn generate_empty_file_reports_an_error() {
    let project = Project::empty();
    project.file("modules/custom/demo/src/Empty.php", "");

    generate(&project, "web/modules/custom/demo/src/Empty.php")
        .success()
        .stdout(predicates::str::contains("1 source(s) identified"))
        .stdout(predicates::str::contains("1 error(s)"))
        .stdout(predicates::str::contains(
            "- The file is empty: /modules/custom/demo/src/Empty.php",
        ));
}

/// A file with no class or function declaration is rejected.
#[test]
fn generate_without_testable_code_reports_an_error() {
    let project = Project::empty();
    project.file("modules/custom/demo/src/settings.php", "<?php\n$settings = [];\n");

    generate(&project, "web/modules/custom/demo/src/settings.php")
        .success()
        .stdout(predicates::str::contains("1 error(s)"))
        .stdout(predicates::str::contains(
            "does not contain any valid PHP classes or functions",
        ));
}

/// A file without a namespace declaration fails extraction.
#[test]
fn generate_without_namespace_reports_extraction_error() {
    let project = Project::empty();
    project.file(
        "modules/custom/demo/src/Person.php",
        "<?php\nclass Person {\n  public function getName() {}\n}\n",
    );

    generate(&project, "web/modules/custom/demo/src/Person.php")
        .success()
        .stdout(predicates::str::contains("1 error(s)"))
        .stdout(predicates::str::contains(
            "Unable to extract class information from the file:",
        ));
}

// =============================================================================
// Quiet mode
// =============================================================================

/// --quiet suppresses the report entirely, success or not.
#[test]
fn quiet_flag_suppresses_the_report() {
    let project = Project::empty();
    project.file("modules/custom/demo/src/Models/Person.php", PERSON_PHP);

    stubgen_cmd()
        .args(["generate", "web/modules/custom/demo/src/Models/Person.php", "--quiet"])
        .arg("--root")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicates::str::is_empty());

    // The scaffold is still written.
    assert!(project.path().join("tests/src/Unit/PersonTest.php").exists());
}
