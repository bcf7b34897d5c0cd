//! Integration tests for doctoc


use assert_cmd::Command;
use harness::{TestDocs, run_doctoc};
use predicates::prelude::*;

#[test]
fn test_generates_root_and_nested_indices() {
    let docs = TestDocs::new();
    docs.add_doc("a.md", "Alpha");
    docs.add_doc("sub/b.md", "Beta");

    let (_stdout, stderr, success) = run_doctoc(docs.path(), &[]);
    assert!(success, "doctoc should succeed: {}", stderr);

    assert_eq!(
        docs.read("README.md").unwrap(),
        "# Edge Development Conventions\n\n## Table of Contents\n\n\
         * [Alpha](a.md)\n\
         * [Sub](sub/README.md)\n  \
         * [Beta](sub/b.md)\n"
    );
    assert_eq!(
        docs.read("sub/README.md").unwrap(),
        "# [<](../README.md) &nbsp; Sub Conventions\n\n## Table of Contents\n\n\
         * [Beta](b.md)\n"
    );
}

#[test]
fn test_explicit_root_argument() {
    let docs = TestDocs::new();
    docs.add_doc("handbook/intro.md", "Intro");
    docs.add_doc("elsewhere.md", "Elsewhere");

    let (_stdout, stderr, success) = run_doctoc(docs.path(), &["handbook"]);
    assert!(success, "doctoc should succeed: {}", stderr);

    let index = docs.read("handbook/README.md").unwrap();
    assert!(index.starts_with("# Edge Development Conventions\n"));
    assert!(index.contains("* [Intro](intro.md)\n"));
    assert!(docs.read("README.md").is_none(), "outer root must be untouched");
}

#[test]
fn test_gitignore_excludes_directory() {
    let docs = TestDocs::new();
    docs.add_file(".gitignore", "# build output\n/dist\nnode_modules/\n");
    docs.add_doc("guide.md", "Guide");
    docs.add_doc("dist/bundle.md", "Bundle");
    docs.add_doc("node_modules/pkg/readme.md", "Pkg");

    let (_stdout, stderr, success) = run_doctoc(docs.path(), &[]);
    assert!(success, "doctoc should succeed: {}", stderr);

    let index = docs.read("README.md").unwrap();
    assert!(index.contains("[Guide](guide.md)"));
    assert!(!index.contains("dist"), "excluded dir linked: {}", index);
    assert!(!index.contains("node_modules"), "excluded dir linked: {}", index);
    assert!(docs.read("dist/README.md").is_none());
    assert!(docs.read("node_modules/README.md").is_none());
}

#[test]
fn test_exclusion_is_exact_not_substring() {
    let docs = TestDocs::new();
    docs.add_file(".gitignore", "drafts\n");
    docs.add_doc("drafts/wip.md", "Wip");
    docs.add_doc("drafts-old/old.md", "Old");
    docs.add_doc("team/drafts/plan.md", "Plan");

    let (_stdout, stderr, success) = run_doctoc(docs.path(), &[]);
    assert!(success, "doctoc should succeed: {}", stderr);

    let index = docs.read("README.md").unwrap();
    assert!(!index.contains("(drafts/README.md)"));
    assert!(index.contains("(drafts-old/README.md)"));
    assert!(index.contains("(team/drafts/README.md)"));
}

#[test]
fn test_gitignore_excludes_nested_path() {
    let docs = TestDocs::new();
    docs.add_file(".gitignore", "team/drafts
/guides/private/
");
    docs.add_doc("drafts/wip.md", "Wip");
    docs.add_doc("team/plan.md", "Plan");
    docs.add_doc("team/drafts/idea.md", "Idea");
    docs.add_doc("guides/setup.md", "Setup");
    docs.add_doc("guides/private/keys.md", "Keys");

    let (_stdout, stderr, success) = run_doctoc(docs.path(), &[]);
    assert!(success, "doctoc should succeed: {}", stderr);

    let index = docs.read("README.md").unwrap();
    assert!(index.contains("(drafts/README.md)"), "root drafts kept: {}", index);
    assert!(index.contains("[Plan](team/plan.md)"));
    assert!(!index.contains("team/drafts"), "nested exclusion linked: {}", index);
    assert!(index.contains("[Setup](guides/setup.md)"));
    assert!(!index.contains("guides/private"), "nested exclusion linked: {}", index);

    assert!(docs.read("drafts/README.md").is_some());
    assert!(!docs.read("team/README.md").unwrap().contains("drafts"));
    assert!(docs.read("team/drafts/README.md").is_none());
    assert!(docs.read("guides/private/README.md").is_none());
}

#[test]
fn test_second_run_is_byte_identical() {
    let docs = TestDocs::new();
    docs.add_doc("a.md", "Alpha");
    docs.add_doc("one/x.md", "X");
    docs.add_doc("one/two/y.md", "Y");

    assert!(run_doctoc(docs.path(), &[]).2);
    let first: Vec<_> = ["README.md", "one/README.md", "one/two/README.md"]
        .iter()
        .map(|p| docs.read(p).unwrap())
        .collect();

    assert!(run_doctoc(docs.path(), &[]).2);
    let second: Vec<_> = ["README.md", "one/README.md", "one/two/README.md"]
        .iter()
        .map(|p| docs.read(p).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_dry_run_prints_without_writing() {
    let docs = TestDocs::new();
    docs.add_doc("a.md", "Alpha");

    let (stdout, _stderr, success) = run_doctoc(docs.path(), &["--dry-run"]);
    assert!(success);
    assert!(stdout.contains("==> ./README.md <=="), "got: {}", stdout);
    assert!(stdout.contains("* [Alpha](a.md)"));
    assert!(docs.read("README.md").is_none());
}

#[test]
fn test_json_output() {
    let docs = TestDocs::new();
    docs.add_doc("sub/b.md", "Beta");

    let (stdout, _stderr, success) = run_doctoc(docs.path(), &["--json"]);
    assert!(success);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let docs_json = value.as_array().expect("array");
    assert_eq!(docs_json.len(), 2);
    assert_eq!(docs_json[0]["path"], "./README.md");
    assert_eq!(docs_json[1]["path"], "sub/README.md");
    assert!(docs.read("README.md").is_none());
}

#[test]
fn test_custom_title_and_noun() {
    let docs = TestDocs::new();
    docs.add_doc("api/get.md", "Get");

    Command::cargo_bin("doctoc")
        .unwrap()
        .current_dir(docs.path())
        .args(["--title", "Handbook", "--noun", "Reference", "-n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Handbook\n"))
        .stdout(predicate::str::contains(
            "# [<](../README.md) &nbsp; Api Reference\n",
        ));
}

#[test]
fn test_sequential_jobs() {
    let docs = TestDocs::new();
    docs.add_doc("a/x.md", "X");
    docs.add_doc("b/y.md", "Y");

    let (_stdout, stderr, success) = run_doctoc(docs.path(), &["-j", "1"]);
    assert!(success, "doctoc should succeed: {}", stderr);
    assert!(docs.read("a/README.md").is_some());
    assert!(docs.read("b/README.md").is_some());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let docs = TestDocs::new();
    docs.add_doc("a.md", "Alpha");

    Command::cargo_bin("doctoc")
        .unwrap()
        .current_dir(docs.path())
        .env_remove("RUST_LOG")
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("writing index"));
}

#[test]
fn test_custom_ignore_file() {
    let docs = TestDocs::new();
    docs.add_file(".gitignore", "guides\n");
    docs.add_file("custom.ignore", "archive/\n");
    docs.add_doc("guides/setup.md", "Setup");
    docs.add_doc("archive/old.md", "Old");

    Command::cargo_bin("doctoc")
        .unwrap()
        .current_dir(docs.path())
        .args(["--ignore-file", "custom.ignore"])
        .assert()
        .success();

    let index = docs.read("README.md").unwrap();
    assert!(index.contains("[Setup](guides/setup.md)"), "got: {}", index);
    assert!(!index.contains("archive"), "excluded dir linked: {}", index);
    assert!(docs.read("archive/README.md").is_none());
}

#[test]
fn test_quiet_suppresses_warnings() {
    let docs = TestDocs::new();
    docs.add_file("plain.md", "# Plain heading\n");

    Command::cargo_bin("doctoc")
        .unwrap()
        .current_dir(docs.path())
        .env_remove("RUST_LOG")
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::contains("no title separator").not());

    assert!(docs.read("README.md").unwrap().contains("* [undefined](plain.md)\n"));
}
