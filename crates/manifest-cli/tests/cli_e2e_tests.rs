//! CLI end-to-end tests that invoke the compiled `manifest` binary.
//!
//! These tests use `env!("CARGO_BIN_EXE_manifest")` to locate the binary and
//! `std::process::Command` to run it against temporary directories.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Returns the path to the compiled `manifest` binary.
fn manifest_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_manifest"))
}

/// Run `manifest` with the given args in the given directory.
fn run(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(manifest_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to execute manifest binary")
}

/// Write a template and a config into `dir` and return their file names.
fn write_inputs(dir: &Path, template: &str, config: &str) -> (String, String) {
    fs::write(dir.join("manifest.template"), template).unwrap();
    fs::write(dir.join("manifest.json"), config).unwrap();
    ("manifest.template".to_string(), "manifest.json".to_string())
}

const MINIMAL_CONFIG: &str = r#"{"results": {"A": [{"file": "x", "desc": "y"}]}}"#;

// ============================================================================
// 1. test_help_exits_zero
// ============================================================================

#[test]
fn test_help_exits_zero() {
    use assert_cmd::prelude::*;
    use predicates::prelude::*;

    Command::new(manifest_bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clean"));
}

// ============================================================================
// 2. test_generate_with_explicit_paths
// ============================================================================

#[test]
fn test_generate_with_explicit_paths() {
    let dir = TempDir::new().unwrap();
    let (tpl, cfg) = write_inputs(dir.path(), "{{results}}", MINIMAL_CONFIG);

    let out = run(dir.path(), &["-t", &tpl, "-c", &cfg, "-o", "out.md"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Generated"), "got: {stdout}");

    let rendered = fs::read_to_string(dir.path().join("out.md")).unwrap();
    assert_eq!(rendered, "## 1. A\n  1. [x](x): y\n\n");
}

// ============================================================================
// 3. test_default_config_and_output_paths
// ============================================================================

#[test]
fn test_default_config_and_output_paths() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path(), "{{results}}", MINIMAL_CONFIG);

    // No -c/-o: manifest.json and README.md in the working directory.
    let out = run(dir.path(), &["-t", "manifest.template"]);
    assert!(out.status.success());
    assert!(dir.path().join("README.md").exists());
}

// ============================================================================
// 4. test_missing_config_exits_one
// ============================================================================

#[test]
fn test_missing_config_exits_one() {
    let dir = TempDir::new().unwrap();

    let out = run(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Config file not found"), "got: {stderr}");
    assert!(!dir.path().join("README.md").exists());
}

// ============================================================================
// 5. test_missing_results_exits_one_without_output
// ============================================================================

#[test]
fn test_missing_results_exits_one_without_output() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path(), "{{results}}", r#"{"title": "no results"}"#);

    let out = run(dir.path(), &["-t", "manifest.template"]);
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("results"), "got: {stderr}");
    assert!(!dir.path().join("README.md").exists());
}

// ============================================================================
// 6. test_invalid_entry_leaves_existing_output_untouched
// ============================================================================

#[test]
fn test_invalid_entry_leaves_existing_output_untouched() {
    let dir = TempDir::new().unwrap();
    write_inputs(
        dir.path(),
        "{{results}}",
        r#"{"results": {"Docs": [{"file": "a.md"}]}}"#,
    );
    fs::write(dir.path().join("README.md"), "previous contents").unwrap();

    let out = run(dir.path(), &["-t", "manifest.template"]);
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("'Docs'"), "got: {stderr}");
    assert_eq!(
        fs::read_to_string(dir.path().join("README.md")).unwrap(),
        "previous contents"
    );
}

// ============================================================================
// 7. test_unknown_tokens_pass_through
// ============================================================================

#[test]
fn test_unknown_tokens_pass_through() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path(), "{{ not_a_key }} {{results}}", MINIMAL_CONFIG);

    let out = run(dir.path(), &["-t", "manifest.template"]);
    assert!(out.status.success());

    let rendered = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(rendered.starts_with("{{ not_a_key }} "), "got: {rendered}");
}

// ============================================================================
// 8. test_date_defaults_to_iso_format
// ============================================================================

#[test]
fn test_date_defaults_to_iso_format() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path(), "{{date}}", MINIMAL_CONFIG);

    let out = run(dir.path(), &["-t", "manifest.template"]);
    assert!(out.status.success());

    let rendered = fs::read_to_string(dir.path().join("README.md")).unwrap();
    let date_re = regex::Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    assert!(date_re.is_match(rendered.trim_end()), "got: {rendered}");
}

// ============================================================================
// 9. test_clean_with_nothing_to_remove
// ============================================================================

#[test]
fn test_clean_with_nothing_to_remove() {
    let dir = TempDir::new().unwrap();

    let out = run(dir.path(), &["clean"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("No generated files found to remove."),
        "got: {stdout}"
    );
}

// ============================================================================
// 10. test_clean_removes_generated_output
// ============================================================================

#[test]
fn test_clean_removes_generated_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "generated").unwrap();

    let out = run(dir.path(), &["clean"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("README.md"), "got: {stdout}");
    assert!(stdout.contains("OK"), "got: {stdout}");
    assert!(!dir.path().join("README.md").exists());
}

// ============================================================================
// 11. test_clean_honors_output_flag
// ============================================================================

#[test]
fn test_clean_honors_output_flag() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("OTHER.md"), "generated").unwrap();
    fs::write(dir.path().join("README.md"), "kept").unwrap();

    let out = run(dir.path(), &["clean", "-o", "OTHER.md"]);
    assert!(out.status.success());
    assert!(!dir.path().join("OTHER.md").exists());
    assert!(dir.path().join("README.md").exists());
}

// ============================================================================
// 12. test_output_parent_directory_is_created
// ============================================================================

#[test]
fn test_output_parent_directory_is_created() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path(), "{{results}}", MINIMAL_CONFIG);

    let out = run(
        dir.path(),
        &["-t", "manifest.template", "-o", "docs/generated/README.md"],
    );
    assert!(out.status.success());
    assert!(dir.path().join("docs/generated/README.md").exists());
}

// ============================================================================
// 13. test_bundled_template_is_used_without_template_flag
// ============================================================================

#[test]
fn test_bundled_template_is_used_without_template_flag() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"title": "Demo", "description": "About.", "results": {}}"#,
    )
    .unwrap();

    let out = run(dir.path(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let rendered = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(rendered.starts_with("# Demo\n"), "got: {rendered}");
}

// ============================================================================
// 14. test_debug_flag_only_raises_verbosity
// ============================================================================

#[test]
fn test_debug_flag_only_raises_verbosity() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path(), "{{results}}", MINIMAL_CONFIG);

    let quiet = run(dir.path(), &["-t", "manifest.template", "-o", "a.md"]);
    let debug = run(dir.path(), &["-t", "manifest.template", "-o", "b.md", "--debug"]);
    assert!(quiet.status.success());
    assert!(debug.status.success());

    // Same rendered output either way; diagnostics go to stderr only.
    assert_eq!(
        fs::read_to_string(dir.path().join("a.md")).unwrap(),
        fs::read_to_string(dir.path().join("b.md")).unwrap()
    );
    let debug_stderr = String::from_utf8_lossy(&debug.stderr);
    assert!(debug_stderr.contains("DEBUG"), "got: {debug_stderr}");
}
