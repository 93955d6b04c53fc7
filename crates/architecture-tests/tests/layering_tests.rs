//! Purpose: Enforce the layering of the configuration library.
//!
//! Invariants:
//! - Only `persistence.rs` touches the filesystem; the codec, schema, registry
//!   and editing modules work on in-memory values.
//! - The library reports through `tracing`, never by printing.
//! - Non-test library code propagates errors instead of unwrapping.
//! - The library does not depend on CLI-only crates.
//!
//! Non-scope: This test does not verify runtime behavior; it only checks
//! source code patterns. Files are analyzed statically.

use std::fs;
use std::path::{Path, PathBuf};

/// Library modules allowed to perform filesystem I/O.
const IO_MODULES: &[&str] = &["persistence.rs"];

/// Crates that belong to the binary, not the library.
const CLI_ONLY_CRATES: &[&str] = &["anyhow", "clap", "tracing-subscriber"];

/// Find the workspace root by looking for Cargo.toml with [workspace].
fn find_workspace_root() -> PathBuf {
    let current_dir = std::env::current_dir().expect("Failed to get current directory");

    let mut dir = current_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return current_dir,
        }
    }
}

/// Source files of the configuration library, with their non-test portion.
fn library_sources() -> Vec<(PathBuf, String)> {
    let src = find_workspace_root().join("crates/config/src");
    assert!(src.exists(), "config sources not found at {:?}", src);

    walkdir::WalkDir::new(&src)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| {
            let content = fs::read_to_string(e.path()).unwrap_or_default();
            (e.path().to_path_buf(), non_test_portion(&content))
        })
        .collect()
}

/// Everything before the first `#[cfg(test)]`, without doc comments.
fn non_test_portion(content: &str) -> String {
    content
        .lines()
        .take_while(|line| line.trim() != "#[cfg(test)]")
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[test]
fn test_only_persistence_touches_filesystem() {
    let violations: Vec<String> = library_sources()
        .into_iter()
        .filter(|(path, _)| !IO_MODULES.contains(&file_name(path).as_str()))
        .filter(|(_, code)| code.contains("std::fs") || code.contains("File::open"))
        .map(|(path, _)| format!("{}: filesystem access outside persistence", path.display()))
        .collect();

    assert!(
        violations.is_empty(),
        "Found filesystem access in pure library modules:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_library_does_not_print() {
    let violations: Vec<String> = library_sources()
        .into_iter()
        .filter(|(_, code)| code.contains("println!") || code.contains("eprintln!"))
        .map(|(path, _)| format!("{}: prints instead of using tracing", path.display()))
        .collect();

    assert!(
        violations.is_empty(),
        "Found printing in library code:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_library_code_does_not_unwrap() {
    let violations: Vec<String> = library_sources()
        .into_iter()
        .filter(|(_, code)| code.contains(".unwrap()") || code.contains(".expect("))
        .map(|(path, _)| format!("{}: unwrap/expect in non-test code", path.display()))
        .collect();

    assert!(
        violations.is_empty(),
        "Found unwrap/expect in library code:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_library_has_no_cli_dependencies() {
    let manifest = fs::read_to_string(find_workspace_root().join("crates/config/Cargo.toml"))
        .expect("Failed to read config manifest");
    let dependencies = manifest
        .split("[dependencies]")
        .nth(1)
        .and_then(|rest| rest.split("\n[").next())
        .unwrap_or_default();

    for krate in CLI_ONLY_CRATES {
        assert!(
            !dependencies
                .lines()
                .any(|line| line.trim_start().starts_with(&format!("{krate} "))),
            "apptainer-config must not depend on {krate}"
        );
    }
}

#[test]
fn test_non_test_portion_stops_at_test_module() {
    let content = "use a;\n// note\nfn f() {}\n#[cfg(test)]\nmod tests { fn g() { x.unwrap(); } }\n";
    let code = non_test_portion(content);
    assert!(code.contains("fn f()"));
    assert!(!code.contains("note"));
    assert!(!code.contains("unwrap"));
}
