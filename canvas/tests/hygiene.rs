//! Hygiene: source pattern budgets checked at test time.
//!
//! Scans the engine's production sources for constructs that crash the page or
//! silently drop errors. Each pattern carries a budget (zero everywhere). The
//! budget never grows; fix an existing hit before adding a new one.

use std::fs;
use std::path::{Path, PathBuf};

/// (pattern, why it is banned, budget)
const BUDGETS: &[(&str, &str, usize)] = &[
    (".unwrap()", "panics on None/Err", 0),
    (".expect(", "panics on None/Err", 0),
    ("panic!(", "aborts the wasm instance", 0),
    ("unreachable!(", "aborts the wasm instance", 0),
    ("todo!(", "unfinished stub", 0),
    ("unimplemented!(", "unfinished stub", 0),
    ("let _ =", "discards a result without inspecting it", 0),
    (".ok()", "discards an error without inspecting it", 0),
    ("#[allow(dead_code)]", "hides unused code", 0),
    ("println!(", "use the log facade", 0),
    ("web_sys::console", "use the log facade", 0),
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path
            .file_stem()
            .is_some_and(|s| s.to_string_lossy().ends_with("_test"));
        if !is_rs || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.display().to_string(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("engine.rs")),
        "hygiene scan found no engine.rs; run from the canvas crate root"
    );
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, reason, budget) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  `{pattern}` ({reason}): found {count}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn every_module_has_a_test_sibling() {
    let files = source_files();
    let untested: Vec<String> = files
        .iter()
        .filter(|f| !f.path.ends_with("lib.rs") && !f.path.ends_with("consts.rs"))
        .filter(|f| {
            let stem = f.path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
            !f.path.with_file_name(format!("{stem}_test.rs")).exists()
        })
        .map(|f| f.path.display().to_string())
        .collect();
    assert!(untested.is_empty(), "modules without a *_test.rs sibling:\n  {}", untested.join("\n  "));
}
