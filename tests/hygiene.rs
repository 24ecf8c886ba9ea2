//! Hygiene — enforces coding standards at test time
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns the page code must not
//! use. Budgets only go down: to add one, remove another first.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics abort the WASM instance and take every component down with it.
    Budget { pattern: ".unwrap()", max: 0, why: "propagate with ? or log" },
    Budget { pattern: ".expect(", max: 0, why: "propagate with ? or log" },
    Budget { pattern: "panic!(", max: 0, why: "page code must not panic" },
    Budget { pattern: "unreachable!(", max: 0, why: "page code must not panic" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, why: "inspect the result or report it" },
    Budget { pattern: ".ok()", max: 0, why: "log the error before dropping it" },
    // Style / structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
    // Notification text comes from the visitor; never parse it as markup.
    Budget { pattern: "set_inner_html", max: 0, why: "use set_text_content" },
    // Only page-lifetime closures may leak: `util::dom::listen` and the reveal
    // observer. Anything with a shorter life keeps its `Closure` and drops it.
    Budget { pattern: ".forget()", max: 2, why: "route page-lifetime listeners through util::dom::listen" },
];

struct SourceFile {
    path: String,
    content: String,
}

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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({})\n{detail}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn notification_listeners_are_owned_not_leaked() {
    let files = source_files();
    let notification = files
        .iter()
        .find(|f| f.path.ends_with("notification.rs"))
        .expect("components/notification.rs exists");
    for pattern in ["listen(", ".forget()"] {
        assert!(
            !notification.content.contains(pattern),
            "notification.rs must drop its close listener with the notice, found `{pattern}`"
        );
    }
    assert!(notification.content.contains("Closure<dyn FnMut(Event)>"));
}

#[test]
fn every_test_module_file_exists() {
    let files = source_files();
    for file in &files {
        for line in file.content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(name) = rest.strip_suffix("\"]") else {
                continue;
            };
            let dir = Path::new(&file.path).parent().unwrap_or(Path::new("src"));
            assert!(dir.join(name).exists(), "{} references missing {name}", file.path);
        }
    }
}
