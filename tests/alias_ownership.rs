//! Aliases are data owned by `enchant_core`.
//!
//! The front end resolves user input only through `enchant_core` (`lookup`, `resolve_info`, `Query`). These tests
//! read the non-test part of every `src/` file and fail if one spells an alias as a string literal or folds case on
//! its own. The one exception is `src/cli/lookup.rs`, which lowercases input to measure edit distance for
//! suggestions.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use enchant_core::ENCHANTMENTS;

const FRONT_END_SOURCES: &[(&str, &str)] = &[
    ("src/lib.rs", include_str!("../src/lib.rs")),
    ("src/main.rs", include_str!("../src/main.rs")),
    ("src/version.rs", include_str!("../src/version.rs")),
    ("src/cli/mod.rs", include_str!("../src/cli/mod.rs")),
    ("src/cli/commands.rs", include_str!("../src/cli/commands.rs")),
    ("src/cli/lookup.rs", include_str!("../src/cli/lookup.rs")),
    ("src/render/mod.rs", include_str!("../src/render/mod.rs")),
    ("src/render/config.rs", include_str!("../src/render/config.rs")),
    ("src/render/markdown.rs", include_str!("../src/render/markdown.rs")),
];

const CASE_FOLDING: &[&str] = &["to_lowercase", "to_ascii_lowercase", "to_uppercase", "eq_ignore_ascii_case"];

#[test]
fn every_front_end_source_is_checked() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut pending = vec![root.join("src")];
    let mut on_disk = Vec::new();
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).unwrap().flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let rel = path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/");
                on_disk.push(rel);
            }
        }
    }

    for rel in &on_disk {
        assert!(
            FRONT_END_SOURCES.iter().any(|(listed, _)| listed == rel),
            "{rel} is not listed in FRONT_END_SOURCES"
        );
    }
    assert_eq!(on_disk.len(), FRONT_END_SOURCES.len(), "FRONT_END_SOURCES lists a file that no longer exists");
}

#[test]
fn front_end_never_spells_an_alias() {
    let aliases: HashSet<&str> = ENCHANTMENTS.iter().flat_map(|e| e.aliases.iter().copied()).collect();

    let mut offenders = Vec::new();
    for &(path, source) in FRONT_END_SOURCES {
        for (line_no, literal) in string_literals(non_test_part(source)) {
            if aliases.contains(literal.to_lowercase().as_str()) {
                offenders.push(format!("{path}:{line_no}: \"{literal}\""));
            }
        }
    }
    assert!(
        offenders.is_empty(),
        "alias literals outside enchant_core; resolve through enchant_core instead:\n{}",
        offenders.join("\n")
    );
}

#[test]
fn front_end_leaves_case_folding_to_the_registry() {
    for &(path, source) in FRONT_END_SOURCES {
        let code = non_test_part(source);
        let folds: Vec<&str> = CASE_FOLDING.iter().copied().filter(|f| code.contains(f)).collect();
        match path {
            "src/cli/lookup.rs" => assert_eq!(folds, ["to_lowercase"], "{path}"),
            _ => assert!(folds.is_empty(), "{path} folds case itself ({folds:?}); use EnchantmentRegistry::by_alias"),
        }
    }
}

#[test]
fn literal_scanner() {
    let source = "let a = \"sharp\"; // \"smite\"\n// \"lure\"\nf(\"say \\\"hi\\\"\", \"\");\n#[cfg(test)]\n\"luck\"";
    let found: Vec<(usize, String)> = string_literals(non_test_part(source));
    assert_eq!(
        found,
        [(1, "sharp".to_string()), (3, "say \\\"hi\\\"".to_string()), (3, String::new())]
    );
}

/// Source text before the first `#[cfg(test)]`.
fn non_test_part(source: &str) -> &str {
    source.split("#[cfg(test)]").next().unwrap_or(source)
}

/// Single-line string literals with their 1-based line numbers, skipping `//` comments.
fn string_literals(code: &str) -> Vec<(usize, String)> {
    let mut found = Vec::new();
    for (idx, line) in code.lines().enumerate() {
        let mut chars = line.chars().peekable();
        let mut literal: Option<String> = None;
        while let Some(ch) = chars.next() {
            let Some(text) = literal.as_mut() else {
                if ch == '/' && chars.peek() == Some(&'/') {
                    break;
                }
                if ch == '"' {
                    literal = Some(String::new());
                }
                continue;
            };
            match ch {
                '"' => {
                    found.push((idx + 1, std::mem::take(text)));
                    literal = None;
                }
                '\\' => {
                    text.push(ch);
                    text.extend(chars.next());
                }
                _ => text.push(ch),
            }
        }
    }
    found
}
