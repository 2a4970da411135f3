//! Cross-checks `t!("…")` call sites against the fallback FTL file.
//!
//! Only direct string-literal keys are found; `fl!` calls and computed ids
//! are invisible to this scan.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "tempgrid-ui.ftl";
const I18N_DIR: &str = "i18n";

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    const NEEDLE: &str = "t!(\"";
    let mut found = BTreeSet::new();
    for file in rust_sources(src_root) {
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        for (pos, _) in content.match_indices(NEEDLE) {
            let rest = &content[pos + NEEDLE.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
    found
}

#[test]
fn every_referenced_key_exists_in_every_locale() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_path = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback = ftl_keys(&fs::read_to_string(&fallback_path).expect("fallback FTL readable"));
    assert!(!fallback.is_empty(), "no keys parsed from {fallback_path:?}");

    let referenced = referenced_keys(&crate_root.join("src"));
    let missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );

    let mut locales: Vec<_> = fs::read_dir(&i18n_root)
        .expect("i18n dir readable")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.contains('-'))
        .collect();
    locales.sort();

    for locale in locales {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("locale {locale} missing {path:?}"));
        let keys = ftl_keys(&content);
        let missing: Vec<_> = referenced.difference(&keys).cloned().collect();
        assert!(
            missing.is_empty(),
            "{locale} lacks referenced keys:\n{}",
            missing.join("\n")
        );
    }

    let unused: Vec<_> = fallback.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: fallback keys not referenced via t!: {}", unused.join(", "));
    }
}
