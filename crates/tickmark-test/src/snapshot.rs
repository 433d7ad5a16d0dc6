//! Markup regression testing via snapshot comparison.
//!
//! Baselines live under `tests/snapshots/<name>.snap`, relative to the crate
//! being tested. Run with `SNAPSHOT_UPDATE=1` to write or refresh them.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tickmark_core::{Element, Node};

/// Render an element tree as indented markup, one node per line.
///
/// Attributes stay inline and sorted. Void elements close themselves,
/// other elements get their closing tag on its own line.
#[must_use]
pub fn pretty(root: &Element) -> String {
    let mut out = String::new();
    write_pretty(root, 0, &mut out);
    out
}

fn write_pretty(el: &Element, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);

    let mut shell = Element::new(el.tag());
    for (name, value) in el.attrs() {
        shell.set_attr(name.clone(), value.clone());
    }
    let html = shell.to_html();
    let close = format!("</{}>", el.tag());

    match html.strip_suffix(&close) {
        Some(open) => {
            out.push_str(&indent);
            out.push_str(open);
            out.push('\n');
            for child in el.children() {
                match child {
                    Node::Element(child) => write_pretty(child, depth + 1, out),
                    Node::Text(_) => {
                        out.push_str(&indent);
                        out.push_str("  ");
                        out.push_str(&child.to_html());
                        out.push('\n');
                    }
                }
            }
            out.push_str(&indent);
            out.push_str(&close);
            out.push('\n');
        }
        None => {
            out.push_str(&indent);
            out.push_str(&html);
            out.push('\n');
        }
    }
}

/// Snapshot comparison utilities.
pub struct Snapshot;

impl Snapshot {
    /// Compare markup against the baseline `tests/snapshots/<name>.snap`.
    ///
    /// # Panics
    ///
    /// Panics if the baseline is missing or differs.
    pub fn assert_match(name: &str, actual: &str) {
        Self::assert_match_in(Path::new("tests/snapshots"), name, actual);
    }

    /// Compare markup against the baseline `<dir>/<name>.snap`.
    ///
    /// Trailing whitespace is ignored. On a mismatch the actual markup is
    /// written next to the baseline as `<name>.actual.snap`.
    ///
    /// # Panics
    ///
    /// Panics if the baseline is missing or differs.
    pub fn assert_match_in(dir: &Path, name: &str, actual: &str) {
        let baseline_path = Self::baseline_path(dir, name);
        let update = std::env::var("SNAPSHOT_UPDATE").is_ok();

        match fs::read_to_string(&baseline_path) {
            Ok(baseline) if baseline.trim_end() == actual.trim_end() => {}
            Ok(_) | Err(_) if update => {
                Self::save(&baseline_path, actual);
                println!("Updated baseline: {}", baseline_path.display());
            }
            Ok(baseline) => {
                let actual_path = Self::actual_path(dir, name);
                Self::save(&actual_path, actual);

                panic!(
                    "Snapshot '{}' does not match\n\
                     Baseline: {}\n\
                     Actual: {}\n\
                     {}",
                    name,
                    baseline_path.display(),
                    actual_path.display(),
                    Self::diff(&baseline, actual)
                );
            }
            Err(_) => panic!(
                "No baseline found for '{}'. Run with SNAPSHOT_UPDATE=1 to create.\n\
                 Expected path: {}",
                name,
                baseline_path.display()
            ),
        }
    }

    /// Line diff of two texts, `-` for expected and `+` for actual.
    #[must_use]
    pub fn diff(expected: &str, actual: &str) -> String {
        let expected: Vec<_> = expected.trim_end().lines().collect();
        let actual: Vec<_> = actual.trim_end().lines().collect();
        let mut out = String::new();

        for i in 0..expected.len().max(actual.len()) {
            match (expected.get(i), actual.get(i)) {
                (Some(e), Some(a)) if e == a => {
                    let _ = writeln!(out, "  {e}");
                }
                (e, a) => {
                    if let Some(e) = e {
                        let _ = writeln!(out, "- {e}");
                    }
                    if let Some(a) = a {
                        let _ = writeln!(out, "+ {a}");
                    }
                }
            }
        }
        out
    }

    fn baseline_path(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{name}.snap"))
    }

    fn actual_path(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{name}.actual.snap"))
    }

    fn save(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let mut contents = contents.trim_end().to_string();
        contents.push('\n');
        if let Err(err) = fs::write(path, contents) {
            eprintln!("Could not write snapshot {}: {err}", path.display());
        }
    }
}
