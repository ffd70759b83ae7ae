//! Descriptor loading for the CLI.
//!
//! Descriptors arrive from the syntax provider as a JSON array or as JSON
//! Lines. Inputs are file paths or glob patterns relative to the repository
//! root; `-` reads standard input.

use crate::error::InputError;
use crate::models::IdentifierDescriptor;
use glob::glob;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const STDIN: &str = "-";

/// Expand `patterns` against `root` into a sorted, de-duplicated file list.
/// `-` is kept as-is.
pub fn expand_inputs(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, InputError> {
    let mut out: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        if pat == STDIN {
            out.push(PathBuf::from(STDIN));
            continue;
        }
        let abs = if Path::new(pat).is_absolute() {
            PathBuf::from(pat)
        } else {
            root.join(pat)
        };
        let pattern = abs.to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|e| InputError::Pattern {
            pattern: pat.clone(),
            message: e.to_string(),
        })?;
        let mut matched: Vec<PathBuf> = entries.flatten().filter(|p| p.is_file()).collect();
        if matched.is_empty() {
            return Err(InputError::NoMatch(pat.clone()));
        }
        matched.sort();
        for p in matched {
            if !out.contains(&p) {
                out.push(p);
            }
        }
    }
    Ok(out)
}

/// Parse descriptors from `text`. A leading `[` selects the JSON array
/// form; anything else is read as JSON Lines (blank lines skipped).
///
/// Text that is not JSON fails the whole input. A record that is JSON but
/// not a valid descriptor is kept as a rejected descriptor so the run can
/// report it at its position and lint the rest.
pub fn parse_descriptors(path: &Path, text: &str) -> Result<Vec<IdentifierDescriptor>, InputError> {
    if text.trim_start().starts_with('[') {
        let records: Vec<Value> = serde_json::from_str(text).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            line: source.line(),
            source,
        })?;
        return Ok(records
            .into_iter()
            .enumerate()
            .map(|(i, record)| to_descriptor(record, || format!("{}[{}]", path.display(), i)))
            .collect());
    }
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: Value = serde_json::from_str(line).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;
        out.push(to_descriptor(record, || format!("{}:{}", path.display(), i + 1)));
    }
    Ok(out)
}

fn to_descriptor(record: Value, position: impl Fn() -> String) -> IdentifierDescriptor {
    let name = record
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    match serde_json::from_value(record) {
        Ok(d) => d,
        Err(e) => {
            let reason = format!("{}: {}", position(), e);
            log::debug!("rejected descriptor at {}", reason);
            IdentifierDescriptor::rejected(name, reason)
        }
    }
}

fn read_source(path: &Path) -> Result<String, InputError> {
    if path == Path::new(STDIN) {
        let mut s = String::new();
        std::io::stdin()
            .read_to_string(&mut s)
            .map_err(|source| InputError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(s);
    }
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every descriptor from `patterns`, files concatenated in expansion
/// order.
pub fn load_descriptors(
    root: &Path,
    patterns: &[String],
) -> Result<Vec<IdentifierDescriptor>, InputError> {
    let files = expand_inputs(root, patterns)?;
    let mut out = Vec::new();
    for f in &files {
        let text = read_source(f)?;
        let batch = parse_descriptors(f, &text)?;
        log::debug!("loaded {} descriptors from {}", batch.len(), f.display());
        out.extend(batch);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeclarationKind;
    use tempfile::tempdir;

    #[test]
    fn test_parse_json_array() {
        let text = r#"[
            {"name": "SHARED_CONSTANT", "declarationKind": "constant", "exported": true},
            {"name": "getUsers", "kind": "function", "returnsCollection": true}
        ]"#;
        let ds = parse_descriptors(Path::new("ids.json"), text).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds[0].exported);
        assert_eq!(ds[1].declaration_kind, Some(DeclarationKind::Function));
        assert_eq!(ds[1].returns_collection, Some(true));
    }

    #[test]
    fn test_parse_jsonl_reports_line() {
        let text = "{\"name\":\"a\",\"kind\":\"variable\"}\n\n{\"name\": \n";
        let err = parse_descriptors(Path::new("ids.jsonl"), text).unwrap_err();
        match err {
            InputError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_record_is_kept_in_place() {
        let text = concat!(
            "{\"name\":\"first\",\"kind\":\"variable\"}\n",
            "{\"name\":\"second\",\"kind\":\"variable\",\"exported\":\"yes\"}\n",
            "{\"name\":\"third\",\"kind\":\"variable\"}\n",
        );
        let ds = parse_descriptors(Path::new("ids.jsonl"), text).unwrap();
        let names: Vec<&str> = ds.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(ds[0].rejection.is_none());
        assert!(ds[1].rejection.as_deref().unwrap().starts_with("ids.jsonl:2: "));
        assert!(ds[2].rejection.is_none());

        let ds = parse_descriptors(Path::new("ids.json"), "[{\"name\": 3}]").unwrap();
        assert_eq!(ds[0].name, "");
        assert!(ds[0].rejection.as_deref().unwrap().starts_with("ids.json[0]: "));
    }

    #[test]
    fn test_load_descriptors_expands_globs_in_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("ids")).unwrap();
        fs::write(
            root.join("ids/b.jsonl"),
            "{\"name\":\"second\",\"kind\":\"variable\"}\n",
        )
        .unwrap();
        fs::write(
            root.join("ids/a.jsonl"),
            "{\"name\":\"first\",\"kind\":\"variable\"}\n",
        )
        .unwrap();
        let ds = load_descriptors(root, &["ids/*.jsonl".to_string()]).unwrap();
        let names: Vec<&str> = ds.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_unmatched_pattern_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_descriptors(dir.path(), &["missing/*.jsonl".to_string()]).unwrap_err();
        assert!(matches!(err, InputError::NoMatch(p) if p == "missing/*.jsonl"));
    }
}
