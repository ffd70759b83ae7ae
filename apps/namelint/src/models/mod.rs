//! Shared data models: descriptors, roles, findings and the report.

pub mod descriptor;
pub mod role;

pub use descriptor::{DeclarationKind, IdentifierDescriptor, Location, SemanticHint, ValueKind};
pub use role::Role;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Severity attached to a rule and copied onto its findings.
pub enum Severity {
    Info,
    #[default]
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" | "hint" | "note" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" | "err" => Ok(Severity::Error),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single violation of one rule by one identifier.
pub struct Finding {
    pub identifier: String,
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Non-fatal problem with one descriptor (it produced no findings).
pub struct Diagnostic {
    pub index: usize,
    pub identifier: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Findings of one submitted identifier, in evaluation order.
pub struct ReportEntry {
    pub index: usize,
    pub identifier: String,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers and exit-code logic.
pub struct Summary {
    pub identifiers: usize,
    pub flagged: usize,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub diagnostics: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Lint results container. Entries are in input order and only include
/// identifiers with at least one finding.
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: Summary,
}

impl Report {
    /// All findings, flattened in report order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.entries.iter().flat_map(|e| e.findings.iter())
    }

    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }

    pub fn is_clean(&self) -> bool {
        self.entries.is_empty() && self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse_and_order() {
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Error));
        assert!("fatal".parse::<Severity>().is_err());
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn test_finding_json_skips_empty_optionals() {
        let f = Finding {
            identifier: "btn".into(),
            rule_id: "no-contractions".into(),
            severity: Severity::Warning,
            message: "avoid contractions".into(),
            role: None,
            suggestion: None,
            location: None,
        };
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["rule_id"], "no-contractions");
        assert_eq!(v["severity"], "warning");
        assert!(v.get("suggestion").is_none());
        assert!(v.get("location").is_none());
    }
}
