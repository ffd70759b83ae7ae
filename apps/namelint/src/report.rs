//! Report aggregation.
//!
//! Entries are keyed by input index so evaluation may happen in any order;
//! `build` restores input order. Identifiers submitted twice are kept as
//! two separate entries.

use crate::error::ClassificationError;
use crate::models::{Diagnostic, Finding, Report, ReportEntry, Severity, Summary};

#[derive(Debug, Default)]
pub struct ReportAggregator {
    entries: Vec<ReportEntry>,
    diagnostics: Vec<Diagnostic>,
    next_index: usize,
}

impl ReportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append findings for the next identifier in input order.
    pub fn add(&mut self, identifier: &str, findings: Vec<Finding>) {
        let index = self.next_index;
        self.add_at(index, identifier, findings);
    }

    /// Record findings for the identifier at input position `index`.
    pub fn add_at(&mut self, index: usize, identifier: &str, findings: Vec<Finding>) {
        self.next_index = self.next_index.max(index + 1);
        self.entries.push(ReportEntry {
            index,
            identifier: identifier.to_string(),
            findings,
        });
    }

    /// Record a descriptor that could not be classified.
    pub fn add_diagnostic(&mut self, index: usize, identifier: &str, err: &ClassificationError) {
        self.next_index = self.next_index.max(index + 1);
        self.diagnostics.push(Diagnostic {
            index,
            identifier: identifier.to_string(),
            message: err.to_string(),
        });
    }

    /// Finish the run. Clean identifiers are counted but carry no entry.
    pub fn build(mut self) -> Report {
        self.entries.sort_by_key(|e| e.index);
        self.diagnostics.sort_by_key(|d| d.index);

        let mut summary = Summary {
            identifiers: self.entries.len() + self.diagnostics.len(),
            diagnostics: self.diagnostics.len(),
            ..Summary::default()
        };
        for f in self.entries.iter().flat_map(|e| e.findings.iter()) {
            match f.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.infos += 1,
            }
        }
        self.entries.retain(|e| !e.findings.is_empty());
        summary.flagged = self.entries.len();

        Report {
            entries: self.entries,
            diagnostics: self.diagnostics,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(identifier: &str, rule: &str, severity: Severity) -> Finding {
        Finding {
            identifier: identifier.into(),
            rule_id: rule.into(),
            severity,
            message: format!("{} violates {}", identifier, rule),
            role: None,
            suggestion: None,
            location: None,
        }
    }

    #[test]
    fn test_preserves_input_order_and_duplicates() {
        let mut agg = ReportAggregator::new();
        agg.add("b", vec![finding("b", "r1", Severity::Warning)]);
        agg.add("clean", Vec::new());
        agg.add(
            "b",
            vec![
                finding("b", "r2", Severity::Error),
                finding("b", "r1", Severity::Warning),
            ],
        );
        let report = agg.build();
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].index, 0);
        assert_eq!(report.entries[1].index, 2);
        let rules: Vec<&str> = report.findings().map(|f| f.rule_id.as_str()).collect();
        assert_eq!(rules, vec!["r1", "r2", "r1"]);
        assert_eq!(report.summary.identifiers, 3);
        assert_eq!(report.summary.flagged, 2);
        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.warnings, 2);
    }

    #[test]
    fn test_out_of_order_submission_is_resorted() {
        let mut agg = ReportAggregator::new();
        agg.add_at(2, "c", vec![finding("c", "r", Severity::Info)]);
        agg.add_at(0, "a", vec![finding("a", "r", Severity::Info)]);
        agg.add_diagnostic(1, "", &ClassificationError::EmptyName);
        agg.add("d", vec![finding("d", "r", Severity::Info)]);
        let report = agg.build();
        let names: Vec<&str> = report.entries.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
        assert_eq!(report.entries[2].index, 3);
        assert_eq!(report.diagnostics[0].index, 1);
        assert_eq!(report.summary.identifiers, 4);
        assert_eq!(report.summary.diagnostics, 1);
        assert_eq!(report.summary.infos, 3);
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = ReportAggregator::new().build();
        assert!(report.is_clean());
        assert!(!report.has_errors());
    }
}
