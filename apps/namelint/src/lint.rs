//! Lint runner: evaluates descriptors in parallel and aggregates a report.
//!
//! Descriptors are independent, so evaluation is sharded across the rayon
//! pool. The aggregator restores input order; a descriptor that cannot be
//! classified becomes a diagnostic without affecting the others.

use crate::case::{CaseAnalyzer, SpellingSettings};
use crate::classify::RoleClassifier;
use crate::error::{ClassificationError, ConfigurationError};
use crate::evaluate::RuleEvaluator;
use crate::models::{Finding, IdentifierDescriptor, Report, Role};
use crate::registry::{RuleRegistry, RuleSelection};
use crate::report::ReportAggregator;
use rayon::prelude::*;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
/// Static input tables for one lint invocation.
pub struct LintSettings {
    pub selection: RuleSelection,
    pub spelling: SpellingSettings,
    /// Empty keeps the default verb precedence.
    pub verb_precedence: Vec<Role>,
    /// Worker threads; 0 uses the global rayon pool.
    pub jobs: usize,
}

impl LintSettings {
    /// Build the evaluator. Fails before any identifier is looked at.
    pub fn build_evaluator(&self) -> Result<RuleEvaluator, ConfigurationError> {
        let registry = RuleRegistry::with_selection(&self.selection)?;
        let classifier = if self.verb_precedence.is_empty() {
            RoleClassifier::default()
        } else {
            RoleClassifier::with_verb_precedence(&self.verb_precedence)
        };
        Ok(RuleEvaluator::new(
            registry,
            classifier,
            CaseAnalyzer::new(&self.spelling),
        ))
    }
}

/// Evaluate `descriptors` and aggregate the report in input order.
pub fn lint_descriptors(evaluator: &RuleEvaluator, descriptors: &[IdentifierDescriptor]) -> Report {
    let outcomes: Vec<(usize, Result<Vec<Finding>, ClassificationError>)> = descriptors
        .par_iter()
        .enumerate()
        .map(|(i, d)| (i, evaluator.evaluate(d)))
        .collect();

    let mut aggregator = ReportAggregator::new();
    for (i, outcome) in outcomes {
        let name = &descriptors[i].name;
        match outcome {
            Ok(findings) => aggregator.add_at(i, name, findings),
            Err(err) => {
                log::warn!("skipping descriptor #{} ('{}'): {}", i, name, err);
                aggregator.add_diagnostic(i, name, &err);
            }
        }
    }
    aggregator.build()
}

/// Build the evaluator from `settings` and lint `descriptors`.
///
/// Only a configuration error aborts the run; malformed descriptors are
/// reported as diagnostics on the returned report.
pub fn run_lint(
    settings: &LintSettings,
    descriptors: &[IdentifierDescriptor],
) -> Result<Report, ConfigurationError> {
    let evaluator = settings.build_evaluator()?;
    let started = Instant::now();
    let report = if settings.jobs > 0 {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(settings.jobs)
            .build()
        {
            Ok(pool) => pool.install(|| lint_descriptors(&evaluator, descriptors)),
            Err(e) => {
                log::warn!("falling back to the global thread pool: {}", e);
                lint_descriptors(&evaluator, descriptors)
            }
        }
    } else {
        lint_descriptors(&evaluator, descriptors)
    };
    log::debug!(
        "linted {} identifiers against {} rules in {:?}",
        descriptors.len(),
        evaluator.registry().len(),
        started.elapsed()
    );
    Ok(report)
}
