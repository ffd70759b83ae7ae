//! Rule evaluation for a single identifier.

use crate::case::CaseAnalyzer;
use crate::classify::RoleClassifier;
use crate::error::ClassificationError;
use crate::models::{Finding, IdentifierDescriptor};
use crate::registry::{RuleContext, RuleRegistry};

/// Composes classifier, analyzer and registry. Holds no mutable state, so
/// one evaluator can be shared across worker threads.
#[derive(Debug, Clone)]
pub struct RuleEvaluator {
    registry: RuleRegistry,
    classifier: RoleClassifier,
    analyzer: CaseAnalyzer,
}

impl RuleEvaluator {
    pub fn new(registry: RuleRegistry, classifier: RoleClassifier, analyzer: CaseAnalyzer) -> Self {
        Self {
            registry,
            classifier,
            analyzer,
        }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Findings for `descriptor`, in registry order. Every applicable rule
    /// is checked; one violation never hides another.
    pub fn evaluate(
        &self,
        descriptor: &IdentifierDescriptor,
    ) -> Result<Vec<Finding>, ClassificationError> {
        let roles = self.classifier.classify(descriptor)?;
        let spelling = self.analyzer.analyze(&descriptor.name);
        let mut findings = Vec::new();
        for rule in self.registry.list_rules() {
            if !rule.applies(&roles) {
                continue;
            }
            let ctx = RuleContext {
                name: &descriptor.name,
                role: rule.matching_role(&roles),
                roles: &roles,
                descriptor,
                spelling: &spelling,
                analyzer: &self.analyzer,
            };
            if rule.is_satisfied(&ctx) {
                continue;
            }
            findings.push(Finding {
                identifier: descriptor.name.clone(),
                rule_id: rule.id.clone(),
                severity: rule.severity,
                message: rule.render_message(&ctx),
                role: ctx.role,
                suggestion: rule.suggestion(&ctx).filter(|s| *s != descriptor.name),
                location: descriptor.location.clone(),
            });
        }
        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeclarationKind as K, Role, Severity};

    fn evaluator() -> RuleEvaluator {
        RuleEvaluator::new(
            RuleRegistry::builtin().unwrap(),
            RoleClassifier::default(),
            CaseAnalyzer::default(),
        )
    }

    fn rule_ids(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.rule_id.as_str()).collect()
    }

    #[test]
    fn test_exported_constant_spelling() {
        let ev = evaluator();
        let ok = IdentifierDescriptor::new("SHARED_CONSTANT", K::Constant).exported();
        assert!(ev.evaluate(&ok).unwrap().is_empty());

        let bad = IdentifierDescriptor::new("sharedConstant", K::Constant).exported();
        let findings = ev.evaluate(&bad).unwrap();
        assert_eq!(rule_ids(&findings), vec!["upper-snake-exported-constant"]);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].role, Some(Role::ExportedConstant));
        assert_eq!(findings[0].suggestion.as_deref(), Some("SHARED_CONSTANT"));
        assert_eq!(
            findings[0].message,
            "exported constant `sharedConstant` is camelCase; use UPPER_SNAKE_CASE"
        );
    }

    #[test]
    fn test_event_handlers() {
        let ev = evaluator();
        let ok = IdentifierDescriptor::new("handleClick", K::Function).with_hint("event-handler");
        assert!(ev.evaluate(&ok).unwrap().is_empty());

        let contracted = IdentifierDescriptor::new("onClk", K::Variable).with_hint("event-handler");
        let findings = ev.evaluate(&contracted).unwrap();
        assert_eq!(rule_ids(&findings), vec!["no-contractions"]);
        assert!(findings[0].message.contains("clk"));

        let unprefixed = IdentifierDescriptor::new("clickButton", K::Function)
            .with_hint("event-handler");
        let findings = ev.evaluate(&unprefixed).unwrap();
        assert_eq!(rule_ids(&findings), vec!["prefix-handle"]);
        assert_eq!(findings[0].suggestion.as_deref(), Some("handleClickButton"));
    }

    #[test]
    fn test_multiple_independent_findings() {
        let ev = evaluator();
        let d = IdentifierDescriptor::new("btnVisible", K::Variable).with_hint("boolean-flag");
        let findings = ev.evaluate(&d).unwrap();
        assert_eq!(rule_ids(&findings), vec!["no-contractions", "boolean-prefix"]);
        assert_eq!(findings[1].suggestion.as_deref(), Some("isBtnVisible"));
    }

    #[test]
    fn test_question_prefix_refinement() {
        let ev = evaluator();
        let d = IdentifierDescriptor::new("isModalShown", K::StatePair)
            .with_value_kind(crate::models::ValueKind::Boolean)
            .with_hint("render-gate");
        let findings = ev.evaluate(&d).unwrap();
        assert_eq!(rule_ids(&findings), vec!["prefix-should"]);
        assert_eq!(findings[0].suggestion.as_deref(), Some("shouldModalShown"));

        let d = IdentifierDescriptor::new("isNotActive", K::Variable).with_hint("boolean-flag");
        assert_eq!(rule_ids(&ev.evaluate(&d).unwrap()), vec!["no-negated-boolean"]);
    }

    #[test]
    fn test_verb_prefix_replacement() {
        let ev = evaluator();
        let d = IdentifierDescriptor::new("getUsers", K::Function)
            .with_hint("api-call")
            .with_returns_collection(true);
        let findings = ev.evaluate(&d).unwrap();
        assert_eq!(rule_ids(&findings), vec!["prefix-fetch"]);
        assert_eq!(findings[0].suggestion.as_deref(), Some("fetchUsers"));
    }

    #[test]
    fn test_plural_acronym_names_are_clean() {
        let ev = evaluator();
        let d = IdentifierDescriptor::new("getUserIDs", K::Function).with_returns_collection(true);
        assert!(ev.evaluate(&d).unwrap().is_empty());
        let d = IdentifierDescriptor::new("fetchAPIs", K::Function)
            .with_hint("api-call")
            .with_returns_collection(true);
        assert!(ev.evaluate(&d).unwrap().is_empty());

        let d = IdentifierDescriptor::new("getUserIDs", K::Function).with_returns_collection(false);
        let findings = ev.evaluate(&d).unwrap();
        assert_eq!(rule_ids(&findings), vec!["plural-matches-return"]);
        assert_eq!(findings[0].suggestion.as_deref(), Some("getUserID"));

        let d = IdentifierDescriptor::new("fetchUserIds", K::Function)
            .with_hint("api-call")
            .with_returns_collection(true);
        let findings = ev.evaluate(&d).unwrap();
        assert_eq!(rule_ids(&findings), vec!["consistent-acronym-casing"]);
        let fixed = findings[0].suggestion.clone().unwrap();
        let d = IdentifierDescriptor::new(fixed, K::Function)
            .with_hint("api-call")
            .with_returns_collection(true);
        assert!(ev.evaluate(&d).unwrap().is_empty());
    }

    #[test]
    fn test_component_acronym() {
        let ev = evaluator();
        let d = IdentifierDescriptor::new("HttpRequestComponent", K::ClassOrComponent);
        let findings = ev.evaluate(&d).unwrap();
        assert_eq!(rule_ids(&findings), vec!["consistent-acronym-casing"]);
        assert_eq!(findings[0].suggestion.as_deref(), Some("HTTPRequestComponent"));

        let d = IdentifierDescriptor::new("userCard", K::ClassOrComponent);
        let findings = ev.evaluate(&d).unwrap();
        assert_eq!(rule_ids(&findings), vec!["pascal-case-component"]);
        assert_eq!(findings[0].suggestion.as_deref(), Some("UserCard"));
    }

    #[test]
    fn test_underscored_alongside_valid_base() {
        let ev = evaluator();
        let d = IdentifierDescriptor::new("_myPrivateVariable", K::Variable);
        let findings = ev.evaluate(&d).unwrap();
        assert_eq!(rule_ids(&findings), vec!["no-leading-underscore"]);
        assert_eq!(findings[0].suggestion.as_deref(), Some("myPrivateVariable"));
    }

    #[test]
    fn test_mixed_case_is_reported_once() {
        let ev = evaluator();
        let d = IdentifierDescriptor::new("user_Name", K::Variable);
        assert_eq!(rule_ids(&ev.evaluate(&d).unwrap()), vec!["no-mixed-case"]);
        let d = IdentifierDescriptor::new("user_name", K::Variable);
        let findings = ev.evaluate(&d).unwrap();
        assert_eq!(rule_ids(&findings), vec!["camel-case"]);
        assert_eq!(findings[0].suggestion.as_deref(), Some("userName"));
    }

    #[test]
    fn test_unclassified_clean_identifier_has_no_findings() {
        let ev = evaluator();
        let d = IdentifierDescriptor::new("synchronize", K::Function);
        assert!(ev.evaluate(&d).unwrap().is_empty());
        // spelling rules still apply without a role
        let d = IdentifierDescriptor::new("x", K::Function);
        assert_eq!(rule_ids(&ev.evaluate(&d).unwrap()), vec!["no-single-letter"]);
    }

    #[test]
    fn test_classification_error_is_returned() {
        let ev = evaluator();
        let d = IdentifierDescriptor::default();
        assert_eq!(ev.evaluate(&d), Err(ClassificationError::EmptyName));
    }
}
