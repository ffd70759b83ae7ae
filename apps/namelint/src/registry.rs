//! Rule table and registry.
//!
//! The built-in table holds the general conventions (case per role, the
//! spelling prohibitions, plurality) and the 14 verb-prefix conventions
//! (`boolean-prefix` plus the thirteen `prefix-*` rules). Table order is
//! evaluation order and therefore report order.
//!
//! A registry is validated once when it is built and never changes
//! afterwards. `RuleSelection` narrows or extends the table from config.

use crate::case::{CaseAnalyzer, CaseStyle, Spelling};
use crate::classify::RoleSet;
use crate::error::ConfigurationError;
use crate::inflect;
use crate::models::{IdentifierDescriptor, Role, Severity};
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Everything a check may look at.
pub struct RuleContext<'a> {
    pub name: &'a str,
    /// First role of the identifier the rule applies to; `None` for
    /// role-agnostic rules.
    pub role: Option<Role>,
    pub roles: &'a RoleSet,
    pub descriptor: &'a IdentifierDescriptor,
    pub spelling: &'a Spelling,
    pub analyzer: &'a CaseAnalyzer,
}

/// `true` means the identifier satisfies the rule.
pub type CheckFn = fn(&RuleContext<'_>) -> bool;
/// Expected spelling, when one can be derived.
pub type SuggestFn = fn(&RuleContext<'_>) -> Option<String>;

#[derive(Clone)]
/// How a rule decides.
pub enum RuleCheck {
    Predicate(CheckFn),
    /// The first word must be one of the verbs.
    VerbPrefix(&'static [&'static str]),
    /// Names carrying a question prefix must use this one.
    QuestionPrefix(&'static str),
    /// The name must not match.
    Forbid(Regex),
    /// The name must match.
    Require(Regex),
}

#[derive(Clone)]
/// A naming rule. Immutable once registered.
pub struct Rule {
    pub id: String,
    pub roles: Vec<Role>,
    pub role_agnostic: bool,
    pub severity: Severity,
    /// Message template; `{name}`, `{role}`, `{style}`, `{contractions}`
    /// and `{acronyms}` are substituted.
    pub message: String,
    pub check: RuleCheck,
    pub suggest: Option<SuggestFn>,
}

impl fmt::Debug for RuleCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleCheck::Predicate(_) => f.write_str("Predicate(..)"),
            RuleCheck::VerbPrefix(verbs) => f.debug_tuple("VerbPrefix").field(verbs).finish(),
            RuleCheck::QuestionPrefix(p) => f.debug_tuple("QuestionPrefix").field(p).finish(),
            RuleCheck::Forbid(re) => f.debug_tuple("Forbid").field(&re.as_str()).finish(),
            RuleCheck::Require(re) => f.debug_tuple("Require").field(&re.as_str()).finish(),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("roles", &self.roles)
            .field("role_agnostic", &self.role_agnostic)
            .field("severity", &self.severity)
            .field("check", &self.check)
            .finish_non_exhaustive()
    }
}

pub const BOOLEAN_PREFIXES: &[&str] = &["is", "has", "should", "can", "did", "was", "will"];

/// Leading words recognised as a verb when suggesting a replacement.
const KNOWN_VERBS: &[&str] = &[
    "build", "clear", "compose", "convert", "create", "default", "delete", "fetch", "get",
    "handle", "initial", "load", "make", "on", "remove", "reset", "retrieve", "set", "to",
    "update",
];

const NEGATIONS: &[&str] = &["no", "non", "not"];

impl Rule {
    fn new(
        id: &str,
        roles: &[Role],
        severity: Severity,
        message: &str,
        check: RuleCheck,
        suggest: Option<SuggestFn>,
    ) -> Self {
        Self {
            id: id.to_string(),
            roles: roles.to_vec(),
            role_agnostic: false,
            severity,
            message: message.to_string(),
            check,
            suggest,
        }
    }

    fn universal(
        id: &str,
        severity: Severity,
        message: &str,
        check: CheckFn,
        suggest: Option<SuggestFn>,
    ) -> Self {
        Self {
            role_agnostic: true,
            ..Self::new(id, &[], severity, message, RuleCheck::Predicate(check), suggest)
        }
    }

    /// First role of `roles` this rule covers, or `None`.
    pub fn matching_role(&self, roles: &RoleSet) -> Option<Role> {
        roles.iter().copied().find(|r| self.roles.contains(r))
    }

    pub fn applies(&self, roles: &RoleSet) -> bool {
        self.role_agnostic || self.matching_role(roles).is_some()
    }

    pub fn is_satisfied(&self, ctx: &RuleContext<'_>) -> bool {
        match &self.check {
            RuleCheck::Predicate(f) => f(ctx),
            RuleCheck::VerbPrefix(verbs) => starts_with_word(ctx.spelling, verbs),
            RuleCheck::QuestionPrefix(prefix) => {
                !starts_with_word(ctx.spelling, BOOLEAN_PREFIXES)
                    || starts_with_word(ctx.spelling, &[*prefix])
            }
            RuleCheck::Forbid(re) => !re.is_match(ctx.name),
            RuleCheck::Require(re) => re.is_match(ctx.name),
        }
    }

    pub fn render_message(&self, ctx: &RuleContext<'_>) -> String {
        let acronyms: Vec<String> = ctx
            .spelling
            .acronym_mismatches
            .iter()
            .map(|m| format!("{} → {}", m.found, m.expected))
            .collect();
        self.message
            .replace("{name}", ctx.name)
            .replace("{role}", ctx.role.map(Role::as_str).unwrap_or("any"))
            .replace("{style}", &ctx.spelling.base.to_string())
            .replace("{contractions}", &ctx.spelling.contractions.join(", "))
            .replace("{acronyms}", &acronyms.join(", "))
    }

    pub fn suggestion(&self, ctx: &RuleContext<'_>) -> Option<String> {
        if let Some(f) = self.suggest {
            return f(ctx);
        }
        match &self.check {
            RuleCheck::VerbPrefix(verbs) => replace_first_word(ctx, verbs[0]),
            RuleCheck::QuestionPrefix(prefix) => replace_first_word(ctx, prefix),
            _ => None,
        }
    }
}

/// Roles named in camelCase by convention.
const CAMEL_ROLES: &[Role] = &[
    Role::PlainVariable,
    Role::BooleanFlag,
    Role::ComputedGetter,
    Role::Setter,
    Role::Fetcher,
    Role::RenderPredicate,
    Role::StatePredicate,
    Role::ConditionalPredicate,
    Role::EventHandler,
    Role::Resetter,
    Role::Remover,
    Role::Composer,
    Role::InitialState,
    Role::DefaultsProvider,
    Role::Converter,
];

/// Roles whose name describes a value that may be a collection.
const VALUE_ROLES: &[Role] = &[
    Role::PlainVariable,
    Role::ComputedGetter,
    Role::Fetcher,
    Role::Composer,
    Role::Converter,
    Role::DefaultsProvider,
    Role::InitialState,
];

/// The built-in rule table in evaluation order.
pub fn builtin_rules() -> Vec<Rule> {
    use RuleCheck::{QuestionPrefix, VerbPrefix};
    use Severity::{Error, Info, Warning};
    vec![
        Rule::universal(
            "no-single-letter",
            Warning,
            "`{name}` is a single letter; use a descriptive name",
            |c| !c.spelling.single_letter,
            None,
        ),
        Rule::universal(
            "no-leading-underscore",
            Info,
            "`{name}` uses a leading underscore; express privacy through scope",
            |c| !c.spelling.underscored,
            Some(|c| Some(c.name.trim_start_matches('_').to_string()).filter(|s| !s.is_empty())),
        ),
        Rule::universal(
            "no-contractions",
            Warning,
            "`{name}` contains contractions ({contractions}); spell words out",
            |c| c.spelling.contractions.is_empty(),
            None,
        ),
        Rule::universal(
            "consistent-acronym-casing",
            Warning,
            "`{name}` has inconsistent acronym casing ({acronyms})",
            |c| c.spelling.acronym_mismatches.is_empty(),
            Some(|c| c.analyzer.acronym_fix(c.name, c.spelling)),
        ),
        Rule::universal(
            "no-mixed-case",
            Error,
            "`{name}` mixes casing conventions",
            |c| c.spelling.single_letter || c.spelling.base != CaseStyle::Mixed,
            None,
        ),
        Rule::new(
            "camel-case",
            CAMEL_ROLES,
            Error,
            "`{name}` is {style}; a {role} is written in camelCase",
            RuleCheck::Predicate(|c| clean_style_is(c.spelling, CaseStyle::CamelCase)),
            Some(|c| c.analyzer.respell(c.spelling, CaseStyle::CamelCase)),
        ),
        Rule::new(
            "upper-snake-exported-constant",
            &[Role::ExportedConstant],
            Error,
            "exported constant `{name}` is {style}; use UPPER_SNAKE_CASE",
            RuleCheck::Predicate(|c| clean_style_is(c.spelling, CaseStyle::UpperSnakeCase)),
            Some(|c| c.analyzer.respell(c.spelling, CaseStyle::UpperSnakeCase)),
        ),
        Rule::new(
            "pascal-case-component",
            &[Role::ComponentOrConstructor],
            Error,
            "component `{name}` is {style}; use PascalCase",
            RuleCheck::Predicate(|c| clean_style_is(c.spelling, CaseStyle::PascalCase)),
            Some(|c| c.analyzer.respell(c.spelling, CaseStyle::PascalCase)),
        ),
        Rule::new(
            "boolean-prefix",
            &[Role::BooleanFlag],
            Warning,
            "boolean `{name}` should read as a question (is/has/should/can)",
            VerbPrefix(BOOLEAN_PREFIXES),
            Some(|c| {
                let prefix = if c.roles.contains(&Role::RenderPredicate) {
                    "should"
                } else if c.roles.contains(&Role::ConditionalPredicate) {
                    "has"
                } else {
                    "is"
                };
                let rest = c.analyzer.respell(c.spelling, CaseStyle::PascalCase)?;
                Some(format!("{}{}", prefix, rest))
            }),
        ),
        Rule::new(
            "no-negated-boolean",
            &[Role::BooleanFlag],
            Warning,
            "boolean `{name}` is negated; name the positive condition",
            RuleCheck::Predicate(|c| {
                !c.spelling
                    .tokens
                    .iter()
                    .skip(1)
                    .any(|t| NEGATIONS.contains(&t.to_ascii_lowercase().as_str()))
            }),
            None,
        ),
        Rule::new(
            "prefix-is",
            &[Role::StatePredicate],
            Warning,
            "state predicate `{name}` should start with `is`",
            QuestionPrefix("is"),
            None,
        ),
        Rule::new(
            "prefix-should",
            &[Role::RenderPredicate],
            Warning,
            "render predicate `{name}` should start with `should`",
            QuestionPrefix("should"),
            None,
        ),
        Rule::new(
            "prefix-has",
            &[Role::ConditionalPredicate],
            Warning,
            "membership predicate `{name}` should start with `has`",
            QuestionPrefix("has"),
            None,
        ),
        Rule::new(
            "prefix-get",
            &[Role::ComputedGetter],
            Warning,
            "getter `{name}` should start with `get`",
            VerbPrefix(&["get"]),
            None,
        ),
        Rule::new(
            "prefix-set",
            &[Role::Setter],
            Warning,
            "setter `{name}` should start with `set`",
            VerbPrefix(&["set"]),
            None,
        ),
        Rule::new(
            "prefix-fetch",
            &[Role::Fetcher],
            Warning,
            "API call `{name}` should start with `fetch`",
            VerbPrefix(&["fetch"]),
            None,
        ),
        Rule::new(
            "prefix-reset",
            &[Role::Resetter],
            Warning,
            "`{name}` restores initial state and should start with `reset`",
            VerbPrefix(&["reset"]),
            None,
        ),
        Rule::new(
            "prefix-remove",
            &[Role::Remover],
            Warning,
            "`{name}` removes an item and should start with `remove`",
            VerbPrefix(&["remove"]),
            None,
        ),
        Rule::new(
            "prefix-compose",
            &[Role::Composer],
            Warning,
            "`{name}` builds new data and should start with `compose`",
            VerbPrefix(&["compose"]),
            None,
        ),
        Rule::new(
            "prefix-handle",
            &[Role::EventHandler],
            Warning,
            "event handler `{name}` should start with `handle` (or `on` for props)",
            VerbPrefix(&["handle", "on"]),
            None,
        ),
        Rule::new(
            "prefix-to",
            &[Role::Converter],
            Warning,
            "converter `{name}` should start with `to`",
            VerbPrefix(&["to"]),
            None,
        ),
        Rule::new(
            "prefix-initial",
            &[Role::InitialState],
            Warning,
            "initial state `{name}` should start with `initial`",
            VerbPrefix(&["initial"]),
            None,
        ),
        Rule::new(
            "prefix-default",
            &[Role::DefaultsProvider],
            Warning,
            "default values `{name}` should start with `default`",
            VerbPrefix(&["default"]),
            None,
        ),
        Rule::new(
            "plural-matches-return",
            VALUE_ROLES,
            Warning,
            "`{name}` does not match the plurality of its value",
            RuleCheck::Predicate(plurality_matches),
            Some(plurality_fix),
        ),
    ]
}

fn clean_style_is(spelling: &Spelling, wanted: CaseStyle) -> bool {
    spelling.single_letter || spelling.base == CaseStyle::Mixed || spelling.base == wanted
}

fn starts_with_word(spelling: &Spelling, words: &[&str]) -> bool {
    spelling.tokens.len() >= 2
        && spelling
            .first_word()
            .is_some_and(|w| words.contains(&w.as_str()))
}

/// Swap a known leading verb for `verb`, or prepend it.
fn replace_first_word(ctx: &RuleContext<'_>, verb: &str) -> Option<String> {
    let tokens = &ctx.spelling.tokens;
    let first = ctx.spelling.first_word()?;
    let replaces = tokens.len() >= 2
        && (KNOWN_VERBS.contains(&first.as_str()) || BOOLEAN_PREFIXES.contains(&first.as_str()));
    let rest: Vec<String> = if replaces {
        tokens[1..].to_vec()
    } else {
        tokens.clone()
    };
    let tail = ctx.analyzer.respell(
        &Spelling {
            tokens: rest,
            ..ctx.spelling.clone()
        },
        CaseStyle::PascalCase,
    )?;
    Some(format!("{}{}", verb, tail))
}

fn word_is_plural(ctx: &RuleContext<'_>, word: &str) -> bool {
    ctx.analyzer.is_acronym_plural(word) || inflect::is_plural(word)
}

fn plurality_matches(ctx: &RuleContext<'_>) -> bool {
    match (ctx.descriptor.returns_collection, ctx.spelling.last_word()) {
        (Some(collection), Some(word)) => word_is_plural(ctx, word) == collection,
        _ => true,
    }
}

fn plurality_fix(ctx: &RuleContext<'_>) -> Option<String> {
    let word = ctx.spelling.last_word()?;
    let replacement = if ctx.descriptor.returns_collection? {
        if word_is_plural(ctx, word) {
            return None;
        }
        inflect::pluralize(word)?
    } else if ctx.analyzer.is_acronym_plural(word) {
        word[..word.len() - 1].to_string()
    } else {
        inflect::singularize(word)?
    };
    let stem = ctx.name.strip_suffix(word)?;
    Some(format!("{}{}", stem, replacement))
}

#[derive(Debug, Clone, Default, Deserialize)]
/// A rule defined in config by a regular expression.
pub struct CustomRuleSpec {
    pub id: String,
    /// Role names, or `["any"]` for a role-agnostic rule.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub forbid: Option<String>,
    #[serde(default)]
    pub require: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// Config-driven narrowing and extension of the rule table.
pub struct RuleSelection {
    /// When non-empty, only these rules run.
    pub select: Vec<String>,
    pub disable: Vec<String>,
    pub severity: BTreeMap<String, String>,
    pub custom: Vec<CustomRuleSpec>,
}

impl CustomRuleSpec {
    fn into_rule(self) -> Result<Rule, ConfigurationError> {
        let mut roles = Vec::new();
        let mut role_agnostic = false;
        for r in &self.roles {
            if r.eq_ignore_ascii_case("any") || r == "*" {
                role_agnostic = true;
                continue;
            }
            let role = r
                .parse::<Role>()
                .map_err(|_| ConfigurationError::UnknownRole(r.clone()))?;
            roles.push(role);
        }
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| ConfigurationError::InvalidPattern {
                id: self.id.clone(),
                message: e.to_string(),
            })
        };
        let check = match (self.forbid.as_deref(), self.require.as_deref()) {
            (Some(p), None) => RuleCheck::Forbid(compile(p)?),
            (None, Some(p)) => RuleCheck::Require(compile(p)?),
            _ => {
                return Err(ConfigurationError::InvalidPattern {
                    id: self.id.clone(),
                    message: "exactly one of `forbid` or `require` must be set".into(),
                })
            }
        };
        let severity = match self.severity.as_deref() {
            None => Severity::Warning,
            Some(s) => s
                .parse::<Severity>()
                .map_err(|_| ConfigurationError::UnknownSeverity {
                    id: self.id.clone(),
                    value: s.to_string(),
                })?,
        };
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| format!("`{{name}}` violates {}", self.id));
        Ok(Rule {
            id: self.id,
            roles,
            role_agnostic,
            severity,
            message,
            check,
            suggest: None,
        })
    }
}

/// Ordered, validated, immutable rule table.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// Validate `table` and build a registry from it.
    pub fn new(table: Vec<Rule>) -> Result<Self, ConfigurationError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (position, rule) in table.iter().enumerate() {
            if rule.id.trim().is_empty() {
                return Err(ConfigurationError::MissingId { position });
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(ConfigurationError::DuplicateId(rule.id.clone()));
            }
            if rule.roles.is_empty() && !rule.role_agnostic {
                return Err(ConfigurationError::EmptyRoleSet(rule.id.clone()));
            }
        }
        log::debug!("rule registry built with {} rules", table.len());
        Ok(Self { rules: table })
    }

    /// Registry over the built-in table.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::new(builtin_rules())
    }

    /// Built-in table plus custom rules, narrowed by `selection`.
    pub fn with_selection(selection: &RuleSelection) -> Result<Self, ConfigurationError> {
        let mut table = builtin_rules();
        for spec in &selection.custom {
            table.push(spec.clone().into_rule()?);
        }
        // Validate ids before anything refers to them.
        let full = Self::new(table)?;
        let known = |id: &String| -> Result<(), ConfigurationError> {
            if full.get(id).is_some() {
                Ok(())
            } else {
                Err(ConfigurationError::UnknownRule(id.clone()))
            }
        };
        for id in selection.select.iter().chain(selection.disable.iter()) {
            known(id)?;
        }
        let mut overrides: Vec<(&String, Severity)> = Vec::new();
        for (id, value) in &selection.severity {
            known(id)?;
            let sev = value
                .parse::<Severity>()
                .map_err(|_| ConfigurationError::UnknownSeverity {
                    id: id.clone(),
                    value: value.clone(),
                })?;
            overrides.push((id, sev));
        }
        let rules = full
            .rules
            .into_iter()
            .filter(|r| selection.select.is_empty() || selection.select.contains(&r.id))
            .filter(|r| !selection.disable.contains(&r.id))
            .map(|mut r| {
                if let Some((_, sev)) = overrides.iter().find(|(id, _)| **id == r.id) {
                    r.severity = *sev;
                }
                r
            })
            .collect();
        Self::new(rules)
    }

    pub fn list_rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid_and_ordered() {
        let reg = RuleRegistry::builtin().unwrap();
        let ids: Vec<&str> = reg.list_rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids[0], "no-single-letter");
        assert_eq!(ids.last(), Some(&"plural-matches-return"));
        let verb_rules = ids
            .iter()
            .filter(|id| id.starts_with("prefix-") || **id == "boolean-prefix")
            .count();
        assert_eq!(verb_rules, 14);
    }

    #[test]
    fn test_malformed_tables_fail_fast() {
        let mut table = builtin_rules();
        table[3].id = String::new();
        assert_eq!(
            RuleRegistry::new(table).unwrap_err(),
            ConfigurationError::MissingId { position: 3 }
        );

        let mut table = builtin_rules();
        table.push(table[0].clone());
        assert_eq!(
            RuleRegistry::new(table).unwrap_err(),
            ConfigurationError::DuplicateId("no-single-letter".into())
        );

        let mut table = builtin_rules();
        table[5].roles.clear();
        assert_eq!(
            RuleRegistry::new(table).unwrap_err(),
            ConfigurationError::EmptyRoleSet("camel-case".into())
        );
    }

    #[test]
    fn test_selection_filters_and_overrides() {
        let selection = RuleSelection {
            disable: vec!["no-single-letter".into()],
            severity: BTreeMap::from([("no-contractions".to_string(), "error".to_string())]),
            ..Default::default()
        };
        let reg = RuleRegistry::with_selection(&selection).unwrap();
        assert!(reg.get("no-single-letter").is_none());
        assert_eq!(reg.get("no-contractions").unwrap().severity, Severity::Error);
        assert_eq!(reg.len(), builtin_rules().len() - 1);

        let selection = RuleSelection {
            select: vec!["camel-case".into(), "prefix-get".into()],
            ..Default::default()
        };
        let reg = RuleRegistry::with_selection(&selection).unwrap();
        let ids: Vec<&str> = reg.list_rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["camel-case", "prefix-get"]);
    }

    #[test]
    fn test_selection_rejects_unknown_ids() {
        let selection = RuleSelection {
            disable: vec!["no-such-rule".into()],
            ..Default::default()
        };
        assert_eq!(
            RuleRegistry::with_selection(&selection).unwrap_err(),
            ConfigurationError::UnknownRule("no-such-rule".into())
        );
        let selection = RuleSelection {
            severity: BTreeMap::from([("camel-case".to_string(), "fatal".to_string())]),
            ..Default::default()
        };
        assert!(matches!(
            RuleRegistry::with_selection(&selection),
            Err(ConfigurationError::UnknownSeverity { .. })
        ));
    }

    #[test]
    fn test_custom_rules() {
        let selection = RuleSelection {
            custom: vec![CustomRuleSpec {
                id: "no-data-suffix".into(),
                roles: vec!["plain-variable".into()],
                forbid: Some("Data$".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let reg = RuleRegistry::with_selection(&selection).unwrap();
        let rule = reg.list_rules().last().unwrap();
        assert_eq!(rule.id, "no-data-suffix");
        assert_eq!(rule.roles, vec![Role::PlainVariable]);

        let bad = RuleSelection {
            custom: vec![CustomRuleSpec {
                id: "broken".into(),
                roles: vec!["any".into()],
                require: Some("(".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(matches!(
            RuleRegistry::with_selection(&bad),
            Err(ConfigurationError::InvalidPattern { .. })
        ));

        let no_roles = RuleSelection {
            custom: vec![CustomRuleSpec {
                id: "orphan".into(),
                forbid: Some("x".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(
            RuleRegistry::with_selection(&no_roles).unwrap_err(),
            ConfigurationError::EmptyRoleSet("orphan".into())
        );
    }
}
