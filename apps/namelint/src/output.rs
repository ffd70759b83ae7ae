//! Output rendering for lint, rules and analyze commands.
//!
//! Supports `human` (default), `json` and, for lint, `jsonl` (one finding
//! per line). The JSON form is the serialized report including its summary.

use crate::case::Spelling;
use crate::models::{Finding, Location, Report, Severity};
use crate::registry::{Rule, RuleCheck, RuleRegistry};
use crate::utils::{self, use_colors};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

fn severity_tag(sev: Severity, color: bool) -> (String, String) {
    let (tag, icon) = match sev {
        Severity::Error => ("⟦error⟧", "✖"),
        Severity::Warning => ("⟦warn⟧", "▲"),
        Severity::Info => ("⟦info⟧", "◆"),
    };
    if !color {
        return (tag.to_string(), icon.to_string());
    }
    match sev {
        Severity::Error => (tag.red().bold().to_string(), icon.red().to_string()),
        Severity::Warning => (tag.yellow().bold().to_string(), icon.yellow().to_string()),
        Severity::Info => (tag.blue().bold().to_string(), icon.blue().to_string()),
    }
}

fn format_location(root: &Path, loc: &Location) -> String {
    let file = utils::display_path(root, &loc.file);
    match (loc.line, loc.column) {
        (Some(l), Some(c)) => format!("{}:{}:{}", file, l, c),
        (Some(l), None) => format!("{}:{}", file, l),
        _ => file,
    }
}

/// One human-readable line for `f`.
pub fn format_finding(f: &Finding, root: &Path, color: bool) -> String {
    let (sev, icon) = severity_tag(f.severity, color);
    let subject = match &f.location {
        Some(loc) => format!("{} {}", format_location(root, loc), f.identifier),
        None => f.identifier.clone(),
    };
    let subject = if color {
        subject.bold().to_string()
    } else {
        subject
    };
    let mut line = format!("{} {} {} ❲{}❳ — {}", icon, sev, subject, f.rule_id, f.message);
    if let Some(s) = &f.suggestion {
        if color {
            line.push_str(&format!(" {}", format!("(try `{}`)", s).bright_black()));
        } else {
            line.push_str(&format!(" (try `{}`)", s));
        }
    }
    line
}

/// Print a lint report in the requested format.
pub fn print_report(report: &Report, output: &str, root: &Path) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap_or_default()
        ),
        "jsonl" => {
            for line in compose_report_jsonl(report) {
                println!("{}", line);
            }
            for d in &report.diagnostics {
                eprintln!(
                    "{} descriptor #{} ('{}'): {}",
                    utils::note_prefix(),
                    d.index,
                    d.identifier,
                    d.message
                );
            }
        }
        _ => {
            let color = use_colors(output);
            for f in report.findings() {
                println!("{}", format_finding(f, root, color));
            }
            for d in &report.diagnostics {
                println!(
                    "{} descriptor #{} ('{}') skipped: {}",
                    utils::note_prefix(),
                    d.index,
                    d.identifier,
                    d.message
                );
            }
            let s = &report.summary;
            let summary = format!(
                "— Summary — errors={} warnings={} infos={} flagged={} identifiers={} skipped={}",
                s.errors, s.warnings, s.infos, s.flagged, s.identifiers, s.diagnostics
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    serde_json::to_value(report).unwrap_or(JsonVal::Null)
}

/// One compact JSON document per finding, in report order.
pub fn compose_report_jsonl(report: &Report) -> Vec<String> {
    report
        .findings()
        .filter_map(|f| serde_json::to_string(f).ok())
        .collect()
}

fn check_kind(rule: &Rule) -> JsonVal {
    match &rule.check {
        RuleCheck::Predicate(_) => json!({"kind": "builtin"}),
        RuleCheck::VerbPrefix(verbs) => json!({"kind": "verb-prefix", "verbs": verbs}),
        RuleCheck::QuestionPrefix(p) => json!({"kind": "question-prefix", "prefix": p}),
        RuleCheck::Forbid(re) => json!({"kind": "forbid", "pattern": re.as_str()}),
        RuleCheck::Require(re) => json!({"kind": "require", "pattern": re.as_str()}),
    }
}

/// Compose rules JSON object (pure).
pub fn compose_rules_json(registry: &RuleRegistry) -> JsonVal {
    let rules: Vec<_> = registry
        .list_rules()
        .iter()
        .map(|r| {
            let roles: Vec<&str> = r.roles.iter().map(|role| role.as_str()).collect();
            json!({
                "id": r.id,
                "severity": r.severity,
                "roles": if r.role_agnostic { json!("any") } else { json!(roles) },
                "check": check_kind(r),
                "message": r.message,
            })
        })
        .collect();
    json!({"rules": rules, "total": registry.len()})
}

/// Print the effective rule table.
pub fn print_rules(registry: &RuleRegistry, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_rules_json(registry)).unwrap_or_default()
        ),
        _ => {
            let color = use_colors(output);
            for r in registry.list_rules() {
                let (sev, _) = severity_tag(r.severity, color);
                let roles = if r.role_agnostic {
                    "any".to_string()
                } else {
                    r.roles
                        .iter()
                        .map(|role| role.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                let id = if color {
                    r.id.clone().bold().to_string()
                } else {
                    r.id.clone()
                };
                println!("{} {} [{}]", sev, id, roles);
            }
        }
    }
}

/// Compose analyze JSON object (pure).
pub fn compose_analysis_json(name: &str, spelling: &Spelling) -> JsonVal {
    json!({
        "name": name,
        "style": spelling.style,
        "flags": spelling.flags(),
        "tokens": spelling.tokens,
        "contractions": spelling.contractions,
        "acronym_mismatches": spelling.acronym_mismatches,
    })
}

/// Print the spelling analysis of one name.
pub fn print_analysis(name: &str, spelling: &Spelling, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_analysis_json(name, spelling))
                .unwrap_or_default()
        ),
        _ => {
            let flags: Vec<String> = spelling.flags().iter().map(|s| s.to_string()).collect();
            println!("name:         {}", name);
            println!("style:        {}", flags.join(" + "));
            println!("tokens:       {}", spelling.tokens.join(" · "));
            if !spelling.contractions.is_empty() {
                println!("contractions: {}", spelling.contractions.join(", "));
            }
            for m in &spelling.acronym_mismatches {
                println!("acronym:      {} -> {}", m.found, m.expected);
            }
        }
    }
}
