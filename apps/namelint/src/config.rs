//! Configuration discovery and effective settings resolution.
//!
//! namelint reads `namelint.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `input`: none (must be given on the CLI or in config)
//! - `output`: `human`
//! - `jobs`: 0 (rayon decides)
//! - `spelling.acronyms|contractions`: built-in tables
//! - `spelling.contraction_match`: `token`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::case::{ContractionMatch, SpellingSettings};
use crate::error::{ConfigFileError, ConfigurationError};
use crate::lint::LintSettings;
use crate::models::Role;
use crate::registry::{CustomRuleSpec, RuleSelection};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: [&str; 3] = ["namelint.toml", "namelint.yaml", "namelint.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Rule selection section under `[rules]`.
pub struct RulesCfg {
    #[serde(default)]
    pub select: Vec<String>,
    #[serde(default)]
    pub disable: Vec<String>,
    #[serde(default)]
    pub severity: BTreeMap<String, String>, // rule id -> info|warning|error
    #[serde(default)]
    pub custom: Vec<CustomRuleSpec>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Spelling tables under `[spelling]`. `acronyms`/`contractions` replace the
/// built-in lists; the `extra_` forms extend them.
pub struct SpellingCfg {
    pub acronyms: Option<Vec<String>>,
    #[serde(default)]
    pub extra_acronyms: Vec<String>,
    pub contractions: Option<Vec<String>>,
    #[serde(default)]
    pub extra_contractions: Vec<String>,
    pub contraction_match: Option<ContractionMatch>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Classifier tuning under `[classifier]`.
pub struct ClassifierCfg {
    #[serde(default)]
    pub verb_precedence: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `namelint.toml|yaml`.
pub struct NamelintConfig {
    #[serde(default)]
    pub input: Vec<String>,
    pub output: Option<String>,
    pub jobs: Option<usize>,
    #[serde(default)]
    pub rules: RulesCfg,
    #[serde(default)]
    pub spelling: SpellingCfg,
    #[serde(default)]
    pub classifier: ClassifierCfg,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub inputs: Vec<String>,
    pub output: String,
    pub jobs: usize,
    pub rules: RulesCfg,
    pub spelling: SpellingCfg,
    pub classifier: ClassifierCfg,
}

impl Effective {
    /// Turn the resolved config into the engine's static input tables.
    pub fn lint_settings(&self) -> Result<LintSettings, ConfigurationError> {
        let verb_precedence = self
            .classifier
            .verb_precedence
            .iter()
            .map(|r| {
                r.parse::<Role>()
                    .map_err(|_| ConfigurationError::UnknownRole(r.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LintSettings {
            selection: RuleSelection {
                select: self.rules.select.clone(),
                disable: self.rules.disable.clone(),
                severity: self.rules.severity.clone(),
                custom: self.rules.custom.clone(),
            },
            spelling: spelling_settings(&self.spelling),
            verb_precedence,
            jobs: self.jobs,
        })
    }
}

fn spelling_settings(cfg: &SpellingCfg) -> SpellingSettings {
    let defaults = SpellingSettings::default();
    let mut acronyms = cfg.acronyms.clone().unwrap_or(defaults.acronyms);
    acronyms.extend(cfg.extra_acronyms.iter().cloned());
    let mut contractions = cfg.contractions.clone().unwrap_or(defaults.contractions);
    contractions.extend(cfg.extra_contractions.iter().cloned());
    SpellingSettings {
        acronyms,
        contractions,
        contraction_match: cfg.contraction_match.unwrap_or(defaults.contraction_match),
    }
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `namelint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Path of the config file under `root`, TOML first.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|f| root.join(f))
        .find(|p| p.exists())
}

/// Load `NamelintConfig` from `path`, choosing the parser by extension.
pub fn load_config_file(path: &Path) -> Result<NamelintConfig, ConfigFileError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
    if is_toml {
        toml::from_str(&s).map_err(|source| ConfigFileError::Toml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(&s).map_err(|source| ConfigFileError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// `cli_config` points at an explicit config file and skips discovery.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_config: Option<&str>,
    cli_inputs: &[String],
    cli_output: Option<&str>,
    cli_jobs: Option<usize>,
) -> Result<Effective, ConfigFileError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let config_path = match cli_config {
        Some(p) => Some(PathBuf::from(p)),
        None => find_config(&repo_root),
    };
    let cfg = match config_path.as_deref() {
        Some(p) => load_config_file(p)?,
        None => NamelintConfig::default(),
    };
    log::debug!(
        "repo root {}, config {}",
        repo_root.display(),
        config_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<none>".to_string())
    );

    let inputs = if cli_inputs.is_empty() {
        cfg.input
    } else {
        cli_inputs.to_vec()
    };
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let jobs = cli_jobs.or(cfg.jobs).unwrap_or(0);

    Ok(Effective {
        repo_root,
        config_path,
        inputs,
        output,
        jobs,
        rules: cfg.rules,
        spelling: cfg.spelling,
        classifier: cfg.classifier,
    })
}
