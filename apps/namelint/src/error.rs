//! Error types shared by the engine and its CLI wrapper.
//!
//! `ConfigurationError` is fatal and only raised while building the rule
//! registry. `ClassificationError` is scoped to one descriptor and ends up
//! as a diagnostic on the report instead of aborting the run.

use std::path::PathBuf;
use thiserror::Error;

/// Inconsistent rule table or rule selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("rule at position {position} has no id")]
    MissingId { position: usize },
    #[error("duplicate rule id '{0}'")]
    DuplicateId(String),
    #[error("rule '{0}' applies to no roles and is not role-agnostic")]
    EmptyRoleSet(String),
    #[error("unknown rule id '{0}' in rule selection")]
    UnknownRule(String),
    #[error("invalid pattern for rule '{id}': {message}")]
    InvalidPattern { id: String, message: String },
    #[error("unknown role '{0}'")]
    UnknownRole(String),
    #[error("unknown severity '{value}' for rule '{id}'")]
    UnknownSeverity { id: String, value: String },
}

/// A descriptor the classifier cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("identifier has an empty name")]
    EmptyName,
    #[error("identifier '{0}' has no declaration kind")]
    MissingDeclarationKind(String),
    #[error("identifier '{0}' has an unrecognised declaration kind")]
    UnknownDeclarationKind(String),
    #[error("identifier '{name}' is not a valid descriptor: {reason}")]
    InvalidDescriptor { name: String, reason: String },
}

/// Failure to read descriptors handed over by the syntax provider.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: invalid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
    #[error("no input matched '{0}'")]
    NoMatch(String),
}

/// Failure to load `namelint.toml|yaml`.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid TOML: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{} is not valid YAML: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
