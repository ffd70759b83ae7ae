//! namelint core library.
//!
//! This crate classifies identifier declarations by semantic role and checks
//! their names against a table of naming rules. Identifiers arrive as
//! descriptors from an external syntax provider; nothing here parses source.
//!
//! High-level modules:
//! - `case`: Spelling analysis (case style, tokens, contractions, acronyms).
//! - `classify`: Descriptor to role-set classification.
//! - `registry`: The rule table, rule selection and custom rules.
//! - `evaluate`: Per-identifier rule evaluation.
//! - `report`: Ordered aggregation of findings and diagnostics.
//! - `lint`: Parallel lint runner over a batch of descriptors.
//! - `inflect`: English plural helpers used by the plurality rule.
//! - `models`: Descriptors, roles, findings and the report.
//! - `config`: Discovery and effective configuration resolution.
//! - `input`: Descriptor loading (JSON array / JSON Lines, globs, stdin).
//! - `output`: Human/JSON printers.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `utils`: Supporting helpers.
pub mod case;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod inflect;
pub mod input;
pub mod lint;
pub mod models;
pub mod output;
pub mod registry;
pub mod report;
pub mod utils;
