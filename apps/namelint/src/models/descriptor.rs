//! Identifier descriptors handed over by the external syntax provider.
//!
//! The JSON shape uses camelCase keys:
//!
//! ```json
//! {"name": "isOpen", "declarationKind": "state-pair", "valueKind": "boolean",
//!  "semanticHint": "boolean-flag, render-gate"}
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Syntactic declaration the identifier was bound by.
pub enum DeclarationKind {
    #[serde(alias = "var", alias = "let")]
    Variable,
    #[serde(alias = "fn", alias = "method", alias = "arrow-function")]
    Function,
    #[serde(alias = "const")]
    Constant,
    #[serde(alias = "class", alias = "component", alias = "constructor")]
    ClassOrComponent,
    #[serde(alias = "react-hook-state-pair", alias = "use-state")]
    StatePair,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Coarse type of the bound value, when the provider can infer it.
pub enum ValueKind {
    #[serde(alias = "bool")]
    Boolean,
    Number,
    String,
    #[serde(alias = "array", alias = "list")]
    Collection,
    Object,
    Function,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Source position of the declaration.
pub struct Location {
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Immutable description of one identifier declaration.
pub struct IdentifierDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "kind")]
    pub declaration_kind: Option<DeclarationKind>,
    #[serde(default)]
    pub exported: bool,
    #[serde(default)]
    pub returns_collection: Option<bool>,
    #[serde(default)]
    pub semantic_hint: Option<String>,
    #[serde(default)]
    pub value_kind: Option<ValueKind>,
    #[serde(default)]
    pub location: Option<Location>,
    /// Why the provider's record could not be read as a descriptor. Such a
    /// descriptor is reported as a diagnostic instead of being linted.
    #[serde(skip)]
    pub rejection: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Recognised tokens of the free-text semantic hint.
pub enum SemanticHint {
    BooleanFlag,
    RenderGate,
    Membership,
    EventHandler,
    ApiCall,
    Getter,
    Setter,
    Reset,
    Remove,
    Compose,
    Convert,
    Defaults,
    InitialState,
    SideEffect,
    Other(String),
}

impl SemanticHint {
    pub fn parse(token: &str) -> SemanticHint {
        let t = token.trim().to_ascii_lowercase().replace('_', "-");
        match t.as_str() {
            "boolean-flag" | "boolean" | "flag" => SemanticHint::BooleanFlag,
            "render-gate" | "render" | "visibility" => SemanticHint::RenderGate,
            "membership" | "inclusion" | "permission" => SemanticHint::Membership,
            "event-handler" | "handler" | "event" => SemanticHint::EventHandler,
            "api-call" | "fetch" | "fetcher" => SemanticHint::ApiCall,
            "getter" | "computed" | "pure" => SemanticHint::Getter,
            "setter" | "state-setter" => SemanticHint::Setter,
            "reset" | "resetter" => SemanticHint::Reset,
            "remove" | "remover" | "delete" => SemanticHint::Remove,
            "compose" | "composer" | "builder" => SemanticHint::Compose,
            "convert" | "converter" | "transform" => SemanticHint::Convert,
            "defaults" | "default-values" => SemanticHint::Defaults,
            "initial-state" | "initial" => SemanticHint::InitialState,
            "side-effect" | "effect" | "impure" => SemanticHint::SideEffect,
            _ => SemanticHint::Other(t),
        }
    }
}

impl IdentifierDescriptor {
    /// Minimal descriptor; the remaining attributes keep their defaults.
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            declaration_kind: Some(kind),
            ..Default::default()
        }
    }

    /// Placeholder for a record that is valid JSON but not a descriptor.
    pub fn rejected(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rejection: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.semantic_hint = Some(hint.into());
        self
    }

    pub fn with_returns_collection(mut self, returns_collection: bool) -> Self {
        self.returns_collection = Some(returns_collection);
        self
    }

    pub fn with_value_kind(mut self, kind: ValueKind) -> Self {
        self.value_kind = Some(kind);
        self
    }

    /// Hint tokens split on commas, `+`, `|` and whitespace.
    pub fn hints(&self) -> Vec<SemanticHint> {
        self.semantic_hint
            .as_deref()
            .unwrap_or_default()
            .split(|c: char| c == ',' || c == '+' || c == '|' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(SemanticHint::parse)
            .collect()
    }
}
