//! Identifier roles: the semantic purpose a declaration context implies.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
/// Role assigned by the classifier. Ordering is the declaration order and
/// fixes the iteration order of role sets.
pub enum Role {
    PlainVariable,
    BooleanFlag,
    ComputedGetter,
    Setter,
    Fetcher,
    RenderPredicate,
    StatePredicate,
    ConditionalPredicate,
    EventHandler,
    Resetter,
    Remover,
    Composer,
    InitialState,
    DefaultsProvider,
    ExportedConstant,
    ComponentOrConstructor,
    Converter,
}

impl Role {
    pub const ALL: [Role; 17] = [
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
        Role::ExportedConstant,
        Role::ComponentOrConstructor,
        Role::Converter,
    ];

    /// Kebab-case name used in config files and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::PlainVariable => "plain-variable",
            Role::BooleanFlag => "boolean-flag",
            Role::ComputedGetter => "computed-getter",
            Role::Setter => "setter",
            Role::Fetcher => "fetcher",
            Role::RenderPredicate => "render-predicate",
            Role::StatePredicate => "state-predicate",
            Role::ConditionalPredicate => "conditional-predicate",
            Role::EventHandler => "event-handler",
            Role::Resetter => "resetter",
            Role::Remover => "remover",
            Role::Composer => "composer",
            Role::InitialState => "initial-state",
            Role::DefaultsProvider => "defaults-provider",
            Role::ExportedConstant => "exported-constant",
            Role::ComponentOrConstructor => "component-or-constructor",
            Role::Converter => "converter",
        }
    }

    /// Roles reachable through a verb hint on a function.
    pub fn is_verb_role(self) -> bool {
        matches!(
            self,
            Role::ComputedGetter
                | Role::Setter
                | Role::Fetcher
                | Role::Resetter
                | Role::Remover
                | Role::Composer
                | Role::Converter
                | Role::DefaultsProvider
                | Role::InitialState
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    /// Accepts kebab-case, snake_case and PascalCase spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str().replace('-', "") == folded)
            .ok_or_else(|| format!("Unknown role: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str_spellings() {
        assert_eq!("event-handler".parse::<Role>(), Ok(Role::EventHandler));
        assert_eq!("event_handler".parse::<Role>(), Ok(Role::EventHandler));
        assert_eq!("EventHandler".parse::<Role>(), Ok(Role::EventHandler));
        assert!("handler".parse::<Role>().is_err());
    }

    #[test]
    fn test_verb_roles() {
        assert!(Role::Fetcher.is_verb_role());
        assert!(!Role::EventHandler.is_verb_role());
        assert!(!Role::BooleanFlag.is_verb_role());
    }
}
