//! Role classification of identifier descriptors.
//!
//! Checks run in a fixed precedence and the first definitive match wins.
//! Only the boolean branch yields two roles: `BooleanFlag` plus its
//! refinement.

use crate::error::ClassificationError;
use crate::models::{DeclarationKind, IdentifierDescriptor, Role, SemanticHint, ValueKind};
use std::collections::BTreeSet;

pub type RoleSet = BTreeSet<Role>;

/// Default order used when several verb hints are present.
pub const DEFAULT_VERB_PRECEDENCE: [Role; 9] = [
    Role::Fetcher,
    Role::Setter,
    Role::Resetter,
    Role::Remover,
    Role::Composer,
    Role::Converter,
    Role::DefaultsProvider,
    Role::InitialState,
    Role::ComputedGetter,
];

#[derive(Debug, Clone)]
pub struct RoleClassifier {
    verb_precedence: Vec<Role>,
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self {
            verb_precedence: DEFAULT_VERB_PRECEDENCE.to_vec(),
        }
    }
}

impl RoleClassifier {
    /// Use a custom verb precedence. Verb roles missing from `order` keep
    /// their default relative order after the listed ones; non-verb roles
    /// are ignored.
    pub fn with_verb_precedence(order: &[Role]) -> Self {
        let mut verb_precedence: Vec<Role> = Vec::new();
        for r in order.iter().chain(DEFAULT_VERB_PRECEDENCE.iter()) {
            if r.is_verb_role() && !verb_precedence.contains(r) {
                verb_precedence.push(*r);
            }
        }
        Self { verb_precedence }
    }

    pub fn verb_precedence(&self) -> &[Role] {
        &self.verb_precedence
    }

    /// Determine the role set of `d`. The set may be empty.
    pub fn classify(&self, d: &IdentifierDescriptor) -> Result<RoleSet, ClassificationError> {
        if let Some(reason) = &d.rejection {
            return Err(ClassificationError::InvalidDescriptor {
                name: d.name.clone(),
                reason: reason.clone(),
            });
        }
        if d.name.trim().is_empty() {
            return Err(ClassificationError::EmptyName);
        }
        let kind = match d.declaration_kind {
            None => return Err(ClassificationError::MissingDeclarationKind(d.name.clone())),
            Some(DeclarationKind::Unknown) => {
                return Err(ClassificationError::UnknownDeclarationKind(d.name.clone()))
            }
            Some(k) => k,
        };
        let hints = d.hints();
        let has = |h: SemanticHint| hints.contains(&h);

        if d.exported && upper_snake_eligible(kind, &d.name) {
            return Ok(one(Role::ExportedConstant));
        }

        if kind == DeclarationKind::ClassOrComponent {
            return Ok(one(Role::ComponentOrConstructor));
        }

        let setter_half = kind == DeclarationKind::StatePair && has(SemanticHint::Setter);
        let boolean_state = kind == DeclarationKind::StatePair
            && d.value_kind == Some(ValueKind::Boolean)
            && !setter_half;
        if has(SemanticHint::BooleanFlag) || boolean_state {
            let refinement = if has(SemanticHint::RenderGate) {
                Role::RenderPredicate
            } else if has(SemanticHint::Membership) {
                Role::ConditionalPredicate
            } else {
                Role::StatePredicate
            };
            return Ok([Role::BooleanFlag, refinement].into_iter().collect());
        }

        if kind == DeclarationKind::Function || setter_half {
            if let Some(role) = self.verb_role(&hints) {
                return Ok(one(role));
            }
            let no_hints = hints.is_empty();
            if no_hints && d.returns_collection.is_some() {
                return Ok(one(Role::ComputedGetter));
            }
            if no_hints || has(SemanticHint::SideEffect) {
                return Ok(RoleSet::new());
            }
        }

        if has(SemanticHint::EventHandler) {
            return Ok(one(Role::EventHandler));
        }

        match kind {
            DeclarationKind::Variable | DeclarationKind::Constant | DeclarationKind::StatePair => {
                if has(SemanticHint::InitialState) {
                    Ok(one(Role::InitialState))
                } else if has(SemanticHint::Defaults) {
                    Ok(one(Role::DefaultsProvider))
                } else {
                    Ok(one(Role::PlainVariable))
                }
            }
            _ => Ok(RoleSet::new()),
        }
    }

    fn verb_role(&self, hints: &[SemanticHint]) -> Option<Role> {
        self.verb_precedence
            .iter()
            .copied()
            .find(|role| hints.iter().any(|h| verb_hint_role(h) == Some(*role)))
    }
}

fn verb_hint_role(hint: &SemanticHint) -> Option<Role> {
    match hint {
        SemanticHint::ApiCall => Some(Role::Fetcher),
        SemanticHint::Setter => Some(Role::Setter),
        SemanticHint::Reset => Some(Role::Resetter),
        SemanticHint::Remove => Some(Role::Remover),
        SemanticHint::Compose => Some(Role::Composer),
        SemanticHint::Convert => Some(Role::Converter),
        SemanticHint::Defaults => Some(Role::DefaultsProvider),
        SemanticHint::InitialState => Some(Role::InitialState),
        SemanticHint::Getter => Some(Role::ComputedGetter),
        _ => None,
    }
}

/// A value binding whose name could be written in UPPER_SNAKE_CASE.
fn upper_snake_eligible(kind: DeclarationKind, name: &str) -> bool {
    matches!(kind, DeclarationKind::Constant | DeclarationKind::Variable)
        && !name.starts_with('_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name.chars().any(|c| c.is_ascii_alphabetic())
}

fn one(role: Role) -> RoleSet {
    RoleSet::from([role])
}
