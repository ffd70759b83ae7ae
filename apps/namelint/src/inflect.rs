//! English plural heuristics for the final word of a name.

const IRREGULAR_PLURALS: &[&str] = &[
    "children", "criteria", "data", "indices", "matrices", "media", "men", "people", "women",
];

/// Nouns that name a collection even in the singular (`userList`).
const COLLECTION_NOUNS: &[&str] = &["array", "collection", "list", "map", "set"];

const SINGULAR_ENDING_IN_S: &[&str] = &[
    "alias", "always", "bus", "canvas", "gas", "news", "series", "species", "status", "this",
];

pub fn is_plural(word: &str) -> bool {
    let w = word.to_ascii_lowercase();
    if IRREGULAR_PLURALS.contains(&w.as_str()) || COLLECTION_NOUNS.contains(&w.as_str()) {
        return true;
    }
    if SINGULAR_ENDING_IN_S.contains(&w.as_str()) {
        return false;
    }
    if w.ends_with("ss") || w.ends_with("us") || w.ends_with("is") {
        return false;
    }
    w.len() > 2 && w.ends_with('s')
}

/// Plural form of a singular word, keeping its casing.
pub fn pluralize(word: &str) -> Option<String> {
    if word.is_empty() || is_plural(word) {
        return None;
    }
    let lower = word.to_ascii_lowercase();
    let consonant_y = lower.ends_with('y')
        && lower
            .chars()
            .rev()
            .nth(1)
            .is_some_and(|c| !"aeiou".contains(c));
    let out = if consonant_y {
        format!("{}ies", &word[..word.len() - 1])
    } else if ["s", "x", "z", "ch", "sh"].iter().any(|e| lower.ends_with(e)) {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    };
    Some(out)
}

/// Singular form of a regular plural, keeping its casing.
pub fn singularize(word: &str) -> Option<String> {
    let lower = word.to_ascii_lowercase();
    if !is_plural(word)
        || IRREGULAR_PLURALS.contains(&lower.as_str())
        || COLLECTION_NOUNS.contains(&lower.as_str())
    {
        return None;
    }
    if lower.ends_with("ies") {
        return Some(format!("{}y", &word[..word.len() - 3]));
    }
    let cut = if ["sses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|e| lower.ends_with(e))
    {
        2
    } else {
        1
    };
    Some(word[..word.len() - cut].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_plural() {
        assert!(is_plural("Applications"));
        assert!(is_plural("IDs"));
        assert!(is_plural("List"));
        assert!(is_plural("data"));
        assert!(!is_plural("Application"));
        assert!(!is_plural("Status"));
        assert!(!is_plural("Address"));
        assert!(!is_plural("is"));
    }

    #[test]
    fn test_pluralize_and_singularize() {
        assert_eq!(pluralize("Application").as_deref(), Some("Applications"));
        assert_eq!(pluralize("Category").as_deref(), Some("Categories"));
        assert_eq!(pluralize("Key").as_deref(), Some("Keys"));
        assert_eq!(pluralize("Box").as_deref(), Some("Boxes"));
        assert_eq!(singularize("Applications").as_deref(), Some("Application"));
        assert_eq!(singularize("Categories").as_deref(), Some("Category"));
        assert_eq!(singularize("Matches").as_deref(), Some("Match"));
        assert_eq!(singularize("people"), None);
    }
}
