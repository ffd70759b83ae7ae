//! Spelling analysis: case style, acronym casing, contractions.
//!
//! Names are tokenized on underscores and case transitions. Digits stay
//! attached to the preceding token (`base64Encode` → `base64`, `Encode`).
//! An upper-case run is split before its last letter when a lower-case
//! letter follows (`HTTPRequest` → `HTTP`, `Request`), and a run made only of
//! configured acronyms is split into them (`APIURL` → `API`, `URL`).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_ACRONYMS: &[&str] = &[
    "API", "CSS", "DOM", "HTML", "HTTP", "HTTPS", "ID", "JSON", "SQL", "UI", "URI", "URL",
    "UUID", "XML",
];

pub const DEFAULT_CONTRACTIONS: &[&str] = &[
    "btn", "cfg", "clk", "cnt", "ctr", "err", "evt", "idx", "mgr", "msg", "pwd", "qty", "str",
    "tmp", "usr", "val",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Lexical casing convention of a literal name.
pub enum CaseStyle {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "UPPER_SNAKE_CASE")]
    UpperSnakeCase,
    #[serde(rename = "lower_snake_case")]
    LowerSnakeCase,
    #[serde(rename = "mixed")]
    Mixed,
    #[serde(rename = "single-letter")]
    SingleLetter,
    #[serde(rename = "underscored")]
    Underscored,
    #[serde(rename = "contraction-detected")]
    ContractionDetected,
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaseStyle::CamelCase => "camelCase",
            CaseStyle::PascalCase => "PascalCase",
            CaseStyle::UpperSnakeCase => "UPPER_SNAKE_CASE",
            CaseStyle::LowerSnakeCase => "lower_snake_case",
            CaseStyle::Mixed => "mixed",
            CaseStyle::SingleLetter => "single-letter",
            CaseStyle::Underscored => "underscored",
            CaseStyle::ContractionDetected => "contraction-detected",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How contraction dictionary entries are matched against a name.
pub enum ContractionMatch {
    /// Entry must equal a whole token.
    #[default]
    Token,
    /// Entry may appear anywhere in the name.
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Static input table for the analyzer.
pub struct SpellingSettings {
    pub acronyms: Vec<String>,
    pub contractions: Vec<String>,
    pub contraction_match: ContractionMatch,
}

impl Default for SpellingSettings {
    fn default() -> Self {
        Self {
            acronyms: DEFAULT_ACRONYMS.iter().map(|s| s.to_string()).collect(),
            contractions: DEFAULT_CONTRACTIONS.iter().map(|s| s.to_string()).collect(),
            contraction_match: ContractionMatch::Token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// An acronym token not written as one consistently cased unit.
pub struct AcronymMismatch {
    pub found: String,
    pub expected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Result of analyzing one name.
pub struct Spelling {
    /// Headline style: `SingleLetter` over `Underscored` over `base`.
    pub style: CaseStyle,
    /// Case classification of the name without leading underscores.
    pub base: CaseStyle,
    pub underscored: bool,
    pub single_letter: bool,
    pub tokens: Vec<String>,
    pub contractions: Vec<String>,
    pub acronym_mismatches: Vec<AcronymMismatch>,
}

impl Spelling {
    /// Whether `style` is the headline, the base or one of the flags.
    pub fn has(&self, style: CaseStyle) -> bool {
        match style {
            CaseStyle::Underscored => self.underscored,
            CaseStyle::SingleLetter => self.single_letter,
            CaseStyle::ContractionDetected => !self.contractions.is_empty(),
            other => self.style == other || self.base == other,
        }
    }

    /// Headline style followed by every non-exclusive flag that applies.
    pub fn flags(&self) -> Vec<CaseStyle> {
        let mut out = vec![self.style];
        if self.base != self.style {
            out.push(self.base);
        }
        if self.underscored && !out.contains(&CaseStyle::Underscored) {
            out.push(CaseStyle::Underscored);
        }
        if !self.contractions.is_empty() {
            out.push(CaseStyle::ContractionDetected);
        }
        out
    }

    /// No spelling-level violation at all.
    pub fn is_clean(&self) -> bool {
        !self.underscored
            && !self.single_letter
            && self.base != CaseStyle::Mixed
            && self.contractions.is_empty()
            && self.acronym_mismatches.is_empty()
    }

    /// First token, lower-cased. Verb prefixes are matched against it.
    pub fn first_word(&self) -> Option<String> {
        self.tokens.first().map(|t| t.to_ascii_lowercase())
    }

    pub fn last_word(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }
}

/// Classifies the spelling of identifiers.
#[derive(Debug, Clone)]
pub struct CaseAnalyzer {
    acronyms: HashSet<String>,
    contractions: Vec<String>,
    contraction_match: ContractionMatch,
}

impl Default for CaseAnalyzer {
    fn default() -> Self {
        Self::new(&SpellingSettings::default())
    }
}

impl CaseAnalyzer {
    pub fn new(settings: &SpellingSettings) -> Self {
        let acronyms = settings
            .acronyms
            .iter()
            .map(|a| a.trim().to_ascii_uppercase())
            .filter(|a| !a.is_empty())
            .collect();
        let mut contractions: Vec<String> = Vec::new();
        for c in &settings.contractions {
            let c = c.trim().to_ascii_lowercase();
            if !c.is_empty() && !contractions.contains(&c) {
                contractions.push(c);
            }
        }
        Self {
            acronyms,
            contractions,
            contraction_match: settings.contraction_match,
        }
    }

    /// Analyze the literal spelling of `name`.
    pub fn analyze(&self, name: &str) -> Spelling {
        let stripped = name.trim_start_matches('_');
        let underscored = stripped.len() != name.len();
        let single_letter = name.strip_prefix('_').unwrap_or(name).chars().count() == 1;
        let tokens = self.tokenize(stripped);
        let base = self.classify_base(stripped, &tokens);
        let style = if single_letter {
            CaseStyle::SingleLetter
        } else if underscored {
            CaseStyle::Underscored
        } else {
            base
        };
        let contractions = self.find_contractions(stripped, &tokens);
        let acronym_mismatches = match base {
            CaseStyle::CamelCase | CaseStyle::PascalCase => self.acronym_mismatches(&tokens),
            _ => Vec::new(),
        };
        Spelling {
            style,
            base,
            underscored,
            single_letter,
            tokens,
            contractions,
            acronym_mismatches,
        }
    }

    /// Name with every mismatched acronym upper-cased.
    pub fn acronym_fix(&self, name: &str, spelling: &Spelling) -> Option<String> {
        if spelling.acronym_mismatches.is_empty() {
            return None;
        }
        let prefix_len = name.len() - name.trim_start_matches('_').len();
        let mut out = name[..prefix_len].to_string();
        for (i, tok) in spelling.tokens.iter().enumerate() {
            let fixed = match self.acronym_key(tok) {
                Some(expected) if !(i == 0 && is_lower(tok)) => expected,
                _ => tok.clone(),
            };
            out.push_str(&fixed);
        }
        Some(out)
    }

    /// Respell the tokens of `spelling` in `target` style. Only the clean
    /// styles are produced; any other target returns `None`.
    pub fn respell(&self, spelling: &Spelling, target: CaseStyle) -> Option<String> {
        if spelling.tokens.is_empty() {
            return None;
        }
        let out = match target {
            CaseStyle::UpperSnakeCase => spelling
                .tokens
                .iter()
                .map(|t| t.to_ascii_uppercase())
                .collect::<Vec<_>>()
                .join("_"),
            CaseStyle::LowerSnakeCase => spelling
                .tokens
                .iter()
                .map(|t| t.to_ascii_lowercase())
                .collect::<Vec<_>>()
                .join("_"),
            CaseStyle::CamelCase => {
                let mut out = spelling.tokens[0].to_ascii_lowercase();
                for t in &spelling.tokens[1..] {
                    out.push_str(&self.word_case(t));
                }
                out
            }
            CaseStyle::PascalCase => spelling
                .tokens
                .iter()
                .map(|t| self.word_case(t))
                .collect(),
            _ => return None,
        };
        Some(out)
    }

    pub fn is_acronym(&self, token: &str) -> bool {
        self.acronym_key(token).is_some()
    }

    /// `IDs`, `APIs`: an acronym with a plural `s`.
    pub fn is_acronym_plural(&self, token: &str) -> bool {
        !self.acronyms.contains(&token.to_ascii_uppercase()) && self.acronym_key(token).is_some()
    }

    /// Upper-cased acronym for `token` (with a lower-case plural `s` kept),
    /// or `None` when the token is not an acronym.
    fn acronym_key(&self, token: &str) -> Option<String> {
        let upper = token.to_ascii_uppercase();
        if self.acronyms.contains(&upper) {
            return Some(upper);
        }
        let stem = token.strip_suffix('s').or_else(|| token.strip_suffix('S'))?;
        let stem_upper = stem.to_ascii_uppercase();
        if !stem.is_empty() && self.acronyms.contains(&stem_upper) {
            return Some(format!("{}s", stem_upper));
        }
        None
    }

    fn word_case(&self, token: &str) -> String {
        if let Some(acr) = self.acronym_key(token) {
            return acr;
        }
        let lower = token.to_ascii_lowercase();
        let mut chars = lower.chars();
        match chars.next() {
            Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    fn tokenize(&self, stripped: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for segment in stripped.split('_').filter(|s| !s.is_empty()) {
            let keeps_plural =
                |run: &str| self.is_acronym(run) || self.decompose_acronyms(run).is_some();
            for word in split_case(segment, keeps_plural) {
                let (body, suffix) = match word.strip_suffix('s') {
                    Some(b) if b.len() > 1 && !has_lower(b) => (b, "s"),
                    _ => (word.as_str(), ""),
                };
                if body.len() > 1 && !has_lower(body) && !self.is_acronym(body) {
                    if let Some(mut parts) = self.decompose_acronyms(body) {
                        if let Some(last) = parts.last_mut() {
                            last.push_str(suffix);
                        }
                        tokens.extend(parts);
                        continue;
                    }
                }
                tokens.push(word);
            }
        }
        tokens
    }

    /// Split an upper-case run into known acronyms, longest match first.
    fn decompose_acronyms(&self, run: &str) -> Option<Vec<String>> {
        let mut parts = Vec::new();
        let mut rest = run;
        while !rest.is_empty() {
            let len = (1..=rest.len())
                .rev()
                .find(|&n| rest.is_char_boundary(n) && self.acronyms.contains(&rest[..n]))?;
            parts.push(rest[..len].to_string());
            rest = &rest[len..];
        }
        Some(parts)
    }

    fn classify_base(&self, stripped: &str, tokens: &[String]) -> CaseStyle {
        let valid = !stripped.is_empty()
            && stripped.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && stripped.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !valid {
            return CaseStyle::Mixed;
        }
        let has_underscore = stripped.contains('_');
        if has_underscore && stripped.split('_').any(str::is_empty) {
            return CaseStyle::Mixed;
        }
        if !has_lower(stripped) {
            return CaseStyle::UpperSnakeCase;
        }
        if has_underscore {
            return if has_upper(stripped) {
                CaseStyle::Mixed
            } else {
                CaseStyle::LowerSnakeCase
            };
        }
        let inner_ok =
            |t: &String| is_capitalized(t) || self.acronym_key(t).as_deref() == Some(t.as_str());
        let Some((first, rest)) = tokens.split_first() else {
            return CaseStyle::Mixed;
        };
        if !rest.iter().all(inner_ok) {
            return CaseStyle::Mixed;
        }
        if is_lower(first) {
            CaseStyle::CamelCase
        } else if inner_ok(first) {
            CaseStyle::PascalCase
        } else {
            CaseStyle::Mixed
        }
    }

    fn find_contractions(&self, stripped: &str, tokens: &[String]) -> Vec<String> {
        match self.contraction_match {
            ContractionMatch::Token => {
                let mut hits: Vec<String> = Vec::new();
                for t in tokens {
                    if self.is_acronym(t) {
                        continue;
                    }
                    let lower = t.to_ascii_lowercase();
                    if self.contractions.contains(&lower) && !hits.contains(&lower) {
                        hits.push(lower);
                    }
                }
                hits
            }
            ContractionMatch::Substring => {
                let lower = stripped.to_ascii_lowercase();
                self.contractions
                    .iter()
                    .filter(|c| lower.contains(c.as_str()))
                    .cloned()
                    .collect()
            }
        }
    }

    fn acronym_mismatches(&self, tokens: &[String]) -> Vec<AcronymMismatch> {
        let mut out = Vec::new();
        for (i, tok) in tokens.iter().enumerate() {
            let Some(expected) = self.acronym_key(tok) else {
                continue;
            };
            // A leading acronym in camelCase is written in lower case.
            if i == 0 && is_lower(tok) {
                continue;
            }
            if *tok != expected {
                out.push(AcronymMismatch {
                    found: tok.clone(),
                    expected,
                });
            }
        }
        out
    }
}

/// Split one underscore-free segment on case transitions.
///
/// An upper-case run followed by a plural `s` (at the end of the segment or
/// before the next capital) stays whole when `keeps_plural` accepts the run,
/// so `getUserIDs` splits as `get`, `User`, `IDs`.
fn split_case(segment: &str, keeps_plural: impl Fn(&str) -> bool) -> Vec<String> {
    let chars: Vec<char> = segment.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let plural_run = prev.is_uppercase()
                && chars.get(i + 1) == Some(&'s')
                && chars.get(i + 2).map_or(true, |n| n.is_uppercase())
                && keeps_plural(&upper_run(&current, c));
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_lower && !plural_run);
            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Trailing upper-case run of `current` extended by `next`.
fn upper_run(current: &str, next: char) -> String {
    let tail: Vec<char> = current
        .chars()
        .rev()
        .take_while(|c| c.is_uppercase())
        .collect();
    tail.into_iter().rev().chain(std::iter::once(next)).collect()
}

fn has_lower(s: &str) -> bool {
    s.chars().any(char::is_lowercase)
}

fn has_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase)
}

fn is_lower(s: &str) -> bool {
    !s.is_empty() && !has_upper(s)
}

fn is_capitalized(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => !chars.any(char::is_uppercase),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(name: &str) -> Spelling {
        CaseAnalyzer::default().analyze(name)
    }

    #[test]
    fn test_clean_styles() {
        assert_eq!(analyze("sharedConstant").style, CaseStyle::CamelCase);
        assert_eq!(analyze("count").style, CaseStyle::CamelCase);
        assert_eq!(analyze("UserProfile").style, CaseStyle::PascalCase);
        assert_eq!(analyze("SHARED_CONSTANT").style, CaseStyle::UpperSnakeCase);
        assert_eq!(analyze("MAX").style, CaseStyle::UpperSnakeCase);
        assert_eq!(analyze("shared_constant").style, CaseStyle::LowerSnakeCase);
    }

    #[test]
    fn test_mixed_styles() {
        assert_eq!(analyze("my_Var").style, CaseStyle::Mixed);
        assert_eq!(analyze("SHARED__CONSTANT").style, CaseStyle::Mixed);
        assert_eq!(analyze("getABC").style, CaseStyle::Mixed);
        assert_eq!(analyze("2fast").style, CaseStyle::Mixed);
        assert_eq!(analyze("$el").style, CaseStyle::Mixed);
    }

    #[test]
    fn test_tokenize_transitions_and_digits() {
        assert_eq!(analyze("base64Encode").tokens, vec!["base64", "Encode"]);
        assert_eq!(
            analyze("XMLHttpRequest").tokens,
            vec!["XML", "Http", "Request"]
        );
        assert_eq!(analyze("getAPIURL").tokens, vec!["get", "API", "URL"]);
        assert_eq!(analyze("user_id_list").tokens, vec!["user", "id", "list"]);
    }

    #[test]
    fn test_single_letter_overrides() {
        let s = analyze("x");
        assert_eq!(s.style, CaseStyle::SingleLetter);
        assert!(s.single_letter);
        let s = analyze("_e");
        assert_eq!(s.style, CaseStyle::SingleLetter);
        assert!(s.underscored);
    }

    #[test]
    fn test_underscored_keeps_base() {
        let s = analyze("_myPrivateVariable");
        assert_eq!(s.style, CaseStyle::Underscored);
        assert_eq!(s.base, CaseStyle::CamelCase);
        assert!(s.has(CaseStyle::Underscored));
        assert!(s.has(CaseStyle::CamelCase));
        assert!(!s.is_clean());
    }

    #[test]
    fn test_contraction_detected() {
        let s = analyze("onClk");
        assert_eq!(s.style, CaseStyle::CamelCase);
        assert_eq!(s.contractions, vec!["clk"]);
        assert!(s.flags().contains(&CaseStyle::ContractionDetected));
        // whole-token matching does not fire inside longer words
        assert!(analyze("errorMessage").contractions.is_empty());
    }

    #[test]
    fn test_contraction_substring_mode() {
        let analyzer = CaseAnalyzer::new(&SpellingSettings {
            contraction_match: ContractionMatch::Substring,
            ..SpellingSettings::default()
        });
        assert_eq!(analyzer.analyze("errorMessage").contractions, vec!["err"]);
    }

    #[test]
    fn test_acronym_casing() {
        let analyzer = CaseAnalyzer::default();
        let s = analyzer.analyze("HttpRequestComponent");
        assert_eq!(s.base, CaseStyle::PascalCase);
        assert_eq!(
            s.acronym_mismatches,
            vec![AcronymMismatch {
                found: "Http".into(),
                expected: "HTTP".into()
            }]
        );
        assert_eq!(
            analyzer.acronym_fix("HttpRequestComponent", &s).as_deref(),
            Some("HTTPRequestComponent")
        );
        assert!(analyzer.analyze("HTTPRequestComponent").is_clean());
        assert!(analyzer.analyze("httpClient").is_clean());
        assert!(analyzer.analyze("userID").is_clean());
        let s = analyzer.analyze("getUserIds");
        assert_eq!(
            analyzer.acronym_fix("getUserIds", &s).as_deref(),
            Some("getUserIDs")
        );
    }

    #[test]
    fn test_plural_acronyms_stay_whole() {
        let analyzer = CaseAnalyzer::default();
        let s = analyzer.analyze("getUserIDs");
        assert_eq!(s.tokens, vec!["get", "User", "IDs"]);
        assert_eq!(s.base, CaseStyle::CamelCase);
        assert!(s.is_clean());

        let s = analyzer.analyze("fetchAPIs");
        assert_eq!(s.tokens, vec!["fetch", "APIs"]);
        assert_eq!(s.base, CaseStyle::CamelCase);
        assert!(s.is_clean());

        assert_eq!(analyzer.analyze("getURLs").tokens, vec!["get", "URLs"]);
        assert_eq!(analyzer.analyze("IDsByName").tokens, vec!["IDs", "By", "Name"]);
        assert_eq!(analyzer.analyze("HTTPAPIs").tokens, vec!["HTTP", "APIs"]);
        assert!(analyzer.is_acronym_plural("IDs"));
        assert!(!analyzer.is_acronym_plural("ID"));

        // the acronym fix for `Ids` is itself clean
        let s = analyzer.analyze("fetchUserIds");
        let fixed = analyzer.acronym_fix("fetchUserIds", &s).unwrap();
        assert_eq!(fixed, "fetchUserIDs");
        assert!(analyzer.analyze(&fixed).is_clean());
    }

    #[test]
    fn test_respell() {
        let analyzer = CaseAnalyzer::default();
        let s = analyzer.analyze("sharedApiUrl");
        assert_eq!(
            analyzer.respell(&s, CaseStyle::UpperSnakeCase).as_deref(),
            Some("SHARED_API_URL")
        );
        let s = analyzer.analyze("user_profile");
        assert_eq!(
            analyzer.respell(&s, CaseStyle::PascalCase).as_deref(),
            Some("UserProfile")
        );
        assert_eq!(
            analyzer.respell(&s, CaseStyle::CamelCase).as_deref(),
            Some("userProfile")
        );
        assert!(analyzer.respell(&s, CaseStyle::Mixed).is_none());
    }
}
