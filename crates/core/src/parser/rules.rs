//! Line matcher rules.
//!
//! Every metadata line is dispatched through an ordered list of rules. The
//! first rule that matches decides what happens to the line; a line no rule
//! matches passes through as free text.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Default exclusion patterns applied to every credential.
pub const DEFAULT_EXCLUDE_PATTERNS: [&str; 2] = ["^---$", "^autotype ?: ?"];

/// Pattern for labeled username lines.
pub const USERNAME_PATTERN: &str = r"^\s*(username|user|login)\s*:\s*(.*)$";

/// Pattern for labeled url lines.
pub const URL_PATTERN: &str = r"^\s*(url)\s*:\s*(.*)$";

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(USERNAME_PATTERN).unwrap());

static URL_RE: LazyLock<Regex> = LazyLock::new(|| compile(URL_PATTERN).unwrap());

/// A user-supplied pattern failed to compile.
#[derive(Debug, Error)]
#[error("invalid exclusion pattern '{pattern}': {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// What a matching rule does with a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction<'a> {
    /// Drop the line entirely.
    Exclude,
    /// The line carries a username value.
    Username(&'a str),
    /// The line carries a url value.
    Url(&'a str),
}

/// A single named matcher rule.
#[derive(Debug, Clone)]
pub enum MatcherRule {
    ExclusionRule(Regex),
    UsernameRule(Regex),
    UrlRule(Regex),
}

impl MatcherRule {
    /// Build an exclusion rule from a case-insensitive pattern.
    pub fn exclusion(pattern: &str) -> Result<Self, PatternError> {
        compile(pattern)
            .map(MatcherRule::ExclusionRule)
            .map_err(|source| PatternError { pattern: pattern.to_string(), source })
    }

    pub fn username() -> Self {
        MatcherRule::UsernameRule(USERNAME_RE.clone())
    }

    pub fn url() -> Self {
        MatcherRule::UrlRule(URL_RE.clone())
    }

    /// The source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        match self {
            MatcherRule::ExclusionRule(re)
            | MatcherRule::UsernameRule(re)
            | MatcherRule::UrlRule(re) => re.as_str(),
        }
    }

    /// Apply the rule to a line, returning `None` when it does not match.
    pub fn apply<'a>(&self, line: &'a str) -> Option<LineAction<'a>> {
        match self {
            MatcherRule::ExclusionRule(re) => re.is_match(line).then_some(LineAction::Exclude),
            MatcherRule::UsernameRule(re) => {
                labeled_value(re, line).map(LineAction::Username)
            }
            MatcherRule::UrlRule(re) => labeled_value(re, line).map(LineAction::Url),
        }
    }
}

/// Run an ordered rule list over a line; the first match wins.
pub fn first_match<'a>(rules: &[MatcherRule], line: &'a str) -> Option<(usize, LineAction<'a>)> {
    rules.iter().enumerate().find_map(|(i, rule)| rule.apply(line).map(|action| (i, action)))
}

fn labeled_value<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line).map(|cap| cap.get(2).map_or("", |m| m.as_str()))
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}
