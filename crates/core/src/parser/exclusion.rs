//! Noise line filtering.

use super::diagnostics::Diagnostics;
use super::rules::{DEFAULT_EXCLUDE_PATTERNS, MatcherRule, PatternError};

/// Drops metadata lines that match any exclusion pattern.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    rules: Vec<MatcherRule>,
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::with_patterns::<&str>(&[]).unwrap()
    }
}

impl ExclusionFilter {
    /// Create a filter holding the default patterns plus `extra`.
    ///
    /// Extra patterns extend the defaults, they never replace them.
    pub fn with_patterns<S: AsRef<str>>(extra: &[S]) -> Result<Self, PatternError> {
        let mut filter = Self { rules: Vec::new() };
        for pattern in DEFAULT_EXCLUDE_PATTERNS {
            filter.push(pattern)?;
        }
        for pattern in extra {
            filter.push(pattern.as_ref())?;
        }
        Ok(filter)
    }

    /// Append one more pattern.
    pub fn push(&mut self, pattern: &str) -> Result<(), PatternError> {
        self.rules.push(MatcherRule::exclusion(pattern)?);
        Ok(())
    }

    /// Source text of every active pattern, in evaluation order.
    pub fn patterns(&self) -> Vec<&str> {
        self.rules.iter().map(MatcherRule::pattern).collect()
    }

    /// Return the lines that match none of the patterns, preserving order.
    pub fn filter<'a, I>(&self, lines: I, diag: &dyn Diagnostics) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .filter(|line| match self.matching_rule(line) {
                Some(rule) => {
                    diag.line_excluded(line, rule.pattern());
                    false
                }
                None => true,
            })
            .collect()
    }

    fn matching_rule(&self, line: &str) -> Option<&MatcherRule> {
        self.rules.iter().find(|rule| rule.apply(line).is_some())
    }
}
