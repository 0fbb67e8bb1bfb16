//! Labeled field extraction.

use super::rules::{LineAction, MatcherRule, first_match};

/// Result of scanning the metadata lines of one credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    /// First labeled username value, or empty.
    pub username: String,
    /// First labeled url value, or empty.
    pub url: String,
    /// Unlabeled lines joined with newlines, trimmed.
    pub fields: String,
}

/// Picks username and url out of the metadata lines.
///
/// The first labeled value of each kind wins. Later lines carrying the same
/// label are consumed without being added to the free text.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    rules: Vec<MatcherRule>,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self { rules: vec![MatcherRule::username(), MatcherRule::url()] }
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extract<'a, I>(&self, lines: I) -> ExtractedFields
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut builder = FieldsBuilder::default();
        for line in lines {
            match first_match(&self.rules, line) {
                Some((_, LineAction::Username(value))) => builder.username(value),
                Some((_, LineAction::Url(value))) => builder.url(value),
                // Exclusion runs before extraction; nothing left to drop here.
                Some((_, LineAction::Exclude)) => {}
                None => builder.residual(line),
            }
        }
        builder.finish()
    }
}

/// Accumulates one extraction; only `finish` exposes the result.
#[derive(Debug, Default)]
struct FieldsBuilder<'a> {
    username: &'a str,
    url: &'a str,
    residual: Vec<&'a str>,
}

impl<'a> FieldsBuilder<'a> {
    // An empty value does not count as captured.
    fn username(&mut self, value: &'a str) {
        if self.username.is_empty() {
            self.username = value;
        }
    }

    fn url(&mut self, value: &'a str) {
        if self.url.is_empty() {
            self.url = value;
        }
    }

    fn residual(&mut self, line: &'a str) {
        self.residual.push(line);
    }

    fn finish(self) -> ExtractedFields {
        ExtractedFields {
            username: self.username.to_string(),
            url: self.url.to_string(),
            fields: self.residual.join("\n").trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> ExtractedFields {
        FieldExtractor::new().extract(text.split('\n'))
    }

    #[test]
    fn test_extracts_user_and_url() {
        let got = extract("url: https://x.com\nuser: bob\nnotes line");
        assert_eq!(got.username, "bob");
        assert_eq!(got.url, "https://x.com");
        assert_eq!(got.fields, "notes line");
    }

    #[test]
    fn test_first_username_wins_and_rest_is_swallowed() {
        let got = extract("user: first\nnote\nlogin: second\nusername: third");
        assert_eq!(got.username, "first");
        assert_eq!(got.fields, "note");
        assert!(!got.fields.contains("second"));
        assert!(!got.fields.contains("third"));
    }

    #[test]
    fn test_first_url_wins_and_rest_is_swallowed() {
        let got = extract("url: a\nurl: b\nfree");
        assert_eq!(got.url, "a");
        assert_eq!(got.fields, "free");
    }

    #[test]
    fn test_empty_value_does_not_block_later_label() {
        let got = extract("user:\nuser: bob");
        assert_eq!(got.username, "bob");
        assert_eq!(got.fields, "");
    }

    #[test]
    fn test_pass_through_preserves_order_and_inner_whitespace() {
        let got = extract("\n  first\n\n second  \nthird\n\n");
        assert_eq!(got.fields, "first\n\n second  \nthird");
        assert!(got.username.is_empty());
        assert!(got.url.is_empty());
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(extract(""), ExtractedFields::default());
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let got = extract("USER: Bob\nUrl: HTTPS://X.COM");
        assert_eq!(got.username, "Bob");
        assert_eq!(got.url, "HTTPS://X.COM");
    }
}
