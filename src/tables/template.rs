//! Filename template compilation
//!
//! A template is a sequence of literal text and two special tokens:
//! `{date_range}` (two 8-digit groups joined by a hyphen) and `{month}`
//! (4-digit year, hyphen, 2-digit month). Compilation escapes every literal
//! character before substituting the token regexes, so table or file names
//! containing regex metacharacters cannot inject syntax. The resulting
//! matcher is anchored to the whole base filename, compiled once and reused.

use super::error::TemplateError;
use regex::Regex;

const DATE_RANGE_TOKEN: &str = "{date_range}";
const MONTH_TOKEN: &str = "{month}";

const DATE_RANGE_RE: &str = r"\d{8}-\d{8}";
const MONTH_RE: &str = r"\d{4}-\d{2}";

/// One piece of a tokenized template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken {
    /// Literal text, matched verbatim
    Literal(String),
    /// `{date_range}` placeholder
    DateRange,
    /// `{month}` placeholder
    Month,
}

/// Split a template into literal and token pieces
///
/// Anything that is not one of the two known tokens is literal text,
/// including unrecognized `{...}` sequences.
#[must_use]
pub fn tokenize(template: &str) -> Vec<TemplateToken> {
    let mut tokens = Vec::new();
    let mut rest = template;

    while !rest.is_empty() {
        let date_range = rest.find(DATE_RANGE_TOKEN);
        let month = rest.find(MONTH_TOKEN);

        let (at, token, len) = match (date_range, month) {
            (Some(d), Some(m)) if d <= m => (d, TemplateToken::DateRange, DATE_RANGE_TOKEN.len()),
            (_, Some(m)) => (m, TemplateToken::Month, MONTH_TOKEN.len()),
            (Some(d), None) => (d, TemplateToken::DateRange, DATE_RANGE_TOKEN.len()),
            (None, None) => {
                tokens.push(TemplateToken::Literal(rest.to_string()));
                break;
            }
        };

        if at > 0 {
            tokens.push(TemplateToken::Literal(rest[..at].to_string()));
        }
        tokens.push(token);
        rest = &rest[at + len..];
    }

    tokens
}

/// An anchored matcher compiled from a filename template
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    template: String,
    regex: Regex,
}

impl CompiledPattern {
    /// Compile a template into a reusable matcher
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Empty`] for an empty template and
    /// [`TemplateError::Compile`] if the assembled regex is rejected.
    pub fn compile(template: &str) -> Result<Self, TemplateError> {
        if template.is_empty() {
            return Err(TemplateError::Empty);
        }

        let mut pattern = String::from("^");
        for token in tokenize(template) {
            match token {
                TemplateToken::Literal(text) => pattern.push_str(&regex::escape(&text)),
                TemplateToken::DateRange => pattern.push_str(DATE_RANGE_RE),
                TemplateToken::Month => pattern.push_str(MONTH_RE),
            }
        }
        pattern.push('$');

        Regex::new(&pattern)
            .map(|regex| Self {
                template: template.to_string(),
                regex,
            })
            .map_err(|e| TemplateError::Compile {
                template: template.to_string(),
                detail: e.to_string(),
            })
    }

    /// Whether `filename` instantiates this template
    ///
    /// Matching is case-sensitive and covers the whole base filename
    /// including extension, never a substring.
    #[must_use]
    pub fn matches(&self, filename: &str) -> bool {
        self.regex.is_match(filename)
    }

    /// The original template text
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }
}
