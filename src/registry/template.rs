//! URI template matching for resources.
//!
//! Supports the small subset of RFC 6570 that resources need: literal text
//! interleaved with `{name}` placeholders. A placeholder matches one or more
//! characters up to the next literal and never spans a `/`. Matched values
//! are percent-decoded before they reach a handler.

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::percent_decode_str;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unterminated placeholder")]
    Unterminated,
    #[error("unexpected `}}` outside a placeholder")]
    StrayBrace,
    #[error("placeholder name cannot be empty")]
    EmptyPlaceholder,
    #[error("placeholder `{0}` appears more than once")]
    DuplicatePlaceholder(String),
    #[error("placeholders must be separated by literal text")]
    AdjacentPlaceholders,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Variable(String),
}

/// A parsed URI template such as `greeting://{name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    raw: String,
    parts: Vec<Part>,
}

impl UriTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') | None => return Err(TemplateError::Unterminated),
                            Some(c) => name.push(c),
                        }
                    }
                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder);
                    }
                    if !literal.is_empty() {
                        parts.push(Part::Literal(std::mem::take(&mut literal)));
                    } else if matches!(parts.last(), Some(Part::Variable(_))) {
                        return Err(TemplateError::AdjacentPlaceholders);
                    }
                    if parts.iter().any(|p| matches!(p, Part::Variable(v) if *v == name)) {
                        return Err(TemplateError::DuplicatePlaceholder(name));
                    }
                    parts.push(Part::Variable(name));
                }
                '}' => return Err(TemplateError::StrayBrace),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }

        Ok(Self {
            raw: template.to_string(),
            parts,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in template order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|p| match p {
            Part::Variable(name) => Some(name.as_str()),
            Part::Literal(_) => None,
        })
    }

    /// Literal text with placeholders blanked out.
    ///
    /// Two templates with the same shape match exactly the same URIs, whatever
    /// their placeholders are called.
    pub fn shape(&self) -> Vec<Option<&str>> {
        self.parts
            .iter()
            .map(|p| match p {
                Part::Literal(lit) => Some(lit.as_str()),
                Part::Variable(_) => None,
            })
            .collect()
    }

    /// Match `uri` against the whole template.
    ///
    /// Returns `None` when the URI does not fit, or when a captured value
    /// does not percent-decode to valid UTF-8.
    pub fn matches(&self, uri: &str) -> Option<Variables> {
        let mut rest = uri;
        let mut vars = BTreeMap::new();

        for (i, part) in self.parts.iter().enumerate() {
            match part {
                Part::Literal(lit) => rest = rest.strip_prefix(lit.as_str())?,
                Part::Variable(name) => {
                    // Parsing guarantees the next part, if any, is a literal.
                    let end = match self.parts.get(i + 1) {
                        Some(Part::Literal(next)) => rest.find(next.as_str())?,
                        _ => rest.len(),
                    };
                    let raw = &rest[..end];
                    if raw.is_empty() || raw.contains('/') {
                        return None;
                    }
                    let value = percent_decode_str(raw).decode_utf8().ok()?;
                    vars.insert(name.clone(), value.into_owned());
                    rest = &rest[end..];
                }
            }
        }

        rest.is_empty().then_some(Variables(vars))
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Placeholder values extracted from a matched URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Variables(BTreeMap<String, String>);

impl Variables {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
