//! Renders a display string by substituting selected values into a format.
//!
//! The format is split once, left to right, into literal text and
//! placeholders. Substitution then only ever touches placeholders, so a
//! value written for one component can never be re-matched as another
//! component's token.

use crate::common::ComponentKind;
use crate::token::ResolvedTokens;
use crate::value::ValueBag;

/// One piece of a parsed format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder {
        kind: ComponentKind,
        token: &'static str,
    },
}

/// A format string split into literal and placeholder segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Splits `format` at every occurrence of a resolved token.
    ///
    /// Where two tokens could start at the same position, the longer wins.
    pub fn parse(format: &str, resolved: &ResolvedTokens) -> Self {
        let mut tokens: Vec<(ComponentKind, &'static str)> = resolved.iter().collect();
        tokens.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = format;
        while let Some(ch) = rest.chars().next() {
            match tokens.iter().find(|(_, token)| rest.starts_with(token)) {
                Some(&(kind, token)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder { kind, token });
                    rest = &rest[token.len()..];
                }
                None => {
                    literal.push(ch);
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitutes `value` into every placeholder.
    ///
    /// A placeholder whose component has no value keeps its token text.
    pub fn render(&self, value: &ValueBag) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { kind, token } => {
                    out.push_str(value.get(*kind).unwrap_or(token));
                }
            }
        }
        out
    }
}

/// Renders `format` with the selected values in one step.
pub fn render(format: &str, resolved: &ResolvedTokens, value: &ValueBag) -> String {
    Template::parse(format, resolved).render(value)
}
