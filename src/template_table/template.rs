//! Brace placeholder substitution.
//!
//! Grammar: `{name}` is a placeholder, where `name` is an ASCII identifier
//! (`[A-Za-z_][A-Za-z0-9_]*`). `{{` and `}}` are literal braces. Every other use
//! of a brace is a [`TemplateError`].

use std::collections::HashMap;

use crate::resolver::TemplateError;

/// Substitutes every placeholder in `template` from `params`.
///
/// Returns `Ok(None)` when at least one placeholder has no value; a partially
/// substituted string is never returned. The whole template is scanned first, so a
/// malformed template is reported even if a parameter is also missing.
pub fn render(template: &str, params: &HashMap<String, String>) -> Result<Option<String>, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut missing = false;

    for segment in Segments::new(template) {
        match segment? {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => match params.get(name) {
                Some(value) if !missing => out.push_str(value),
                Some(_) => {}
                None => {
                    tracing::debug!(placeholder = name, "missing link parameter");
                    missing = true;
                }
            },
        }
    }

    Ok((!missing).then_some(out))
}

/// Names of the placeholders in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Result<Vec<&str>, TemplateError> {
    Segments::new(template)
        .filter_map(|segment| match segment {
            Ok(Segment::Placeholder(name)) => Some(Ok(name)),
            Ok(Segment::Literal(_)) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Splits a template into literal runs and placeholders. Stops after the first error.
struct Segments<'a> {
    src: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Segments<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, failed: false }
    }

    fn fail(&mut self, err: TemplateError) -> Option<Result<Segment<'a>, TemplateError>> {
        self.failed = true;
        Some(Err(err))
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.src.len() {
            return None;
        }

        let src = self.src;
        let start = self.pos;
        let rest = &src[start..];
        let bytes = rest.as_bytes();

        match bytes[0] {
            b'{' if bytes.get(1) == Some(&b'{') => {
                self.pos += 2;
                Some(Ok(Segment::Literal("{")))
            }
            b'}' if bytes.get(1) == Some(&b'}') => {
                self.pos += 2;
                Some(Ok(Segment::Literal("}")))
            }
            b'}' => self.fail(TemplateError::UnmatchedClose { offset: start }),
            b'{' => {
                let Some(close) = rest.find('}') else {
                    return self.fail(TemplateError::Unterminated { offset: start });
                };
                let field = &rest[1..close];
                if !is_identifier(field) {
                    return self.fail(TemplateError::InvalidField {
                        offset: start,
                        field: field.to_string(),
                    });
                }
                self.pos += close + 1;
                Some(Ok(Segment::Placeholder(field)))
            }
            _ => {
                let len = rest.find(['{', '}']).unwrap_or(rest.len());
                self.pos += len;
                Some(Ok(Segment::Literal(&rest[..len])))
            }
        }
    }
}

fn is_identifier(field: &str) -> bool {
    let mut chars = field.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
