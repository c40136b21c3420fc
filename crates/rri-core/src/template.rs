// # URL Templates
//
// A small subset of RFC 6570 URI templates, enough to address the reporting
// API endpoints:
//
// - `{var}`  simple expansion, everything but unreserved characters is
//   percent-encoded
// - `{+var}` reserved expansion, reserved characters pass through (used for
//   the origin so `https://host:port` survives)
// - `{/var}` path segment expansion, emits `/value`
//
// A variable that is not supplied is undefined and its expression expands to
// nothing, separator included. That is how the notification submit URL loses
// its `{/id}` segment instead of ending in a trailing slash.
//
// Templates support partial binding: `bind` replaces an expression with its
// expanded literal, `remove` drops an expression outright. Both return a new
// template and leave the original untouched.

use std::fmt;

use crate::{Error, Result};

/// Reserved characters per RFC 3986 (gen-delims and sub-delims)
const RESERVED: &str = ":/?#[]@!$&'()*+,;=";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Simple,
    Reserved,
    PathSegment,
}

impl Operator {
    fn prefix(self) -> &'static str {
        match self {
            Operator::Simple => "",
            Operator::Reserved => "+",
            Operator::PathSegment => "/",
        }
    }

    fn expand(self, value: &str) -> String {
        match self {
            Operator::Simple => urlencoding::encode(value).into_owned(),
            Operator::Reserved => encode_reserved(value),
            Operator::PathSegment => format!("/{}", urlencoding::encode(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Expression { op: Operator, name: String },
}

/// A parsed URL template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    parts: Vec<Part>,
}

impl UrlTemplate {
    /// Parse a template string
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] for an unclosed or stray brace, an empty
    /// variable name, or an operator outside `+` and `/`.
    pub fn parse(template: &str) -> Result<Self> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices();

        while let Some((start, c)) = chars.next() {
            match c {
                '{' => {
                    let mut body = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        body.push(c);
                    }
                    if !closed {
                        return Err(Error::template(format!(
                            "unclosed expression at offset {} in '{}'",
                            start, template
                        )));
                    }

                    if !literal.is_empty() {
                        parts.push(Part::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(parse_expression(&body, template)?);
                }
                '}' => {
                    return Err(Error::template(format!(
                        "unexpected '}}' at offset {} in '{}'",
                        start, template
                    )));
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }

        Ok(Self { parts })
    }

    /// Bind a variable, turning its expressions into literal text
    pub fn bind(&self, name: &str, value: &str) -> Self {
        let parts = self
            .parts
            .iter()
            .map(|part| match part {
                Part::Expression { op, name: var } if var == name => {
                    Part::Literal(op.expand(value))
                }
                other => other.clone(),
            })
            .collect();

        Self { parts }.merged()
    }

    /// Drop every expression for a variable
    ///
    /// The result is what expanding with the variable undefined would give,
    /// kept as a template so the remaining variables can still be bound.
    pub fn remove(&self, name: &str) -> Self {
        let parts = self
            .parts
            .iter()
            .filter(|part| !matches!(part, Part::Expression { name: var, .. } if var == name))
            .cloned()
            .collect();

        Self { parts }.merged()
    }

    /// Expand the template
    ///
    /// Variables missing from `vars` are undefined and expand to nothing.
    pub fn expand(&self, vars: &[(&str, &str)]) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Expression { op, name } => {
                    if let Some((_, value)) = vars.iter().find(|(var, _)| var == name) {
                        out.push_str(&op.expand(value));
                    }
                }
            }
        }
        out
    }

    /// Names of the variables still unbound, in template order
    pub fn variables(&self) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Expression { name, .. } => Some(name.as_str()),
                Part::Literal(_) => None,
            })
            .collect()
    }

    // Adjacent literals are joined so equal templates compare equal however
    // they were built.
    fn merged(self) -> Self {
        let mut parts: Vec<Part> = Vec::with_capacity(self.parts.len());
        for part in self.parts {
            if let (Some(Part::Literal(prev)), Part::Literal(text)) = (parts.last_mut(), &part) {
                prev.push_str(text);
                continue;
            }
            parts.push(part);
        }
        Self { parts }
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                Part::Literal(text) => f.write_str(text)?,
                Part::Expression { op, name } => write!(f, "{{{}{}}}", op.prefix(), name)?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for UrlTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_expression(body: &str, template: &str) -> Result<Part> {
    let (op, name) = match body.chars().next() {
        Some('+') => (Operator::Reserved, &body[1..]),
        Some('/') => (Operator::PathSegment, &body[1..]),
        _ => (Operator::Simple, body),
    };

    let valid_name = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');

    if !valid_name {
        return Err(Error::template(format!(
            "unsupported expression '{{{}}}' in '{}'",
            body, template
        )));
    }

    Ok(Part::Expression {
        op,
        name: name.to_string(),
    })
}

// Reserved characters and existing pct-encoded triplets pass through
fn encode_reserved(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut buf = [0u8; 4];
    let bytes = value.as_bytes();
    for (i, c) in value.char_indices() {
        if c == '%' {
            let triplet = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            out.push_str(if triplet { "%" } else { "%25" });
        } else if c.is_ascii_alphanumeric() || "-._~".contains(c) || RESERVED.contains(c) {
            out.push(c);
        } else {
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}
