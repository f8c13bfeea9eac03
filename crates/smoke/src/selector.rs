// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CSS selector subset.
//!
//! Supported syntax:
//! - type selectors (`button`) and the universal selector (`*`)
//! - `#id`, `.class`, `[attr]`, `[attr=value]`, `[attr="quoted value"]`
//! - descendant (`form input`) and child (`ul > li`) combinators
//! - selector lists (`h1, h2`)

use crate::dom::Element;
use thiserror::Error;

/// Errors produced while parsing a selector
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected '{found}' at offset {offset} in selector '{selector}'")]
    Unexpected {
        selector: String,
        found: char,
        offset: usize,
    },

    #[error("unterminated attribute selector in '{0}'")]
    UnterminatedAttribute(String),

    #[error("selector '{0}' ends unexpectedly")]
    Incomplete(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct AttrSelector {
    name: String,
    value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttrSelector>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty() && self.attributes.is_empty()
    }

    fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if tag != "*" && !tag.eq_ignore_ascii_case(el.tag()) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.get_id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attributes.iter().all(|a| match (&a.value, el.attr_value(&a.name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(expected), Some(actual)) => expected == actual,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

/// Compounds left to right; `combinators[i]` joins `compounds[i]` and
/// `compounds[i + 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
    combinators: Vec<Combinator>,
}

impl Complex {
    /// Match right to left. `ancestors` runs from the query root down to the
    /// parent of `el`.
    fn matches(&self, el: &Element, ancestors: &[&Element]) -> bool {
        self.matches_at(self.compounds.len() - 1, el, ancestors)
    }

    fn matches_at(&self, idx: usize, el: &Element, ancestors: &[&Element]) -> bool {
        if !self.compounds[idx].matches(el) {
            return false;
        }
        if idx == 0 {
            return true;
        }
        match self.combinators[idx - 1] {
            Combinator::Child => match ancestors.split_last() {
                Some((parent, rest)) => self.matches_at(idx - 1, parent, rest),
                None => false,
            },
            Combinator::Descendant => (0..ancestors.len())
                .rev()
                .any(|i| self.matches_at(idx - 1, ancestors[i], &ancestors[..i])),
        }
    }
}

/// A parsed selector list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Complex>,
}

impl Selector {
    /// Parse selector text.
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let mut alternatives = Vec::new();
        let mut parser = Parser::new(source);
        loop {
            alternatives.push(parser.complex()?);
            parser.skip_whitespace();
            match parser.peek() {
                None => break,
                Some(',') => {
                    parser.bump();
                }
                Some(c) => return Err(parser.unexpected(c)),
            }
        }
        Ok(Self {
            source: source.to_string(),
            alternatives,
        })
    }

    /// The selector text as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `el`, with the given ancestor chain, matches any alternative.
    pub fn matches(&self, el: &Element, ancestors: &[&Element]) -> bool {
        self.alternatives.iter().any(|c| c.matches(el, ancestors))
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

struct Parser<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map_or(self.source.len(), |&(offset, _)| offset)
    }

    fn unexpected(&self, found: char) -> SelectorError {
        SelectorError::Unexpected {
            selector: self.source.to_string(),
            found,
            offset: self.offset(),
        }
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn ident(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                out.push(c);
                self.pos += 1;
            } else {
                break;
            }
        }
        out
    }

    fn required_ident(&mut self) -> Result<String, SelectorError> {
        let ident = self.ident();
        if ident.is_empty() {
            return Err(match self.peek() {
                Some(c) => self.unexpected(c),
                None => SelectorError::Incomplete(self.source.to_string()),
            });
        }
        Ok(ident)
    }

    fn complex(&mut self) -> Result<Complex, SelectorError> {
        self.skip_whitespace();
        let first = self.compound()?;
        if first.is_empty() {
            return Err(match self.peek() {
                Some(c) => self.unexpected(c),
                None => SelectorError::Empty,
            });
        }
        let mut compounds = vec![first];
        let mut combinators = Vec::new();

        loop {
            let had_space = self.skip_whitespace();
            let combinator = match self.peek() {
                None | Some(',') => break,
                Some('>') => {
                    self.bump();
                    self.skip_whitespace();
                    Combinator::Child
                }
                Some(_) if had_space => Combinator::Descendant,
                Some(c) => return Err(self.unexpected(c)),
            };
            let next = self.compound()?;
            if next.is_empty() {
                return Err(match self.peek() {
                    Some(c) => self.unexpected(c),
                    None => SelectorError::Incomplete(self.source.to_string()),
                });
            }
            combinators.push(combinator);
            compounds.push(next);
        }

        Ok(Complex {
            compounds,
            combinators,
        })
    }

    fn compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();
        if self.peek() == Some('*') {
            self.bump();
            compound.tag = Some("*".to_string());
        } else {
            let tag = self.ident();
            if !tag.is_empty() {
                compound.tag = Some(tag);
            }
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.bump();
                    compound.id = Some(self.required_ident()?);
                }
                Some('.') => {
                    self.bump();
                    compound.classes.push(self.required_ident()?);
                }
                Some('[') => {
                    self.bump();
                    compound.attributes.push(self.attribute()?);
                }
                _ => return Ok(compound),
            }
        }
    }

    fn attribute(&mut self) -> Result<AttrSelector, SelectorError> {
        self.skip_whitespace();
        let name = self.required_ident()?;
        self.skip_whitespace();
        let value = match self.bump() {
            Some(']') => return Ok(AttrSelector { name, value: None }),
            Some('=') => {
                self.skip_whitespace();
                self.attribute_value()?
            }
            Some(c) => {
                self.pos -= 1;
                return Err(self.unexpected(c));
            }
            None => return Err(SelectorError::UnterminatedAttribute(self.source.to_string())),
        };
        self.skip_whitespace();
        match self.bump() {
            Some(']') => Ok(AttrSelector {
                name,
                value: Some(value),
            }),
            Some(c) => {
                self.pos -= 1;
                Err(self.unexpected(c))
            }
            None => Err(SelectorError::UnterminatedAttribute(self.source.to_string())),
        }
    }

    fn attribute_value(&mut self) -> Result<String, SelectorError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let mut out = String::new();
                loop {
                    match self.bump() {
                        Some(c) if c == quote => return Ok(out),
                        Some(c) => out.push(c),
                        None => {
                            return Err(SelectorError::UnterminatedAttribute(
                                self.source.to_string(),
                            ))
                        }
                    }
                }
            }
            _ => self.required_ident(),
        }
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
