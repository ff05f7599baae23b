//! Unit registry and unit-expression parsing.
//!
//! The registry maps names, symbols and aliases to unit rows and resolves expressions such as `kilojoule/mole`,
//! `1/angstrom` or `kg*m^2/s^2` into a [`Unit`].
//!
//! # Resolution order for a single name
//!
//! 1. exact long name, alias or symbol (`mole`, `metre`, `mol`);
//! 2. SI prefix + unit, long forms together (`kilojoule`) and symbols together (`kJ`);
//! 3. a trailing plural `s` on long names (`nanometers`, `moles`).
//!
//! # Expression grammar
//!
//! ```text
//! expr     := power (('*' | '·' | '/') power)*
//! power    := primary (('**' | '^') exponent)?
//! exponent := ['+' | '-'] integer | '(' ['+' | '-'] integer ')'
//! primary  := name | number | '(' expr ')'
//! ```
//!
//! `*` and `/` are left-associative, so `J/K/mol` is `J/(K*mol)`. The empty expression is dimensionless.

use crate::dimension::Dimension;
use crate::error::{QuantityError, QuantityResult};
use crate::magnitude::Magnitude;
use crate::quantity::Quantity;
use crate::unit::Unit;
use crate::units::{self, UnitDef, PREFIXES};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static GLOBAL: Lazy<UnitRegistry> = Lazy::new(UnitRegistry::new);

#[derive(Clone, Debug)]
struct Entry {
    symbol: String,
    factor: f64,
    dimension: Dimension,
    prefixable: bool,
}

impl Entry {
    fn to_unit(&self) -> Unit {
        Unit::new(self.symbol.clone(), self.factor, self.dimension)
    }
}

/// Table of known units plus the parser that turns strings into [`Unit`]s.
///
/// ```rust
/// use prism_quantity::{Dimension, UnitRegistry};
///
/// let ureg = UnitRegistry::new();
/// let molar = ureg.parse_unit("kilojoule / mole").unwrap();
/// assert_eq!(molar.symbol(), "kJ/mol");
/// assert_eq!(molar.dimension(), Dimension::ENERGY / Dimension::SUBSTANCE);
/// assert!(ureg.parse_unit("parsnip").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnitRegistry {
    entries: Vec<Entry>,
    by_name: HashMap<String, usize>,
    by_symbol: HashMap<String, usize>,
}

impl UnitRegistry {
    /// A registry loaded with every built-in unit and constant.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for def in units::builtin() {
            registry.insert_def(def);
        }
        registry
    }

    /// A registry with no units at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared built-in registry, created on first use.
    pub fn global() -> &'static UnitRegistry {
        &GLOBAL
    }

    /// Number of unit rows (not counting aliases or prefixed forms).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no units are defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` if `name` resolves to a unit (prefixes and plurals included).
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Adds a custom unit equal to `definition`, e.g. `define("kT", "kT", 2.48 kJ/mol)`.
    ///
    /// Fails with [`QuantityError::DuplicateUnit`] if either spelling already resolves.
    pub fn define(&mut self, name: &str, symbol: &str, definition: &Quantity) -> QuantityResult<()> {
        for spelling in [name, symbol] {
            if self.resolve(spelling).is_some() {
                return Err(QuantityError::DuplicateUnit(spelling.to_string()));
            }
        }
        let index = self.entries.len();
        self.entries.push(Entry {
            symbol: symbol.to_string(),
            factor: definition.value() * definition.unit().factor(),
            dimension: definition.dimension(),
            prefixable: false,
        });
        self.by_name.insert(name.to_string(), index);
        self.by_symbol.insert(symbol.to_string(), index);
        Ok(())
    }

    /// Parses a unit expression.
    pub fn parse_unit(&self, expr: &str) -> QuantityResult<Unit> {
        let tokens = tokenize(expr)?;
        let mut parser = Parser {
            expr,
            tokens,
            pos: 0,
            registry: self,
        };
        parser.parse()
    }

    /// Builds a quantity from a magnitude and a unit expression.
    pub fn quantity<M: Magnitude>(&self, value: M, expr: &str) -> QuantityResult<Quantity<M>> {
        Ok(Quantity::new(value, self.parse_unit(expr)?))
    }

    /// Parses `"<number> <unit expression>"`, e.g. `"2.48 kJ/mol"`. A missing number means one.
    pub fn parse_quantity(&self, text: &str) -> QuantityResult<Quantity> {
        let text = text.trim();
        let (number, rest) = match text.find(char::is_whitespace) {
            Some(i) => (&text[..i], &text[i..]),
            None => (text, ""),
        };
        match number.parse::<f64>() {
            Ok(value) => self.quantity(value, rest),
            Err(_) => self.quantity(1.0, text),
        }
    }

    fn insert_def(&mut self, def: &UnitDef) {
        let index = self.entries.len();
        self.entries.push(Entry {
            symbol: def.symbol.to_string(),
            factor: def.factor,
            dimension: def.dimension,
            prefixable: def.prefixable,
        });
        self.by_name.insert(def.name.to_string(), index);
        for alias in def.aliases {
            self.by_name.insert(alias.to_string(), index);
        }
        self.by_symbol.insert(def.symbol.to_string(), index);
    }

    fn resolve(&self, name: &str) -> Option<Unit> {
        if let Some(unit) = self.resolve_named(name) {
            return Some(unit);
        }
        if let Some(&i) = self.by_symbol.get(name) {
            return Some(self.entries[i].to_unit());
        }
        for p in PREFIXES {
            if let Some(rest) = name.strip_prefix(p.symbol) {
                if let Some(unit) = self.prefixed(p.symbol, p.factor, self.by_symbol.get(rest)) {
                    return Some(unit);
                }
            }
        }
        name.strip_suffix('s')
            .filter(|stem| !stem.is_empty())
            .and_then(|stem| self.resolve_named(stem))
    }

    fn resolve_named(&self, name: &str) -> Option<Unit> {
        if let Some(&i) = self.by_name.get(name) {
            return Some(self.entries[i].to_unit());
        }
        PREFIXES.iter().find_map(|p| {
            name.strip_prefix(p.name)
                .and_then(|rest| self.prefixed(p.symbol, p.factor, self.by_name.get(rest)))
        })
    }

    fn prefixed(&self, symbol: &str, factor: f64, index: Option<&usize>) -> Option<Unit> {
        let entry = &self.entries[*index?];
        if !entry.prefixable {
            return None;
        }
        Some(Unit::new(
            format!("{}{}", symbol, entry.symbol),
            factor * entry.factor,
            entry.dimension,
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tokenizer
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Number(f64),
    Name(String),
    Mul,
    Div,
    Pow,
    Plus,
    Minus,
    LParen,
    RParen,
}

fn parse_error(expr: &str, position: usize, message: impl Into<String>) -> QuantityError {
    QuantityError::Parse {
        expr: expr.to_string(),
        position,
        message: message.into(),
    }
}

fn tokenize(expr: &str) -> QuantityResult<Vec<(usize, Token)>> {
    let bytes = expr.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(c) = expr[i..].chars().next() {
        let start = i;
        let single = match c {
            '*' if expr[i + 1..].starts_with('*') => {
                i += 1;
                Some(Token::Pow)
            }
            '*' | '·' => Some(Token::Mul),
            '/' => Some(Token::Div),
            '^' => Some(Token::Pow),
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => None,
        };
        if let Some(token) = single {
            i += c.len_utf8();
            tokens.push((start, token));
            continue;
        }

        if c.is_whitespace() {
            i += c.len_utf8();
        } else if c.is_ascii_digit() || c == '.' {
            while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
                let mut j = i + 1;
                if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                    j += 1;
                }
                if j < bytes.len() && bytes[j].is_ascii_digit() {
                    i = j;
                    while i < bytes.len() && bytes[i].is_ascii_digit() {
                        i += 1;
                    }
                }
            }
            let text = &expr[start..i];
            let value = text
                .parse::<f64>()
                .map_err(|_| parse_error(expr, start, format!("invalid number '{}'", text)))?;
            tokens.push((start, Token::Number(value)));
        } else if c.is_alphabetic() || c == '_' {
            for ch in expr[start..].chars() {
                if ch.is_alphabetic() || ch == '_' {
                    i += ch.len_utf8();
                } else {
                    break;
                }
            }
            tokens.push((start, Token::Name(expr[start..i].to_string())));
        } else {
            return Err(parse_error(expr, start, format!("unexpected character '{}'", c)));
        }
    }

    Ok(tokens)
}

// ─────────────────────────────────────────────────────────────────────────────
// Parser
// ─────────────────────────────────────────────────────────────────────────────

struct Parser<'a> {
    expr: &'a str,
    tokens: Vec<(usize, Token)>,
    pos: usize,
    registry: &'a UnitRegistry,
}

impl Parser<'_> {
    fn parse(&mut self) -> QuantityResult<Unit> {
        if self.tokens.is_empty() {
            return Ok(Unit::dimensionless());
        }
        let unit = self.parse_expr()?;
        if !(unit.factor().is_finite() && unit.factor() != 0.0) {
            return Err(parse_error(
                self.expr,
                0,
                format!("scale factor {} is out of range", unit.factor()),
            ));
        }
        match self.tokens.get(self.pos) {
            None => Ok(unit),
            Some((at, token)) => Err(parse_error(
                self.expr,
                *at,
                format!("unexpected {:?}", token),
            )),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, t)| t)
    }

    fn position(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|(at, _)| *at)
            .unwrap_or(self.expr.len())
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(_, t)| t.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> QuantityResult<()> {
        let at = self.position();
        match self.advance() {
            Some(ref t) if *t == expected => Ok(()),
            other => Err(parse_error(
                self.expr,
                at,
                format!("expected {:?}, found {:?}", expected, other),
            )),
        }
    }

    fn parse_expr(&mut self) -> QuantityResult<Unit> {
        let mut acc = self.parse_power()?;
        loop {
            match self.peek() {
                Some(Token::Mul) => {
                    self.pos += 1;
                    let rhs = self.parse_power()?;
                    acc = acc.checked_mul(&rhs)?;
                }
                Some(Token::Div) => {
                    self.pos += 1;
                    let rhs = self.parse_power()?;
                    acc = acc.checked_div(&rhs)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn parse_power(&mut self) -> QuantityResult<Unit> {
        let base = self.parse_primary()?;
        if self.peek() == Some(&Token::Pow) {
            self.pos += 1;
            let n = self.parse_exponent()?;
            return base.powi(n);
        }
        Ok(base)
    }

    fn parse_exponent(&mut self) -> QuantityResult<i8> {
        let parenthesised = self.peek() == Some(&Token::LParen);
        if parenthesised {
            self.pos += 1;
        }
        let sign = match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                -1.0
            }
            Some(Token::Plus) => {
                self.pos += 1;
                1.0
            }
            _ => 1.0,
        };
        let at = self.position();
        let value = match self.advance() {
            Some(Token::Number(v)) => sign * v,
            other => {
                return Err(parse_error(
                    self.expr,
                    at,
                    format!("expected integer exponent, found {:?}", other),
                ))
            }
        };
        if value.fract() != 0.0 || value.abs() > i8::MAX as f64 {
            return Err(parse_error(
                self.expr,
                at,
                format!("exponent {} is not a small integer", value),
            ));
        }
        if parenthesised {
            self.expect(Token::RParen)?;
        }
        Ok(value as i8)
    }

    fn parse_primary(&mut self) -> QuantityResult<Unit> {
        let at = self.position();
        match self.advance() {
            Some(Token::Name(name)) => self
                .registry
                .resolve(&name)
                .ok_or(QuantityError::UnknownUnit(name)),
            Some(Token::Number(v)) if v.is_finite() && v != 0.0 => Ok(Unit::scalar(v)),
            Some(Token::Number(v)) => Err(parse_error(
                self.expr,
                at,
                format!("numeric factor {} must be finite and non-zero", v),
            )),
            Some(Token::LParen) => {
                let inner = self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            other => Err(parse_error(
                self.expr,
                at,
                format!("expected a unit, found {:?}", other),
            )),
        }
    }
}
