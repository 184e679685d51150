//! Built-in token acceptors for common value units.

use std::sync::Arc;

use super::TokenAcceptor;

/// Length of the numeric prefix of `text` (`[+-]? digits? (. digits)? ([eE][+-]? digits)?`),
/// or `None` if `text` does not start with a number.
fn number_prefix(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let mut digits = pos - int_start;
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > frac_start {
            digits += end - frac_start;
            pos = end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut end = pos + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exp_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > exp_start {
            pos = end;
        }
    }
    Some(pos)
}

fn is_zero(number: &str) -> bool {
    number
        .trim_start_matches(['+', '-'])
        .parse::<f64>()
        .is_ok_and(|n| n == 0.0)
}

/// Any real number.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberAcceptor;

impl TokenAcceptor for NumberAcceptor {
    fn id(&self) -> &str {
        "number"
    }

    fn accepts(&self, text: &str) -> bool {
        number_prefix(text) == Some(text.len())
    }
}

/// An optionally signed integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerAcceptor;

impl TokenAcceptor for IntegerAcceptor {
    fn id(&self) -> &str {
        "integer"
    }

    fn accepts(&self, text: &str) -> bool {
        let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    }
}

/// A number followed by one of a fixed set of units.
#[derive(Debug, Clone, Copy)]
pub struct DimensionAcceptor {
    id: &'static str,
    units: &'static [&'static str],
    /// Accept a bare `0` without a unit.
    unitless_zero: bool,
}

impl DimensionAcceptor {
    pub const fn new(id: &'static str, units: &'static [&'static str], unitless_zero: bool) -> Self {
        Self {
            id,
            units,
            unitless_zero,
        }
    }

    pub const LENGTH: Self = Self::new(
        "length",
        &[
            "px", "em", "rem", "ex", "ch", "vw", "vh", "vmin", "vmax", "cm", "mm", "q", "in", "pt",
            "pc",
        ],
        true,
    );
    pub const PERCENTAGE: Self = Self::new("percentage", &["%"], false);
    pub const TIME: Self = Self::new("time", &["s", "ms"], false);
    pub const FREQUENCY: Self = Self::new("frequency", &["hz", "khz"], false);
    pub const RESOLUTION: Self = Self::new("resolution", &["dpi", "dpcm", "dppx", "x"], false);
}

impl TokenAcceptor for DimensionAcceptor {
    fn id(&self) -> &str {
        self.id
    }

    fn accepts(&self, text: &str) -> bool {
        let Some(split) = number_prefix(text) else {
            return false;
        };
        let (number, unit) = text.split_at(split);
        if unit.is_empty() {
            return self.unitless_zero && is_zero(number);
        }
        self.units.iter().any(|u| u.eq_ignore_ascii_case(unit))
    }
}

/// Angles (`deg`, `grad`, `rad`, `turn`); unitless zero is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleAcceptor;

impl TokenAcceptor for AngleAcceptor {
    fn id(&self) -> &str {
        "angle"
    }

    fn accepts(&self, text: &str) -> bool {
        const ANGLE: DimensionAcceptor =
            DimensionAcceptor::new("angle", &["deg", "grad", "rad", "turn"], true);
        ANGLE.accepts(text)
    }
}

/// Identifiers: an optional leading `-` (or `--`), then an identifier start
/// character, then identifier characters or `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierAcceptor;

impl TokenAcceptor for IdentifierAcceptor {
    fn id(&self) -> &str {
        "identifier"
    }

    fn accepts(&self, text: &str) -> bool {
        if let Some(rest) = text.strip_prefix("--") {
            return rest
                .chars()
                .all(|c| c == '-' || c == '_' || unicode_ident::is_xid_continue(c));
        }
        let rest = text.strip_prefix('-').unwrap_or(text);
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c == '_' || unicode_ident::is_xid_start(c) => {}
            _ => return false,
        }
        chars.all(|c| c == '-' || unicode_ident::is_xid_continue(c))
    }
}

/// A single- or double-quoted string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringAcceptor;

impl TokenAcceptor for StringAcceptor {
    fn id(&self) -> &str {
        "string"
    }

    fn accepts(&self, text: &str) -> bool {
        let mut chars = text.chars();
        match (chars.next(), chars.next_back()) {
            (Some(open), Some(close)) => (open == '"' || open == '\'') && open == close,
            _ => false,
        }
    }
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashColorAcceptor;

impl TokenAcceptor for HashColorAcceptor {
    fn id(&self) -> &str {
        "hash_color"
    }

    fn accepts(&self, text: &str) -> bool {
        text.strip_prefix('#').is_some_and(|hex| {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit())
        })
    }
}

/// Every built-in acceptor.
pub fn builtin_acceptors() -> Vec<Arc<dyn TokenAcceptor>> {
    vec![
        Arc::new(NumberAcceptor),
        Arc::new(IntegerAcceptor),
        Arc::new(DimensionAcceptor::LENGTH),
        Arc::new(DimensionAcceptor::PERCENTAGE),
        Arc::new(AngleAcceptor),
        Arc::new(DimensionAcceptor::TIME),
        Arc::new(DimensionAcceptor::FREQUENCY),
        Arc::new(DimensionAcceptor::RESOLUTION),
        Arc::new(IdentifierAcceptor),
        Arc::new(StringAcceptor),
        Arc::new(HashColorAcceptor),
    ]
}
