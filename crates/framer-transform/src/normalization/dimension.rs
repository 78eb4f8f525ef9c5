//! Frame dimensions written as mixed fractions.
//!
//! Sizes are typed by hand in many shapes: `24`, `24.5`, `1/2`, `24 1/2`
//! and `24.1/2` all occur. They are parsed into an exact rational so the
//! whole inches and the fractional remainder can be migrated separately.

use std::fmt;

use framer_model::FractionStyle;

/// Denominators a tape measure can produce.
const MEASURE_DENOMINATORS: [i64; 4] = [2, 4, 8, 16];

/// An exact rational number in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    numer: i64,
    denom: i64,
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

impl Dimension {
    /// Build a reduced rational; a zero denominator has no value.
    pub fn new(numer: i64, denom: i64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let divisor = gcd(numer, denom).max(1);
        let sign = if denom < 0 { -1 } else { 1 };
        Some(Self {
            numer: sign * (numer / divisor),
            denom: sign * (denom / divisor),
        })
    }

    pub fn whole(value: i64) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }

    pub fn numer(self) -> i64 {
        self.numer
    }

    pub fn denom(self) -> i64 {
        self.denom
    }

    pub fn is_whole(self) -> bool {
        self.denom == 1
    }

    /// Integer part, truncated toward zero.
    pub fn trunc(self) -> i64 {
        self.numer / self.denom
    }

    /// What is left after removing the integer part; same sign as `self`.
    pub fn remainder(self) -> Self {
        Self {
            numer: self.numer % self.denom,
            denom: if self.numer % self.denom == 0 {
                1
            } else {
                self.denom
            },
        }
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        let numer = self
            .numer
            .checked_mul(other.denom)?
            .checked_add(other.numer.checked_mul(self.denom)?)?;
        Self::new(numer, self.denom.checked_mul(other.denom)?)
    }

    /// Parse a plain number or simple fraction: `24`, `-3`, `24.5`, `.5`, `3/4`.
    pub fn parse_simple(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let magnitude = if let Some((numer, denom)) = unsigned.split_once('/') {
            Self::new(parse_digits(numer)?, parse_digits(denom)?)?
        } else if let Some((int_part, frac_part)) = unsigned.split_once('.') {
            if int_part.is_empty() && frac_part.is_empty() {
                return None;
            }
            let int_value = if int_part.is_empty() {
                0
            } else {
                parse_digits(int_part)?
            };
            if frac_part.is_empty() {
                Self::whole(int_value)
            } else {
                let scale = 10_i64.checked_pow(u32::try_from(frac_part.len()).ok()?)?;
                let numer = int_value
                    .checked_mul(scale)?
                    .checked_add(parse_digits(frac_part)?)?;
                Self::new(numer, scale)?
            }
        } else {
            Self::whole(parse_digits(unsigned)?)
        };
        Some(if negative {
            Self {
                numer: -magnitude.numer,
                denom: magnitude.denom,
            }
        } else {
            magnitude
        })
    }

    /// Parse any accepted dimension spelling, including `24 1/2` and `24.1/2`.
    pub fn parse(value: &str) -> Option<Self> {
        if let Some(parsed) = Self::parse_simple(value) {
            return Some(parsed);
        }
        if !value.contains('/') || !(value.contains(' ') || value.contains('.')) {
            return None;
        }
        let mut parts = value.split([' ', '.']);
        let whole = parts.next()?.parse::<i64>().ok()?;
        let fraction = Self::parse_simple(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Self::whole(whole).checked_add(fraction)
    }
}

fn parse_digits(value: &str) -> Option<i64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/// Parse a dimension; missing when the text is not a number or fraction.
pub fn dimension(value: Option<&str>) -> Option<Dimension> {
    value.and_then(Dimension::parse)
}

/// Whole inches of a dimension.
pub fn inches(value: Option<&str>) -> Option<i64> {
    dimension(value).map(Dimension::trunc)
}

/// Fractional inches of a dimension, rendered in the given style.
pub fn fraction(value: Option<&str>, style: FractionStyle) -> Option<String> {
    let parsed = dimension(value);
    match style {
        FractionStyle::DotPrefixed => {
            let dim = parsed?;
            if !MEASURE_DENOMINATORS.contains(&dim.denom()) {
                return None;
            }
            Some(format!(".{}", dim.remainder()))
        }
        FractionStyle::QuoteSuffixed => match parsed.map(Dimension::remainder) {
            Some(rest) if rest.numer() != 0 => Some(format!(" {rest}'")),
            _ => Some("\"".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim(numer: i64, denom: i64) -> Option<Dimension> {
        Dimension::new(numer, denom)
    }

    #[test]
    fn parses_every_spelling() {
        assert_eq!(dimension(Some("24")), dim(24, 1));
        assert_eq!(dimension(Some("24.5")), dim(49, 2));
        assert_eq!(dimension(Some("1/2")), dim(1, 2));
        assert_eq!(dimension(Some("24 1/2")), dim(49, 2));
        assert_eq!(dimension(Some("24.1/2")), dim(49, 2));
        assert_eq!(dimension(Some(" 8 ")), dim(8, 1));
        assert_eq!(dimension(Some("4/8")), dim(1, 2));
    }

    #[test]
    fn rejects_garbage_and_zero_denominators() {
        assert_eq!(dimension(Some("bogus")), None);
        assert_eq!(dimension(Some("1/0")), None);
        assert_eq!(dimension(Some("24 1/0")), None);
        assert_eq!(dimension(Some("24 1 /2")), None);
        assert_eq!(dimension(Some("")), None);
        assert_eq!(dimension(None), None);
    }

    #[test]
    fn inches_truncates() {
        assert_eq!(inches(Some("24 3/4")), Some(24));
        assert_eq!(inches(Some("11.9")), Some(11));
    }

    #[test]
    fn dot_prefixed_fraction() {
        let style = FractionStyle::DotPrefixed;
        assert_eq!(fraction(Some("24 1/2"), style).as_deref(), Some(".1/2"));
        assert_eq!(fraction(Some("16.3/16"), style).as_deref(), Some(".3/16"));
        assert_eq!(fraction(Some("24"), style), None);
        assert_eq!(fraction(Some("24 1/3"), style), None);
        assert_eq!(fraction(Some("x"), style), None);
    }

    #[test]
    fn quote_suffixed_fraction() {
        let style = FractionStyle::QuoteSuffixed;
        assert_eq!(fraction(Some("24 1/2"), style).as_deref(), Some(" 1/2'"));
        assert_eq!(fraction(Some("24 1/3"), style).as_deref(), Some(" 1/3'"));
        assert_eq!(fraction(Some("24"), style).as_deref(), Some("\""));
        assert_eq!(fraction(None, style).as_deref(), Some("\""));
    }
}
