use crate::numerical;
use crate::{point, Point};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Point(")?;
        Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        Display::fmt(&self.y, f)?;
        f.write_str(")")
    }
}

/// `{ x: 100.18718, y: 200.18172 }`: coordinates are rounded to 5
/// fractional digits and printed without trailing zeros.
impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ x: {}, y: {} }}",
            numerical::format(self.x),
            numerical::format(self.y)
        )
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PointParseError {
    #[error("expected a point surrounded by braces, e.g {{ x: 1, y: 2 }}")]
    MissingBraces,
    #[error("missing field {0}")]
    MissingField(&'static str),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("unexpected trailing input: {0}")]
    TrailingInput(String),
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parses the [`Display`] form, whitespace is not significant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(PointParseError::MissingBraces)?;

        let mut fields = inner.split(',');
        let x = parse_field(fields.next(), "x")?;
        let y = parse_field(fields.next(), "y")?;

        if let Some(rest) = fields.next() {
            return Err(PointParseError::TrailingInput(rest.trim().to_string()));
        }

        Ok(point(x, y))
    }
}

fn parse_field(field: Option<&str>, name: &'static str) -> Result<f64, PointParseError> {
    let (key, value) = field
        .and_then(|f| f.split_once(':'))
        .ok_or(PointParseError::MissingField(name))?;
    if key.trim() != name {
        return Err(PointParseError::MissingField(name));
    }
    let value = value.trim();
    value
        .parse()
        .map_err(|_| PointParseError::InvalidNumber(value.to_string()))
}
