// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface dimensions and the CSS-length configuration they come from.
//!
//! The host page configures a logo with CSS-like lengths (`"40px"`). The
//! drawing surface needs integral pixel counts. [`parse_css_length`] reads the
//! leading integer the same way a browser's `parseInt` would, and
//! [`LogoConfig`] turns a pair of lengths into [`SurfaceDimensions`].

use alloc::string::String;

use kurbo::{Point, Rect, Size};

/// Integral pixel size of a drawing surface.
///
/// The center and base radius are derived on demand rather than stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SurfaceDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceDimensions {
    /// The default logo size, 40 × 40.
    pub const DEFAULT: Self = Self::new(40, 40);

    /// Creates dimensions from a width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either side is zero. Nothing is painted on a
    /// degenerate surface.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// The base disc radius: half the width.
    #[must_use]
    pub fn radius(&self) -> f64 {
        f64::from(self.width) / 2.0
    }

    /// The size as floating point.
    #[must_use]
    pub fn to_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// The full surface rectangle at the origin.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        self.to_size().to_rect()
    }
}

/// Error parsing a CSS length.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LengthError {
    /// The input has no leading digits.
    #[error("no leading integer in CSS length {0:?}")]
    NotANumber(String),
    /// The leading integer is negative.
    #[error("negative CSS length {0:?}")]
    Negative(String),
    /// The leading integer does not fit a surface dimension.
    #[error("CSS length {0:?} is too large")]
    TooLarge(String),
}

/// Parses the leading integer of a CSS length such as `"40px"`, `" 64"` or
/// `"12.7em"`.
///
/// Like `parseInt`, leading whitespace and a sign are accepted and parsing
/// stops at the first non-digit. Units are not interpreted.
pub fn parse_css_length(input: &str) -> Result<u32, LengthError> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(LengthError::NotANumber(input.into()));
    }
    let value: u64 = rest[..digits]
        .bytes()
        .try_fold(0_u64, |acc, b| acc.checked_mul(10)?.checked_add(u64::from(b - b'0')))
        .ok_or_else(|| LengthError::TooLarge(input.into()))?;
    if negative && value != 0 {
        return Err(LengthError::Negative(input.into()));
    }
    u32::try_from(value).map_err(|_| LengthError::TooLarge(input.into()))
}

/// Configured size of one logo instance, as given by the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoConfig {
    /// CSS width, e.g. `"40px"`.
    pub width: String,
    /// CSS height, e.g. `"40px"`.
    pub height: String,
}

impl LogoConfig {
    /// Creates a configuration from CSS lengths.
    #[must_use]
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Parses both lengths.
    pub fn dimensions(&self) -> Result<SurfaceDimensions, LengthError> {
        Ok(SurfaceDimensions::new(
            parse_css_length(&self.width)?,
            parse_css_length(&self.height)?,
        ))
    }

    /// Parses both lengths, mapping an unparsable side to zero.
    ///
    /// A zero side makes the surface degenerate, so nothing is painted until
    /// the configuration is fixed. Errors are returned alongside so the caller
    /// can report them.
    #[must_use]
    pub fn dimensions_lossy(&self) -> (SurfaceDimensions, Option<LengthError>) {
        let mut error = None;
        let mut side = |css: &str| {
            parse_css_length(css).unwrap_or_else(|e| {
                error.get_or_insert(e);
                0
            })
        };
        let width = side(&self.width);
        let height = side(&self.height);
        (SurfaceDimensions::new(width, height), error)
    }
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self::new("40px", "40px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_css_length("40px"), Ok(40));
        assert_eq!(parse_css_length("  64"), Ok(64));
        assert_eq!(parse_css_length("+8px"), Ok(8));
        assert_eq!(parse_css_length("12.7em"), Ok(12));
        assert_eq!(parse_css_length("0"), Ok(0));
        assert_eq!(parse_css_length("-0px"), Ok(0));
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(matches!(parse_css_length("px40"), Err(LengthError::NotANumber(_))));
        assert!(matches!(parse_css_length(""), Err(LengthError::NotANumber(_))));
        assert!(matches!(parse_css_length("-"), Err(LengthError::NotANumber(_))));
        assert!(matches!(parse_css_length("-5px"), Err(LengthError::Negative(_))));
        assert!(matches!(
            parse_css_length("99999999999999999999999px"),
            Err(LengthError::TooLarge(_))
        ));
        assert!(matches!(parse_css_length("4294967296"), Err(LengthError::TooLarge(_))));
    }

    #[test]
    fn default_config_is_forty_square() {
        let config = LogoConfig::default();
        assert_eq!(config.dimensions(), Ok(SurfaceDimensions::DEFAULT));
    }

    #[test]
    fn lossy_dimensions_zero_bad_sides() {
        let (dims, err) = LogoConfig::new("auto", "32px").dimensions_lossy();
        assert_eq!(dims, SurfaceDimensions::new(0, 32));
        assert!(dims.is_degenerate());
        assert!(matches!(err, Some(LengthError::NotANumber(_))));

        let (dims, err) = LogoConfig::new("48px", "48px").dimensions_lossy();
        assert_eq!(dims, SurfaceDimensions::new(48, 48));
        assert_eq!(err, None);
    }

    #[test]
    fn derived_geometry() {
        let dims = SurfaceDimensions::new(40, 30);
        assert_eq!(dims.center(), Point::new(20.0, 15.0));
        assert!((dims.radius() - 20.0).abs() < f64::EPSILON);
        assert_eq!(dims.to_rect(), Rect::new(0.0, 0.0, 40.0, 30.0));
        assert!(!dims.is_degenerate());
        assert!(SurfaceDimensions::new(0, 30).is_degenerate());
    }

    #[test]
    fn error_messages_name_the_input() {
        use alloc::string::ToString;
        let msg = parse_css_length("wide").unwrap_err().to_string();
        assert!(msg.contains("\"wide\""), "{msg}");
    }
}
