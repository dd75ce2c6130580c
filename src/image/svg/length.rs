//! Length values as they appear in SVG attributes (`"120"`, `"2.5in"`).

use std::sync::LazyLock;

use regex::Regex;

/// Unit suffixes kept as-is; anything else is reported as `px`.
pub const KNOWN_UNITS: &[&str] = &["in", "mm", "cm", "pt", "pc", "px", "em", "ex"];

/// Unit used when none (or an unknown one) is given.
pub const DEFAULT_UNIT: &str = "px";

/// A number with the raw text that followed it.
#[derive(Debug, Clone, PartialEq)]
pub struct Length {
    pub value: f64,
    /// Trimmed text after the number; may be empty or an unknown unit.
    pub suffix: String,
}

impl Length {
    /// Parse the leading number of `text`, keeping the rest as suffix.
    ///
    /// Returns `None` when there is no leading number.
    pub fn parse(text: &str) -> Option<Self> {
        static RE_LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"(?s)^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)(.*)$").unwrap()
        });

        let caps = RE_LEADING_NUMBER.captures(text)?;
        let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
        let suffix = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
        Some(Self { value, suffix })
    }

    /// Like [`Length::parse`], but only finite values greater than zero.
    pub fn parse_positive(text: &str) -> Option<Self> {
        Self::parse(text).filter(Self::is_positive)
    }

    pub fn is_positive(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }

    /// Recognised unit, or `px`.
    pub fn unit(&self) -> &str {
        unit_or_default(&self.suffix)
    }
}

/// Map a raw suffix to a recognised unit, falling back to `px`.
pub fn unit_or_default(suffix: &str) -> &str {
    if KNOWN_UNITS.contains(&suffix) {
        suffix
    } else {
        DEFAULT_UNIT
    }
}
