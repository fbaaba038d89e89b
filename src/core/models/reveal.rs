//! Observation options for the reveal tracker
//!
//! Mirrors the two knobs of a browser intersection observer: the fraction of
//! the element that must be visible, and a margin that grows or shrinks the
//! viewport before intersections are computed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Rect;

/// Errors for malformed observation options
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    /// Threshold outside `[0, 1]` or not a number
    #[error("threshold must be between 0 and 1, got {0}")]
    Threshold(f64),

    /// Root margin that is not 1-4 `px`/`%` lengths
    #[error("invalid root margin: {0:?}")]
    RootMargin(String),
}

/// A single margin length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    /// Absolute CSS pixels
    Px(f64),
    /// Percentage of the viewport's extent along the same axis
    Percent(f64),
}

impl Length {
    fn parse(token: &str) -> Option<Self> {
        if let Some(value) = token.strip_suffix("px") {
            value.parse().ok().filter(|v: &f64| v.is_finite()).map(Self::Px)
        } else if let Some(value) = token.strip_suffix('%') {
            value.parse().ok().filter(|v: &f64| v.is_finite()).map(Self::Percent)
        } else if token == "0" {
            Some(Self::Px(0.0))
        } else {
            None
        }
    }

    /// Resolve against the extent of the viewport on this length's axis
    #[must_use]
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Margin applied around the viewport, CSS shorthand order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    /// Top edge offset
    pub top: Length,
    /// Right edge offset
    pub right: Length,
    /// Bottom edge offset
    pub bottom: Length,
    /// Left edge offset
    pub left: Length,
}

impl RootMargin {
    /// No margin
    pub const ZERO: Self = Self {
        top: Length::Px(0.0),
        right: Length::Px(0.0),
        bottom: Length::Px(0.0),
        left: Length::Px(0.0),
    };

    /// Parse CSS margin shorthand (`"10px"`, `"-20% 0px -70% 0px"`, ...)
    pub fn parse(input: &str) -> Result<Self, OptionsError> {
        let lengths = input
            .split_whitespace()
            .map(Length::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| OptionsError::RootMargin(input.to_string()))?;

        match lengths.as_slice() {
            [all] => Ok(Self {
                top: *all,
                right: *all,
                bottom: *all,
                left: *all,
            }),
            [vertical, horizontal] => Ok(Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(OptionsError::RootMargin(input.to_string())),
        }
    }

    /// Grow (or, for negative lengths, shrink) `root` by this margin
    #[must_use]
    pub fn apply(&self, root: &Rect) -> Rect {
        let top = self.top.resolve(root.height);
        let right = self.right.resolve(root.width);
        let bottom = self.bottom.resolve(root.height);
        let left = self.left.resolve(root.width);
        Rect::new(
            root.x - left,
            root.y - top,
            root.width + left + right,
            root.height + top + bottom,
        )
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::fmt::Display for RootMargin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl std::str::FromStr for RootMargin {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RootMargin {
    type Error = OptionsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}

/// Threshold and root margin for one observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRevealOptions")]
pub struct RevealOptions {
    threshold: f64,
    root_margin: RootMargin,
}

#[derive(Deserialize)]
struct RawRevealOptions {
    threshold: f64,
    #[serde(default)]
    root_margin: RootMargin,
}

impl TryFrom<RawRevealOptions> for RevealOptions {
    type Error = OptionsError;

    fn try_from(raw: RawRevealOptions) -> Result<Self, Self::Error> {
        Self::new(raw.threshold, raw.root_margin)
    }
}

impl RevealOptions {
    /// Threshold used by every page section
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    /// Build options, rejecting thresholds outside `[0, 1]`
    pub fn new(threshold: f64, root_margin: RootMargin) -> Result<Self, OptionsError> {
        if (0.0..=1.0).contains(&threshold) {
            Ok(Self {
                threshold,
                root_margin,
            })
        } else {
            Err(OptionsError::Threshold(threshold))
        }
    }

    /// Fraction of the element's area that must be visible
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Margin applied to the viewport
    #[must_use]
    pub const fn root_margin(&self) -> &RootMargin {
        &self.root_margin
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            root_margin: RootMargin::ZERO,
        }
    }
}
