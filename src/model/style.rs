// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

/// Stroke color assumed when a path segment carries no `stroke` attribute.
pub const DEFAULT_STROKE_COLOR: &str = "black";
/// Stroke width assumed when a path segment carries no `stroke-width` attribute.
pub const DEFAULT_STROKE_WIDTH: u32 = 1;
/// Stroke color applied to the incident edges of a hovered node.
pub const EMPHASIS_STROKE_COLOR: &str = "red";
/// Stroke width applied to the incident edges of a hovered node.
pub const EMPHASIS_STROKE_WIDTH: u32 = 2;

/// The resolved stroke presentation of one path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stroke {
    color: SmolStr,
    width: u32,
}

impl Stroke {
    pub fn new(color: impl Into<SmolStr>, width: u32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    /// Resolves optional presentation attributes; absent values fall back to the defaults.
    pub fn resolve(color: Option<&str>, width: Option<u32>) -> Self {
        Self {
            color: color.map(SmolStr::new).unwrap_or_else(|| SmolStr::new_static(DEFAULT_STROKE_COLOR)),
            width: width.unwrap_or(DEFAULT_STROKE_WIDTH),
        }
    }

    /// The fixed stroke a hovered node's incident edges are restyled to.
    pub fn emphasis() -> Self {
        Self {
            color: SmolStr::new_static(EMPHASIS_STROKE_COLOR),
            width: EMPHASIS_STROKE_WIDTH,
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::Stroke;

    #[test]
    fn resolve_falls_back_to_defaults_per_attribute() {
        assert_eq!(Stroke::resolve(None, None), Stroke::new("black", 1));
        assert_eq!(Stroke::resolve(Some("#666666"), None), Stroke::new("#666666", 1));
        assert_eq!(Stroke::resolve(None, Some(3)), Stroke::new("black", 3));
        assert_eq!(Stroke::resolve(Some("blue"), Some(2)), Stroke::new("blue", 2));
    }

    #[test]
    fn emphasis_is_red_and_double_width() {
        let stroke = Stroke::emphasis();
        assert_eq!(stroke.color(), "red");
        assert_eq!(stroke.width(), 2);
    }
}
