// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: stroke and symbol styles

use crate::config::{default_cap_resolution, default_circle_corners, default_miter_limit};
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// End cap of an open line, also used as the fill of its interior joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCaps {
    /// Flat caps, mitered joins.
    #[default]
    Sharp,
    /// Semicircular caps, arc joins.
    Round,
    /// Flat caps, chamfered joins.
    Bevel,
}

/// Marker drawn by a point shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointSymbol {
    #[default]
    Square,
    Circle,
    Triangle,
}

impl FromStr for LineCaps {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sharp" => Ok(Self::Sharp),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            other => Err(format!("unknown cap style `{other}`")),
        }
    }
}

impl FromStr for PointSymbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "circle" => Ok(Self::Circle),
            "triangle" => Ok(Self::Triangle),
            other => Err(format!("unknown symbol `{other}`")),
        }
    }
}

/// Stroke parameters for a line ribbon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Full ribbon width. Non-positive widths produce no geometry.
    pub width: f32,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub caps: LineCaps,
    /// Arc segments per round join and per half of a round cap.
    #[serde(default = "default_cap_resolution")]
    pub cap_resolution: u32,
    /// Miter length clamp in multiples of half the width. `None` leaves
    /// sharp reversals unbounded.
    #[serde(default = "default_miter_limit")]
    pub miter_limit: Option<f32>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::WHITE,
            caps: LineCaps::default(),
            cap_resolution: default_cap_resolution(),
            miter_limit: default_miter_limit(),
        }
    }
}

impl LineStyle {
    /// Style with the given width and caps, everything else default.
    pub fn new(width: f32, caps: LineCaps) -> Self {
        Self {
            width,
            caps,
            ..Self::default()
        }
    }

    pub(crate) fn half_width(&self) -> f32 {
        0.5 * self.width
    }
}

/// Parameters for a point marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    /// Side of the square, or diameter of the polygon's circumcircle.
    pub width: f32,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub symbol: PointSymbol,
    /// Corners used for [`PointSymbol::Circle`].
    #[serde(default = "default_circle_corners")]
    pub circle_corners: u32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::WHITE,
            symbol: PointSymbol::default(),
            circle_corners: default_circle_corners(),
        }
    }
}

impl PointStyle {
    pub fn new(width: f32, symbol: PointSymbol) -> Self {
        Self {
            width,
            symbol,
            ..Self::default()
        }
    }

    /// Number of polygon corners the symbol is built from.
    pub fn corners(&self) -> u32 {
        match self.symbol {
            PointSymbol::Square => 4,
            PointSymbol::Triangle => 3,
            PointSymbol::Circle => self.circle_corners,
        }
    }
}
