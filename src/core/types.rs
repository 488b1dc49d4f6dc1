use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Pixel rectangle that hosts series geometry inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> ChartResult<Self> {
        if !left.is_finite() || !top.is_finite() {
            return Err(ChartError::InvalidData(
                "plot area origin must be finite".to_owned(),
            ));
        }
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "plot area size must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}
