use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.557, 0.557, 0.576);
    pub const RED: Self = Self::rgb(1.0, 0.231, 0.188);
    pub const ORANGE: Self = Self::rgb(1.0, 0.584, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 0.8, 0.0);
    pub const GREEN: Self = Self::rgb(0.204, 0.78, 0.349);
    pub const BLUE: Self = Self::rgb(0.0, 0.478, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash pattern for stroked lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineDash {
    pub on_px: f64,
    pub off_px: f64,
    pub phase_px: f64,
}

impl LineDash {
    #[must_use]
    pub const fn new(on_px: f64, off_px: f64, phase_px: f64) -> Self {
        Self {
            on_px,
            off_px,
            phase_px,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.on_px.is_finite() || !self.off_px.is_finite() || !self.phase_px.is_finite() {
            return Err(ChartError::InvalidData(
                "line dash values must be finite".to_owned(),
            ));
        }
        if self.on_px <= 0.0 || self.off_px < 0.0 {
            return Err(ChartError::InvalidData(
                "line dash needs on > 0 and off >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub dash: Option<LineDash>,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            dash: None,
        }
    }

    #[must_use]
    pub const fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(dash) = self.dash {
            dash.validate()?;
        }
        self.color.validate()
    }
}

/// Filled (optionally rounded and bordered) rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space. `y` is the top of the text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub bold: bool,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            bold: false,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Rough text width used for callout and label layout before a backend measures glyphs.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * 0.6
}
