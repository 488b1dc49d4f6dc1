use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

/// Category name to bar color, with a neutral fallback for unmapped categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryColorMap {
    colors: IndexMap<String, Color>,
    fallback: Color,
}

impl Default for CategoryColorMap {
    /// Department palette used by the time-sheet charts.
    fn default() -> Self {
        Self::new(Color::GRAY)
            .with_color("Bread", Color::YELLOW)
            .with_color("Butchery", Color::RED)
            .with_color("Counter", Color::BLACK)
            .with_color("Vegetables", Color::GREEN)
    }
}

impl CategoryColorMap {
    #[must_use]
    pub fn new(fallback: Color) -> Self {
        Self {
            colors: IndexMap::new(),
            fallback,
        }
    }

    #[must_use]
    pub fn with_color(mut self, category: impl Into<String>, color: Color) -> Self {
        self.colors.insert(category.into(), color);
        self
    }

    #[must_use]
    pub fn color_for(&self, category: &str) -> Color {
        self.colors.get(category).copied().unwrap_or(self.fallback)
    }

    #[must_use]
    pub fn fallback(&self) -> Color {
        self.fallback
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.fallback.validate()?;
        for color in self.colors.values() {
            color.validate()?;
        }
        Ok(())
    }
}
