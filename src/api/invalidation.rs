use serde::{Deserialize, Serialize};

/// Ordered repaint levels. Higher levels include the work of lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Only the selection overlay must be rebuilt.
    Overlay,
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// How the last `render` call produced its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderPass {
    /// Every layer was rebuilt.
    Full,
    /// Cached base layers were reused and only the overlay was rebuilt.
    OverlayOnly,
    /// The cached frame was submitted as-is.
    Reused,
}

#[cfg(test)]
mod tests {
    use super::InvalidationLevel;

    #[test]
    fn max_keeps_the_stronger_level() {
        assert_eq!(
            InvalidationLevel::Overlay.max(InvalidationLevel::Full),
            InvalidationLevel::Full
        );
        assert_eq!(
            InvalidationLevel::Overlay.max(InvalidationLevel::None),
            InvalidationLevel::Overlay
        );
    }
}
