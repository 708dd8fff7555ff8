use serde::{Deserialize, Serialize};

/// Size of the design canvas in CSS pixels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// The smallest canvas the editor lets a user resize down to.
    pub const MINIMUM: CanvasSize = CanvasSize {
        width: 50,
        height: 50,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if neither side is below [`CanvasSize::MINIMUM`].
    pub fn is_valid(&self) -> bool {
        self.width >= Self::MINIMUM.width && self.height >= Self::MINIMUM.height
    }

    /// Raises each side to at least [`CanvasSize::MINIMUM`].
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(Self::MINIMUM.width),
            height: self.height.max(Self::MINIMUM.height),
        }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_is_enforced_per_side() {
        assert!(CanvasSize::new(50, 50).is_valid());
        assert!(!CanvasSize::new(49, 600).is_valid());
        assert!(!CanvasSize::new(800, 10).is_valid());
    }

    #[test]
    fn clamped_raises_small_sides_only() {
        assert_eq!(CanvasSize::new(10, 600).clamped(), CanvasSize::new(50, 600));
        assert_eq!(CanvasSize::new(800, 0).clamped(), CanvasSize::new(800, 50));
        assert!(CanvasSize::new(1, 1).clamped().is_valid());
    }
}
