//! RGB color for box visualization.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with 8-bit components, applied uniformly to a box mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxColor {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl BoxColor {
    /// Create a color from RGB components.
    ///
    /// # Example
    ///
    /// ```
    /// use bbox_types::BoxColor;
    ///
    /// let c = BoxColor::new(255, 128, 0);
    /// assert_eq!(c.g, 128);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red (255, 0, 0).
    pub const RED: Self = Self::new(255, 0, 0);

    /// Green (0, 255, 0).
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Blue (0, 0, 255).
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl Default for BoxColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<(u8, u8, u8)> for BoxColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
