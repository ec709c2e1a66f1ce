//! Linear RGB colour applied to face materials.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A linear RGB colour with components nominally in `[0, 1]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Colour {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
}

impl Colour {
    /// Opaque white.
    pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0);

    /// Create a colour from its components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Components as an array, e.g. for a uniform buffer.
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        assert_eq!(Colour::default(), Colour::WHITE);
        assert_eq!(Colour::WHITE.to_array(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_colour_is_three_packed_floats() {
        let c = Colour::new(0.25, 0.5, 0.75);
        let bytes: &[u8] = bytemuck::bytes_of(&c);
        assert_eq!(bytes.len(), 12);
    }
}
