//! The six cube-face directions and their tangent bases.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the six axis directions of the cube that forms the planet.
///
/// Each variant names the outward normal of a cube face. The discriminant is
/// the face's slot in every per-face array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// +X face ("right").
    PosX = 0,
    /// −X face ("left").
    NegX = 1,
    /// +Y face ("top").
    PosY = 2,
    /// −Y face ("bottom").
    NegY = 3,
    /// +Z face ("front").
    PosZ = 4,
    /// −Z face ("back").
    NegZ = 5,
}

impl Direction {
    /// All six directions in canonical order.
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// Slot of this direction in a six-element per-face array.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The opposite direction (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::PosX => Direction::NegX,
            Direction::NegX => Direction::PosX,
            Direction::PosY => Direction::NegY,
            Direction::NegY => Direction::PosY,
            Direction::PosZ => Direction::NegZ,
            Direction::NegZ => Direction::PosZ,
        }
    }

    /// Outward-pointing unit normal of the face.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            Direction::PosX => Vec3::X,
            Direction::NegX => Vec3::NEG_X,
            Direction::PosY => Vec3::Y,
            Direction::NegY => Vec3::NEG_Y,
            Direction::PosZ => Vec3::Z,
            Direction::NegZ => Vec3::NEG_Z,
        }
    }

    /// First tangent axis: the grid's `x` direction on this face.
    ///
    /// A cyclic permutation `(y, z, x)` of the normal's components. It is
    /// orthogonal to the normal for every axis direction, where crossing with
    /// a single fixed helper vector would degenerate on two of the faces.
    #[must_use]
    pub fn axis_a(self) -> Vec3 {
        let n = self.normal();
        Vec3::new(n.y, n.z, n.x)
    }

    /// Second tangent axis: the grid's `y` direction, `normal × axis_a`.
    #[must_use]
    pub fn axis_b(self) -> Vec3 {
        self.normal().cross(self.axis_a())
    }

    /// Human-facing name of the face, as used by face render masks.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Direction::PosX => "right",
            Direction::NegX => "left",
            Direction::PosY => "top",
            Direction::NegY => "bottom",
            Direction::PosZ => "front",
            Direction::NegZ => "back",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names none of the six directions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?} (expected top, bottom, left, right, front, back or ±x/±y/±z)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "+x" | "x" | "posx" => Ok(Direction::PosX),
            "left" | "-x" | "negx" => Ok(Direction::NegX),
            "top" | "up" | "+y" | "y" | "posy" => Ok(Direction::PosY),
            "bottom" | "down" | "-y" | "negy" => Ok(Direction::NegY),
            "front" | "forward" | "+z" | "z" | "posz" => Ok(Direction::PosZ),
            "back" | "-z" | "negz" => Ok(Direction::NegZ),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
